//! lexwatch laws - List the curated law catalog

use std::path::PathBuf;

use clap::Args;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, OutputFormat, emit_human, emit_robot, robot_ok};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct LawsArgs {
    /// Law catalog file (JSON array or JSON lines)
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

pub fn run(ctx: &AppContext, args: &LawsArgs) -> Result<()> {
    let catalog = ctx.catalog(args.catalog.as_deref())?;

    match ctx.output_format {
        OutputFormat::Json => emit_robot(&robot_ok(catalog.laws())),
        OutputFormat::Human => {
            let mut layout = HumanLayout::new();
            layout.title(&format!("Law catalog ({} laws)", catalog.len()));
            for law in catalog.laws() {
                layout.section(&law.title);
                layout.kv("Id", &law.id);
                layout.kv("Keywords", &law.keywords.join(", "));
                if let Some(url) = &law.url {
                    layout.kv("Link", url);
                }
                layout.blank();
            }
            emit_human(layout);
            Ok(())
        }
    }
}
