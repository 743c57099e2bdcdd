//! lexwatch analyze - Find curated laws related to a proposal

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use tracing::debug;

use crate::analyze::{LawMatch, analyze_with};
use crate::app::AppContext;
use crate::cli::output::{HumanLayout, OutputFormat, emit_human, emit_robot, robot_ok};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Proposal text, or `-` to read stdin
    pub text: String,

    /// Maximum number of laws (default from config)
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Law catalog file (JSON array or JSON lines)
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

#[derive(Serialize)]
struct AnalyzeReport<'a> {
    terms: &'a [String],
    matches: &'a [LawMatch],
}

pub fn run(ctx: &AppContext, args: &AnalyzeArgs) -> Result<()> {
    let text = super::read_text_arg(&args.text)?;
    let catalog = ctx.catalog(args.catalog.as_deref())?;
    let limit = args.limit.unwrap_or(ctx.config.analyze.limit);

    let matches = analyze_with(ctx.config.overlap_params(), &text, limit, catalog.laws());
    let terms = crate::matcher::term_set(&crate::matcher::tokenize(&text));
    debug!(target: "lexwatch::analyze", terms = terms.len(), matches = matches.len(), limit, "analysis complete");

    match ctx.output_format {
        OutputFormat::Json => emit_robot(&robot_ok(AnalyzeReport {
            terms: &terms,
            matches: &matches,
        })),
        OutputFormat::Human => {
            emit_human(render_human(&terms, &matches));
            Ok(())
        }
    }
}

fn render_human(terms: &[String], matches: &[LawMatch]) -> HumanLayout {
    let mut layout = HumanLayout::new();
    layout.title("Related laws");
    layout.kv("Terms", &terms.join(", "));
    layout.blank();

    if matches.is_empty() {
        layout.push_line("No related laws found.");
        return layout;
    }

    for (idx, m) in matches.iter().enumerate() {
        layout.section(&format!("{}. {}", idx + 1, m.title));
        layout.kv("Score", &format!("{:.0}%", m.score * 100.0));
        layout.kv("Matched", &m.matched_terms.join(", "));
        if let Some(summary) = &m.summary {
            layout.kv("Objective", summary);
        }
        if !m.url.is_empty() {
            layout.kv("Link", &m.url);
        }
        layout.blank();
    }
    layout
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_human_empty() {
        let out = render_human(&[], &[]).build();
        assert!(out.contains("No related laws found."));
    }

    #[test]
    fn test_render_human_match() {
        let m = LawMatch {
            document_id: "iva".to_string(),
            title: "Ley de IVA".to_string(),
            summary: None,
            url: "https://www.boe.es/iva".to_string(),
            score: 0.58,
            matched_terms: vec!["iva".to_string()],
        };
        let out = render_human(&["iva".to_string()], &[m]).build();
        assert!(out.contains("1. Ley de IVA"));
        assert!(out.contains("58%"));
        assert!(out.contains("https://www.boe.es/iva"));
    }
}
