//! lexwatch tokenize - Show how text is tokenized

use clap::Args;
use serde::Serialize;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, OutputFormat, emit_human, emit_robot, robot_ok};
use crate::error::Result;
use crate::matcher::{normalize, term_set, tokenize};

#[derive(Args, Debug)]
pub struct TokenizeArgs {
    /// Text to tokenize, or `-` to read stdin
    pub text: String,
}

#[derive(Serialize)]
struct TokenizeReport {
    normalized: String,
    tokens: Vec<String>,
    terms: Vec<String>,
}

pub fn run(ctx: &AppContext, args: &TokenizeArgs) -> Result<()> {
    let text = super::read_text_arg(&args.text)?;
    let tokens = tokenize(&text);
    let report = TokenizeReport {
        normalized: normalize(&text),
        terms: term_set(&tokens),
        tokens,
    };

    match ctx.output_format {
        OutputFormat::Json => emit_robot(&robot_ok(report)),
        OutputFormat::Human => {
            let mut layout = HumanLayout::new();
            layout
                .kv("Normalized", &report.normalized)
                .kv("Tokens", &report.tokens.join(" "))
                .kv("Terms", &report.terms.join(" "));
            emit_human(layout);
            Ok(())
        }
    }
}
