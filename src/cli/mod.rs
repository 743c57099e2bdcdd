//! Command-line interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod commands;
pub mod output;

pub use output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "lexwatch", version, about = "Match legislative proposals and bulletin items")]
pub struct Cli {
    /// Machine-readable JSON output (implies --format json)
    #[arg(long, global = true)]
    pub robot: bool,

    /// Output format
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable logging
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Config file (replaces global and project config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Effective output format; `--robot` wins over `--format`.
    pub fn output_format(&self) -> Option<OutputFormat> {
        if self.robot {
            Some(OutputFormat::Json)
        } else {
            self.format
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find curated laws related to a drafted proposal
    Analyze(commands::analyze::AnalyzeArgs),

    /// Rank bulletin items for a query
    Search(commands::search::SearchArgs),

    /// Show how text is tokenized
    Tokenize(commands::tokenize::TokenizeArgs),

    /// List the curated law catalog
    Laws(commands::laws::LawsArgs),
}
