//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - run() function to execute the command

pub mod analyze;
pub mod laws;
pub mod search;
pub mod tokenize;

use std::io::Read;

use crate::app::AppContext;
use crate::cli::Commands;
use crate::error::{LexError, Result};

/// Dispatch a command to its handler
pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Analyze(args) => analyze::run(ctx, args),
        Commands::Search(args) => search::run(ctx, args),
        Commands::Tokenize(args) => tokenize::run(ctx, args),
        Commands::Laws(args) => laws::run(ctx, args),
    }
}

/// Resolve a text argument, reading stdin when it is `-`.
pub(crate) fn read_text_arg(value: &str) -> Result<String> {
    if value != "-" {
        return Ok(value.to_string());
    }
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .map_err(|err| LexError::InvalidArgument(format!("read stdin: {err}")))?;
    Ok(buf)
}
