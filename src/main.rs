//! lexwatch - legislative text matching CLI
//!
//! Relates drafted proposals to curated laws and ranks bulletin items.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use lexwatch::app::AppContext;
use lexwatch::cli::output::{emit_robot, robot_error};
use lexwatch::cli::{Cli, OutputFormat};
use lexwatch::config::Config;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let ctx = AppContext::from_cli(&cli);
    let robot = match &ctx {
        Ok(ctx) => ctx.is_robot(),
        Err(_) => fallback_robot(&cli),
    };
    init_tracing(&cli, robot);

    let result = ctx.and_then(|ctx| lexwatch::cli::commands::run(&ctx, &cli.command));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if robot {
                // Robot mode: JSON error output to stdout
                let response = robot_error(e.code(), e.to_string());
                if emit_robot(&response).is_err() {
                    eprintln!("Error: {e}");
                }
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::FAILURE
        }
    }
}

/// Output mode when the configuration itself failed to load: flags first,
/// then the environment.
fn fallback_robot(cli: &Cli) -> bool {
    let format = cli.output_format().or_else(|| {
        Config::env_output_format().and_then(|raw| raw.parse::<OutputFormat>().ok())
    });
    matches!(format, Some(OutputFormat::Json))
}

fn init_tracing(cli: &Cli, robot: bool) {
    if cli.quiet {
        return;
    }

    let filter = match cli.verbose {
        0 => "warn,lexwatch=info",
        1 => "info,lexwatch=debug",
        2 => "debug,lexwatch=trace",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if robot {
        // JSON logging for robot mode
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
