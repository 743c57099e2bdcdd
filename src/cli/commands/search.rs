//! lexwatch search - Rank bulletin items for a query

use std::path::PathBuf;

use chrono::{NaiveDate, Utc};
use clap::Args;
use tracing::debug;

use crate::app::AppContext;
use crate::bulletin::{BulletinHit, SearchOptions, search};
use crate::cli::output::{HumanLayout, OutputFormat, emit_human, emit_robot, robot_ok};
use crate::corpus;
use crate::error::{LexError, Result};
use crate::matcher::parse_date;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search query
    pub query: String,

    /// Bulletin corpus file (JSON array or JSON lines); defaults to config
    #[arg(long)]
    pub corpus: Option<PathBuf>,

    /// Maximum number of results (default from config)
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Reference date for the recency bonus, as YYYYMMDD (default: today)
    #[arg(long)]
    pub today: Option<String>,

    /// Disable the recency bonus
    #[arg(long)]
    pub no_recency: bool,
}

pub fn run(ctx: &AppContext, args: &SearchArgs) -> Result<()> {
    let corpus_path = args
        .corpus
        .clone()
        .or_else(|| ctx.config.bulletin.corpus.clone())
        .ok_or_else(|| {
            LexError::InvalidArgument(
                "no corpus given (use --corpus or set bulletin.corpus in config)".to_string(),
            )
        })?;
    let docs = corpus::load(&ctx.resolve(&corpus_path))?;

    let options = SearchOptions {
        limit: args.limit.unwrap_or(ctx.config.search.limit),
        today: reference_date(args, ctx.config.search.recency)?,
        weights: ctx.config.search.weights,
    };
    let hits = search(&args.query, &docs, &options);
    debug!(target: "lexwatch::search", corpus = docs.len(), hits = hits.len(), today = ?options.today, "search complete");

    match ctx.output_format {
        OutputFormat::Json => emit_robot(&robot_ok(&hits)),
        OutputFormat::Human => {
            emit_human(render_human(&args.query, &hits));
            Ok(())
        }
    }
}

fn reference_date(args: &SearchArgs, recency_enabled: bool) -> Result<Option<NaiveDate>> {
    if args.no_recency || !recency_enabled {
        return Ok(None);
    }
    match &args.today {
        Some(raw) => parse_date(raw)
            .map(Some)
            .ok_or_else(|| LexError::InvalidArgument(format!("invalid --today {raw} (expected YYYYMMDD)"))),
        None => Ok(Some(Utc::now().date_naive())),
    }
}

fn render_human(query: &str, hits: &[BulletinHit]) -> HumanLayout {
    let mut layout = HumanLayout::new();
    layout.title(&format!("Bulletin results for \"{query}\""));

    if hits.is_empty() {
        layout.push_line("No results.");
        return layout;
    }

    for (idx, hit) in hits.iter().enumerate() {
        layout.section(&format!("{}. {}", idx + 1, hit.title));
        layout.kv("Id", &hit.document_id);
        layout.kv("Score", &format!("{:.1}", hit.score));
        if let Some(url) = &hit.web_url {
            layout.kv("Web", url);
        }
        if let Some(url) = &hit.pdf_url {
            layout.kv("PDF", url);
        }
        layout.blank();
    }
    layout
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(today: Option<&str>, no_recency: bool) -> SearchArgs {
        SearchArgs {
            query: "iva".to_string(),
            corpus: None,
            limit: None,
            today: today.map(str::to_string),
            no_recency,
        }
    }

    #[test]
    fn test_reference_date() {
        assert_eq!(
            reference_date(&args(Some("20240630"), false), true).unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 30)
        );
        assert_eq!(reference_date(&args(Some("20240630"), true), true).unwrap(), None);
        assert_eq!(reference_date(&args(None, false), false).unwrap(), None);
        assert!(reference_date(&args(None, false), true).unwrap().is_some());
        assert!(reference_date(&args(Some("2024-06-30"), false), true).is_err());
    }

    #[test]
    fn test_render_human_no_results() {
        assert!(render_human("iva", &[]).build().contains("No results."));
    }
}
