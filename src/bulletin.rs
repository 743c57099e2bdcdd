//! Bulletin search: rank items of an official bulletin summary for a query.
//!
//! The caller fetches and caches the corpus (see [`crate::corpus`]); this
//! module only scores it.

use chrono::NaiveDate;
use serde::Serialize;

use crate::matcher::{Document, FieldWeights, Query, Ranked, WeightedField, rank};

/// Default number of bulletin items returned.
pub const DEFAULT_LIMIT: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOptions {
    pub limit: usize,
    /// Reference date for the recency bonus; `None` disables it.
    pub today: Option<NaiveDate>,
    pub weights: FieldWeights,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            today: None,
            weights: FieldWeights::default(),
        }
    }
}

/// A ranked bulletin item. Scores are unbounded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BulletinHit {
    pub document_id: String,
    pub title: String,
    pub pdf_url: Option<String>,
    pub web_url: Option<String>,
    pub score: f64,
}

impl From<Ranked<'_>> for BulletinHit {
    fn from(r: Ranked<'_>) -> Self {
        Self {
            document_id: r.document.id.clone(),
            title: r.document.title.clone(),
            pdf_url: r.document.pdf_url.clone(),
            web_url: r.document.web_url.clone(),
            score: r.score,
        }
    }
}

/// Rank `corpus` for `query`. A blank query returns nothing.
pub fn search(query: &str, corpus: &[Document], options: &SearchOptions) -> Vec<BulletinHit> {
    let query = Query::parse(query);
    if query.is_blank() {
        return Vec::new();
    }

    let mut scorer = WeightedField::new(options.weights);
    if let Some(today) = options.today {
        scorer = scorer.with_reference_date(today);
    }

    rank(&scorer, &query, corpus, options.limit)
        .into_iter()
        .map(BulletinHit::from)
        .collect()
}
