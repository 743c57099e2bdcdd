//! Proposal analyzer: which curated laws does a drafted proposal touch?

use serde::Serialize;
use tracing::debug;

use crate::matcher::{Document, KeywordOverlap, OverlapParams, Query, Ranked, rank};

/// Default number of related laws returned.
pub const DEFAULT_LIMIT: usize = 6;

/// A curated law related to the analyzed text. `score` is in `(threshold, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LawMatch {
    pub document_id: String,
    pub title: String,
    pub summary: Option<String>,
    pub url: String,
    pub score: f64,
    pub matched_terms: Vec<String>,
}

impl From<Ranked<'_>> for LawMatch {
    fn from(r: Ranked<'_>) -> Self {
        Self {
            document_id: r.document.id.clone(),
            title: r.document.title.clone(),
            summary: r.document.summary.clone(),
            url: r.document.url.clone().unwrap_or_default(),
            score: r.score,
            matched_terms: r.matched_terms,
        }
    }
}

/// Analyze `text` against `catalog` with the default overlap parameters.
pub fn analyze(text: &str, max: usize, catalog: &[Document]) -> Vec<LawMatch> {
    analyze_with(OverlapParams::default(), text, max, catalog)
}

/// Analyze `text` against `catalog`, returning at most `max` laws.
///
/// Blank text, or text made only of stopwords, returns nothing without
/// scoring.
pub fn analyze_with(
    params: OverlapParams,
    text: &str,
    max: usize,
    catalog: &[Document],
) -> Vec<LawMatch> {
    let query = Query::parse(text);
    if query.is_blank() || query.terms().is_empty() {
        debug!(target: "lexwatch::analyze", "no significant terms, skipping scoring");
        return Vec::new();
    }

    let scorer = KeywordOverlap::new(params);
    rank(&scorer, &query, catalog, max)
        .into_iter()
        .map(LawMatch::from)
        .collect()
}
