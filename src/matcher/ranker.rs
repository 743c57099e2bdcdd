//! Corpus ranking: score, filter, stable sort, truncate.

use std::panic::{AssertUnwindSafe, catch_unwind};

use tracing::{debug, warn};

use super::document::Document;
use super::scorer::{Query, Scored, Scorer};

/// A document with its score for one query.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranked<'a> {
    pub document: &'a Document,
    pub score: f64,
    pub matched_terms: Vec<String>,
}

/// Rank `corpus` against `query` and return at most `limit` results.
///
/// Every document is scored independently. Scores at or below the scorer's
/// threshold are dropped, the rest are sorted by descending score with ties
/// kept in corpus order.
pub fn rank<'a, S>(scorer: &S, query: &Query, corpus: &'a [Document], limit: usize) -> Vec<Ranked<'a>>
where
    S: Scorer + ?Sized,
{
    if limit == 0 || corpus.is_empty() {
        return Vec::new();
    }

    let threshold = scorer.threshold();
    let mut ranked: Vec<Ranked<'a>> = corpus
        .iter()
        .map(|document| {
            let Scored {
                score,
                matched_terms,
            } = score_one(scorer, query, document);
            Ranked {
                document,
                score: contain(score, scorer.name(), &document.id),
                matched_terms,
            }
        })
        .filter(|r| threshold.is_none_or(|t| r.score > t))
        .collect();

    let kept = ranked.len();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked.truncate(limit);

    debug!(
        target: "lexwatch::matcher",
        policy = scorer.name(),
        corpus = corpus.len(),
        kept,
        returned = ranked.len(),
        "ranked corpus"
    );
    ranked
}

/// Score one document. A scorer that panics on it yields score 0 for that
/// document only.
fn score_one<S>(scorer: &S, query: &Query, document: &Document) -> Scored
where
    S: Scorer + ?Sized,
{
    catch_unwind(AssertUnwindSafe(|| scorer.score(query, document))).unwrap_or_else(|_| {
        warn!(
            target: "lexwatch::matcher",
            policy = scorer.name(),
            document_id = %document.id,
            "scorer panicked, score replaced with 0"
        );
        Scored::zero()
    })
}

/// Replace a non-finite or negative score with 0 so one bad document cannot
/// disturb the ordering of the batch.
fn contain(score: f64, policy: &str, document_id: &str) -> f64 {
    if score.is_finite() && score >= 0.0 {
        score
    } else {
        warn!(target: "lexwatch::matcher", policy, document_id, score, "invalid score replaced with 0");
        0.0
    }
}
