//! Relevance scoring policies.
//!
//! Two policies share the [`Scorer`] trait:
//!
//! - [`KeywordOverlap`] compares query terms with a document's keyword
//!   phrases and yields a bounded score in `[0, 1]`. Used by the proposal
//!   analyzer.
//! - [`WeightedField`] adds fixed weights for title/summary substring hits
//!   plus a recency bonus. Unbounded. Used by bulletin search.
//!
//! Callers pick one through [`ScoringPolicy`].

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::document::Document;
use super::tokenizer::{term_set, tokenize};

/// A query prepared once per request and shared across all documents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    raw: String,
    tokens: Vec<String>,
    terms: Vec<String>,
    joined: String,
}

impl Query {
    pub fn parse(text: &str) -> Self {
        let tokens = tokenize(text);
        let terms = term_set(&tokens);
        let joined = tokens.join(" ");
        Self {
            raw: text.to_string(),
            tokens,
            terms,
            joined,
        }
    }

    /// The query as typed.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Tokenizer output, duplicates included.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Distinct terms in first-seen order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Tokens joined by single spaces.
    pub fn joined(&self) -> &str {
        &self.joined
    }

    /// True when the raw text is empty or whitespace.
    pub fn is_blank(&self) -> bool {
        self.raw.trim().is_empty()
    }
}

/// Score for one document plus the query terms that contributed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scored {
    pub score: f64,
    pub matched_terms: Vec<String>,
}

impl Scored {
    pub const fn zero() -> Self {
        Self {
            score: 0.0,
            matched_terms: Vec::new(),
        }
    }
}

/// A relevance policy.
pub trait Scorer: Send + Sync {
    /// Short policy name for logs.
    fn name(&self) -> &'static str;

    /// Score `doc` against `query`. [`rank`](super::rank) scores a panicking
    /// document as 0.
    fn score(&self, query: &Query, doc: &Document) -> Scored;

    /// Results at or below this score are dropped before ranking.
    fn threshold(&self) -> Option<f64> {
        None
    }
}

/// Parameters for [`KeywordOverlap`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlapParams {
    /// Lower bound of the overlap divisor.
    pub min_divisor: f64,
    /// Added per keyword phrase found verbatim in the query.
    pub phrase_boost: f64,
    /// Scores at or below this are discarded.
    pub threshold: f64,
}

impl Default for OverlapParams {
    fn default() -> Self {
        Self {
            min_divisor: 3.0,
            phrase_boost: 0.25,
            threshold: 0.1,
        }
    }
}

/// Keyword-overlap policy used by the proposal analyzer.
///
/// `score = min(1, overlap / max(min_divisor, sqrt(|keyword terms|)) + phrase boosts)`
#[derive(Debug, Clone, Default)]
pub struct KeywordOverlap {
    params: OverlapParams,
}

impl KeywordOverlap {
    pub const fn new(params: OverlapParams) -> Self {
        Self { params }
    }

    pub const fn params(&self) -> &OverlapParams {
        &self.params
    }
}

impl Scorer for KeywordOverlap {
    fn name(&self) -> &'static str {
        "keyword_overlap"
    }

    fn score(&self, query: &Query, doc: &Document) -> Scored {
        if query.terms().is_empty() || doc.keywords.is_empty() {
            return Scored::zero();
        }

        let phrases: Vec<Vec<String>> = doc.keywords.iter().map(|kw| tokenize(kw)).collect();
        let keyword_terms: HashSet<&str> = phrases.iter().flatten().map(String::as_str).collect();

        let matched_terms: Vec<String> = query
            .terms()
            .iter()
            .filter(|term| keyword_terms.contains(term.as_str()))
            .cloned()
            .collect();

        let boost: f64 = phrases
            .iter()
            .filter(|phrase| !phrase.is_empty())
            .filter(|phrase| query.joined().contains(phrase.join(" ").as_str()))
            .map(|_| self.params.phrase_boost)
            .sum();

        #[allow(clippy::cast_precision_loss)]
        let divisor = self.params.min_divisor.max((keyword_terms.len() as f64).sqrt());
        #[allow(clippy::cast_precision_loss)]
        let overlap = matched_terms.len() as f64;

        Scored {
            score: (overlap / divisor + boost).min(1.0),
            matched_terms,
        }
    }

    fn threshold(&self) -> Option<f64> {
        Some(self.params.threshold)
    }
}

/// Weights for [`WeightedField`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldWeights {
    pub exact_title: f64,
    pub title_phrase: f64,
    pub summary_phrase: f64,
    pub title_term: f64,
    pub summary_term: f64,
    /// Published less than 30 days before the reference date.
    pub recent_month: f64,
    /// Published less than 365 days before the reference date.
    pub recent_year: f64,
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self {
            exact_title: 100.0,
            title_phrase: 50.0,
            summary_phrase: 10.0,
            title_term: 8.0,
            summary_term: 2.0,
            recent_month: 10.0,
            recent_year: 4.0,
        }
    }
}

/// Weighted field-match policy used by bulletin search.
///
/// Matching is case-insensitive on the trimmed query. The recency bonus only
/// applies when a reference date is set, which keeps scoring a pure function
/// of its inputs.
#[derive(Debug, Clone, Default)]
pub struct WeightedField {
    weights: FieldWeights,
    today: Option<NaiveDate>,
}

impl WeightedField {
    pub const fn new(weights: FieldWeights) -> Self {
        Self {
            weights,
            today: None,
        }
    }

    /// Enable the recency bonus relative to `today`.
    #[must_use]
    pub const fn with_reference_date(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub const fn reference_date(&self) -> Option<NaiveDate> {
        self.today
    }

    fn recency_bonus(&self, doc: &Document) -> f64 {
        let (Some(today), Some(published)) = (self.today, doc.date.as_deref().and_then(parse_date))
        else {
            return 0.0;
        };
        let days = (today - published).num_days();
        if days < 30 {
            self.weights.recent_month
        } else if days < 365 {
            self.weights.recent_year
        } else {
            0.0
        }
    }
}

impl Scorer for WeightedField {
    fn name(&self) -> &'static str {
        "weighted_field"
    }

    fn score(&self, query: &Query, doc: &Document) -> Scored {
        let needle = query.raw().trim().to_lowercase();
        if needle.is_empty() {
            return Scored::zero();
        }
        let title = doc.title.trim().to_lowercase();
        let summary = doc.summary_text().to_lowercase();
        let w = &self.weights;

        let mut score = 0.0;
        if title == needle {
            score += w.exact_title;
        }
        if title.contains(&needle) {
            score += w.title_phrase;
        }
        if summary.contains(&needle) {
            score += w.summary_phrase;
        }

        let mut matched_terms = Vec::new();
        for term in needle.split_whitespace() {
            let in_title = title.contains(term);
            let in_summary = summary.contains(term);
            if in_title {
                score += w.title_term;
            }
            if in_summary {
                score += w.summary_term;
            }
            if (in_title || in_summary) && !matched_terms.iter().any(|t| t == term) {
                matched_terms.push(term.to_string());
            }
        }

        score += self.recency_bonus(doc);

        Scored {
            score,
            matched_terms,
        }
    }
}

/// Parse an 8-digit `YYYYMMDD` date; anything else is ignored.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.len() != 8 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y%m%d").ok()
}

/// Caller-selected scoring strategy.
#[derive(Debug, Clone)]
pub enum ScoringPolicy {
    KeywordOverlap(KeywordOverlap),
    WeightedField(WeightedField),
}

impl ScoringPolicy {
    pub fn keyword_overlap() -> Self {
        Self::KeywordOverlap(KeywordOverlap::default())
    }

    pub fn weighted_field() -> Self {
        Self::WeightedField(WeightedField::default())
    }
}

impl Scorer for ScoringPolicy {
    fn name(&self) -> &'static str {
        match self {
            Self::KeywordOverlap(inner) => inner.name(),
            Self::WeightedField(inner) => inner.name(),
        }
    }

    fn score(&self, query: &Query, doc: &Document) -> Scored {
        match self {
            Self::KeywordOverlap(inner) => inner.score(query, doc),
            Self::WeightedField(inner) => inner.score(query, doc),
        }
    }

    fn threshold(&self) -> Option<f64> {
        match self {
            Self::KeywordOverlap(inner) => inner.threshold(),
            Self::WeightedField(inner) => inner.threshold(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_query_parse() {
        let q = Query::parse("Bajar el IVA, bajar la renta");
        assert_eq!(q.tokens(), ["bajar", "iva", "bajar", "renta"]);
        assert_eq!(q.terms(), ["bajar", "iva", "renta"]);
        assert_eq!(q.joined(), "bajar iva bajar renta");
        assert!(!q.is_blank());
        assert!(Query::parse("  ").is_blank());
    }

    #[test]
    fn test_overlap_single_keyword() {
        let doc = Document::new("iva", "Ley de IVA").with_keywords(["iva"]);
        let scored = KeywordOverlap::default().score(&Query::parse("IVA"), &doc);
        // 1 / max(3, 1) + 0.25 phrase boost
        assert!((scored.score - (1.0 / 3.0 + 0.25)).abs() < 1e-9);
        assert_eq!(scored.matched_terms, vec!["iva"]);
    }

    #[test]
    fn test_overlap_phrase_boost_multiword() {
        let doc = Document::new("v", "Ley de vivienda")
            .with_keywords(["alquiler", "vivienda pública", "desahucio"]);
        let q = Query::parse("Más vivienda publica y control del alquiler");
        let scored = KeywordOverlap::default().score(&q, &doc);
        // terms: vivienda, publica, alquiler -> 3 / 3 = 1.0, clamped
        assert!((scored.score - 1.0).abs() < 1e-9);
        assert_eq!(scored.matched_terms, vec!["vivienda", "publica", "alquiler"]);
    }

    #[test]
    fn test_overlap_divisor_grows_with_keywords() {
        let keywords: Vec<String> = (0..16).map(|i| format!("termino{i}")).collect();
        let doc = Document::new("big", "Ley grande").with_keywords(keywords);
        let scored = KeywordOverlap::default().score(&Query::parse("termino0 termino1"), &doc);
        // 2 / sqrt(16) + 2 phrase boosts
        assert!((scored.score - (0.5 + 0.5)).abs() < 1e-9);
    }

    #[test]
    fn test_overlap_ignores_stopword_only_keyword() {
        let doc = Document::new("x", "x").with_keywords(["de la"]);
        let scored = KeywordOverlap::default().score(&Query::parse("impuestos"), &doc);
        assert!(scored.score.abs() < f64::EPSILON);
    }

    #[test]
    fn test_overlap_no_keywords() {
        let doc = Document::new("x", "Ley de IVA");
        let scored = KeywordOverlap::default().score(&Query::parse("iva"), &doc);
        assert!(scored.score.abs() < f64::EPSILON);
        assert!(scored.matched_terms.is_empty());
    }

    #[test]
    fn test_weighted_exact_title() {
        let doc = Document::new("a", "Ley de IVA");
        let scored = WeightedField::default().score(&Query::parse("  ley de iva "), &doc);
        // exact 100 + phrase 50 + terms ley, de, iva at 8 each
        assert!((scored.score - 174.0).abs() < 1e-9);
        assert_eq!(scored.matched_terms, vec!["ley", "de", "iva"]);
    }

    #[test]
    fn test_weighted_summary_hits() {
        let doc = Document::new("a", "Real Decreto 1/2024").with_summary("Tipos del IVA reducido");
        let scored = WeightedField::default().score(&Query::parse("iva reducido"), &doc);
        // summary phrase 10 + two summary terms at 2
        assert!((scored.score - 14.0).abs() < 1e-9);
    }

    #[test]
    fn test_weighted_recency() {
        let today = ymd(2024, 6, 30);
        let scorer = WeightedField::default().with_reference_date(today);
        let q = Query::parse("zzz");
        let fresh = Document::new("a", "x").with_date("20240615");
        let older = Document::new("b", "x").with_date("20240101");
        let ancient = Document::new("c", "x").with_date("20200101");
        let bad = Document::new("d", "x").with_date("2024-06-15");
        assert!((scorer.score(&q, &fresh).score - 10.0).abs() < 1e-9);
        assert!((scorer.score(&q, &older).score - 4.0).abs() < 1e-9);
        assert!(scorer.score(&q, &ancient).score.abs() < f64::EPSILON);
        assert!(scorer.score(&q, &bad).score.abs() < f64::EPSILON);
    }

    #[test]
    fn test_weighted_without_reference_date_ignores_recency() {
        let doc = Document::new("a", "x").with_date("20240615");
        let scored = WeightedField::default().score(&Query::parse("zzz"), &doc);
        assert!(scored.score.abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("20240229"), Some(ymd(2024, 2, 29)));
        assert_eq!(parse_date("20230229"), None);
        assert_eq!(parse_date("2024010"), None);
        assert_eq!(parse_date("2024o101"), None);
    }

    #[test]
    fn test_policy_dispatch() {
        let a = ScoringPolicy::keyword_overlap();
        let b = ScoringPolicy::weighted_field();
        assert_eq!(a.name(), "keyword_overlap");
        assert_eq!(a.threshold(), Some(0.1));
        assert_eq!(b.name(), "weighted_field");
        assert_eq!(b.threshold(), None);
    }
}
