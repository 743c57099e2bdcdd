//! Text matcher shared by proposal analysis and bulletin search
//!
//! ```text
//! query ──▶ tokenizer ──▶ Query ──▶ Scorer (per document) ──▶ ranker ──▶ matches
//! ```

pub mod document;
pub mod ranker;
pub mod scorer;
pub mod tokenizer;

pub use document::Document;
pub use ranker::{Ranked, rank};
pub use scorer::{
    FieldWeights, KeywordOverlap, OverlapParams, Query, Scored, Scorer, ScoringPolicy,
    WeightedField, parse_date,
};
pub use tokenizer::{normalize, term_set, tokenize};
