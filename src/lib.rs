//! lexwatch - legislative text matching
//!
//! Scores drafted proposals against a curated law catalog and ranks official
//! bulletin items against free-text queries.

pub mod analyze;
pub mod app;
pub mod bulletin;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod corpus;
pub mod error;
pub mod matcher;
pub mod rate_limit;
pub mod test_utils;

pub use error::{LexError, Result};
