//! Curated law catalog used by the proposal analyzer.
//!
//! A default catalog of Spanish laws is compiled into the binary; a JSON file
//! can replace it. The catalog is always handed to [`crate::analyze`]
//! explicitly, nothing here is global.

use std::path::Path;

use crate::corpus;
use crate::error::{LexError, Result};
use crate::matcher::Document;

const BUILTIN_LAWS: &str = include_str!("../data/laws.json");

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    laws: Vec<Document>,
}

impl Catalog {
    pub const fn new(laws: Vec<Document>) -> Self {
        Self { laws }
    }

    /// The catalog shipped with lexwatch.
    pub fn builtin() -> Result<Self> {
        let laws = serde_json::from_str(BUILTIN_LAWS)
            .map_err(|err| LexError::Config(format!("builtin law catalog: {err}")))?;
        Ok(Self { laws })
    }

    /// Load from `path`, or the builtin catalog when `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Ok(Self::new(corpus::load(path)?)),
            None => Self::builtin(),
        }
    }

    pub fn laws(&self) -> &[Document] {
        &self.laws
    }

    pub fn get(&self, id: &str) -> Option<&Document> {
        self.laws.iter().find(|law| law.id == id)
    }

    pub fn len(&self) -> usize {
        self.laws.len()
    }

    pub fn is_empty(&self) -> bool {
        self.laws.is_empty()
    }
}
