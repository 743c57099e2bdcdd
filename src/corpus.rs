//! Document files on disk.
//!
//! Accepts either a JSON array of documents or JSON lines (one document per
//! line, blank lines skipped). The format is picked from the first
//! non-whitespace byte.

use std::path::Path;

use tracing::debug;

use crate::error::{LexError, Result};
use crate::matcher::Document;

/// Read and parse a document file.
pub fn load(path: &Path) -> Result<Vec<Document>> {
    let raw = std::fs::read_to_string(path).map_err(|err| LexError::Corpus {
        path: path.to_path_buf(),
        message: format!("read: {err}"),
    })?;
    let docs = parse(&raw, path)?;
    debug!(target: "lexwatch::corpus", path = %path.display(), count = docs.len(), "loaded documents");
    Ok(docs)
}

/// Parse document text; `path` is only used in error messages.
pub fn parse(raw: &str, path: &Path) -> Result<Vec<Document>> {
    let trimmed = raw.trim_start();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    if trimmed.starts_with('[') {
        return serde_json::from_str(trimmed).map_err(|err| LexError::Corpus {
            path: path.to_path_buf(),
            message: format!("parse json array: {err}"),
        });
    }

    raw.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            serde_json::from_str(line).map_err(|err| LexError::Corpus {
                path: path.to_path_buf(),
                message: format!("line {}: {err}", idx + 1),
            })
        })
        .collect()
}
