//! JSON corpus reader
//!
//! A corpus file is an array of sentences; each sentence is an array of
//! token objects with `word`, `pos`, `head` and `dep_label` fields. The
//! aliases `text`, `head_idx` and `deprel` are accepted as well.

use super::Corpus;
use crate::error::CliError;
use anyhow::Result;
use std::path::Path;

/// Parse a JSON corpus
pub fn parse(content: &str, path: &Path) -> Result<Corpus> {
    serde_json::from_str(content).map_err(|e| {
        CliError::ParseError {
            path: path.display().to_string(),
            line: Some(e.line()),
            message: e.to_string(),
        }
        .into()
    })
}
