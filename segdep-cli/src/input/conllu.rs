//! CoNLL-U corpus reader
//!
//! Only the FORM, UPOS, HEAD and DEPREL columns are used. Comment lines,
//! multiword token ranges (`3-4`) and empty nodes (`5.1`) are skipped, so
//! token indices line up with the HEAD column.

use super::Corpus;
use crate::error::CliError;
use anyhow::Result;
use segdep_core::Token;
use std::path::Path;

const COLUMNS: usize = 10;
const ID: usize = 0;
const FORM: usize = 1;
const UPOS: usize = 3;
const HEAD: usize = 6;
const DEPREL: usize = 7;

/// Parse a CoNLL-U corpus
pub fn parse(content: &str, path: &Path) -> Result<Corpus> {
    let mut corpus = Vec::new();
    let mut sentence = Vec::new();

    for (line_no, line) in content.lines().enumerate() {
        let line = line.trim_end_matches('\r');

        if line.trim().is_empty() {
            if !sentence.is_empty() {
                corpus.push(std::mem::take(&mut sentence));
            }
            continue;
        }
        if line.starts_with('#') {
            continue;
        }

        let error = |message: String| CliError::ParseError {
            path: path.display().to_string(),
            line: Some(line_no + 1),
            message,
        };

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != COLUMNS {
            return Err(error(format!(
                "expected {COLUMNS} tab-separated columns, found {}",
                fields.len()
            ))
            .into());
        }

        let id = fields[ID];
        if id.contains('-') || id.contains('.') {
            continue;
        }

        let head = fields[HEAD]
            .parse::<usize>()
            .map_err(|_| error(format!("invalid HEAD '{}'", fields[HEAD])))?;

        sentence.push(Token::new(fields[FORM], fields[UPOS], head, fields[DEPREL]));
    }

    if !sentence.is_empty() {
        corpus.push(sentence);
    }

    Ok(corpus)
}
