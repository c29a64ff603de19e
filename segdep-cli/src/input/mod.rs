//! Input handling module

pub mod conllu;
pub mod file_reader;
pub mod glob_resolver;
pub mod json;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

use anyhow::Result;
use segdep_core::Token;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A corpus: sentences in order, each an ordered token sequence
pub type Corpus = Vec<Vec<Token>>;

/// Supported corpus formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// Pick by file extension (.conllu/.conll, otherwise JSON)
    #[default]
    Auto,
    /// JSON array of sentences, each an array of token objects
    Json,
    /// CoNLL-U with FORM, UPOS, HEAD and DEPREL columns
    Conllu,
}

impl InputFormat {
    /// Resolve `Auto` for a concrete file
    pub fn for_path(self, path: &Path) -> InputFormat {
        match self {
            InputFormat::Auto => match path.extension().and_then(|ext| ext.to_str()) {
                Some("conllu") | Some("conll") => InputFormat::Conllu,
                _ => InputFormat::Json,
            },
            format => format,
        }
    }
}

/// Read one corpus file in the given format
pub fn read_corpus(path: &Path, format: InputFormat) -> Result<Corpus> {
    let content = FileReader::read_text(path)?;
    let format = format.for_path(path);
    log::debug!("Reading {} as {:?}", path.display(), format);

    match format {
        InputFormat::Conllu => conllu::parse(&content, path),
        _ => json::parse(&content, path),
    }
}
