//! Output formatting module

use anyhow::Result;
use segdep_core::{EpochEvaluation, SentenceEvaluation};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Trait for output formatters
///
/// Sentence records arrive in corpus order, before the epoch record.
pub trait OutputFormatter: Send + Sync {
    /// Format one sentence record; `index` is 1-based
    fn format_sentence(&mut self, index: usize, evaluation: &SentenceEvaluation) -> Result<()>;

    /// Format the aggregate over the pass
    fn format_epoch(&mut self, epoch: &EpochEvaluation) -> Result<()>;

    /// Finalize output (e.g., emit buffered JSON)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned plain-text report
    #[default]
    Text,
    /// JSON object with sentence and epoch records
    Json,
    /// Markdown tables
    Markdown,
}

/// Build the formatter for `format` over `writer`
pub fn create_formatter<W>(format: OutputFormat, writer: W, pretty_json: bool) -> Box<dyn OutputFormatter>
where
    W: Write + Send + Sync + 'static,
{
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}

/// Rows shared by the text and markdown epoch reports
pub(crate) fn epoch_rows(epoch: &EpochEvaluation) -> [(&'static str, String); 15] {
    let rate = |value: f64| format!("{value:.2}");
    [
        ("Sentences", epoch.sentences.to_string()),
        ("Word precision", rate(epoch.word_precision)),
        ("Word recall", rate(epoch.word_recall)),
        ("Word F1", rate(epoch.word_f1_score)),
        ("POS accuracy", rate(epoch.pos_accuracy)),
        ("UAS", rate(epoch.uas_accuracy)),
        ("LAS", rate(epoch.las_accuracy)),
        ("UAS F1", rate(epoch.uas_f1_score)),
        ("LAS F1", rate(epoch.las_f1_score)),
        ("Correct words", epoch.correct_words.to_string()),
        ("Gold words", epoch.all_gold_words.to_string()),
        ("Predicted words", epoch.all_predicted_words.to_string()),
        ("Correct POS", epoch.correct_pos.to_string()),
        ("Correct UAS", epoch.correct_uas.to_string()),
        ("Correct LAS", epoch.correct_las.to_string()),
    ]
}
