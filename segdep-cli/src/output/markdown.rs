//! Markdown output formatter

use super::{epoch_rows, OutputFormatter};
use anyhow::Result;
use segdep_core::{EpochEvaluation, SentenceEvaluation};
use std::io::Write;

/// Markdown formatter - a sentence table followed by an epoch summary table
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    sentence_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            sentence_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_sentence(&mut self, index: usize, evaluation: &SentenceEvaluation) -> Result<()> {
        if self.sentence_count == 0 {
            writeln!(self.writer, "## Sentences")?;
            writeln!(self.writer)?;
            writeln!(
                self.writer,
                "| # | Precision | Recall | F1 | POS | UAS | LAS |"
            )?;
            writeln!(self.writer, "|---|---|---|---|---|---|---|")?;
        }
        self.sentence_count += 1;

        writeln!(
            self.writer,
            "| {index} | {:.2} | {:.2} | {:.2} | {:.2} | {:.2} | {:.2} |",
            evaluation.precision(),
            evaluation.recall(),
            evaluation.f1_score(),
            evaluation.pos_accuracy(),
            evaluation.uas_score(),
            evaluation.las_score(),
        )?;
        Ok(())
    }

    fn format_epoch(&mut self, epoch: &EpochEvaluation) -> Result<()> {
        if self.sentence_count > 0 {
            writeln!(self.writer)?;
        }
        writeln!(self.writer, "## Epoch")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|---|---|")?;
        for (label, value) in epoch_rows(epoch) {
            writeln!(self.writer, "| {label} | {value} |")?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::sample;

    #[test]
    fn test_tables() {
        let (sentence, epoch) = sample();
        let mut formatter = MarkdownFormatter::new(Vec::new());
        formatter.format_sentence(1, &sentence).unwrap();
        formatter.format_sentence(2, &sentence).unwrap();
        formatter.format_epoch(&epoch).unwrap();
        formatter.finish().unwrap();

        let output = String::from_utf8(formatter.writer).unwrap();
        assert_eq!(output.matches("## Sentences").count(), 1);
        assert!(output.contains("| 2 | 33.33 | 50.00 | 40.00 | 100.00 | 100.00 | 100.00 |"));
        assert!(output.contains("\n\n## Epoch\n"));
        assert!(output.contains("| Word recall | 50.00 |"));
    }

    #[test]
    fn test_epoch_only() {
        let (_, epoch) = sample();
        let mut formatter = MarkdownFormatter::new(Vec::new());
        formatter.format_epoch(&epoch).unwrap();

        let output = String::from_utf8(formatter.writer).unwrap();
        assert!(output.starts_with("## Epoch\n"));
        assert!(!output.contains("## Sentences"));
    }
}
