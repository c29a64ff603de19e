//! Plain text output formatter

use super::{epoch_rows, OutputFormatter};
use anyhow::Result;
use segdep_core::{EpochEvaluation, SentenceEvaluation};
use std::io::Write;

/// Plain text formatter - one line per sentence, then an aligned epoch summary
pub struct TextFormatter<W: Write> {
    writer: W,
    wrote_sentences: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            wrote_sentences: false,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_sentence(&mut self, index: usize, evaluation: &SentenceEvaluation) -> Result<()> {
        self.wrote_sentences = true;
        writeln!(
            self.writer,
            "sentence {index}: P {:.2} R {:.2} F1 {:.2} POS {:.2} UAS {:.2} LAS {:.2} ({}/{} words)",
            evaluation.precision(),
            evaluation.recall(),
            evaluation.f1_score(),
            evaluation.pos_accuracy(),
            evaluation.uas_score(),
            evaluation.las_score(),
            evaluation.correct_count(),
            evaluation.gold_len(),
        )?;
        Ok(())
    }

    fn format_epoch(&mut self, epoch: &EpochEvaluation) -> Result<()> {
        if self.wrote_sentences {
            writeln!(self.writer)?;
        }
        for (label, value) in epoch_rows(epoch) {
            writeln!(self.writer, "{:<16} {value}", format!("{label}:"))?;
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
    fn test_sentence_line() {
        let (sentence, _) = sample();
        let mut formatter = TextFormatter::new(Vec::new());
        formatter.format_sentence(1, &sentence).unwrap();

        let output = String::from_utf8(formatter.writer).unwrap();
        assert_eq!(
            output,
            "sentence 1: P 33.33 R 50.00 F1 40.00 POS 100.00 UAS 100.00 LAS 100.00 (1/2 words)\n"
        );
    }

    #[test]
    fn test_epoch_summary_alignment() {
        let (_, epoch) = sample();
        let mut formatter = TextFormatter::new(Vec::new());
        formatter.format_epoch(&epoch).unwrap();
        formatter.finish().unwrap();

        let output = String::from_utf8(formatter.writer).unwrap();
        assert!(output.starts_with("Sentences:       1\n"));
        assert!(output.contains("UAS:             100.00\n"));
        assert!(output.contains("Correct words:   1\n"));
    }
}
