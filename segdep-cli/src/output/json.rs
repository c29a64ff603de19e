//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use segdep_core::{EpochEvaluation, SentenceEvaluation};
use serde::Serialize;
use std::io::Write;

/// JSON formatter - buffers every record and writes one object on finish
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    report: JsonReport,
}

/// Document written by [`JsonFormatter`]
#[derive(Debug, Default, Serialize)]
pub struct JsonReport {
    /// Per-sentence records, when requested
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sentences: Vec<SentenceRecord>,
    /// Aggregate over the pass
    pub epoch: Option<EpochEvaluation>,
}

/// One sentence record tagged with its position
#[derive(Debug, Serialize)]
pub struct SentenceRecord {
    /// 1-based sentence position
    pub sentence: usize,
    #[serde(flatten)]
    pub evaluation: SentenceEvaluation,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            report: JsonReport::default(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_sentence(&mut self, index: usize, evaluation: &SentenceEvaluation) -> Result<()> {
        self.report.sentences.push(SentenceRecord {
            sentence: index,
            evaluation: *evaluation,
        });
        Ok(())
    }

    fn format_epoch(&mut self, epoch: &EpochEvaluation) -> Result<()> {
        self.report.epoch = Some(epoch.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.report)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.report)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
