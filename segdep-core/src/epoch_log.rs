//! Plain-text epoch logs
//!
//! One file per epoch, named `epoch-NNNN`, holding the epoch number, the mean
//! training loss and, when the epoch was evaluated, the epoch record as a
//! single JSON line.

use crate::epoch::EpochEvaluation;
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Contents of one epoch log file
#[derive(Debug, Clone, PartialEq)]
pub struct EpochLog {
    pub epoch: usize,
    /// Mean training loss over the epoch's batches
    pub loss: f64,
    pub evaluation: Option<EpochEvaluation>,
}

impl EpochLog {
    pub fn new(epoch: usize, loss: f64) -> Self {
        Self {
            epoch,
            loss,
            evaluation: None,
        }
    }

    /// Attach the epoch's evaluation record
    pub fn with_evaluation(mut self, evaluation: EpochEvaluation) -> Self {
        self.evaluation = Some(evaluation);
        self
    }

    /// File name for epoch `epoch`, zero-padded to four digits
    pub fn file_name(epoch: usize) -> String {
        format!("epoch-{epoch:04}")
    }

    /// Render the file contents
    pub fn render(&self) -> Result<String> {
        let mut out = format!("epoch {}\n{:?}\n", self.epoch, self.loss);
        if let Some(evaluation) = &self.evaluation {
            out.push_str(&evaluation.to_json_line()?);
            out.push('\n');
        }
        Ok(out)
    }
}

/// Writes epoch logs into a directory
#[derive(Debug, Clone)]
pub struct EpochLogWriter {
    dir: PathBuf,
}

impl EpochLogWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write `log`, replacing any earlier file for the same epoch
    pub fn write(&self, log: &EpochLog) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;

        let path = self.dir.join(EpochLog::file_name(log.epoch));
        fs::write(&path, log.render()?)?;
        tracing::debug!(path = %path.display(), "wrote epoch log");

        Ok(path)
    }
}
