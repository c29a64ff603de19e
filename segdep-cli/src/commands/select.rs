//! Select command implementation
//!
//! Each predicted file stands for one training epoch's output on the same
//! gold corpus. The epoch number is taken from the trailing digits of the
//! file stem (`epoch-0003.json` is epoch 3); a file without one is numbered
//! by its 1-based position among the resolved files. Epochs are evaluated in
//! ascending epoch order.

use super::{build_evaluator, init_logging, load_config, read_patterns};
use crate::error::CliError;
use crate::input::{read_corpus, resolve_patterns, InputFormat};
use anyhow::Result;
use clap::Args;
use segdep_core::{EpochEvaluation, ModelSelector, Selection};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Arguments for the select command
#[derive(Debug, Args)]
pub struct SelectArgs {
    /// Predicted corpus files or patterns, one file per epoch
    #[arg(short, long, value_name = "FILE/PATTERN", required = true, num_args = 1..)]
    pub predicted: Vec<String>,

    /// Gold corpus files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true, num_args = 1..)]
    pub gold: Vec<String>,

    /// Format of the predicted corpora
    #[arg(long, value_enum)]
    pub predicted_format: Option<InputFormat>,

    /// Format of the gold corpus
    #[arg(long, value_enum)]
    pub gold_format: Option<InputFormat>,

    /// Force parallel evaluation even for small corpora
    #[arg(long)]
    pub parallel: bool,

    /// Number of worker threads for parallel evaluation
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl SelectArgs {
    /// Execute the select command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.quiet, self.verbose);
        log::debug!("Arguments: {:?}", self);

        let config = load_config(self.config.as_deref())?;
        let predicted_format = self
            .predicted_format
            .unwrap_or(config.input.predicted_format);
        let gold_format = self.gold_format.unwrap_or(config.input.gold_format);

        let gold = read_patterns(&self.gold, gold_format, self.quiet)?;
        let epochs = resolve_patterns(&self.predicted)?;
        let evaluator = build_evaluator(self.parallel, self.threads, &config.performance);

        let mut selector = ModelSelector::new();
        let mut out = io::stdout().lock();

        for (epoch, path) in number_epochs(epochs) {
            let path = path.as_path();
            let predicted = read_corpus(path, predicted_format)?;
            let evaluation = evaluator
                .evaluate(&predicted, &gold)
                .map_err(|e| CliError::EvaluationError(format!("{}: {e}", path.display())))?
                .epoch;

            let selection = selector.observe(epoch, &evaluation);
            write_epoch_line(&mut out, epoch, path, &evaluation, &selection)?;
        }

        write_summary(&mut out, &selector)?;
        out.flush()?;
        Ok(())
    }
}

/// Trailing decimal digits of the file stem, if any
fn epoch_number(path: &Path) -> Option<usize> {
    let stem = path.file_stem()?.to_str()?;
    let prefix = stem.trim_end_matches(|c: char| c.is_ascii_digit());
    stem[prefix.len()..].parse().ok()
}

/// Pair each file with its epoch number, in ascending epoch order
///
/// Files with equal numbers keep their resolved order.
pub fn number_epochs(files: Vec<PathBuf>) -> Vec<(usize, PathBuf)> {
    let mut numbered: Vec<(usize, PathBuf)> = files
        .into_iter()
        .enumerate()
        .map(|(position, path)| (epoch_number(&path).unwrap_or(position + 1), path))
        .collect();
    numbered.sort_by_key(|(epoch, _)| *epoch);
    numbered
}

/// One line per epoch, starred when it would be checkpointed
pub fn write_epoch_line<W: Write>(
    out: &mut W,
    epoch: usize,
    path: &Path,
    evaluation: &EpochEvaluation,
    selection: &Selection,
) -> Result<()> {
    writeln!(
        out,
        "epoch {epoch}: UAS {:.2} LAS {:.2} F1 {:.2} ({}){}",
        evaluation.uas_accuracy,
        evaluation.las_accuracy,
        evaluation.word_f1_score,
        path.display(),
        if selection.improved { " *" } else { "" },
    )?;
    Ok(())
}

/// Closing line naming the best epoch
pub fn write_summary<W: Write>(out: &mut W, selector: &ModelSelector) -> Result<()> {
    match selector.best_epoch() {
        Some(epoch) => writeln!(
            out,
            "best epoch: {epoch} (UAS {:.2}), overall best F1 {:.2}",
            selector.best_uas(),
            selector.best_f1()
        )?,
        None => writeln!(out, "best epoch: none")?,
    }
    Ok(())
}
