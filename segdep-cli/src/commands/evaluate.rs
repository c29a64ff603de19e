//! Evaluate command implementation

use super::{build_evaluator, init_logging, load_config, read_patterns};
use crate::error::CliError;
use crate::input::InputFormat;
use crate::output::{create_formatter, OutputFormat, OutputFormatter};
use anyhow::{Context, Result};
use clap::Args;
use segdep_core::{CorpusEvaluation, EpochLog, EpochLogWriter};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the evaluate command
#[derive(Debug, Args)]
pub struct EvaluateArgs {
    /// Predicted corpus files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true, num_args = 1..)]
    pub predicted: Vec<String>,

    /// Gold corpus files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true, num_args = 1..)]
    pub gold: Vec<String>,

    /// Format of the predicted corpus
    #[arg(long, value_enum)]
    pub predicted_format: Option<InputFormat>,

    /// Format of the gold corpus
    #[arg(long, value_enum)]
    pub gold_format: Option<InputFormat>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Report every sentence before the aggregate
    #[arg(long)]
    pub per_sentence: bool,

    /// Force parallel evaluation even for small corpora
    #[arg(long)]
    pub parallel: bool,

    /// Number of worker threads for parallel evaluation
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Epoch number to record in the epoch log
    #[arg(long, requires = "loss", requires = "log_dir")]
    pub epoch: Option<usize>,

    /// Mean training loss of the epoch
    #[arg(long, requires = "epoch", allow_negative_numbers = true)]
    pub loss: Option<f64>,

    /// Directory receiving the epoch log
    #[arg(long, value_name = "DIR", requires = "epoch")]
    pub log_dir: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl EvaluateArgs {
    /// Execute the evaluate command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.quiet, self.verbose);

        log::info!("Starting evaluation");
        log::debug!("Arguments: {:?}", self);

        let config = load_config(self.config.as_deref())?;
        let predicted_format = self
            .predicted_format
            .unwrap_or(config.input.predicted_format);
        let gold_format = self.gold_format.unwrap_or(config.input.gold_format);

        let predicted = read_patterns(&self.predicted, predicted_format, self.quiet)?;
        let gold = read_patterns(&self.gold, gold_format, self.quiet)?;

        let evaluator = build_evaluator(self.parallel, self.threads, &config.performance);
        let result = evaluator
            .evaluate(&predicted, &gold)
            .map_err(|e| CliError::EvaluationError(e.to_string()))?;

        let format = self.format.unwrap_or(config.output.default_format);
        let per_sentence = self.per_sentence || config.output.per_sentence;
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };
        let mut formatter = create_formatter(format, writer, config.output.pretty_json);
        write_report(formatter.as_mut(), &result, per_sentence)?;

        if let (Some(epoch), Some(loss), Some(dir)) = (self.epoch, self.loss, &self.log_dir) {
            let epoch_log = EpochLog::new(epoch, loss).with_evaluation(result.epoch.clone());
            let path = EpochLogWriter::new(dir)
                .write(&epoch_log)
                .with_context(|| format!("Failed to write epoch log to {}", dir.display()))?;
            log::info!("Wrote epoch log {}", path.display());
        }

        Ok(())
    }
}

/// Feed an evaluation pass through a formatter
pub fn write_report(
    formatter: &mut dyn OutputFormatter,
    result: &CorpusEvaluation,
    per_sentence: bool,
) -> Result<()> {
    if per_sentence {
        for (index, evaluation) in result.sentences.iter().enumerate() {
            formatter.format_sentence(index + 1, evaluation)?;
        }
    }
    formatter.format_epoch(&result.epoch)?;
    formatter.finish()
}
