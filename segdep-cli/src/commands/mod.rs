//! CLI command implementations

use crate::config::{CliConfig, PerformanceConfig};
use crate::input::{read_corpus, resolve_patterns, Corpus, InputFormat};
use crate::output::OutputFormat;
use crate::progress::ProgressReporter;
use anyhow::Result;
use clap::{Subcommand, ValueEnum};
use segdep_core::{CorpusEvaluator, ExecutionMode};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub mod evaluate;
pub mod select;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Evaluate a predicted corpus against a gold corpus
    Evaluate(evaluate::EvaluateArgs),

    /// Pick the best of several epochs' predictions by UAS
    Select(select::SelectArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Evaluate(args) => args.execute(),
            Commands::Select(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(&mut io::stdout().lock()),
        }
    }
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List supported input and output formats
    Formats,
}

impl ListCommands {
    /// Write the listing to `out`
    pub fn execute<W: Write>(&self, out: &mut W) -> Result<()> {
        match self {
            ListCommands::Formats => {
                writeln!(out, "Input formats:")?;
                write_variants(out, InputFormat::value_variants())?;
                writeln!(out)?;
                writeln!(out, "Output formats:")?;
                write_variants(out, OutputFormat::value_variants())?;
            }
        }
        Ok(())
    }
}

fn write_variants<W: Write, V: ValueEnum>(out: &mut W, variants: &[V]) -> Result<()> {
    for value in variants.iter().filter_map(ValueEnum::to_possible_value) {
        let help = value.get_help().map(ToString::to_string).unwrap_or_default();
        writeln!(out, "  {:<10} {help}", value.get_name())?;
    }
    Ok(())
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(quiet: bool, verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if quiet {
        return;
    }

    // A second initialization in the same process keeps the first logger
    if let Err(e) =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .try_init()
    {
        log::debug!("Keeping the installed logger: {e}");
    }
}

/// Load the configuration file, or defaults when none is given
pub(crate) fn load_config(path: Option<&Path>) -> Result<CliConfig> {
    match path {
        Some(path) => {
            log::debug!("Loading configuration from {}", path.display());
            CliConfig::load(path)
        }
        None => Ok(CliConfig::default()),
    }
}

/// Read every file in order and concatenate their sentences
pub(crate) fn read_files(
    files: &[PathBuf],
    format: InputFormat,
    reporter: &ProgressReporter,
) -> Result<Corpus> {
    let mut corpus = Corpus::new();
    for path in files {
        let sentences = read_corpus(path, format)?;
        log::info!("Read {} sentences from {}", sentences.len(), path.display());
        reporter.file_completed(&path.display().to_string(), sentences.len());
        corpus.extend(sentences);
    }
    Ok(corpus)
}

/// Resolve patterns and read them as one corpus
pub(crate) fn read_patterns(
    patterns: &[String],
    format: InputFormat,
    quiet: bool,
) -> Result<Corpus> {
    let files = resolve_patterns(patterns)?;
    let mut reporter = ProgressReporter::new(quiet);
    reporter.init_files(files.len() as u64);
    let corpus = read_files(&files, format, &reporter);
    reporter.finish();
    corpus
}

/// Build the corpus evaluator from flags, falling back to the configuration
pub(crate) fn build_evaluator(
    parallel: bool,
    threads: Option<usize>,
    performance: &PerformanceConfig,
) -> CorpusEvaluator {
    let mode = if parallel {
        ExecutionMode::Parallel
    } else {
        ExecutionMode::Adaptive
    };

    CorpusEvaluator::builder()
        .mode(mode)
        .threads(Some(threads.unwrap_or_else(|| performance.threads())))
        .parallel_threshold(performance.parallel_threshold)
        .build()
}
