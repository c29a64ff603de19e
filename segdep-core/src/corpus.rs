//! Evaluation of whole corpora, sequentially or across a thread pool

use crate::epoch::EpochEvaluation;
use crate::error::{EvalError, Result};
use crate::sentence::{evaluate_sentence, SentenceEvaluation};
use crate::token::TokenRecord;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Minimum number of sentences for adaptive mode to go parallel
pub const PARALLEL_THRESHOLD: usize = 512;

/// Execution mode selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExecutionMode {
    /// Score sentences one after another on the calling thread
    Sequential,
    /// Score sentences on a rayon thread pool
    Parallel,
    /// Choose by corpus size
    #[default]
    Adaptive,
}

impl ExecutionMode {
    /// Resolve `Adaptive` for a corpus of `sentences` sentences
    pub fn resolve(self, sentences: usize, threshold: usize) -> ExecutionMode {
        match self {
            ExecutionMode::Adaptive if sentences >= threshold => ExecutionMode::Parallel,
            ExecutionMode::Adaptive => ExecutionMode::Sequential,
            mode => mode,
        }
    }
}

/// Corpus evaluator configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluatorConfig {
    /// Execution mode
    pub mode: ExecutionMode,
    /// Worker threads for parallel mode (None = rayon's global pool)
    pub threads: Option<usize>,
    /// Sentence count at which adaptive mode switches to parallel
    pub parallel_threshold: usize,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            mode: ExecutionMode::Adaptive,
            threads: None,
            parallel_threshold: PARALLEL_THRESHOLD,
        }
    }
}

/// Every sentence record of a pass together with their aggregate
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CorpusEvaluation {
    /// Per-sentence records in corpus order
    pub sentences: Vec<SentenceEvaluation>,
    /// Aggregate over all of them
    pub epoch: EpochEvaluation,
}

/// Scores predicted corpora against gold corpora
#[derive(Debug, Clone, Default)]
pub struct CorpusEvaluator {
    config: EvaluatorConfig,
}

impl CorpusEvaluator {
    /// Create an evaluator with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an evaluator with custom configuration
    pub fn with_config(config: EvaluatorConfig) -> Self {
        Self { config }
    }

    /// Create a builder
    pub fn builder() -> CorpusEvaluatorBuilder {
        CorpusEvaluatorBuilder::default()
    }

    /// Get the current configuration
    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Score every sentence pair and aggregate the pass
    ///
    /// Sentence `i` of `predicted` is compared with sentence `i` of `gold`.
    /// A sentence that cannot be scored fails the whole pass.
    pub fn evaluate<P, G>(&self, predicted: &[Vec<P>], gold: &[Vec<G>]) -> Result<CorpusEvaluation>
    where
        P: TokenRecord + Sync,
        G: TokenRecord + Sync,
    {
        if predicted.len() != gold.len() {
            return Err(EvalError::SentenceCountMismatch {
                predicted: predicted.len(),
                gold: gold.len(),
            });
        }

        let mode = self
            .config
            .mode
            .resolve(predicted.len(), self.config.parallel_threshold);
        tracing::debug!(sentences = predicted.len(), ?mode, "evaluating corpus");

        let sentences = match mode {
            ExecutionMode::Parallel => self.evaluate_parallel(predicted, gold)?,
            _ => evaluate_sequential(predicted, gold)?,
        };
        let epoch = EpochEvaluation::aggregate(&sentences)?;

        Ok(CorpusEvaluation { sentences, epoch })
    }

    #[cfg(feature = "parallel")]
    fn evaluate_parallel<P, G>(
        &self,
        predicted: &[Vec<P>],
        gold: &[Vec<G>],
    ) -> Result<Vec<SentenceEvaluation>>
    where
        P: TokenRecord + Sync,
        G: TokenRecord + Sync,
    {
        let run = || {
            predicted
                .par_iter()
                .zip(gold.par_iter())
                .enumerate()
                .map(|(index, (predicted, gold))| {
                    evaluate_sentence(predicted, gold).map_err(|e| e.in_sentence(index))
                })
                .collect::<Result<Vec<_>>>()
        };

        match self.config.threads {
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| EvalError::Parallel(e.to_string()))?;
                pool.install(run)
            }
            None => run(),
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn evaluate_parallel<P, G>(
        &self,
        predicted: &[Vec<P>],
        gold: &[Vec<G>],
    ) -> Result<Vec<SentenceEvaluation>>
    where
        P: TokenRecord + Sync,
        G: TokenRecord + Sync,
    {
        // Fallback to sequential if parallel feature is disabled
        evaluate_sequential(predicted, gold)
    }
}

fn evaluate_sequential<P, G>(predicted: &[Vec<P>], gold: &[Vec<G>]) -> Result<Vec<SentenceEvaluation>>
where
    P: TokenRecord,
    G: TokenRecord,
{
    predicted
        .iter()
        .zip(gold)
        .enumerate()
        .map(|(index, (predicted, gold))| {
            evaluate_sentence(predicted, gold).map_err(|e| e.in_sentence(index))
        })
        .collect()
}

/// Builder for [`CorpusEvaluator`]
#[derive(Debug, Default)]
pub struct CorpusEvaluatorBuilder {
    config: EvaluatorConfig,
}

impl CorpusEvaluatorBuilder {
    /// Set the execution mode
    pub fn mode(mut self, mode: ExecutionMode) -> Self {
        self.config.mode = mode;
        self
    }

    /// Set the thread count
    pub fn threads(mut self, threads: Option<usize>) -> Self {
        self.config.threads = threads;
        self
    }

    /// Set the adaptive parallel threshold
    pub fn parallel_threshold(mut self, sentences: usize) -> Self {
        self.config.parallel_threshold = sentences;
        self
    }

    /// Build the evaluator
    pub fn build(self) -> CorpusEvaluator {
        CorpusEvaluator::with_config(self.config)
    }
}

/// Evaluate a corpus with default configuration
pub fn evaluate_corpus<P, G>(predicted: &[Vec<P>], gold: &[Vec<G>]) -> Result<CorpusEvaluation>
where
    P: TokenRecord + Sync,
    G: TokenRecord + Sync,
{
    CorpusEvaluator::new().evaluate(predicted, gold)
}
