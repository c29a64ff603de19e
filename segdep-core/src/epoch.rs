//! Corpus-level aggregation of sentence evaluations

use crate::error::{EvalError, Result};
use crate::metrics::mean;
use crate::sentence::SentenceEvaluation;

/// Aggregate over one evaluation pass
///
/// Rate fields are macro averages: the unweighted mean of the per-sentence
/// rate. Count fields are sums of the raw per-sentence counts, so
/// `correct_words / all_gold_words` generally differs from `word_recall`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EpochEvaluation {
    /// Number of sentences aggregated
    pub sentences: usize,

    pub word_precision: f64,
    pub word_recall: f64,
    pub word_f1_score: f64,
    pub pos_accuracy: f64,
    pub uas_accuracy: f64,
    pub las_accuracy: f64,
    pub uas_f1_score: f64,
    pub las_f1_score: f64,

    pub correct_words: usize,
    pub all_gold_words: usize,
    pub all_predicted_words: usize,
    pub correct_pos: usize,
    pub correct_uas: usize,
    pub correct_las: usize,
}

impl EpochEvaluation {
    /// Combine the records of every sentence in a pass
    ///
    /// Fails with [`EvalError::EmptyCorpus`] when there is nothing to average.
    pub fn aggregate(evaluations: &[SentenceEvaluation]) -> Result<Self> {
        if evaluations.is_empty() {
            return Err(EvalError::EmptyCorpus);
        }

        let macro_mean = |rate: fn(&SentenceEvaluation) -> f64| {
            mean(evaluations.iter().map(rate)).unwrap_or(0.0)
        };
        let sum = |count: fn(&SentenceEvaluation) -> usize| -> usize {
            evaluations.iter().map(count).sum()
        };

        Ok(Self {
            sentences: evaluations.len(),
            word_precision: macro_mean(SentenceEvaluation::precision),
            word_recall: macro_mean(SentenceEvaluation::recall),
            word_f1_score: macro_mean(SentenceEvaluation::f1_score),
            pos_accuracy: macro_mean(SentenceEvaluation::pos_accuracy),
            uas_accuracy: macro_mean(SentenceEvaluation::uas_score),
            las_accuracy: macro_mean(SentenceEvaluation::las_score),
            uas_f1_score: macro_mean(SentenceEvaluation::uas_f1_score),
            las_f1_score: macro_mean(SentenceEvaluation::las_f1_score),
            correct_words: sum(SentenceEvaluation::correct_count),
            all_gold_words: sum(SentenceEvaluation::gold_len),
            all_predicted_words: sum(SentenceEvaluation::predicted_len),
            correct_pos: sum(SentenceEvaluation::pos_match),
            correct_uas: sum(SentenceEvaluation::uas_match),
            correct_las: sum(SentenceEvaluation::las_match),
        })
    }

    /// Render as a single-line JSON object
    #[cfg(feature = "serde")]
    pub fn to_json_line(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
