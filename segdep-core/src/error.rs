//! Evaluation error types
//!
//! Degenerate arithmetic (empty lists, zero correct segmentations) is never an
//! error; these variants cover input that breaks the token-sequence contract.

use thiserror::Error;

/// Errors raised while scoring a sentence or a corpus
#[derive(Error, Debug)]
pub enum EvalError {
    /// A token with empty text has no span of its own
    #[error("token {index} in the {side} sequence has empty text")]
    EmptyToken {
        /// Which sequence the token belongs to
        side: Side,
        /// 1-based token index
        index: usize,
    },

    /// A head index pointing past the end of its own sequence
    #[error("token {index} in the {side} sequence has head {head}, but the sequence has {len} tokens")]
    HeadOutOfRange {
        /// Which sequence the token belongs to
        side: Side,
        /// 1-based token index
        index: usize,
        /// The offending head index
        head: usize,
        /// Number of tokens in the sequence
        len: usize,
    },

    /// Predicted and gold corpora hold different numbers of sentences
    #[error("predicted corpus has {predicted} sentences, gold corpus has {gold}")]
    SentenceCountMismatch {
        /// Predicted sentence count
        predicted: usize,
        /// Gold sentence count
        gold: usize,
    },

    /// Aggregating zero sentence records
    #[error("cannot aggregate an empty set of sentence evaluations")]
    EmptyCorpus,

    /// A single sentence failed, failing the whole pass
    #[error("sentence {index} could not be scored: {source}")]
    Sentence {
        /// 0-based sentence position in the corpus
        index: usize,
        /// Underlying failure
        #[source]
        source: Box<EvalError>,
    },

    /// Thread pool construction failed
    #[error("parallel execution failed: {0}")]
    Parallel(String),

    /// I/O error while writing evaluation logs
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error while rendering records
    #[cfg(feature = "serde")]
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl EvalError {
    /// Attach the corpus position of the sentence that failed
    pub fn in_sentence(self, index: usize) -> Self {
        EvalError::Sentence {
            index,
            source: Box::new(self),
        }
    }
}

/// Side of the comparison a token belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Parser output
    Predicted,
    /// Reference annotation
    Gold,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Predicted => write!(f, "predicted"),
            Side::Gold => write!(f, "gold"),
        }
    }
}

/// Result type for evaluation operations
pub type Result<T> = std::result::Result<T, EvalError>;
