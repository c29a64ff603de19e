//! Segmentation-aware evaluation for joint word segmentation and dependency parsing
//!
//! A parser that segments raw text into words may disagree with the gold
//! annotation about where words begin and end. Tag and attachment accuracy
//! are only defined for words both sides agree on, so every score here goes
//! through an alignment that pairs predicted and gold tokens covering exactly
//! the same character span.
//!
//! # Pipeline
//!
//! - [`span::SpanIndex`] maps each character offset to the token starting there
//! - [`alignment::Alignment`] pairs tokens with identical spans, ROOT to ROOT
//! - [`scorer`] counts tag, unlabeled and labeled attachment agreement
//! - [`sentence::SentenceEvaluation`] turns counts into per-sentence rates
//! - [`epoch::EpochEvaluation`] macro-averages rates and sums counts over a pass
//!
//! # Example
//!
//! ```rust
//! use segdep_core::{evaluate_sentence, Token};
//!
//! let gold = vec![
//!     Token::new("ab", "N", 2, "nsubj"),
//!     Token::new("cd", "V", 0, "root"),
//! ];
//! let predicted = vec![
//!     Token::new("ab", "N", 2, "nsubj"),
//!     Token::new("c", "V", 0, "root"),
//!     Token::new("d", "X", 2, "dep"),
//! ];
//!
//! let eval = evaluate_sentence(&predicted, &gold).unwrap();
//! assert_eq!(eval.correct_count(), 1);
//! assert_eq!(eval.recall(), 50.0);
//! // "ab" attaches to a token that is not correctly segmented
//! assert_eq!(eval.uas_match(), 0);
//! ```

pub mod alignment;
pub mod corpus;
pub mod epoch;
#[cfg(feature = "serde")]
pub mod epoch_log;
pub mod error;
pub mod metrics;
pub mod scorer;
pub mod selection;
pub mod sentence;
pub mod span;
pub mod token;

pub use alignment::Alignment;
pub use corpus::{
    evaluate_corpus, CorpusEvaluation, CorpusEvaluator, CorpusEvaluatorBuilder, EvaluatorConfig,
    ExecutionMode,
};
pub use epoch::EpochEvaluation;
#[cfg(feature = "serde")]
pub use epoch_log::{EpochLog, EpochLogWriter};
pub use error::{EvalError, Result, Side};
pub use scorer::AttributeCounts;
pub use selection::{ModelSelector, Selection};
pub use sentence::{evaluate_sentence, SentenceCounts, SentenceEvaluation};
pub use span::{SpanEntry, SpanIndex};
pub use token::{Token, TokenRecord, ROOT};
