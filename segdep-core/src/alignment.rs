//! Predicted-to-gold token alignment by exact span equality

use crate::span::SpanIndex;
use crate::token::{TokenRecord, ROOT};

/// Mapping from predicted token index to gold token index
///
/// Both sides are 1-based with index 0 reserved for ROOT, which always maps
/// to ROOT. A predicted token is aligned only when some gold token covers
/// exactly the same character span; partial overlap never aligns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment {
    map: Vec<Option<usize>>,
    correct: usize,
}

impl Alignment {
    /// Align two indexed sequences
    ///
    /// Only offsets inside the predicted stream are examined. Gold tokens
    /// past its end stay unaligned.
    pub fn build(predicted: &SpanIndex, gold: &SpanIndex) -> Self {
        let mut map = vec![None; predicted.token_count() + 1];
        map[ROOT] = Some(ROOT);
        let mut correct = 0;

        for (offset, entry) in predicted.starts() {
            let Some(gold_entry) = gold.get(offset) else {
                continue;
            };

            if gold_entry.end == entry.end {
                map[entry.token + 1] = Some(gold_entry.token + 1);
                correct += 1;
            }
        }

        Self { map, correct }
    }

    /// Align two token sequences directly
    pub fn from_tokens<P: TokenRecord, G: TokenRecord>(predicted: &[P], gold: &[G]) -> Self {
        Self::build(&SpanIndex::from_tokens(predicted), &SpanIndex::from_tokens(gold))
    }

    /// Gold index aligned with predicted index `predicted`
    ///
    /// `None` for unaligned tokens and for indices outside the predicted
    /// sequence.
    pub fn gold_index(&self, predicted: usize) -> Option<usize> {
        self.map.get(predicted).copied().flatten()
    }

    /// Number of predicted tokens whose span matches a gold span
    pub fn correct_count(&self) -> usize {
        self.correct
    }

    /// Number of predicted tokens, ROOT excluded
    pub fn predicted_len(&self) -> usize {
        self.map.len() - 1
    }

    /// Aligned `(predicted, gold)` pairs of ordinary tokens in predicted order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.map
            .iter()
            .enumerate()
            .skip(1)
            .filter_map(|(predicted, gold)| gold.map(|gold| (predicted, gold)))
    }

    /// Raw map including the ROOT slot
    pub fn as_slice(&self) -> &[Option<usize>] {
        &self.map
    }
}
