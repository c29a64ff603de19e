//! Character-offset index over a token sequence

use crate::token::TokenRecord;

/// Token beginning at a given character offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpanEntry {
    /// Exclusive end offset of the token
    pub end: usize,
    /// 0-based position of the token in its sequence
    pub token: usize,
}

/// Lookup from character offset to the token starting there
///
/// One slot per character of the concatenated token texts. Offsets are
/// counted in `char`s. Built once per sequence and never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpanIndex {
    slots: Vec<Option<SpanEntry>>,
    token_count: usize,
}

impl SpanIndex {
    /// Build the index from token texts in sequence order
    ///
    /// Empty texts own no slot; sequences containing them should be rejected
    /// beforehand with [`validate_sequence`](crate::token::validate_sequence).
    pub fn build<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lengths: Vec<usize> = words
            .into_iter()
            .map(|word| word.as_ref().chars().count())
            .collect();
        let total: usize = lengths.iter().sum();

        let mut slots = vec![None; total];
        let mut start = 0;

        for (token, len) in lengths.iter().enumerate() {
            let end = start + len;
            if let Some(slot) = slots.get_mut(start) {
                *slot = Some(SpanEntry { end, token });
            }
            start = end;
        }

        Self {
            slots,
            token_count: lengths.len(),
        }
    }

    /// Build the index from token records
    pub fn from_tokens<T: TokenRecord>(tokens: &[T]) -> Self {
        Self::build(tokens.iter().map(TokenRecord::text))
    }

    /// Token starting at `offset`, if any
    ///
    /// Offsets past the end of the stream hold no token.
    pub fn get(&self, offset: usize) -> Option<SpanEntry> {
        self.slots.get(offset).copied().flatten()
    }

    /// Length of the character stream
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the character stream is empty
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of tokens indexed
    pub fn token_count(&self) -> usize {
        self.token_count
    }

    /// Token starts in offset order
    pub fn starts(&self) -> impl Iterator<Item = (usize, SpanEntry)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(offset, slot)| slot.map(|entry| (offset, entry)))
    }
}
