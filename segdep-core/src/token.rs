//! Token records shared by predicted and gold sequences

use crate::error::{EvalError, Result, Side};

/// Head index of the virtual ROOT token
pub const ROOT: usize = 0;

/// Read access to one analysed token
///
/// Parser output and corpus annotations both implement this, so the scorer
/// never needs to know where a sequence came from. Indices are 1-based within
/// the sequence; a head of [`ROOT`] attaches the token to the virtual root.
pub trait TokenRecord {
    /// Surface form; its length in characters defines the token's span
    fn text(&self) -> &str;

    /// Part-of-speech tag
    fn pos(&self) -> &str;

    /// 1-based index of the syntactic head, or [`ROOT`]
    fn head(&self) -> usize;

    /// Relation label on the edge to the head
    fn dep_label(&self) -> &str;
}

impl<T: TokenRecord + ?Sized> TokenRecord for &T {
    fn text(&self) -> &str {
        (**self).text()
    }

    fn pos(&self) -> &str {
        (**self).pos()
    }

    fn head(&self) -> usize {
        (**self).head()
    }

    fn dep_label(&self) -> &str {
        (**self).dep_label()
    }
}

/// Owned token record
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    /// Surface form
    #[cfg_attr(feature = "serde", serde(alias = "text"))]
    pub word: String,
    /// Part-of-speech tag
    pub pos: String,
    /// 1-based head index, 0 for ROOT
    #[cfg_attr(feature = "serde", serde(alias = "head_idx", alias = "head_index"))]
    pub head: usize,
    /// Dependency relation label
    #[cfg_attr(feature = "serde", serde(alias = "deprel"))]
    pub dep_label: String,
}

impl Token {
    /// Create a new token record
    pub fn new(
        word: impl Into<String>,
        pos: impl Into<String>,
        head: usize,
        dep_label: impl Into<String>,
    ) -> Self {
        Self {
            word: word.into(),
            pos: pos.into(),
            head,
            dep_label: dep_label.into(),
        }
    }
}

impl TokenRecord for Token {
    fn text(&self) -> &str {
        &self.word
    }

    fn pos(&self) -> &str {
        &self.pos
    }

    fn head(&self) -> usize {
        self.head
    }

    fn dep_label(&self) -> &str {
        &self.dep_label
    }
}

/// Check that a sequence partitions its character stream and that every head
/// points inside the sequence.
pub fn validate_sequence<T: TokenRecord>(tokens: &[T], side: Side) -> Result<()> {
    let len = tokens.len();

    for (position, token) in tokens.iter().enumerate() {
        let index = position + 1;

        if token.text().is_empty() {
            return Err(EvalError::EmptyToken { side, index });
        }

        let head = token.head();
        if head > len {
            return Err(EvalError::HeadOutOfRange {
                side,
                index,
                head,
                len,
            });
        }
    }

    Ok(())
}
