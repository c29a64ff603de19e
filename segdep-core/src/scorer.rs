//! Tag and attachment agreement over aligned tokens

use crate::alignment::Alignment;
use crate::token::TokenRecord;

/// Agreement counts among aligned token pairs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeCounts {
    /// Aligned pairs with equal part-of-speech tags
    pub pos: usize,
    /// Aligned pairs whose heads agree after alignment
    pub uas: usize,
    /// Pairs counted in `uas` that also agree on the relation label
    pub las: usize,
}

/// Score every aligned pair of a sentence
pub fn score_attributes<P, G>(predicted: &[P], gold: &[G], alignment: &Alignment) -> AttributeCounts
where
    P: TokenRecord,
    G: TokenRecord,
{
    let (uas, las) = count_attachment_matches(predicted, gold, alignment);

    AttributeCounts {
        pos: count_pos_matches(predicted, gold, alignment),
        uas,
        las,
    }
}

/// Count aligned pairs with matching part-of-speech tags
pub fn count_pos_matches<P, G>(predicted: &[P], gold: &[G], alignment: &Alignment) -> usize
where
    P: TokenRecord,
    G: TokenRecord,
{
    aligned_pairs(predicted, gold, alignment)
        .filter(|(predicted, gold)| predicted.pos() == gold.pos())
        .count()
}

/// Count unlabeled and labeled attachment matches
///
/// A predicted head is translated into gold index space through the
/// alignment before comparison, so an attachment to an unaligned token can
/// never be correct. ROOT always translates to ROOT.
pub fn count_attachment_matches<P, G>(
    predicted: &[P],
    gold: &[G],
    alignment: &Alignment,
) -> (usize, usize)
where
    P: TokenRecord,
    G: TokenRecord,
{
    let mut uas = 0;
    let mut las = 0;

    for (predicted, gold) in aligned_pairs(predicted, gold, alignment) {
        if alignment.gold_index(predicted.head()) != Some(gold.head()) {
            continue;
        }

        uas += 1;
        if predicted.dep_label() == gold.dep_label() {
            las += 1;
        }
    }

    (uas, las)
}

fn aligned_pairs<'a, P, G>(
    predicted: &'a [P],
    gold: &'a [G],
    alignment: &'a Alignment,
) -> impl Iterator<Item = (&'a P, &'a G)> + 'a
where
    P: TokenRecord,
    G: TokenRecord,
{
    alignment
        .iter()
        .filter_map(move |(p, g)| Some((predicted.get(p - 1)?, gold.get(g - 1)?)))
}
