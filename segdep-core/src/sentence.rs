//! Per-sentence evaluation record

use crate::alignment::Alignment;
use crate::error::{Result, Side};
use crate::metrics::{f1_score, percent};
use crate::scorer::{score_attributes, AttributeCounts};
use crate::span::SpanIndex;
use crate::token::{validate_sequence, TokenRecord};

/// Raw counts behind a sentence evaluation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SentenceCounts {
    /// Number of predicted tokens
    pub predicted_len: usize,
    /// Number of gold tokens
    pub gold_len: usize,
    /// Predicted tokens whose span matches a gold span
    pub correct: usize,
    /// Tag and attachment agreement among those tokens
    pub attributes: AttributeCounts,
}

/// Scores for one sentence
///
/// Only the counts are stored; every rate is computed from them on demand.
/// Segmentation-conditioned scores (`pos_accuracy`, `uas_score`,
/// `las_score`) divide by the number of correctly segmented tokens, while
/// attachment precision and recall divide by the full predicted and gold
/// lengths so that segmentation errors are charged to them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SentenceEvaluation {
    counts: SentenceCounts,
}

impl SentenceEvaluation {
    /// Wrap raw counts
    pub fn from_counts(counts: SentenceCounts) -> Self {
        debug_assert!(counts.correct <= counts.predicted_len.min(counts.gold_len));
        debug_assert!(counts.attributes.pos <= counts.correct);
        debug_assert!(counts.attributes.las <= counts.attributes.uas);
        Self { counts }
    }

    /// Underlying counts
    pub fn counts(&self) -> &SentenceCounts {
        &self.counts
    }

    pub fn predicted_len(&self) -> usize {
        self.counts.predicted_len
    }

    pub fn gold_len(&self) -> usize {
        self.counts.gold_len
    }

    pub fn correct_count(&self) -> usize {
        self.counts.correct
    }

    /// Segmentation precision
    pub fn precision(&self) -> f64 {
        percent(self.counts.correct, self.counts.predicted_len)
    }

    /// Segmentation recall
    pub fn recall(&self) -> f64 {
        percent(self.counts.correct, self.counts.gold_len)
    }

    /// Segmentation F1
    pub fn f1_score(&self) -> f64 {
        f1_score(self.precision(), self.recall())
    }

    pub fn pos_match(&self) -> usize {
        self.counts.attributes.pos
    }

    /// Tag accuracy among correctly segmented tokens
    pub fn pos_accuracy(&self) -> f64 {
        percent(self.counts.attributes.pos, self.counts.correct)
    }

    pub fn uas_match(&self) -> usize {
        self.counts.attributes.uas
    }

    /// Unlabeled attachment accuracy among correctly segmented tokens
    pub fn uas_score(&self) -> f64 {
        percent(self.counts.attributes.uas, self.counts.correct)
    }

    pub fn uas_precision(&self) -> f64 {
        percent(self.counts.attributes.uas, self.counts.predicted_len)
    }

    pub fn uas_recall(&self) -> f64 {
        percent(self.counts.attributes.uas, self.counts.gold_len)
    }

    pub fn uas_f1_score(&self) -> f64 {
        f1_score(self.uas_precision(), self.uas_recall())
    }

    pub fn las_match(&self) -> usize {
        self.counts.attributes.las
    }

    /// Labeled attachment accuracy among correctly segmented tokens
    pub fn las_score(&self) -> f64 {
        percent(self.counts.attributes.las, self.counts.correct)
    }

    pub fn las_precision(&self) -> f64 {
        percent(self.counts.attributes.las, self.counts.predicted_len)
    }

    pub fn las_recall(&self) -> f64 {
        percent(self.counts.attributes.las, self.counts.gold_len)
    }

    pub fn las_f1_score(&self) -> f64 {
        f1_score(self.las_precision(), self.las_recall())
    }
}

impl From<SentenceCounts> for SentenceEvaluation {
    fn from(counts: SentenceCounts) -> Self {
        Self::from_counts(counts)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SentenceEvaluation {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut record = serializer.serialize_struct("SentenceEvaluation", 18)?;
        record.serialize_field("predicted_list_len", &self.predicted_len())?;
        record.serialize_field("gold_list_len", &self.gold_len())?;
        record.serialize_field("correct_count", &self.correct_count())?;
        record.serialize_field("precision", &self.precision())?;
        record.serialize_field("recall", &self.recall())?;
        record.serialize_field("f1_score", &self.f1_score())?;
        record.serialize_field("pos_match", &self.pos_match())?;
        record.serialize_field("pos_acc", &self.pos_accuracy())?;
        record.serialize_field("uas_match", &self.uas_match())?;
        record.serialize_field("uas_score", &self.uas_score())?;
        record.serialize_field("uas_precision", &self.uas_precision())?;
        record.serialize_field("uas_recall", &self.uas_recall())?;
        record.serialize_field("uas_f1_score", &self.uas_f1_score())?;
        record.serialize_field("las_match", &self.las_match())?;
        record.serialize_field("las_score", &self.las_score())?;
        record.serialize_field("las_precision", &self.las_precision())?;
        record.serialize_field("las_recall", &self.las_recall())?;
        record.serialize_field("las_f1_score", &self.las_f1_score())?;
        record.end()
    }
}

/// Score one predicted sentence against its gold analysis
pub fn evaluate_sentence<P, G>(predicted: &[P], gold: &[G]) -> Result<SentenceEvaluation>
where
    P: TokenRecord,
    G: TokenRecord,
{
    validate_sequence(predicted, Side::Predicted)?;
    validate_sequence(gold, Side::Gold)?;

    let predicted_index = SpanIndex::from_tokens(predicted);
    let gold_index = SpanIndex::from_tokens(gold);

    if predicted_index.len() != gold_index.len() {
        tracing::warn!(
            predicted_chars = predicted_index.len(),
            gold_chars = gold_index.len(),
            "predicted and gold character streams differ in length"
        );
    }

    let alignment = Alignment::build(&predicted_index, &gold_index);
    let attributes = score_attributes(predicted, gold, &alignment);

    tracing::trace!(
        predicted = predicted.len(),
        gold = gold.len(),
        correct = alignment.correct_count(),
        uas = attributes.uas,
        "scored sentence"
    );

    Ok(SentenceEvaluation::from_counts(SentenceCounts {
        predicted_len: predicted.len(),
        gold_len: gold.len(),
        correct: alignment.correct_count(),
        attributes,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EvalError;
    use crate::token::Token;

    #[test]
    fn test_exact_match() {
        let gold = vec![Token::new("ab", "N", 0, "root")];
        let eval = evaluate_sentence(&gold, &gold).unwrap();

        assert_eq!(eval.correct_count(), 1);
        assert_eq!(eval.precision(), 100.0);
        assert_eq!(eval.recall(), 100.0);
        assert_eq!(eval.f1_score(), 100.0);
        assert_eq!(eval.pos_accuracy(), 100.0);
        assert_eq!(eval.uas_score(), 100.0);
        assert_eq!(eval.las_score(), 100.0);
    }

    #[test]
    fn test_zero_correct_segmentation_rates() {
        let predicted = vec![Token::new("ab", "N", 0, "root"), Token::new("cd", "N", 1, "dep")];
        let gold = vec![Token::new("a", "N", 0, "root"), Token::new("bcd", "N", 1, "dep")];
        let eval = evaluate_sentence(&predicted, &gold).unwrap();

        assert_eq!(eval.correct_count(), 0);
        assert_eq!(eval.pos_accuracy(), 0.0);
        assert_eq!(eval.uas_score(), 0.0);
        assert_eq!(eval.las_score(), 0.0);
        assert_eq!(eval.f1_score(), 0.0);
    }

    #[test]
    fn test_empty_predicted_against_gold() {
        let predicted: Vec<Token> = Vec::new();
        let gold = vec![Token::new("ab", "N", 0, "root")];
        let eval = evaluate_sentence(&predicted, &gold).unwrap();

        assert_eq!(eval.precision(), 0.0);
        assert_eq!(eval.recall(), 0.0);
        assert_eq!(eval.uas_precision(), 0.0);
    }

    #[test]
    fn test_denominator_asymmetry() {
        // Three predicted tokens, two of which align; both aligned attach correctly
        let counts = SentenceCounts {
            predicted_len: 3,
            gold_len: 4,
            correct: 2,
            attributes: AttributeCounts { pos: 2, uas: 2, las: 1 },
        };
        let eval = SentenceEvaluation::from_counts(counts);

        assert_eq!(eval.uas_score(), 100.0);
        assert!((eval.uas_precision() - 200.0 / 3.0).abs() < 1e-9);
        assert_eq!(eval.uas_recall(), 50.0);
        assert_eq!(eval.las_score(), 50.0);
        assert_eq!(eval.las_recall(), 25.0);
    }

    #[test]
    fn test_malformed_sequence_is_rejected() {
        let predicted = vec![Token::new("ab", "N", 2, "root")];
        let gold = vec![Token::new("ab", "N", 0, "root")];

        let err = evaluate_sentence(&predicted, &gold).unwrap_err();
        assert!(matches!(err, EvalError::HeadOutOfRange { .. }));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialized_record_keys() {
        let gold = vec![Token::new("ab", "N", 0, "root")];
        let eval = evaluate_sentence(&gold, &gold).unwrap();

        let value = serde_json::to_value(eval).unwrap();
        assert_eq!(value["predicted_list_len"], 1);
        assert_eq!(value["correct_count"], 1);
        assert_eq!(value["pos_acc"], 100.0);
        assert_eq!(value["las_f1_score"], 100.0);
    }
}
