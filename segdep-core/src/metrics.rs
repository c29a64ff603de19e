//! Rate arithmetic shared by sentence and epoch aggregation
//!
//! Rates are percentages in `[0, 100]`. A zero denominator yields `0.0`
//! instead of NaN so that degenerate sentences can still be averaged.

/// `numerator / denominator * 100`, or `0.0` when the denominator is zero
pub fn percent(numerator: usize, denominator: usize) -> f64 {
    if denominator > 0 {
        numerator as f64 / denominator as f64 * 100.0
    } else {
        0.0
    }
}

/// Harmonic mean of precision and recall: 2 * (p * r) / (p + r)
pub fn f1_score(precision: f64, recall: f64) -> f64 {
    if precision + recall > 0.0 {
        2.0 * (precision * recall) / (precision + recall)
    } else {
        0.0
    }
}

/// Unweighted arithmetic mean, `None` for an empty input
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), value| (sum + value, count + 1));

    if count > 0 {
        Some(sum / count as f64)
    } else {
        None
    }
}
