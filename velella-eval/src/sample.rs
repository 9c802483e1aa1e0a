//! Sorted score samples.

use velella_core::{Result, VelellaError};

/// An immutable, ascending-sorted sample of classification scores.
///
/// Every measure in this crate consumes one `ScoreSample` per class: `class0`
/// holds the scores of the negative (background) instances and `class1` those
/// of the positive (foreground) instances. Scores are a monotone "evidence
/// for the positive class" value such as a log-likelihood ratio.
///
/// Non-emptiness, sortedness and the absence of NaN are checked once at
/// construction, so consumers can rely on them without re-validating. The
/// scores are never re-sorted afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScoreSample(Vec<f64>);

impl ScoreSample {
    /// Create a sample from scores already sorted in ascending order.
    ///
    /// Duplicate values are permitted.
    ///
    /// # Errors
    ///
    /// Returns an error if `scores` is empty, contains NaN, or is not
    /// non-decreasing.
    pub fn new(scores: Vec<f64>) -> Result<Self> {
        if scores.is_empty() {
            return Err(VelellaError::InvalidInput(
                "score sample must not be empty".into(),
            ));
        }
        if scores.iter().any(|s| s.is_nan()) {
            return Err(VelellaError::InvalidInput(
                "score sample must not contain NaN".into(),
            ));
        }
        if scores.windows(2).any(|w| w[0] > w[1]) {
            return Err(VelellaError::InvalidInput(
                "score sample must be sorted in ascending order".into(),
            ));
        }
        Ok(Self(scores))
    }

    /// Create a sample from unsorted scores, sorting them once.
    ///
    /// # Errors
    ///
    /// Returns an error if `scores` is empty or contains NaN.
    pub fn from_unsorted(mut scores: Vec<f64>) -> Result<Self> {
        scores.sort_by(f64::total_cmp);
        Self::new(scores)
    }

    /// The scores in ascending order.
    #[inline]
    pub fn scores(&self) -> &[f64] {
        &self.0
    }

    /// Number of scores in the sample.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the sample is empty (never true for a constructed sample).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Smallest score.
    #[inline]
    pub fn min(&self) -> f64 {
        self.0[0]
    }

    /// Largest score.
    #[inline]
    pub fn max(&self) -> f64 {
        self.0[self.0.len() - 1]
    }

    /// Number of scores strictly below `threshold`.
    pub(crate) fn count_below(&self, threshold: f64) -> usize {
        self.0.partition_point(|&s| s < threshold)
    }

    /// Number of scores at or above `threshold`.
    pub(crate) fn count_at_or_above(&self, threshold: f64) -> usize {
        self.0.len() - self.count_below(threshold)
    }

    /// Number of scores strictly above `threshold`.
    pub(crate) fn count_above(&self, threshold: f64) -> usize {
        self.0.len() - self.0.partition_point(|&s| s <= threshold)
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_sorted_with_duplicates() {
        let s = ScoreSample::new(vec![-1.0, 0.0, 0.0, 2.5]).unwrap();
        assert_eq!(s.len(), 4);
        assert_eq!(s.min(), -1.0);
        assert_eq!(s.max(), 2.5);
    }

    #[test]
    fn new_rejects_empty() {
        assert!(ScoreSample::new(vec![]).is_err());
    }

    #[test]
    fn new_rejects_nan() {
        assert!(ScoreSample::new(vec![0.0, f64::NAN]).is_err());
    }

    #[test]
    fn new_rejects_unsorted() {
        assert!(ScoreSample::new(vec![1.0, 0.0]).is_err());
    }

    #[test]
    fn from_unsorted_sorts() {
        let s = ScoreSample::from_unsorted(vec![3.0, -1.0, 2.0]).unwrap();
        assert_eq!(s.scores(), &[-1.0, 2.0, 3.0]);
    }

    #[test]
    fn from_unsorted_rejects_nan() {
        assert!(ScoreSample::from_unsorted(vec![1.0, f64::NAN, 0.0]).is_err());
    }

    #[test]
    fn counting_snaps_over_tie_runs() {
        let s = ScoreSample::new(vec![0.0, 1.0, 1.0, 1.0, 2.0]).unwrap();
        assert_eq!(s.count_below(1.0), 1);
        assert_eq!(s.count_at_or_above(1.0), 4);
        assert_eq!(s.count_above(1.0), 1);
    }

    #[test]
    fn counting_outside_range() {
        let s = ScoreSample::new(vec![0.0, 1.0]).unwrap();
        assert_eq!(s.count_above(5.0), 0);
        assert_eq!(s.count_at_or_above(-5.0), 2);
        assert_eq!(s.count_below(-5.0), 0);
    }
}
