//! Fixed-rate threshold measures.
//!
//! Each measure fixes a rate on a *reference* sample, derives the threshold
//! at the corresponding quantile rank, and counts the complementary measure
//! on the other sample. Scores equal to the derived threshold always stay on
//! the reference sample's side of the split — the threshold's whole tie run
//! is counted at once — so the stated rate is met despite duplicate scores.

use velella_core::{Result, VelellaError};

use crate::optimum::ThresholdMeasure;
use crate::sample::ScoreSample;

/// A rate in `[0, 1]`, validated at construction.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Rate(f64);

impl Rate {
    /// Default specificity operating point (0.999).
    pub const DEFAULT_SPECIFICITY: Rate = Rate(0.999);

    /// Default sensitivity operating point (0.95).
    pub const DEFAULT_SENSITIVITY: Rate = Rate(0.95);

    /// Create a validated rate.
    ///
    /// # Errors
    ///
    /// Returns an error if `rate` is not in `[0, 1]`.
    pub fn new(rate: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&rate) {
            return Err(VelellaError::Config(format!(
                "rate must be in [0, 1], got {}",
                rate
            )));
        }
        Ok(Self(rate))
    }

    /// The rate value.
    #[inline]
    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Rank of the score at quantile `rate` in an ascending sample of length `n`.
fn quantile_rank(rate: f64, n: usize) -> usize {
    (rate * (n - 1) as f64).ceil() as usize
}

/// Sensitivity at a fixed specificity.
///
/// The threshold is the `specificity` quantile of the negative sample;
/// negatives scoring at or below it count as true negatives, so the achieved
/// specificity is at least the requested one even across a tie run. The
/// returned value is the fraction of positives scoring strictly above the
/// threshold.
pub fn sensitivity_at_specificity(
    class0: &ScoreSample,
    class1: &ScoreSample,
    specificity: Rate,
) -> ThresholdMeasure {
    let threshold = class0.scores()[quantile_rank(specificity.value(), class0.len())];
    let value = class1.count_above(threshold) as f64 / class1.len() as f64;
    ThresholdMeasure { value, threshold }
}

/// False positive rate at a fixed sensitivity.
///
/// The threshold is the `1 - sensitivity` quantile of the positive sample;
/// positives scoring at or above it count as true positives, so the achieved
/// sensitivity is at least the requested one even across a tie run. The
/// returned value is the fraction of negatives scoring at or above the
/// threshold.
pub fn fpr_at_sensitivity(
    class0: &ScoreSample,
    class1: &ScoreSample,
    sensitivity: Rate,
) -> ThresholdMeasure {
    let threshold = class1.scores()[quantile_rank(1.0 - sensitivity.value(), class1.len())];
    let value = class0.count_at_or_above(threshold) as f64 / class0.len() as f64;
    ThresholdMeasure { value, threshold }
}

/// Positive predictive value at a fixed sensitivity.
///
/// The threshold is derived as in [`fpr_at_sensitivity`]; the value is
/// `tp / (tp + fp)` with both counts taken at or above the threshold. The
/// denominator is never zero since the threshold itself is a positive score.
pub fn ppv_at_sensitivity(
    class0: &ScoreSample,
    class1: &ScoreSample,
    sensitivity: Rate,
) -> ThresholdMeasure {
    let threshold = class1.scores()[quantile_rank(1.0 - sensitivity.value(), class1.len())];
    let tp = class1.count_at_or_above(threshold);
    let fp = class0.count_at_or_above(threshold);
    ThresholdMeasure {
        value: tp as f64 / (tp + fp) as f64,
        threshold,
    }
}

/// Fraction of instances classified correctly at the natural decision
/// boundary of score 0.
///
/// Positives scoring above 0 and negatives scoring at or below 0 count as
/// correct.
pub fn classification_rate(class0: &ScoreSample, class1: &ScoreSample) -> f64 {
    let correct = class1.count_above(0.0) + class0.len() - class0.count_above(0.0);
    correct as f64 / (class0.len() + class1.len()) as f64
}

/// Multi-class classification rate via per-instance arg-max.
///
/// `scores[i]` holds the class-specific scores of instance `i` and
/// `labels[i]` its true class index. An instance counts as correct when the
/// first maximal score sits at the true index.
///
/// # Errors
///
/// Returns an error if no instances are given, the slice lengths mismatch,
/// the score rows differ in width or have fewer than two entries, or a label
/// is out of range.
pub fn multiclass_classification_rate(scores: &[&[f64]], labels: &[usize]) -> Result<f64> {
    if scores.is_empty() {
        return Err(VelellaError::InvalidInput("no instances given".into()));
    }
    if scores.len() != labels.len() {
        return Err(VelellaError::InvalidInput(format!(
            "scores length {} != labels length {}",
            scores.len(),
            labels.len()
        )));
    }
    let n_classes = scores[0].len();
    if n_classes < 2 {
        return Err(VelellaError::InvalidInput(
            "need class scores for at least 2 classes".into(),
        ));
    }

    let mut correct = 0usize;
    for (row, &label) in scores.iter().zip(labels.iter()) {
        if row.len() != n_classes {
            return Err(VelellaError::InvalidInput(format!(
                "instance has {} class scores, expected {}",
                row.len(),
                n_classes
            )));
        }
        if label >= n_classes {
            return Err(VelellaError::InvalidInput(format!(
                "label {} out of range for {} classes",
                label, n_classes
            )));
        }
        let mut arg_max = 0;
        for (c, &score) in row.iter().enumerate().skip(1) {
            if score > row[arg_max] {
                arg_max = c;
            }
        }
        if arg_max == label {
            correct += 1;
        }
    }
    Ok(correct as f64 / scores.len() as f64)
}

// ── Tests ──────────────────────────────────────────────────────────────────
