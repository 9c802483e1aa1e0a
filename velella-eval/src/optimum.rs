//! Maximum-of-measure threshold search.
//!
//! [`maximize_measure`] sweeps every distinct candidate threshold and returns
//! the first threshold attaining the maximum of an arbitrary confusion-count
//! measure. [`max_correlation_coefficient`] and [`max_f_measure`] are the two
//! stock instantiations.

use velella_core::{Result, Scored, Summarizable, VelellaError};

use crate::sample::ScoreSample;
use crate::sweep::{ConfusionCounts, ThresholdSweep};

/// A measure value together with the threshold at which it was attained.
///
/// Instances scoring strictly above the threshold are predicted positive.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThresholdMeasure {
    /// The measure value.
    pub value: f64,
    /// The threshold attaining it.
    pub threshold: f64,
}

impl Scored for ThresholdMeasure {
    fn score(&self) -> f64 {
        self.value
    }
}

impl Summarizable for ThresholdMeasure {
    fn summary(&self) -> String {
        format!("value={:.4} at threshold={:.4}", self.value, self.threshold)
    }
}

/// F-measure weight `β`, validated at construction.
///
/// `β > 1` favors recall, `β < 1` favors precision; `β = 1` is the harmonic
/// mean of the two (the default).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FBeta(f64);

impl FBeta {
    /// Create a validated F-measure weight.
    ///
    /// # Errors
    ///
    /// Returns an error if `beta` is negative or not finite.
    pub fn new(beta: f64) -> Result<Self> {
        if !beta.is_finite() || beta < 0.0 {
            return Err(VelellaError::Config(format!(
                "F-measure weight beta must be finite and non-negative, got {}",
                beta
            )));
        }
        Ok(Self(beta))
    }

    /// The weight value.
    #[inline]
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for FBeta {
    /// The balanced F1 weight.
    fn default() -> Self {
        Self(1.0)
    }
}

/// Maximize `measure` over every distinct candidate threshold.
///
/// The sweep starts at the smallest score present in either sample and
/// visits each distinct value once. Thresholds where `measure` returns NaN
/// are never selected, and among thresholds attaining an equal maximum the
/// smallest one wins.
///
/// # Errors
///
/// Returns an error if `measure` is NaN at every threshold, as happens for
/// example when every score in both samples is identical.
pub fn maximize_measure<F>(
    class0: &ScoreSample,
    class1: &ScoreSample,
    measure: F,
) -> Result<ThresholdMeasure>
where
    F: Fn(&ConfusionCounts) -> f64,
{
    let mut best: Option<ThresholdMeasure> = None;
    for step in ThresholdSweep::new(class0, class1) {
        let value = measure(&step.counts);
        if value.is_nan() {
            continue;
        }
        if best.map_or(true, |b| value > b.value) {
            best = Some(ThresholdMeasure {
                value,
                threshold: step.threshold,
            });
        }
    }
    best.ok_or_else(|| {
        VelellaError::Computation(format!(
            "measure is undefined at every threshold (class0 scores in [{}, {}], class1 scores in [{}, {}])",
            class0.min(),
            class0.max(),
            class1.min(),
            class1.max(),
        ))
    })
}

/// Matthews correlation coefficient of a confusion matrix.
///
/// Computed in floating point throughout; the integer products overflow for
/// large samples. NaN when any row or column of the matrix is empty.
pub fn correlation_coefficient(counts: &ConfusionCounts) -> f64 {
    let tp = counts.true_positives as f64;
    let fp = counts.false_positives as f64;
    let tn = counts.true_negatives as f64;
    let fne = counts.false_negatives as f64;
    (tp * tn - fne * fp) / ((tp + fne) * (tn + fp) * (tp + fp) * (tn + fne)).sqrt()
}

/// F-beta measure of a confusion matrix.
///
/// `(1 + β²) · precision · recall / (β² · precision + recall)`; NaN where
/// precision or recall is undefined.
pub fn f_measure(counts: &ConfusionCounts, beta: FBeta) -> f64 {
    let beta2 = beta.value() * beta.value();
    let precision = counts.precision();
    let recall = counts.recall();
    (1.0 + beta2) * precision * recall / (beta2 * precision + recall)
}

/// Maximal Matthews correlation coefficient over all thresholds.
///
/// # Errors
///
/// Returns an error if the coefficient is undefined at every threshold (see
/// [`maximize_measure`]).
pub fn max_correlation_coefficient(
    class0: &ScoreSample,
    class1: &ScoreSample,
) -> Result<ThresholdMeasure> {
    maximize_measure(class0, class1, correlation_coefficient)
}

/// Maximal F-beta measure over all thresholds.
///
/// # Errors
///
/// Returns an error if the measure is undefined at every threshold (see
/// [`maximize_measure`]).
pub fn max_f_measure(
    class0: &ScoreSample,
    class1: &ScoreSample,
    beta: FBeta,
) -> Result<ThresholdMeasure> {
    maximize_measure(class0, class1, |counts| f_measure(counts, beta))
}

// ── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(scores: &[f64]) -> ScoreSample {
        ScoreSample::new(scores.to_vec()).unwrap()
    }

    #[test]
    fn perfect_separation_max_cc_one() {
        let class0 = sample(&[-2.0, -1.0, 0.0]);
        let class1 = sample(&[1.0, 2.0, 3.0]);
        let best = max_correlation_coefficient(&class0, &class1).unwrap();
        assert!((best.value - 1.0).abs() < 1e-12);
        assert_eq!(best.threshold, 0.0);
    }

    #[test]
    fn perfect_separation_max_f1_one() {
        let class0 = sample(&[-2.0, -1.0, 0.0]);
        let class1 = sample(&[1.0, 2.0, 3.0]);
        let best = max_f_measure(&class0, &class1, FBeta::default()).unwrap();
        assert!((best.value - 1.0).abs() < 1e-12);
        assert_eq!(best.threshold, 0.0);
    }

    #[test]
    fn all_scores_identical_is_an_error() {
        let class0 = sample(&[0.0, 0.0, 0.0]);
        let class1 = sample(&[0.0, 0.0, 0.0]);
        let err = max_correlation_coefficient(&class0, &class1).unwrap_err();
        assert!(matches!(err, VelellaError::Computation(_)));
        assert!(err.to_string().contains("every threshold"));
    }

    #[test]
    fn known_intermediate_cc() {
        // Thresholds 1, 2, 3 give CC 0.577, 0, 0.5; threshold 4 is NaN.
        let class0 = sample(&[1.0, 3.0]);
        let class1 = sample(&[2.0, 4.0]);
        let best = max_correlation_coefficient(&class0, &class1).unwrap();
        assert!((best.value - 2.0 / 12.0f64.sqrt()).abs() < 1e-12);
        assert_eq!(best.threshold, 1.0);
    }

    #[test]
    fn ties_resolve_to_smallest_threshold() {
        let class0 = sample(&[1.0, 2.0]);
        let class1 = sample(&[3.0, 4.0]);
        let best = maximize_measure(&class0, &class1, |c| {
            if c.true_positives > 0 {
                1.0
            } else {
                f64::NAN
            }
        })
        .unwrap();
        assert_eq!(best.value, 1.0);
        assert_eq!(best.threshold, 1.0);
    }

    #[test]
    fn nan_thresholds_are_skipped() {
        let class0 = sample(&[1.0, 2.0]);
        let class1 = sample(&[3.0, 4.0]);
        let best = maximize_measure(&class0, &class1, |c| {
            if c.true_negatives == 2 && c.true_positives == 2 {
                0.25
            } else {
                f64::NAN
            }
        })
        .unwrap();
        assert_eq!(best.value, 0.25);
        assert_eq!(best.threshold, 2.0);
    }

    #[test]
    fn custom_accuracy_measure() {
        let class0 = sample(&[-1.0, 0.5]);
        let class1 = sample(&[0.5, 1.0]);
        let best = maximize_measure(&class0, &class1, |c| {
            (c.true_positives + c.true_negatives) as f64
                / (c.true_positives + c.false_positives + c.true_negatives + c.false_negatives)
                    as f64
        })
        .unwrap();
        // Thresholds -1.0 and 0.5 both reach accuracy 3/4; the first wins.
        assert!((best.value - 0.75).abs() < 1e-12);
        assert_eq!(best.threshold, -1.0);
    }

    #[test]
    fn f_beta_zero_reduces_to_precision() {
        let class0 = sample(&[1.0]);
        let class1 = sample(&[2.0]);
        let beta = FBeta::new(0.0).unwrap();
        let best = max_f_measure(&class0, &class1, beta).unwrap();
        assert!((best.value - 1.0).abs() < 1e-12);
    }

    #[test]
    fn cc_formula_known_matrix() {
        let counts = ConfusionCounts {
            true_positives: 1,
            false_positives: 1,
            true_negatives: 1,
            false_negatives: 1,
        };
        assert!(correlation_coefficient(&counts).abs() < 1e-12);
    }

    #[test]
    fn beta_validation() {
        assert!(FBeta::new(-0.5).is_err());
        assert!(FBeta::new(f64::NAN).is_err());
        assert!(FBeta::new(f64::INFINITY).is_err());
        assert!(FBeta::new(0.0).is_ok());
        assert!(FBeta::new(2.0).is_ok());
    }

    #[test]
    fn threshold_measure_traits() {
        let tm = ThresholdMeasure {
            value: 0.5,
            threshold: 1.25,
        };
        assert_eq!(tm.score(), 0.5);
        assert!(tm.summary().contains("0.5"));
    }
}
