//! The closed set of two-class performance measures.
//!
//! [`TwoClassMeasure`] enumerates every measure this crate can compute on a
//! pair of sorted score samples. The enum plus the static [`MEASURE_NAMES`]
//! registry replace runtime discovery of measure implementations: callers
//! construct the variant they want (parameters are validated values) and
//! dispatch through [`TwoClassMeasure::compute`].

use velella_core::{Result, Summarizable};

use crate::optimum::{max_correlation_coefficient, max_f_measure, FBeta, ThresholdMeasure};
use crate::pr::{pr_curve, PrCurve};
use crate::rates::{
    classification_rate, fpr_at_sensitivity, ppv_at_sensitivity, sensitivity_at_specificity, Rate,
};
use crate::roc::{roc_curve, RocCurve};
use crate::sample::ScoreSample;

/// A configured two-class performance measure.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TwoClassMeasure {
    /// Area under the ROC curve.
    AucRoc,
    /// Area under the rank-interpolated precision-recall curve.
    AucPr,
    /// The full ROC curve with its area.
    RocCurve,
    /// The full rank-interpolated precision-recall curve with its areas.
    PrCurve,
    /// Classification rate at the natural score-0 decision boundary.
    ClassificationRate,
    /// Maximal Matthews correlation coefficient over all thresholds.
    MaxCorrelationCoefficient,
    /// Maximal F-measure over all thresholds.
    MaxFMeasure(FBeta),
    /// Sensitivity at a fixed specificity.
    SensitivityAtSpecificity(Rate),
    /// False positive rate at a fixed sensitivity.
    FprAtSensitivity(Rate),
    /// Positive predictive value at a fixed sensitivity.
    PpvAtSensitivity(Rate),
}

/// Display names of every measure variant, in declaration order.
pub const MEASURE_NAMES: &[&str] = &[
    "AUC-ROC",
    "AUC-PR",
    "ROC curve",
    "Precision-Recall curve",
    "Classification rate",
    "Maximum correlation coefficient",
    "Maximum F-measure",
    "Sensitivity at fixed specificity",
    "False positive rate at fixed sensitivity",
    "Positive predictive value at fixed sensitivity",
];

/// The result of a two-class measure: its display name and computed value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MeasureResult {
    /// Display name of the measure that produced this result.
    pub name: &'static str,
    /// The computed value.
    pub value: MeasureValue,
}

/// The value computed by a measure.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum MeasureValue {
    /// A single scalar.
    Scalar(f64),
    /// A scalar with the threshold at which it was measured.
    Thresholded(ThresholdMeasure),
    /// A ROC curve.
    Roc(RocCurve),
    /// A precision-recall curve.
    Pr(PrCurve),
}

impl TwoClassMeasure {
    /// Display name of this measure.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AucRoc => MEASURE_NAMES[0],
            Self::AucPr => MEASURE_NAMES[1],
            Self::RocCurve => MEASURE_NAMES[2],
            Self::PrCurve => MEASURE_NAMES[3],
            Self::ClassificationRate => MEASURE_NAMES[4],
            Self::MaxCorrelationCoefficient => MEASURE_NAMES[5],
            Self::MaxFMeasure(_) => MEASURE_NAMES[6],
            Self::SensitivityAtSpecificity(_) => MEASURE_NAMES[7],
            Self::FprAtSensitivity(_) => MEASURE_NAMES[8],
            Self::PpvAtSensitivity(_) => MEASURE_NAMES[9],
        }
    }

    /// One instance of every measure with default parameters (`β = 1`,
    /// specificity 0.999, sensitivity 0.95).
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::AucRoc,
            Self::AucPr,
            Self::RocCurve,
            Self::PrCurve,
            Self::ClassificationRate,
            Self::MaxCorrelationCoefficient,
            Self::MaxFMeasure(FBeta::default()),
            Self::SensitivityAtSpecificity(Rate::DEFAULT_SPECIFICITY),
            Self::FprAtSensitivity(Rate::DEFAULT_SENSITIVITY),
            Self::PpvAtSensitivity(Rate::DEFAULT_SENSITIVITY),
        ]
    }

    /// Compute this measure on the negative (`class0`) and positive
    /// (`class1`) score samples.
    ///
    /// # Errors
    ///
    /// Returns an error if the measure is undefined for the inputs (see
    /// [`max_correlation_coefficient`]).
    pub fn compute(&self, class0: &ScoreSample, class1: &ScoreSample) -> Result<MeasureResult> {
        let value = match self {
            Self::AucRoc => MeasureValue::Scalar(roc_curve(class0, class1).auc),
            Self::AucPr => MeasureValue::Scalar(pr_curve(class0, class1).auc),
            Self::RocCurve => MeasureValue::Roc(roc_curve(class0, class1)),
            Self::PrCurve => MeasureValue::Pr(pr_curve(class0, class1)),
            Self::ClassificationRate => {
                MeasureValue::Scalar(classification_rate(class0, class1))
            }
            Self::MaxCorrelationCoefficient => {
                MeasureValue::Thresholded(max_correlation_coefficient(class0, class1)?)
            }
            Self::MaxFMeasure(beta) => {
                MeasureValue::Thresholded(max_f_measure(class0, class1, *beta)?)
            }
            Self::SensitivityAtSpecificity(rate) => {
                MeasureValue::Thresholded(sensitivity_at_specificity(class0, class1, *rate))
            }
            Self::FprAtSensitivity(rate) => {
                MeasureValue::Thresholded(fpr_at_sensitivity(class0, class1, *rate))
            }
            Self::PpvAtSensitivity(rate) => {
                MeasureValue::Thresholded(ppv_at_sensitivity(class0, class1, *rate))
            }
        };
        Ok(MeasureResult {
            name: self.name(),
            value,
        })
    }
}

impl Summarizable for MeasureResult {
    fn summary(&self) -> String {
        match &self.value {
            MeasureValue::Scalar(v) => format!("{}: {:.4}", self.name, v),
            MeasureValue::Thresholded(t) => {
                format!("{}: {:.4} (threshold {:.4})", self.name, t.value, t.threshold)
            }
            MeasureValue::Roc(c) => {
                format!("{}: {} points, AUC {:.4}", self.name, c.points.len(), c.auc)
            }
            MeasureValue::Pr(c) => {
                format!("{}: {} points, AUC {:.4}", self.name, c.points.len(), c.auc)
            }
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(scores: &[f64]) -> ScoreSample {
        ScoreSample::new(scores.to_vec()).unwrap()
    }

    #[test]
    fn registry_covers_every_variant() {
        let defaults = TwoClassMeasure::defaults();
        assert_eq!(defaults.len(), MEASURE_NAMES.len());
        let names: Vec<&str> = defaults.iter().map(|m| m.name()).collect();
        assert_eq!(names, MEASURE_NAMES);
    }

    #[test]
    fn dispatch_scalar_measures() {
        let class0 = sample(&[-2.0, -1.0, 0.0]);
        let class1 = sample(&[1.0, 2.0, 3.0]);

        let auc = TwoClassMeasure::AucRoc.compute(&class0, &class1).unwrap();
        assert_eq!(auc.name, "AUC-ROC");
        match auc.value {
            MeasureValue::Scalar(v) => assert!((v - 1.0).abs() < 1e-12),
            other => panic!("expected scalar, got {:?}", other),
        }

        let rate = TwoClassMeasure::ClassificationRate
            .compute(&class0, &class1)
            .unwrap();
        match rate.value {
            MeasureValue::Scalar(v) => assert!((v - 1.0).abs() < 1e-12),
            other => panic!("expected scalar, got {:?}", other),
        }
    }

    #[test]
    fn dispatch_thresholded_measures() {
        let class0 = sample(&[-2.0, -1.0, 0.0]);
        let class1 = sample(&[1.0, 2.0, 3.0]);

        let result = TwoClassMeasure::MaxFMeasure(FBeta::default())
            .compute(&class0, &class1)
            .unwrap();
        match result.value {
            MeasureValue::Thresholded(t) => {
                assert!((t.value - 1.0).abs() < 1e-12);
                assert_eq!(t.threshold, 0.0);
            }
            other => panic!("expected thresholded scalar, got {:?}", other),
        }
    }

    #[test]
    fn dispatch_curves() {
        let class0 = sample(&[0.3, 0.7]);
        let class1 = sample(&[0.5, 0.9]);

        let roc = TwoClassMeasure::RocCurve.compute(&class0, &class1).unwrap();
        match roc.value {
            MeasureValue::Roc(c) => assert!((c.auc - 0.75).abs() < 1e-12),
            other => panic!("expected ROC curve, got {:?}", other),
        }

        let pr = TwoClassMeasure::PrCurve.compute(&class0, &class1).unwrap();
        match pr.value {
            MeasureValue::Pr(c) => assert!((c.auc - 19.0 / 24.0).abs() < 1e-12),
            other => panic!("expected PR curve, got {:?}", other),
        }
    }

    #[test]
    fn degenerate_input_propagates_error() {
        let class0 = sample(&[0.0, 0.0]);
        let class1 = sample(&[0.0, 0.0]);
        assert!(TwoClassMeasure::MaxCorrelationCoefficient
            .compute(&class0, &class1)
            .is_err());
    }

    #[test]
    fn summaries_name_the_measure() {
        let class0 = sample(&[-1.0, 0.0]);
        let class1 = sample(&[1.0, 2.0]);
        for measure in TwoClassMeasure::defaults() {
            let result = measure.compute(&class0, &class1).unwrap();
            assert!(result.summary().starts_with(measure.name()));
        }
    }
}
