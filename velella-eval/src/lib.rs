//! Score-based classifier evaluation for the Velella bioinformatics ecosystem.
//!
//! Turns two pre-sorted arrays of classification scores — negative
//! (`class0`) and positive (`class1`) instances — into performance curves
//! and threshold measures:
//!
//! - **Threshold sweep** — tie-aware [`ThresholdSweep`] over the distinct scores of both samples
//! - **ROC curves** — [`roc_curve`], [`auc_roc`]
//! - **Precision-recall curves** — rank-interpolated [`pr_curve`], [`auc_pr`]
//! - **Threshold optimization** — [`maximize_measure`], [`max_correlation_coefficient`], [`max_f_measure`]
//! - **Fixed-rate measures** — [`sensitivity_at_specificity`], [`fpr_at_sensitivity`], [`ppv_at_sensitivity`], [`classification_rate`]
//! - **Measure registry** — the closed [`TwoClassMeasure`] set
//!
//! All operations are pure, single-pass functions over immutable
//! [`ScoreSample`]s; repeated calls on the same inputs return bit-identical
//! results. Throughout the crate an instance is predicted positive when its
//! score lies strictly above the threshold under consideration.
//!
//! # Example
//!
//! ```
//! use velella_eval::{auc_roc, classification_rate, ScoreSample};
//!
//! let class0 = ScoreSample::new(vec![-2.0, -1.0, 0.0]).unwrap();
//! let class1 = ScoreSample::new(vec![1.0, 2.0, 3.0]).unwrap();
//!
//! assert!((auc_roc(&class0, &class1) - 1.0).abs() < 1e-12);
//! assert!((classification_rate(&class0, &class1) - 1.0).abs() < 1e-12);
//! ```

pub mod measure;
pub mod optimum;
pub mod pr;
pub mod rates;
pub mod roc;
pub mod sample;
pub mod sweep;

pub use measure::{MeasureResult, MeasureValue, TwoClassMeasure, MEASURE_NAMES};
pub use optimum::{
    correlation_coefficient, f_measure, max_correlation_coefficient, max_f_measure,
    maximize_measure, FBeta, ThresholdMeasure,
};
pub use pr::{auc_pr, pr_curve, PrCurve, PrPoint};
pub use rates::{
    classification_rate, fpr_at_sensitivity, multiclass_classification_rate, ppv_at_sensitivity,
    sensitivity_at_specificity, Rate,
};
pub use roc::{auc_roc, roc_curve, RocCurve, RocPoint};
pub use sample::ScoreSample;
pub use sweep::{ConfusionCounts, SweepStep, ThresholdSweep};
