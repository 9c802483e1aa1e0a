//! Precision-recall curves with rank interpolation.
//!
//! Precision is a ratio whose numerator and denominator both change as the
//! threshold crosses a block of tied scores, so it is not linear between the
//! corner points of the sweep. Between two corners the curve is interpolated
//! per unit of true-positive count with the false-positive count advanced
//! fractionally (Davis & Goadrich, 2006), and the area is accumulated
//! between consecutive unit steps. A closed-form integral of precision over
//! recall is computed alongside as [`PrCurve::auc_integral`].

use crate::sample::ScoreSample;
use crate::sweep::{ConfusionCounts, ThresholdSweep};

/// A single point on the precision-recall curve.
///
/// Interpolated points lie between classification thresholds, so PR points
/// carry no threshold value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrPoint {
    /// Recall (sensitivity): `tp / (tp + fn)`.
    pub recall: f64,
    /// Precision (positive predictive value): `tp / (tp + fp)`.
    pub precision: f64,
}

/// Precision-recall curve with both area variants.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrCurve {
    /// Points in order of decreasing recall, ending at `(0, 0)`.
    pub points: Vec<PrPoint>,
    /// Area under the rank-interpolated curve (Davis & Goadrich).
    pub auc: f64,
    /// Area from the closed-form integral of precision over recall.
    pub auc_integral: f64,
}

/// Compute the precision-recall curve of a two-class classifier from its
/// sorted scores.
///
/// The curve starts at recall 1 with the precision reached once every
/// threshold below the smallest positive score has been passed (with
/// non-empty samples this is always defined: the denominator `tp + fp` is at
/// least the number of positives). When one sample is exhausted before the
/// other, precision is kept at its last value while recall drops to 0, and
/// the conventional terminal point `(0, 0)` is appended without contributing
/// area.
pub fn pr_curve(class0: &ScoreSample, class1: &ScoreSample) -> PrCurve {
    build(class0, class1, true)
}

/// Area under the rank-interpolated precision-recall curve.
///
/// Shorthand for [`pr_curve`]`(class0, class1).auc` without the point list.
pub fn auc_pr(class0: &ScoreSample, class1: &ScoreSample) -> f64 {
    build(class0, class1, false).auc
}

fn build(class0: &ScoreSample, class1: &ScoreSample, with_points: bool) -> PrCurve {
    let d = class1.len() as f64;

    let mut points = Vec::new();
    let mut auc = 0.0;
    let mut auc_integral = 0.0;

    let sweep = ThresholdSweep::new(class0, class1);
    let mut prev = sweep.initial_counts();
    let mut started = false;
    // coordinates of the most recently emitted point
    let mut recall = 1.0;
    let mut precision = 0.0;

    for step in sweep {
        let cur = step.counts;

        // Thresholds below the smallest positive score only shrink the false
        // positive count at recall 1; the curve starts at the last of them.
        if !started && cur.true_positives == class1.len() {
            prev = cur;
            continue;
        }
        if !started {
            precision = prev.precision();
            if with_points {
                points.push(PrPoint { recall, precision });
            }
            started = true;
        }

        if cur.true_positives == prev.true_positives {
            // Only the false positive count changed: precision moves at
            // constant recall, contributing no area.
            precision = cur.precision();
            if with_points {
                points.push(PrPoint { recall, precision });
            }
            prev = cur;
            continue;
        }

        let delta_tp = prev.true_positives - cur.true_positives;
        let slope = (prev.false_positives - cur.false_positives) as f64 / delta_tp as f64;

        if cur.true_positives == 0 && cur.false_positives == 0 {
            // Terminal block consuming every remaining score at once:
            // precision is kept at its last value down to recall 0.
            auc += precision * recall;
            auc_integral += integral_term(recall, 0.0, slope, &cur, d);
            recall = 0.0;
            if with_points {
                points.push(PrPoint { recall, precision });
            }
            break;
        }

        // One implied point per unit of true-positive count, with the false
        // positive count interpolated linearly within the block.
        for k in 1..=delta_tp {
            let tp = (prev.true_positives - k) as f64;
            let fp = if k == delta_tp {
                cur.false_positives as f64
            } else {
                prev.false_positives as f64 - k as f64 * slope
            };
            let r = tp / d;
            let p = tp / (tp + fp);
            auc += (precision + p) / 2.0 * (recall - r);
            recall = r;
            precision = p;
            if with_points {
                points.push(PrPoint { recall, precision });
            }
        }
        auc_integral += integral_term(
            prev.true_positives as f64 / d,
            cur.true_positives as f64 / d,
            slope,
            &cur,
            d,
        );

        if cur.true_positives == 0 {
            // Recall has reached zero; higher thresholds add nothing.
            break;
        }
        prev = cur;
    }

    // Conventional terminal point; contributes no area.
    if with_points && (recall != 0.0 || precision != 0.0) {
        points.push(PrPoint {
            recall: 0.0,
            precision: 0.0,
        });
    }

    PrCurve {
        points,
        auc,
        auc_integral,
    }
}

/// Exact integral of precision over recall across one sweep block.
///
/// Within a block the false positive count is linear in the true positive
/// count, `fp(tp) = h·tp + b·d`, which makes precision `tp / (a·tp + b·d)`
/// with `a = 1 + h`; integrating from recall `p_a` up to `p_b` gives a
/// logarithmic closed form.
fn integral_term(p_b: f64, p_a: f64, h: f64, cur: &ConfusionCounts, d: f64) -> f64 {
    let a = 1.0 + h;
    let b = (cur.false_positives as f64 - h * cur.true_positives as f64) / d;
    if b != 0.0 {
        (p_b - p_a - b / a * ((a * p_b + b).ln() - (a * p_a + b).ln())) / a
    } else {
        (p_b - p_a) / a
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────
