//! The log-loss engine.
//!
//! One entry point, [`LogLoss::compute`], always takes a full N×K
//! probability matrix. The binary shorthand is an adapter that expands a
//! positive-level probability vector into the two-column matrix `[p, 1 - p]`
//! and re-enters the same path, so there is no separate binary formula.

use ndarray::{Array2, ArrayView1, ArrayView2};
use serde::{Deserialize, Serialize};

use crate::error::LossError;
use crate::estimator::EstimatorKind;
use crate::labels::{indicator_matrix, ClassLevels};

// =============================================================================
// Aggregation
// =============================================================================

/// How per-observation losses are combined into the reported scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Aggregation {
    /// Mean loss over observations.
    #[default]
    Mean,
    /// Total summed loss.
    Sum,
}

// =============================================================================
// LogLoss
// =============================================================================

/// Mean logarithmic loss (cross-entropy): -mean(log(p_true_class))
///
/// Lower is better. Expects class probabilities in [0, 1]; rows are not
/// required to sum to 1. Probabilities at or below [`stability_floor`] are
/// raised to it before the log, so a certain-but-wrong prediction costs
/// `-ln(stability_floor)` instead of infinity.
///
/// [`stability_floor`]: LogLoss::stability_floor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogLoss {
    /// How per-observation losses are combined.
    pub aggregation: Aggregation,
    /// Smallest probability admitted to the log step.
    pub stability_floor: f64,
    /// Explicit estimator kind, for callers that cannot infer it from the
    /// estimate shape (e.g. one configuration reused across heterogeneous
    /// groups). `None` resolves the kind from the column count per call.
    pub estimator: Option<EstimatorKind>,
}

impl Default for LogLoss {
    fn default() -> Self {
        Self {
            aggregation: Aggregation::Mean,
            stability_floor: f64::EPSILON,
            estimator: None,
        }
    }
}

impl LogLoss {
    /// Mean-aggregated loss with the machine-epsilon stability floor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum-aggregated loss.
    pub fn summed() -> Self {
        Self {
            aggregation: Aggregation::Sum,
            ..Self::default()
        }
    }

    /// Mean-aggregated loss with a custom stability floor.
    pub fn with_stability_floor(stability_floor: f64) -> Self {
        Self {
            stability_floor,
            ..Self::default()
        }
    }

    /// Mean-aggregated loss with a fixed estimator kind.
    pub fn with_estimator(kind: EstimatorKind) -> Self {
        Self {
            estimator: Some(kind),
            ..Self::default()
        }
    }

    /// Compute the loss for an N×K probability matrix.
    ///
    /// `truth[i]` is the class index of observation `i`, indexing the
    /// columns of `estimate`.
    ///
    /// # Errors
    ///
    /// - [`LossError::NotEnoughClasses`] for fewer than two columns
    /// - [`LossError::ColumnCountMismatch`] when a fixed [`EstimatorKind`]
    ///   disagrees with the column count
    /// - [`LossError::RowCountMismatch`] when truth length and row count
    ///   disagree
    /// - [`LossError::LabelOutOfRange`] for a truth index ≥ K
    pub fn compute(&self, truth: &[usize], estimate: ArrayView2<f64>) -> Result<f64, LossError> {
        let kind = match self.estimator {
            Some(kind) => kind,
            None => EstimatorKind::resolve(estimate.ncols())?,
        };
        if estimate.ncols() < 2 {
            return Err(LossError::NotEnoughClasses {
                classes: estimate.ncols(),
            });
        }
        if let Some(expected) = kind.expected_columns() {
            if estimate.ncols() != expected {
                return Err(LossError::ColumnCountMismatch {
                    classes: expected,
                    columns: estimate.ncols(),
                });
            }
        }
        if truth.len() != estimate.nrows() {
            return Err(LossError::RowCountMismatch {
                truth: truth.len(),
                rows: estimate.nrows(),
            });
        }
        if truth.is_empty() {
            return Ok(0.0);
        }

        let indicator = indicator_matrix(truth, estimate.ncols())?;

        // Only the true-class column survives per row; every other entry is
        // exactly 0 by construction of the indicator, so the row sum is the
        // probability assigned to the true class.
        let masked = &indicator * &estimate;

        let log_likelihood: f64 = masked
            .rows()
            .into_iter()
            .map(|row| row.sum().max(self.stability_floor).ln())
            .sum();

        let loss = -log_likelihood;
        match self.aggregation {
            Aggregation::Mean => Ok(loss / truth.len() as f64),
            Aggregation::Sum => Ok(loss),
        }
    }

    /// Compute the loss from the binary shorthand: one probability per
    /// observation, for the first (positive) level.
    ///
    /// Expands to `[p, 1 - p]` and delegates to [`compute`](Self::compute);
    /// binary loss is exactly a two-class multiclass loss.
    pub fn compute_binary(
        &self,
        truth: &[usize],
        estimate: ArrayView1<f64>,
    ) -> Result<f64, LossError> {
        let expanded = expand_binary(estimate);
        self.compute(truth, expanded.view())
    }

    /// Compute the loss for labelled truth against an explicit level set.
    ///
    /// Checks that the estimate columns align one-to-one with `levels`,
    /// encodes the labels, and delegates to [`compute`](Self::compute).
    pub fn compute_labels<L: Eq + std::fmt::Debug>(
        &self,
        truth: &[L],
        levels: &ClassLevels<L>,
        estimate: ArrayView2<f64>,
    ) -> Result<f64, LossError> {
        if estimate.ncols() != levels.len() {
            return Err(LossError::ColumnCountMismatch {
                classes: levels.len(),
                columns: estimate.ncols(),
            });
        }
        let encoded = levels.encode(truth)?;
        self.compute(&encoded, estimate)
    }
}

/// Expand a positive-level probability vector into the two-column matrix
/// `[p, 1 - p]`.
pub fn expand_binary(positive: ArrayView1<f64>) -> Array2<f64> {
    let mut expanded = Array2::zeros((positive.len(), 2));
    for (row, &p) in positive.iter().enumerate() {
        expanded[[row, 0]] = p;
        expanded[[row, 1]] = 1.0 - p;
    }
    expanded
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn perfect_predictions_cost_nothing() {
        let truth = [0, 1, 2];
        let estimate = array![[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
        let loss = LogLoss::new().compute(&truth, estimate.view()).unwrap();
        assert_abs_diff_eq!(loss, 0.0);
    }

    #[test]
    fn uniform_predictions_cost_ln_k() {
        let truth = [0, 1, 2];
        let third = 1.0 / 3.0;
        let estimate = Array2::from_elem((3, 3), third);
        let loss = LogLoss::new().compute(&truth, estimate.view()).unwrap();
        assert_abs_diff_eq!(loss, -third.ln(), epsilon = 1e-12);
    }

    #[test]
    fn two_class_example() {
        let truth = [0, 1];
        let estimate = array![[0.9, 0.1], [0.2, 0.8]];
        let loss = LogLoss::new().compute(&truth, estimate.view()).unwrap();
        let expected = -(0.9f64.ln() + 0.8f64.ln()) / 2.0;
        assert_abs_diff_eq!(loss, expected, epsilon = 1e-12);
    }

    #[test]
    fn sum_aggregation_skips_division() {
        let truth = [0, 1];
        let estimate = array![[0.9, 0.1], [0.2, 0.8]];
        let sum = LogLoss::summed().compute(&truth, estimate.view()).unwrap();
        let expected = -(0.9f64.ln() + 0.8f64.ln());
        assert_abs_diff_eq!(sum, expected, epsilon = 1e-12);
    }

    #[test]
    fn zero_probability_clamps_to_floor() {
        let truth = [0];
        let estimate = array![[0.0, 1.0]];
        let loss = LogLoss::summed().compute(&truth, estimate.view()).unwrap();
        assert!(loss.is_finite());
        assert_abs_diff_eq!(loss, -f64::EPSILON.ln(), epsilon = 1e-12);
    }

    #[test]
    fn floor_leaves_larger_probabilities_alone() {
        let truth = [0];
        let p = 1e-9;
        let estimate = array![[p, 1.0 - p]];
        let loss = LogLoss::summed().compute(&truth, estimate.view()).unwrap();
        assert_abs_diff_eq!(loss, -p.ln(), epsilon = 1e-9);
    }

    #[test]
    fn custom_floor_is_respected() {
        let truth = [0];
        let estimate = array![[0.0, 1.0]];
        let metric = LogLoss {
            aggregation: Aggregation::Sum,
            ..LogLoss::with_stability_floor(1e-6)
        };
        let loss = metric.compute(&truth, estimate.view()).unwrap();
        assert_abs_diff_eq!(loss, -(1e-6f64.ln()), epsilon = 1e-12);
    }

    #[test]
    fn binary_shorthand_expands_positive_level() {
        let truth = [0, 0, 1];
        let positive = array![0.9, 0.6, 0.3];
        let shorthand = LogLoss::new()
            .compute_binary(&truth, positive.view())
            .unwrap();
        let explicit = LogLoss::new()
            .compute(&truth, array![[0.9, 0.1], [0.6, 0.4], [0.3, 0.7]].view())
            .unwrap();
        assert_abs_diff_eq!(shorthand, explicit, epsilon = 1e-12);
    }

    #[test]
    fn expand_binary_layout() {
        let expanded = expand_binary(array![0.25, 1.0].view());
        assert_eq!(expanded.dim(), (2, 2));
        assert_abs_diff_eq!(expanded[[0, 0]], 0.25);
        assert_abs_diff_eq!(expanded[[0, 1]], 0.75);
        assert_abs_diff_eq!(expanded[[1, 1]], 0.0);
    }

    #[test]
    fn row_count_mismatch_is_rejected() {
        let truth = [0, 1, 0];
        let estimate = Array2::from_elem((4, 2), 0.5);
        assert_eq!(
            LogLoss::new().compute(&truth, estimate.view()),
            Err(LossError::RowCountMismatch { truth: 3, rows: 4 })
        );
    }

    #[test]
    fn single_column_estimate_is_rejected() {
        let truth = [0, 0];
        let estimate = Array2::from_elem((2, 1), 1.0);
        assert_eq!(
            LogLoss::new().compute(&truth, estimate.view()),
            Err(LossError::NotEnoughClasses { classes: 1 })
        );
    }

    #[test]
    fn binary_override_rejects_wide_matrix() {
        let truth = [0, 1];
        let estimate = Array2::from_elem((2, 3), 1.0 / 3.0);
        let metric = LogLoss::with_estimator(EstimatorKind::Binary);
        assert_eq!(
            metric.compute(&truth, estimate.view()),
            Err(LossError::ColumnCountMismatch {
                classes: 2,
                columns: 3,
            })
        );
    }

    #[test]
    fn multiclass_override_accepts_two_columns() {
        let truth = [0, 1];
        let estimate = array![[0.9, 0.1], [0.2, 0.8]];
        let metric = LogLoss::with_estimator(EstimatorKind::Multiclass);
        let loss = metric.compute(&truth, estimate.view()).unwrap();
        let plain = LogLoss::new().compute(&truth, estimate.view()).unwrap();
        assert_abs_diff_eq!(loss, plain);
    }

    #[test]
    fn truth_index_out_of_range_is_rejected() {
        let truth = [0, 2];
        let estimate = Array2::from_elem((2, 2), 0.5);
        assert_eq!(
            LogLoss::new().compute(&truth, estimate.view()),
            Err(LossError::LabelOutOfRange {
                index: 2,
                classes: 2,
                observation: 1,
            })
        );
    }

    #[test]
    fn empty_input_is_zero_loss() {
        let estimate = Array2::from_elem((0, 2), 0.0);
        let loss = LogLoss::new().compute(&[], estimate.view()).unwrap();
        assert_abs_diff_eq!(loss, 0.0);
    }

    #[test]
    fn labelled_entry_point_matches_encoded() {
        let levels = ClassLevels::new(vec!["spam", "ham"]).unwrap();
        let estimate = array![[0.7, 0.3], [0.1, 0.9]];
        let labelled = LogLoss::new()
            .compute_labels(&["spam", "ham"], &levels, estimate.view())
            .unwrap();
        let encoded = LogLoss::new().compute(&[0, 1], estimate.view()).unwrap();
        assert_abs_diff_eq!(labelled, encoded);
    }

    #[test]
    fn labelled_entry_point_checks_alignment() {
        let levels = ClassLevels::new(vec!["a", "b", "c"]).unwrap();
        let estimate = Array2::from_elem((2, 2), 0.5);
        assert_eq!(
            LogLoss::new().compute_labels(&["a", "b"], &levels, estimate.view()),
            Err(LossError::ColumnCountMismatch {
                classes: 3,
                columns: 2,
            })
        );
    }
}
