//! logloss: mean logarithmic loss for classification models.
//!
//! Computes the cross-entropy between true class labels and predicted class
//! probabilities, for binary and multiclass classifiers.
//!
//! # Key Types
//!
//! - [`LogLoss`] - The loss engine, with aggregation and stability options
//! - [`ClassLevels`] - Ordered class-level set and label encoding
//! - [`EstimatorKind`] - Binary vs. multiclass resolution
//! - [`LossError`] - Domain and shape failure taxonomy
//!
//! # Computing a loss
//!
//! ```
//! use logloss::LogLoss;
//! use ndarray::array;
//!
//! let truth = [0, 1];
//! let estimate = array![[0.9, 0.1], [0.2, 0.8]];
//! let loss = LogLoss::new().compute(&truth, estimate.view()).unwrap();
//! assert!(loss < 0.2);
//! ```
//!
//! Binary problems take a shorthand: a single probability per observation
//! for the first (positive) level, expanded internally to `[p, 1 - p]`.
//!
//! ```
//! use logloss::LogLoss;
//! use ndarray::array;
//!
//! let truth = [0, 0, 1];
//! let positive = array![0.9, 0.8, 0.4];
//! let loss = LogLoss::new().compute_binary(&truth, positive.view()).unwrap();
//! assert!(loss.is_finite());
//! ```

// Re-export approx traits for users who want to compare losses in tests
pub use approx;

pub mod error;
pub mod estimator;
pub mod labels;
pub mod loss;
pub mod missing;
pub mod testing;

// =============================================================================
// Convenience Re-exports
// =============================================================================

pub use error::LossError;
pub use estimator::EstimatorKind;
pub use labels::{indicator_matrix, ClassLevels};
pub use loss::{expand_binary, Aggregation, LogLoss};
pub use missing::drop_incomplete;
