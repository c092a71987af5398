//! Estimator-kind resolution.
//!
//! Binary problems are a projection of the multiclass path (a two-column
//! probability matrix), not a parallel implementation. Resolving the kind up
//! front is what keeps the loss engine itself branch-free.

use serde::{Deserialize, Serialize};

use crate::error::LossError;

/// How the class-probability columns are arranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EstimatorKind {
    /// Exactly two class levels.
    Binary,
    /// Three or more class levels.
    Multiclass,
}

impl EstimatorKind {
    /// Resolve the estimator kind from the number of class levels.
    ///
    /// Fewer than two levels fails with [`LossError::NotEnoughClasses`];
    /// the loss is undefined for a single-class problem.
    pub fn resolve(n_classes: usize) -> Result<Self, LossError> {
        match n_classes {
            0 | 1 => Err(LossError::NotEnoughClasses { classes: n_classes }),
            2 => Ok(EstimatorKind::Binary),
            _ => Ok(EstimatorKind::Multiclass),
        }
    }

    /// Number of probability columns this kind pins down, if any.
    ///
    /// `Binary` requires exactly two columns; `Multiclass` accepts any
    /// column count of at least two.
    pub fn expected_columns(&self) -> Option<usize> {
        match self {
            EstimatorKind::Binary => Some(2),
            EstimatorKind::Multiclass => None,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
