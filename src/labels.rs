//! Class levels and one-hot encoding.
//!
//! A [`ClassLevels`] value fixes the ordering that aligns truth labels with
//! probability columns: column `j` of an estimate matrix is the predicted
//! probability of level `j`. The indicator builder turns an encoded truth
//! vector into the one-hot matrix the loss engine masks against.

use ndarray::Array2;

use crate::error::LossError;

/// A fixed, ordered, duplicate-free set of class levels.
///
/// The level ordering is the column ordering of every probability matrix
/// evaluated against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassLevels<L> {
    levels: Vec<L>,
}

impl<L: Eq + std::fmt::Debug> ClassLevels<L> {
    /// Create a level set from an ordered list of labels.
    ///
    /// Fails with [`LossError::NotEnoughClasses`] for fewer than two levels
    /// and [`LossError::DuplicateLevel`] for repeated labels.
    pub fn new(levels: Vec<L>) -> Result<Self, LossError> {
        if levels.len() < 2 {
            return Err(LossError::NotEnoughClasses {
                classes: levels.len(),
            });
        }
        for index in 1..levels.len() {
            if levels[..index].contains(&levels[index]) {
                return Err(LossError::DuplicateLevel { index });
            }
        }
        Ok(Self { levels })
    }

    /// Number of levels.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Always false: construction rejects sets with fewer than two levels.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// The levels in column order.
    pub fn levels(&self) -> &[L] {
        &self.levels
    }

    /// Position of `label` in the level ordering.
    pub fn index_of(&self, label: &L) -> Option<usize> {
        self.levels.iter().position(|level| level == label)
    }

    /// Encode a label sequence as class indices into the level ordering.
    pub fn encode(&self, truth: &[L]) -> Result<Vec<usize>, LossError> {
        truth
            .iter()
            .map(|label| {
                self.index_of(label).ok_or_else(|| LossError::UnknownLevel {
                    label: format!("{label:?}"),
                })
            })
            .collect()
    }
}

/// Build the N×K one-hot indicator matrix for an encoded truth vector.
///
/// Row `i` carries a single 1.0 in column `truth[i]`; every other entry is
/// exactly 0. A truth index outside `0..n_classes` fails with
/// [`LossError::LabelOutOfRange`] before the matrix is constructed.
pub fn indicator_matrix(truth: &[usize], n_classes: usize) -> Result<Array2<f64>, LossError> {
    for (observation, &index) in truth.iter().enumerate() {
        if index >= n_classes {
            return Err(LossError::LabelOutOfRange {
                index,
                classes: n_classes,
                observation,
            });
        }
    }

    let mut indicator = Array2::zeros((truth.len(), n_classes));
    for (row, &index) in truth.iter().enumerate() {
        indicator[[row, index]] = 1.0;
    }

    // Exactly one 1 per row; the masking step depends on it.
    debug_assert!(
        indicator.rows().into_iter().all(|row| row.sum() == 1.0),
        "indicator row must sum to exactly 1"
    );

    Ok(indicator)
}

// =============================================================================
// Tests
// =============================================================================
