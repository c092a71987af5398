//! Synthetic data helpers for tests.

use ndarray::Array2;
use rand::prelude::*;

/// Generate a seeded N×K matrix of class-probability rows.
///
/// Entries are uniform draws bounded away from zero, then row-normalized so
/// every row is a probability distribution.
pub fn random_probability_matrix(rows: usize, classes: usize, seed: u64) -> Array2<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut matrix = Array2::zeros((rows, classes));
    for mut row in matrix.rows_mut() {
        let mut total = 0.0;
        for p in row.iter_mut() {
            *p = rng.gen::<f64>().max(1e-3);
            total += *p;
        }
        for p in row.iter_mut() {
            *p /= total;
        }
    }
    matrix
}

/// Generate seeded uniform class indices in `0..classes`.
pub fn random_truth(rows: usize, classes: usize, seed: u64) -> Vec<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..rows).map(|_| rng.gen_range(0..classes)).collect()
}

// =============================================================================
// Tests
// =============================================================================
