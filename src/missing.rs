//! Missing-value pre-filtering.
//!
//! The loss engine assumes complete input. Callers carrying missing truth
//! labels (`None`) or non-finite probability entries filter them out here
//! before invoking the engine.

use ndarray::{Array2, ArrayView2};

/// Drop observations with a missing truth label or a non-finite estimate row.
///
/// Surviving observations keep their original order. Truth and estimate are
/// paired by position; pass equal-length inputs (a residual length mismatch
/// is reported by the loss engine, not here).
pub fn drop_incomplete(
    truth: &[Option<usize>],
    estimate: ArrayView2<f64>,
) -> (Vec<usize>, Array2<f64>) {
    let mut kept_truth = Vec::new();
    let mut kept_rows = Vec::new();

    for (row, label) in truth.iter().enumerate().take(estimate.nrows()) {
        let Some(class) = label else { continue };
        if estimate.row(row).iter().all(|p| p.is_finite()) {
            kept_truth.push(*class);
            kept_rows.push(row);
        }
    }

    let mut filtered = Array2::zeros((kept_rows.len(), estimate.ncols()));
    for (target, &source) in kept_rows.iter().enumerate() {
        filtered.row_mut(target).assign(&estimate.row(source));
    }

    (kept_truth, filtered)
}

// =============================================================================
// Tests
// =============================================================================
