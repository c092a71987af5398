//! Error types for loss computation.

/// Failure modes of a log-loss computation.
///
/// Every variant is fatal to the single call that raised it: there is no
/// partial result and nothing to retry. Near-zero probabilities are *not*
/// errors; the loss engine clamps them to its stability floor instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LossError {
    /// Fewer than two class levels; the loss is undefined.
    #[error("at least two classes required, got {classes}")]
    NotEnoughClasses { classes: usize },

    /// The level set contains the same label more than once.
    #[error("class levels must be unique, level at index {index} is a duplicate")]
    DuplicateLevel { index: usize },

    /// A truth label does not appear in the level set.
    #[error("truth label {label} not found in the level set")]
    UnknownLevel { label: String },

    /// Truth length and estimate row count disagree.
    #[error("number of estimate rows ({rows}) does not match number of truth values ({truth})")]
    RowCountMismatch { truth: usize, rows: usize },

    /// Estimate column count disagrees with the number of classes.
    #[error("number of estimate columns ({columns}) does not match number of classes ({classes})")]
    ColumnCountMismatch { classes: usize, columns: usize },

    /// A truth class index is outside `0..n_classes`.
    #[error("truth index {index} out of range for {classes} classes (observation {observation})")]
    LabelOutOfRange {
        index: usize,
        classes: usize,
        observation: usize,
    },
}
