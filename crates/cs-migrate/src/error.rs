//! Error types for the migration sequencer.

use thiserror::Error;

/// Migration sequencer errors.
#[derive(Error, Debug)]
pub enum MigrateError {
    /// A verification row lacks a required column or holds a non-integer (M001).
    #[error("[M001] Verification row {row} has no usable '{column}' column")]
    MissingColumn { row: usize, column: String },

    /// A step failed and the caller asked for a strict result (M002).
    #[error("[M002] Step '{step}' failed: {message}")]
    StepFailed { step: String, message: String },

    /// The verification step did not produce any rows (M003).
    #[error("[M003] Verification did not return any rows")]
    Unverified,
}

/// Result type alias for [`MigrateError`].
pub type MigrateResult<T> = Result<T, MigrateError>;
