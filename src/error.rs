//! Error types for chisq-posthoc

use thiserror::Error;

/// Main error type for contingency-table analysis
#[derive(Error, Debug)]
pub enum ChisqError {
    #[error("Table has {rows} row(s) and {cols} column(s); at least 2 of each are required")]
    Dimension { rows: usize, cols: usize },

    #[error("Invalid contingency table: {reason}")]
    InvalidTable { reason: String },

    #[error("No p-values to correct: the batch is empty")]
    EmptyBatch,

    #[error("P-value {value} is outside [0, 1]")]
    InvalidPValue { value: f64 },

    #[error("Unknown correction method '{name}'. Use: fdr_bh, bonferroni, holm, or sidak")]
    UnknownCorrectionMethod { name: String },

    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for contingency-table analysis
pub type Result<T> = std::result::Result<T, ChisqError>;
