//! Error types for generator operations
//!
//! Every failure is a caller contract violation surfaced synchronously.
//! There is no I/O, so nothing here is transient or retryable.

use thiserror::Error;

/// Errors returned by bounded draws and configuration loading
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrngError {
    /// Upper bound below lower bound.
    ///
    /// Bounds are kept in their `Display` form so the same variant serves
    /// `i64`, `BigInt` and `BigDecimal` ranges.
    #[error("Invalid range: high ({high}) is less than low ({low})")]
    InvalidRange { low: String, high: String },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Failed to parse config: {0}")]
    ConfigParse(String),
}

impl PrngError {
    pub(crate) fn invalid_range(low: impl ToString, high: impl ToString) -> Self {
        PrngError::InvalidRange {
            low: low.to_string(),
            high: high.to_string(),
        }
    }
}

/// Result alias used throughout the crate
pub type PrngResult<T> = Result<T, PrngError>;
