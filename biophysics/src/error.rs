// SPDX-License-Identifier: AGPL-3.0-only

//! Typed errors for soil and atmosphere computations.
//!
//! Pure regressions (Saxton & Rawls, Campbell & Norman) never fail; the
//! operations that take logs or fractional powers of caller-supplied values
//! return `Result` so callers can pattern-match on the offending input
//! instead of receiving `NaN`.

use thiserror::Error;

/// Errors arising from invalid physical inputs or data loading.
#[derive(Debug, Error)]
pub enum BiophysicsError {
    /// An input is outside the domain of the formula it feeds.
    #[error("invalid {name} = {value}: {reason}")]
    InvalidInput {
        /// Parameter name as it appears in the public API.
        name: &'static str,
        /// Offending value.
        value: f64,
        /// Which constraint was violated.
        reason: &'static str,
    },

    /// Data file loading failed (path, underlying IO or parse error).
    #[error("data loading failed: {0}")]
    DataLoad(String),
}

impl BiophysicsError {
    /// Shorthand for [`BiophysicsError::InvalidInput`].
    #[must_use]
    pub const fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidInput {
            name,
            value,
            reason,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BiophysicsError>;

/// Reject non-finite and non-positive values.
pub(crate) fn require_positive(name: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(BiophysicsError::invalid(name, value, "must be finite"));
    }
    if value <= 0.0 {
        return Err(BiophysicsError::invalid(name, value, "must be positive"));
    }
    Ok(value)
}

/// Reject values outside the closed interval `[lo, hi]` (NaN included).
pub(crate) fn require_within(name: &'static str, value: f64, lo: f64, hi: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(BiophysicsError::invalid(name, value, "must be finite"));
    }
    if value < lo || value > hi {
        return Err(BiophysicsError::invalid(name, value, "out of range"));
    }
    Ok(value)
}
