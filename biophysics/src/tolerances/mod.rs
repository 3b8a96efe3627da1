// SPDX-License-Identifier: AGPL-3.0-only

//! Centralized validation tolerances with their justification.
//!
//! Every threshold used by the validation binaries and tests is defined here
//! with the origin of its magnitude. No ad-hoc magic numbers.
//!
//! # Tolerance categories
//!
//! | Category | Basis | Example |
//! |----------|-------|---------|
//! | Machine precision | IEEE 754 f64 | 1e-10 for closed-form arithmetic |
//! | Published rounding | Digits printed in the source table | 0.01 for two decimals |
//!
//! Reference values themselves live in `provenance.rs`.

/// Machine-precision tolerances.
pub mod core;
/// Tolerances for reference values published with fixed decimals.
pub mod published;

pub use core::{EXACT_F64, NEAR_ZERO_EXPECTED};
pub use published::{
    PUBLISHED_FOUR_DECIMALS, PUBLISHED_THREE_DECIMALS, PUBLISHED_TWO_DECIMALS, TABLE_A3_KPA,
};
