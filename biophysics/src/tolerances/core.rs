// SPDX-License-Identifier: AGPL-3.0-only

//! Machine-precision tolerances (IEEE 754 f64).

/// Tolerance for closed-form expressions that should reproduce to f64 precision.
///
/// A handful of multiplications, one `exp`/`powf`; 1e-10 leaves five digits of
/// headroom for libm differences across platforms.
pub const EXACT_F64: f64 = 1e-10;

/// Below this magnitude an expected value is treated as zero and relative
/// checks fall back to absolute.
pub const NEAR_ZERO_EXPECTED: f64 = 1e-14;
