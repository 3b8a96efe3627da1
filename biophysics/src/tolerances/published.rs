// SPDX-License-Identifier: AGPL-3.0-only

//! Tolerances for reference values printed with a fixed number of decimals.
//!
//! Saxton & Rawls (2006) worked examples and the package reference values are
//! rounded, so a recomputed value can sit up to one unit in the last printed
//! digit away (e.g. water content 0.2454 published as 0.24).

/// Values printed with two decimals (bulk density, water contents, b).
pub const PUBLISHED_TWO_DECIMALS: f64 = 0.01;

/// Values printed with three decimals (vapor pressure of air, 1.455 kPa).
pub const PUBLISHED_THREE_DECIMALS: f64 = 1e-3;

/// Values printed with four decimals (air-entry potential, −0.0118 J/kg).
pub const PUBLISHED_FOUR_DECIMALS: f64 = 1e-4;

/// Campbell & Norman (1998) Table A.3 saturation vapor pressure, two decimals
/// in kPa, compared against the Tetens form of eq. 3.8.
pub const TABLE_A3_KPA: f64 = 0.01;
