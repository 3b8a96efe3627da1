// SPDX-License-Identifier: AGPL-3.0-only

//! Physical and empirical constants.

/// Mineral particle density (Mg/m³).
pub const MIN_SOIL_PARTICLE_DENS: f64 = 2.65;

/// Matric potential magnitude at field capacity (J/kg).
pub const FIELD_CAPACITY_J_KG: f64 = 33.0;
/// Matric potential magnitude at the permanent wilting point (J/kg).
pub const WILTING_POINT_J_KG: f64 = 1500.0;

/// Saturation vapor pressure at 0 °C (kPa), Campbell & Norman eq. 3.8.
pub const TETENS_A: f64 = 0.611;
/// Tetens exponent coefficient (dimensionless).
pub const TETENS_B: f64 = 17.502;
/// Tetens temperature offset (°C).
pub const TETENS_C: f64 = 240.97;

/// Thermodynamic psychrometer constant cp/λ (°C⁻¹), Campbell & Norman eq. 3.16.
pub const PSYCHROMETER_CONSTANT: f64 = 6.66e-4;
/// Mean sea-level atmospheric pressure (kPa).
pub const SEA_LEVEL_PRESSURE_KPA: f64 = 101.3;
/// Atmospheric scale height (m), Campbell & Norman eq. 3.7.
pub const SCALE_HEIGHT_M: f64 = 8200.0;

/// Mass fraction of carbon in soil organic matter.
pub const CARBON_FRACTION_OF_OM: f64 = 0.58;

/// Saxton & Rawls (2006) eq. 16 saturated conductivity coefficient (mm/h).
pub const KSAT_COEFFICIENT_MM_H: f64 = 1930.0;

/// Upper organic matter bound (%) of the Saxton & Rawls (2006) fitting data.
pub const MAX_ORGANIC_MATTER_PERCENT: f64 = 8.0;
