// SPDX-License-Identifier: AGPL-3.0-only

//! Water vapor in air: saturation, actual vapor pressure, and deficits.
//!
//! Daily vapor pressure follows the min/max humidity averaging used by
//! crop models fed with station weather; saturation follows the Tetens form.
//!
//! Reference: Campbell, G.S., Norman, J.M., 1998. An Introduction to
//!            Environmental Biophysics, 2nd ed. Springer, New York. Ch. 3.

use serde::{Deserialize, Serialize};

use crate::constants::{
    PSYCHROMETER_CONSTANT, SCALE_HEIGHT_M, SEA_LEVEL_PRESSURE_KPA, TETENS_A, TETENS_B, TETENS_C,
};
use crate::error::{require_positive, require_within, BiophysicsError, Result};

/// Vapor pressure of air (kPa) from the saturation pressures at the daily
/// temperature extremes and the relative humidity extremes (0–100).
///
/// e_a = ½ · (e_s(T_min)·RH_max/100 + e_s(T_max)·RH_min/100)
///
/// The minimum temperature pairs with the maximum humidity (dawn) and the
/// maximum temperature with the minimum humidity (afternoon).
#[must_use]
pub fn vapor_pressure_air(
    vapor_pressure_temp_min: f64,
    vapor_pressure_temp_max: f64,
    rh_max: f64,
    rh_min: f64,
) -> f64 {
    0.5 * (vapor_pressure_temp_min * rh_max / 100.0 + vapor_pressure_temp_max * rh_min / 100.0)
}

/// Average vapor pressure deficit (kPa): mean saturation pressure minus the
/// vapor pressure of air.
#[must_use]
pub fn vapor_press_defct_ave(
    max_sat_vap_press: f64,
    min_sat_vap_press: f64,
    air_vap_press: f64,
) -> f64 {
    (max_sat_vap_press + min_sat_vap_press) / 2.0 - air_vap_press
}

/// Maximum vapor pressure deficit (kPa) at the afternoon humidity minimum.
///
/// The 0.67 factor scales the peak deficit to a daytime-weighted value.
#[must_use]
pub fn vapor_press_defct_max(max_sat_vap_press: f64, min_relative_humidity: f64) -> f64 {
    0.67 * max_sat_vap_press * (1.0 - min_relative_humidity / 100.0)
}

/// Saturation vapor pressure (kPa) at air temperature `t` (°C). Eq. 3.8.
#[must_use]
pub fn saturation_vapor_pressure(t: f64) -> f64 {
    TETENS_A * (TETENS_B * t / (t + TETENS_C)).exp()
}

/// Slope of the saturation vapor pressure curve (kPa/°C). Eq. 3.9.
#[must_use]
pub fn saturation_vapor_pressure_slope(t: f64) -> f64 {
    TETENS_B * TETENS_C * saturation_vapor_pressure(t) / (TETENS_C + t).powi(2)
}

/// Relative humidity as a fraction (0–1) of vapor pressure `ea` (kPa) at `t` (°C).
#[must_use]
pub fn relative_humidity(ea: f64, t: f64) -> f64 {
    ea / saturation_vapor_pressure(t)
}

/// Dew point temperature (°C) for vapor pressure `ea` (kPa). Eq. 3.14.
///
/// # Errors
///
/// Returns [`BiophysicsError::InvalidInput`] when `ea` is not positive.
pub fn dew_point(ea: f64) -> Result<f64> {
    let ea = require_positive("ea", ea)?;
    let x = (ea / TETENS_A).ln();
    Ok(TETENS_C * x / (TETENS_B - x))
}

/// Mean atmospheric pressure (kPa) at `elevation_m` above sea level. Eq. 3.7.
#[must_use]
pub fn atmospheric_pressure(elevation_m: f64) -> f64 {
    SEA_LEVEL_PRESSURE_KPA * (-elevation_m / SCALE_HEIGHT_M).exp()
}

/// Psychrometric constant γ (kPa/°C) at atmospheric pressure `pa` (kPa).
#[must_use]
pub fn psychrometric_constant(pa: f64) -> f64 {
    PSYCHROMETER_CONSTANT * pa
}

/// One day of station humidity observations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyHumidity {
    /// Minimum air temperature (°C).
    pub t_min: f64,
    /// Maximum air temperature (°C).
    pub t_max: f64,
    /// Maximum relative humidity (%).
    pub rh_max: f64,
    /// Minimum relative humidity (%).
    pub rh_min: f64,
}

impl DailyHumidity {
    /// Validate and build a day of observations.
    ///
    /// # Errors
    ///
    /// Returns [`BiophysicsError::InvalidInput`] when a temperature is not
    /// finite, `t_min > t_max`, a humidity is outside 0–100, or
    /// `rh_min > rh_max`.
    pub fn new(t_min: f64, t_max: f64, rh_max: f64, rh_min: f64) -> Result<Self> {
        let t_min = require_within("t_min", t_min, f64::MIN, f64::MAX)?;
        let t_max = require_within("t_max", t_max, f64::MIN, f64::MAX)?;
        if t_min > t_max {
            return Err(BiophysicsError::invalid("t_min", t_min, "exceeds t_max"));
        }
        let rh_max = require_within("rh_max", rh_max, 0.0, 100.0)?;
        let rh_min = require_within("rh_min", rh_min, 0.0, 100.0)?;
        if rh_min > rh_max {
            return Err(BiophysicsError::invalid("rh_min", rh_min, "exceeds rh_max"));
        }
        Ok(Self {
            t_min,
            t_max,
            rh_max,
            rh_min,
        })
    }

    /// Saturation vapor pressure at the minimum temperature (kPa).
    #[must_use]
    pub fn saturation_at_min(&self) -> f64 {
        saturation_vapor_pressure(self.t_min)
    }

    /// Saturation vapor pressure at the maximum temperature (kPa).
    #[must_use]
    pub fn saturation_at_max(&self) -> f64 {
        saturation_vapor_pressure(self.t_max)
    }

    /// Daily vapor pressure of air (kPa).
    #[must_use]
    pub fn vapor_pressure(&self) -> f64 {
        vapor_pressure_air(
            self.saturation_at_min(),
            self.saturation_at_max(),
            self.rh_max,
            self.rh_min,
        )
    }

    /// Average vapor pressure deficit (kPa).
    #[must_use]
    pub fn vapor_pressure_deficit(&self) -> f64 {
        vapor_press_defct_ave(
            self.saturation_at_max(),
            self.saturation_at_min(),
            self.vapor_pressure(),
        )
    }

    /// Maximum vapor pressure deficit (kPa).
    #[must_use]
    pub fn max_vapor_pressure_deficit(&self) -> f64 {
        vapor_press_defct_max(self.saturation_at_max(), self.rh_min)
    }
}
