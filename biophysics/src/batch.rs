// SPDX-License-Identifier: AGPL-3.0-only

//! Parallel evaluation of many soil samples and weather days.
//!
//! Each record is independent, so work fans out over rayon's global pool;
//! `collect` on an indexed parallel iterator keeps input order. A bad record
//! yields an error report instead of aborting the batch.

use rayon::prelude::*;
use serde::Serialize;
use tracing::warn;

use crate::data::{SoilSample, WeatherDay};
use crate::soil::SoilHydraulics;

/// Derived hydraulics (or the rejection reason) for one sample.
#[derive(Debug, Clone, Serialize)]
pub struct SoilReport {
    /// Sample identifier
    pub id: String,
    /// Derived properties, when the sample is valid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hydraulics: Option<SoilHydraulics>,
    /// Plant-available water (m³/m³)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plant_available_water: Option<f64>,
    /// Why the sample was rejected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Vapor pressure summary (or the rejection reason) for one day.
#[derive(Debug, Clone, Serialize)]
pub struct WeatherReport {
    /// ISO 8601 date
    pub date: String,
    /// Vapor pressure of air (kPa)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vapor_pressure: Option<f64>,
    /// Average vapor pressure deficit (kPa)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vapor_pressure_deficit: Option<f64>,
    /// Maximum vapor pressure deficit (kPa)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_vapor_pressure_deficit: Option<f64>,
    /// Why the day was rejected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SoilReport {
    /// Whether the sample produced hydraulics.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.hydraulics.is_some()
    }
}

impl WeatherReport {
    /// Whether the day produced vapor pressures.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.vapor_pressure.is_some()
    }
}

fn evaluate_soil(sample: &SoilSample) -> SoilReport {
    match sample.texture().and_then(|t| t.hydraulics()) {
        Ok(h) => SoilReport {
            id: sample.id.clone(),
            hydraulics: Some(h),
            plant_available_water: Some(h.plant_available_water()),
            error: None,
        },
        Err(e) => {
            warn!(id = %sample.id, error = %e, "rejected soil sample");
            SoilReport {
                id: sample.id.clone(),
                hydraulics: None,
                plant_available_water: None,
                error: Some(e.to_string()),
            }
        }
    }
}

fn evaluate_day(day: &WeatherDay) -> WeatherReport {
    match day.humidity() {
        Ok(h) => WeatherReport {
            date: day.date.clone(),
            vapor_pressure: Some(h.vapor_pressure()),
            vapor_pressure_deficit: Some(h.vapor_pressure_deficit()),
            max_vapor_pressure_deficit: Some(h.max_vapor_pressure_deficit()),
            error: None,
        },
        Err(e) => {
            warn!(date = %day.date, error = %e, "rejected weather day");
            WeatherReport {
                date: day.date.clone(),
                vapor_pressure: None,
                vapor_pressure_deficit: None,
                max_vapor_pressure_deficit: None,
                error: Some(e.to_string()),
            }
        }
    }
}

/// Evaluate every sample in parallel, preserving input order.
#[must_use]
pub fn evaluate_soils(samples: &[SoilSample]) -> Vec<SoilReport> {
    samples.par_iter().map(evaluate_soil).collect()
}

/// Evaluate every weather day in parallel, preserving input order.
#[must_use]
pub fn evaluate_weather(days: &[WeatherDay]) -> Vec<WeatherReport> {
    days.par_iter().map(evaluate_day).collect()
}
