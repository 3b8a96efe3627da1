// SPDX-License-Identifier: AGPL-3.0-only

//! Soil sample and daily weather loading.
//!
//! Two JSON layouts:
//!   - soils: `{"samples": [{"id", "clay", "sand", "organic_matter"}]}`
//!   - weather: `{"days": [{"date", "t_min", "t_max", "rh_max", "rh_min"}]}`
//!
//! Records are loaded as-is; physical validation happens when a record is
//! turned into a [`SoilTexture`] or [`DailyHumidity`].

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{BiophysicsError, Result};
use crate::gas::DailyHumidity;
use crate::soil::SoilTexture;

/// One soil sample as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoilSample {
    /// Sample identifier
    pub id: String,
    /// Clay content (fraction)
    pub clay: f64,
    /// Sand content (fraction)
    pub sand: f64,
    /// Organic matter (%)
    pub organic_matter: f64,
}

impl SoilSample {
    /// Validate into a [`SoilTexture`].
    ///
    /// # Errors
    ///
    /// See [`SoilTexture::new`].
    pub fn texture(&self) -> Result<SoilTexture> {
        SoilTexture::new(self.clay, self.sand, self.organic_matter)
    }
}

/// One day of weather as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherDay {
    /// ISO 8601 date
    pub date: String,
    /// Minimum air temperature (°C)
    pub t_min: f64,
    /// Maximum air temperature (°C)
    pub t_max: f64,
    /// Maximum relative humidity (%)
    pub rh_max: f64,
    /// Minimum relative humidity (%)
    pub rh_min: f64,
}

impl WeatherDay {
    /// Validate into a [`DailyHumidity`].
    ///
    /// # Errors
    ///
    /// See [`DailyHumidity::new`].
    pub fn humidity(&self) -> Result<DailyHumidity> {
        DailyHumidity::new(self.t_min, self.t_max, self.rh_max, self.rh_min)
    }
}

#[derive(Debug, Deserialize)]
struct SoilFile {
    samples: Vec<SoilSample>,
}

#[derive(Debug, Deserialize)]
struct WeatherFile {
    days: Vec<WeatherDay>,
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path)
        .map_err(|e| BiophysicsError::DataLoad(format!("{}: {e}", path.display())))?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| BiophysicsError::DataLoad(format!("{}: {e}", path.display())))
}

/// Load soil samples from a JSON file.
///
/// Uses streaming `from_reader` to avoid buffering the whole file.
///
/// # Errors
///
/// Returns `BiophysicsError::DataLoad` if the file cannot be opened or
/// deserialization fails.
pub fn load_soil_samples(path: &Path) -> Result<Vec<SoilSample>> {
    read_json::<SoilFile>(path).map(|f| f.samples)
}

/// Load daily weather records from a JSON file.
///
/// # Errors
///
/// Returns `BiophysicsError::DataLoad` if the file cannot be opened or
/// deserialization fails.
pub fn load_weather_days(path: &Path) -> Result<Vec<WeatherDay>> {
    read_json::<WeatherFile>(path).map(|f| f.days)
}
