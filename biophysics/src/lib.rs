// SPDX-License-Identifier: AGPL-3.0-only

//! environmental-biophysics — soil water and atmospheric vapor relations
//!
//! Texture-based soil hydraulic properties (Saxton & Rawls 2006), the
//! Campbell retention curve, and daily vapor pressure from station
//! humidity (Campbell & Norman 1998).
//!
//! ## Modules
//!   - `soil` — bulk density, θ33/θ1500, Campbell b, ψ(θ) and θ(ψ)
//!   - `gas` — saturation and actual vapor pressure, deficits, dew point
//!   - `batch` — parallel evaluation of sample files
//!   - `data` / `discovery` — JSON records and data root lookup
//!
//! ## Binaries
//!   - `biophys` — command-line front end
//!   - `validate_soil` — soil regressions vs published values
//!   - `validate_gas` — vapor relations vs published values and Table A.3
//!   - `validate_all` — runs every validation binary
//!   - `tasks` — format, lint, type-check and test in one run
//!
//! ```
//! use environmental_biophysics::soil::SoilTexture;
//!
//! let loam = SoilTexture::new(0.15, 0.2, 2.29)?;
//! let h = loam.hydraulics()?;
//! assert!(h.field_capacity > h.wilting_point);
//! let psi = h.water_potential(h.field_capacity)?;
//! assert!((psi + 33.0).abs() < 1e-9);
//! # Ok::<(), environmental_biophysics::error::BiophysicsError>(())
//! ```

pub mod batch;
pub mod constants;
pub mod data;
pub mod discovery;
pub mod error;
pub mod gas;
pub mod provenance;
pub mod soil;
pub mod tolerances;
pub mod validation;

pub use error::{BiophysicsError, Result};
pub use gas::DailyHumidity;
pub use soil::{SoilHydraulics, SoilTexture};
