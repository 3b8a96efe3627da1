// SPDX-License-Identifier: AGPL-3.0-only

//! Command-line front end for soil hydraulics and daily vapor pressure.
//!
//! ```text
//! biophys soil --clay 0.15 --sand 0.2 --organic-matter 2.29
//! biophys potential --clay 0.15 --sand 0.2 --organic-matter 2.29 --water-content 0.25
//! biophys humidity --t-min 12 --t-max 28 --rh-max 90 --rh-min 35
//! biophys soils [--input data/soil_samples.json]
//! biophys weather [--input data/weather_days.json]
//! ```
//!
//! Logging goes to stderr and honours `RUST_LOG`.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use environmental_biophysics::batch::{evaluate_soils, evaluate_weather};
use environmental_biophysics::data::{load_soil_samples, load_weather_days};
use environmental_biophysics::discovery::{
    soil_samples_path, try_discover_with_override, weather_days_path,
};
use environmental_biophysics::{BiophysicsError, DailyHumidity, Result, SoilTexture};

#[derive(Parser, Debug)]
#[command(name = "biophys", version, about = "Soil water and vapor pressure calculations")]
struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    json: bool,
    #[arg(long, global = true, help = "Directory containing data/ (overrides discovery)")]
    data_root: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug, Clone, Copy)]
struct TextureArgs {
    #[arg(long, help = "Clay content (fraction, 0-1)")]
    clay: f64,
    #[arg(long, help = "Sand content (fraction, 0-1)")]
    sand: f64,
    #[arg(long, help = "Organic matter (%)")]
    organic_matter: f64,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Hydraulic properties of one soil texture
    Soil {
        #[command(flatten)]
        texture: TextureArgs,
    },
    /// Water potential at a water content, or the reverse
    Potential {
        #[command(flatten)]
        texture: TextureArgs,
        #[arg(long, conflicts_with = "water_potential", help = "Water content (m3/m3)")]
        water_content: Option<f64>,
        #[arg(long, allow_hyphen_values = true, help = "Water potential (J/kg, negative)")]
        water_potential: Option<f64>,
    },
    /// Vapor pressure and deficits for one day
    Humidity {
        #[arg(long, allow_hyphen_values = true)]
        t_min: f64,
        #[arg(long, allow_hyphen_values = true)]
        t_max: f64,
        #[arg(long)]
        rh_max: f64,
        #[arg(long)]
        rh_min: f64,
    },
    /// Evaluate a soil sample file
    Soils {
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Evaluate a daily weather file
    Weather {
        #[arg(long)]
        input: Option<PathBuf>,
    },
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn emit<T: Serialize>(json: bool, value: &T, text: impl FnOnce() -> String) -> Result<()> {
    if json {
        let out = serde_json::to_string_pretty(value)
            .map_err(|e| BiophysicsError::DataLoad(format!("serialize output: {e}")))?;
        println!("{out}");
    } else {
        print!("{}", text());
    }
    Ok(())
}

fn resolve_input(
    input: Option<PathBuf>,
    data_root: Option<&Path>,
    default: fn(&Path) -> PathBuf,
) -> Result<PathBuf> {
    if let Some(path) = input {
        return Ok(path);
    }
    let root = try_discover_with_override(data_root)?;
    Ok(default(&root))
}

fn run(cli: Cli) -> Result<()> {
    let json = cli.json;
    match cli.command {
        Commands::Soil { texture } => {
            let t = SoilTexture::new(texture.clay, texture.sand, texture.organic_matter)?;
            let h = t.hydraulics()?;
            emit(json, &h, || {
                format!(
                    "bulk density      {:.3} Mg/m3\n\
                     saturation        {:.3} m3/m3\n\
                     field capacity    {:.3} m3/m3\n\
                     wilting point     {:.3} m3/m3\n\
                     available water   {:.3} m3/m3\n\
                     Campbell b        {:.3}\n\
                     air-entry         {:.4} J/kg\n\
                     Ks                {:.1} mm/h\n",
                    h.bulk_density,
                    h.saturation,
                    h.field_capacity,
                    h.wilting_point,
                    h.plant_available_water(),
                    h.campbell_b,
                    h.air_entry_potential,
                    h.saturated_conductivity,
                )
            })
        }
        Commands::Potential {
            texture,
            water_content,
            water_potential,
        } => {
            let t = SoilTexture::new(texture.clay, texture.sand, texture.organic_matter)?;
            let h = t.hydraulics()?;
            let (theta, psi) = match (water_content, water_potential) {
                (Some(theta), _) => (theta, h.water_potential(theta)?),
                (None, Some(psi)) => (h.water_content(psi)?, psi),
                (None, None) => (h.field_capacity, h.water_potential(h.field_capacity)?),
            };
            let value = json!({ "water_content": theta, "water_potential": psi });
            emit(json, &value, || {
                format!("water content {theta:.4} m3/m3  water potential {psi:.3} J/kg\n")
            })
        }
        Commands::Humidity {
            t_min,
            t_max,
            rh_max,
            rh_min,
        } => {
            let day = DailyHumidity::new(t_min, t_max, rh_max, rh_min)?;
            let value = json!({
                "vapor_pressure": day.vapor_pressure(),
                "vapor_pressure_deficit": day.vapor_pressure_deficit(),
                "max_vapor_pressure_deficit": day.max_vapor_pressure_deficit(),
            });
            emit(json, &value, || {
                format!(
                    "vapor pressure {:.3} kPa  deficit {:.3} kPa  max deficit {:.3} kPa\n",
                    day.vapor_pressure(),
                    day.vapor_pressure_deficit(),
                    day.max_vapor_pressure_deficit()
                )
            })
        }
        Commands::Soils { input } => {
            let path = resolve_input(input, cli.data_root.as_deref(), soil_samples_path)?;
            info!(path = %path.display(), "evaluating soil samples");
            let reports = evaluate_soils(&load_soil_samples(&path)?);
            emit(json, &reports, || {
                reports
                    .iter()
                    .map(|r| match (&r.hydraulics, &r.error) {
                        (Some(h), _) => format!(
                            "{:<14} fc {:.3}  wp {:.3}  b {:.2}  ψe {:.3}\n",
                            r.id,
                            h.field_capacity,
                            h.wilting_point,
                            h.campbell_b,
                            h.air_entry_potential
                        ),
                        (None, e) => {
                            format!("{:<14} rejected: {}\n", r.id, e.as_deref().unwrap_or(""))
                        }
                    })
                    .collect()
            })
        }
        Commands::Weather { input } => {
            let path = resolve_input(input, cli.data_root.as_deref(), weather_days_path)?;
            info!(path = %path.display(), "evaluating weather days");
            let reports = evaluate_weather(&load_weather_days(&path)?);
            emit(json, &reports, || {
                reports
                    .iter()
                    .map(|r| match (r.vapor_pressure, r.vapor_pressure_deficit, &r.error) {
                        (Some(ea), Some(vpd), _) => {
                            format!("{}  ea {ea:.3} kPa  vpd {vpd:.3} kPa\n", r.date)
                        }
                        (_, _, e) => {
                            format!("{}  rejected: {}\n", r.date, e.as_deref().unwrap_or(""))
                        }
                    })
                    .collect()
            })
        }
    }
}

fn main() -> ExitCode {
    init_tracing();
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "biophys failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
