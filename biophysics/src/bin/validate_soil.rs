// SPDX-License-Identifier: AGPL-3.0-only

//! Soil water characteristics validation.
//!
//! Validates:
//!   1. Saxton & Rawls (2006) θ33, θ1500 and bulk density vs published values
//!   2. Campbell (1985) retention curve ψ(θ), θ(ψ) vs published values
//!   3. Air-entry potential, Campbell b, organic matter saturation
//!   4. Retention curve consistency on derived hydraulics
//!
//! Exit code 0 = all checks pass, 1 = any failure.

use clap::Parser;

use environmental_biophysics::provenance::{self, ReferenceValue, SOIL_REFERENCES};
use environmental_biophysics::soil::{
    air_entry_pot, b_value, bulk_density, organic_m, sat_water_content, vol_water_content_1500_jkg,
    vol_water_content_33_j_kg, water_content, water_potential, SoilTexture,
};
use environmental_biophysics::tolerances;
use environmental_biophysics::validation::ValidationHarness;

#[derive(Parser, Debug)]
#[command(about = "Validate soil regressions against published values")]
struct Opts {
    #[arg(long, help = "Print the summary as JSON")]
    json: bool,
}

fn main() {
    let opts = Opts::parse();
    let mut harness = ValidationHarness::new("soil");

    if !opts.json {
        println!("╔══════════════════════════════════════════════════════════════╗");
        println!("║  Soil Water Characteristics Validation                      ║");
        println!("║  Saxton & Rawls (2006), Campbell (1985)                     ║");
        println!("╚══════════════════════════════════════════════════════════════╝");
        println!();
        harness.print_provenance(SOIL_REFERENCES);
    }

    // ══════════════════════════════════════════════════════════════
    // 1. Texture regressions
    // ══════════════════════════════════════════════════════════════
    let two = tolerances::PUBLISHED_TWO_DECIMALS;
    let texture_cases: [(&ReferenceValue, fn(f64, f64, f64) -> f64); 6] = [
        (&provenance::BULK_DENSITY_LOAMY_SAND, bulk_density),
        (&provenance::BULK_DENSITY_SILT_LOAM, bulk_density),
        (&provenance::FIELD_CAPACITY_LOAMY_SAND, vol_water_content_33_j_kg),
        (&provenance::FIELD_CAPACITY_CLAY_LOAM, vol_water_content_33_j_kg),
        (&provenance::WILTING_POINT_LOAMY_SAND, vol_water_content_1500_jkg),
        (&provenance::WILTING_POINT_CLAY_LOAM, vol_water_content_1500_jkg),
    ];
    for (reference, f) in texture_cases {
        let [clay, sand, om] = reference.inputs else {
            harness.check_bool(reference.label, false);
            continue;
        };
        harness.check_reference(reference, f(*clay, *sand, *om), two);
    }

    harness.check_reference(
        &provenance::SAT_WATER_CONTENT_1_3,
        sat_water_content(1.3),
        tolerances::EXACT_F64,
    );

    // ══════════════════════════════════════════════════════════════
    // 2. Retention curve
    // ══════════════════════════════════════════════════════════════
    for reference in [&provenance::WATER_POTENTIAL_A, &provenance::WATER_POTENTIAL_B] {
        let [ws, psi_e, b, w] = reference.inputs else {
            harness.check_bool(reference.label, false);
            continue;
        };
        let observed = water_potential(*ws, *psi_e, *b, *w).unwrap_or(f64::NAN);
        harness.check_reference(reference, observed, tolerances::EXACT_F64);
    }
    let observed = water_content(0.5, -1.5, 5.0, -52.7).unwrap_or(f64::NAN);
    harness.check_reference(&provenance::WATER_CONTENT, observed, two);

    // ══════════════════════════════════════════════════════════════
    // 3. Curve parameters and organic matter
    // ══════════════════════════════════════════════════════════════
    let observed = b_value(0.08, 0.03).unwrap_or(f64::NAN);
    harness.check_reference(&provenance::B_VALUE, observed, two);
    harness.check_reference(
        &provenance::AIR_ENTRY_POTENTIAL,
        air_entry_pot(0.08, 0.5, 4.33),
        tolerances::PUBLISHED_FOUR_DECIMALS,
    );
    harness.check_reference(&provenance::ORGANIC_MATTER_CLAY_0_5, organic_m(0.5), two);
    harness.check_reference(&provenance::ORGANIC_MATTER_CLAY_0_03, organic_m(0.03), two);

    // ══════════════════════════════════════════════════════════════
    // 4. Derived hydraulics: the curve passes through field capacity
    // ══════════════════════════════════════════════════════════════
    match SoilTexture::new(0.15, 0.2, 2.29).and_then(|t| t.hydraulics()) {
        Ok(h) => {
            let psi_fc = h.water_potential(h.field_capacity).unwrap_or(f64::NAN);
            harness.check_abs("silt loam ψ(θfc) = -33", psi_fc, -33.0, 1e-9);
            let theta = h.water_content(-1500.0).unwrap_or(f64::NAN);
            harness.check_upper("silt loam θ(-1500) < θfc", theta, h.field_capacity);
            harness.check_lower("silt loam Ks > 0", h.saturated_conductivity, 0.0);
        }
        Err(e) => {
            eprintln!("  silt loam hydraulics failed: {e}");
            harness.check_bool("silt loam hydraulics", false);
        }
    }
    harness.check_bool(
        "pure sand rejected",
        SoilTexture::new(0.0, 1.0, 0.0).and_then(|t| t.hydraulics()).is_err(),
    );

    harness.finish(opts.json);
}
