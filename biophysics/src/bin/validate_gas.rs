// SPDX-License-Identifier: AGPL-3.0-only

//! Atmospheric water vapor validation.
//!
//! Validates:
//!   1. Vapor pressure of air vs the published worked example
//!   2. Tetens saturation vapor pressure vs Campbell & Norman Table A.3
//!   3. Dew point inverts saturation; deficits vanish in saturated air
//!
//! Exit code 0 = all checks pass, 1 = any failure.

use clap::Parser;

use environmental_biophysics::gas::{
    dew_point, saturation_vapor_pressure, vapor_press_defct_ave, vapor_press_defct_max,
    vapor_pressure_air,
};
use environmental_biophysics::provenance::{self, GAS_REFERENCES, SATURATION_TABLE_A3};
use environmental_biophysics::tolerances;
use environmental_biophysics::validation::ValidationHarness;

#[derive(Parser, Debug)]
#[command(about = "Validate vapor pressure relations against published values")]
struct Opts {
    #[arg(long, help = "Print the summary as JSON")]
    json: bool,
}

fn main() {
    let opts = Opts::parse();
    let mut harness = ValidationHarness::new("gas");

    if !opts.json {
        println!("╔══════════════════════════════════════════════════════════════╗");
        println!("║  Atmospheric Water Vapor Validation                         ║");
        println!("║  Campbell & Norman (1998) ch. 3                             ║");
        println!("╚══════════════════════════════════════════════════════════════╝");
        println!();
        harness.print_provenance(GAS_REFERENCES);
    }

    let ea = vapor_pressure_air(1.817, 5.320, 87.0, 25.0);
    harness.check_reference(
        &provenance::VAPOR_PRESSURE_AIR,
        ea,
        tolerances::PUBLISHED_THREE_DECIMALS,
    );

    for &(t, es) in SATURATION_TABLE_A3 {
        let label = format!("e_s({t} °C) vs Table A.3");
        harness.check_abs(&label, saturation_vapor_pressure(t), es, tolerances::TABLE_A3_KPA);
    }

    for t in [-5.0, 5.0, 15.0, 25.0, 35.0] {
        let td = dew_point(saturation_vapor_pressure(t)).unwrap_or(f64::NAN);
        harness.check_abs(&format!("dew point at saturation, {t} °C"), td, t, 1e-9);
    }

    let es = saturation_vapor_pressure(20.0);
    let ea_sat = vapor_pressure_air(es, es, 100.0, 100.0);
    harness.check_abs(
        "saturated air: average deficit",
        vapor_press_defct_ave(es, es, ea_sat),
        0.0,
        tolerances::EXACT_F64,
    );
    harness.check_abs(
        "saturated air: max deficit",
        vapor_press_defct_max(es, 100.0),
        0.0,
        tolerances::EXACT_F64,
    );

    harness.finish(opts.json);
}
