// SPDX-License-Identifier: AGPL-3.0-only

//! Integration tests: daily humidity → vapor pressure and deficits.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use environmental_biophysics::gas::{
    atmospheric_pressure, dew_point, psychrometric_constant, saturation_vapor_pressure,
    saturation_vapor_pressure_slope, vapor_pressure_air,
};
use environmental_biophysics::provenance::{self, SATURATION_TABLE_A3};
use environmental_biophysics::{tolerances, DailyHumidity};

#[test]
fn vapor_pressure_air_published_example() {
    let r = &provenance::VAPOR_PRESSURE_AIR;
    let ea = vapor_pressure_air(r.inputs[0], r.inputs[1], r.inputs[2], r.inputs[3]);
    assert!((ea - r.value).abs() < tolerances::PUBLISHED_THREE_DECIMALS, "ea = {ea}");
}

#[test]
fn tetens_matches_table_a3() {
    for &(t, es) in SATURATION_TABLE_A3 {
        let observed = saturation_vapor_pressure(t);
        assert!(
            (observed - es).abs() < tolerances::TABLE_A3_KPA,
            "e_s({t}) = {observed}, table {es}"
        );
    }
}

#[test]
fn slope_at_20c_matches_table() {
    // Table A.3: Δ(20 °C) = 0.145 kPa/°C
    let s = saturation_vapor_pressure_slope(20.0);
    assert!((s - 0.145).abs() < 1e-3, "Δ(20) = {s}");
}

#[test]
fn dew_point_of_daily_vapor_pressure_lies_within_day() {
    let day = DailyHumidity::new(12.4, 27.9, 91.0, 38.0).unwrap();
    let td = dew_point(day.vapor_pressure()).unwrap();
    assert!(td < day.t_max, "dew point {td} must be below t_max");
    assert!(td > day.t_min - 10.0, "dew point {td} unreasonably low");
}

#[test]
fn drier_afternoon_raises_deficit() {
    let humid = DailyHumidity::new(15.0, 30.0, 95.0, 70.0).unwrap();
    let dry = DailyHumidity::new(15.0, 30.0, 95.0, 20.0).unwrap();
    assert!(dry.vapor_pressure() < humid.vapor_pressure());
    assert!(dry.vapor_pressure_deficit() > humid.vapor_pressure_deficit());
    assert!(dry.max_vapor_pressure_deficit() > humid.max_vapor_pressure_deficit());
}

#[test]
fn psychrometric_constant_falls_with_altitude() {
    let sea = psychrometric_constant(atmospheric_pressure(0.0));
    let high = psychrometric_constant(atmospheric_pressure(3000.0));
    assert!(high < sea);
    assert!((sea - 0.0674658).abs() < 1e-7);
}
