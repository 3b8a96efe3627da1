// SPDX-License-Identifier: AGPL-3.0-only

//! Integration tests: bundled data files, discovery and batch evaluation.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use environmental_biophysics::batch::{evaluate_soils, evaluate_weather};
use environmental_biophysics::data::{load_soil_samples, load_weather_days};
use environmental_biophysics::discovery::{
    soil_samples_path, try_discover_data_root, weather_days_path,
};

#[test]
fn bundled_soils_all_evaluate() {
    let root = try_discover_data_root().expect("data root");
    let samples = load_soil_samples(&soil_samples_path(&root)).unwrap();
    assert!(samples.len() >= 5);
    let reports = evaluate_soils(&samples);
    for r in &reports {
        assert!(r.is_ok(), "{} rejected: {:?}", r.id, r.error);
        let paw = r.plant_available_water.unwrap();
        assert!(paw > 0.0 && paw < 0.3, "{} PAW {paw}", r.id);
    }
}

#[test]
fn bundled_soils_include_reference_loamy_sand() {
    let root = try_discover_data_root().unwrap();
    let samples = load_soil_samples(&soil_samples_path(&root)).unwrap();
    let loamy_sand = samples.iter().find(|s| s.id == "loamy_sand").unwrap();
    let h = loamy_sand.texture().unwrap().hydraulics().unwrap();
    assert!((h.bulk_density - 1.43).abs() < 0.01);
}

#[test]
fn bundled_weather_all_evaluate() {
    let root = try_discover_data_root().unwrap();
    let days = load_weather_days(&weather_days_path(&root)).unwrap();
    let reports = evaluate_weather(&days);
    assert_eq!(reports.len(), days.len());
    for (r, d) in reports.iter().zip(&days) {
        assert_eq!(r.date, d.date);
        let vpd = r.vapor_pressure_deficit.unwrap();
        assert!(vpd > 0.0, "{}: vpd {vpd}", r.date);
    }
}

#[test]
fn reports_serialize_without_empty_fields() {
    let root = try_discover_data_root().unwrap();
    let samples = load_soil_samples(&soil_samples_path(&root)).unwrap();
    let json = serde_json::to_value(evaluate_soils(&samples)).unwrap();
    let first = &json[0];
    assert!(first.get("hydraulics").is_some());
    assert!(first.get("error").is_none());
}
