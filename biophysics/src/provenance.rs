// SPDX-License-Identifier: AGPL-3.0-only

//! Provenance metadata for every published reference value.
//!
//! Each expected value checked by the validation binaries traces back to a
//! worked example or table in the literature. This module centralizes that
//! metadata so validation output carries machine-readable provenance.
//!
//! ## Sources
//!
//! | Publication | DOI / ISBN | Used for |
//! |-------------|------------|----------|
//! | Saxton & Rawls (2006) | [10.2136/sssaj2005.0117](https://doi.org/10.2136/sssaj2005.0117) | θ33, θ1500, ρb, b |
//! | Campbell (1985) | ISBN 0-444-42557-8 | ψ(θ), θ(ψ), θs |
//! | Kemanian & Stöckle (2010) | [10.1016/j.eja.2009.08.003](https://doi.org/10.1016/j.eja.2009.08.003) | ψe |
//! | Hassink & Whitmore (1997) | [10.2136/sssaj1997.03615995006100010020x](https://doi.org/10.2136/sssaj1997.03615995006100010020x) | OM saturation |
//! | Campbell & Norman (1998) | ISBN 0-387-94937-2 | e_a, e_s, Table A.3 |

use serde::Serialize;

/// A single published value with the inputs that reproduce it.
#[derive(Debug, Clone, Serialize)]
pub struct ReferenceValue {
    /// Human-readable label
    pub label: &'static str,
    /// Short citation
    pub citation: &'static str,
    /// Equation or table within the citation
    pub equation: &'static str,
    /// Function arguments, in call order
    pub inputs: &'static [f64],
    /// The reference value itself, as printed
    pub value: f64,
    /// Unit of the value
    pub unit: &'static str,
}

impl ReferenceValue {
    /// One-line description used by the validation binaries.
    #[must_use]
    pub fn describe(&self) -> String {
        format!(
            "{} — {} {} inputs={:?} → {} {}",
            self.label, self.citation, self.equation, self.inputs, self.value, self.unit
        )
    }
}

const SAXTON_RAWLS: &str = "Saxton & Rawls (2006) SSSAJ 70:1569";
const CAMPBELL_1985: &str = "Campbell (1985) Soil Physics with BASIC";
const CAMPBELL_NORMAN: &str = "Campbell & Norman (1998) Environmental Biophysics";

// ═══════════════════════════════════════════════════════════════════
// Soil water characteristics
// ═══════════════════════════════════════════════════════════════════

/// Bulk density of a loamy sand (clay 0.03, sand 0.92, OM 1.906 %).
pub const BULK_DENSITY_LOAMY_SAND: ReferenceValue = ReferenceValue {
    label: "bulk density, loamy sand",
    citation: SAXTON_RAWLS,
    equation: "eq. 5-6",
    inputs: &[0.03, 0.92, 1.906],
    value: 1.43,
    unit: "Mg/m3",
};

/// Bulk density of a silt loam (clay 0.15, sand 0.2, OM 2.29 %).
pub const BULK_DENSITY_SILT_LOAM: ReferenceValue = ReferenceValue {
    label: "bulk density, silt loam",
    citation: SAXTON_RAWLS,
    equation: "eq. 5-6",
    inputs: &[0.15, 0.2, 2.29],
    value: 1.39,
    unit: "Mg/m3",
};

/// Saturated water content at bulk density 1.3 Mg/m³.
pub const SAT_WATER_CONTENT_1_3: ReferenceValue = ReferenceValue {
    label: "saturated water content at 1.3 Mg/m3",
    citation: CAMPBELL_1985,
    equation: "porosity",
    inputs: &[1.3],
    value: 0.509_433_962_264_150_8,
    unit: "m3/m3",
};

/// Field capacity of the loamy sand.
pub const FIELD_CAPACITY_LOAMY_SAND: ReferenceValue = ReferenceValue {
    label: "theta_33, loamy sand",
    citation: SAXTON_RAWLS,
    equation: "eq. 2",
    inputs: &[0.03, 0.92, 1.906],
    value: 0.08,
    unit: "m3/m3",
};

/// Field capacity of a clay loam (clay 0.33, sand 0.09, OM 2.866 %).
pub const FIELD_CAPACITY_CLAY_LOAM: ReferenceValue = ReferenceValue {
    label: "theta_33, clay loam",
    citation: SAXTON_RAWLS,
    equation: "eq. 2",
    inputs: &[0.33, 0.09, 2.866],
    value: 0.38,
    unit: "m3/m3",
};

/// Wilting point of the loamy sand.
pub const WILTING_POINT_LOAMY_SAND: ReferenceValue = ReferenceValue {
    label: "theta_1500, loamy sand",
    citation: SAXTON_RAWLS,
    equation: "eq. 1",
    inputs: &[0.03, 0.92, 1.906],
    value: 0.03,
    unit: "m3/m3",
};

/// Wilting point of the clay loam.
pub const WILTING_POINT_CLAY_LOAM: ReferenceValue = ReferenceValue {
    label: "theta_1500, clay loam",
    citation: SAXTON_RAWLS,
    equation: "eq. 1",
    inputs: &[0.33, 0.09, 2.866],
    value: 0.21,
    unit: "m3/m3",
};

/// Campbell b from θ33 = 0.08, θ1500 = 0.03.
pub const B_VALUE: ReferenceValue = ReferenceValue {
    label: "Campbell b",
    citation: SAXTON_RAWLS,
    equation: "eq. 15",
    inputs: &[0.08, 0.03],
    value: 3.89,
    unit: "-",
};

/// Air-entry potential from θfc = 0.08, θs = 0.5, b = 4.33.
pub const AIR_ENTRY_POTENTIAL: ReferenceValue = ReferenceValue {
    label: "air-entry potential",
    citation: "Kemanian & Stockle (2010) Eur. J. Agron. 32:22",
    equation: "C-Farm retention",
    inputs: &[0.08, 0.5, 4.33],
    value: -0.0118,
    unit: "J/kg",
};

/// Water potential, (θs, ψe, b, θ) = (0.5, −1.5, 5, 0.25).
pub const WATER_POTENTIAL_A: ReferenceValue = ReferenceValue {
    label: "water potential, b=5",
    citation: CAMPBELL_1985,
    equation: "eq. 5.9",
    inputs: &[0.5, -1.5, 5.0, 0.25],
    value: -48.0,
    unit: "J/kg",
};

/// Water potential, (θs, ψe, b, θ) = (0.20, −1.0, 4, 0.25).
pub const WATER_POTENTIAL_B: ReferenceValue = ReferenceValue {
    label: "water potential, b=4",
    citation: CAMPBELL_1985,
    equation: "eq. 5.9",
    inputs: &[0.20, -1.0, 4.0, 0.25],
    value: -0.4096,
    unit: "J/kg",
};

/// Water content, (θs, ψe, b, ψ) = (0.5, −1.5, 5, −52.7).
pub const WATER_CONTENT: ReferenceValue = ReferenceValue {
    label: "water content at -52.7 J/kg",
    citation: CAMPBELL_1985,
    equation: "p. 80",
    inputs: &[0.5, -1.5, 5.0, -52.7],
    value: 0.24,
    unit: "m3/m3",
};

/// Half carbon saturation as organic matter, clay 0.5.
pub const ORGANIC_MATTER_CLAY_0_5: ReferenceValue = ReferenceValue {
    label: "organic matter, clay 0.5",
    citation: "Hassink & Whitmore (1997) SSSAJ 61:131",
    equation: "C saturation",
    inputs: &[0.5],
    value: 3.41,
    unit: "%",
};

/// Half carbon saturation as organic matter, clay 0.03.
pub const ORGANIC_MATTER_CLAY_0_03: ReferenceValue = ReferenceValue {
    label: "organic matter, clay 0.03",
    citation: "Hassink & Whitmore (1997) SSSAJ 61:131",
    equation: "C saturation",
    inputs: &[0.03],
    value: 1.91,
    unit: "%",
};

/// All soil reference values, in validation order.
pub const SOIL_REFERENCES: &[&ReferenceValue] = &[
    &BULK_DENSITY_LOAMY_SAND,
    &BULK_DENSITY_SILT_LOAM,
    &SAT_WATER_CONTENT_1_3,
    &FIELD_CAPACITY_LOAMY_SAND,
    &FIELD_CAPACITY_CLAY_LOAM,
    &WILTING_POINT_LOAMY_SAND,
    &WILTING_POINT_CLAY_LOAM,
    &B_VALUE,
    &AIR_ENTRY_POTENTIAL,
    &WATER_POTENTIAL_A,
    &WATER_POTENTIAL_B,
    &WATER_CONTENT,
    &ORGANIC_MATTER_CLAY_0_5,
    &ORGANIC_MATTER_CLAY_0_03,
];

// ═══════════════════════════════════════════════════════════════════
// Atmospheric water vapor
// ═══════════════════════════════════════════════════════════════════

/// Vapor pressure of air from e_s(Tmin), e_s(Tmax), RH_max, RH_min.
pub const VAPOR_PRESSURE_AIR: ReferenceValue = ReferenceValue {
    label: "vapor pressure of air",
    citation: CAMPBELL_NORMAN,
    equation: "ch. 3",
    inputs: &[1.817, 5.320, 87.0, 25.0],
    value: 1.455,
    unit: "kPa",
};

/// Saturation vapor pressure table (°C, kPa). Campbell & Norman Table A.3.
pub const SATURATION_TABLE_A3: &[(f64, f64)] =
    &[(0.0, 0.61), (10.0, 1.23), (20.0, 2.34), (30.0, 4.24), (40.0, 7.38)];

/// All gas reference values, in validation order.
pub const GAS_REFERENCES: &[&ReferenceValue] = &[&VAPOR_PRESSURE_AIR];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_reference_is_finite_and_has_inputs() {
        for r in SOIL_REFERENCES.iter().chain(GAS_REFERENCES) {
            assert!(r.value.is_finite(), "{} value not finite", r.label);
            assert!(!r.inputs.is_empty(), "{} has no inputs", r.label);
            assert!(!r.citation.is_empty());
        }
    }

    #[test]
    fn labels_are_unique() {
        let mut labels: Vec<&str> = SOIL_REFERENCES
            .iter()
            .chain(GAS_REFERENCES)
            .map(|r| r.label)
            .collect();
        let n = labels.len();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), n);
    }

    #[test]
    fn describe_mentions_citation_and_unit() {
        let s = B_VALUE.describe();
        assert!(s.contains("Saxton"));
        assert!(s.contains("3.89"));
    }

    #[test]
    fn table_a3_is_increasing() {
        for w in SATURATION_TABLE_A3.windows(2) {
            assert!(w[1].0 > w[0].0 && w[1].1 > w[0].1);
        }
    }
}
