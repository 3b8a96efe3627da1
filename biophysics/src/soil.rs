// SPDX-License-Identifier: AGPL-3.0-only

//! Soil water characteristics from texture and organic matter.
//!
//! Field capacity, wilting point and bulk density come from the Saxton &
//! Rawls (2006) texture regressions; the retention curve between them is
//! Campbell's power law ψ = ψe·(θs/θ)^b.
//!
//! Units: clay and sand as fractions (0–1), organic matter in percent,
//! water content in m³/m³, water potential in J/kg (negative), density in
//! Mg/m³.
//!
//! References:
//!   - Saxton, K.E., Rawls, W.J., 2006. Soil water characteristic estimates by
//!     texture and organic matter for hydrologic solutions. SSSAJ 70, 1569–1578.
//!   - Campbell, G.S., 1985. Soil Physics with BASIC. Elsevier, Amsterdam.
//!   - Kemanian, A.R., Stöckle, C.O., 2010. C-Farm. Eur. J. Agron. 32, 22–29.
//!   - Hassink, J., Whitmore, A.P., 1997. SSSAJ 61(1), 131–139.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{
    CARBON_FRACTION_OF_OM, FIELD_CAPACITY_J_KG, KSAT_COEFFICIENT_MM_H, MAX_ORGANIC_MATTER_PERCENT,
    MIN_SOIL_PARTICLE_DENS, WILTING_POINT_J_KG,
};
use crate::error::{require_positive, require_within, BiophysicsError, Result};

/// Bulk density (Mg/m³) from texture. Saxton & Rawls eq. 5–6.
///
/// Saturation is field capacity plus the 33 J/kg–to–saturation moisture,
/// and density follows from the solid fraction at a particle density of
/// 2.65 Mg/m³.
#[must_use]
pub fn bulk_density(clay: f64, sand: f64, organic_matter: f64) -> f64 {
    let x1 = 0.078 + 0.278 * sand + 0.034 * clay + 0.022 * organic_matter
        - 0.018 * sand * organic_matter
        - 0.027 * clay * organic_matter
        - 0.584 * sand * clay;
    let x2 = -0.107 + 1.636 * x1;
    let field_capacity = vol_water_content_33_j_kg(clay, sand, organic_matter);
    let sat_water_content = 0.043 + field_capacity + x2 - 0.097 * sand;
    (1.0 - sat_water_content) * MIN_SOIL_PARTICLE_DENS
}

/// Saturated water content (m³/m³): the pore fraction at `bulk_density`.
#[must_use]
pub fn sat_water_content(bulk_density: f64) -> f64 {
    1.0 - bulk_density / MIN_SOIL_PARTICLE_DENS
}

/// Volumetric water content at field capacity, −33 J/kg. Saxton & Rawls eq. 2.
#[must_use]
pub fn vol_water_content_33_j_kg(clay: f64, sand: f64, organic_matter: f64) -> f64 {
    let x1 = 0.299 - 0.251 * sand + 0.195 * clay + 0.011 * organic_matter
        + 0.006 * sand * organic_matter
        - 0.027 * clay * organic_matter
        + 0.452 * sand * clay;
    -0.015 + 0.636 * x1 + 1.283 * x1.powi(2)
}

/// Volumetric water content at the permanent wilting point, −1500 J/kg.
/// Saxton & Rawls eq. 1.
#[must_use]
pub fn vol_water_content_1500_jkg(clay: f64, sand: f64, organic_matter: f64) -> f64 {
    let x1 = 0.031 - 0.024 * sand + 0.487 * clay + 0.006 * organic_matter
        + 0.005 * sand * organic_matter
        - 0.013 * clay * organic_matter
        + 0.068 * sand * clay;
    -0.02 + 1.14 * x1
}

/// Campbell `b` from the two anchor points of the retention curve.
///
/// b = (ln 1500 − ln 33) / (ln θ33 − ln θ1500)
///
/// # Errors
///
/// Returns [`BiophysicsError::InvalidInput`] when either water content is not
/// positive or the field-capacity content does not exceed the wilting-point
/// content.
pub fn b_value(water_content_33_j_kg: f64, water_content_1500_j_kg: f64) -> Result<f64> {
    let w33 = require_positive("water_content_33_j_kg", water_content_33_j_kg)?;
    let w1500 = require_positive("water_content_1500_j_kg", water_content_1500_j_kg)?;
    if w33 <= w1500 {
        return Err(BiophysicsError::invalid(
            "water_content_33_j_kg",
            w33,
            "must exceed water_content_1500_j_kg",
        ));
    }
    Ok((WILTING_POINT_J_KG.ln() - FIELD_CAPACITY_J_KG.ln()) / (w33.ln() - w1500.ln()))
}

/// Air-entry potential (J/kg) from the field-capacity point.
///
/// ψe = −33 · (θfc/θs)^b, i.e. the retention curve passed through
/// (θfc, −33 J/kg).
#[must_use]
pub fn air_entry_pot(field_capacity: f64, sat_water_content: f64, b_value: f64) -> f64 {
    -FIELD_CAPACITY_J_KG * (field_capacity / sat_water_content).powf(b_value)
}

/// Soil water potential (J/kg) at `water_content`. Campbell (1985) eq. 5.9.
///
/// # Errors
///
/// Returns [`BiophysicsError::InvalidInput`] when the saturated or actual
/// water content is not positive.
pub fn water_potential(
    sat_water_content: f64,
    air_entry_potential: f64,
    campbell_b: f64,
    water_content: f64,
) -> Result<f64> {
    let ws = require_positive("sat_water_content", sat_water_content)?;
    let w = require_positive("water_content", water_content)?;
    Ok(air_entry_potential * (ws / w).powf(campbell_b))
}

/// Soil water content (m³/m³) at `water_potential`; inverse of
/// [`water_potential`]. Campbell (1985) p. 80.
///
/// # Errors
///
/// Returns [`BiophysicsError::InvalidInput`] when `campbell_b` is not
/// positive or `water_potential` and `air_entry_potential` do not share a
/// sign (including either being zero).
pub fn water_content(
    sat_water_content: f64,
    air_entry_potential: f64,
    campbell_b: f64,
    water_potential: f64,
) -> Result<f64> {
    let b = require_positive("campbell_b", campbell_b)?;
    let ratio = water_potential / air_entry_potential;
    if !(ratio.is_finite() && ratio > 0.0) {
        return Err(BiophysicsError::invalid(
            "water_potential",
            water_potential,
            "must share the sign of air_entry_potential",
        ));
    }
    Ok(sat_water_content * ratio.powf(-1.0 / b))
}

/// Organic matter (%) at half the clay-driven carbon saturation of Hassink &
/// Whitmore (1997), with carbon converted at 58 % of organic matter.
#[must_use]
pub fn organic_m(clay: f64) -> f64 {
    1.81 + 0.032 * clay * 100.0
}

/// Organic matter (%) from organic carbon (%).
#[must_use]
pub fn organic_matter_from_carbon(organic_carbon: f64) -> f64 {
    organic_carbon / CARBON_FRACTION_OF_OM
}

/// Plant-available water (m³/m³) between field capacity and wilting point.
#[must_use]
pub fn plant_available_water(field_capacity: f64, wilting_point: f64) -> f64 {
    field_capacity - wilting_point
}

/// Saturated hydraulic conductivity (mm/h). Saxton & Rawls eq. 16.
///
/// Ks = 1930 · (θs − θ33)^(3 − λ), λ = 1/b. Zero when no pore space drains
/// above field capacity.
#[must_use]
pub fn saturated_conductivity(sat_water_content: f64, field_capacity: f64, campbell_b: f64) -> f64 {
    let drainable = sat_water_content - field_capacity;
    if drainable <= 0.0 {
        return 0.0;
    }
    KSAT_COEFFICIENT_MM_H * drainable.powf(3.0 - 1.0 / campbell_b)
}

/// Texture and organic matter of a soil layer, validated.
///
/// Only [`SoilTexture::new`] builds one; deserialization goes through the
/// same checks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TextureRecord")]
pub struct SoilTexture {
    clay: f64,
    sand: f64,
    organic_matter: f64,
}

#[derive(Deserialize)]
struct TextureRecord {
    clay: f64,
    sand: f64,
    organic_matter: f64,
}

impl TryFrom<TextureRecord> for SoilTexture {
    type Error = BiophysicsError;

    fn try_from(r: TextureRecord) -> Result<Self> {
        Self::new(r.clay, r.sand, r.organic_matter)
    }
}

/// Hydraulic properties derived from a [`SoilTexture`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoilHydraulics {
    /// Bulk density (Mg/m³).
    pub bulk_density: f64,
    /// Saturated water content (m³/m³).
    pub saturation: f64,
    /// Water content at −33 J/kg (m³/m³).
    pub field_capacity: f64,
    /// Water content at −1500 J/kg (m³/m³).
    pub wilting_point: f64,
    /// Campbell `b`.
    pub campbell_b: f64,
    /// Air-entry potential (J/kg).
    pub air_entry_potential: f64,
    /// Saturated hydraulic conductivity (mm/h).
    pub saturated_conductivity: f64,
}

impl SoilTexture {
    /// Validate and build a texture.
    ///
    /// # Errors
    ///
    /// Returns [`BiophysicsError::InvalidInput`] when clay or sand is outside
    /// 0–1, their sum exceeds 1, or organic matter is outside the 0–8 % range
    /// the Saxton & Rawls regressions were fitted on.
    pub fn new(clay: f64, sand: f64, organic_matter: f64) -> Result<Self> {
        let clay = require_within("clay", clay, 0.0, 1.0)?;
        let sand = require_within("sand", sand, 0.0, 1.0)?;
        if clay + sand > 1.0 {
            return Err(BiophysicsError::invalid(
                "sand",
                sand,
                "clay + sand exceeds 1",
            ));
        }
        let organic_matter = require_within(
            "organic_matter",
            organic_matter,
            0.0,
            MAX_ORGANIC_MATTER_PERCENT,
        )?;
        Ok(Self {
            clay,
            sand,
            organic_matter,
        })
    }

    /// Clay content (fraction).
    #[must_use]
    pub const fn clay(&self) -> f64 {
        self.clay
    }

    /// Sand content (fraction).
    #[must_use]
    pub const fn sand(&self) -> f64 {
        self.sand
    }

    /// Organic matter (%).
    #[must_use]
    pub const fn organic_matter(&self) -> f64 {
        self.organic_matter
    }

    /// Silt content (fraction), the remainder of clay and sand.
    #[must_use]
    pub fn silt(&self) -> f64 {
        1.0 - self.clay - self.sand
    }

    /// Derive the full hydraulic parameter set.
    ///
    /// # Errors
    ///
    /// Returns [`BiophysicsError::InvalidInput`] when the regressions leave
    /// their fitted range: a non-positive wilting point (very sandy, low
    /// organic soils), field capacity at or below wilting point, no pore
    /// space left at saturation, or a non-physical density or water content.
    pub fn hydraulics(&self) -> Result<SoilHydraulics> {
        let Self {
            clay,
            sand,
            organic_matter,
        } = *self;
        let field_capacity = vol_water_content_33_j_kg(clay, sand, organic_matter);
        let wilting_point = vol_water_content_1500_jkg(clay, sand, organic_matter);
        let campbell_b = b_value(field_capacity, wilting_point)?;

        let bulk_density = bulk_density(clay, sand, organic_matter);
        let saturation = sat_water_content(bulk_density);
        require_physical(bulk_density, saturation, field_capacity)?;

        let hydraulics = SoilHydraulics {
            bulk_density,
            saturation,
            field_capacity,
            wilting_point,
            campbell_b,
            air_entry_potential: air_entry_pot(field_capacity, saturation, campbell_b),
            saturated_conductivity: saturated_conductivity(saturation, field_capacity, campbell_b),
        };
        debug!(clay, sand, organic_matter, ?hydraulics, "derived soil hydraulics");
        Ok(hydraulics)
    }
}

/// Rejects regression output that no real soil can have.
fn require_physical(bulk_density: f64, saturation: f64, field_capacity: f64) -> Result<()> {
    require_positive("bulk_density", bulk_density)?;
    let saturation = require_positive("saturation", saturation)?;
    if saturation > 1.0 {
        return Err(BiophysicsError::invalid(
            "saturation",
            saturation,
            "exceeds 1 m3/m3",
        ));
    }
    if field_capacity >= 1.0 {
        return Err(BiophysicsError::invalid(
            "field_capacity",
            field_capacity,
            "must be below 1 m3/m3",
        ));
    }
    if saturation <= field_capacity {
        return Err(BiophysicsError::invalid(
            "saturation",
            saturation,
            "must exceed field capacity",
        ));
    }
    Ok(())
}

impl SoilHydraulics {
    /// Water potential (J/kg) at `water_content` on this soil's retention curve.
    ///
    /// # Errors
    ///
    /// See [`water_potential`].
    pub fn water_potential(&self, water_content: f64) -> Result<f64> {
        water_potential(
            self.saturation,
            self.air_entry_potential,
            self.campbell_b,
            water_content,
        )
    }

    /// Water content (m³/m³) at `water_potential` on this soil's retention curve.
    ///
    /// # Errors
    ///
    /// See [`water_content`].
    pub fn water_content(&self, water_potential: f64) -> Result<f64> {
        water_content(
            self.saturation,
            self.air_entry_potential,
            self.campbell_b,
            water_potential,
        )
    }

    /// Plant-available water (m³/m³).
    #[must_use]
    pub fn plant_available_water(&self) -> f64 {
        plant_available_water(self.field_capacity, self.wilting_point)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::tolerances::{
        EXACT_F64, PUBLISHED_FOUR_DECIMALS as FOUR, PUBLISHED_TWO_DECIMALS as TWO,
    };

    fn close(observed: f64, expected: f64, tol: f64) -> bool {
        (observed - expected).abs() < tol
    }

    #[test]
    fn bulk_density_reference_soils() {
        assert!(close(bulk_density(0.03, 0.92, 1.906), 1.43, TWO));
        assert!(close(bulk_density(0.15, 0.2, 2.29), 1.39, TWO));
    }

    #[test]
    fn sat_water_content_exact() {
        assert!(close(sat_water_content(1.3), 0.5094339622641508, EXACT_F64));
        assert!(close(sat_water_content(MIN_SOIL_PARTICLE_DENS), 0.0, EXACT_F64));
    }

    #[test]
    fn field_capacity_reference_soils() {
        assert!(close(vol_water_content_33_j_kg(0.03, 0.92, 1.906), 0.08, TWO));
        assert!(close(vol_water_content_33_j_kg(0.33, 0.09, 2.866), 0.38, TWO));
    }

    #[test]
    fn wilting_point_reference_soils() {
        assert!(close(vol_water_content_1500_jkg(0.03, 0.92, 1.906), 0.03, TWO));
        assert!(close(vol_water_content_1500_jkg(0.33, 0.09, 2.866), 0.21, TWO));
    }

    #[test]
    fn b_value_reference() {
        assert!(close(b_value(0.08, 0.03).unwrap(), 3.89, TWO));
    }

    #[test]
    fn b_value_rejects_inverted_anchors() {
        assert!(b_value(0.03, 0.08).is_err());
        assert!(b_value(0.08, 0.08).is_err());
        assert!(b_value(0.08, 0.0).is_err());
        assert!(b_value(-0.1, 0.03).is_err());
    }

    #[test]
    fn air_entry_reference() {
        assert!(close(air_entry_pot(0.08, 0.5, 4.33), -0.0118, FOUR));
    }

    #[test]
    fn water_potential_reference() {
        assert!(close(water_potential(0.5, -1.5, 5.0, 0.25).unwrap(), -48.0, EXACT_F64));
        assert!(close(water_potential(0.20, -1.0, 4.0, 0.25).unwrap(), -0.4096, EXACT_F64));
    }

    #[test]
    fn water_potential_rejects_non_positive_contents() {
        assert!(water_potential(0.0, -1.5, 5.0, 0.25).is_err());
        assert!(water_potential(0.5, -1.5, 5.0, 0.0).is_err());
        assert!(water_potential(0.5, -1.5, 5.0, -0.1).is_err());
    }

    #[test]
    fn water_content_reference() {
        assert!(close(water_content(0.5, -1.5, 5.0, -52.7).unwrap(), 0.24, TWO));
    }

    #[test]
    fn water_content_inverts_water_potential() {
        let psi = water_potential(0.45, -2.1, 6.0, 0.3).unwrap();
        let theta = water_content(0.45, -2.1, 6.0, psi).unwrap();
        assert!(close(theta, 0.3, EXACT_F64), "got {theta}");
    }

    #[test]
    fn water_content_rejects_sign_mismatch() {
        assert!(water_content(0.5, -1.5, 5.0, 10.0).is_err());
        assert!(water_content(0.5, -1.5, 5.0, 0.0).is_err());
        assert!(water_content(0.5, -1.5, 0.0, -10.0).is_err());
    }

    #[test]
    fn organic_m_reference() {
        assert!(close(organic_m(0.5), 3.41, EXACT_F64));
        assert!(close(organic_m(0.03), 1.91, TWO));
    }

    #[test]
    fn organic_matter_from_carbon_scales() {
        assert!(close(organic_matter_from_carbon(0.58), 1.0, EXACT_F64));
    }

    #[test]
    fn conductivity_zero_without_drainable_pores() {
        assert!(saturated_conductivity(0.3, 0.3, 4.0).abs() < EXACT_F64);
        assert!(saturated_conductivity(0.3, 0.35, 4.0).abs() < EXACT_F64);
        assert!(saturated_conductivity(0.45, 0.08, 3.9) > 100.0);
    }

    #[test]
    fn texture_validation() {
        assert!(SoilTexture::new(0.3, 0.3, 2.0).is_ok());
        assert!(SoilTexture::new(-0.1, 0.3, 2.0).is_err());
        assert!(SoilTexture::new(0.6, 0.6, 2.0).is_err());
        assert!(SoilTexture::new(0.3, 0.3, -1.0).is_err());
        assert!(SoilTexture::new(0.3, f64::NAN, 2.0).is_err());
        assert!(SoilTexture::new(0.2, 0.3, MAX_ORGANIC_MATTER_PERCENT).is_ok());
        assert!(SoilTexture::new(0.2, 0.3, 8.01).is_err());
        assert!(SoilTexture::new(0.15, 0.2, 20.0).is_err());
        assert!(SoilTexture::new(0.2, 0.3, 100.0).is_err());
    }

    #[test]
    fn texture_accessors() {
        let t = SoilTexture::new(0.2, 0.45, 2.0).unwrap();
        assert!(close(t.clay(), 0.2, EXACT_F64));
        assert!(close(t.sand(), 0.45, EXACT_F64));
        assert!(close(t.organic_matter(), 2.0, EXACT_F64));
    }

    #[test]
    fn deserialization_validates() {
        let ok: SoilTexture =
            serde_json::from_str(r#"{"clay": 0.2, "sand": 0.4, "organic_matter": 2.5}"#).unwrap();
        assert_eq!(ok, SoilTexture::new(0.2, 0.4, 2.5).unwrap());
        let bad = serde_json::from_str::<SoilTexture>(
            r#"{"clay": 1.5, "sand": 0.9, "organic_matter": -5}"#,
        );
        assert!(bad.is_err());
        let high_om = serde_json::from_str::<SoilTexture>(
            r#"{"clay": 0.2, "sand": 0.3, "organic_matter": 100}"#,
        );
        assert!(high_om.is_err());
    }

    #[test]
    fn hydraulics_reject_out_of_range_organic_matter() {
        let peaty = SoilTexture {
            clay: 0.15,
            sand: 0.2,
            organic_matter: 20.0,
        };
        assert!(matches!(
            peaty.hydraulics(),
            Err(BiophysicsError::InvalidInput { name: "bulk_density", .. })
        ));
    }

    #[test]
    fn non_physical_hydraulics_rejected() {
        assert!(require_physical(1.4, 0.47, 0.3).is_ok());
        assert!(matches!(
            require_physical(-0.33, 1.12, 0.6),
            Err(BiophysicsError::InvalidInput { name: "bulk_density", .. })
        ));
        assert!(matches!(
            require_physical(0.5, 1.05, 0.6),
            Err(BiophysicsError::InvalidInput { name: "saturation", .. })
        ));
        assert!(matches!(
            require_physical(0.5, 0.9, 1.0),
            Err(BiophysicsError::InvalidInput { name: "field_capacity", .. })
        ));
        assert!(matches!(
            require_physical(1.4, 0.3, 0.35),
            Err(BiophysicsError::InvalidInput { name: "saturation", .. })
        ));
    }

    #[test]
    fn fitted_range_corners_stay_physical() {
        for (clay, sand) in [(0.0, 0.0), (1.0, 0.0), (0.6, 0.4), (0.1, 0.3)] {
            for om in [0.0, 4.0, MAX_ORGANIC_MATTER_PERCENT] {
                if let Ok(h) = SoilTexture::new(clay, sand, om).unwrap().hydraulics() {
                    assert!(h.bulk_density > 0.0 && h.saturation < 1.0, "{clay} {sand} {om}");
                }
            }
        }
    }

    #[test]
    fn silt_is_remainder() {
        let t = SoilTexture::new(0.2, 0.45, 2.0).unwrap();
        assert!(close(t.silt(), 0.35, EXACT_F64));
    }

    #[test]
    fn hydraulics_are_internally_consistent() {
        let h = SoilTexture::new(0.15, 0.2, 2.29).unwrap().hydraulics().unwrap();
        assert!(h.saturation > h.field_capacity);
        assert!(h.field_capacity > h.wilting_point);
        assert!(h.wilting_point > 0.0);
        assert!(h.air_entry_potential < 0.0);
        assert!(h.plant_available_water() > 0.0);

        let at_fc = h.water_potential(h.field_capacity).unwrap();
        assert!(close(at_fc, -FIELD_CAPACITY_J_KG, 1e-9), "got {at_fc}");
        let at_sat = h.water_potential(h.saturation).unwrap();
        assert!(close(at_sat, h.air_entry_potential, EXACT_F64));
    }

    #[test]
    fn hydraulics_reject_pure_sand() {
        let t = SoilTexture::new(0.0, 1.0, 0.0).unwrap();
        assert!(t.hydraulics().is_err(), "negative wilting point must be rejected");
    }
}
