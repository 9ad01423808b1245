//! # SLS Crack Width
//!
//! Estimates the characteristic crack width of the bottom face under the
//! unfactored service moment (NBR 6118 Section 17.3.3.2). The section is
//! analysed cracked (stage II) and each populated bar layer is checked as a
//! tension tie; the worst layer governs.
//!
//! ## Example
//!
//! ```rust
//! use rc_core::calculations::sls::estimate_crack_width;
//! use rc_core::reinforcement::{Reinforcement, ReinforcementArrangement, ReinforcementLayer};
//! use rc_core::section::{Section, SectionGeometry};
//! use rc_core::materials::MaterialProperties;
//! use rc_core::loads::Loads;
//!
//! let section = Section::new(
//!     SectionGeometry::rectangle(20.0, 50.0),
//!     MaterialProperties { fck: 20.0, cover: 4.2, ..Default::default() },
//!     Loads::new(62.5, 0.0),
//! );
//! let reinforcement = Reinforcement {
//!     bottom: ReinforcementArrangement::new(0.0).with_layer(ReinforcementLayer::new(16.0, 5)),
//!     ..Default::default()
//! };
//!
//! let result = estimate_crack_width(&section, &reinforcement).unwrap().unwrap();
//! assert!((result.wk - 0.091).abs() < 0.001);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::equations::cracking::{
    crack_coefficient, crack_width_by_ratio, crack_width_by_stress, cracking_moment, stage_two_neutral_axis,
    tributary_area, BarTie, ALFA_RECTANGULAR, ETA1_RIBBED, FCTK_INF_RATIO,
};
use crate::equations::section::{area_of_bar, rectangular_extreme_fiber_distance, rectangular_moment_of_inertia};
use crate::errors::{CalcError, CalcResult};
use crate::materials::concrete::{mean_tensile_strength_mpa, secant_modulus_mpa};
use crate::materials::resolve_design_parameters;
use crate::reinforcement::{LayerPosition, Reinforcement};
use crate::section::{Section, SectionGeometry};
use crate::units::{Centimeters, Gpa, KnPerCm2, Millimeters, Mpa};

/// Stage II quantities behind a crack-width estimate (kN, cm)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntermediateValues {
    /// Tributary area of the governing layer (cm²)
    pub acri: f64,
    /// Secant modulus of concrete (kN/cm²)
    pub ecs: f64,
    /// Steel modulus (kN/cm²)
    pub es: f64,
    /// Service moment (kN·cm)
    pub mdserv: f64,
    /// Modular ratio Es/Ecs
    pub alfa_e: f64,
    /// Mean tensile strength (kN/cm²)
    pub fctm: f64,
    /// Cracked neutral-axis depth (cm)
    pub x: f64,
    /// Cracking moment (kN·cm)
    pub mr: f64,
    /// Steel force resultant (kN)
    pub mres: f64,
    /// Steel stress (kN/cm²)
    pub sigma_s: f64,
    /// Peak concrete stress (kN/cm²)
    pub sigma_c: f64,
}

/// Crack-width check of one bar layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayerCrackWidth {
    pub position: LayerPosition,
    /// Bar diameter (mm)
    pub diameter: f64,
    pub count: u32,
    /// mm
    pub wk1: f64,
    /// mm
    pub wk2: f64,
    pub rho: f64,
    /// cm²
    pub acri: f64,
}

/// Crack-width estimate of the bottom face.
///
/// ## JSON Example
///
/// ```json
/// {
///   "wk1": 0.0914,
///   "wk2": 0.1095,
///   "wk": 0.0914,
///   "intermediate": { "acri": 106.25, "x": 16.74, "sigma_s": 15.77, "...": "..." },
///   "layers": [{ "position": "unica", "diameter": 16.0, "count": 5, "...": "..." }]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrackWidthResult {
    /// Largest first estimate over the layers (mm)
    pub wk1: f64,
    /// Largest second estimate over the layers (mm)
    pub wk2: f64,
    /// Characteristic crack width min(wk1, wk2) (mm)
    pub wk: f64,
    pub intermediate: IntermediateValues,
    pub layers: Vec<LayerCrackWidth>,
}

/// Estimate the crack width of the bottom bars under the service moment.
///
/// # Returns
///
/// * `Ok(Some(result))` - Rectangular section with bottom steel
/// * `Ok(None)` - Non-rectangular section, or no bottom steel to check
/// * `Err(CalcError)` - Invalid material or loads (e.g. fck above 90 MPa), or
///   a bar layer that does not fit across the width
pub fn estimate_crack_width(
    section: &Section,
    reinforcement: &Reinforcement,
) -> CalcResult<Option<CrackWidthResult>> {
    section.validate()?;
    resolve_design_parameters(section.material.fck)?;

    let SectionGeometry::Rectangle { width: b, height: h } = section.geometry else {
        debug!(geometry = section.geometry.kind(), "crack width skipped for non-rectangular section");
        return Ok(None);
    };

    let as_tension = reinforcement.bottom.area();
    if as_tension <= 0.0 {
        debug!("crack width skipped, no bottom steel");
        return Ok(None);
    }

    let material = &section.material;
    let d = h - reinforcement.effective_depths(material.cover).bottom;
    let es = KnPerCm2::from(Gpa(material.es)).value();
    let ecs = KnPerCm2::from(Mpa(secant_modulus_mpa(material.fck))).value();
    let fctm = KnPerCm2::from(Mpa(mean_tensile_strength_mpa(material.fck))).value();
    let mdserv = section.loads.service_moment().value();
    let alfa_e = es / ecs;

    let x = stage_two_neutral_axis(alfa_e, as_tension, b, d);
    let mr = cracking_moment(
        ALFA_RECTANGULAR,
        FCTK_INF_RATIO * fctm,
        rectangular_moment_of_inertia(b, h),
        rectangular_extreme_fiber_distance(h),
    );
    let mres = mdserv / (d - x / 3.0);
    let sigma_s = mres / as_tension;
    let sigma_c = 2.0 * mres / (b * x);

    let stirrup_cm = Centimeters::from(Millimeters(reinforcement.stirrup.unwrap_or(0.0))).value();
    let populated: Vec<(f64, u32)> = reinforcement
        .bottom
        .populated_layers()
        .filter_map(|layer| layer.bars())
        .collect();

    let mut layers = Vec::with_capacity(populated.len());
    let (mut wk1, mut wk2, mut acri) = (0.0_f64, 0.0_f64, 0.0_f64);

    for (i, &(diameter, count)) in populated.iter().enumerate() {
        let position = LayerPosition::of(i, populated.len());
        let radius_cm = Centimeters::from(Millimeters(diameter)).value() / 2.0;
        let edge_distance = material.cover + stirrup_cm + radius_cm;
        if b - 2.0 * edge_distance < 0.0 {
            return Err(CalcError::invalid_input(
                "reinforcement.bottom",
                format!("{}Φ{}", count, diameter),
                format!("Bars {:.2} cm from each face do not fit in a {} cm width", edge_distance, b),
            ));
        }
        let tie = BarTie {
            diameter_mm: diameter,
            count,
            bar_area: area_of_bar(diameter),
            edge_distance,
            width: b,
            height: h,
            layer_spacing: reinforcement.bottom.layer_spacing,
            position,
        };
        let tributary = tributary_area(&tie);
        if tributary.acri <= 0.0 {
            return Err(CalcError::invalid_input(
                "reinforcement.bottom",
                format!("{}Φ{}", count, diameter),
                "Layer has no concrete tributary to its bars",
            ));
        }

        let coefficient = crack_coefficient(diameter / 10.0, sigma_s, ETA1_RIBBED, es);
        let layer = LayerCrackWidth {
            position,
            diameter,
            count,
            wk1: crack_width_by_stress(coefficient, sigma_s, fctm),
            wk2: crack_width_by_ratio(coefficient, tributary.rho),
            rho: tributary.rho,
            acri: tributary.acri,
        };

        wk1 = wk1.max(layer.wk1);
        if layer.wk2 > wk2 {
            wk2 = layer.wk2;
            acri = layer.acri;
        }
        layers.push(layer);
    }

    let wk = wk1.min(wk2);
    debug!(x, sigma_s, wk1, wk2, wk, "crack width estimated");

    Ok(Some(CrackWidthResult {
        wk1,
        wk2,
        wk,
        intermediate: IntermediateValues {
            acri,
            ecs,
            es,
            mdserv,
            alfa_e,
            fctm,
            x,
            mr,
            mres,
            sigma_s,
            sigma_c,
        },
        layers,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loads::Loads;
    use crate::materials::MaterialProperties;
    use crate::reinforcement::{ReinforcementArrangement, ReinforcementLayer};
    use crate::section::Point2;

    fn beam(fck: f64) -> Section {
        Section::new(
            SectionGeometry::rectangle(20.0, 50.0),
            MaterialProperties {
                fck,
                fy: 500.0,
                es: 210.0,
                gamma_c: 1.4,
                gamma_s: 1.15,
                cover: 4.2,
            },
            Loads::new(62.5, 0.0),
        )
    }

    fn five_phi_16() -> Reinforcement {
        Reinforcement {
            bottom: ReinforcementArrangement::new(0.0).with_layer(ReinforcementLayer::new(16.0, 5)),
            top: ReinforcementArrangement::default(),
            stirrup: None,
        }
    }

    #[test]
    fn test_crack_width_single_layer() {
        let result = estimate_crack_width(&beam(20.0), &five_phi_16()).unwrap().unwrap();

        assert!((result.wk1 - 0.091).abs() < 0.001, "wk1 = {}", result.wk1);
        assert!((result.wk2 - 0.110).abs() < 0.001, "wk2 = {}", result.wk2);
        assert!((result.wk - 0.091).abs() < 0.001, "wk = {}", result.wk);
        assert_eq!(result.wk, result.wk1.min(result.wk2));
    }

    #[test]
    fn test_intermediate_values() {
        let result = estimate_crack_width(&beam(20.0), &five_phi_16()).unwrap().unwrap();
        let iv = result.intermediate;

        assert!((iv.es - 21_000.0).abs() < 1e-9);
        assert!((iv.ecs - 2128.74).abs() < 0.01);
        assert!((iv.mdserv - 6250.0).abs() < 1e-9);
        assert!((iv.alfa_e - 9.865).abs() < 0.001);
        assert!((iv.x - 16.74).abs() < 0.01);
        assert!((iv.sigma_s - 15.77).abs() < 0.01);
        assert!((iv.acri - 106.25).abs() < 1e-9);
        assert!(iv.sigma_c > 0.0 && iv.mr > 0.0);
    }

    #[test]
    fn test_layer_breakdown() {
        let reinforcement = Reinforcement {
            bottom: ReinforcementArrangement::new(4.0)
                .with_layer(ReinforcementLayer::new(16.0, 3))
                .with_layer(ReinforcementLayer::default())
                .with_layer(ReinforcementLayer::new(12.5, 3)),
            top: ReinforcementArrangement::default(),
            stirrup: Some(5.0),
        };
        let result = estimate_crack_width(&beam(25.0), &reinforcement).unwrap().unwrap();

        assert_eq!(result.layers.len(), 2);
        assert_eq!(result.layers[0].position, LayerPosition::Outer);
        assert_eq!(result.layers[1].position, LayerPosition::Inner);

        let max_wk1 = result.layers.iter().map(|l| l.wk1).fold(0.0, f64::max);
        let max_wk2 = result.layers.iter().map(|l| l.wk2).fold(0.0, f64::max);
        assert_eq!(result.wk1, max_wk1);
        assert_eq!(result.wk2, max_wk2);
        assert!(result.layers.iter().any(|l| l.acri == result.intermediate.acri));
    }

    #[test]
    fn test_no_bottom_steel() {
        let result = estimate_crack_width(&beam(20.0), &Reinforcement::default()).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_polygon_skipped() {
        let mut section = beam(20.0);
        section.geometry = SectionGeometry::Polygon {
            points: vec![Point2 { x: 0.0, y: 0.0 }, Point2 { x: 20.0, y: 0.0 }, Point2 { x: 10.0, y: 50.0 }],
        };
        assert!(estimate_crack_width(&section, &five_phi_16()).unwrap().is_none());
    }

    #[test]
    fn test_invalid_material_is_error() {
        let err = estimate_crack_width(&beam(95.0), &five_phi_16()).unwrap_err();
        assert_eq!(err.error_code(), "OUT_OF_RANGE");
    }

    #[test]
    fn test_bars_wider_than_section_rejected() {
        // 5φ16 with 4.2 cm cover needs 10 cm between face axes; web is 8 cm
        let mut section = beam(20.0);
        section.geometry = SectionGeometry::rectangle(8.0, 50.0);

        let err = estimate_crack_width(&section, &five_phi_16()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_result_serialization() {
        let result = estimate_crack_width(&beam(20.0), &five_phi_16()).unwrap().unwrap();
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"position\":\"unica\""));
        let back: CrackWidthResult = serde_json::from_str(&json).unwrap();
        assert!((back.wk - result.wk).abs() < 1e-12);
    }
}
