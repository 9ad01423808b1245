//! # Crack Width Formulas (SLS)
//!
//! Stage II (cracked, linear-elastic) section response and the two crack
//! width expressions of NBR 6118 Section 17.3.3.2.
//!
//! ## Notation
//!
//! - `αe` = Modular ratio Es / Ecs
//! - `As` = Tension steel area (cm²)
//! - `σs` = Steel stress under the service moment (kN/cm²)
//! - `φ` = Bar diameter (cm unless noted)
//! - `ρr` = Steel ratio of the concrete tributary to one bar
//! - `η1` = Bond coefficient (2.25 for ribbed bars)
//!
//! Crack widths come out in mm.
//!
//! ## References
//!
//! - NBR 6118:2014 Sections 17.3.1 and 17.3.3.2

use serde::{Deserialize, Serialize};

use crate::reinforcement::LayerPosition;

/// Bond coefficient η1 of ribbed bars
pub const ETA1_RIBBED: f64 = 2.25;

/// Shape factor α relating the cracking moment of a rectangle to fct
pub const ALFA_RECTANGULAR: f64 = 1.5;

/// The tributary region extends at most 7.5φ from the bar axis
pub const TRIBUTARY_REACH: f64 = 7.5;

/// Ratio of the inferior characteristic tensile strength to fct,m
pub const FCTK_INF_RATIO: f64 = 0.7;

/// Neutral-axis depth of a cracked rectangular section with tension steel only.
///
/// # Formula
/// ```text
/// B = 2·αe·As / b
/// x = (−B + √(B² + 4·B·d)) / 2
/// ```
///
/// # Example
/// ```rust
/// use rc_core::equations::cracking::stage_two_neutral_axis;
///
/// let x = stage_two_neutral_axis(9.865, 10.053, 20.0, 45.0);
/// assert!((x - 16.74).abs() < 0.01);
/// ```
pub fn stage_two_neutral_axis(alfa_e: f64, as_tension: f64, b: f64, d: f64) -> f64 {
    let coef_b = 2.0 * alfa_e * as_tension / b;
    (-coef_b + (coef_b.powi(2) + 4.0 * coef_b * d).sqrt()) / 2.0
}

/// Cracking moment `Mr = α·fct·Ic / yt`
#[inline]
pub fn cracking_moment(alfa: f64, fct: f64, ic: f64, yt: f64) -> f64 {
    alfa * fct * ic / yt
}

/// Common factor of both crack-width expressions, in mm:
/// `φ·σs / (12.5·η1·Es)`, with φ in cm
#[inline]
pub fn crack_coefficient(phi_cm: f64, sigma_s: f64, eta1: f64, es: f64) -> f64 {
    phi_cm * sigma_s / (12.5 * eta1 * es) * 10.0
}

/// First crack-width estimate `wk1 = coef · 3σs / fct,m`
#[inline]
pub fn crack_width_by_stress(coefficient: f64, sigma_s: f64, fctm: f64) -> f64 {
    coefficient * 3.0 * sigma_s / fctm
}

/// Second crack-width estimate `wk2 = coef · (4/ρr + 45)`
#[inline]
pub fn crack_width_by_ratio(coefficient: f64, rho: f64) -> f64 {
    coefficient * (4.0 / rho + 45.0)
}

/// One bar layer seen as a tension tie, for the tributary-area lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarTie {
    /// Bar diameter (mm)
    pub diameter_mm: f64,
    /// Bars in the layer
    pub count: u32,
    /// Area of one bar (cm²)
    pub bar_area: f64,
    /// Face to bar axis (cm)
    pub edge_distance: f64,
    /// Section width (cm)
    pub width: f64,
    /// Section height (cm)
    pub height: f64,
    /// Distance between layers of the face (cm)
    pub layer_spacing: f64,
    /// Place of the layer within its face
    pub position: LayerPosition,
}

/// Concrete area tributary to one bar and the resulting steel ratio
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TributaryArea {
    /// Steel ratio ρr = A_bar / Acri
    pub rho: f64,
    /// Tributary concrete area Acri (cm²)
    pub acri: f64,
}

/// Critical tributary area of a bar layer.
///
/// The region around a bar reaches at most 7.5φ in every direction, clipped
/// by the section edge, half the bar spacing and half the layer spacing.
///
/// ```text
///   edge bar (situation 1)      interior bar (situation 2)
///   ┌──────┬─────┐              ┌─────┬─────┐
///   │  b1  ●  b2 │ h1+h2        │ b2  ●  b2 │ h1+h2
///   └──────┴─────┘              └─────┴─────┘
/// ```
///
/// Interior bars exist only with three or more bars per layer. The governing
/// case is the one with the smaller ratio.
pub fn tributary_area(tie: &BarTie) -> TributaryArea {
    if tie.count == 0 || tie.diameter_mm <= 0.0 {
        return TributaryArea { rho: 0.0, acri: 0.0 };
    }

    let phi = tie.diameter_mm / 10.0;
    let reach = TRIBUTARY_REACH * phi;
    let useful_width = tie.width - 2.0 * tie.edge_distance;
    let spacing = if tie.count != 1 {
        useful_width / f64::from(tie.count - 1)
    } else {
        tie.width / 2.0
    };

    let (below, above) = match tie.position {
        LayerPosition::Single => (tie.edge_distance, tie.height - tie.edge_distance),
        LayerPosition::Outer => (tie.edge_distance, tie.layer_spacing / 2.0),
        LayerPosition::Middle => (tie.layer_spacing / 2.0, tie.layer_spacing / 2.0),
        LayerPosition::Inner => (tie.layer_spacing / 2.0, tie.height - tie.edge_distance),
    };

    let b1 = reach.min(tie.edge_distance);
    let b2 = reach.min(spacing / 2.0);
    let depth = reach.min(below) + reach.min(above);

    let edge = TributaryArea {
        acri: (b1 + b2) * depth,
        rho: tie.bar_area / ((b1 + b2) * depth),
    };
    if tie.count <= 2 {
        return edge;
    }

    let interior_acri = 2.0 * b2 * depth;
    let interior = TributaryArea {
        acri: interior_acri,
        rho: tie.bar_area / interior_acri,
    };
    if interior.rho < edge.rho {
        interior
    } else {
        edge
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equations::section::area_of_bar;

    fn tie(count: u32, position: LayerPosition) -> BarTie {
        BarTie {
            diameter_mm: 16.0,
            count,
            bar_area: area_of_bar(16.0),
            edge_distance: 5.0,
            width: 20.0,
            height: 50.0,
            layer_spacing: 4.0,
            position,
        }
    }

    #[test]
    fn test_stage_two_neutral_axis_equilibrium() {
        // First moment of the compressed block equals that of the transformed steel
        let (alfa_e, as_, b, d) = (9.865, 10.053, 20.0, 45.0);
        let x = stage_two_neutral_axis(alfa_e, as_, b, d);
        let lhs = b * x * x / 2.0;
        let rhs = alfa_e * as_ * (d - x);
        assert!((lhs - rhs).abs() < 1e-6, "{} vs {}", lhs, rhs);
    }

    #[test]
    fn test_cracking_moment() {
        // 20x50, fct,inf = 0.7 * 0.221 kN/cm²
        let mr = cracking_moment(ALFA_RECTANGULAR, 0.7 * 0.221, 20.0 * 50f64.powi(3) / 12.0, 25.0);
        assert!((mr - 1933.75).abs() < 0.01);
    }

    #[test]
    fn test_single_layer_tributary_area() {
        // 5φ16 in a 20 cm web: edge bar governs with (5 + 1.25) x (5 + 12)
        let area = tributary_area(&tie(5, LayerPosition::Single));
        assert!((area.acri - 106.25).abs() < 1e-9);
        assert!((area.rho - 0.018923).abs() < 1e-5);
    }

    #[test]
    fn test_two_bars_have_no_interior_case() {
        let area = tributary_area(&tie(2, LayerPosition::Single));
        // spacing 10 → b2 = 5
        assert!((area.acri - 10.0 * 17.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_bar_uses_half_width() {
        let area = tributary_area(&tie(1, LayerPosition::Single));
        // b2 = min(12, 20/2/2) = 5
        assert!((area.acri - 10.0 * 17.0).abs() < 1e-9);
    }

    #[test]
    fn test_layer_position_limits_depth() {
        let outer = tributary_area(&tie(5, LayerPosition::Outer));
        let middle = tributary_area(&tie(5, LayerPosition::Middle));
        // Outer: 5 + 2, middle: 2 + 2
        assert!((outer.acri - 6.25 * 7.0).abs() < 1e-9);
        assert!((middle.acri - 6.25 * 4.0).abs() < 1e-9);
        assert!(middle.acri < outer.acri);
    }

    #[test]
    fn test_empty_layer() {
        let area = tributary_area(&tie(0, LayerPosition::Single));
        assert_eq!(area, TributaryArea { rho: 0.0, acri: 0.0 });
    }

    #[test]
    fn test_crack_widths() {
        let coef = crack_coefficient(1.6, 15.77, ETA1_RIBBED, 21_000.0);
        assert!((coef - 4.272e-4).abs() < 1e-6);
        assert!((crack_width_by_stress(coef, 15.77, 0.2210) - 0.0914).abs() < 0.0005);
        assert!((crack_width_by_ratio(coef, 0.018923) - 0.1095).abs() < 0.0005);
    }
}
