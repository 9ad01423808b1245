//! # Cross-Section Property Formulas
//!
//! Geometric properties of rectangular concrete sections and reinforcing bars.
//!
//! ## Notation
//!
//! - `b` = Width of section (cm)
//! - `h` = Overall height of section (cm)
//! - `A` = Cross-sectional area (cm²)
//! - `I` = Moment of inertia of the gross section (cm⁴)
//! - `φ` = Bar diameter (mm)
//!
//! ## References
//!
//! - NBR 6118:2014 Section 17.3 (stage I gross-section properties)
//! - NBR 7480 (nominal bar areas)

use std::f64::consts::PI;

// =============================================================================
// RECTANGULAR SECTION PROPERTIES
// =============================================================================

/// Calculate gross area of a rectangular section
///
/// ```text
///     ┌─────────┐
///     │         │
///   h │         │
///     │         │
///     └─────────┘
///          b
/// ```
///
/// # Formula
/// A = b × h
///
/// # Example
/// ```rust
/// use rc_core::equations::section::rectangular_area;
///
/// let area = rectangular_area(20.0, 50.0);
/// assert!((area - 1000.0).abs() < 1e-9);
/// ```
#[inline]
pub fn rectangular_area(b: f64, h: f64) -> f64 {
    b * h
}

/// Calculate gross moment of inertia of a rectangular section about its centroid
///
/// # Formula
/// I_c = b·h³/12
///
/// # Example
/// ```rust
/// use rc_core::equations::section::rectangular_moment_of_inertia;
///
/// // 20 x 50 cm beam
/// let ic = rectangular_moment_of_inertia(20.0, 50.0);
/// assert!((ic - 208_333.33).abs() < 0.01);
/// ```
///
/// # Reference
/// - NBR 6118:2014 Section 17.3.1
#[inline]
pub fn rectangular_moment_of_inertia(b: f64, h: f64) -> f64 {
    b * h.powi(3) / 12.0
}

/// Distance from the centroid to the extreme tension fiber, y_t = h/2
#[inline]
pub fn rectangular_extreme_fiber_distance(h: f64) -> f64 {
    h / 2.0
}

// =============================================================================
// REINFORCING BARS
// =============================================================================

/// Nominal area of one bar in cm², given its diameter in mm
///
/// # Formula
/// A_φ = π·(φ/20)²
///
/// The factor 20 halves the diameter and converts mm to cm in one step.
///
/// # Example
/// ```rust
/// use rc_core::equations::section::area_of_bar;
///
/// assert!((area_of_bar(10.0) - 0.785).abs() < 0.001);
/// assert!((area_of_bar(32.0) - 8.042).abs() < 0.001);
/// ```
#[inline]
pub fn area_of_bar(diameter_mm: f64) -> f64 {
    let radius_cm = diameter_mm / 20.0;
    PI * radius_cm.powi(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 0.001;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_rectangular_area() {
        let a = rectangular_area(14.0, 40.0);
        assert!(approx_eq(a, 560.0), "A = {} (expected 560)", a);
    }

    #[test]
    fn test_rectangular_moment_of_inertia() {
        // I = 20 * 50^3 / 12 = 208333.33
        let i = rectangular_moment_of_inertia(20.0, 50.0);
        assert!((i - 208_333.333).abs() < 0.01, "I = {}", i);
    }

    #[test]
    fn test_extreme_fiber() {
        assert!(approx_eq(rectangular_extreme_fiber_distance(50.0), 25.0));
    }

    #[test]
    fn test_bar_areas() {
        assert!(approx_eq(area_of_bar(0.0), 0.0));
        assert!(approx_eq(area_of_bar(10.0), 0.785));
        assert!(approx_eq(area_of_bar(10.0) * 4.0, 3.142));
        assert!(approx_eq(area_of_bar(32.0), 8.042));
        assert!(approx_eq(area_of_bar(32.0) * 5.0, 40.212));
    }
}
