//! # Unit Types
//!
//! Type-safe wrappers for the units used by the design engine. Each wrapper is
//! a plain `f64` newtype, so JSON stays a bare number.
//!
//! ## Unit System
//!
//! Inputs follow Brazilian engineering practice:
//! - Stress: megapascal (MPa) for concrete and steel strengths, gigapascal (GPa) for moduli
//! - Moment: kilonewton-meters (kN·m)
//! - Length: centimeters (cm) for geometry, millimeters (mm) for bar diameters
//!
//! The solvers work in kN and cm, so stresses are carried as kN/cm² and
//! moments as kN·cm.
//!
//! ## Example
//!
//! ```rust
//! use rc_core::units::{KnCm, KnM, KnPerCm2, Mpa};
//!
//! let fck: KnPerCm2 = Mpa(25.0).into();
//! assert!((fck.0 - 2.5).abs() < 1e-12);
//!
//! let msk: KnCm = KnM(28.57).into();
//! assert!((msk.0 - 2857.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Stress Units
// ============================================================================

/// Stress in megapascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mpa(pub f64);

/// Stress (or modulus) in gigapascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Gpa(pub f64);

/// Stress in kilonewtons per square centimeter (1 kN/cm² = 10 MPa)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnPerCm2(pub f64);

impl From<Mpa> for KnPerCm2 {
    fn from(mpa: Mpa) -> Self {
        KnPerCm2(mpa.0 / 10.0)
    }
}

impl From<KnPerCm2> for Mpa {
    fn from(kn: KnPerCm2) -> Self {
        Mpa(kn.0 * 10.0)
    }
}

impl From<Gpa> for KnPerCm2 {
    fn from(gpa: Gpa) -> Self {
        KnPerCm2(gpa.0 * 100.0)
    }
}

impl From<Gpa> for Mpa {
    fn from(gpa: Gpa) -> Self {
        Mpa(gpa.0 * 1000.0)
    }
}

// ============================================================================
// Moment Units
// ============================================================================

/// Moment in kilonewton-meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnM(pub f64);

/// Moment in kilonewton-centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnCm(pub f64);

impl From<KnM> for KnCm {
    fn from(knm: KnM) -> Self {
        KnCm(knm.0 * 100.0)
    }
}

impl From<KnCm> for KnM {
    fn from(kncm: KnCm) -> Self {
        KnM(kncm.0 / 100.0)
    }
}

// ============================================================================
// Length and Area Units
// ============================================================================

/// Length in centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Centimeters(pub f64);

/// Length in millimeters (bar and stirrup diameters)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

impl From<Millimeters> for Centimeters {
    fn from(mm: Millimeters) -> Self {
        Centimeters(mm.0 / 10.0)
    }
}

impl From<Centimeters> for Millimeters {
    fn from(cm: Centimeters) -> Self {
        Millimeters(cm.0 * 10.0)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_arithmetic!(Mpa);
impl_arithmetic!(Gpa);
impl_arithmetic!(KnPerCm2);
impl_arithmetic!(KnM);
impl_arithmetic!(KnCm);
impl_arithmetic!(Centimeters);
impl_arithmetic!(Millimeters);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mpa_to_kn_per_cm2() {
        let fy: KnPerCm2 = Mpa(500.0).into();
        assert!((fy.0 - 50.0).abs() < 1e-12);
        let back: Mpa = fy.into();
        assert!((back.0 - 500.0).abs() < 1e-12);
    }

    #[test]
    fn test_gpa_conversions() {
        let es: KnPerCm2 = Gpa(210.0).into();
        assert!((es.0 - 21_000.0).abs() < 1e-9);
        let es_mpa: Mpa = Gpa(210.0).into();
        assert!((es_mpa.0 - 210_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_moment_conversion() {
        let m: KnCm = KnM(62.5).into();
        assert!((m.0 - 6250.0).abs() < 1e-9);
    }

    #[test]
    fn test_diameter_to_cm() {
        let phi: Centimeters = Millimeters(16.0).into();
        assert!((phi.0 - 1.6).abs() < 1e-12);
    }

    #[test]
    fn test_arithmetic() {
        let a = Centimeters(10.0);
        let b = Centimeters(4.0);
        assert_eq!((a + b).0, 14.0);
        assert_eq!((a - b).0, 6.0);
        assert_eq!((a * 2.0).0, 20.0);
        assert_eq!((a / 2.0).value(), 5.0);
    }

    #[test]
    fn test_serialization() {
        let fck = Mpa(30.0);
        let json = serde_json::to_string(&fck).unwrap();
        assert_eq!(json, "30.0");
        let roundtrip: Mpa = serde_json::from_str(&json).unwrap();
        assert_eq!(fck, roundtrip);
    }
}
