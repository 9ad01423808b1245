//! # Section Forces
//!
//! Characteristic internal forces acting on the section and the load factor
//! that turns them into design values.
//!
//! ## Sign Convention
//!
//! - **Moment**: Positive causes tension on the bottom face
//! - **Axial force**: Positive is compression, negative is tension
//!
//! ## Example
//!
//! ```rust
//! use rc_core::loads::Loads;
//!
//! let loads = Loads::new(28.57, 0.0);
//!
//! // Msd = 1.4 * 28.57 kN·m = 3999.8 kN·cm
//! assert!((loads.design_moment().0 - 3999.8).abs() < 1e-6);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::{KnCm, KnM};

/// Default load factor for ultimate combinations (NBR 6118 Table 11.1)
pub const DEFAULT_GAMMA_F: f64 = 1.4;

fn default_gamma_f() -> f64 {
    DEFAULT_GAMMA_F
}

/// Characteristic forces on the section.
///
/// ## JSON Example
///
/// ```json
/// { "msk": 83.57, "nsk": 0.0, "gamma_f": 1.4 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Loads {
    /// Characteristic bending moment (kN·m)
    pub msk: f64,

    /// Characteristic axial force (kN), positive = compression
    #[serde(default)]
    pub nsk: f64,

    /// Load safety factor
    #[serde(default = "default_gamma_f")]
    pub gamma_f: f64,
}

impl Default for Loads {
    fn default() -> Self {
        Loads::new(0.0, 0.0)
    }
}

impl Loads {
    /// Create loads with the default load factor
    pub fn new(msk: f64, nsk: f64) -> Self {
        Loads {
            msk,
            nsk,
            gamma_f: DEFAULT_GAMMA_F,
        }
    }

    /// Set a custom load factor
    pub fn with_gamma_f(mut self, gamma_f: f64) -> Self {
        self.gamma_f = gamma_f;
        self
    }

    /// Validate load inputs
    pub fn validate(&self) -> CalcResult<()> {
        if !self.msk.is_finite() {
            return Err(CalcError::invalid_input("msk", self.msk.to_string(), "Moment must be finite"));
        }
        if !self.nsk.is_finite() {
            return Err(CalcError::invalid_input("nsk", self.nsk.to_string(), "Axial force must be finite"));
        }
        if !self.gamma_f.is_finite() || self.gamma_f <= 0.0 {
            return Err(CalcError::invalid_input(
                "gamma_f",
                self.gamma_f.to_string(),
                "Load factor must be positive",
            ));
        }
        Ok(())
    }

    /// Design moment Msd = γf · Msk, in kN·cm
    pub fn design_moment(&self) -> KnCm {
        KnCm::from(KnM(self.msk)) * self.gamma_f
    }

    /// Design axial force Nsd = γf · Nsk, in kN
    pub fn design_axial(&self) -> f64 {
        self.gamma_f * self.nsk
    }

    /// Unfactored service moment, in kN·cm
    pub fn service_moment(&self) -> KnCm {
        KnM(self.msk).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_design_values() {
        let loads = Loads::new(200.0, 1500.0);
        assert!((loads.design_moment().0 - 28_000.0).abs() < 1e-6);
        assert!((loads.design_axial() - 2100.0).abs() < 1e-9);
        assert!((loads.service_moment().0 - 20_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_custom_gamma_f() {
        let loads = Loads::new(10.0, -5.0).with_gamma_f(1.0);
        assert!((loads.design_moment().0 - 1000.0).abs() < 1e-9);
        assert_eq!(loads.design_axial(), -5.0);
    }

    #[test]
    fn test_validation() {
        assert!(Loads::new(10.0, 0.0).validate().is_ok());
        assert!(Loads::new(f64::NAN, 0.0).validate().is_err());
        assert!(Loads::new(10.0, 0.0).with_gamma_f(0.0).validate().is_err());
    }

    #[test]
    fn test_serde_defaults() {
        let loads: Loads = serde_json::from_str(r#"{ "msk": 62.5 }"#).unwrap();
        assert_eq!(loads.nsk, 0.0);
        assert_eq!(loads.gamma_f, 1.4);
    }
}
