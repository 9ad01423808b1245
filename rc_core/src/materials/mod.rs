//! # Materials
//!
//! Concrete and reinforcing-steel properties for section design.
//!
//! - [`concrete`] - Stress-block parameters, service properties, minimum ratios
//! - [`steel`] - Elastic-plastic reinforcing steel law
//!
//! ## Example
//!
//! ```rust
//! use rc_core::materials::MaterialProperties;
//!
//! // C25 concrete, CA-50 steel, 2.5 cm cover, NBR 6118 safety factors
//! let material = MaterialProperties::default();
//! let strengths = material.design_strengths();
//!
//! // fcd = 25 MPa / 1.4 = 1.786 kN/cm²
//! assert!((strengths.fcd - 1.786).abs() < 0.001);
//! ```

pub mod concrete;
pub mod steel;

pub use concrete::{resolve_design_parameters, DesignParameters};

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::{Gpa, KnPerCm2, Mpa};

/// Default partial safety factor for concrete (NBR 6118 Table 12.1)
pub const DEFAULT_GAMMA_C: f64 = 1.4;

/// Default partial safety factor for steel (NBR 6118 Table 12.1)
pub const DEFAULT_GAMMA_S: f64 = 1.15;

/// Default modulus of elasticity of reinforcing steel (GPa)
pub const DEFAULT_ES_GPA: f64 = 210.0;

fn default_gamma_c() -> f64 {
    DEFAULT_GAMMA_C
}

fn default_gamma_s() -> f64 {
    DEFAULT_GAMMA_S
}

fn default_es() -> f64 {
    DEFAULT_ES_GPA
}

/// Concrete and steel properties of a section.
///
/// ## JSON Example
///
/// ```json
/// {
///   "fck": 25.0,
///   "fy": 500.0,
///   "es": 210.0,
///   "gamma_c": 1.4,
///   "gamma_s": 1.15,
///   "cover": 2.5
/// }
/// ```
///
/// `es`, `gamma_c` and `gamma_s` may be omitted and take the code defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialProperties {
    /// Characteristic compressive strength of concrete (MPa)
    pub fck: f64,

    /// Characteristic yield strength of steel (MPa)
    pub fy: f64,

    /// Modulus of elasticity of steel (GPa)
    #[serde(default = "default_es")]
    pub es: f64,

    /// Partial safety factor for concrete
    #[serde(default = "default_gamma_c")]
    pub gamma_c: f64,

    /// Partial safety factor for steel
    #[serde(default = "default_gamma_s")]
    pub gamma_s: f64,

    /// Nominal concrete cover to the stirrup (cm)
    pub cover: f64,
}

impl Default for MaterialProperties {
    fn default() -> Self {
        MaterialProperties {
            fck: 25.0,
            fy: 500.0,
            es: DEFAULT_ES_GPA,
            gamma_c: DEFAULT_GAMMA_C,
            gamma_s: DEFAULT_GAMMA_S,
            cover: 2.5,
        }
    }
}

/// Design strengths and steel modulus, all in kN/cm².
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignStrengths {
    /// Design compressive strength of concrete fcd = fck / γc
    pub fcd: f64,
    /// Design yield strength of steel fyd = fy / γs
    pub fyd: f64,
    /// Modulus of elasticity of steel
    pub es: f64,
}

impl MaterialProperties {
    /// Validate material inputs.
    ///
    /// The upper fck bound is enforced by [`resolve_design_parameters`].
    pub fn validate(&self) -> CalcResult<()> {
        let positive = [
            ("fck", self.fck),
            ("fy", self.fy),
            ("es", self.es),
            ("gamma_c", self.gamma_c),
            ("gamma_s", self.gamma_s),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Must be a positive number",
                ));
            }
        }
        if !self.cover.is_finite() || self.cover < 0.0 {
            return Err(CalcError::invalid_input(
                "cover",
                self.cover.to_string(),
                "Cover cannot be negative",
            ));
        }
        Ok(())
    }

    /// Factored design strengths in kN/cm².
    pub fn design_strengths(&self) -> DesignStrengths {
        let fck: KnPerCm2 = Mpa(self.fck).into();
        let fy: KnPerCm2 = Mpa(self.fy).into();
        let es: KnPerCm2 = Gpa(self.es).into();
        DesignStrengths {
            fcd: fck.value() / self.gamma_c,
            fyd: fy.value() / self.gamma_s,
            es: es.value(),
        }
    }
}
