//! Concrete Design Parameters (NBR 6118)
//!
//! Stress-block and strain-limit constants derived from the characteristic
//! compressive strength `fck`, plus the service-state properties (secant
//! modulus, mean tensile strength) and the minimum reinforcement ratio table.
//!
//! ## Strength Classes
//!
//! - **C20 to C50**: parabola-rectangle diagram with fixed constants
//!   (`ecu = 3.5‰`, `alfac = 0.85`, `lambda = 0.8`)
//! - **C55 to C90**: every constant is a function of `fck`
//! - **Above C90**: not covered by the code, rejected with `OutOfRange`
//!
//! ## Example
//!
//! ```rust
//! use rc_core::materials::concrete::resolve_design_parameters;
//!
//! let params = resolve_design_parameters(60.0).unwrap();
//! assert!((params.lambda - 0.775).abs() < 1e-12);
//! assert_eq!(params.x_lim_rel, 0.35);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Highest concrete strength the code defines parameters for (MPa)
pub const FCK_MAX_MPA: f64 = 90.0;

/// Upper bound of the conventional (fixed-constant) strength range (MPa)
pub const FCK_CONVENTIONAL_MAX_MPA: f64 = 50.0;

/// Parameters of the rectangular stress block and the strain limits.
///
/// ## JSON Example
///
/// ```json
/// {
///   "ec2": 0.002,
///   "ecu": 0.0035,
///   "n": 2.0,
///   "alfac": 0.85,
///   "lambda": 0.8,
///   "x_lim_rel": 0.45
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignParameters {
    /// Strain at the start of the plastic plateau
    pub ec2: f64,

    /// Ultimate compressive strain of concrete
    pub ecu: f64,

    /// Exponent of the parabola in the parabola-rectangle diagram
    pub n: f64,

    /// Stress-block intensity factor (applied to fcd)
    pub alfac: f64,

    /// Stress-block depth factor (block depth = lambda·x)
    pub lambda: f64,

    /// Limiting relative neutral-axis depth x/d for ductility
    pub x_lim_rel: f64,
}

/// Resolve the stress-block and strain-limit parameters for a concrete strength.
///
/// # Arguments
///
/// * `fck` - Characteristic compressive strength in MPa
///
/// # Returns
///
/// * `Ok(DesignParameters)` - Parameters for `0 < fck <= 90`
/// * `Err(CalcError::OutOfRange)` - `fck > 90`
/// * `Err(CalcError::InvalidInput)` - `fck` not positive or not finite
pub fn resolve_design_parameters(fck: f64) -> CalcResult<DesignParameters> {
    validate_fck(fck)?;

    if fck <= FCK_CONVENTIONAL_MAX_MPA {
        return Ok(DesignParameters {
            ec2: 0.002,
            ecu: 0.0035,
            n: 2.0,
            alfac: 0.85,
            lambda: 0.8,
            x_lim_rel: 0.45,
        });
    }

    // NBR 6118:2014 Section 8.2.10.1 and 17.2.2
    let above = fck - FCK_CONVENTIONAL_MAX_MPA;
    let below_max = ((FCK_MAX_MPA - fck) / 100.0).powi(4);

    Ok(DesignParameters {
        ec2: 0.002 + 0.000085 * above.powf(0.53),
        ecu: 0.0026 + 0.035 * below_max,
        n: 1.4 + 23.4 * below_max,
        alfac: 0.85 * (1.0 - above / 200.0),
        lambda: 0.8 - above / 400.0,
        x_lim_rel: 0.35,
    })
}

/// Secant modulus of elasticity Ecs in MPa.
///
/// Uses granite/gneiss aggregate (αE = 1.0): Ecs = 0.85 · 5600 · √fck
pub fn secant_modulus_mpa(fck: f64) -> f64 {
    0.85 * 5600.0 * fck.sqrt()
}

/// Mean tensile strength fct,m = 0.3 · fck^(2/3) in MPa
pub fn mean_tensile_strength_mpa(fck: f64) -> f64 {
    0.3 * fck.powf(2.0 / 3.0)
}

/// Minimum flexural reinforcement ratio ρmin (As,min / Ac).
///
/// NBR 6118:2014 Table 17.3, rectangular sections. Each class applies up to
/// and including its upper bound.
const MIN_REINFORCEMENT_RATIOS: [(f64, f64); 13] = [
    (30.0, 0.0015),
    (35.0, 0.00164),
    (40.0, 0.00179),
    (45.0, 0.00194),
    (50.0, 0.00208),
    (55.0, 0.00211),
    (60.0, 0.00219),
    (65.0, 0.00226),
    (70.0, 0.00233),
    (75.0, 0.00239),
    (80.0, 0.00245),
    (85.0, 0.00251),
    (90.0, 0.00256),
];

/// Look up the minimum reinforcement ratio for a concrete strength.
pub fn minimum_reinforcement_ratio(fck: f64) -> CalcResult<f64> {
    validate_fck(fck)?;

    MIN_REINFORCEMENT_RATIOS
        .iter()
        .find(|(upper, _)| fck <= *upper)
        .map(|(_, ratio)| *ratio)
        .ok_or_else(|| {
            CalcError::out_of_range(
                "fck",
                fck.to_string(),
                "No minimum reinforcement ratio defined above 90 MPa",
            )
        })
}

fn validate_fck(fck: f64) -> CalcResult<()> {
    if !fck.is_finite() || fck <= 0.0 {
        return Err(CalcError::invalid_input(
            "fck",
            fck.to_string(),
            "Concrete strength must be a positive number",
        ));
    }
    if fck > FCK_MAX_MPA {
        return Err(CalcError::out_of_range(
            "fck",
            fck.to_string(),
            "NBR 6118 does not define parameters for concrete stronger than 90 MPa",
        ));
    }
    Ok(())
}
