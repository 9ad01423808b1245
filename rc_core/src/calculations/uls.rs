//! # ULS Section Design
//!
//! Required longitudinal steel for a rectangular section under combined
//! bending and axial force, per NBR 6118 Section 17.2.
//!
//! ## Regime Selection
//!
//! ```text
//!   small-eccentricity trial (whole section at 2‰)
//!     ├─ As > 0 and A's > 0 ──────────────► Small / Double   (x = h/λ)
//!     ├─ A's > 0 only ────────────────────► Small / Simple   (top bars only)
//!     └─ otherwise: large-eccentricity neutral axis
//!          ├─ domain 1 ───────────────────► Large / FlexureTension
//!          ├─ x > x_lim ──────────────────► Large / Double   (x = x_lim)
//!          └─ else ───────────────────────► Large / Simple
//! ```
//!
//! A negative intermediate area is a signal to switch regime, never an answer:
//! reported areas are always positive or absent. A section too small for its
//! loads yields `valid = false` with the diagnostic `x` (possibly NaN) and no
//! areas.
//!
//! ## Example
//!
//! ```rust
//! use rc_core::calculations::uls::design_section;
//! use rc_core::section::{Section, SectionGeometry};
//! use rc_core::materials::MaterialProperties;
//! use rc_core::loads::Loads;
//!
//! let section = Section::new(
//!     SectionGeometry::rectangle(14.0, 40.0),
//!     MaterialProperties { fck: 25.0, fy: 500.0, cover: 2.5, ..Default::default() },
//!     Loads::new(28.57, 0.0),
//! );
//!
//! let result = design_section(&section, 4.0, 4.0).unwrap();
//! assert!(result.valid);
//! assert!((result.x - 7.09).abs() < 0.01);
//! assert!((result.as_bottom.unwrap() - 2.77).abs() < 0.01);
//! assert!(result.as_top.is_none());
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::calculations::domain::{classify_domain, Domain, DomainInput};
use crate::equations::flexure::{self, StressBlock};
use crate::errors::{CalcError, CalcResult};
use crate::materials::steel::stress_from_strain;
use crate::materials::{resolve_design_parameters, DesignParameters};
use crate::reinforcement::Reinforcement;
use crate::section::Section;

/// Which equilibrium family governs the section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Eccentricity {
    /// Axial force dominates, the section is (nearly) fully compressed
    Small,
    /// Bending dominates, a tension zone exists
    Large,
}

/// How the required steel is arranged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReinforcementCase {
    /// Bars on one face only
    Simple,
    /// Bars on both faces
    Double,
    /// Eccentric tension: both faces in tension, no concrete block
    FlexureTension,
}

/// Factored values the solver worked with (kN, cm)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignVariables {
    /// Design concrete strength (kN/cm²)
    pub fcd: f64,
    /// Design steel yield strength (kN/cm²)
    pub fyd: f64,
    /// Design moment (kN·cm)
    pub msd: f64,
    /// Design axial force (kN), positive = compression
    pub nsd: f64,
    /// Steel modulus (kN/cm²)
    pub es: f64,
    /// Width (cm)
    pub b: f64,
    /// Effective depth of the bottom bars (cm)
    pub d: f64,
    /// Height (cm)
    pub h: f64,
    /// Bottom bars centroid to bottom face (cm)
    pub d_bottom: f64,
    /// Top bars centroid to top face (cm)
    pub d_top: f64,
}

/// Outcome of a section design.
///
/// ## JSON Example
///
/// ```json
/// {
///   "x": 16.2,
///   "domain": "3a",
///   "as_bottom": 8.90,
///   "as_top": 2.57,
///   "valid": true,
///   "eccentricity": "Large",
///   "reinforcement": "Double",
///   "variables": { "fcd": 1.786, "fyd": 43.48, "msd": 11699.8, "nsd": 0.0,
///                  "es": 21000.0, "b": 14.0, "d": 36.0, "h": 40.0,
///                  "d_bottom": 4.0, "d_top": 4.0 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignResult {
    /// Neutral-axis depth (cm). NaN when the section cannot balance the loads.
    pub x: f64,

    /// Strain domain at `x`
    pub domain: Domain,

    /// Required bottom steel area (cm²)
    pub as_bottom: Option<f64>,

    /// Required top steel area (cm²)
    pub as_top: Option<f64>,

    /// False when the geometry cannot carry the loads; no areas are reported then
    pub valid: bool,

    /// Governing eccentricity regime
    pub eccentricity: Eccentricity,

    /// Governing reinforcement arrangement
    pub reinforcement: ReinforcementCase,

    /// Factored inputs, for reports
    pub variables: DesignVariables,
}

impl DesignResult {
    /// Total required steel (cm²)
    pub fn total_area(&self) -> f64 {
        self.as_bottom.unwrap_or(0.0) + self.as_top.unwrap_or(0.0)
    }

    /// Relative neutral-axis depth x/d
    pub fn relative_depth(&self) -> f64 {
        self.x / self.variables.d
    }
}

/// Design a section given the bar centroid distances of both faces.
///
/// # Arguments
///
/// * `section` - Geometry, materials and characteristic loads
/// * `d_bottom` - Bottom face to bottom-bar centroid (cm)
/// * `d_top` - Top face to top-bar centroid (cm)
///
/// # Returns
///
/// * `Ok(DesignResult)` - Feasible or infeasible (`valid = false`) design
/// * `Err(CalcError::NotImplemented)` - Non-rectangular geometry
/// * `Err(CalcError::OutOfRange)` - fck above 90 MPa
/// * `Err(CalcError::InvalidInput)` - Malformed input
pub fn design_section(section: &Section, d_bottom: f64, d_top: f64) -> CalcResult<DesignResult> {
    section.validate()?;
    let params = resolve_design_parameters(section.material.fck)?;
    let (b, h) = section.geometry.rectangle_dimensions()?;
    validate_bar_depths(h, d_bottom, d_top)?;

    let strengths = section.material.design_strengths();
    let variables = DesignVariables {
        fcd: strengths.fcd,
        fyd: strengths.fyd,
        msd: section.loads.design_moment().value(),
        nsd: section.loads.design_axial(),
        es: strengths.es,
        b,
        d: h - d_bottom,
        h,
        d_bottom,
        d_top,
    };

    Ok(Solver::new(params, variables).solve())
}

/// Design a section, resolving d' of both faces from the bar layout first.
pub fn design_with_reinforcement(section: &Section, reinforcement: &Reinforcement) -> CalcResult<DesignResult> {
    let depths = reinforcement.effective_depths(section.material.cover);
    design_section(section, depths.bottom, depths.top)
}

fn validate_bar_depths(h: f64, d_bottom: f64, d_top: f64) -> CalcResult<()> {
    for (field, value) in [("d_bottom", d_bottom), ("d_top", d_top)] {
        if !value.is_finite() || value < 0.0 {
            return Err(CalcError::invalid_input(
                field,
                value.to_string(),
                "Bar centroid distance must be a non-negative number",
            ));
        }
    }
    if d_bottom + d_top >= h {
        return Err(CalcError::invalid_input(
            "d_bottom + d_top",
            (d_bottom + d_top).to_string(),
            "Bar centroids must lie inside the section height",
        ));
    }
    Ok(())
}

/// Keep an equilibrium area only when steel is actually required
fn required(area: f64) -> Option<f64> {
    (area > 0.0).then_some(area)
}

struct Solver {
    params: DesignParameters,
    block: StressBlock,
    v: DesignVariables,
}

impl Solver {
    fn new(params: DesignParameters, v: DesignVariables) -> Self {
        Solver {
            params,
            block: StressBlock::new(&params, v.fcd),
            v,
        }
    }

    fn classify(&self, x: f64) -> Domain {
        classify_domain(&DomainInput {
            x,
            d: self.v.d,
            h: self.v.h,
            ecu: self.params.ecu,
            es: self.v.es,
            fyd: self.v.fyd,
        })
    }

    fn result(
        &self,
        x: f64,
        as_bottom: Option<f64>,
        as_top: Option<f64>,
        eccentricity: Eccentricity,
        reinforcement: ReinforcementCase,
    ) -> DesignResult {
        DesignResult {
            x,
            domain: self.classify(x),
            as_bottom,
            as_top,
            valid: true,
            eccentricity,
            reinforcement,
            variables: self.v,
        }
    }

    fn infeasible(&self, x: f64, eccentricity: Eccentricity, reinforcement: ReinforcementCase) -> DesignResult {
        warn!(
            x,
            b = self.v.b,
            h = self.v.h,
            msd = self.v.msd,
            nsd = self.v.nsd,
            "section cannot balance the design forces"
        );
        DesignResult {
            valid: false,
            ..self.result(x, None, None, eccentricity, reinforcement)
        }
    }

    fn solve(&self) -> DesignResult {
        let v = &self.v;
        let trial = flexure::small_eccentricity_double(v.msd, v.nsd, v.b, v.h, v.d_bottom, v.d_top, &self.block, v.es);
        debug!(as_bottom = trial.bottom, as_top = trial.top, "small eccentricity trial");

        if trial.bottom > 0.0 && trial.top > 0.0 {
            let x = v.h / self.params.lambda;
            debug!(x, "small eccentricity, double reinforcement");
            return self.result(
                x,
                Some(trial.bottom),
                Some(trial.top),
                Eccentricity::Small,
                ReinforcementCase::Double,
            );
        }

        if trial.top > 0.0 {
            return self.small_eccentricity_simple();
        }

        self.large_eccentricity()
    }

    fn small_eccentricity_simple(&self) -> DesignResult {
        let v = &self.v;
        let x = flexure::small_eccentricity_neutral_axis(v.msd, v.nsd, v.b, v.h, v.d_top, &self.block);
        let x_max = v.h / self.params.lambda;
        debug!(x, x_max, "small eccentricity, simple reinforcement");

        if x.is_nan() || x > x_max {
            return self.infeasible(x, Eccentricity::Small, ReinforcementCase::Simple);
        }

        let domain = self.classify(x);
        let strain = flexure::top_steel_strain(x, v.d, v.h, v.d_top, domain, &self.params);
        let sigma_top = stress_from_strain(strain, v.es, v.fyd);
        let as_top = flexure::small_eccentricity_top_area(v.nsd, v.b, x, &self.block, sigma_top);

        self.result(x, None, required(as_top), Eccentricity::Small, ReinforcementCase::Simple)
    }

    fn large_eccentricity(&self) -> DesignResult {
        let v = &self.v;
        let moment = flexure::moment_about_bottom_steel(v.msd, v.nsd, v.h, v.d_bottom);
        let x = flexure::large_eccentricity_neutral_axis(moment, v.b, v.d, &self.block);

        if x.is_nan() {
            return self.infeasible(x, Eccentricity::Large, ReinforcementCase::Simple);
        }

        let domain = self.classify(x);
        debug!(x, %domain, "large eccentricity neutral axis");

        if domain == Domain::One {
            let areas = flexure::flexure_tension(v.msd, v.nsd, v.h, v.d_bottom, v.d_top, v.fyd);
            debug!(as_bottom = areas.bottom, as_top = areas.top, "flexure with tension");
            // No compression block: report the neutral axis at the top face
            return self.result(
                x.max(0.0),
                required(areas.bottom),
                required(areas.top),
                Eccentricity::Large,
                ReinforcementCase::FlexureTension,
            );
        }

        let x_lim = v.d * self.params.x_lim_rel;
        if x > x_lim {
            return self.large_eccentricity_double(moment, x_lim);
        }

        let as_bottom = flexure::large_eccentricity_single_area(moment, v.nsd, v.d, x, self.params.lambda, v.fyd);
        self.result(x, required(as_bottom), None, Eccentricity::Large, ReinforcementCase::Simple)
    }

    fn large_eccentricity_double(&self, moment: f64, x_lim: f64) -> DesignResult {
        let v = &self.v;
        let x = x_lim;
        let block_moment = flexure::concrete_block_moment(v.b, v.d, x, &self.block);
        let delta_msd = moment - block_moment;
        let sigma_top = flexure::compression_steel_stress(x, v.d_top, self.params.ecu, v.es, v.fyd);
        if sigma_top <= 0.0 {
            // Top bars below the neutral axis are in tension and cannot carry ΔMsd
            return self.infeasible(x, Eccentricity::Large, ReinforcementCase::Double);
        }
        let as_top = flexure::double_top_area(delta_msd, sigma_top, v.d, v.d_top);
        let as_bottom = flexure::double_bottom_area(
            block_moment,
            delta_msd,
            v.nsd,
            v.d,
            v.d_top,
            x,
            self.params.lambda,
            v.fyd,
        );
        debug!(x, block_moment, delta_msd, sigma_top, "large eccentricity, double reinforcement");

        self.result(
            x,
            required(as_bottom),
            required(as_top),
            Eccentricity::Large,
            ReinforcementCase::Double,
        )
    }
}
