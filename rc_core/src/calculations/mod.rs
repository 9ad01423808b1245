//! # Section Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` / `*Report` - Calculation results (JSON-serializable)
//! - A pure function from one to the other returning [`CalcResult`]
//!
//! ## Available Calculations
//!
//! - [`domain`] - Strain-domain classification
//! - [`uls`] - Required steel for bending with axial force
//! - [`sls`] - Crack-width estimate under service loads
//!
//! [`evaluate`] runs all of them for one [`SectionInput`]; [`evaluate_batch`]
//! does the same for many, in parallel when the `parallel` feature is on.
//!
//! ## Example
//!
//! ```rust
//! use rc_core::calculations::{evaluate, SectionInput};
//!
//! let json = r#"{
//!     "label": "V1",
//!     "section": {
//!         "geometry": { "type": "rectangle", "width": 20.0, "height": 50.0 },
//!         "material": { "fck": 20.0, "fy": 500.0, "cover": 4.2 },
//!         "loads": { "msk": 62.5 }
//!     },
//!     "reinforcement": {
//!         "bottom": { "layers": [{ "diameter": 16.0, "count": 5 }] }
//!     }
//! }"#;
//!
//! let input: SectionInput = serde_json::from_str(json).unwrap();
//! let report = evaluate(&input).unwrap();
//! assert!(report.design.valid);
//! assert!(report.crack_width.is_some());
//! ```

pub mod domain;
pub mod sls;
pub mod uls;

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::reinforcement::{EffectiveDepths, Reinforcement};
use crate::section::Section;

// Re-export commonly used types
pub use domain::{classify_domain, Domain, DomainInput};
pub use sls::{estimate_crack_width, CrackWidthResult, IntermediateValues, LayerCrackWidth};
pub use uls::{
    design_section, design_with_reinforcement, DesignResult, DesignVariables, Eccentricity, ReinforcementCase,
};

/// One section to evaluate, as read from a project file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionInput {
    /// User label (e.g., "V1 midspan")
    #[serde(default)]
    pub label: String,

    pub section: Section,

    /// Bar layout; empty faces fall back to cover + stirrup
    #[serde(default)]
    pub reinforcement: Reinforcement,
}

/// Everything known about one section after evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionReport {
    pub label: String,

    /// d' of both faces used by the ULS design (cm)
    pub effective_depths: EffectiveDepths,

    /// ULS design
    pub design: DesignResult,

    /// Minimum flexural steel area As,min (cm²)
    pub as_min: f64,

    /// Crack width of the bottom bars, when there are any
    pub crack_width: Option<CrackWidthResult>,
}

impl SectionReport {
    /// Bottom steel to detail: the larger of the required and minimum areas.
    ///
    /// `None` when the design is infeasible.
    pub fn governing_bottom_area(&self) -> Option<f64> {
        self.design
            .valid
            .then(|| self.design.as_bottom.unwrap_or(0.0).max(self.as_min))
    }
}

/// Evaluate one section: ULS design, minimum steel and SLS crack width.
pub fn evaluate(input: &SectionInput) -> CalcResult<SectionReport> {
    let effective_depths = input.reinforcement.effective_depths(input.section.material.cover);
    let design = design_section(&input.section, effective_depths.bottom, effective_depths.top)?;
    let as_min = input.section.minimum_steel_area()?;
    let crack_width = estimate_crack_width(&input.section, &input.reinforcement)?;

    Ok(SectionReport {
        label: input.label.clone(),
        effective_depths,
        design,
        as_min,
        crack_width,
    })
}

/// Evaluate many sections. Results keep the order of the inputs; one failing
/// section does not stop the others.
#[cfg(feature = "parallel")]
pub fn evaluate_batch(inputs: &[SectionInput]) -> Vec<CalcResult<SectionReport>> {
    use rayon::prelude::*;

    inputs.par_iter().map(evaluate).collect()
}

/// Evaluate many sections. Results keep the order of the inputs; one failing
/// section does not stop the others.
#[cfg(not(feature = "parallel"))]
pub fn evaluate_batch(inputs: &[SectionInput]) -> Vec<CalcResult<SectionReport>> {
    inputs.iter().map(evaluate).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loads::Loads;
    use crate::materials::MaterialProperties;
    use crate::reinforcement::{ReinforcementArrangement, ReinforcementLayer};
    use crate::section::{Point2, SectionGeometry};

    fn input(label: &str, msk: f64) -> SectionInput {
        SectionInput {
            label: label.to_string(),
            section: Section::new(
                SectionGeometry::rectangle(20.0, 50.0),
                MaterialProperties {
                    fck: 20.0,
                    cover: 4.2,
                    ..Default::default()
                },
                Loads::new(msk, 0.0),
            ),
            reinforcement: Reinforcement {
                bottom: ReinforcementArrangement::new(0.0).with_layer(ReinforcementLayer::new(16.0, 5)),
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_evaluate_bundles_all_checks() {
        let report = evaluate(&input("V1", 62.5)).unwrap();

        assert_eq!(report.label, "V1");
        assert!((report.effective_depths.bottom - 5.0).abs() < 1e-9);
        assert!((report.design.variables.d - 45.0).abs() < 1e-9);
        assert!(report.design.valid);
        assert!((report.as_min - 1.5).abs() < 1e-9);

        let crack = report.crack_width.unwrap();
        assert!((crack.wk - 0.091).abs() < 0.001);
    }

    #[test]
    fn test_governing_area_respects_minimum() {
        let report = evaluate(&input("small", 1.0)).unwrap();
        assert_eq!(report.governing_bottom_area(), Some(report.as_min));

        let report = evaluate(&input("large", 100.0)).unwrap();
        let required = report.design.as_bottom.unwrap();
        assert!(required > report.as_min);
        assert_eq!(report.governing_bottom_area(), Some(required));
    }

    #[test]
    fn test_batch_keeps_order_and_isolates_errors() {
        let mut polygon = input("polygon", 50.0);
        polygon.section.geometry = SectionGeometry::Polygon {
            points: vec![Point2 { x: 0.0, y: 0.0 }, Point2 { x: 20.0, y: 0.0 }, Point2 { x: 10.0, y: 50.0 }],
        };
        let inputs = vec![input("a", 10.0), polygon, input("c", 80.0)];

        let results = evaluate_batch(&inputs);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().label, "a");
        assert_eq!(results[1].as_ref().unwrap_err().error_code(), "NOT_IMPLEMENTED");
        assert_eq!(results[2].as_ref().unwrap().label, "c");
    }

    #[test]
    fn test_input_from_json_with_defaults() {
        let json = r#"{
            "section": {
                "geometry": { "type": "rectangle", "width": 14.0, "height": 40.0 },
                "material": { "fck": 25.0, "fy": 500.0, "cover": 2.5 },
                "loads": { "msk": 28.57 }
            }
        }"#;
        let parsed: SectionInput = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.label, "");
        assert_eq!(parsed.section.material.gamma_c, 1.4);
        assert_eq!(parsed.section.loads.gamma_f, 1.4);

        let report = evaluate(&parsed).unwrap();
        assert!(report.crack_width.is_none());
        // No bars: d' = cover
        assert!((report.design.variables.d - 37.5).abs() < 1e-9);
    }
}
