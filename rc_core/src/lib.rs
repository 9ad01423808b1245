//! # rc_core - Reinforced Concrete Section Design Engine
//!
//! `rc_core` designs rectangular reinforced-concrete cross sections under
//! bending with axial force following NBR 6118: it finds the required steel
//! at the ultimate limit state and estimates crack width at the serviceability
//! limit state. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Infeasible is not an error**: an undersized section is a result with
//!   `valid = false`
//!
//! ## Quick Start
//!
//! ```rust
//! use rc_core::{design_section, Section, SectionGeometry, MaterialProperties, Loads};
//!
//! let section = Section::new(
//!     SectionGeometry::rectangle(14.0, 40.0),
//!     MaterialProperties::default(),
//!     Loads::new(83.57, 0.0),
//! );
//!
//! let result = design_section(&section, 4.0, 4.0).unwrap();
//! assert!(result.valid);
//! assert!(result.as_top.is_some());
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Domain classifier, ULS design, SLS crack width, batches
//! - [`equations`] - Pure formulas behind the calculations
//! - [`materials`] - Concrete parameters by strength class, steel behaviour
//! - [`section`] - Geometry and the section bundle
//! - [`reinforcement`] - Bar layouts and effective depth
//! - [`loads`] - Characteristic forces and load factor
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types
//!
//! ## Logging
//!
//! Regime selection is reported through [`tracing`] at `debug` level and
//! infeasible designs at `warn`. The library never installs a subscriber.

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod loads;
pub mod materials;
pub mod reinforcement;
pub mod section;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{
    design_section, design_with_reinforcement, estimate_crack_width, evaluate, evaluate_batch, DesignResult,
    Domain, SectionInput, SectionReport,
};
pub use equations::area_of_bar;
pub use errors::{CalcError, CalcResult};
pub use loads::Loads;
pub use materials::{resolve_design_parameters, DesignParameters, MaterialProperties};
pub use reinforcement::{Reinforcement, ReinforcementArrangement, ReinforcementLayer};
pub use section::{Section, SectionGeometry};
