//! # Reinforced Concrete Equations
//!
//! Pure formulas used by the calculations, kept in one place so they can be
//! checked line by line against the code clauses they come from.
//!
//! ## Modules
//!
//! - [`section`] - Gross-section properties and bar areas
//! - [`flexure`] - ULS equilibrium of bending with axial force
//! - [`cracking`] - Stage II response and crack width (SLS)
//!
//! ## Sign Conventions
//!
//! - **Moment**: Positive causes tension on the bottom face
//! - **Axial force**: Positive is compression
//! - **Neutral axis**: Depth `x` measured down from the top face
//! - **Strains**: Compression positive for concrete, tension positive for
//!   the bottom bars
//!
//! ## Units
//!
//! kN and cm throughout: stresses in kN/cm², moments in kN·cm. Bar diameters
//! are the one exception and stay in mm, as they are catalogued.
//!
//! ## References
//!
//! - NBR 6118:2014 Projeto de estruturas de concreto
//! - NBR 7480:2007 Aço destinado a armaduras para estruturas de concreto armado

pub mod cracking;
pub mod flexure;
pub mod section;

// Re-export commonly used items
pub use section::{
    area_of_bar,
    rectangular_area,
    rectangular_moment_of_inertia,
    rectangular_extreme_fiber_distance,
};

pub use flexure::{StressBlock, SteelAreas};

pub use cracking::{stage_two_neutral_axis, tributary_area, BarTie, TributaryArea};
