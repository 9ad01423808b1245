//! # Strain Domains
//!
//! Classifies the ultimate strain state of a section into the deformation
//! domains of NBR 6118 Section 17.2.2, from the neutral-axis depth.
//!
//! ```text
//!  domain │ x/d range                  │ failure mode
//! ────────┼────────────────────────────┼──────────────────────────────
//!    1    │ x/d ≤ 0                    │ pure/eccentric tension
//!    2    │ 0 < x/d ≤ lim2             │ steel at 10‰, concrete below εcu
//!    3a   │ lim2 < x/d ≤ lim3a         │ both at limit, ductile
//!    3b   │ lim3a < x/d ≤ lim3         │ both at limit, reduced ductility
//!    4    │ lim3 < x/d, x ≤ h          │ concrete crushes, steel elastic
//!    5    │ x > h                      │ whole section compressed
//! ```
//!
//! with `εyd = fyd/Es`, `lim2 = εcu/(0.01+εyd)`, `lim3 = εcu/(εcu+εyd)`.
//! Boundary values belong to the lower domain.
//!
//! ## Example
//!
//! ```rust
//! use rc_core::calculations::domain::{classify_domain, Domain, DomainInput};
//!
//! let domain = classify_domain(&DomainInput {
//!     x: 7.09,
//!     d: 36.0,
//!     h: 40.0,
//!     ecu: 0.0035,
//!     es: 21_000.0,
//!     fyd: 50.0 / 1.15,
//! });
//! assert_eq!(domain, Domain::Two);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::materials::steel::yield_strain;

/// Steel strain limit that bounds domain 2
pub const STEEL_STRAIN_LIMIT: f64 = 0.01;

/// Deformation domain, ordered from tension to full compression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Domain {
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3a")]
    ThreeA,
    #[serde(rename = "3b")]
    ThreeB,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
}

impl Domain {
    /// Code label ("1", "2", "3a", "3b", "4", "5")
    pub fn label(&self) -> &'static str {
        match self {
            Domain::One => "1",
            Domain::Two => "2",
            Domain::ThreeA => "3a",
            Domain::ThreeB => "3b",
            Domain::Four => "4",
            Domain::Five => "5",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Inputs of the domain classifier. Stresses in any consistent unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DomainInput {
    /// Neutral-axis depth (cm)
    pub x: f64,
    /// Effective depth (cm)
    pub d: f64,
    /// Overall height (cm)
    pub h: f64,
    /// Ultimate concrete strain
    pub ecu: f64,
    /// Steel modulus
    pub es: f64,
    /// Design yield stress
    pub fyd: f64,
}

/// Relative-depth limits of the domain ladder
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DomainLimits {
    pub lim2: f64,
    pub lim3a: f64,
    pub lim3: f64,
}

impl DomainLimits {
    pub fn new(ecu: f64, es: f64, fyd: f64) -> Self {
        let eyd = yield_strain(fyd, es);
        DomainLimits {
            lim2: ecu / (STEEL_STRAIN_LIMIT + eyd),
            lim3a: if ecu > 0.0035 { 0.35 } else { 0.45 },
            lim3: ecu / (ecu + eyd),
        }
    }
}

/// Classify a neutral-axis depth into its deformation domain.
///
/// A NaN depth fails every comparison and lands in domain 5; callers that
/// can produce NaN check for it before trusting the domain.
pub fn classify_domain(input: &DomainInput) -> Domain {
    let limits = DomainLimits::new(input.ecu, input.es, input.fyd);
    let xd = input.x / input.d;

    if xd <= 0.0 {
        Domain::One
    } else if xd <= limits.lim2 {
        Domain::Two
    } else if xd <= limits.lim3a {
        Domain::ThreeA
    } else if xd <= limits.lim3 {
        Domain::ThreeB
    } else if input.x <= input.h {
        Domain::Four
    } else {
        Domain::Five
    }
}
