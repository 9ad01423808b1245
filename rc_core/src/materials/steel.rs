//! Reinforcing Steel (NBR 7480)
//!
//! Elastic-perfectly-plastic stress-strain law for passive reinforcement.
//! All stresses here are in kN/cm² to match the solvers.

/// Design yield strain εyd = fyd / Es.
///
/// Both arguments in the same stress unit.
#[inline]
pub fn yield_strain(fyd: f64, es: f64) -> f64 {
    fyd / es
}

/// Steel stress for a given strain, capped at the design yield stress.
///
/// Below εyd the bar is elastic (σ = Es·ε); at or above it the bar has
/// yielded and carries fyd.
#[inline]
pub fn stress_from_strain(strain: f64, es: f64, fyd: f64) -> f64 {
    if strain < yield_strain(fyd, es) {
        es * strain
    } else {
        fyd
    }
}
