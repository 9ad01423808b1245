//! # Combined Bending and Axial Force (ULS)
//!
//! Closed-form equilibrium solutions for a rectangular section under a design
//! moment `Msd` and axial force `Nsd`, using the rectangular stress block of
//! NBR 6118 Section 17.2.2.
//!
//! ## Notation
//!
//! - `b`, `h` = Section width and height (cm)
//! - `d` = Effective depth of the bottom steel (cm), `d = h − d'_bottom`
//! - `d'_bottom`, `d'_top` = Face-to-centroid distances of the bars (cm)
//! - `x` = Neutral-axis depth from the top face (cm)
//! - `Msd` = Design moment (kN·cm), `Nsd` = design axial force (kN, + compression)
//! - `fcd`, `fyd`, `Es` = Design strengths and steel modulus (kN/cm²)
//!
//! Results are raw equilibrium values: a negative area means the bars of that
//! face are not needed in the assumed regime. Choosing the regime is the job
//! of [`crate::calculations::uls`].
//!
//! ## References
//!
//! - NBR 6118:2014 Sections 17.2.2 and 17.2.4
//! - Fusco, *Técnica de Armar as Estruturas de Concreto*, Ch. 5

use crate::calculations::domain::{Domain, STEEL_STRAIN_LIMIT};
use crate::materials::steel::stress_from_strain;
use crate::materials::DesignParameters;

/// Strain of the fully compressed section (and of its bars) in the small
/// eccentricity double-reinforcement trial
pub const UNIFORM_COMPRESSION_STRAIN: f64 = 0.002;

/// Rectangular stress block of the compressed concrete.
///
/// ```text
///   ┌───────────────┐ ─┬─
///   │▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓│  │ λ·x   stress = αc·fcd
///   │───────────────│ ─┴─
///   │               │
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StressBlock {
    /// Intensity factor αc
    pub alfac: f64,
    /// Depth factor λ
    pub lambda: f64,
    /// Design compressive strength (kN/cm²)
    pub fcd: f64,
}

impl StressBlock {
    /// Block of a concrete class at design strength `fcd` (kN/cm²)
    pub fn new(params: &DesignParameters, fcd: f64) -> Self {
        StressBlock {
            alfac: params.alfac,
            lambda: params.lambda,
            fcd,
        }
    }

    /// Block stress αc·fcd
    #[inline]
    pub fn stress(&self) -> f64 {
        self.alfac * self.fcd
    }

    /// Resultant of a block of width `b` over neutral-axis depth `x`
    #[inline]
    pub fn resultant(&self, b: f64, x: f64) -> f64 {
        self.stress() * b * self.lambda * x
    }
}

/// Raw steel areas from an equilibrium solution (cm², may be negative)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteelAreas {
    /// Bottom-face area As
    pub bottom: f64,
    /// Top-face area A's
    pub top: f64,
}

/// Moment of the design forces about the bottom bars:
/// `Msd + Nsd·(h/2 − d'_bottom)`
#[inline]
pub fn moment_about_bottom_steel(msd: f64, nsd: f64, h: f64, d_bottom: f64) -> f64 {
    msd + nsd * (h / 2.0 - d_bottom)
}

// =============================================================================
// SMALL ECCENTRICITY
// =============================================================================

/// Both faces reinforced, whole section compressed at 2‰.
///
/// # Formula
/// ```text
/// Rcd = αc·fcd·b·h
/// R's = (Msd + (Nsd − Rcd)(h/2 − d'_bottom)) / (h − d'_bottom − d'_top)
/// Rs  = Nsd − Rcd − R's
/// A's = R's / (Es·0.002),   As = Rs / (Es·0.002)
/// ```
#[allow(clippy::too_many_arguments)]
pub fn small_eccentricity_double(
    msd: f64,
    nsd: f64,
    b: f64,
    h: f64,
    d_bottom: f64,
    d_top: f64,
    block: &StressBlock,
    es: f64,
) -> SteelAreas {
    let rcd = block.stress() * h * b;
    let sigma = es * UNIFORM_COMPRESSION_STRAIN;
    let r_top = (msd + (nsd - rcd) * (h / 2.0 - d_bottom)) / (h - d_bottom - d_top);
    let r_bottom = nsd - rcd - r_top;

    SteelAreas {
        bottom: r_bottom / sigma,
        top: r_top / sigma,
    }
}

/// Neutral-axis depth with only the top bars, from moment equilibrium about them.
///
/// # Formula
/// ```text
/// x = (d'/λ)·(1 + √(1 − (Msd − Nsd(h/2 − d')) / (0.5·αc·b·d'²·fcd)))
/// ```
///
/// A negative radicand yields NaN, which the caller treats as infeasible.
pub fn small_eccentricity_neutral_axis(
    msd: f64,
    nsd: f64,
    b: f64,
    h: f64,
    d_top: f64,
    block: &StressBlock,
) -> f64 {
    let reference = 0.5 * block.stress() * b * d_top.powi(2);
    let ratio = (msd - nsd * (h / 2.0 - d_top)) / reference;
    (d_top / block.lambda) * (1.0 + (1.0 - ratio).sqrt())
}

/// Strain of the top bars for a compressed section, by strain domain.
///
/// - Domains 1 and 2 pivot on the 10‰ steel strain at `d`
/// - Domains 3 and 4 pivot on `εcu` at the top face
/// - Domain 5 pivots on `εc2` at the point `h·(εcu − εc2)/εcu` from the top
pub fn top_steel_strain(
    x: f64,
    d: f64,
    h: f64,
    d_top: f64,
    domain: Domain,
    params: &DesignParameters,
) -> f64 {
    match domain {
        Domain::One | Domain::Two => (x - d_top) / (d - x) * STEEL_STRAIN_LIMIT,
        Domain::ThreeA | Domain::ThreeB | Domain::Four => (x - d_top) / x * params.ecu,
        Domain::Five => {
            let pivot = h * (params.ecu - params.ec2) / params.ecu;
            (x - d_top) / (x - pivot) * params.ec2
        }
    }
}

/// Top-bar area from force equilibrium: `A's = (Nsd − Rcd) / σ's`
pub fn small_eccentricity_top_area(nsd: f64, b: f64, x: f64, block: &StressBlock, sigma_top: f64) -> f64 {
    (nsd - block.resultant(b, x)) / sigma_top
}

/// Eccentric tension: both faces in tension, no concrete block.
///
/// # Formula
/// ```text
/// R's = (−Msd − Nsd(h/2 − d'_bottom)) / (h − d'_bottom − d'_top)
/// Rs  = −Nsd − R's
/// ```
pub fn flexure_tension(msd: f64, nsd: f64, h: f64, d_bottom: f64, d_top: f64, fyd: f64) -> SteelAreas {
    let r_top = (-msd - nsd * (h / 2.0 - d_bottom)) / (h - d_bottom - d_top);
    let r_bottom = -nsd - r_top;

    SteelAreas {
        bottom: r_bottom / fyd,
        top: r_top / fyd,
    }
}

// =============================================================================
// LARGE ECCENTRICITY
// =============================================================================

/// Neutral-axis depth with only the bottom bars.
///
/// # Formula
/// ```text
/// Ms = Msd + Nsd(h/2 − d'_bottom)
/// x  = (d/λ)·(1 − √(1 − Ms / (0.5·αc·b·d²·fcd)))
/// ```
///
/// NaN when the moment exceeds what the concrete block can balance.
pub fn large_eccentricity_neutral_axis(moment_about_steel: f64, b: f64, d: f64, block: &StressBlock) -> f64 {
    let reference = 0.5 * block.stress() * b * d.powi(2);
    (d / block.lambda) * (1.0 - (1.0 - moment_about_steel / reference).sqrt())
}

/// Bottom-bar area with single reinforcement and yielded steel.
///
/// # Formula
/// `As = (Ms / (d − 0.5·λ·x) − Nsd) / fyd`
pub fn large_eccentricity_single_area(
    moment_about_steel: f64,
    nsd: f64,
    d: f64,
    x: f64,
    lambda: f64,
    fyd: f64,
) -> f64 {
    (moment_about_steel / (d - 0.5 * lambda * x) - nsd) / fyd
}

/// Moment carried by the concrete block about the bottom bars:
/// `M'sd = αc·fcd·b·λx·(d − 0.5·λx)`
pub fn concrete_block_moment(b: f64, d: f64, x: f64, block: &StressBlock) -> f64 {
    block.resultant(b, x) * (d - 0.5 * block.lambda * x)
}

/// Stress of the compressed top bars with εcu at the top face, capped at fyd
pub fn compression_steel_stress(x: f64, d_top: f64, ecu: f64, es: f64, fyd: f64) -> f64 {
    let strain = (x - d_top) / x * ecu;
    stress_from_strain(strain, es, fyd)
}

/// Top-bar area carrying the residual moment: `A's = ΔMsd / (σ's·(d − d'_top))`
pub fn double_top_area(delta_msd: f64, sigma_top: f64, d: f64, d_top: f64) -> f64 {
    delta_msd / (sigma_top * (d - d_top))
}

/// Bottom-bar area with double reinforcement.
///
/// # Formula
/// `As = (M'sd / (d − 0.5·λx) + ΔMsd / (d − d'_top) − Nsd) / fyd`
#[allow(clippy::too_many_arguments)]
pub fn double_bottom_area(
    block_moment: f64,
    delta_msd: f64,
    nsd: f64,
    d: f64,
    d_top: f64,
    x: f64,
    lambda: f64,
    fyd: f64,
) -> f64 {
    (block_moment / (d - 0.5 * lambda * x) + delta_msd / (d - d_top) - nsd) / fyd
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::resolve_design_parameters;

    const FCD: f64 = 2.5 / 1.4;
    const FYD: f64 = 50.0 / 1.15;
    const ES: f64 = 21_000.0;

    fn block() -> StressBlock {
        StressBlock::new(&resolve_design_parameters(25.0).unwrap(), FCD)
    }

    #[test]
    fn test_block_resultant() {
        // 0.85 * 1.786 * 14 * 0.8 * 10 = 170.0 kN
        assert!((block().resultant(14.0, 10.0) - 170.0).abs() < 0.01);
    }

    #[test]
    fn test_large_eccentricity_neutral_axis() {
        // 14x40 beam, d = 36, Msd = 1.4 * 2857 kN·cm
        let x = large_eccentricity_neutral_axis(3999.8, 14.0, 36.0, &block());
        assert!((x - 7.09).abs() < 0.01, "x = {}", x);
    }

    #[test]
    fn test_over_moment_is_nan() {
        let x = large_eccentricity_neutral_axis(1.0e6, 14.0, 36.0, &block());
        assert!(x.is_nan());
    }

    #[test]
    fn test_single_area() {
        let area = large_eccentricity_single_area(3999.8, 0.0, 36.0, 7.095, 0.8, FYD);
        assert!((area - 2.77).abs() < 0.01, "As = {}", area);
    }

    #[test]
    fn test_small_eccentricity_double_signs() {
        // Pure bending: both trial areas negative
        let areas = small_eccentricity_double(3999.8, 0.0, 14.0, 40.0, 4.0, 4.0, &block(), ES);
        assert!(areas.bottom < 0.0 && areas.top < 0.0);

        // Heavy compression: both positive
        let areas = small_eccentricity_double(1000.0, 2000.0, 20.0, 40.0, 4.0, 4.0, &block(), ES);
        assert!(areas.bottom > 0.0 && areas.top > 0.0, "{:?}", areas);
    }

    #[test]
    fn test_compression_steel_stress() {
        // x = 16.2, d' = 4: strain 2.64‰ > εyd, yielded
        assert_eq!(compression_steel_stress(16.2, 4.0, 0.0035, ES, FYD), FYD);
        // x = 8, d' = 4: strain 1.75‰, elastic
        let sigma = compression_steel_stress(8.0, 4.0, 0.0035, ES, FYD);
        assert!((sigma - 36.75).abs() < 1e-9);
    }

    #[test]
    fn test_top_steel_strain_domain_5_pivot() {
        let params = resolve_design_parameters(25.0).unwrap();
        // For C50 and below the pivot sits at 3h/7
        let strain = top_steel_strain(70.0, 45.0, 50.0, 5.0, Domain::Five, &params);
        let expected = (70.0 - 5.0) / (70.0 - 3.0 / 7.0 * 50.0) * 0.002;
        assert!((strain - expected).abs() < 1e-12);
    }

    #[test]
    fn test_flexure_tension_pure_tension() {
        // Centred tension of 100 kN splits evenly between symmetric faces
        let areas = flexure_tension(0.0, -100.0, 40.0, 4.0, 4.0, FYD);
        assert!((areas.bottom - areas.top).abs() < 1e-9);
        assert!((areas.bottom + areas.top - 100.0 / FYD).abs() < 1e-9);
    }
}
