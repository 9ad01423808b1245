//! # Reinforcement Arrangements
//!
//! Layered longitudinal bars on the bottom and top faces of a section, the
//! stirrup that wraps them, and the effective-depth resolver that turns an
//! arrangement into the distance d' from the extreme fiber to the bar centroid.
//!
//! ## Layer Numbering
//!
//! Layers are listed from the outermost (closest to the face) inwards. The
//! first layer sits at `cover + stirrup + φ/2`; each following layer is
//! `layer_spacing` further in.
//!
//! ```text
//!   │  ●   ●   ●  │  ← layer 2 at d₁ + spacing
//!   │  ●   ●   ●  │  ← layer 1 at d₁ = cover + φt + φ/2
//!   └─────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use rc_core::reinforcement::{Reinforcement, ReinforcementArrangement, ReinforcementLayer};
//!
//! let reinforcement = Reinforcement {
//!     bottom: ReinforcementArrangement::new(5.0)
//!         .with_layer(ReinforcementLayer::new(10.0, 5))
//!         .with_layer(ReinforcementLayer::new(10.0, 5)),
//!     top: ReinforcementArrangement::new(5.0).with_layer(ReinforcementLayer::new(10.0, 10)),
//!     stirrup: Some(5.0),
//! };
//!
//! let depths = reinforcement.effective_depths(4.0);
//! assert!((depths.bottom - 7.5).abs() < 1e-9);
//! assert!((depths.top - 5.0).abs() < 1e-9);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::equations::section::area_of_bar;
use crate::units::{Centimeters, Millimeters};

/// One row of bars with the same diameter.
///
/// Either field absent or zero means the layer holds no bars.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ReinforcementLayer {
    /// Bar diameter (mm)
    #[serde(default)]
    pub diameter: Option<f64>,

    /// Number of bars
    #[serde(default)]
    pub count: Option<u32>,
}

impl ReinforcementLayer {
    pub fn new(diameter_mm: f64, count: u32) -> Self {
        ReinforcementLayer {
            diameter: Some(diameter_mm),
            count: Some(count),
        }
    }

    /// `(diameter, count)` when the layer actually holds bars
    pub fn bars(&self) -> Option<(f64, u32)> {
        match (self.diameter, self.count) {
            (Some(diameter), Some(count)) if diameter > 0.0 && count > 0 => Some((diameter, count)),
            _ => None,
        }
    }

    pub fn is_populated(&self) -> bool {
        self.bars().is_some()
    }

    /// Total steel area of the layer (cm²)
    pub fn area(&self) -> f64 {
        self.bars()
            .map(|(diameter, count)| f64::from(count) * area_of_bar(diameter))
            .unwrap_or(0.0)
    }
}

impl fmt::Display for ReinforcementLayer {
    /// Bar callout such as `5Φ20` or `6Φ20,1`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.bars() {
            Some((diameter, count)) => {
                let diameter = diameter.to_string().replace('.', ",");
                write!(f, "{}Φ{}", count, diameter)
            }
            None => write!(f, "-"),
        }
    }
}

/// Where a layer sits within its arrangement.
///
/// Drives the vertical extent of the concrete tributary to the bars in the
/// crack-width check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayerPosition {
    /// The only layer of the face
    #[serde(rename = "unica")]
    Single,
    /// Outermost of several layers
    #[serde(rename = "inferior")]
    Outer,
    /// Between the outermost and innermost layers
    #[serde(rename = "meio")]
    Middle,
    /// Innermost of several layers
    #[serde(rename = "superior")]
    Inner,
}

impl LayerPosition {
    /// Position of layer `index` among `total` populated layers
    pub fn of(index: usize, total: usize) -> Self {
        if total <= 1 {
            LayerPosition::Single
        } else if index == 0 {
            LayerPosition::Outer
        } else if index + 1 == total {
            LayerPosition::Inner
        } else {
            LayerPosition::Middle
        }
    }
}

/// The bar layers of one face.
///
/// ## JSON Example
///
/// ```json
/// {
///   "layer_spacing": 4.0,
///   "layers": [
///     { "diameter": 20.0, "count": 5 },
///     { "diameter": 10.0, "count": 3 }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReinforcementArrangement {
    /// Distance between consecutive layer centroids (cm)
    #[serde(default)]
    pub layer_spacing: f64,

    /// Layers from the face inwards
    #[serde(default)]
    pub layers: Vec<ReinforcementLayer>,
}

impl ReinforcementArrangement {
    /// Empty arrangement with the given layer spacing (cm)
    pub fn new(layer_spacing: f64) -> Self {
        ReinforcementArrangement {
            layer_spacing,
            layers: Vec::new(),
        }
    }

    /// Append a layer (builder style)
    pub fn with_layer(mut self, layer: ReinforcementLayer) -> Self {
        self.layers.push(layer);
        self
    }

    /// Total steel area of the face (cm²)
    pub fn area(&self) -> f64 {
        self.layers.iter().map(ReinforcementLayer::area).sum()
    }

    /// Layers that hold bars, in order
    pub fn populated_layers(&self) -> impl Iterator<Item = &ReinforcementLayer> {
        self.layers.iter().filter(|layer| layer.is_populated())
    }

    /// Distance from the face to the area-weighted centroid of the bars (cm).
    ///
    /// The first layer's centroid is at `cover + stirrup + φ/2`, each later
    /// layer one `layer_spacing` further in. Empty layers are skipped but
    /// still occupy their slot. With no bars at all the depth falls back to
    /// `cover + stirrup`.
    pub fn effective_depth(&self, cover: f64, stirrup_mm: Option<f64>) -> f64 {
        let stirrup_cm = Centimeters::from(Millimeters(stirrup_mm.unwrap_or(0.0))).value();
        let base = cover + stirrup_cm;

        let first_radius = match self.populated_layers().next().and_then(ReinforcementLayer::bars) {
            Some((diameter, _)) => Centimeters::from(Millimeters(diameter)).value() / 2.0,
            None => 0.0,
        };

        let mut weighted_depth = 0.0;
        let mut total_area = 0.0;
        for (i, layer) in self.layers.iter().enumerate() {
            let area = layer.area();
            if area <= 0.0 {
                continue;
            }
            let depth = base + first_radius + i as f64 * self.layer_spacing;
            weighted_depth += depth * area;
            total_area += area;
        }

        if total_area > 0.0 {
            weighted_depth / total_area
        } else {
            base
        }
    }
}

impl fmt::Display for ReinforcementArrangement {
    /// Summary such as `-`, `5Φ20`, `2 camadas: 5Φ20` or `5Φ20 | 3Φ10`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let layers: Vec<&ReinforcementLayer> = self.populated_layers().collect();
        match layers.as_slice() {
            [] => write!(f, "-"),
            [single] => write!(f, "{}", single),
            [first, rest @ ..] if rest.iter().all(|layer| layer == first) => {
                write!(f, "{} camadas: {}", layers.len(), first)
            }
            _ => {
                let parts: Vec<String> = layers.iter().map(|layer| layer.to_string()).collect();
                write!(f, "{}", parts.join(" | "))
            }
        }
    }
}

/// Effective depths d' of both faces (cm)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectiveDepths {
    pub bottom: f64,
    pub top: f64,
}

/// All longitudinal reinforcement of a section.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Reinforcement {
    /// Bottom-face bars (tension under positive moment)
    #[serde(default)]
    pub bottom: ReinforcementArrangement,

    /// Top-face bars
    #[serde(default)]
    pub top: ReinforcementArrangement,

    /// Stirrup diameter (mm)
    #[serde(default)]
    pub stirrup: Option<f64>,
}

impl Reinforcement {
    /// Resolve d' for both faces.
    pub fn effective_depths(&self, cover: f64) -> EffectiveDepths {
        EffectiveDepths {
            bottom: self.bottom.effective_depth(cover, self.stirrup),
            top: self.top.effective_depth(cover, self.stirrup),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_area() {
        assert_eq!(ReinforcementLayer::default().area(), 0.0);
        assert_eq!(ReinforcementLayer::new(0.0, 0).area(), 0.0);
        assert!((ReinforcementLayer::new(10.0, 1).area() - 0.785).abs() < 0.001);
        assert!((ReinforcementLayer::new(10.0, 4).area() - 3.142).abs() < 0.001);
        assert!((ReinforcementLayer::new(32.0, 5).area() - 40.212).abs() < 0.001);
    }

    #[test]
    fn test_layer_missing_count() {
        let layer = ReinforcementLayer {
            diameter: Some(16.0),
            count: None,
        };
        assert!(!layer.is_populated());
        assert_eq!(layer.area(), 0.0);
    }

    #[test]
    fn test_layer_description() {
        assert_eq!(ReinforcementLayer::new(20.0, 5).to_string(), "5Φ20");
        assert_eq!(ReinforcementLayer::new(20.1, 6).to_string(), "6Φ20,1");
    }

    #[test]
    fn test_arrangement_description() {
        let empty = ReinforcementArrangement::new(5.0);
        let one = ReinforcementArrangement::new(4.0).with_layer(ReinforcementLayer::new(20.0, 5));
        let two_equal = one.clone().with_layer(ReinforcementLayer::new(20.0, 5));
        let mixed = one.clone().with_layer(ReinforcementLayer::new(10.0, 3));

        assert_eq!(empty.to_string(), "-");
        assert_eq!(one.to_string(), "5Φ20");
        assert_eq!(two_equal.to_string(), "2 camadas: 5Φ20");
        assert_eq!(mixed.to_string(), "5Φ20 | 3Φ10");
    }

    #[test]
    fn test_effective_depth_without_bars() {
        let empty = ReinforcementArrangement::new(5.0);
        assert_eq!(empty.effective_depth(4.0, None), 4.0);

        let reinforcement = Reinforcement::default();
        let depths = reinforcement.effective_depths(4.0);
        assert_eq!(depths.bottom, 4.0);
        assert_eq!(depths.top, 4.0);
    }

    #[test]
    fn test_effective_depth_two_equal_layers() {
        let reinforcement = Reinforcement {
            bottom: ReinforcementArrangement::new(5.0)
                .with_layer(ReinforcementLayer::new(10.0, 5))
                .with_layer(ReinforcementLayer::new(10.0, 5)),
            top: ReinforcementArrangement::new(5.0).with_layer(ReinforcementLayer::new(10.0, 10)),
            stirrup: Some(5.0),
        };
        let depths = reinforcement.effective_depths(4.0);
        // Layers at 5.0 and 10.0 with equal area
        assert!((depths.bottom - 7.5).abs() < 1e-9, "d' = {}", depths.bottom);
        assert!((depths.top - 5.0).abs() < 1e-9, "d' = {}", depths.top);
    }

    #[test]
    fn test_effective_depth_weighted_by_area() {
        let reinforcement = Reinforcement {
            bottom: ReinforcementArrangement::new(5.0)
                .with_layer(ReinforcementLayer::new(10.0, 5))
                .with_layer(ReinforcementLayer::new(10.0, 10)),
            top: ReinforcementArrangement::default(),
            stirrup: Some(5.0),
        };
        let depths = reinforcement.effective_depths(4.0);
        // (5·1 + 10·2) / 3 = 8.33
        assert!((depths.bottom - 8.333).abs() < 0.001, "d' = {}", depths.bottom);
        // Empty face falls back to cover + stirrup
        assert!((depths.top - 4.5).abs() < 1e-9);
    }

    #[test]
    fn test_empty_layer_keeps_its_slot() {
        let arrangement = ReinforcementArrangement::new(5.0)
            .with_layer(ReinforcementLayer::new(10.0, 4))
            .with_layer(ReinforcementLayer::default())
            .with_layer(ReinforcementLayer::new(10.0, 4));
        // Layers at 4.5 and 14.5
        assert!((arrangement.effective_depth(4.0, None) - 9.5).abs() < 1e-9);
    }

    #[test]
    fn test_layer_positions() {
        assert_eq!(LayerPosition::of(0, 1), LayerPosition::Single);
        assert_eq!(LayerPosition::of(0, 3), LayerPosition::Outer);
        assert_eq!(LayerPosition::of(1, 3), LayerPosition::Middle);
        assert_eq!(LayerPosition::of(2, 3), LayerPosition::Inner);
    }

    #[test]
    fn test_json_with_missing_fields() {
        let json = r#"{ "bottom": { "layer_spacing": 4.0, "layers": [{ "diameter": 16.0, "count": 5 }, {}] } }"#;
        let r: Reinforcement = serde_json::from_str(json).unwrap();
        assert_eq!(r.bottom.populated_layers().count(), 1);
        assert!(r.top.layers.is_empty());
        assert_eq!(r.stirrup, None);
    }
}
