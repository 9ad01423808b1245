//! # Cross Sections
//!
//! A [`Section`] bundles the geometry, materials and forces of one
//! reinforced-concrete cross section. It is built by the caller for each
//! design call and never stored by the engine.
//!
//! ## Geometry
//!
//! ```text
//!        b
//!   ┌─────────┐  ← top face (compression under positive moment)
//!   │  ○   ○  │  ← top bars, centroid at d'_top
//!   │         │
//! h │         │
//!   │  ●●●●●  │  ← bottom bars, centroid at d'_bottom
//!   └─────────┘  ← bottom face
//! ```
//!
//! Only rectangles can be designed. Polygons are accepted as data (so a
//! project file holding one still deserializes) but every solver rejects them
//! with [`CalcError::NotImplemented`].
//!
//! ## Example
//!
//! ```rust
//! use rc_core::section::{Section, SectionGeometry};
//! use rc_core::materials::MaterialProperties;
//! use rc_core::loads::Loads;
//!
//! let section = Section::new(
//!     SectionGeometry::rectangle(14.0, 40.0),
//!     MaterialProperties::default(),
//!     Loads::new(28.57, 0.0),
//! );
//! assert!(section.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::loads::Loads;
use crate::materials::MaterialProperties;

/// A point of a polygonal outline (cm)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

/// Shape of the concrete cross section.
///
/// ## JSON Example
///
/// ```json
/// { "type": "rectangle", "width": 20.0, "height": 50.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SectionGeometry {
    /// Rectangular section, dimensions in cm
    Rectangle { width: f64, height: f64 },
    /// Arbitrary polygon, vertices in cm (not supported by the solvers)
    Polygon { points: Vec<Point2> },
}

impl SectionGeometry {
    /// Create a rectangular geometry
    pub fn rectangle(width: f64, height: f64) -> Self {
        SectionGeometry::Rectangle { width, height }
    }

    /// Geometry kind as a string
    pub fn kind(&self) -> &'static str {
        match self {
            SectionGeometry::Rectangle { .. } => "rectangle",
            SectionGeometry::Polygon { .. } => "polygon",
        }
    }

    /// `(width, height)` of a rectangle, or `NotImplemented` for any other shape.
    pub fn rectangle_dimensions(&self) -> CalcResult<(f64, f64)> {
        match self {
            SectionGeometry::Rectangle { width, height } => Ok((*width, *height)),
            other => Err(CalcError::not_implemented(format!(
                "section geometry '{}'",
                other.kind()
            ))),
        }
    }
}

/// One cross section: geometry, materials and characteristic forces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Concrete outline
    pub geometry: SectionGeometry,

    /// Concrete, steel and cover
    pub material: MaterialProperties,

    /// Characteristic forces and load factor
    pub loads: Loads,
}

impl Section {
    pub fn new(geometry: SectionGeometry, material: MaterialProperties, loads: Loads) -> Self {
        Section {
            geometry,
            material,
            loads,
        }
    }

    /// Validate geometry, material and loads.
    ///
    /// Polygons pass validation here; solvers reject them separately so the
    /// caller gets `NotImplemented` rather than a validation error.
    pub fn validate(&self) -> CalcResult<()> {
        if let SectionGeometry::Rectangle { width, height } = self.geometry {
            if !width.is_finite() || width <= 0.0 {
                return Err(CalcError::invalid_input(
                    "width",
                    width.to_string(),
                    "Width must be positive",
                ));
            }
            if !height.is_finite() || height <= 0.0 {
                return Err(CalcError::invalid_input(
                    "height",
                    height.to_string(),
                    "Height must be positive",
                ));
            }
        }
        self.material.validate()?;
        self.loads.validate()
    }

    /// Minimum flexural steel area As,min = ρmin · b · h (cm²).
    pub fn minimum_steel_area(&self) -> CalcResult<f64> {
        let (b, h) = self.geometry.rectangle_dimensions()?;
        let ratio = crate::materials::concrete::minimum_reinforcement_ratio(self.material.fck)?;
        Ok(crate::equations::section::rectangular_area(b, h) * ratio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_section() -> Section {
        Section::new(
            SectionGeometry::rectangle(20.0, 50.0),
            MaterialProperties::default(),
            Loads::new(100.0, 0.0),
        )
    }

    #[test]
    fn test_rectangle_dimensions() {
        let (b, h) = test_section().geometry.rectangle_dimensions().unwrap();
        assert_eq!((b, h), (20.0, 50.0));
    }

    #[test]
    fn test_polygon_not_implemented() {
        let geometry = SectionGeometry::Polygon {
            points: vec![
                Point2 { x: 0.0, y: 0.0 },
                Point2 { x: 20.0, y: 0.0 },
                Point2 { x: 10.0, y: 30.0 },
            ],
        };
        let err = geometry.rectangle_dimensions().unwrap_err();
        assert_eq!(err.error_code(), "NOT_IMPLEMENTED");
    }

    #[test]
    fn test_invalid_dimensions() {
        let mut section = test_section();
        section.geometry = SectionGeometry::rectangle(0.0, 50.0);
        assert!(section.validate().is_err());
    }

    #[test]
    fn test_minimum_steel_area() {
        // 20 x 50 x 0.15% = 1.5 cm²
        let as_min = test_section().minimum_steel_area().unwrap();
        assert!((as_min - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_geometry_json_tag() {
        let json = serde_json::to_string(&SectionGeometry::rectangle(20.0, 50.0)).unwrap();
        assert!(json.contains("\"type\":\"rectangle\""));
        let back: SectionGeometry =
            serde_json::from_str(r#"{ "type": "polygon", "points": [{ "x": 0.0, "y": 0.0 }] }"#).unwrap();
        assert_eq!(back.kind(), "polygon");
    }
}
