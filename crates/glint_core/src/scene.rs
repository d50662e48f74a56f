//! Scene description types for Glint.
//!
//! A scene is an ordered list of primitives, each a piece of geometry plus
//! a [`Material`]. These types are renderer-agnostic; the renderer builds
//! its own intersectable primitives from them.

use glint_math::Vec3;
use serde::{Deserialize, Serialize};

use crate::loader::{SceneError, SceneResult};
use crate::material::{Color, Material};

/// Primitive geometry.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Geometry {
    /// Sphere given by center and radius
    Sphere { center: Vec3, radius: f32 },

    /// Axis-aligned box given by its min and max corners
    #[serde(rename = "box")]
    Cuboid { min: Vec3, max: Vec3 },
}

impl Geometry {
    fn validate(&self) -> Result<(), String> {
        match *self {
            Geometry::Sphere { center, radius } => {
                if !center.is_finite() {
                    return Err(format!("sphere center {center} is not finite"));
                }
                if !radius.is_finite() || radius <= 0.0 {
                    return Err(format!("sphere radius {radius} must be positive"));
                }
            }
            Geometry::Cuboid { min, max } => {
                if !min.is_finite() || !max.is_finite() {
                    return Err("box corners must be finite".to_string());
                }
                if !min.cmplt(max).all() {
                    return Err(format!("box min {min} must be below max {max} on every axis"));
                }
            }
        }
        Ok(())
    }
}

/// A primitive in the scene description: geometry plus material.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PrimitiveDesc {
    #[serde(flatten)]
    pub geometry: Geometry,

    #[serde(flatten)]
    pub material: Material,
}

impl PrimitiveDesc {
    /// Create a sphere primitive.
    pub fn sphere(center: Vec3, radius: f32, material: Material) -> Self {
        Self {
            geometry: Geometry::Sphere { center, radius },
            material,
        }
    }

    /// Create a box primitive from two opposite corners.
    ///
    /// The corners may be given in any order; they are sorted per axis.
    pub fn cuboid(a: Vec3, b: Vec3, material: Material) -> Self {
        Self {
            geometry: Geometry::Cuboid {
                min: a.min(b),
                max: a.max(b),
            },
            material,
        }
    }

    /// Check if this primitive is a light source.
    pub fn is_light(&self) -> bool {
        self.material.is_light()
    }

    fn validate(&self) -> Result<(), String> {
        self.geometry.validate()?;

        let m = &self.material;
        if !(0.0..=1.0).contains(&m.reflection) {
            return Err(format!("reflection {} outside [0, 1]", m.reflection));
        }
        if !(0.0..=1.0).contains(&m.transparency) {
            return Err(format!("transparency {} outside [0, 1]", m.transparency));
        }
        if m.emission_color.min_element() < 0.0 {
            return Err(format!("emission color {} is negative", m.emission_color));
        }
        Ok(())
    }
}

/// An ordered list of primitives.
///
/// Order only matters as a tie-break between equally near hits.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneDesc {
    pub primitives: Vec<PrimitiveDesc>,
}

impl SceneDesc {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a primitive to the end of the scene.
    pub fn push(&mut self, primitive: PrimitiveDesc) {
        self.primitives.push(primitive);
    }

    /// Builder-style variant of [`SceneDesc::push`].
    pub fn with(mut self, primitive: PrimitiveDesc) -> Self {
        self.push(primitive);
        self
    }

    /// Number of primitives.
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Check if the scene has no primitives.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Number of light-emitting primitives.
    pub fn light_count(&self) -> usize {
        self.primitives.iter().filter(|p| p.is_light()).count()
    }

    /// Check every primitive for geometry and material ranges.
    pub fn validate(&self) -> SceneResult<()> {
        for (index, primitive) in self.primitives.iter().enumerate() {
            primitive
                .validate()
                .map_err(|reason| SceneError::InvalidPrimitive { index, reason })?;
        }
        Ok(())
    }

    /// The five-sphere scene with a single spherical light.
    pub fn reference_spheres() -> Self {
        Self::new()
            // Ground
            .with(PrimitiveDesc::sphere(
                Vec3::new(1.0, -10004.0, -20.0),
                10000.0,
                Material::new(Color::new(0.20, 0.20, 0.20), 0.0, 0.0),
            ))
            .with(PrimitiveDesc::sphere(
                Vec3::new(0.0, 0.0, -20.0),
                4.0,
                Material::new(Color::new(1.00, 0.32, 0.36), 1.0, 0.5),
            ))
            .with(PrimitiveDesc::sphere(
                Vec3::new(5.0, -1.0, -15.0),
                2.0,
                Material::new(Color::new(0.90, 0.76, 0.46), 1.0, 0.0),
            ))
            .with(PrimitiveDesc::sphere(
                Vec3::new(5.0, 0.0, -25.0),
                3.0,
                Material::new(Color::new(0.65, 0.77, 0.97), 1.0, 0.0),
            ))
            .with(PrimitiveDesc::sphere(
                Vec3::new(-5.5, 0.0, -15.0),
                3.0,
                Material::new(Color::new(0.90, 0.90, 0.90), 1.0, 0.0),
            ))
            // Light
            .with(PrimitiveDesc::sphere(
                Vec3::new(0.0, 20.0, -30.0),
                3.0,
                Material::diffuse(Color::ZERO).with_emission(Color::splat(3.0)),
            ))
    }

    /// A box light above a reflective green box.
    pub fn reference_boxes() -> Self {
        Self::new()
            .with(PrimitiveDesc::cuboid(
                Vec3::new(0.0, 20.0, -10.0),
                Vec3::new(20.0, 10.0, -5.0),
                Material::diffuse(Color::splat(0.2)).with_emission(Color::splat(3.0)),
            ))
            .with(PrimitiveDesc::cuboid(
                Vec3::new(-5.0, -5.0, -100.0),
                Vec3::new(5.0, 5.0, -50.0),
                Material::new(Color::new(0.0, 1.0, 0.0), 1.0, 0.0),
            ))
    }

    /// Spheres and boxes together in one scene.
    pub fn reference_mixed() -> Self {
        let mut scene = Self::reference_spheres();
        scene
            .primitives
            .extend(Self::reference_boxes().primitives);
        scene
    }
}
