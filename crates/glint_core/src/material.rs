//! Surface material shared by every primitive.

use glint_math::Vec3;
use serde::{Deserialize, Serialize};

/// Color type alias (RGB, linear)
pub type Color = Vec3;

/// The Lambertian + Fresnel-mix material every primitive carries.
///
/// `reflection` only gates the reflective branch; the Fresnel term computed
/// while shading decides how much reflected light is actually used.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Albedo (RGB, 0-1)
    pub surface_color: Color,

    /// Self illumination (RGB, >= 0). A positive red channel makes a light.
    #[serde(default)]
    pub emission_color: Color,

    /// Reflectivity gate (0-1)
    #[serde(default)]
    pub reflection: f32,

    /// Transparency (0=opaque, 1=fully transparent)
    #[serde(default)]
    pub transparency: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            surface_color: Color::splat(0.5), // Grey default
            emission_color: Color::ZERO,
            reflection: 0.0,
            transparency: 0.0,
        }
    }
}

impl Material {
    /// Create an opaque, non-emissive material.
    pub fn diffuse(surface_color: Color) -> Self {
        Self {
            surface_color,
            ..Default::default()
        }
    }

    /// Create a material with reflectivity and transparency.
    pub fn new(surface_color: Color, reflection: f32, transparency: f32) -> Self {
        Self {
            surface_color,
            reflection,
            transparency,
            ..Default::default()
        }
    }

    /// Set the emission color.
    pub fn with_emission(mut self, emission_color: Color) -> Self {
        self.emission_color = emission_color;
        self
    }

    /// Check if this material acts as a light source.
    #[inline]
    pub fn is_light(&self) -> bool {
        self.emission_color.x > 0.0
    }

    /// Check if this material spawns reflection/refraction rays.
    #[inline]
    pub fn is_specular(&self) -> bool {
        self.transparency > 0.0 || self.reflection > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_uses_red_channel() {
        let light = Material::diffuse(Color::ZERO).with_emission(Color::splat(3.0));
        assert!(light.is_light());

        // Only the x component marks a light
        let blue_glow = Material::diffuse(Color::ZERO).with_emission(Color::new(0.0, 0.0, 1.0));
        assert!(!blue_glow.is_light());
    }

    #[test]
    fn test_specular_gate() {
        assert!(!Material::diffuse(Color::ONE).is_specular());
        assert!(Material::new(Color::ONE, 1.0, 0.0).is_specular());
        assert!(Material::new(Color::ONE, 0.0, 0.5).is_specular());
    }

    #[test]
    fn test_defaults_when_fields_missing() {
        let material: Material =
            serde_json::from_str(r#"{ "surface_color": [0.2, 0.4, 0.6] }"#).unwrap();

        assert_eq!(material.surface_color, Color::new(0.2, 0.4, 0.6));
        assert_eq!(material.emission_color, Color::ZERO);
        assert_eq!(material.reflection, 0.0);
        assert_eq!(material.transparency, 0.0);
    }
}
