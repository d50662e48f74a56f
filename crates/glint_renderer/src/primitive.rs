//! Scene primitive: a shape plus its material.

use glint_core::{Material, PrimitiveDesc};

use crate::Shape;

/// A renderable primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primitive {
    pub shape: Shape,
    pub material: Material,
}

impl Primitive {
    /// Create a new primitive.
    pub fn new(shape: Shape, material: Material) -> Self {
        Self { shape, material }
    }

    /// Check if this primitive is a light source.
    #[inline]
    pub fn is_light(&self) -> bool {
        self.material.is_light()
    }
}

impl From<&PrimitiveDesc> for Primitive {
    fn from(desc: &PrimitiveDesc) -> Self {
        Self::new(desc.geometry.into(), desc.material)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::Color;
    use glint_math::Vec3;

    #[test]
    fn test_from_desc() {
        let desc = PrimitiveDesc::cuboid(
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(-1.0, -1.0, -1.0),
            Material::diffuse(Color::ONE).with_emission(Color::splat(2.0)),
        );
        let primitive = Primitive::from(&desc);

        assert_eq!(
            primitive.shape,
            Shape::cuboid(Vec3::splat(-1.0), Vec3::splat(1.0))
        );
        assert!(primitive.is_light());
    }
}
