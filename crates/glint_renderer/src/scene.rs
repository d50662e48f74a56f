//! Read-only scene and nearest-hit query.
//!
//! Intersection is a linear scan over every primitive.

use glint_core::SceneDesc;
use glint_math::{Ray, Vec3};

use crate::Primitive;

/// Record of the nearest intersection along a ray.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    /// The primitive that was hit
    pub primitive: &'a Primitive,
    /// Index of the primitive in the scene
    pub index: usize,
    /// Ray parameter of the visible intersection
    pub t: f32,
}

/// An ordered list of primitives.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    primitives: Vec<Primitive>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a primitive to the scene.
    pub fn add(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    /// All primitives, in insertion order.
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Get the number of primitives.
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Check if the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Iterate over light sources with their indices.
    pub fn lights(&self) -> impl Iterator<Item = (usize, &Primitive)> {
        self.primitives
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_light())
    }

    /// Find the nearest primitive along the ray.
    ///
    /// Uses the entry distance `t0`, or the exit distance `t1` when the
    /// origin is inside the primitive. Hits with both behind the origin are
    /// ignored. Ties keep the first primitive encountered.
    pub fn nearest_hit(&self, ray: &Ray) -> Option<Hit<'_>> {
        let mut nearest: Option<Hit<'_>> = None;
        let mut t_near = f32::INFINITY;

        for (index, primitive) in self.primitives.iter().enumerate() {
            let Some(t) = visible_t(primitive, ray) else {
                continue;
            };
            if t < t_near {
                t_near = t;
                nearest = Some(Hit { primitive, index, t });
            }
        }

        nearest
    }

    /// Check whether anything except `skip` blocks a shadow ray.
    pub fn occluded(&self, origin: Vec3, direction: Vec3, skip: usize) -> bool {
        let ray = Ray::new(origin, direction);
        self.primitives
            .iter()
            .enumerate()
            .any(|(index, primitive)| index != skip && visible_t(primitive, &ray).is_some())
    }
}

impl From<&SceneDesc> for Scene {
    fn from(desc: &SceneDesc) -> Self {
        Self {
            primitives: desc.primitives.iter().map(Primitive::from).collect(),
        }
    }
}

/// Ray parameter at which the primitive is seen, if it is in front.
#[inline]
fn visible_t(primitive: &Primitive, ray: &Ray) -> Option<f32> {
    let (t0, t1) = primitive.shape.intersect(ray)?;
    let t = if t0 < 0.0 { t1 } else { t0 };
    (t >= 0.0).then_some(t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Shape;
    use glint_core::{Color, Material};

    fn sphere(center: Vec3, radius: f32) -> Primitive {
        Primitive::new(
            Shape::sphere(center, radius),
            Material::diffuse(Color::splat(0.5)),
        )
    }

    #[test]
    fn test_empty_scene_misses() {
        let scene = Scene::new();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        assert!(scene.nearest_hit(&ray).is_none());
    }

    #[test]
    fn test_nearest_wins() {
        let mut scene = Scene::new();
        scene.add(sphere(Vec3::new(0.0, 0.0, -20.0), 1.0));
        scene.add(sphere(Vec3::new(0.0, 0.0, -10.0), 1.0));

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let hit = scene.nearest_hit(&ray).unwrap();
        assert_eq!(hit.index, 1);
        assert_eq!(hit.t, 9.0);
    }

    #[test]
    fn test_tie_keeps_first() {
        let mut scene = Scene::new();
        scene.add(sphere(Vec3::new(0.0, 0.0, -10.0), 1.0));
        scene.add(sphere(Vec3::new(0.0, 0.0, -10.0), 1.0));

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(scene.nearest_hit(&ray).unwrap().index, 0);
    }

    #[test]
    fn test_inside_uses_exit_distance() {
        let mut scene = Scene::new();
        scene.add(Primitive::new(
            Shape::cuboid(Vec3::splat(-1.0), Vec3::splat(1.0)),
            Material::default(),
        ));

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let hit = scene.nearest_hit(&ray).unwrap();
        assert_eq!(hit.t, 1.0);
    }

    #[test]
    fn test_box_behind_is_ignored() {
        let mut scene = Scene::new();
        scene.add(Primitive::new(
            Shape::cuboid(Vec3::new(-1.0, -1.0, 2.0), Vec3::new(1.0, 1.0, 4.0)),
            Material::default(),
        ));

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        assert!(scene.nearest_hit(&ray).is_none());
    }

    #[test]
    fn test_occluded_skips_light() {
        let mut scene = Scene::new();
        scene.add(sphere(Vec3::new(0.0, 10.0, 0.0), 1.0));

        let up = Vec3::Y;
        assert!(!scene.occluded(Vec3::ZERO, up, 0));
        assert!(scene.occluded(Vec3::ZERO, up, 7));

        scene.add(sphere(Vec3::new(0.0, 5.0, 0.0), 1.0));
        assert!(scene.occluded(Vec3::ZERO, up, 0));
    }

    #[test]
    fn test_from_desc_keeps_order() {
        let desc = SceneDesc::reference_spheres();
        let scene = Scene::from(&desc);

        assert_eq!(scene.len(), desc.len());
        let lights: Vec<usize> = scene.lights().map(|(i, _)| i).collect();
        assert_eq!(lights, vec![5]);
    }
}
