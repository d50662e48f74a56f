//! Intersectable shapes.
//!
//! Intersection reports the ray-parameter interval `(t0, t1)` where the
//! infinite ray enters and leaves the shape. A miss is `None`, which is the
//! common case and not an error.

use glint_core::Geometry;
use glint_math::{Ray, Vec3, Vec3Ext};

/// Closed set of shapes the tracer can intersect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Sphere { center: Vec3, radius: f32, radius2: f32 },
    Cuboid { min: Vec3, max: Vec3 },
}

impl Shape {
    /// Create a sphere.
    pub fn sphere(center: Vec3, radius: f32) -> Self {
        Shape::Sphere {
            center,
            radius,
            radius2: radius * radius,
        }
    }

    /// Create an axis-aligned box from its min and max corners.
    pub fn cuboid(min: Vec3, max: Vec3) -> Self {
        Shape::Cuboid { min, max }
    }

    /// Intersect an infinite ray with this shape.
    ///
    /// Returns `(t0, t1)` with `t0 <= t1`, or `None` on a miss.
    #[inline]
    pub fn intersect(&self, ray: &Ray) -> Option<(f32, f32)> {
        match *self {
            Shape::Sphere { center, radius2, .. } => hit_sphere(center, radius2, ray),
            Shape::Cuboid { min, max } => hit_slabs(min, max, ray),
        }
    }

    /// Unit outward normal at a point on the surface.
    pub fn outward_normal(&self, point: Vec3) -> Vec3 {
        match *self {
            Shape::Sphere { center, .. } => (point - center).normalized(),
            Shape::Cuboid { min, max } => cuboid_normal(min, max, point),
        }
    }

    /// Position used when this shape is a light.
    pub fn center(&self) -> Vec3 {
        match *self {
            Shape::Sphere { center, .. } => center,
            Shape::Cuboid { min, max } => (min + max) * 0.5,
        }
    }
}

impl From<Geometry> for Shape {
    fn from(geometry: Geometry) -> Self {
        match geometry {
            Geometry::Sphere { center, radius } => Shape::sphere(center, radius),
            Geometry::Cuboid { min, max } => Shape::cuboid(min, max),
        }
    }
}

/// Geometric sphere test.
///
/// Rays whose closest approach to the center lies behind the origin miss.
fn hit_sphere(center: Vec3, radius2: f32, ray: &Ray) -> Option<(f32, f32)> {
    let l = center - ray.origin;
    let tca = l.dot(ray.direction);
    if tca < 0.0 {
        return None;
    }

    let d2 = l.dot(l) - tca * tca;
    if d2 > radius2 {
        return None;
    }

    let thc = (radius2 - d2).sqrt();
    Some((tca - thc, tca + thc))
}

/// Slab test.
///
/// The near/far plane of each slab is picked from the sign of the inverse
/// direction, so a zero component (inverse of +/-inf) never needs a swap
/// on values that may be infinite.
fn hit_slabs(min: Vec3, max: Vec3, ray: &Ray) -> Option<(f32, f32)> {
    let mut t_enter = f32::NEG_INFINITY;
    let mut t_exit = f32::INFINITY;

    for axis in 0..3 {
        let inv = ray.direction[axis].recip();
        let (near, far) = if inv.is_sign_negative() {
            (max[axis], min[axis])
        } else {
            (min[axis], max[axis])
        };

        let t0 = (near - ray.origin[axis]) * inv;
        let t1 = (far - ray.origin[axis]) * inv;

        if t0 > t_exit || t_enter > t1 {
            return None;
        }
        t_enter = t_enter.max(t0);
        t_exit = t_exit.min(t1);
    }

    if t_enter > t_exit {
        return None;
    }
    Some((t_enter, t_exit))
}

/// Normal of the box face closest to `point`.
fn cuboid_normal(min: Vec3, max: Vec3, point: Vec3) -> Vec3 {
    let mut normal = Vec3::ZERO;
    let mut best = f32::INFINITY;

    for axis in 0..3 {
        let to_min = (point[axis] - min[axis]).abs();
        if to_min < best {
            best = to_min;
            normal = Vec3::ZERO;
            normal[axis] = -1.0;
        }

        let to_max = (point[axis] - max[axis]).abs();
        if to_max < best {
            best = to_max;
            normal = Vec3::ZERO;
            normal[axis] = 1.0;
        }
    }

    normal
}
