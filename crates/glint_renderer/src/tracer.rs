//! Recursive Whitted-style tracer.
//!
//! Each call finds the nearest hit and then either spawns reflection and
//! refraction rays (specular materials, while depth allows) or shades the
//! point directly against every light with hard shadows. The hit
//! primitive's own emission is added in both cases.

use glint_core::Color;
use glint_math::{mix, Ray, Vec3, Vec3Ext};

use crate::scene::{Hit, Scene};

/// Maximum recursion depth for reflection/refraction rays.
pub const MAX_DEPTH: u32 = 20;

/// Offset applied to secondary ray origins to avoid self-intersection.
pub const BIAS: f32 = 1e-4;

/// Index of refraction of every transparent primitive.
pub const IOR: f32 = 1.1;

/// Color returned by rays that escape the scene.
pub const BACKGROUND: Color = Color::new(2.0, 2.0, 2.0);

/// Weight of full reflectance blended into the Fresnel curve.
const FRESNEL_BLEND: f32 = 0.1;

/// Tracer settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceSettings {
    /// Depth at which specular materials fall back to diffuse shading
    pub max_depth: u32,
    /// Secondary ray origin offset along the normal
    pub bias: f32,
    /// Index of refraction for transparent primitives
    pub ior: f32,
    /// Color for rays that hit nothing
    pub background: Color,
}

impl Default for TraceSettings {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
            bias: BIAS,
            ior: IOR,
            background: BACKGROUND,
        }
    }
}

impl TraceSettings {
    /// Set the recursion limit.
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the background color.
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }
}

/// Counters collected while tracing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraceStats {
    /// Number of rays traced (primary and secondary)
    pub rays: u64,
    /// Deepest recursion level reached
    pub max_depth_reached: u32,
}

impl TraceStats {
    /// Fold another set of counters into this one.
    pub fn merge(&mut self, other: &TraceStats) {
        self.rays += other.rays;
        self.max_depth_reached = self.max_depth_reached.max(other.max_depth_reached);
    }
}

/// Traces rays through a borrowed, read-only scene.
#[derive(Debug, Clone, Copy)]
pub struct Tracer<'a> {
    scene: &'a Scene,
    settings: TraceSettings,
}

impl<'a> Tracer<'a> {
    /// Create a tracer with default settings.
    pub fn new(scene: &'a Scene) -> Self {
        Self {
            scene,
            settings: TraceSettings::default(),
        }
    }

    /// Replace the tracer settings.
    pub fn with_settings(mut self, settings: TraceSettings) -> Self {
        self.settings = settings;
        self
    }

    /// The scene being traced.
    pub fn scene(&self) -> &'a Scene {
        self.scene
    }

    /// The active settings.
    pub fn settings(&self) -> &TraceSettings {
        &self.settings
    }

    /// Compute the color seen along a ray.
    pub fn trace(&self, ray: &Ray, depth: u32) -> Color {
        let mut stats = TraceStats::default();
        self.trace_with_stats(ray, depth, &mut stats)
    }

    /// Compute the color seen along a ray, recording counters in `stats`.
    pub fn trace_with_stats(&self, ray: &Ray, depth: u32, stats: &mut TraceStats) -> Color {
        stats.rays += 1;
        stats.max_depth_reached = stats.max_depth_reached.max(depth);

        let Some(hit) = self.scene.nearest_hit(ray) else {
            return self.settings.background;
        };

        let material = &hit.primitive.material;
        let phit = ray.at(hit.t);
        let mut nhit = hit.primitive.shape.outward_normal(phit);

        // Keep the normal facing the incoming ray
        let inside = ray.direction.dot(nhit) > 0.0;
        if inside {
            nhit = -nhit;
        }

        let surface_color = if material.is_specular() && depth < self.settings.max_depth {
            self.shade_specular(ray, &hit, phit, nhit, inside, depth, stats)
        } else {
            self.shade_diffuse(&hit, phit, nhit)
        };

        surface_color + material.emission_color
    }

    #[allow(clippy::too_many_arguments)]
    fn shade_specular(
        &self,
        ray: &Ray,
        hit: &Hit<'_>,
        phit: Vec3,
        nhit: Vec3,
        inside: bool,
        depth: u32,
        stats: &mut TraceStats,
    ) -> Color {
        let material = &hit.primitive.material;
        let bias = self.settings.bias;

        let facing_ratio = -ray.direction.dot(nhit);
        let fresnel = mix((1.0 - facing_ratio).powi(3), 1.0, FRESNEL_BLEND);

        let refl_dir = reflect(ray.direction, nhit).normalized();
        let reflection =
            self.trace_with_stats(&Ray::new(phit + nhit * bias, refl_dir), depth + 1, stats);

        let mut refraction = Color::ZERO;
        if material.transparency > 0.0 {
            let eta = if inside {
                self.settings.ior
            } else {
                1.0 / self.settings.ior
            };
            // Total internal reflection contributes nothing
            if let Some(refr_dir) = refract(ray.direction, nhit, eta) {
                refraction = self.trace_with_stats(
                    &Ray::new(phit - nhit * bias, refr_dir),
                    depth + 1,
                    stats,
                );
            }
        }

        (reflection * fresnel + refraction * (1.0 - fresnel) * material.transparency)
            * material.surface_color
    }

    fn shade_diffuse(&self, hit: &Hit<'_>, phit: Vec3, nhit: Vec3) -> Color {
        let surface = hit.primitive.material.surface_color;
        let shadow_origin = phit + nhit * self.settings.bias;
        let mut color = Color::ZERO;

        for (light_index, light) in self.scene.lights() {
            if light_index == hit.index {
                continue;
            }

            let light_dir = (light.shape.center() - phit).normalized();
            if self.scene.occluded(shadow_origin, light_dir, light_index) {
                continue;
            }

            color += surface * nhit.dot(light_dir).max(0.0) * light.material.emission_color;
        }

        color
    }
}

/// Mirror `incident` about `normal`.
#[inline]
pub fn reflect(incident: Vec3, normal: Vec3) -> Vec3 {
    incident - normal * 2.0 * incident.dot(normal)
}

/// Refract `incident` through a surface with relative index `eta`.
///
/// `normal` must face the incoming ray. Returns `None` on total internal
/// reflection.
pub fn refract(incident: Vec3, normal: Vec3, eta: f32) -> Option<Vec3> {
    let cosi = -normal.dot(incident);
    let k = 1.0 - eta * eta * (1.0 - cosi * cosi);
    if k < 0.0 {
        return None;
    }
    Some((incident * eta + normal * (eta * cosi - k.sqrt())).normalized())
}
