//! Glint Renderer - Whitted-style recursive ray tracing
//!
//! Traces one ray per pixel through a scene of spheres and boxes,
//! resolving mirror reflection, refraction and hard shadows.

mod camera;
mod output;
mod primitive;
mod renderer;
mod scene;
mod shape;
mod tracer;

pub use camera::{Camera, DEFAULT_FOV};
pub use output::{save_ppm, write_ppm, OutputError, OutputResult};
pub use primitive::Primitive;
pub use renderer::{channel_to_u8, color_to_rgb8, render, render_with_stats, ImageBuffer};
pub use scene::{Hit, Scene};
pub use shape::Shape;
pub use tracer::{
    reflect, refract, TraceSettings, TraceStats, Tracer, BACKGROUND, BIAS, IOR, MAX_DEPTH,
};

/// Re-export common types
pub use glint_core::{Color, Material};
pub use glint_math::{Ray, Vec3};
