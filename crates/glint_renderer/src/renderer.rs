//! Render loop and image buffer.
//!
//! One primary ray per pixel, traced in row-major order on the calling
//! thread. The scene is only read while rendering.

use std::time::Instant;

use glint_core::Color;

use crate::{Camera, TraceStats, Tracer};

/// Image buffer for storing render output.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Convert to packed 8-bit RGB bytes, row-major.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb8(*color));
        }
        bytes
    }
}

/// Clamp a channel to [0, 1] and scale it to 0-255.
#[inline]
pub fn channel_to_u8(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Convert a color to 8-bit RGB.
pub fn color_to_rgb8(color: Color) -> [u8; 3] {
    [
        channel_to_u8(color.x),
        channel_to_u8(color.y),
        channel_to_u8(color.z),
    ]
}

/// Render the entire scene to an image buffer.
pub fn render(camera: &Camera, tracer: &Tracer<'_>) -> ImageBuffer {
    render_with_stats(camera, tracer).0
}

/// Render the entire scene, also returning the trace counters.
pub fn render_with_stats(camera: &Camera, tracer: &Tracer<'_>) -> (ImageBuffer, TraceStats) {
    let scene = tracer.scene();
    log::info!(
        "Rendering {}x{} ({} primitives, {} lights, fov {})",
        camera.image_width,
        camera.image_height,
        scene.len(),
        scene.lights().count(),
        camera.fov()
    );

    let start = Instant::now();
    let mut image = ImageBuffer::new(camera.image_width, camera.image_height);
    let mut stats = TraceStats::default();

    for y in 0..camera.image_height {
        for x in 0..camera.image_width {
            let ray = camera.primary_ray(x, y);
            let color = tracer.trace_with_stats(&ray, 0, &mut stats);
            image.set(x, y, color);
        }
    }

    log::info!(
        "Rendered in {:?} ({} rays, max depth {})",
        start.elapsed(),
        stats.rays,
        stats.max_depth_reached
    );

    (image, stats)
}
