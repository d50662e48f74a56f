//! Pinhole camera for primary ray generation.

use glint_math::{Ray, Vec3, Vec3Ext};

/// Default vertical field of view in degrees.
pub const DEFAULT_FOV: f32 = 30.0;

/// Pinhole camera at the origin looking down -Z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub image_width: u32,
    pub image_height: u32,

    /// Field of view in degrees
    fov: f32,

    // Cached computed values
    inv_width: f32,
    inv_height: f32,
    aspect_ratio: f32,
    angle: f32,
}

impl Camera {
    /// Create a camera for the given resolution with the default field of view.
    pub fn new(width: u32, height: u32) -> Self {
        let mut camera = Self {
            image_width: width,
            image_height: height,
            fov: DEFAULT_FOV,
            inv_width: 0.0,
            inv_height: 0.0,
            aspect_ratio: 1.0,
            angle: 0.0,
        };
        camera.initialize();
        camera
    }

    /// Set the field of view in degrees.
    pub fn with_fov(mut self, fov: f32) -> Self {
        self.fov = fov;
        self.initialize();
        self
    }

    /// Field of view in degrees.
    pub fn fov(&self) -> f32 {
        self.fov
    }

    /// Width over height.
    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    fn initialize(&mut self) {
        self.inv_width = 1.0 / self.image_width as f32;
        self.inv_height = 1.0 / self.image_height as f32;
        self.aspect_ratio = self.image_width as f32 / self.image_height as f32;
        self.angle = (0.5 * self.fov).to_radians().tan();
    }

    /// Generate the primary ray through the center of pixel (x, y).
    ///
    /// Pixel (0, 0) is the top-left corner of the image.
    pub fn primary_ray(&self, x: u32, y: u32) -> Ray {
        let xx = (2.0 * ((x as f32 + 0.5) * self.inv_width) - 1.0) * self.angle * self.aspect_ratio;
        let yy = (1.0 - 2.0 * ((y as f32 + 0.5) * self.inv_height)) * self.angle;
        Ray::new(Vec3::ZERO, Vec3::new(xx, yy, -1.0).normalized())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_center_ray() {
        // Odd resolution puts a pixel center exactly on the axis
        let camera = Camera::new(101, 101);
        let ray = camera.primary_ray(50, 50);

        assert_eq!(ray.origin, Vec3::ZERO);
        assert!((ray.direction - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-6);
    }

    #[test]
    fn test_camera_orientation() {
        let camera = Camera::new(640, 480);

        // Top-left pixel looks up and to the left
        let ray = camera.primary_ray(0, 0);
        assert!(ray.direction.x < 0.0);
        assert!(ray.direction.y > 0.0);
        assert!(ray.direction.z < 0.0);

        // Bottom-right pixel looks down and to the right
        let ray = camera.primary_ray(639, 479);
        assert!(ray.direction.x > 0.0);
        assert!(ray.direction.y < 0.0);
    }

    #[test]
    fn test_camera_rays_are_normalized() {
        let camera = Camera::new(32, 16);
        for (x, y) in [(0, 0), (31, 0), (7, 9), (31, 15)] {
            let len = camera.primary_ray(x, y).direction.length();
            assert!((len - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_camera_field_of_view() {
        let camera = Camera::new(2, 2).with_fov(90.0);
        let ray = camera.primary_ray(0, 0);
        let d = ray.direction / -ray.direction.z;

        // yy = (1 - 2 * 0.25) * tan(45deg) = 0.5
        assert!((d.y - 0.5).abs() < 1e-5);
        assert!((d.x + 0.5).abs() < 1e-5);
        assert_eq!(camera.fov(), 90.0);
        assert_eq!(camera.aspect_ratio(), 1.0);
    }
}
