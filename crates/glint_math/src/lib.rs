// Re-export glam for convenience
pub use glam::*;

// Glint math types
mod ray;
mod vector;

pub use ray::Ray;
pub use vector::{mix, Vec3Ext};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!((a.x, a.y, a.z), (1.0, 2.0, 3.0));

        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::splat(3.0));
        assert_eq!(-a, Vec3::new(-1.0, -2.0, -3.0));
        assert_eq!(a * b, Vec3::new(4.0, 10.0, 18.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(a.dot(b), 32.0);
        assert_eq!(a.length_squared(), 14.0);
        assert_eq!(Vec3::new(0.0, 3.0, 4.0).length(), 5.0);
    }
}
