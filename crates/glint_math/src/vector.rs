//! Vector helpers on top of `glam::Vec3`.

use crate::Vec3;

/// Extra operations on [`Vec3`] used by the tracer.
pub trait Vec3Ext {
    /// Return a unit-length copy of this vector.
    ///
    /// A zero-length vector is returned unchanged instead of producing NaNs.
    fn normalized(self) -> Vec3;
}

impl Vec3Ext for Vec3 {
    #[inline]
    fn normalized(self) -> Vec3 {
        let len2 = self.length_squared();
        if len2 > 0.0 {
            self * len2.sqrt().recip()
        } else {
            self
        }
    }
}

/// Linear blend: `b * t + a * (1 - t)`.
#[inline]
pub fn mix(a: f32, b: f32, t: f32) -> f32 {
    b * t + a * (1.0 - t)
}
