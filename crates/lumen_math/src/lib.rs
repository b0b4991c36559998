// Re-export glam for convenience
pub use glam::*;

// Lumen math types
mod ray;
pub use ray::Ray;

/// Double-precision vector used for points, directions and normals.
pub type Vec3 = glam::DVec3;

/// Linear RGB color. Channels are unbounded until pixel conversion.
pub type Color = glam::DVec3;

/// Normalize `v`. Vectors without a finite nonzero length (zero, or with
/// an infinite or NaN component) map to the zero vector instead of NaN.
#[inline]
pub fn unit(v: Vec3) -> Vec3 {
    v.normalize_or_zero()
}
