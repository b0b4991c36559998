//! Infinite one-sided plane.

use crate::object::{SceneObject, NO_HIT};
use crate::{Ray, Surface, Vec3};
use std::sync::Arc;

/// Plane of points `p` with `dot(normal, p) + offset == 0`.
///
/// Only rays travelling against the normal can hit it.
pub struct Plane {
    normal: Vec3,
    offset: f64,
    surface: Arc<dyn Surface>,
}

impl Plane {
    /// `normal` is expected to be unit length.
    pub fn new(normal: Vec3, offset: f64, surface: Arc<dyn Surface>) -> Self {
        Self {
            normal,
            offset,
            surface,
        }
    }
}

impl SceneObject for Plane {
    fn intersect(&self, ray: &Ray) -> f64 {
        let denom = self.normal.dot(ray.direction());
        // A parallel ray would divide by zero.
        if denom >= 0.0 {
            return NO_HIT;
        }

        // Not clamped at zero: a ray starting behind the plane gets a
        // negative distance.
        (self.normal.dot(ray.origin()) + self.offset) / -denom
    }

    fn normal(&self, _p: Vec3) -> Vec3 {
        self.normal
    }

    fn surface(&self) -> &dyn Surface {
        self.surface.as_ref()
    }
}
