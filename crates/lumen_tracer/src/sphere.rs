//! Sphere primitive for ray tracing.

use crate::object::{SceneObject, NO_HIT};
use crate::{unit, Ray, Surface, Vec3};
use std::sync::Arc;

/// A sphere primitive.
pub struct Sphere {
    center: Vec3,
    radius_sq: f64,
    surface: Arc<dyn Surface>,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f64, surface: Arc<dyn Surface>) -> Self {
        Self {
            center,
            radius_sq: radius * radius,
            surface,
        }
    }
}

impl SceneObject for Sphere {
    /// Only the near root is reported. A ray whose origin projects past the
    /// center (including rays starting inside) misses.
    fn intersect(&self, ray: &Ray) -> f64 {
        let eo = self.center - ray.origin();
        let v = eo.dot(ray.direction());
        if v <= 0.0 {
            return NO_HIT;
        }

        let disc = self.radius_sq - (eo.dot(eo) - v * v);
        if disc <= 0.0 {
            return NO_HIT;
        }

        v - disc.sqrt()
    }

    fn normal(&self, p: Vec3) -> Vec3 {
        unit(p - self.center)
    }

    fn surface(&self) -> &dyn Surface {
        self.surface.as_ref()
    }
}
