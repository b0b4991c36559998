//! SceneObject trait for ray-object intersection.

use crate::{Ray, Surface, Vec3};

/// Distance reported by [`SceneObject::intersect`] when the ray misses.
pub const NO_HIT: f64 = f64::INFINITY;

/// Trait for geometric primitives that can be hit by rays.
pub trait SceneObject: Send + Sync {
    /// Distance along `ray` to the intersection, or [`NO_HIT`].
    ///
    /// The distance is in units of `ray.direction`, so it is a true distance
    /// for unit directions.
    fn intersect(&self, ray: &Ray) -> f64;

    /// Unit surface normal at `p`, assumed to lie on the object.
    fn normal(&self, p: Vec3) -> Vec3;

    /// Shading parameters for this object.
    fn surface(&self) -> &dyn Surface;
}
