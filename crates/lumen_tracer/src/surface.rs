//! Surface trait describing how a point on an object is shaded.

use crate::{Color, Vec3};
use std::sync::Arc;

/// Shading parameters evaluated at a world-space point.
///
/// Surfaces are stateless, so a single instance is shared between any
/// number of scene objects through an `Arc`.
pub trait Surface: Send + Sync {
    /// Diffuse color at `p`.
    fn diffuse(&self, p: Vec3) -> Color;

    /// Specular highlight color at `p`.
    fn specular(&self, p: Vec3) -> Color;

    /// Weight of the mirror reflection at `p`, in [0, 1].
    fn reflect(&self, p: Vec3) -> f64;

    /// Phong exponent. Higher values give tighter highlights.
    fn roughness(&self) -> f64;
}

/// Uniform white surface with a soft gray highlight.
#[derive(Debug, Clone, Copy, Default)]
pub struct Shiny;

impl Surface for Shiny {
    fn diffuse(&self, _p: Vec3) -> Color {
        Color::ONE
    }

    fn specular(&self, _p: Vec3) -> Color {
        Color::splat(0.5)
    }

    fn reflect(&self, _p: Vec3) -> f64 {
        0.6
    }

    fn roughness(&self) -> f64 {
        50.0
    }
}

/// Procedural black/white checkerboard on the X-Z plane.
///
/// Cells are keyed off `floor(x) + floor(z)`, so this only makes sense on
/// geometry lying in a horizontal plane.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckerBoard;

impl CheckerBoard {
    /// True for the white cells.
    #[inline]
    fn is_odd(p: Vec3) -> bool {
        (p.x.floor() + p.z.floor()).rem_euclid(2.0) == 1.0
    }
}

impl Surface for CheckerBoard {
    fn diffuse(&self, p: Vec3) -> Color {
        if Self::is_odd(p) {
            Color::ONE
        } else {
            Color::ZERO
        }
    }

    fn specular(&self, _p: Vec3) -> Color {
        Color::ONE
    }

    fn reflect(&self, p: Vec3) -> f64 {
        if Self::is_odd(p) {
            0.1
        } else {
            0.7
        }
    }

    fn roughness(&self) -> f64 {
        150.0
    }
}

/// Shared handles to the built-in surfaces.
pub struct Surfaces;

impl Surfaces {
    pub fn shiny() -> Arc<dyn Surface> {
        Arc::new(Shiny)
    }

    pub fn checkerboard() -> Arc<dyn Surface> {
        Arc::new(CheckerBoard)
    }
}
