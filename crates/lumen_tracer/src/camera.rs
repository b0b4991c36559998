//! Camera for ray generation.

use crate::{unit, Ray, Vec3};

/// Scale applied to the right and up vectors. Sets the field of view.
const FOV_SCALE: f64 = 1.5;

/// Distance from the orbit axis used by [`Camera::orbit`].
const ORBIT_RADIUS: f64 = 6.0;

/// Eye height used by [`Camera::orbit`].
const ORBIT_HEIGHT: f64 = 2.0;

/// Pinhole camera described by a position and a view basis.
///
/// `right` and `up` are not unit length; they carry the field of view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub forward: Vec3,
    pub up: Vec3,
    pub right: Vec3,
}

impl Camera {
    /// Build a camera at `eye` looking towards `target`.
    pub fn look_at(eye: Vec3, target: Vec3) -> Self {
        let forward = unit(target - eye);
        let down = Vec3::new(0.0, -1.0, 0.0);
        let right = unit(forward.cross(down)) * FOV_SCALE;
        let up = unit(forward.cross(right)) * FOV_SCALE;

        Self {
            position: eye,
            forward,
            up,
            right,
        }
    }

    /// Camera circling the origin, `angle` in degrees.
    ///
    /// At 0 degrees the eye sits on the +Z axis.
    pub fn orbit(angle: f64) -> Self {
        let theta = angle.to_radians();
        let eye = Vec3::new(
            theta.sin() * ORBIT_RADIUS,
            ORBIT_HEIGHT,
            theta.cos() * ORBIT_RADIUS,
        );
        Self::look_at(eye, Vec3::ZERO)
    }

    /// Primary ray through pixel `(x, y)` of a `width` x `height` image.
    ///
    /// Row 0 is the top of the image.
    pub fn get_ray(&self, x: u32, y: u32, width: u32, height: u32) -> Ray {
        let direction = unit(
            self.forward
                + self.right * recenter_x(x as f64, width as f64)
                + self.up * recenter_y(y as f64, height as f64),
        );
        Ray::new(self.position, direction)
    }
}

/// Horizontal camera-plane offset for column `x`.
#[inline]
pub fn recenter_x(x: f64, width: f64) -> f64 {
    (x - width / 2.0) / (2.0 * width)
}

/// Vertical camera-plane offset for row `y`, flipped so up is positive.
#[inline]
pub fn recenter_y(y: f64, height: f64) -> f64 {
    -(y - height / 2.0) / (2.0 * height)
}
