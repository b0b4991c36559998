//! Lumen - recursive Whitted-style CPU ray tracer.
//!
//! Casts one ray per pixel, shades the nearest hit with shadowed diffuse
//! and specular light, and follows mirror reflections to a fixed depth.
//!
//! The two entry points are [`build_scene`], which describes a frame for a
//! given camera orbit angle, and [`render_frame`], which writes that frame
//! into caller-owned pixel memory.

mod camera;
mod error;
mod object;
mod pixel;
mod plane;
mod renderer;
mod scene;
mod sphere;
mod surface;
mod tracer;

pub use camera::{recenter_x, recenter_y, Camera};
pub use error::{RenderError, RenderResult};
pub use object::{SceneObject, NO_HIT};
pub use pixel::{color_to_pixel, legalize, PixelFormat, Rgb8};
pub use plane::Plane;
pub use renderer::{render_frame, render_frame_parallel, FrameBuffer};
pub use scene::{build_scene, Light, Scene};
pub use sphere::Sphere;
pub use surface::{CheckerBoard, Shiny, Surface, Surfaces};
pub use tracer::{
    nearest_intersection, test_ray, trace_ray, Intersection, BACKGROUND, DEFAULT_COLOR, MAX_DEPTH,
};

/// Re-export the vector types from lumen_math
pub use lumen_math::{unit, Color, Ray, Vec3};
