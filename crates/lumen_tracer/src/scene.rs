//! Scene description: objects, lights and the camera for one frame.

use crate::{Camera, Color, Plane, SceneObject, Sphere, Surfaces, Vec3};

/// Point light. No distance falloff.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Vec3,
    pub color: Color,
}

impl Light {
    pub fn new(position: Vec3, color: Color) -> Self {
        Self { position, color }
    }
}

/// Immutable snapshot of everything the tracer needs for one frame.
///
/// Object order matters: on equal hit distances the earlier object wins.
pub struct Scene {
    objects: Vec<Box<dyn SceneObject>>,
    lights: Vec<Light>,
    camera: Camera,
}

impl Scene {
    pub fn new(objects: Vec<Box<dyn SceneObject>>, lights: Vec<Light>, camera: Camera) -> Self {
        Self {
            objects,
            lights,
            camera,
        }
    }

    pub fn objects(&self) -> &[Box<dyn SceneObject>] {
        &self.objects
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }
}

/// Build the demo scene with the camera orbiting at `angle` degrees.
///
/// A checkerboard ground plane, two shiny spheres and four colored lights.
pub fn build_scene(angle: f64) -> Scene {
    let shiny = Surfaces::shiny();
    let checkerboard = Surfaces::checkerboard();

    let objects: Vec<Box<dyn SceneObject>> = vec![
        Box::new(Plane::new(Vec3::Y, 0.0, checkerboard)),
        Box::new(Sphere::new(Vec3::new(0.0, 1.0, 0.0), 1.0, shiny.clone())),
        Box::new(Sphere::new(Vec3::new(-1.0, 0.5, 1.5), 0.5, shiny)),
    ];

    let lights = vec![
        Light::new(Vec3::new(-2.0, 2.5, 0.0), Color::new(0.49, 0.07, 0.07)),
        Light::new(Vec3::new(1.5, 2.5, 1.5), Color::new(0.07, 0.07, 0.49)),
        Light::new(Vec3::new(1.5, 2.5, -1.5), Color::new(0.07, 0.49, 0.071)),
        Light::new(Vec3::new(0.0, 3.5, 0.0), Color::new(0.21, 0.21, 0.35)),
    ];

    Scene::new(objects, lights, Camera::orbit(angle))
}
