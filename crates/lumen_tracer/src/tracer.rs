//! Recursive Whitted-style ray tracing.
//!
//! Each traced ray finds its nearest hit, gathers direct light from every
//! unshadowed light and then follows the mirror reflection, up to
//! [`MAX_DEPTH`] bounces.

use crate::object::NO_HIT;
use crate::{unit, Color, Ray, Scene, SceneObject, Vec3};

/// Reflection depth at which recursion stops.
pub const MAX_DEPTH: u32 = 5;

/// Color returned by rays that hit nothing.
pub const BACKGROUND: Color = Color::ZERO;

/// Starting value for accumulated shading.
pub const DEFAULT_COLOR: Color = Color::ZERO;

/// Added in place of the reflection once [`MAX_DEPTH`] is reached.
const DEPTH_CUTOFF_COLOR: Color = Color::splat(0.5);

/// Offset along the reflected direction before tracing it again.
const REFLECTION_BIAS: f64 = 0.001;

/// Nearest hit found along a ray.
#[derive(Clone, Copy)]
pub struct Intersection<'a> {
    /// The object that was hit
    pub object: &'a dyn SceneObject,
    /// Position of the object in the scene's object list
    pub index: usize,
    /// Distance along the ray
    pub distance: f64,
}

/// Find the nearest object hit by `ray`.
///
/// Objects are scanned in order and a later object only wins with a
/// strictly smaller distance.
pub fn nearest_intersection<'a>(ray: &Ray, scene: &'a Scene) -> Option<Intersection<'a>> {
    let mut nearest: Option<Intersection<'a>> = None;
    let mut nearest_dist = NO_HIT;

    for (index, object) in scene.objects().iter().enumerate() {
        let distance = object.intersect(ray);
        if distance < nearest_dist {
            nearest_dist = distance;
            nearest = Some(Intersection {
                object: object.as_ref(),
                index,
                distance,
            });
        }
    }

    nearest
}

/// Distance to the nearest object along `ray`, or `f64::INFINITY`.
pub fn test_ray(ray: &Ray, scene: &Scene) -> f64 {
    nearest_intersection(ray, scene).map_or(NO_HIT, |isect| isect.distance)
}

/// Compute the color seen along `ray`.
///
/// `depth` is the number of reflections already followed; primary rays
/// start at 0.
pub fn trace_ray(ray: &Ray, scene: &Scene, depth: u32) -> Color {
    match nearest_intersection(ray, scene) {
        Some(isect) => shade(&isect, ray, scene, depth),
        None => BACKGROUND,
    }
}

fn shade(isect: &Intersection, ray: &Ray, scene: &Scene, depth: u32) -> Color {
    let d = ray.direction();
    let pos = ray.at(isect.distance);
    let normal = isect.object.normal(pos);
    let reflect_dir = d - normal * (2.0 * normal.dot(d));

    let mut color = DEFAULT_COLOR;
    color += natural_color(isect.object, pos, normal, reflect_dir, scene);

    if depth >= MAX_DEPTH {
        return color + DEPTH_CUTOFF_COLOR;
    }

    color + reflection_color(isect.object, pos, reflect_dir, scene, depth)
}

/// Direct diffuse and specular light at `pos` from every unshadowed light.
fn natural_color(
    object: &dyn SceneObject,
    pos: Vec3,
    normal: Vec3,
    reflect_dir: Vec3,
    scene: &Scene,
) -> Color {
    let surface = object.surface();
    let mut color = DEFAULT_COLOR;

    for light in scene.lights() {
        let light_vec = light.position - pos;
        let light_dir = unit(light_vec);

        let occluder = test_ray(&Ray::new(pos, light_dir), scene);
        let in_shadow = !(occluder == NO_HIT || occluder > light_vec.length());
        if in_shadow {
            continue;
        }

        let illum = light_dir.dot(normal);
        if illum > 0.0 {
            color += surface.diffuse(pos) * (light.color * illum);
        }

        let spec = light_dir.dot(reflect_dir);
        if spec > 0.0 {
            color += surface.specular(pos) * (light.color * spec.powf(surface.roughness()));
        }
    }

    color
}

fn reflection_color(
    object: &dyn SceneObject,
    pos: Vec3,
    reflect_dir: Vec3,
    scene: &Scene,
    depth: u32,
) -> Color {
    let bounce = Ray::new(pos + reflect_dir * REFLECTION_BIAS, reflect_dir);
    trace_ray(&bounce, scene, depth + 1) * object.surface().reflect(pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Camera, Light, Plane, Sphere, Surface, Surfaces};
    use std::sync::Arc;

    /// Surface with fixed parameters for isolating one term at a time.
    struct Flat {
        diffuse: Color,
        specular: Color,
        reflect: f64,
        roughness: f64,
    }

    impl Surface for Flat {
        fn diffuse(&self, _p: Vec3) -> Color {
            self.diffuse
        }
        fn specular(&self, _p: Vec3) -> Color {
            self.specular
        }
        fn reflect(&self, _p: Vec3) -> f64 {
            self.reflect
        }
        fn roughness(&self) -> f64 {
            self.roughness
        }
    }

    fn flat(diffuse: Color, reflect: f64) -> Arc<dyn Surface> {
        Arc::new(Flat {
            diffuse,
            specular: Color::ZERO,
            reflect,
            roughness: 1.0,
        })
    }

    /// Non-reflective surface with a highlight.
    fn glossy(diffuse: Color, roughness: f64) -> Arc<dyn Surface> {
        Arc::new(Flat {
            diffuse,
            specular: Color::ONE,
            reflect: 0.0,
            roughness,
        })
    }

    fn scene_of(objects: Vec<Box<dyn SceneObject>>, lights: Vec<Light>) -> Scene {
        Scene::new(objects, lights, Camera::orbit(0.0))
    }

    /// Floor at y=0 and ceiling at y=2 facing each other.
    fn mirror_cavity(reflect: f64) -> Scene {
        let mirror = flat(Color::ZERO, reflect);
        scene_of(
            vec![
                Box::new(Plane::new(Vec3::Y, 0.0, mirror.clone())),
                Box::new(Plane::new(-Vec3::Y, 2.0, mirror)),
            ],
            Vec::new(),
        )
    }

    #[test]
    fn test_empty_scene_is_background() {
        let scene = scene_of(Vec::new(), Vec::new());
        let ray = Ray::new(Vec3::ZERO, -Vec3::Z);
        assert_eq!(trace_ray(&ray, &scene, 0), BACKGROUND);
        assert_eq!(test_ray(&ray, &scene), f64::INFINITY);
    }

    #[test]
    fn test_miss_is_background() {
        let scene = scene_of(
            vec![Box::new(Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, Surfaces::shiny()))],
            vec![Light::new(Vec3::new(0.0, 5.0, 0.0), Color::ONE)],
        );
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        assert_eq!(trace_ray(&ray, &scene, 0), Color::ZERO);
    }

    #[test]
    fn test_nearest_wins() {
        let scene = scene_of(
            vec![
                Box::new(Sphere::new(Vec3::new(0.0, 0.0, -10.0), 1.0, Surfaces::shiny())),
                Box::new(Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, Surfaces::shiny())),
            ],
            Vec::new(),
        );
        let isect = nearest_intersection(&Ray::new(Vec3::ZERO, -Vec3::Z), &scene)
            .expect("ray should hit");
        assert_eq!(isect.index, 1);
        assert!((isect.distance - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_equal_distance_keeps_first() {
        let scene = scene_of(
            vec![
                Box::new(Plane::new(Vec3::Y, 0.0, Surfaces::checkerboard())),
                Box::new(Plane::new(Vec3::Y, 0.0, Surfaces::shiny())),
            ],
            Vec::new(),
        );
        let isect = nearest_intersection(&Ray::new(Vec3::new(0.0, 3.0, 0.0), -Vec3::Y), &scene)
            .expect("ray should hit");
        assert_eq!(isect.index, 0);
    }

    #[test]
    fn test_mirror_cavity_terminates() {
        let scene = mirror_cavity(1.0);
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), -Vec3::Y);
        let color = trace_ray(&ray, &scene, 0);

        assert!(color.is_finite());
        assert!((color - DEPTH_CUTOFF_COLOR).length() < 1e-12);
    }

    #[test]
    fn test_depth_cutoff_is_exact() {
        // Bounces at depths 0..=4 each scale by 0.5, depth 5 adds the gray.
        let scene = mirror_cavity(0.5);
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), -Vec3::Y);
        let color = trace_ray(&ray, &scene, 0);

        let expected = 0.5_f64.powi(MAX_DEPTH as i32) * 0.5;
        assert!((color.x - expected).abs() < 1e-12, "got {color}");
    }

    #[test]
    fn test_trace_at_max_depth_does_not_recurse() {
        let scene = mirror_cavity(1.0);
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), -Vec3::Y);
        assert_eq!(trace_ray(&ray, &scene, MAX_DEPTH), DEPTH_CUTOFF_COLOR);
    }

    fn lit_floor(occluder_center: Vec3) -> Scene {
        scene_of(
            vec![
                Box::new(Plane::new(Vec3::Y, 0.0, flat(Color::ONE, 0.0))),
                Box::new(Sphere::new(occluder_center, 0.5, Surfaces::shiny())),
            ],
            vec![Light::new(Vec3::new(5.0, 5.0, 0.0), Color::ONE)],
        )
    }

    #[test]
    fn test_occluder_casts_shadow() {
        let down = Ray::new(Vec3::new(0.0, 10.0, 0.0), -Vec3::Y);

        // Sphere sits on the segment from the origin to the light.
        let shadowed = trace_ray(&down, &lit_floor(Vec3::new(2.5, 2.5, 0.0)), 0);
        assert_eq!(shadowed, Color::ZERO);

        // Same sphere moved off to the other side.
        let lit = trace_ray(&down, &lit_floor(Vec3::new(-2.5, 2.5, 0.0)), 0);
        let expected = 1.0 / 2.0_f64.sqrt();
        assert!((lit.x - expected).abs() < 1e-9, "got {lit}");
    }

    #[test]
    fn test_occluder_beyond_light_does_not_shadow() {
        let scene = scene_of(
            vec![
                Box::new(Plane::new(Vec3::Y, 0.0, flat(Color::ONE, 0.0))),
                Box::new(Sphere::new(Vec3::new(0.0, 8.0, 0.0), 0.5, Surfaces::shiny())),
            ],
            vec![Light::new(Vec3::new(0.0, 4.0, 0.0), Color::ONE)],
        );
        let ray = Ray::new(Vec3::new(0.5, 3.0, 0.0), unit(Vec3::new(0.0, -1.0, 0.0)));
        let color = trace_ray(&ray, &scene, 0);
        assert!(color.x > 0.9, "got {color}");
    }

    #[test]
    fn test_light_below_surface_adds_nothing() {
        let scene = scene_of(
            vec![Box::new(Plane::new(Vec3::Y, 0.0, flat(Color::ONE, 0.0)))],
            vec![Light::new(Vec3::new(0.0, -3.0, 0.0), Color::ONE)],
        );
        let ray = Ray::new(Vec3::new(0.0, 2.0, 0.0), -Vec3::Y);
        assert_eq!(trace_ray(&ray, &scene, 0), Color::ZERO);
    }

    #[test]
    fn test_checkerboard_cells_alternate() {
        let scene = scene_of(
            vec![Box::new(Plane::new(Vec3::Y, 0.0, Surfaces::checkerboard()))],
            vec![Light::new(Vec3::new(1.0, 10.0, 0.5), Color::ONE)],
        );

        let even = trace_ray(&Ray::new(Vec3::new(0.5, 5.0, 0.5), -Vec3::Y), &scene, 0);
        let odd = trace_ray(&Ray::new(Vec3::new(1.5, 5.0, 0.5), -Vec3::Y), &scene, 0);

        assert!(odd.x > even.x + 0.5, "odd={odd} even={even}");
    }

    /// Ray from (-1, 1, 0) hits the floor at the origin and mirrors to
    /// (1, 1, 0) / sqrt(2).
    fn glancing_floor_ray() -> Ray {
        Ray::new(Vec3::new(-1.0, 1.0, 0.0), unit(Vec3::new(1.0, -1.0, 0.0)))
    }

    #[test]
    fn test_specular_highlight_is_powered_by_roughness() {
        // Light direction (1, 2, 0) / sqrt(5), so spec = 3 / sqrt(10).
        let light = vec![Light::new(Vec3::new(1.0, 2.0, 0.0), Color::ONE)];
        let spec = 3.0 / 10.0_f64.sqrt();

        for roughness in [1.0, 4.0, 50.0] {
            let scene = scene_of(
                vec![Box::new(Plane::new(Vec3::Y, 0.0, glossy(Color::ZERO, roughness)))],
                light.clone(),
            );
            let color = trace_ray(&glancing_floor_ray(), &scene, 0);
            let expected = spec.powf(roughness);
            assert!((color - Color::splat(expected)).length() < 1e-9, "got {color}");
        }

        // 0.9^2 exactly at roughness 4.
        let scene = scene_of(
            vec![Box::new(Plane::new(Vec3::Y, 0.0, glossy(Color::ZERO, 4.0)))],
            light,
        );
        let color = trace_ray(&glancing_floor_ray(), &scene, 0);
        assert!((color.x - 0.81).abs() < 1e-9, "got {color}");
    }

    #[test]
    fn test_diffuse_and_specular_gate_independently() {
        // Light behind the incoming ray: lit surface, but facing away from
        // the mirror direction, so only the diffuse term contributes.
        let scene = scene_of(
            vec![Box::new(Plane::new(Vec3::Y, 0.0, glossy(Color::ONE, 4.0)))],
            vec![Light::new(Vec3::new(-1.0, 0.5, 0.0), Color::ONE)],
        );
        let color = trace_ray(&glancing_floor_ray(), &scene, 0);
        let illum = 0.5 / 1.25_f64.sqrt();
        assert!((color - Color::splat(illum)).length() < 1e-9, "got {color}");

        // Light on the mirror direction: both terms add up.
        let scene = scene_of(
            vec![Box::new(Plane::new(Vec3::Y, 0.0, glossy(Color::ONE, 4.0)))],
            vec![Light::new(Vec3::new(1.0, 2.0, 0.0), Color::ONE)],
        );
        let color = trace_ray(&glancing_floor_ray(), &scene, 0);
        let expected = 2.0 / 5.0_f64.sqrt() + 0.81;
        assert!((color.x - expected).abs() < 1e-9, "got {color}");
    }
}
