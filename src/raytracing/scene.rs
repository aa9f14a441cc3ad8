use super::geometry::{Geometry, HitRecord};
use super::math::{Color, Interval, Point3, Ray, Vec3};

/// Offset applied to a shadow ray origin so it cannot re-hit the surface
/// it starts on.
const SHADOW_BIAS: f64 = 1e-4;

/// The renderable world: every primitive plus the single directional light.
/// Built once before rendering, read-only afterwards.
#[derive(Debug, Default)]
pub struct Scene {
    objects: Vec<Geometry>,
    light_direction: Vec3,
    light_color: Color,
    ambient_light: Color,
    background_color: Color,
}

impl Scene {
    pub fn new() -> Scene {
        Scene::default()
    }

    pub fn add(&mut self, object: Geometry) {
        self.objects.push(object);
    }

    /// Nearest intersection along the ray, if any. The search interval's
    /// upper bound shrinks to the best t found so far, so later objects
    /// only qualify when they are strictly closer.
    pub fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let mut closest_so_far = ray_t;
        let mut closest_hit = None;

        for object in &self.objects {
            if let Some(rec) = object.hit(ray, closest_so_far) {
                closest_so_far.max = rec.t;
                closest_hit = Some(rec);
            }
        }
        closest_hit
    }

    /// True when any object occludes the light from the given point.
    /// A directional light has no distance, so any hit casts full shadow.
    pub fn is_shadowed(&self, point: Point3, light_dir: Vec3) -> bool {
        let shadow_ray = Ray::new(point + light_dir * SHADOW_BIAS, light_dir);
        self.hit(&shadow_ray, Interval::shadow()).is_some()
    }

    pub fn light_direction(&self) -> Vec3 {
        self.light_direction
    }

    /// Stores the direction normalized so shading can use it directly.
    pub fn set_light_direction(&mut self, light_direction: Vec3) {
        self.light_direction = light_direction.normalize();
    }

    pub fn light_color(&self) -> Color {
        self.light_color
    }

    pub fn set_light_color(&mut self, light_color: Color) {
        self.light_color = light_color;
    }

    pub fn ambient_light(&self) -> Color {
        self.ambient_light
    }

    pub fn set_ambient_light(&mut self, ambient_light: Color) {
        self.ambient_light = ambient_light;
    }

    pub fn background_color(&self) -> Color {
        self.background_color
    }

    pub fn set_background_color(&mut self, background_color: Color) {
        self.background_color = background_color;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::raytracing::material::Material;

    fn matte(reflection_factor: f64) -> Arc<Material> {
        Arc::new(Material {
            ambient_coef: 0.1,
            diffuse_coef: 0.7,
            specular_coef: 0.2,
            diffuse_color: Color::new(1.0, 1.0, 1.0),
            specular_color: Color::new(1.0, 1.0, 1.0),
            glossiness: 16.0,
            reflection_factor,
        })
    }

    fn sphere_at(center: Point3, radius: f64) -> Geometry {
        Geometry::Sphere {
            center,
            radius,
            material: matte(0.0),
        }
    }

    #[test]
    fn test_hit_returns_nearest_object() {
        let mut scene = Scene::new();
        scene.add(sphere_at(Point3::new(0.0, 0.0, -10.0), 1.0));
        scene.add(sphere_at(Point3::new(0.0, 0.0, -5.0), 1.0));
        scene.add(sphere_at(Point3::new(0.0, 0.0, -20.0), 1.0));

        let ray = Ray::new(Point3::zero(), Vec3::new(0.0, 0.0, -1.0));
        let rec = scene.hit(&ray, Interval::positive()).unwrap();
        assert!((rec.t - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_hit_misses_empty_scene() {
        let scene = Scene::new();
        let ray = Ray::new(Point3::zero(), Vec3::new(0.0, 0.0, -1.0));
        assert!(scene.hit(&ray, Interval::positive()).is_none());
    }

    #[test]
    fn test_is_shadowed_with_occluder_between_point_and_light() {
        let mut scene = Scene::new();
        // occluder straight above the queried point
        scene.add(sphere_at(Point3::new(0.0, 2.0, 0.0), 0.5));
        let light_dir = Vec3::new(0.0, 1.0, 0.0);
        assert!(scene.is_shadowed(Point3::zero(), light_dir));
        // a point off to the side sees the light
        assert!(!scene.is_shadowed(Point3::new(3.0, 0.0, 0.0), light_dir));
    }

    #[test]
    fn test_is_shadowed_ignores_occluders_behind_the_point() {
        let mut scene = Scene::new();
        scene.add(sphere_at(Point3::new(0.0, -2.0, 0.0), 0.5));
        assert!(!scene.is_shadowed(Point3::zero(), Vec3::new(0.0, 1.0, 0.0)));
    }

    #[test]
    fn test_light_direction_is_stored_normalized() {
        let mut scene = Scene::new();
        scene.set_light_direction(Vec3::new(3.0, 4.0, 0.0));
        assert!((scene.light_direction().len() - 1.0).abs() < 1e-12);
        assert!((scene.light_direction().x - 0.6).abs() < 1e-12);
    }
}
