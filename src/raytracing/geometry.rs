use std::sync::Arc;

use super::material::Material;
use super::math::{Interval, Point3, Ray, Vec3};

/// A ray is parallel to a triangle when the determinant drops below this.
const EPSILON: f64 = 1e-8;

/// A successful ray/geometry intersection. The normal always points
/// against the incoming ray; front_face records which side was hit.
pub struct HitRecord<'a> {
    pub p: Point3,
    pub normal: Vec3,
    pub t: f64,
    pub front_face: bool,
    pub material: &'a Material,
}

impl<'a> HitRecord<'a> {
    /// Builds a record from an outward unit normal, flipping it when the
    /// ray approaches from the inner side.
    fn new(ray: &Ray, t: f64, outward_normal: Vec3, material: &'a Material) -> HitRecord<'a> {
        let front_face = ray.direction.dot(outward_normal) < 0.0;
        HitRecord {
            p: ray.at(t),
            normal: if front_face {
                outward_normal
            } else {
                -outward_normal
            },
            t,
            front_face,
            material,
        }
    }
}

/// The primitive kinds the renderer understands. Adding a variant extends
/// the renderer without touching the search or shading code.
#[derive(Debug)]
pub enum Geometry {
    Sphere {
        center: Point3,
        radius: f64,
        material: Arc<Material>,
    },
    Triangle {
        a: Point3,
        b: Point3,
        c: Point3,
        material: Arc<Material>,
    },
}

impl Geometry {
    pub fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        match self {
            Geometry::Sphere {
                center,
                radius,
                material,
            } => hit_sphere(ray, ray_t, *center, *radius, material),
            Geometry::Triangle { a, b, c, material } => {
                hit_triangle(ray, ray_t, *a, *b, *c, material)
            }
        }
    }
}

fn hit_sphere<'a>(
    ray: &Ray,
    ray_t: Interval,
    center: Point3,
    radius: f64,
    material: &'a Material,
) -> Option<HitRecord<'a>> {
    let oc = ray.origin - center;
    let a = ray.direction.dot(ray.direction);
    let b = 2.0 * oc.dot(ray.direction);
    let c = oc.dot(oc) - radius * radius;
    let discriminant = b * b - 4.0 * a * c;

    if discriminant < 0.0 {
        return None;
    }

    // prefer the nearer root, fall back to the far one when the
    // near root sits outside the search range (origin inside the sphere)
    let sqrt_d = discriminant.sqrt();
    let mut t = (-b - sqrt_d) / (2.0 * a);
    if !ray_t.surrounds(t) {
        t = (-b + sqrt_d) / (2.0 * a);
        if !ray_t.surrounds(t) {
            return None;
        }
    }

    let outward_normal = (ray.at(t) - center).normalize();
    Some(HitRecord::new(ray, t, outward_normal, material))
}

fn hit_triangle<'a>(
    ray: &Ray,
    ray_t: Interval,
    a: Point3,
    b: Point3,
    c: Point3,
    material: &'a Material,
) -> Option<HitRecord<'a>> {
    // https://en.wikipedia.org/wiki/M%C3%B6ller%E2%80%93Trumbore_intersection_algorithm
    let edge_1 = b - a;
    let edge_2 = c - a;

    let p_vec = ray.direction.cross(edge_2);
    let det = edge_1.dot(p_vec);
    // covers rays parallel to the plane and zero-area triangles
    if det.abs() < EPSILON {
        return None;
    }

    let t_vec = ray.origin - a;
    let u = t_vec.dot(p_vec) / det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q_vec = t_vec.cross(edge_1);
    let v = ray.direction.dot(q_vec) / det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = edge_2.dot(q_vec) / det;
    if !ray_t.surrounds(t) {
        return None;
    }

    let mut normal = edge_1.cross(edge_2);
    if det < 0.0 {
        normal = -normal;
    }
    Some(HitRecord::new(ray, t, normal.normalize(), material))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raytracing::math::Color;

    fn flat_material() -> Arc<Material> {
        Arc::new(Material {
            ambient_coef: 0.1,
            diffuse_coef: 0.7,
            specular_coef: 0.2,
            diffuse_color: Color::new(1.0, 0.0, 0.0),
            specular_color: Color::new(1.0, 1.0, 1.0),
            glossiness: 16.0,
            reflection_factor: 0.0,
        })
    }

    #[test]
    fn test_sphere_hit_head_on() {
        let sphere = Geometry::Sphere {
            center: Point3::new(0.0, 0.0, -3.0),
            radius: 1.0,
            material: flat_material(),
        };
        let ray = Ray::new(Point3::zero(), Vec3::new(0.0, 0.0, -1.0));
        let rec = sphere.hit(&ray, Interval::positive()).unwrap();
        // two real roots at distance-to-center ± radius, the nearer wins
        assert!((rec.t - 2.0).abs() < 1e-12);
        assert_eq!(rec.p, Point3::new(0.0, 0.0, -2.0));
        assert!(rec.front_face);
        assert!(rec.normal.dot(ray.direction) <= 0.0);
        assert!((rec.normal.len() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_sphere_hit_from_inside_takes_far_root() {
        let sphere = Geometry::Sphere {
            center: Point3::zero(),
            radius: 1.0,
            material: flat_material(),
        };
        let ray = Ray::new(Point3::zero(), Vec3::new(0.0, 0.0, -1.0));
        let rec = sphere.hit(&ray, Interval::positive()).unwrap();
        assert!((rec.t - 1.0).abs() < 1e-12);
        // inner hit: the stored normal is flipped to oppose the ray
        assert!(!rec.front_face);
        assert!(rec.normal.dot(ray.direction) <= 0.0);
    }

    #[test]
    fn test_sphere_miss_when_closest_approach_exceeds_radius() {
        let sphere = Geometry::Sphere {
            center: Point3::new(0.0, 2.0, -3.0),
            radius: 1.0,
            material: flat_material(),
        };
        let ray = Ray::new(Point3::zero(), Vec3::new(0.0, 0.0, -1.0));
        assert!(sphere.hit(&ray, Interval::positive()).is_none());
    }

    #[test]
    fn test_sphere_miss_when_interval_excludes_both_roots() {
        let sphere = Geometry::Sphere {
            center: Point3::new(0.0, 0.0, -3.0),
            radius: 1.0,
            material: flat_material(),
        };
        let ray = Ray::new(Point3::zero(), Vec3::new(0.0, 0.0, -1.0));
        assert!(sphere.hit(&ray, Interval::new(0.0, 1.5)).is_none());
    }

    fn unit_triangle() -> Geometry {
        Geometry::Triangle {
            a: Point3::new(-1.0, -1.0, -2.0),
            b: Point3::new(1.0, -1.0, -2.0),
            c: Point3::new(0.0, 1.0, -2.0),
            material: flat_material(),
        }
    }

    #[test]
    fn test_triangle_hit_inside() {
        let triangle = unit_triangle();
        let ray = Ray::new(Point3::zero(), Vec3::new(0.0, 0.0, -1.0));
        let rec = triangle.hit(&ray, Interval::positive()).unwrap();
        assert!((rec.t - 2.0).abs() < 1e-12);
        assert!(rec.normal.dot(ray.direction) <= 0.0);
        assert!((rec.normal.len() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_triangle_miss_outside_edges() {
        let triangle = unit_triangle();
        let ray = Ray::new(Point3::new(2.0, 0.0, 0.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(triangle.hit(&ray, Interval::positive()).is_none());
    }

    #[test]
    fn test_triangle_parallel_ray_misses() {
        let triangle = unit_triangle();
        // travels inside the triangle's plane
        let ray = Ray::new(Point3::new(-5.0, 0.0, -2.0), Vec3::new(1.0, 0.0, 0.0));
        assert!(triangle.hit(&ray, Interval::positive()).is_none());
    }

    #[test]
    fn test_triangle_normal_opposes_ray_from_either_side() {
        let triangle = unit_triangle();
        let from_front = Ray::new(Point3::zero(), Vec3::new(0.0, 0.0, -1.0));
        let from_back = Ray::new(Point3::new(0.0, 0.0, -4.0), Vec3::new(0.0, 0.0, 1.0));
        let front_rec = triangle.hit(&from_front, Interval::positive()).unwrap();
        let back_rec = triangle.hit(&from_back, Interval::positive()).unwrap();
        assert!(front_rec.normal.dot(from_front.direction) <= 0.0);
        assert!(back_rec.normal.dot(from_back.direction) <= 0.0);
    }
}
