//! The built-in demo scenes. Pure authoring glue: every value here is a
//! literal fed into the core types.

use std::sync::Arc;

use crate::raytracing::camera::Camera;
use crate::raytracing::geometry::Geometry;
use crate::raytracing::material::Material;
use crate::raytracing::math::{Color, Point3, Vec3};
use crate::raytracing::scene::Scene;

#[allow(clippy::too_many_arguments)]
fn sphere(
    center: Point3,
    radius: f64,
    diffuse: Color,
    specular: Color,
    glossiness: f64,
    diffuse_coef: f64,
    specular_coef: f64,
    ambient_coef: f64,
    reflection_factor: f64,
) -> Geometry {
    Geometry::Sphere {
        center,
        radius,
        material: Arc::new(Material {
            ambient_coef,
            diffuse_coef,
            specular_coef,
            diffuse_color: diffuse,
            specular_color: specular,
            glossiness,
            reflection_factor,
        }),
    }
}

#[allow(clippy::too_many_arguments)]
fn triangle(
    a: Point3,
    b: Point3,
    c: Point3,
    diffuse: Color,
    specular: Color,
    glossiness: f64,
    diffuse_coef: f64,
    specular_coef: f64,
    ambient_coef: f64,
    reflection_factor: f64,
) -> Geometry {
    Geometry::Triangle {
        a,
        b,
        c,
        material: Arc::new(Material {
            ambient_coef,
            diffuse_coef,
            specular_coef,
            diffuse_color: diffuse,
            specular_color: specular,
            glossiness,
            reflection_factor,
        }),
    }
}

pub fn all() -> Vec<(Scene, Camera)> {
    vec![
        single_magenta_sphere(),
        four_spheres_on_ground(),
        ten_sphere_spread(),
        mirror_over_triangles(),
        still_life(),
        mixed_showcase(),
    ]
}

/// A lone magenta sphere lit from above against a dark gray background.
fn single_magenta_sphere() -> (Scene, Camera) {
    let mut scene = Scene::new();
    scene.set_light_direction(Vec3::new(0.0, 1.0, 0.0));
    scene.set_light_color(Color::new(1.0, 1.0, 1.0));
    scene.set_ambient_light(Color::new(0.0, 0.0, 0.0));
    scene.set_background_color(Color::new(0.2, 0.2, 0.2));

    scene.add(sphere(
        Point3::new(0.0, 0.0, 0.0),
        0.4,
        Color::new(1.0, 0.0, 1.0),
        Color::new(1.0, 1.0, 1.0),
        16.0,
        0.7,
        0.1,
        0.1,
        0.0,
    ));

    let camera = Camera {
        aspect_ratio: 16.0 / 9.0,
        image_width: 400,
        look_from: Point3::new(0.0, 0.0, 1.0),
        look_at: Point3::new(0.0, 0.0, 0.0),
        look_up: Vec3::new(0.0, 1.0, 0.0),
        vfov: 90.0,
    };
    (scene, camera)
}

/// Three colored spheres resting near a huge sphere that acts as the ground.
fn four_spheres_on_ground() -> (Scene, Camera) {
    let mut scene = Scene::new();
    scene.set_light_direction(Vec3::new(1.0, 1.0, 1.0));
    scene.set_light_color(Color::new(1.0, 1.0, 1.0));
    scene.set_ambient_light(Color::new(0.1, 0.1, 0.1));
    scene.set_background_color(Color::new(0.2, 0.2, 0.2));

    let white = Color::new(1.0, 1.0, 1.0);
    scene.add(sphere(
        Point3::new(0.45, 0.0, -0.15),
        0.15,
        white,
        white,
        4.0,
        0.8,
        0.1,
        0.3,
        0.0,
    ));
    scene.add(sphere(
        Point3::new(0.0, 0.0, -0.1),
        0.2,
        Color::new(1.0, 0.0, 0.0),
        white,
        32.0,
        0.6,
        0.3,
        0.1,
        0.0,
    ));
    scene.add(sphere(
        Point3::new(-0.6, 0.0, 0.0),
        0.3,
        Color::new(0.0, 1.0, 0.0),
        Color::new(0.5, 1.0, 0.5),
        64.0,
        0.7,
        0.2,
        0.1,
        0.0,
    ));
    scene.add(sphere(
        Point3::new(0.0, -10000.5, 0.0),
        10000.0,
        Color::new(0.0, 0.0, 1.0),
        white,
        16.0,
        0.9,
        0.0,
        0.1,
        0.0,
    ));

    let camera = Camera {
        aspect_ratio: 16.0 / 9.0,
        image_width: 400,
        look_from: Point3::new(0.0, 0.0, 1.0),
        look_at: Point3::new(0.0, 0.0, 0.0),
        look_up: Vec3::new(0.0, 1.0, 0.0),
        vfov: 90.0,
    };
    (scene, camera)
}

/// Ten spheres of varying size and finish under a light blue sky.
fn ten_sphere_spread() -> (Scene, Camera) {
    let mut scene = Scene::new();
    scene.set_light_direction(Vec3::new(1.0, 1.0, 1.0));
    scene.set_light_color(Color::new(1.0, 1.0, 1.0));
    scene.set_ambient_light(Color::new(0.1, 0.1, 0.1));
    scene.set_background_color(Color::new(0.5, 0.7, 1.0));

    let white = Color::new(1.0, 1.0, 1.0);
    scene.add(sphere(
        Point3::new(-0.5, -0.3, -0.5),
        0.2,
        Color::new(1.0, 0.0, 0.0),
        white,
        32.0,
        0.6,
        0.3,
        0.1,
        0.1,
    ));
    scene.add(sphere(
        Point3::new(0.3, -0.2, -0.3),
        0.15,
        Color::new(0.0, 1.0, 0.0),
        Color::new(0.5, 1.0, 0.5),
        64.0,
        0.7,
        0.2,
        0.1,
        0.1,
    ));
    scene.add(sphere(
        Point3::new(-0.2, 0.2, -0.4),
        0.25,
        Color::new(0.0, 0.0, 1.0),
        white,
        16.0,
        0.9,
        0.0,
        0.1,
        0.1,
    ));
    scene.add(sphere(
        Point3::new(0.6, 0.1, -0.6),
        0.1,
        Color::new(1.0, 1.0, 0.0),
        white,
        8.0,
        0.8,
        0.1,
        0.2,
        0.1,
    ));
    scene.add(sphere(
        Point3::new(-0.7, 0.3, -0.2),
        0.18,
        Color::new(1.0, 0.5, 0.0),
        white,
        40.0,
        0.5,
        0.4,
        0.1,
        0.1,
    ));
    scene.add(sphere(
        Point3::new(0.4, -0.4, -0.1),
        0.22,
        Color::new(1.0, 0.0, 1.0),
        white,
        25.0,
        0.6,
        0.3,
        0.1,
        0.1,
    ));
    scene.add(sphere(
        Point3::new(-0.3, -0.1, -0.7),
        0.12,
        Color::new(0.0, 1.0, 1.0),
        white,
        20.0,
        0.7,
        0.2,
        0.1,
        0.1,
    ));
    scene.add(sphere(
        Point3::new(0.1, 0.5, -0.5),
        0.3,
        Color::new(0.5, 0.5, 0.5),
        white,
        10.0,
        0.8,
        0.1,
        0.3,
        0.1,
    ));
    scene.add(sphere(
        Point3::new(-0.8, -0.5, -0.8),
        0.28,
        Color::new(0.9, 0.2, 0.5),
        white,
        50.0,
        0.6,
        0.3,
        0.1,
        0.1,
    ));
    scene.add(sphere(
        Point3::new(0.7, -0.1, -0.9),
        0.2,
        Color::new(0.2, 0.2, 0.2),
        white,
        5.0,
        0.9,
        0.05,
        0.05,
        0.1,
    ));

    let camera = Camera {
        aspect_ratio: 16.0 / 9.0,
        image_width: 400,
        look_from: Point3::new(0.0, 0.0, 1.5),
        look_at: Point3::new(0.0, 0.0, 0.0),
        look_up: Vec3::new(0.0, 1.0, 0.0),
        vfov: 90.0,
    };
    (scene, camera)
}

/// A highly reflective sphere hovering over two tilted triangles.
fn mirror_over_triangles() -> (Scene, Camera) {
    let mut scene = Scene::new();
    scene.set_light_direction(Vec3::new(0.0, 1.0, 0.0));
    scene.set_light_color(Color::new(1.0, 1.0, 1.0));
    scene.set_ambient_light(Color::new(0.0, 0.0, 0.0));
    scene.set_background_color(Color::new(0.2, 0.2, 0.2));

    let white = Color::new(1.0, 1.0, 1.0);
    scene.add(sphere(
        Point3::new(0.0, 0.3, -1.0),
        0.25,
        Color::new(0.75, 0.75, 0.75),
        white,
        10.0,
        0.0,
        0.1,
        0.1,
        0.9,
    ));
    scene.add(triangle(
        Point3::new(0.0, -0.7, -0.5),
        Point3::new(1.0, 0.4, -1.0),
        Point3::new(0.0, -0.7, -1.5),
        Color::new(0.0, 0.0, 1.0),
        white,
        4.0,
        0.9,
        1.0,
        0.1,
        0.0,
    ));
    scene.add(triangle(
        Point3::new(0.0, -0.7, -0.5),
        Point3::new(0.0, -0.7, -1.5),
        Point3::new(-1.0, 0.4, -1.0),
        Color::new(1.0, 1.0, 0.0),
        white,
        4.0,
        0.9,
        1.0,
        0.1,
        0.0,
    ));

    let camera = Camera {
        aspect_ratio: 1.0,
        image_width: 400,
        look_from: Point3::new(0.0, 0.0, 1.0),
        look_at: Point3::new(0.0, 0.0, 0.0),
        look_up: Vec3::new(0.0, 1.0, 0.0),
        vfov: 90.0,
    };
    (scene, camera)
}

/// Spheres and triangles around a mirror ball, lit from the side.
fn still_life() -> (Scene, Camera) {
    let mut scene = Scene::new();
    scene.set_light_direction(Vec3::new(1.0, 0.0, 0.0));
    scene.set_light_color(Color::new(1.0, 1.0, 1.0));
    scene.set_ambient_light(Color::new(0.1, 0.1, 0.1));
    scene.set_background_color(Color::new(0.2, 0.2, 0.2));

    let white = Color::new(1.0, 1.0, 1.0);
    scene.add(sphere(
        Point3::new(0.5, 0.0, -0.15),
        0.05,
        white,
        white,
        4.0,
        0.8,
        0.1,
        0.3,
        0.0,
    ));
    scene.add(sphere(
        Point3::new(0.3, 0.0, -0.1),
        0.08,
        Color::new(1.0, 0.0, 0.0),
        Color::new(0.5, 1.0, 0.5),
        32.0,
        0.8,
        0.8,
        0.1,
        0.0,
    ));
    scene.add(sphere(
        Point3::new(-0.6, 0.0, 0.0),
        0.3,
        Color::new(0.0, 1.0, 0.0),
        Color::new(0.5, 1.0, 0.5),
        64.0,
        0.7,
        0.5,
        0.1,
        0.0,
    ));
    scene.add(sphere(
        Point3::new(0.1, -0.55, 0.25),
        0.3,
        Color::new(0.75, 0.75, 0.75),
        white,
        10.0,
        0.0,
        0.1,
        0.1,
        0.9,
    ));
    scene.add(triangle(
        Point3::new(0.3, -0.3, -0.4),
        Point3::new(0.0, 0.3, -0.1),
        Point3::new(-0.3, -0.3, 0.2),
        Color::new(0.0, 0.0, 1.0),
        white,
        32.0,
        0.9,
        0.9,
        0.1,
        0.0,
    ));
    scene.add(triangle(
        Point3::new(-0.2, 0.1, 0.1),
        Point3::new(-0.2, -0.5, 0.2),
        Point3::new(-0.2, 0.1, -0.3),
        Color::new(1.0, 1.0, 0.0),
        white,
        4.0,
        0.9,
        0.5,
        0.1,
        0.0,
    ));

    let camera = Camera {
        aspect_ratio: 1.0,
        image_width: 600,
        look_from: Point3::new(0.0, 0.0, 1.0),
        look_at: Point3::new(0.0, 0.0, 0.0),
        look_up: Vec3::new(0.0, 1.0, 0.0),
        vfov: 90.0,
    };
    (scene, camera)
}

/// A larger mix of reflective spheres and triangles under a sky blue
/// background with a tilted sun.
fn mixed_showcase() -> (Scene, Camera) {
    let mut scene = Scene::new();
    scene.set_light_direction(Vec3::new(1.0, -1.0, -0.5));
    scene.set_light_color(Color::new(1.0, 1.0, 1.0));
    scene.set_ambient_light(Color::new(0.1, 0.1, 0.1));
    scene.set_background_color(Color::new(0.53, 0.81, 0.92));

    let white = Color::new(1.0, 1.0, 1.0);
    scene.add(sphere(
        Point3::new(0.5, -0.2, -0.2),
        0.1,
        Color::new(1.0, 0.2, 0.2),
        white,
        32.0,
        0.7,
        0.8,
        0.1,
        0.2,
    ));
    scene.add(sphere(
        Point3::new(-0.4, 0.3, -0.5),
        0.15,
        Color::new(0.2, 1.0, 0.2),
        white,
        16.0,
        0.6,
        0.7,
        0.1,
        0.1,
    ));
    scene.add(sphere(
        Point3::new(-0.1, -0.4, -0.3),
        0.08,
        Color::new(0.2, 0.2, 1.0),
        white,
        64.0,
        0.8,
        0.9,
        0.1,
        0.3,
    ));
    scene.add(sphere(
        Point3::new(0.6, 0.5, -0.8),
        0.2,
        Color::new(1.0, 1.0, 0.0),
        white,
        20.0,
        0.7,
        0.8,
        0.1,
        0.4,
    ));
    scene.add(sphere(
        Point3::new(-0.7, -0.3, 0.1),
        0.12,
        Color::new(1.0, 0.5, 0.0),
        white,
        10.0,
        0.6,
        0.6,
        0.1,
        0.2,
    ));
    scene.add(sphere(
        Point3::new(0.0, 0.6, -0.2),
        0.1,
        Color::new(0.5, 0.0, 0.5),
        white,
        40.0,
        0.5,
        0.5,
        0.1,
        0.1,
    ));
    scene.add(sphere(
        Point3::new(-0.3, -0.2, 0.3),
        0.14,
        Color::new(0.2, 1.0, 1.0),
        white,
        50.0,
        0.9,
        0.9,
        0.1,
        0.5,
    ));
    scene.add(sphere(
        Point3::new(0.3, -0.6, 0.4),
        0.18,
        white,
        white,
        25.0,
        0.8,
        0.9,
        0.1,
        0.6,
    ));
    scene.add(triangle(
        Point3::new(0.3, -0.3, -0.4),
        Point3::new(0.0, 0.3, -0.1),
        Point3::new(-0.3, -0.3, 0.2),
        Color::new(1.0, 0.5, 0.0),
        white,
        32.0,
        0.8,
        0.8,
        0.1,
        0.1,
    ));
    scene.add(triangle(
        Point3::new(-0.5, 0.2, -0.3),
        Point3::new(0.1, -0.2, -0.2),
        Point3::new(0.4, 0.2, -0.1),
        Color::new(0.5, 1.0, 0.5),
        white,
        20.0,
        0.7,
        0.7,
        0.1,
        0.2,
    ));
    scene.add(triangle(
        Point3::new(-0.2, -0.5, 0.2),
        Point3::new(0.2, 0.3, -0.3),
        Point3::new(-0.1, 0.2, -0.2),
        Color::new(0.0, 0.5, 1.0),
        white,
        16.0,
        0.6,
        0.6,
        0.1,
        0.3,
    ));
    scene.add(triangle(
        Point3::new(0.4, -0.4, 0.1),
        Point3::new(-0.1, 0.1, -0.5),
        Point3::new(-0.5, -0.4, -0.1),
        Color::new(1.0, 0.0, 0.5),
        white,
        24.0,
        0.9,
        0.9,
        0.1,
        0.4,
    ));
    scene.add(triangle(
        Point3::new(0.2, 0.5, 0.0),
        Point3::new(-0.2, 0.2, 0.4),
        Point3::new(0.3, -0.1, -0.4),
        Color::new(0.2, 1.0, 0.2),
        white,
        28.0,
        0.8,
        0.8,
        0.1,
        0.2,
    ));

    let camera = Camera {
        aspect_ratio: 1.0,
        image_width: 800,
        look_from: Point3::new(0.0, 0.0, 1.5),
        look_at: Point3::new(0.0, 0.0, 0.0),
        look_up: Vec3::new(0.0, 1.0, 0.0),
        vfov: 75.0,
    };
    (scene, camera)
}
