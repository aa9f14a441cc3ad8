use std::io::{self, Write};

use log::warn;
use rayon::prelude::*;

use super::math::{Color, Interval, Point3, Ray, Vec3};
use super::ppm;
use super::scene::Scene;

/// Upper bound on reflection bounces per pixel.
const MAX_DEPTH: u32 = 3;
/// Reflection contributions below this are dropped.
const MIN_CONTRIBUTION: f64 = 1e-8;
/// Offset along the normal for reflected ray origins, prevents a bounced
/// ray from re-hitting the surface it left (shadow acne).
const REFLECTION_BIAS: f64 = 1e-4;

pub struct Camera {
    /// Ratio of image width over height.
    pub aspect_ratio: f64,
    /// Rendered image width in pixel count.
    pub image_width: u32,
    /// Camera position.
    pub look_from: Point3,
    /// Camera target.
    pub look_at: Point3,
    /// 'up' direction.
    pub look_up: Vec3,
    /// Vertical field of view (degrees).
    pub vfov: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Camera {
            aspect_ratio: 1.0,
            image_width: 500,
            look_from: Point3::zero(),
            look_at: Point3::zero(),
            look_up: Vec3::new(0.0, 1.0, 0.0),
            vfov: 90.0,
        }
    }
}

/// Viewport state derived from the camera configuration, rebuilt once per
/// render call.
struct Viewport {
    image_height: u32,
    pixel00_loc: Point3,
    pixel_delta_u: Vec3,
    pixel_delta_v: Vec3,
}

/// A rendered pixel buffer in raster order (rows top to bottom, columns
/// left to right).
pub struct Image {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl Camera {
    fn initialize(&self) -> Viewport {
        let image_height = ((self.image_width as f64 / self.aspect_ratio) as u32).max(1);

        let mut look_up = self.look_up;
        let backward = (self.look_from - self.look_at).normalize();
        if look_up.normalize().dot(backward).abs() > 0.9999 {
            warn!("look up is almost parallel to the view direction, falling back to +y");
            look_up = Vec3::new(0.0, 1.0, 0.0);
        }

        // orthonormal camera basis
        let w = backward;
        let u = look_up.cross(w).normalize();
        let v = w.cross(u);

        // viewport dimensions at unit focal length
        let focal_length = 1.0;
        let h = (self.vfov.to_radians() / 2.0).tan();
        let viewport_height = 2.0 * h;
        let viewport_width = viewport_height * (self.image_width as f64 / image_height as f64);

        // vectors across the horizontal and down the vertical viewport edges
        let viewport_u = u * viewport_width;
        let viewport_v = -v * viewport_height;

        let pixel_delta_u = viewport_u / self.image_width as f64;
        let pixel_delta_v = viewport_v / image_height as f64;

        // the top-left pixel sits half a pixel in from the viewport corner
        let viewport_upper_left =
            self.look_from - w * focal_length - viewport_u / 2.0 - viewport_v / 2.0;
        let pixel00_loc = viewport_upper_left + (pixel_delta_u + pixel_delta_v) * 0.5;

        Viewport {
            image_height,
            pixel00_loc,
            pixel_delta_u,
            pixel_delta_v,
        }
    }

    fn primary_ray(&self, viewport: &Viewport, i: u32, j: u32) -> Ray {
        let pixel_center = viewport.pixel00_loc
            + viewport.pixel_delta_u * i as f64
            + viewport.pixel_delta_v * j as f64;
        Ray::new(self.look_from, pixel_center - self.look_from)
    }

    /// Renders the scene into a pixel buffer, one scanline per rayon task.
    /// Pixels are independent of each other, only the buffer layout keeps
    /// them in raster order for the sequential write that follows.
    pub fn render_pixels(&self, scene: &Scene) -> Image {
        let viewport = self.initialize();
        let width = self.image_width;
        let height = viewport.image_height;

        let mut pixels = vec![Color::zero(); (width * height) as usize];
        pixels
            .par_chunks_mut(width as usize)
            .enumerate()
            .for_each(|(j, row)| {
                for (i, pixel) in row.iter_mut().enumerate() {
                    let ray = self.primary_ray(&viewport, i as u32, j as u32);
                    *pixel = trace(scene, &ray);
                }
            });

        Image {
            width,
            height,
            pixels,
        }
    }

    /// Renders the scene and serializes it to the destination as plain-text
    /// P3, header first, then one pixel per line in raster order.
    pub fn render(&self, scene: &Scene, out: &mut dyn Write) -> io::Result<()> {
        let image = self.render_pixels(scene);
        ppm::write_image(out, &image)
    }
}

/// Color seen along a ray: direct Phong shading at the nearest hit plus
/// attenuated mirror reflections, evaluated iteratively instead of
/// recursively so the cost per pixel stays bounded.
pub fn trace(scene: &Scene, ray: &Ray) -> Color {
    let mut final_color = Color::zero();
    let mut reflection_factor = 1.0;
    let mut current_ray = ray.clone();

    for _ in 0..MAX_DEPTH {
        let Some(rec) = scene.hit(&current_ray, Interval::positive()) else {
            final_color += scene.background_color() * reflection_factor;
            break;
        };

        let local_color = if scene.is_shadowed(rec.p, scene.light_direction()) {
            rec.material
                .compute_shadow_color(scene.light_color(), scene.ambient_light())
        } else {
            rec.material.compute_color(
                scene.light_direction(),
                scene.ambient_light(),
                scene.light_color(),
                (-current_ray.direction).normalize(),
                rec.normal,
            )
        };
        final_color += local_color * reflection_factor;

        let reflect_dir = current_ray.direction.reflect(rec.normal);
        current_ray = Ray::new(rec.p + rec.normal * REFLECTION_BIAS, reflect_dir);

        reflection_factor *= rec.material.reflection_factor;
        if reflection_factor < MIN_CONTRIBUTION {
            break;
        }
    }

    final_color
}
