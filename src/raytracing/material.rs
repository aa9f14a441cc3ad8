use super::math::{Color, Vec3};

/// Phong reflectance parameters of a surface. Materials are built once
/// during scene construction and shared immutably between primitives.
#[derive(Debug, Clone)]
pub struct Material {
    pub ambient_coef: f64,
    pub diffuse_coef: f64,
    pub specular_coef: f64,
    pub diffuse_color: Color,
    pub specular_color: Color,
    /// Shininess exponent of the specular highlight.
    pub glossiness: f64,
    /// Fraction of light carried into the next bounce, in [0, 1].
    pub reflection_factor: f64,
}

fn clamp(c: Color) -> Color {
    Color::new(
        c.x.clamp(0.0, 1.0),
        c.y.clamp(0.0, 1.0),
        c.z.clamp(0.0, 1.0),
    )
}

impl Material {
    /// Full Phong shading: ambient + diffuse + specular, each component
    /// clamped to [0, 1] per channel before the sum is clamped again.
    pub fn compute_color(
        &self,
        light_dir: Vec3,
        ambient_light: Color,
        light_color: Color,
        view_dir: Vec3,
        normal: Vec3,
    ) -> Color {
        let final_color = self.ambient_component(ambient_light, light_color)
            + self.diffuse_component(light_dir, light_color, normal)
            + self.specular_component(light_dir, light_color, view_dir, normal);
        clamp(final_color)
    }

    /// Shading for a point occluded from the light: ambient term only.
    pub fn compute_shadow_color(&self, light_color: Color, ambient_light: Color) -> Color {
        self.ambient_component(ambient_light, light_color)
    }

    fn ambient_component(&self, ambient_light: Color, light_color: Color) -> Color {
        clamp(self.diffuse_color * ambient_light * light_color * self.ambient_coef)
    }

    fn diffuse_component(&self, light_dir: Vec3, light_color: Color, normal: Vec3) -> Color {
        let diff = normal.dot(light_dir).max(0.0);
        clamp(self.diffuse_color * light_color * (self.diffuse_coef * diff))
    }

    fn specular_component(
        &self,
        light_dir: Vec3,
        light_color: Color,
        view_dir: Vec3,
        normal: Vec3,
    ) -> Color {
        let reflect_dir = normal * (2.0 * normal.dot(light_dir)) - light_dir;
        let spec_angle = reflect_dir.normalize().dot(view_dir.normalize()).max(0.0);
        let spec = spec_angle.powf(self.glossiness);
        clamp(self.specular_color * light_color * (self.specular_coef * spec))
    }
}
