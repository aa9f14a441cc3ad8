//! Plain-text P3 serialization: one "r g b" line per pixel in raster order.

use std::io::{self, Write};

use super::camera::Image;
use super::math::Color;

pub fn write_image(out: &mut dyn Write, image: &Image) -> io::Result<()> {
    write_header(out, image.width, image.height)?;
    for pixel in &image.pixels {
        write_color(out, *pixel)?;
    }
    Ok(())
}

pub fn write_header(out: &mut dyn Write, width: u32, height: u32) -> io::Result<()> {
    writeln!(out, "P3")?;
    writeln!(out, "{} {}", width, height)?;
    writeln!(out, "255")
}

/// Translates [0, 1] channels to [0, 255]. The conversion truncates and
/// does not re-clamp: shading already clamps per bounce, and accumulated
/// colors past 1.0 are written as-is.
pub fn write_color(out: &mut dyn Write, pixel_color: Color) -> io::Result<()> {
    let rbyte = (255.999 * pixel_color.x) as i32;
    let gbyte = (255.999 * pixel_color.y) as i32;
    let bbyte = (255.999 * pixel_color.z) as i32;
    writeln!(out, "{} {} {}", rbyte, gbyte, bbyte)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color_line(color: Color) -> String {
        let mut buffer = Vec::new();
        write_color(&mut buffer, color).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_header_layout() {
        let mut buffer = Vec::new();
        write_header(&mut buffer, 400, 225).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "P3\n400 225\n255\n");
    }

    #[test]
    fn test_channel_conversion_truncates() {
        assert_eq!(color_line(Color::new(0.2, 0.2, 0.2)), "51 51 51\n");
        assert_eq!(color_line(Color::new(0.0, 0.5, 1.0)), "0 127 255\n");
        // 255.999 * 0.999 = 255.743..., still truncates to 255
        assert_eq!(color_line(Color::new(0.999, 0.999, 0.999)), "255 255 255\n");
    }

    #[test]
    fn test_full_image() {
        let image = Image {
            width: 2,
            height: 1,
            pixels: vec![Color::zero(), Color::new(1.0, 0.0, 0.2)],
        };
        let mut buffer = Vec::new();
        write_image(&mut buffer, &image).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "P3\n2 1\n255\n0 0 0\n255 0 51\n"
        );
    }
}
