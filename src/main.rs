use std::error::Error;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use clap::Parser;
use image::{ImageBuffer, Rgb};
use log::{error, info};

mod raytracing;
mod scenes;

use raytracing::camera::Image;
use raytracing::math::Vec3;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// render only the scene with this number (1-6), all of them when omitted
    #[arg(short, long)]
    scene: Option<usize>,
    /// the directory where the rendered images are saved
    #[arg(short, long, default_value = ".")]
    output: String,
    /// output file extension: "ppm" writes plain-text P3, any other
    /// extension is encoded through the image crate
    #[arg(short, long, default_value = "ppm")]
    format: String,
}

impl From<Vec3> for Rgb<u8> {
    fn from(value: Vec3) -> Self {
        let r = (value.x * 255.0).min(255.0) as u8;
        let g = (value.y * 255.0).min(255.0) as u8;
        let b = (value.z * 255.0).min(255.0) as u8;
        Rgb([r, g, b])
    }
}

fn save_with_image_crate(image: &Image, path: &Path) -> Result<(), image::ImageError> {
    let mut buffer: ImageBuffer<Rgb<u8>, Vec<u8>> = ImageBuffer::new(image.width, image.height);
    for (x, y, pixel) in buffer.enumerate_pixels_mut() {
        let idx = (x + image.width * y) as usize;
        *pixel = image.pixels[idx].into();
    }
    buffer.save(path)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let worlds = scenes::all();
    if let Some(number) = args.scene {
        if number < 1 || number > worlds.len() {
            return Err(format!("no scene {} (available: 1-{})", number, worlds.len()).into());
        }
    }

    fs::create_dir_all(&args.output)?;

    for (index, (scene, camera)) in worlds.iter().enumerate() {
        let number = index + 1;
        if args.scene.is_some_and(|only| only != number) {
            continue;
        }

        let path = Path::new(&args.output).join(format!("im{}.{}", number, args.format));
        let start = Instant::now();

        if args.format == "ppm" {
            // a destination that cannot be opened skips this scene only
            let file = match File::create(&path) {
                Ok(file) => file,
                Err(io_error) => {
                    error!("could not open {} to write: {}", path.display(), io_error);
                    continue;
                }
            };
            let mut out = BufWriter::new(file);
            camera.render(scene, &mut out)?;
            out.flush()?;
        } else {
            let image = camera.render_pixels(scene);
            if let Err(image_error) = save_with_image_crate(&image, &path) {
                error!("could not save {}: {}", path.display(), image_error);
                continue;
            }
        }

        info!("rendered {} in {:?}", path.display(), start.elapsed());
    }

    Ok(())
}
