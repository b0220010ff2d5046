//! Writes a sample photo to `sample_photo.png`, so there is always a file
//! to open in the viewer. Same gradient as the built-in startup sample.

use image::{Rgba, RgbaImage};
use palette::{Hsl, IntoColor, Srgb};

const SIZE: u32 = 480;

fn gradient_photo(size: u32) -> RgbaImage {
    RgbaImage::from_fn(size, size, |x, y| {
        let hue = (x as f32 / size as f32) * 360.0;
        let lightness = 0.25 + 0.5 * (y as f32 / size as f32);
        let hsl = Hsl::new(hue, 0.85, lightness);
        let rgb: Srgb = hsl.into_color();

        Rgba([
            (rgb.red * 255.0) as u8,
            (rgb.green * 255.0) as u8,
            (rgb.blue * 255.0) as u8,
            255,
        ])
    })
}

fn main() {
    let photo = gradient_photo(SIZE);

    let output_path = "sample_photo.png";
    photo.save(output_path).expect("Failed to write sample photo");

    println!("Wrote {SIZE}×{SIZE} sample photo to {output_path}");
}
