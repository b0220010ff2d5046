use std::path::Path;

use anyhow::{bail, Context, Result};
use image::{Rgba, RgbaImage};
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Loading photos from disk
// ---------------------------------------------------------------------------

/// Load a photo from a file. Dispatch by extension.
///
/// Supported formats:
/// * `.png`
/// * `.jpg` / `.jpeg`
pub fn load_photo(path: &Path) -> Result<RgbaImage> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "png" | "jpg" | "jpeg" => {}
        other => bail!("Unsupported file extension: .{other}"),
    }

    let img = image::open(path)
        .with_context(|| format!("decoding {}", path.display()))?;

    Ok(img.to_rgba8())
}

// ---------------------------------------------------------------------------
// Built-in sample photo
// ---------------------------------------------------------------------------

/// Side length of the generated sample photo.
pub const SAMPLE_SIZE: u32 = 480;

/// The photo shown before the user opens anything: a horizontal hue sweep
/// crossed with a vertical lightness ramp. Deterministic, so the startup
/// preview always looks the same.
pub fn sample_photo() -> RgbaImage {
    RgbaImage::from_fn(SAMPLE_SIZE, SAMPLE_SIZE, |x, y| {
        let hue = (x as f32 / SAMPLE_SIZE as f32) * 360.0;
        let lightness = 0.25 + 0.5 * (y as f32 / SAMPLE_SIZE as f32);
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

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_extension_is_rejected() {
        let err = load_photo(Path::new("notes.txt")).unwrap_err();
        assert!(err.to_string().contains(".txt"), "unexpected error: {err}");
    }

    #[test]
    fn missing_extension_is_rejected() {
        assert!(load_photo(Path::new("photo")).is_err());
    }

    #[test]
    fn sample_photo_is_square_and_opaque() {
        let img = sample_photo();
        assert_eq!(img.dimensions(), (SAMPLE_SIZE, SAMPLE_SIZE));
        assert!(img.pixels().all(|p| p[3] == 255));
    }

    #[test]
    fn sample_photo_is_deterministic() {
        assert_eq!(sample_photo(), sample_photo());
    }
}
