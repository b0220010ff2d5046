use image::RgbaImage;

use super::FilterResult;

// ---------------------------------------------------------------------------
// Effect – the engine handle
// ---------------------------------------------------------------------------

/// An engine handle: transforms pixel data in place according to one named
/// effect. Handles are constructed fresh per lookup and borrowed for a
/// single application; they hold no mutable state.
pub trait Effect: std::fmt::Debug {
    fn apply(&self, image: &mut RgbaImage) -> FilterResult<()>;
}

// ---------------------------------------------------------------------------
// Sepia
// ---------------------------------------------------------------------------

/// Sepia tone: the classic warm-brown channel remap, blended with the
/// original pixel by `intensity` (0.0 = untouched, 1.0 = full sepia).
#[derive(Debug, Clone)]
pub struct SepiaEffect {
    pub intensity: f32,
}

impl Default for SepiaEffect {
    fn default() -> Self {
        Self { intensity: 1.0 }
    }
}

impl Effect for SepiaEffect {
    fn apply(&self, image: &mut RgbaImage) -> FilterResult<()> {
        let intensity = self.intensity.clamp(0.0, 1.0);

        for pixel in image.pixels_mut() {
            let r = pixel[0] as f32;
            let g = pixel[1] as f32;
            let b = pixel[2] as f32;

            let tr = (0.393 * r + 0.769 * g + 0.189 * b).min(255.0);
            let tg = (0.349 * r + 0.686 * g + 0.168 * b).min(255.0);
            let tb = (0.272 * r + 0.534 * g + 0.131 * b).min(255.0);

            pixel[0] = (r * (1.0 - intensity) + tr * intensity) as u8;
            pixel[1] = (g * (1.0 - intensity) + tg * intensity) as u8;
            pixel[2] = (b * (1.0 - intensity) + tb * intensity) as u8;
        }

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Vignette
// ---------------------------------------------------------------------------

/// Vignette: radial darkening that starts at `radius` (fraction of the
/// center-to-corner distance) and reaches `strength` at the corners.
#[derive(Debug, Clone)]
pub struct VignetteEffect {
    pub strength: f32,
    pub radius: f32,
}

impl Default for VignetteEffect {
    fn default() -> Self {
        Self {
            strength: 0.8,
            radius: 0.5,
        }
    }
}

impl Effect for VignetteEffect {
    fn apply(&self, image: &mut RgbaImage) -> FilterResult<()> {
        let center_x = image.width() as f32 / 2.0;
        let center_y = image.height() as f32 / 2.0;
        let max_distance = (center_x * center_x + center_y * center_y).sqrt();

        let strength = self.strength.clamp(0.0, 1.0);
        let radius = self.radius.clamp(0.0, 0.99);

        for (y, row) in image.rows_mut().enumerate() {
            for (x, pixel) in row.enumerate() {
                let dx = x as f32 - center_x;
                let dy = y as f32 - center_y;
                let distance = (dx * dx + dy * dy).sqrt();

                let normalized = distance / max_distance;
                let falloff = ((normalized - radius) / (1.0 - radius)).clamp(0.0, 1.0);
                let factor = 1.0 - falloff * strength;

                pixel[0] = (pixel[0] as f32 * factor) as u8;
                pixel[1] = (pixel[1] as f32 * factor) as u8;
                pixel[2] = (pixel[2] as f32 * factor) as u8;
            }
        }

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Noir
// ---------------------------------------------------------------------------

/// High-contrast black and white: luminance grayscale with a mild contrast
/// boost around mid-gray.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoirEffect;

/// Slope of the contrast curve applied after the grayscale conversion.
const NOIR_CONTRAST: f32 = 1.25;

impl Effect for NoirEffect {
    fn apply(&self, image: &mut RgbaImage) -> FilterResult<()> {
        for pixel in image.pixels_mut() {
            // Human perception: 0.299*R + 0.587*G + 0.114*B
            let luma = 0.299 * pixel[0] as f32
                + 0.587 * pixel[1] as f32
                + 0.114 * pixel[2] as f32;

            let boosted = ((luma / 255.0 - 0.5) * NOIR_CONTRAST + 0.5) * 255.0;
            let gray = boosted.clamp(0.0, 255.0) as u8;

            pixel[0] = gray;
            pixel[1] = gray;
            pixel[2] = gray;
        }

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn solid(width: u32, height: u32, color: [u8; 4]) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba(color))
    }

    #[test]
    fn sepia_remaps_pure_red() {
        let mut img = solid(2, 2, [255, 0, 0, 255]);
        SepiaEffect::default().apply(&mut img).unwrap();

        // 0.393/0.349/0.272 of 255 at full intensity.
        assert_eq!(img.get_pixel(0, 0), &Rgba([100, 88, 69, 255]));
    }

    #[test]
    fn sepia_keeps_warm_channel_order() {
        let mut img = solid(2, 2, [200, 40, 90, 255]);
        SepiaEffect::default().apply(&mut img).unwrap();

        let p = img.get_pixel(1, 1);
        assert!(p[0] >= p[1] && p[1] >= p[2], "not warm-toned: {p:?}");
    }

    #[test]
    fn sepia_zero_intensity_is_identity() {
        let mut img = solid(3, 3, [12, 210, 77, 255]);
        let original = img.clone();
        SepiaEffect { intensity: 0.0 }.apply(&mut img).unwrap();
        assert_eq!(img, original);
    }

    #[test]
    fn vignette_darkens_corners_not_center() {
        let mut img = solid(9, 9, [200, 200, 200, 255]);
        VignetteEffect::default().apply(&mut img).unwrap();

        let corner = img.get_pixel(0, 0);
        let center = img.get_pixel(4, 4);
        assert_eq!(center[0], 200, "center must stay untouched");
        assert!(corner[0] < center[0], "corner {corner:?} not darkened");
    }

    #[test]
    fn noir_output_is_grayscale() {
        let mut img = solid(2, 2, [255, 0, 0, 255]);
        NoirEffect.apply(&mut img).unwrap();

        for pixel in img.pixels() {
            assert_eq!(pixel[0], pixel[1]);
            assert_eq!(pixel[1], pixel[2]);
        }
    }

    #[test]
    fn effects_preserve_alpha() {
        for effect in [
            Box::new(SepiaEffect::default()) as Box<dyn Effect>,
            Box::new(VignetteEffect::default()),
            Box::new(NoirEffect),
        ] {
            let mut img = solid(4, 4, [10, 20, 30, 128]);
            effect.apply(&mut img).unwrap();
            assert!(img.pixels().all(|p| p[3] == 128));
        }
    }
}
