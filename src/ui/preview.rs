use eframe::egui::{self, Pos2, Rect, Ui, Vec2};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Circular photo preview (central panel)
// ---------------------------------------------------------------------------

/// Diameter of the circular preview, in points.
const PREVIEW_SIZE: f32 = 240.0;

/// Render the filtered photo in the central panel, cropped to a circle.
pub fn photo_preview(ui: &mut Ui, state: &AppState) {
    let texture = match &state.output_texture {
        Some(tex) => tex,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a photo to get started  (File → Open…)");
            });
            return;
        }
    };

    ui.vertical_centered(|ui: &mut Ui| {
        let top_gap = ((ui.available_height() - PREVIEW_SIZE) / 2.0).max(0.0);
        ui.add_space(top_gap);

        ui.add(
            egui::Image::new(texture)
                .uv(center_square_uv(texture.size_vec2()))
                .fit_to_exact_size(Vec2::splat(PREVIEW_SIZE))
                .corner_radius(PREVIEW_SIZE / 2.0),
        );
    });
}

/// UV rect selecting the centered square of a texture, so non-square photos
/// fill the circle instead of letterboxing inside it.
fn center_square_uv(tex_size: Vec2) -> Rect {
    if tex_size.x <= 0.0 || tex_size.y <= 0.0 {
        return Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0));
    }

    let side = tex_size.x.min(tex_size.y);
    let half = Vec2::new(side / tex_size.x, side / tex_size.y) / 2.0;
    let center = Pos2::new(0.5, 0.5);

    Rect::from_min_max(center - half, center + half)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_texture_uses_full_uv() {
        let uv = center_square_uv(Vec2::new(480.0, 480.0));
        assert_eq!(uv, Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)));
    }

    #[test]
    fn wide_texture_crops_horizontally() {
        let uv = center_square_uv(Vec2::new(400.0, 200.0));
        assert_eq!(uv.min, Pos2::new(0.25, 0.0));
        assert_eq!(uv.max, Pos2::new(0.75, 1.0));
    }

    #[test]
    fn tall_texture_crops_vertically() {
        let uv = center_square_uv(Vec2::new(200.0, 400.0));
        assert_eq!(uv.min, Pos2::new(0.0, 0.25));
        assert_eq!(uv.max, Pos2::new(1.0, 0.75));
    }
}
