use eframe::egui;
use image::RgbaImage;

use crate::filter::{catalog, pipeline, FilterError};
use crate::photo;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Photo currently being filtered (the built-in sample until the user
    /// opens one of their own).
    pub input_photo: Option<RgbaImage>,

    /// Identifier of the selected filter. Always one of `catalog::list()`.
    pub selected_filter: &'static str,

    /// Last successfully rendered output, uploaded as an egui texture.
    pub output_texture: Option<egui::TextureHandle>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            input_photo: Some(photo::sample_photo()),
            selected_filter: catalog::list()[0].id,
            output_texture: None,
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly picked photo and refresh the preview.
    pub fn set_input_photo(&mut self, ctx: &egui::Context, photo: RgbaImage) {
        self.input_photo = Some(photo);
        self.status_message = None;
        self.refresh_output(ctx);
    }

    /// Switch the selected filter and refresh the preview.
    pub fn select_filter(&mut self, ctx: &egui::Context, id: &'static str) {
        self.selected_filter = id;
        self.refresh_output(ctx);
    }

    /// Re-run the pipeline on the current photo and selection.
    ///
    /// On failure the previous output stays on screen: a missing photo is
    /// the normal startup state, and a render failure simply means the
    /// preview does not update.
    pub fn refresh_output(&mut self, ctx: &egui::Context) {
        match pipeline::apply(self.input_photo.as_ref(), self.selected_filter) {
            Ok(output) => {
                let size = [output.width() as usize, output.height() as usize];
                let pixels = egui::ColorImage::from_rgba_unmultiplied(size, output.as_raw());
                self.output_texture = Some(ctx.load_texture(
                    "filtered_photo",
                    pixels,
                    egui::TextureOptions::LINEAR,
                ));
            }
            Err(FilterError::NoInput) => {
                // Nothing loaded yet; keep showing the placeholder.
            }
            Err(FilterError::UnknownFilter(id)) => {
                log::error!("Selected filter {id:?} is not in the catalog");
                self.status_message = Some(format!("Unknown filter: {id}"));
            }
            Err(FilterError::NoOutput) => {
                log::warn!(
                    "Filter {:?} produced no output; keeping previous preview",
                    self.selected_filter
                );
            }
        }
    }
}
