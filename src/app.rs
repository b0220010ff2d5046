use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, preview};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct RustyLensApp {
    pub state: AppState,
    /// Whether the first-frame preview refresh has run.
    initialized: bool,
}

impl Default for RustyLensApp {
    fn default() -> Self {
        Self {
            state: AppState::default(),
            initialized: false,
        }
    }
}

impl eframe::App for RustyLensApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Filter the bundled sample once at startup, so the preview is never
        // blank. Needs the context for the texture upload, hence here rather
        // than in AppState::default.
        if !self.initialized {
            self.state.refresh_output(ctx);
            self.initialized = true;
        }

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filter list ----
        egui::SidePanel::left("filter_panel")
            .default_width(180.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: circular preview ----
        egui::CentralPanel::default().show(ctx, |ui| {
            preview::photo_preview(ui, &self.state);
        });
    }
}
