use eframe::egui::{self, Color32, RichText, Ui};

use crate::filter::catalog;
use crate::photo;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter selector
// ---------------------------------------------------------------------------

/// Render the left filter panel: one entry per catalog filter, in catalog
/// order, with the selected one highlighted.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    if state.input_photo.is_none() {
        ui.label("No photo loaded.");
        ui.add_space(4.0);
    }

    for descriptor in catalog::list() {
        let is_selected = state.selected_filter == descriptor.id;
        if ui
            .selectable_label(is_selected, descriptor.display_name)
            .clicked()
            && !is_selected
        {
            let ctx = ui.ctx().clone();
            state.select_filter(&ctx, descriptor.id);
        }
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_photo_dialog(ui, state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(img) = &state.input_photo {
            ui.label(format!("{}×{} px", img.width(), img.height()));
        }

        ui.separator();

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

/// Let the user pick a photo. Cancelling the dialog changes nothing; a
/// picked file that fails to decode leaves the current photo in place and
/// surfaces the error in the top bar.
pub fn open_photo_dialog(ui: &Ui, state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open photo")
        .add_filter("Photos", &["png", "jpg", "jpeg"])
        .add_filter("PNG", &["png"])
        .add_filter("JPEG", &["jpg", "jpeg"])
        .pick_file();

    if let Some(path) = file {
        match photo::load_photo(&path) {
            Ok(img) => {
                log::info!(
                    "Loaded {}×{} photo from {}",
                    img.width(),
                    img.height(),
                    path.display()
                );
                let ctx = ui.ctx().clone();
                state.set_input_photo(&ctx, img);
            }
            Err(e) => {
                log::error!("Failed to load photo: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
