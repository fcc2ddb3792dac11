use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::filter::PayloadRange;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – dashboard controls
// ---------------------------------------------------------------------------

/// Render the launch-site dropdown and the payload range control.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Controls");
    ui.separator();

    // ---- Launch site dropdown ----
    ui.strong("Launch Site");
    let options = state.site_options();
    let current = state.site().clone();
    let selected_text = options
        .iter()
        .find(|(_, value)| *value == current)
        .map(|(label, _)| label.clone())
        .unwrap_or_else(|| "Select a Launch Site".to_string());

    let mut picked = None;
    egui::ComboBox::from_id_salt("site_dropdown")
        .selected_text(selected_text)
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            ui.add(
                egui::TextEdit::singleline(&mut state.site_search)
                    .hint_text("Search sites…")
                    .desired_width(f32::INFINITY),
            );
            for (label, value) in state.searched_site_options() {
                if ui.selectable_label(value == current, label).clicked() {
                    picked = Some(value);
                }
            }
        });
    if let Some(site) = picked {
        state.set_site(site);
    }

    ui.add_space(12.0);

    // ---- Payload range: two sliders kept ordered ----
    ui.strong("Payload range (Kg):");
    let slider = *state.slider();
    let range = state.payload_range();
    let mut low = range.low();
    let mut high = range.high();

    let low_changed = ui
        .add(
            egui::Slider::new(&mut low, slider.min..=slider.max)
                .step_by(slider.step)
                .text("min"),
        )
        .changed();
    let high_changed = ui
        .add(
            egui::Slider::new(&mut high, slider.min..=slider.max)
                .step_by(slider.step)
                .text("max"),
        )
        .changed();

    // Dragging one handle past the other pushes the other along.
    if low_changed && low > high {
        high = low;
    }
    if high_changed && high < low {
        low = high;
    }
    if low_changed || high_changed {
        state.set_payload_range(PayloadRange::new(low, high));
    }

    ui.horizontal(|ui: &mut Ui| {
        let marks = slider.marks();
        let spacing = ui.available_width() / marks.len().max(1) as f32;
        for mark in marks {
            ui.add_sized(
                [spacing, 14.0],
                egui::Label::new(RichText::new(format!("{mark:.0}")).small().weak()),
            );
        }
    });

    ui.add_space(12.0);
    ui.separator();
    ui.label(format!(
        "{} launches, {} sites",
        state.table().len(),
        state.table().sites().len()
    ));
    ui.label(format!(
        "{} shown in scatter",
        state.scatter().point_count()
    ));
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Export charts…").clicked() {
                export_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();
        ui.label(state.dataset_path().display().to_string());

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open launch records")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        state.open_dataset(&path);
    }
}

pub fn export_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export charts")
        .set_file_name("charts.json")
        .add_filter("JSON", &["json"])
        .save_file();

    if let Some(path) = file {
        match state.export_charts(&path) {
            Ok(()) => state.status_message = None,
            Err(e) => {
                log::error!("Failed to export charts: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
