use std::f32::consts::{FRAC_PI_2, TAU};

use eframe::egui::{self, Color32, RichText, Sense, Shape, Stroke, Ui};
use egui_plot::{Legend, Plot, Points};

use crate::color::ColorMap;
use crate::data::filter::SiteSelection;
use crate::state::AppState;

const PIE_HEIGHT: f32 = 320.0;
const SCATTER_HEIGHT: f32 = 380.0;

/// Segments used for a full circle.
const PIE_RESOLUTION: f32 = 96.0;

fn empty_chart(ui: &mut Ui, height: f32) {
    ui.allocate_ui(egui::vec2(ui.available_width(), height), |ui: &mut Ui| {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label(RichText::new("No launches match the current selection.").weak());
        });
    });
}

// ---------------------------------------------------------------------------
// Pie chart
// ---------------------------------------------------------------------------

/// Render the success pie chart with its legend to the right.
pub fn pie_chart(ui: &mut Ui, state: &AppState) {
    let pie = state.pie();
    ui.heading(pie.title.as_str());

    if pie.is_empty() {
        empty_chart(ui, PIE_HEIGHT);
        return;
    }

    let colors: &ColorMap = match state.site() {
        SiteSelection::All => &state.site_colors,
        SiteSelection::Site(_) => &state.outcome_colors,
    };
    let fractions = pie.fractions();
    let total = pie.total();

    ui.horizontal(|ui: &mut Ui| {
        let (response, painter) =
            ui.allocate_painter(egui::vec2(PIE_HEIGHT, PIE_HEIGHT), Sense::hover());
        let center = response.rect.center();
        let radius = response.rect.width().min(response.rect.height()) * 0.45;

        // Slices run clockwise from 12 o'clock.
        let mut start = -FRAC_PI_2;
        for (slice, &frac) in pie.slices.iter().zip(&fractions) {
            let sweep = frac as f32 * TAU;
            if sweep <= 0.0 {
                continue;
            }
            let color = colors.color_for(&slice.label);
            let steps = (sweep / TAU * PIE_RESOLUTION).ceil().max(1.0) as usize;
            for i in 0..steps {
                let a0 = start + sweep * i as f32 / steps as f32;
                let a1 = start + sweep * (i + 1) as f32 / steps as f32;
                painter.add(Shape::convex_polygon(
                    vec![
                        center,
                        center + radius * egui::vec2(a0.cos(), a0.sin()),
                        center + radius * egui::vec2(a1.cos(), a1.sin()),
                    ],
                    color,
                    Stroke::NONE,
                ));
            }
            if frac < 1.0 {
                painter.line_segment(
                    [center, center + radius * egui::vec2(start.cos(), start.sin())],
                    Stroke::new(1.5, Color32::WHITE),
                );
            }
            start += sweep;
        }

        if let Some(pos) = response.hover_pos() {
            let d = pos - center;
            if d.length() <= radius {
                let turn = (d.y.atan2(d.x) + FRAC_PI_2) / TAU;
                if let Some(i) = pie.slice_at(f64::from(turn)) {
                    let slice = &pie.slices[i];
                    response.on_hover_text_at_pointer(format!(
                        "{}: {} ({:.1}%)",
                        slice.label,
                        slice.value,
                        fractions[i] * 100.0
                    ));
                }
            }
        }

        // ---- Legend ----
        ui.vertical(|ui: &mut Ui| {
            for (slice, frac) in pie.slices.iter().zip(&fractions) {
                ui.horizontal(|ui: &mut Ui| {
                    let (rect, _) = ui.allocate_exact_size(egui::vec2(12.0, 12.0), Sense::hover());
                    ui.painter()
                        .rect_filled(rect, 2.0, colors.color_for(&slice.label));
                    ui.label(format!(
                        "{}  {}  ({:.1}%)",
                        slice.label,
                        slice.value,
                        frac * 100.0
                    ));
                });
            }
            ui.add_space(4.0);
            ui.label(RichText::new(format!("Total: {total}")).weak());
        });
    });
}

// ---------------------------------------------------------------------------
// Scatter chart
// ---------------------------------------------------------------------------

/// Render payload vs. outcome, one series per booster version category.
pub fn scatter_chart(ui: &mut Ui, state: &AppState) {
    let scatter = state.scatter();
    ui.heading(scatter.title.as_str());

    if scatter.is_empty() {
        empty_chart(ui, SCATTER_HEIGHT);
        return;
    }

    let x_span = state.slider().max - state.slider().min;

    // A new id per recomputation restores automatic bounds.
    Plot::new(("payload_scatter", state.scatter_revision()))
        .height(SCATTER_HEIGHT)
        .legend(Legend::default())
        .x_axis_label("Payload Mass (kg)")
        .y_axis_label("class")
        .include_y(-0.25)
        .include_y(1.25)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .label_formatter(move |name, value| {
            match scatter.nearest_point(name, value.x, value.y, x_span, 1.0) {
                Some(p) => format!(
                    "{name}\nPayload Mass (kg): {:.1}\nclass: {}\nFlight Number: {}",
                    p.x, p.y, p.flight_number
                ),
                None => format!("Payload Mass (kg): {:.1}\nclass: {:.2}", value.x, value.y),
            }
        })
        .show(ui, |plot_ui| {
            for series in &scatter.series {
                let points: Vec<[f64; 2]> = series.points.iter().map(|p| [p.x, p.y]).collect();
                plot_ui.points(
                    Points::new(points)
                        .name(&series.category)
                        .color(state.booster_colors.color_for(&series.category))
                        .radius(5.0),
                );
            }
        });
}
