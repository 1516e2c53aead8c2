use eframe::egui;

use crate::model::{MAX_BRUSH_RADIUS, MIN_BRUSH_RADIUS};
use crate::panel::PanelViewState;

use super::app::PanelApp;

pub(super) fn show(
    ui: &mut egui::Ui,
    panel: &mut PanelApp,
    series_key: &str,
    view: &PanelViewState,
) {
    ui.separator();
    ui.heading("Brush");
    let mut radius = view.brush_radius;
    if ui
        .add(egui::Slider::new(&mut radius, MIN_BRUSH_RADIUS..=MAX_BRUSH_RADIUS).text("Radius"))
        .changed()
    {
        panel.app.set_brush_radius(series_key, radius);
    }

    if let Some(active) = view.active_segment_index {
        ui.horizontal(|ui| {
            ui.label(format!("Active segment: {active}"));
            if ui.button("Previous").clicked() {
                if let Err(error) = panel.app.decrement_segment(series_key) {
                    panel.status = Some(error.to_string());
                }
            }
            if ui.button("Next").clicked() {
                if let Err(error) = panel.app.increment_segment(series_key) {
                    panel.status = Some(error.to_string());
                }
            }
        });
    }
}
