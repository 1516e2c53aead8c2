use eframe::egui;

use crate::model::Rgba;

use super::app::PanelApp;
use super::settings_view;

pub(super) fn show(ui: &mut egui::Ui, panel: &mut PanelApp, series_key: &str) {
    let view = match panel.app.panel_for(series_key, panel.expanded_segment) {
        Ok(view) => view,
        Err(error) => {
            ui.colored_label(egui::Color32::LIGHT_RED, error.to_string());
            return;
        }
    };

    ui.heading("Segmentations");
    if view.labelmaps.is_empty() {
        ui.label("No segmentation overlays reference this series.");
    }
    for entry in &view.labelmaps {
        let text = if entry.description.is_empty() {
            entry.title.clone()
        } else {
            format!("{} ({})", entry.title, entry.description)
        };
        if ui.selectable_label(entry.is_active, text).clicked() && !entry.is_active {
            match panel.app.switch_labelmap(series_key, entry.labelmap_index) {
                Ok(_) => panel.status = None,
                Err(error) => panel.status = Some(error.to_string()),
            }
        }
    }

    ui.separator();
    ui.heading("Segments");
    if view.segments.is_empty() {
        ui.label("No segments painted yet.");
    }
    egui::ScrollArea::vertical().show(ui, |ui| {
        for segment in &view.segments {
            ui.horizontal(|ui| {
                egui::color_picker::show_color(
                    ui,
                    color32(segment.color),
                    egui::Vec2::splat(14.0),
                );
                let text = format!("{}. {}", segment.segment_number, segment.label);
                if ui.selectable_label(segment.is_selected, text).clicked() {
                    panel.expanded_segment = if segment.is_selected {
                        None
                    } else {
                        Some(segment.segment_index)
                    };
                }
                if view.active_segment_index == Some(segment.segment_index) {
                    ui.label(egui::RichText::new("active").weak());
                }
            });
            if segment.is_selected {
                ui.indent("segment-detail", |ui| {
                    ui.label(format!("Raw index: {}", segment.segment_index));
                    if ui.button("Paint with this segment").clicked() {
                        if let Err(error) =
                            panel.app.select_segment(series_key, segment.segment_index)
                        {
                            panel.status = Some(error.to_string());
                        }
                    }
                });
            }
        }
    });

    settings_view::show(ui, panel, series_key, &view);
}

fn color32(color: Rgba) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}
