use std::path::{Path, PathBuf};

use eframe::egui;

use crate::runtime::AppContext;
use crate::session::{install_session, load_session};

use super::panel_view;

const WINDOW_SIZE: [f32; 2] = [420.0, 640.0];

pub fn run(session: Option<PathBuf>) -> Result<(), String> {
    let mut panel = PanelApp::default();
    if let Some(path) = &session {
        panel.open_session(path).map_err(|error| error.to_string())?;
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("segview")
            .with_inner_size(WINDOW_SIZE),
        ..Default::default()
    };
    eframe::run_native("segview", options, Box::new(move |_cc| Ok(Box::new(panel))))
        .map_err(|error| error.to_string())
}

#[derive(Default)]
pub(super) struct PanelApp {
    pub(super) app: AppContext,
    pub(super) series_key: Option<String>,
    pub(super) expanded_segment: Option<u16>,
    pub(super) status: Option<String>,
}

impl PanelApp {
    fn open_session(&mut self, path: &Path) -> crate::runtime::Result<()> {
        let spec = load_session(path)?;
        let mut context = AppContext::new();
        install_session(&mut context, &spec)?;
        self.app = context;
        self.series_key = Some(spec.series_key);
        self.expanded_segment = None;
        self.status = None;
        Ok(())
    }
}

impl eframe::App for PanelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("segview-toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Open session…").clicked() {
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("session", &["json", "yaml", "yml"])
                        .pick_file()
                    {
                        if let Err(error) = self.open_session(&path) {
                            self.status = Some(error.to_string());
                        }
                    }
                }
                if let Some(status) = &self.status {
                    ui.colored_label(egui::Color32::LIGHT_RED, status);
                }
            });
        });

        let series_key = self.series_key.clone();
        egui::CentralPanel::default().show(ctx, |ui| match series_key {
            None => {
                ui.label("Open a session to list its segmentations.");
            }
            Some(series_key) => {
                panel_view::show(ui, self, &series_key);
            }
        });
    }
}
