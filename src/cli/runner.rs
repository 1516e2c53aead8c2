use std::path::Path;

use clap::Parser;

use crate::panel::{Selection, list_segments};
use crate::runtime::AppContext;
use crate::session::{install_session, load_session};

use super::types::{Cli, Commands, PanelInfo, SegmentsInfo, SwitchReport};

pub fn run_cli() -> Result<(), String> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Info { session } => {
            let (app, series_key) = open_session(&session)?;
            let view = app
                .panel_for(&series_key, None)
                .map_err(|error| error.to_string())?;
            let info = PanelInfo {
                series_key,
                labelmaps: view.labelmaps,
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&info).map_err(|error| error.to_string())?
            );
        }
        Commands::Segments {
            session,
            labelmap,
            expanded,
        } => {
            let (app, series_key) = open_session(&session)?;
            let state = app
                .store()
                .series_state(&series_key)
                .ok_or_else(|| format!("no tool state for series {series_key}"))?;
            let labelmap_index = labelmap.unwrap_or(state.active_labelmap_index);
            let target = state
                .labelmap(labelmap_index)
                .map_err(|error| error.to_string())?;
            let lut = app
                .luts()
                .table(target.color_lut_index)
                .map_err(|error| error.to_string())?;
            let segments =
                list_segments(target, lut, expanded).map_err(|error| error.to_string())?;
            let info = SegmentsInfo {
                series_key,
                labelmap_index,
                active_segment_index: target.active_segment_index,
                segments,
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&info).map_err(|error| error.to_string())?
            );
        }
        Commands::Switch { session, labelmap } => {
            let (mut app, series_key) = open_session(&session)?;
            let outcome = app
                .switch_labelmap(&series_key, labelmap)
                .map_err(|error| error.to_string())?;
            let active_labelmap_index = app
                .store()
                .series_state(&series_key)
                .map(|state| state.active_labelmap_index)
                .unwrap_or_default();
            let report = SwitchReport {
                series_key,
                outcome: outcome_label(outcome).to_string(),
                active_labelmap_index,
                refresh_requests: app.render().requests(),
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&report).map_err(|error| error.to_string())?
            );
        }
        Commands::View { session } => {
            crate::ui::run(Some(session))?;
        }
    }

    Ok(())
}

fn outcome_label<T>(outcome: Selection<T>) -> &'static str {
    match outcome {
        Selection::Changed(_) => "changed",
        Selection::AlreadyActive(_) => "already-active",
        Selection::Superseded => "superseded",
    }
}

fn open_session(path: &Path) -> Result<(AppContext, String), String> {
    let spec = load_session(path).map_err(|error| error.to_string())?;
    let mut app = AppContext::new();
    install_session(&mut app, &spec).map_err(|error| error.to_string())?;
    Ok((app, spec.series_key))
}
