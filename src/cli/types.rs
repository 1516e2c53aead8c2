use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::panel::{LabelmapEntry, SegmentEntry};

#[derive(Debug, Parser)]
#[command(
    name = "segview",
    version,
    about = "Segmentation overlay panel for medical image series"
)]
pub(super) struct Cli {
    #[command(subcommand)]
    pub(super) command: Commands,
}

#[derive(Debug, Subcommand)]
pub(super) enum Commands {
    /// Prints the derived labelmap list for a session.
    Info {
        session: PathBuf,
    },
    /// Prints the derived segment list. Defaults to the active labelmap.
    Segments {
        session: PathBuf,
        #[arg(long)]
        labelmap: Option<usize>,
        #[arg(long)]
        expanded: Option<u16>,
    },
    /// Switches the active labelmap, loading the target display set first.
    Switch {
        session: PathBuf,
        #[arg(long)]
        labelmap: usize,
    },
    /// Launches the native panel window for a session.
    View {
        session: PathBuf,
    },
}

#[derive(Debug, Serialize)]
pub(super) struct PanelInfo {
    pub(super) series_key: String,
    pub(super) labelmaps: Vec<LabelmapEntry>,
}

#[derive(Debug, Serialize)]
pub(super) struct SegmentsInfo {
    pub(super) series_key: String,
    pub(super) labelmap_index: usize,
    pub(super) active_segment_index: u16,
    pub(super) segments: Vec<SegmentEntry>,
}

#[derive(Debug, Serialize)]
pub(super) struct SwitchReport {
    pub(super) series_key: String,
    pub(super) outcome: String,
    pub(super) active_labelmap_index: usize,
    pub(super) refresh_requests: u64,
}
