use crate::model::{ColorLut, CoreError, DEFAULT_BRUSH_RADIUS, DisplaySetDescriptor, SeriesState};

use super::{LabelmapEntry, Result, SegmentEntry, list_labelmaps, list_segments};

/// Everything the panel renders, derived fresh from a snapshot of tool state
/// and discarded after the frame.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelViewState {
    pub labelmaps: Vec<LabelmapEntry>,
    pub segments: Vec<SegmentEntry>,
    pub active_segment_index: Option<u16>,
    pub brush_radius: f32,
}

impl Default for PanelViewState {
    fn default() -> Self {
        Self {
            labelmaps: Vec::new(),
            segments: Vec::new(),
            active_segment_index: None,
            brush_radius: DEFAULT_BRUSH_RADIUS,
        }
    }
}

/// Composes the labelmap and segment listings plus brush settings. A series
/// with no tool state yet is nothing to display, not a failure.
pub fn panel_view_state(
    series: Option<&SeriesState>,
    display_sets: &[DisplaySetDescriptor],
    luts: &[ColorLut],
    expanded: Option<u16>,
) -> Result<PanelViewState> {
    let Some(series) = series else {
        return Ok(PanelViewState::default());
    };

    let labelmaps = list_labelmaps(display_sets, series.active_labelmap_index);
    let (segments, active_segment_index) = match series.active_labelmap() {
        Some(labelmap) => {
            let lut = luts
                .get(labelmap.color_lut_index)
                .ok_or(CoreError::ColorLutIndexOutOfRange {
                    index: labelmap.color_lut_index,
                    count: luts.len(),
                })?;
            (
                list_segments(labelmap, lut, expanded)?,
                Some(labelmap.active_segment_index),
            )
        }
        None => (Vec::new(), None),
    };

    Ok(PanelViewState {
        labelmaps,
        segments,
        active_segment_index,
        brush_radius: series.brush.radius(),
    })
}
