use serde::Serialize;

use crate::model::Rgba;

/// One row of the segmentation list: a labelmap overlay available for the
/// current series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelmapEntry {
    pub labelmap_index: usize,
    pub title: String,
    pub description: String,
    pub is_active: bool,
}

/// One row of the segment list within the active labelmap. `is_selected`
/// tracks which row the panel has expanded, independent of the active
/// segment the brush paints with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SegmentEntry {
    pub segment_index: u16,
    pub segment_number: u16,
    pub label: String,
    pub color: Rgba,
    pub is_selected: bool,
}
