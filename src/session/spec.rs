use serde::{Deserialize, Serialize};

use crate::model::{BACKGROUND_SEGMENT_INDEX, MAX_BRUSH_RADIUS, MIN_BRUSH_RADIUS};

use super::{Result, SessionError};

pub const SEGMENTATION_MODALITY: &str = "SEG";

/// One viewing session: the anatomical series, the segmentation display sets
/// referencing it, and the labelmap state they resolve to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSpec {
    pub series_key: String,
    #[serde(default)]
    pub display_sets: Vec<DisplaySetSpec>,
    #[serde(default)]
    pub labelmaps: Vec<LabelmapSpec>,
    #[serde(default)]
    pub color_luts: Vec<LutSpec>,
    #[serde(default)]
    pub active_labelmap_index: usize,
    #[serde(default)]
    pub brush_radius: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySetSpec {
    pub labelmap_index: usize,
    #[serde(default = "segmentation_modality")]
    pub modality: String,
    #[serde(default)]
    pub series_date: String,
    #[serde(default)]
    pub series_time: String,
    #[serde(default)]
    pub series_description: String,
    #[serde(default)]
    pub is_loaded: bool,
    /// Pixel data for the overlay is present in the session, so the load
    /// step can succeed.
    #[serde(default = "default_true")]
    pub loadable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelmapSpec {
    #[serde(default)]
    pub slices: Vec<Option<SliceSpec>>,
    #[serde(default = "first_segment")]
    pub active_segment_index: u16,
    #[serde(default)]
    pub color_lut_index: usize,
    #[serde(default)]
    pub segment_metadata: Vec<SegmentMetadataSpec>,
}

/// A painted frame, given either as the list of segment indices present on
/// it or as an inline pixel buffer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SliceSpec {
    Segments { segments: Vec<u16> },
    Pixels { shape: [usize; 2], values: Vec<u16> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentMetadataSpec {
    pub segment_index: u16,
    pub segment_number: u16,
    pub segment_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LutSpec {
    pub colors: Vec<[u8; 4]>,
}

fn segmentation_modality() -> String {
    SEGMENTATION_MODALITY.to_string()
}

fn default_true() -> bool {
    true
}

fn first_segment() -> u16 {
    BACKGROUND_SEGMENT_INDEX + 1
}

impl SessionSpec {
    pub fn validate(&self) -> Result<()> {
        if self.series_key.trim().is_empty() {
            return Err(SessionError::Parse(
                "session must name a series".to_string(),
            ));
        }
        if !self.labelmaps.is_empty() && self.active_labelmap_index >= self.labelmaps.len() {
            return Err(SessionError::Parse(format!(
                "active labelmap index {} out of range ({} labelmaps)",
                self.active_labelmap_index,
                self.labelmaps.len()
            )));
        }
        for display_set in &self.display_sets {
            if display_set.modality == SEGMENTATION_MODALITY
                && display_set.labelmap_index >= self.labelmaps.len()
            {
                return Err(SessionError::Parse(format!(
                    "display set references labelmap index {} but the session has {}",
                    display_set.labelmap_index,
                    self.labelmaps.len()
                )));
            }
        }
        let lut_count = self.color_luts.len().max(1);
        for (index, labelmap) in self.labelmaps.iter().enumerate() {
            if labelmap.color_lut_index >= lut_count {
                return Err(SessionError::Parse(format!(
                    "labelmap {index} references color lookup table {} but the session has {lut_count}",
                    labelmap.color_lut_index
                )));
            }
            if labelmap.active_segment_index == BACKGROUND_SEGMENT_INDEX {
                return Err(SessionError::Parse(format!(
                    "labelmap {index} sets the reserved background index active"
                )));
            }
            for metadata in &labelmap.segment_metadata {
                if metadata.segment_index == BACKGROUND_SEGMENT_INDEX {
                    return Err(SessionError::Parse(format!(
                        "labelmap {index} carries metadata for the reserved background index"
                    )));
                }
            }
            for (frame, slice) in labelmap.slices.iter().enumerate() {
                if let Some(SliceSpec::Pixels { shape, values }) = slice {
                    if shape[0] * shape[1] != values.len() {
                        return Err(SessionError::Parse(format!(
                            "labelmap {index} slice {frame}: {} pixel values for shape {}x{}",
                            values.len(),
                            shape[0],
                            shape[1]
                        )));
                    }
                }
            }
        }
        if let Some(radius) = self.brush_radius {
            if !(MIN_BRUSH_RADIUS..=MAX_BRUSH_RADIUS).contains(&radius) {
                return Err(SessionError::Parse(format!(
                    "brush radius {radius} outside {MIN_BRUSH_RADIUS}..{MAX_BRUSH_RADIUS}"
                )));
            }
        }
        Ok(())
    }
}
