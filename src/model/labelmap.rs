use std::collections::BTreeSet;

use ndarray::Array2;
use rayon::prelude::*;

use super::{BACKGROUND_SEGMENT_INDEX, SegmentMetadataMap};

/// One painted frame of a labelmap. The distinct-index cache is derived from
/// the pixel buffer when one is present; it may contain the background index,
/// which is filtered out at derivation time rather than at storage time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelmapSlice {
    pixel_data: Option<Array2<u16>>,
    segments_on_slice: Vec<u16>,
}

impl LabelmapSlice {
    pub fn from_segments(mut segments: Vec<u16>) -> Self {
        segments.sort_unstable();
        segments.dedup();
        Self {
            pixel_data: None,
            segments_on_slice: segments,
        }
    }

    pub fn from_pixel_data(pixels: Array2<u16>) -> Self {
        let segments = distinct_values(&pixels);
        Self {
            pixel_data: Some(pixels),
            segments_on_slice: segments,
        }
    }

    pub fn segments_on_slice(&self) -> &[u16] {
        &self.segments_on_slice
    }

    pub fn pixel_data(&self) -> Option<&Array2<u16>> {
        self.pixel_data.as_ref()
    }

    pub fn rebuild_cache(&mut self) {
        if let Some(pixels) = &self.pixel_data {
            self.segments_on_slice = distinct_values(pixels);
        }
    }
}

fn distinct_values(pixels: &Array2<u16>) -> Vec<u16> {
    let values: BTreeSet<u16> = pixels.iter().copied().collect();
    values.into_iter().collect()
}

/// A stack of per-frame slices plus the selection state the painting tools
/// operate on. Frames that were never painted stay `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Labelmap3D {
    pub slices: Vec<Option<LabelmapSlice>>,
    pub active_segment_index: u16,
    pub color_lut_index: usize,
    pub segment_metadata: SegmentMetadataMap,
}

impl Default for Labelmap3D {
    fn default() -> Self {
        Self {
            slices: Vec::new(),
            active_segment_index: BACKGROUND_SEGMENT_INDEX + 1,
            color_lut_index: 0,
            segment_metadata: SegmentMetadataMap::default(),
        }
    }
}

impl Labelmap3D {
    pub fn new(slice_count: usize) -> Self {
        Self {
            slices: vec![None; slice_count],
            ..Self::default()
        }
    }

    /// Stores a slice at the given frame, growing the stack when needed.
    pub fn set_slice(&mut self, frame: usize, slice: LabelmapSlice) {
        if self.slices.len() <= frame {
            self.slices.resize(frame + 1, None);
        }
        self.slices[frame] = Some(slice);
    }

    /// Distinct non-background segment indices present on at least one slice,
    /// ascending.
    pub fn segments_in_use(&self) -> Vec<u16> {
        let mut indices = BTreeSet::new();
        for slice in self.slices.iter().flatten() {
            indices.extend(slice.segments_on_slice().iter().copied());
        }
        indices.remove(&BACKGROUND_SEGMENT_INDEX);
        indices.into_iter().collect()
    }

    /// Recomputes every slice cache from pixel data. Slices without pixel
    /// buffers keep their recorded indices.
    pub fn rebuild_slice_caches(&mut self) {
        self.slices.par_iter_mut().for_each(|slot| {
            if let Some(slice) = slot {
                slice.rebuild_cache();
            }
        });
    }
}
