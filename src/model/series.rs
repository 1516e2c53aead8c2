use super::{BrushConfig, CoreError, Labelmap3D, Result};

/// Per-series tool state: every labelmap overlay created for the series plus
/// which one the painting tools target. Once any labelmap exists the active
/// index references an existing entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesState {
    pub labelmaps: Vec<Labelmap3D>,
    pub active_labelmap_index: usize,
    pub brush: BrushConfig,
}

impl SeriesState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_labelmap(&self) -> Option<&Labelmap3D> {
        self.labelmaps.get(self.active_labelmap_index)
    }

    pub fn active_labelmap_mut(&mut self) -> Option<&mut Labelmap3D> {
        self.labelmaps.get_mut(self.active_labelmap_index)
    }

    pub fn labelmap(&self, index: usize) -> Result<&Labelmap3D> {
        self.labelmaps.get(index).ok_or(CoreError::LabelmapIndexOutOfRange {
            index,
            count: self.labelmaps.len(),
        })
    }

    pub fn push_labelmap(&mut self, labelmap: Labelmap3D) -> usize {
        self.labelmaps.push(labelmap);
        self.labelmaps.len() - 1
    }

    /// Grows the collection with empty labelmaps until `index` exists.
    pub fn ensure_labelmap(&mut self, index: usize) -> &mut Labelmap3D {
        while self.labelmaps.len() <= index {
            self.labelmaps.push(Labelmap3D::default());
        }
        &mut self.labelmaps[index]
    }

    pub fn validate(&self, lut_count: usize) -> Result<()> {
        if !self.labelmaps.is_empty() && self.active_labelmap_index >= self.labelmaps.len() {
            return Err(CoreError::LabelmapIndexOutOfRange {
                index: self.active_labelmap_index,
                count: self.labelmaps.len(),
            });
        }
        for labelmap in &self.labelmaps {
            if labelmap.color_lut_index >= lut_count {
                return Err(CoreError::ColorLutIndexOutOfRange {
                    index: labelmap.color_lut_index,
                    count: lut_count,
                });
            }
        }
        Ok(())
    }
}
