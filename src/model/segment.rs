use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{CoreError, Result};

/// Voxels carrying this index are unpainted background; it never appears in
/// derived segment listings and cannot carry metadata.
pub const BACKGROUND_SEGMENT_INDEX: u16 = 0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentMetadata {
    pub segment_number: u16,
    pub segment_label: String,
}

/// Externally supplied per-segment metadata; may be partially populated or
/// absent entirely. Lookups that miss fall back to the unlabeled policy at
/// derivation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SegmentMetadataMap {
    entries: BTreeMap<u16, SegmentMetadata>,
}

impl SegmentMetadataMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, segment_index: u16, metadata: SegmentMetadata) -> Result<()> {
        if segment_index == BACKGROUND_SEGMENT_INDEX {
            return Err(CoreError::ReservedSegmentIndex);
        }
        self.entries.insert(segment_index, metadata);
        Ok(())
    }

    pub fn get(&self, segment_index: u16) -> Option<&SegmentMetadata> {
        self.entries.get(&segment_index)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
