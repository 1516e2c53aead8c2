use std::collections::HashMap;

use crate::model::DisplaySetDescriptor;
use crate::panel::{DisplaySetLoader, LoadError};

#[derive(Debug, Clone)]
struct CatalogEntry {
    descriptor: DisplaySetDescriptor,
    /// Pixel data for the overlay is actually present in the session, so the
    /// load step can succeed.
    loadable: bool,
}

/// Segmentation display sets derived from each series, in registration
/// order. Only segmentation-modality sets are registered here; other derived
/// data never reaches the panel.
#[derive(Debug, Clone, Default)]
pub struct DisplaySetCatalog {
    entries: HashMap<String, Vec<CatalogEntry>>,
}

impl DisplaySetCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, series_key: &str, descriptor: DisplaySetDescriptor, loadable: bool) {
        self.entries
            .entry(series_key.to_string())
            .or_default()
            .push(CatalogEntry {
                descriptor,
                loadable,
            });
    }

    /// Descriptors referencing the series, in registration order. Ordering
    /// for display is the listing's concern, not the catalog's.
    pub fn descriptors(&self, series_key: &str) -> Vec<DisplaySetDescriptor> {
        self.entries
            .get(series_key)
            .map(|entries| {
                entries
                    .iter()
                    .map(|entry| entry.descriptor.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn descriptor(
        &self,
        series_key: &str,
        labelmap_index: usize,
    ) -> Option<&DisplaySetDescriptor> {
        self.entries.get(series_key).and_then(|entries| {
            entries
                .iter()
                .map(|entry| &entry.descriptor)
                .find(|descriptor| descriptor.labelmap_index == labelmap_index)
        })
    }

    pub fn mark_loaded(&mut self, series_key: &str, labelmap_index: usize) {
        if let Some(entries) = self.entries.get_mut(series_key) {
            for entry in entries {
                if entry.descriptor.labelmap_index == labelmap_index {
                    entry.descriptor.is_loaded = true;
                }
            }
        }
    }

    fn load_for(
        &self,
        series_key: &str,
        display_set: &DisplaySetDescriptor,
    ) -> Result<(), LoadError> {
        let entry = self
            .entries
            .get(series_key)
            .and_then(|entries| {
                entries
                    .iter()
                    .find(|entry| entry.descriptor.labelmap_index == display_set.labelmap_index)
            })
            .ok_or_else(|| LoadError::new("display set not in catalog"))?;
        if !entry.loadable {
            tracing::warn!(
                series_key,
                labelmap_index = display_set.labelmap_index,
                "display set load failed: pixel data unavailable"
            );
            return Err(LoadError::new("pixel data unavailable"));
        }
        Ok(())
    }
}

/// Binds the catalog to one series so it can serve as the loader seam for a
/// labelmap switch.
pub(crate) struct SeriesLoader<'a> {
    pub(crate) catalog: &'a DisplaySetCatalog,
    pub(crate) series_key: &'a str,
}

impl DisplaySetLoader for SeriesLoader<'_> {
    fn load(&self, display_set: &DisplaySetDescriptor) -> Result<(), LoadError> {
        self.catalog.load_for(self.series_key, display_set)
    }
}
