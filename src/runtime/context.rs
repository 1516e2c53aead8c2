use crate::model::DEFAULT_BRUSH_RADIUS;
use crate::panel::{self, LabelmapSwitcher, PanelViewState, Selection};

use super::catalog_service::SeriesLoader;
use super::{AppError, DisplaySetCatalog, LutService, RenderService, Result, StateStore};

/// Owns the collaborating services and exposes the panel-level operations
/// the CLI and UI drive.
#[derive(Debug, Default)]
pub struct AppContext {
    store: StateStore,
    catalog: DisplaySetCatalog,
    luts: LutService,
    render: RenderService,
    switcher: LabelmapSwitcher,
}

impl AppContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &StateStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut StateStore {
        &mut self.store
    }

    pub fn catalog(&self) -> &DisplaySetCatalog {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut DisplaySetCatalog {
        &mut self.catalog
    }

    pub fn luts(&self) -> &LutService {
        &self.luts
    }

    pub fn luts_mut(&mut self) -> &mut LutService {
        &mut self.luts
    }

    pub fn render(&self) -> &RenderService {
        &self.render
    }

    /// Derives the full panel view state for one series.
    pub fn panel_for(&self, series_key: &str, expanded: Option<u16>) -> Result<PanelViewState> {
        let display_sets = self.catalog.descriptors(series_key);
        let view = panel::panel_view_state(
            self.store.series_state(series_key),
            &display_sets,
            self.luts.tables(),
            expanded,
        )?;
        Ok(view)
    }

    /// Switches the active labelmap, loading the target display set first
    /// when needed.
    pub fn switch_labelmap(
        &mut self,
        series_key: &str,
        labelmap_index: usize,
    ) -> Result<Selection<usize>> {
        let display_set = self
            .catalog
            .descriptor(series_key, labelmap_index)
            .cloned()
            .ok_or_else(|| AppError::UnknownDisplaySet {
                series_key: series_key.to_string(),
                labelmap_index,
            })?;
        let Self {
            store,
            catalog,
            render,
            switcher,
            ..
        } = self;
        let loader = SeriesLoader {
            catalog,
            series_key,
        };
        let outcome = store.mutate(series_key, |series| {
            panel::set_active_labelmap(series, &display_set, switcher, &loader, render)
        })?;
        if let Selection::Changed(index) = outcome {
            self.catalog.mark_loaded(series_key, index);
            tracing::info!(series_key, labelmap_index = index, "active labelmap switched");
        }
        Ok(outcome)
    }

    pub fn select_segment(&mut self, series_key: &str, target: u16) -> Result<Selection<u16>> {
        let Self { store, render, .. } = self;
        store
            .mutate(series_key, |series| {
                series
                    .active_labelmap_mut()
                    .map(|labelmap| panel::set_active_segment(labelmap, target, render))
            })
            .ok_or_else(|| AppError::NoActiveLabelmap {
                series_key: series_key.to_string(),
            })
    }

    pub fn increment_segment(&mut self, series_key: &str) -> Result<Selection<u16>> {
        let Self { store, render, .. } = self;
        store
            .mutate(series_key, |series| {
                series
                    .active_labelmap_mut()
                    .map(|labelmap| panel::increment_active_segment(labelmap, render))
            })
            .ok_or_else(|| AppError::NoActiveLabelmap {
                series_key: series_key.to_string(),
            })
    }

    pub fn decrement_segment(&mut self, series_key: &str) -> Result<Selection<u16>> {
        let Self { store, render, .. } = self;
        store
            .mutate(series_key, |series| {
                series
                    .active_labelmap_mut()
                    .map(|labelmap| panel::decrement_active_segment(labelmap, render))
            })
            .ok_or_else(|| AppError::NoActiveLabelmap {
                series_key: series_key.to_string(),
            })
    }

    pub fn set_brush_radius(&mut self, series_key: &str, radius: f32) {
        self.store
            .mutate(series_key, |series| series.brush.set_radius(radius));
    }

    pub fn brush_radius(&self, series_key: &str) -> f32 {
        self.store
            .series_state(series_key)
            .map(|series| series.brush.radius())
            .unwrap_or(DEFAULT_BRUSH_RADIUS)
    }
}
