use crate::model::{BACKGROUND_SEGMENT_INDEX, DisplaySetDescriptor, Labelmap3D, SeriesState};

use super::{LoadError, Result};

/// Redraw of every currently visible imaging surface. Fire-and-forget; must
/// only be requested after the corresponding state write has landed.
pub trait RenderRefresher {
    fn refresh_all_visible_surfaces(&self);
}

/// Fetches a display set's underlying data. Runs to completion before the
/// switch that needs it may commit.
pub trait DisplaySetLoader {
    fn load(&self, display_set: &DisplaySetDescriptor) -> std::result::Result<(), LoadError>;
}

/// Outcome of a selection mutator. `AlreadyActive` and `Superseded` are
/// signals, not failures: neither writes state nor requests a redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<T> {
    Changed(T),
    AlreadyActive(T),
    Superseded,
}

impl<T: Copy> Selection<T> {
    pub fn index(&self) -> Option<T> {
        match self {
            Self::Changed(index) | Self::AlreadyActive(index) => Some(*index),
            Self::Superseded => None,
        }
    }

    pub fn is_changed(&self) -> bool {
        matches!(self, Self::Changed(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchToken(u64);

/// Orders labelmap switch requests. A load can outlive the request that
/// started it; only the most recently issued token may commit, so a stale
/// completion falls out as `Superseded` instead of clobbering a newer
/// selection.
#[derive(Debug, Default)]
pub struct LabelmapSwitcher {
    last_issued: u64,
}

impl LabelmapSwitcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self) -> SwitchToken {
        self.last_issued += 1;
        SwitchToken(self.last_issued)
    }

    pub fn is_current(&self, token: SwitchToken) -> bool {
        token.0 == self.last_issued
    }

    /// Commits the switch carried by `token`: creates the target labelmap if
    /// the series does not have it yet, writes the active index, then
    /// requests a redraw.
    pub fn commit(
        &self,
        token: SwitchToken,
        state: &mut SeriesState,
        target: usize,
        refresher: &dyn RenderRefresher,
    ) -> Selection<usize> {
        if !self.is_current(token) {
            tracing::debug!(target_index = target, "stale labelmap switch discarded");
            return Selection::Superseded;
        }
        state.ensure_labelmap(target);
        state.active_labelmap_index = target;
        refresher.refresh_all_visible_surfaces();
        tracing::debug!(target_index = target, "labelmap switch committed");
        Selection::Changed(target)
    }
}

/// Makes `display_set`'s labelmap the active one for the series. No-op when
/// it already is. An unloaded display set is loaded first; a load failure
/// surfaces to the caller and leaves the active index untouched.
pub fn set_active_labelmap(
    state: &mut SeriesState,
    display_set: &DisplaySetDescriptor,
    switcher: &mut LabelmapSwitcher,
    loader: &dyn DisplaySetLoader,
    refresher: &dyn RenderRefresher,
) -> Result<Selection<usize>> {
    let target = display_set.labelmap_index;
    if !state.labelmaps.is_empty() && target == state.active_labelmap_index {
        return Ok(Selection::AlreadyActive(target));
    }
    let token = switcher.begin();
    if !display_set.is_loaded {
        loader.load(display_set)?;
    }
    Ok(switcher.commit(token, state, target, refresher))
}

/// Makes `target` the active segment of one labelmap. The background index
/// is reserved, so the target clamps to 1 from below; there is no upper
/// bound. No-op when the clamped target is already active.
pub fn set_active_segment(
    labelmap: &mut Labelmap3D,
    target: u16,
    refresher: &dyn RenderRefresher,
) -> Selection<u16> {
    let target = target.max(BACKGROUND_SEGMENT_INDEX + 1);
    if target == labelmap.active_segment_index {
        return Selection::AlreadyActive(target);
    }
    labelmap.active_segment_index = target;
    refresher.refresh_all_visible_surfaces();
    tracing::debug!(segment_index = target, "active segment changed");
    Selection::Changed(target)
}

pub fn increment_active_segment(
    labelmap: &mut Labelmap3D,
    refresher: &dyn RenderRefresher,
) -> Selection<u16> {
    let target = labelmap.active_segment_index.saturating_add(1);
    set_active_segment(labelmap, target, refresher)
}

pub fn decrement_active_segment(
    labelmap: &mut Labelmap3D,
    refresher: &dyn RenderRefresher,
) -> Selection<u16> {
    let target = labelmap.active_segment_index.saturating_sub(1);
    set_active_segment(labelmap, target, refresher)
}
