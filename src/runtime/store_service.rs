use std::collections::HashMap;
use std::fmt;

use crate::model::SeriesState;

pub type ChangeListener = Box<dyn Fn(&str)>;

/// Shared mutable tool state, one entry per series. Single-writer discipline
/// is the caller's responsibility; the store's job is to make every write
/// observable: each mutation bumps the revision and notifies listeners after
/// the write has landed.
#[derive(Default)]
pub struct StateStore {
    series: HashMap<String, SeriesState>,
    revision: u64,
    listeners: Vec<ChangeListener>,
}

impl fmt::Debug for StateStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateStore")
            .field("series", &self.series)
            .field("revision", &self.revision)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl StateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn series_state(&self, series_key: &str) -> Option<&SeriesState> {
        self.series.get(series_key)
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn subscribe(&mut self, listener: ChangeListener) {
        self.listeners.push(listener);
    }

    /// Runs a mutation against one series (created empty on first touch),
    /// then bumps the revision and notifies listeners.
    pub fn mutate<T>(
        &mut self,
        series_key: &str,
        mutation: impl FnOnce(&mut SeriesState) -> T,
    ) -> T {
        let state = self.series.entry(series_key.to_string()).or_default();
        let result = mutation(state);
        self.revision += 1;
        for listener in &self.listeners {
            listener(series_key);
        }
        result
    }
}
