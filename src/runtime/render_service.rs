use std::cell::Cell;

use crate::panel::RenderRefresher;

/// Stand-in for the host's redraw fan-out. Selection mutators call it after
/// each committed write; the request count makes the ordering observable to
/// tests and the CLI.
#[derive(Debug, Clone, Default)]
pub struct RenderService {
    requests: Cell<u64>,
}

impl RenderService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> u64 {
        self.requests.get()
    }
}

impl RenderRefresher for RenderService {
    fn refresh_all_visible_surfaces(&self) {
        self.requests.set(self.requests.get() + 1);
        tracing::debug!(
            requests = self.requests.get(),
            "refresh of visible surfaces requested"
        );
    }
}
