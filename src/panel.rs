mod entries;
mod error;
mod listing;
mod selection;
mod view;


pub use entries::{LabelmapEntry, SegmentEntry};
pub use error::{LoadError, PanelError, Result};
pub use listing::{UNLABELED_SEGMENT, list_labelmaps, list_segments};
pub use selection::{
    DisplaySetLoader, LabelmapSwitcher, RenderRefresher, Selection, SwitchToken,
    decrement_active_segment, increment_active_segment, set_active_labelmap, set_active_segment,
};
pub use view::{PanelViewState, panel_view_state};
