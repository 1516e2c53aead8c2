mod error;
mod install;
mod io;
mod spec;

#[cfg(test)]
mod tests;

pub use error::{Result, SessionError};
pub use install::install_session;
pub use io::{load_session, save_session};
pub use spec::{
    DisplaySetSpec, LabelmapSpec, LutSpec, SEGMENTATION_MODALITY, SegmentMetadataSpec, SessionSpec,
    SliceSpec,
};
