use crate::model::CoreError;
use crate::panel::PanelError;
use crate::session::SessionError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("core model error: {0}")]
    Core(#[from] CoreError),

    #[error("panel derivation error: {0}")]
    Panel(#[from] PanelError),

    #[error("session error: {0}")]
    Session(#[from] SessionError),

    #[error("no segmentation display set for series {series_key} with labelmap index {labelmap_index}")]
    UnknownDisplaySet {
        series_key: String,
        labelmap_index: usize,
    },

    #[error("series {series_key} has no active labelmap")]
    NoActiveLabelmap { series_key: String },
}
