use crate::model::CoreError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PanelError>;

/// Failure reported by the host when fetching a display set's underlying
/// data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("display set load failed: {reason}")]
pub struct LoadError {
    pub reason: String,
}

impl LoadError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum PanelError {
    #[error("segment derivation failed: {0}")]
    Core(#[from] CoreError),

    #[error("labelmap activation failed: {0}")]
    Load(#[from] LoadError),
}
