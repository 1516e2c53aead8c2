mod catalog_service;
mod context;
mod error;
mod lut_service;
mod render_service;
mod store_service;

#[cfg(test)]
mod tests;

pub use catalog_service::DisplaySetCatalog;
pub use context::AppContext;
pub use error::{AppError, Result};
pub use lut_service::LutService;
pub use render_service::RenderService;
pub use store_service::{ChangeListener, StateStore};
