mod brush;
mod color;
mod display_set;
mod error;
mod labelmap;
mod segment;
mod series;

#[cfg(test)]
mod tests;

pub use brush::{BrushConfig, DEFAULT_BRUSH_RADIUS, MAX_BRUSH_RADIUS, MIN_BRUSH_RADIUS};
pub use color::{ColorLut, Rgba};
pub use display_set::DisplaySetDescriptor;
pub use error::{CoreError, Result};
pub use labelmap::{Labelmap3D, LabelmapSlice};
pub use segment::{BACKGROUND_SEGMENT_INDEX, SegmentMetadata, SegmentMetadataMap};
pub use series::SeriesState;
