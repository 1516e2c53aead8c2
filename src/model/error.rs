use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("color lookup table {lut_index} has no entry for segment index {segment_index}")]
    LookupMiss { lut_index: usize, segment_index: u16 },

    #[error("labelmap index {index} out of range for series with {count} labelmaps")]
    LabelmapIndexOutOfRange { index: usize, count: usize },

    #[error("color lookup table index {index} out of range ({count} tables registered)")]
    ColorLutIndexOutOfRange { index: usize, count: usize },

    #[error("pixel buffer has {len} values but the declared shape is {rows}x{cols}")]
    PixelShapeMismatch {
        len: usize,
        rows: usize,
        cols: usize,
    },

    #[error("segment index 0 is reserved for the background")]
    ReservedSegmentIndex,
}
