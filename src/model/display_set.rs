use serde::{Deserialize, Serialize};

/// Descriptor of a loadable segmentation overlay derived from a series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySetDescriptor {
    pub labelmap_index: usize,
    pub series_date: String,
    pub series_time: String,
    pub series_description: String,
    pub is_loaded: bool,
}

impl DisplaySetDescriptor {
    /// Acquisition date and time digits packed into one comparable key.
    /// Values that do not parse as digits pack as 0 and order first.
    pub fn sort_key(&self) -> u64 {
        let digits = format!("{}{}", self.series_date, self.series_time);
        digits.parse().unwrap_or(0)
    }
}
