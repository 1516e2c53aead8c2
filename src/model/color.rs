use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
}

/// Segment-index-addressed color table. Entry 0 belongs to the background and
/// stays transparent in the stock table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ColorLut {
    pub colors: Vec<Rgba>,
}

impl ColorLut {
    pub fn new(colors: Vec<Rgba>) -> Self {
        Self { colors }
    }

    pub fn color_for(&self, segment_index: u16) -> Option<Rgba> {
        self.colors.get(segment_index as usize).copied()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Stock table covering segment indices 1..=segment_count with
    /// golden-angle-spaced hues.
    pub fn default_table(segment_count: u16) -> Self {
        let mut colors = Vec::with_capacity(segment_count as usize + 1);
        colors.push(Rgba::TRANSPARENT);
        for index in 1..=segment_count {
            colors.push(hue_color(index));
        }
        Self { colors }
    }
}

fn hue_color(index: u16) -> Rgba {
    let hue = (index as f32 * 137.508) % 360.0;
    let sector = hue / 60.0;
    let fraction = sector - sector.floor();
    let rising = (255.0 * fraction) as u8;
    let falling = (255.0 * (1.0 - fraction)) as u8;
    match sector as u32 {
        0 => Rgba::opaque(255, rising, 0),
        1 => Rgba::opaque(falling, 255, 0),
        2 => Rgba::opaque(0, 255, rising),
        3 => Rgba::opaque(0, falling, 255),
        4 => Rgba::opaque(rising, 0, 255),
        _ => Rgba::opaque(255, 0, falling),
    }
}
