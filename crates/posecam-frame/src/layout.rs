use serde::{Deserialize, Serialize};

/// Pixel layout of a camera frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PixelLayout {
    /// Interleaved `B, G, R, A`, as delivered by most mobile camera APIs.
    Bgra8,
    /// Interleaved `R, G, B`.
    Rgb8,
    /// Three consecutive planes `R`, `G`, `B`, each `height` rows of `stride` bytes.
    RgbPlanar,
}

impl PixelLayout {
    /// Bytes one pixel occupies within a row (of one plane, for planar layouts).
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            PixelLayout::Bgra8 => 4,
            PixelLayout::Rgb8 => 3,
            PixelLayout::RgbPlanar => 1,
        }
    }

    pub fn planes(&self) -> usize {
        match self {
            PixelLayout::Bgra8 | PixelLayout::Rgb8 => 1,
            PixelLayout::RgbPlanar => 3,
        }
    }
}
