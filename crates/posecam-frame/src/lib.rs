//! Camera frame to model-input conversion.
//!
//! A `SourceFrame` describes one borrowed camera frame (any stride, BGRA,
//! RGB or planar RGB). `FrameResampler` maps it onto a fixed-size, tightly
//! packed RGB buffer in a single nearest-neighbor pass, reordering channels
//! on the way, and keeps its output buffer between calls.

pub mod error;
pub mod layout;
pub mod resampler;
pub mod sourceframe;
pub mod target;

pub use error::FrameError;
pub use layout::PixelLayout;
pub use resampler::{FrameResampler, resample_into};
pub use sourceframe::SourceFrame;
pub use target::{CropPolicy, MAX_TARGET_SIDE, OUTPUT_CHANNELS, TargetSpec};
