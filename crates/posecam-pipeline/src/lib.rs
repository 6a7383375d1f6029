//! Per-frame orchestration: resample, run the model, interpret.
//!
//! The model itself stays outside this crate behind the `Inference` trait.
//! `FramePipeline` owns the resample buffer, the raw output buffer and the
//! draw command list, so a processing thread can run frame after frame
//! without allocating. Bad frames are reported and skipped, never fatal.

pub mod config;
pub mod error;
pub mod inference;
pub mod pipeline;

pub use config::PipelineConfig;
pub use error::PipelineError;
pub use inference::{Dequantize, Inference, InferenceError, QuantizedInference};
pub use pipeline::{FramePipeline, FrameStats};
