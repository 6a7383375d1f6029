//! Interpretation of single-pose model output.
//!
//! The model emits 17 landmarks as a flat `[y, x, confidence]` array in
//! normalized coordinates. This crate names those landmarks, applies the
//! confidence threshold and turns the visible skeleton into pixel-space
//! draw commands.

pub mod draw;
pub mod error;
pub mod interpreter;
pub mod landmark;
pub mod pose;
pub mod quantize;
pub mod skeleton;

pub use draw::{DrawCommand, DrawSink};
pub use error::PoseError;
pub use interpreter::{IconAnchor, InterpreterConfig, PoseInterpreter, interpret};
pub use landmark::{LANDMARK_COUNT, Landmark, MODEL_OUTPUT_LEN, VALUES_PER_LANDMARK};
pub use pose::{Keypoint, Pose, decode_pose};
pub use quantize::{Quantization, QuantizedValue};
pub use skeleton::{SKELETON_EDGES, SkeletonEdge};
