use crate::InferenceError;
use posecam_frame::FrameError;
use posecam_pose::PoseError;
use std::fmt;

#[derive(Debug)]
pub enum PipelineError {
    Frame(FrameError),
    Pose(PoseError),
    Inference(InferenceError),
    Config(String),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Frame(err) => write!(f, "frame error: {err}"),
            PipelineError::Pose(err) => write!(f, "pose error: {err}"),
            PipelineError::Inference(err) => write!(f, "inference error: {err}"),
            PipelineError::Config(msg) => write!(f, "config error: {msg}"),
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PipelineError::Frame(err) => Some(err),
            PipelineError::Pose(err) => Some(err),
            PipelineError::Inference(err) => Some(err),
            PipelineError::Config(_) => None,
        }
    }
}

impl From<FrameError> for PipelineError {
    fn from(err: FrameError) -> Self {
        PipelineError::Frame(err)
    }
}

impl From<PoseError> for PipelineError {
    fn from(err: PoseError) -> Self {
        PipelineError::Pose(err)
    }
}

impl From<InferenceError> for PipelineError {
    fn from(err: InferenceError) -> Self {
        PipelineError::Inference(err)
    }
}

impl From<serde_json::Error> for PipelineError {
    fn from(err: serde_json::Error) -> Self {
        PipelineError::Config(err.to_string())
    }
}
