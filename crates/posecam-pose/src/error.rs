use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoseError {
    /// Model output does not have the expected number of values.
    MalformedOutput { expected: usize, got: usize },
    /// Frame dimensions the landmarks are scaled against are unusable.
    InvalidFrame(String),
}

impl fmt::Display for PoseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoseError::MalformedOutput { expected, got } => {
                write!(f, "malformed model output: expected {expected} values, got {got}")
            }
            PoseError::InvalidFrame(msg) => write!(f, "invalid frame: {msg}"),
        }
    }
}

impl std::error::Error for PoseError {}
