use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    /// Zero, inconsistent or out-of-range source/target dimensions.
    InvalidDimensions(String),
    /// Caller-provided output buffer is not exactly `width * height * 3` bytes.
    BufferSizeMismatch { expected: usize, got: usize },
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::InvalidDimensions(msg) => write!(f, "invalid dimensions: {msg}"),
            FrameError::BufferSizeMismatch { expected, got } => {
                write!(f, "output buffer size mismatch: expected {expected} bytes, got {got}")
            }
        }
    }
}

impl std::error::Error for FrameError {}
