use crate::{FrameError, SourceFrame};
use serde::{Deserialize, Serialize};

/// Output is always interleaved RGB.
pub const OUTPUT_CHANNELS: usize = 3;

/// Largest accepted target width or height.
pub const MAX_TARGET_SIDE: usize = 8192;

/// How the source is mapped onto the target rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CropPolicy {
    /// Nearest-neighbor resample over the source widened by half the
    /// difference between its longer and shorter side.
    #[default]
    CenterCropResample,
    /// 1:1 copy of the centered `target` sized sub-rectangle.
    ExactCrop,
}

/// Size and mapping of the model input buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetSpec {
    pub width: usize,
    pub height: usize,
    pub policy: CropPolicy,
}

impl TargetSpec {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            policy: CropPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: CropPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Byte length of the packed RGB output, saturating at `usize::MAX`.
    ///
    /// Sizes that pass `validate` never saturate.
    pub fn len(&self) -> usize {
        self.checked_len().unwrap_or(usize::MAX)
    }

    pub fn checked_len(&self) -> Option<usize> {
        self.width
            .checked_mul(self.height)?
            .checked_mul(OUTPUT_CHANNELS)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks the target size on its own: both sides non-zero and at most
    /// `MAX_TARGET_SIDE`.
    pub fn validate(&self) -> Result<(), FrameError> {
        if self.width == 0 || self.height == 0 {
            return Err(FrameError::InvalidDimensions(format!(
                "target is {}x{}",
                self.width, self.height
            )));
        }
        if self.width > MAX_TARGET_SIDE || self.height > MAX_TARGET_SIDE {
            return Err(FrameError::InvalidDimensions(format!(
                "target {}x{} exceeds {MAX_TARGET_SIDE} pixels per side",
                self.width, self.height
            )));
        }
        Ok(())
    }

    /// Checks this target can be produced from `source`.
    ///
    /// The pipeline only ever downscales, so a target larger than the source
    /// in either direction is a caller error.
    pub fn validate_for(&self, source: &SourceFrame) -> Result<(), FrameError> {
        self.validate()?;
        if self.width > source.width() || self.height > source.height() {
            return Err(FrameError::InvalidDimensions(format!(
                "target {}x{} exceeds source {}x{}",
                self.width,
                self.height,
                source.width(),
                source.height()
            )));
        }
        Ok(())
    }
}
