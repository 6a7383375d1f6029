use crate::PipelineError;
use posecam_base::LogTarget;
use posecam_frame::{CropPolicy, TargetSpec};
use posecam_pose::{IconAnchor, InterpreterConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for `FramePipeline`.
///
/// Missing JSON fields fall back to their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    target_width: usize,
    target_height: usize,
    crop_policy: CropPolicy,
    confidence_threshold: f32,
    dot_size: Option<f32>,
    icon: Option<IconAnchor>,
    log: LogTarget,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            target_width: 192,
            target_height: 192,
            crop_policy: CropPolicy::default(),
            confidence_threshold: 0.5,
            dot_size: Some(5.0),
            icon: None,
            log: LogTarget::default(),
        }
    }
}

impl PipelineConfig {
    /// Parses and validates a JSON config.
    pub fn from_json(json: &str) -> Result<Self, PipelineError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, PipelineError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| PipelineError::Config(format!("reading {}: {e}", path.display())))?;
        Self::from_json(&json)
    }

    /// Set the model input size.
    pub fn with_target_size(mut self, width: usize, height: usize) -> Self {
        self.target_width = width;
        self.target_height = height;
        self
    }

    pub fn with_crop_policy(mut self, policy: CropPolicy) -> Self {
        self.crop_policy = policy;
        self
    }

    pub fn with_confidence_threshold(mut self, threshold: f32) -> Self {
        self.confidence_threshold = threshold;
        self
    }

    /// Set the landmark dot size, `None` draws the skeleton only.
    pub fn with_dot_size(mut self, dot_size: Option<f32>) -> Self {
        self.dot_size = dot_size;
        self
    }

    pub fn with_icon(mut self, icon: Option<IconAnchor>) -> Self {
        self.icon = icon;
        self
    }

    pub fn with_log(mut self, log: LogTarget) -> Self {
        self.log = log;
        self
    }

    pub fn target_width(&self) -> usize {
        self.target_width
    }

    pub fn target_height(&self) -> usize {
        self.target_height
    }

    pub fn crop_policy(&self) -> CropPolicy {
        self.crop_policy
    }

    pub fn confidence_threshold(&self) -> f32 {
        self.confidence_threshold
    }

    pub fn dot_size(&self) -> Option<f32> {
        self.dot_size
    }

    pub fn icon(&self) -> Option<IconAnchor> {
        self.icon
    }

    pub fn log(&self) -> &LogTarget {
        &self.log
    }

    pub fn target(&self) -> TargetSpec {
        TargetSpec::new(self.target_width, self.target_height).with_policy(self.crop_policy)
    }

    pub fn interpreter_config(&self) -> InterpreterConfig {
        InterpreterConfig::default()
            .with_confidence_threshold(self.confidence_threshold)
            .with_dot_size(self.dot_size)
            .with_icon(self.icon)
    }

    pub fn validate(&self) -> Result<(), PipelineError> {
        self.target()
            .validate()
            .map_err(|e| PipelineError::Config(e.to_string()))?;
        if !(0.0..=1.0).contains(&self.confidence_threshold) {
            return Err(PipelineError::Config(format!(
                "confidence threshold must be within [0, 1], got {}",
                self.confidence_threshold
            )));
        }
        if let Some(size) = self.dot_size {
            if !(size > 0.0) {
                return Err(PipelineError::Config(format!(
                    "dot size must be positive, got {size}"
                )));
            }
        }
        if let Some(icon) = self.icon {
            if !(icon.size > 0.0) {
                return Err(PipelineError::Config(format!(
                    "icon size must be positive, got {}",
                    icon.size
                )));
            }
        }
        Ok(())
    }
}
