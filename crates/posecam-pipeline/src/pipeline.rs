use crate::{Inference, PipelineConfig, PipelineError};
use log::{info, trace, warn};
use posecam_frame::{FrameResampler, SourceFrame, TargetSpec};
use posecam_pose::{DrawCommand, PoseInterpreter};

/// Frame counters kept by `FramePipeline::process_or_skip`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameStats {
    pub processed: u64,
    pub skipped: u64,
}

/// Resample, infer and interpret, one frame at a time.
///
/// Owns every per-frame buffer, so one pipeline belongs to one processing
/// thread.
pub struct FramePipeline<I> {
    target: TargetSpec,
    resampler: FrameResampler,
    inference: I,
    interpreter: PoseInterpreter,
    output: Vec<f32>,
    commands: Vec<DrawCommand>,
    stats: FrameStats,
}

impl<I: Inference> FramePipeline<I> {
    pub fn new(config: &PipelineConfig, inference: I) -> Result<Self, PipelineError> {
        config.validate()?;
        let target = config.target();
        info!(
            "pose pipeline: model {}, {}x{} input, {:?}, threshold {}",
            inference.name(),
            target.width,
            target.height,
            target.policy,
            config.confidence_threshold()
        );
        Ok(Self {
            resampler: FrameResampler::with_capacity(&target)?,
            target,
            inference,
            interpreter: PoseInterpreter::new(config.interpreter_config()),
            output: Vec::new(),
            commands: Vec::new(),
            stats: FrameStats::default(),
        })
    }

    /// Runs one frame and returns its draw commands, in frame pixels.
    pub fn process(&mut self, frame: &SourceFrame) -> Result<&[DrawCommand], PipelineError> {
        self.commands.clear();
        let input = self.resampler.resample(frame, &self.target)?;
        self.inference
            .run(input, self.target.width, self.target.height, &mut self.output)?;
        self.interpreter
            .interpret_into(&self.output, frame.width(), frame.height(), &mut self.commands)?;
        trace!(
            "{}x{} frame: {} draw commands",
            frame.width(),
            frame.height(),
            self.commands.len()
        );
        Ok(&self.commands)
    }

    /// Like `process`, but a failed frame is logged and skipped.
    pub fn process_or_skip(&mut self, frame: &SourceFrame) -> Option<&[DrawCommand]> {
        let result = self.process(frame).map(|_| ());
        match result {
            Ok(()) => {
                self.stats.processed += 1;
                Some(&self.commands)
            }
            Err(err) => {
                self.stats.skipped += 1;
                warn!(
                    "skipping {}x{} frame ({} skipped so far): {err}",
                    frame.width(),
                    frame.height(),
                    self.stats.skipped
                );
                None
            }
        }
    }

    /// Draw commands of the last frame, empty if it failed.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    pub fn target(&self) -> &TargetSpec {
        &self.target
    }

    pub fn resampler(&self) -> &FrameResampler {
        &self.resampler
    }

    pub fn inference(&self) -> &I {
        &self.inference
    }

    pub fn inference_mut(&mut self) -> &mut I {
        &mut self.inference
    }

    pub fn into_inference(self) -> I {
        self.inference
    }
}
