use crate::{DrawCommand, DrawSink, Landmark, Pose, PoseError, SKELETON_EDGES, decode_pose};
use log::trace;
use serde::{Deserialize, Serialize};

/// Icon drawn centered on one landmark, e.g. a face sticker on the nose.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IconAnchor {
    pub landmark: Landmark,
    pub size: f32,
}

/// Configuration for `PoseInterpreter`.
#[derive(Clone, Debug, PartialEq)]
pub struct InterpreterConfig {
    confidence_threshold: f32,
    dot_size: Option<f32>,
    icon: Option<IconAnchor>,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: 0.5,
            dot_size: None,
            icon: None,
        }
    }
}

impl InterpreterConfig {
    /// Set the confidence a landmark must exceed to be drawn.
    pub fn with_confidence_threshold(mut self, threshold: f32) -> Self {
        self.confidence_threshold = threshold;
        self
    }

    /// Draw a square of this size on every visible landmark.
    pub fn with_dot_size(mut self, dot_size: Option<f32>) -> Self {
        self.dot_size = dot_size;
        self
    }

    /// Anchor an icon on a landmark.
    pub fn with_icon(mut self, icon: Option<IconAnchor>) -> Self {
        self.icon = icon;
        self
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
}

/// Turns model output into overlay draw commands.
///
/// Holds configuration only; every call depends on its arguments alone.
/// Commands are emitted as skeleton segments in `SKELETON_EDGES` order,
/// then landmark dots in landmark order, then the icon.
#[derive(Clone, Debug, Default)]
pub struct PoseInterpreter {
    config: InterpreterConfig,
}

impl PoseInterpreter {
    pub fn new(config: InterpreterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &InterpreterConfig {
        &self.config
    }

    pub fn interpret(
        &self,
        output: &[f32],
        frame_width: usize,
        frame_height: usize,
    ) -> Result<Vec<DrawCommand>, PoseError> {
        let mut commands = Vec::new();
        self.interpret_into(output, frame_width, frame_height, &mut commands)?;
        Ok(commands)
    }

    /// Like `interpret`, refilling `commands` so its allocation carries over
    /// between frames. `commands` is left empty on error.
    pub fn interpret_into(
        &self,
        output: &[f32],
        frame_width: usize,
        frame_height: usize,
        commands: &mut Vec<DrawCommand>,
    ) -> Result<(), PoseError> {
        commands.clear();
        check_frame(frame_width, frame_height)?;
        let pose = decode_pose(output)?;
        self.emit(&pose, frame_width, frame_height, commands);
        Ok(())
    }

    /// Sends the overlay for an already decoded pose to `sink`.
    pub fn emit(
        &self,
        pose: &Pose,
        frame_width: usize,
        frame_height: usize,
        sink: &mut dyn DrawSink,
    ) {
        let (w, h) = (frame_width as f32, frame_height as f32);
        let threshold = self.config.confidence_threshold;

        let mut segments = 0;
        for (from, to) in SKELETON_EDGES {
            let (a, b) = (pose.keypoint(from), pose.keypoint(to));
            if !(a.is_visible(threshold) && b.is_visible(threshold)) {
                continue;
            }
            let (a, b) = (a.to_pixels(w, h), b.to_pixels(w, h));
            sink.draw(DrawCommand::Segment {
                x1: a.x,
                y1: a.y,
                x2: b.x,
                y2: b.y,
            });
            segments += 1;
        }

        if let Some(size) = self.config.dot_size {
            for (_, keypoint) in pose.visible(threshold) {
                let p = keypoint.to_pixels(w, h);
                sink.draw(DrawCommand::centered_point(p.x, p.y, size));
            }
        }

        if let Some(icon) = self.config.icon {
            let keypoint = pose.keypoint(icon.landmark);
            if keypoint.is_visible(threshold) {
                let p = keypoint.to_pixels(w, h);
                sink.draw(DrawCommand::centered_point(p.x, p.y, icon.size));
            }
        }

        trace!("emitted {segments} skeleton segments for {frame_width}x{frame_height} frame");
    }
}

fn check_frame(frame_width: usize, frame_height: usize) -> Result<(), PoseError> {
    if frame_width == 0 || frame_height == 0 {
        return Err(PoseError::InvalidFrame(format!(
            "cannot scale landmarks to a {frame_width}x{frame_height} frame"
        )));
    }
    Ok(())
}

/// Skeleton segments for `output` whose endpoints both exceed
/// `confidence_threshold`, scaled to `frame_width` by `frame_height` pixels.
///
/// # Errors
///
/// Returns `PoseError::MalformedOutput` if `output` is not exactly 51 values
/// and `PoseError::InvalidFrame` for a zero frame dimension.
pub fn interpret(
    output: &[f32],
    frame_width: usize,
    frame_height: usize,
    confidence_threshold: f32,
) -> Result<Vec<DrawCommand>, PoseError> {
    PoseInterpreter::new(InterpreterConfig::default().with_confidence_threshold(confidence_threshold))
        .interpret(output, frame_width, frame_height)
}
