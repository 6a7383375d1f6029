/// Overlay primitive in frame pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// `size` by `size` square whose top-left corner is `(x, y)`.
    Point { x: f32, y: f32, size: f32 },
    Segment { x1: f32, y1: f32, x2: f32, y2: f32 },
}

impl DrawCommand {
    /// Square of side `size` centered on `(cx, cy)`.
    pub fn centered_point(cx: f32, cy: f32, size: f32) -> Self {
        DrawCommand::Point {
            x: cx - size / 2.0,
            y: cy - size / 2.0,
            size,
        }
    }
}

/// Consumer of draw commands, typically a renderer.
pub trait DrawSink {
    fn draw(&mut self, command: DrawCommand);
}

impl DrawSink for Vec<DrawCommand> {
    fn draw(&mut self, command: DrawCommand) {
        self.push(command);
    }
}
