use posecam_pose::{DrawCommand, DrawSink};

/// Rasterizes draw commands onto a packed RGB buffer.
///
/// Everything is clipped to the buffer, so commands may extend past the
/// frame edges.
pub struct Canvas<'a> {
    buf: &'a mut [u8],
    width: usize,
    height: usize,
    line_color: [u8; 3],
    point_color: [u8; 3],
}

impl<'a> Canvas<'a> {
    /// Returns `None` unless `buf` holds exactly `width * height * 3` bytes.
    pub fn new(buf: &'a mut [u8], width: usize, height: usize) -> Option<Self> {
        if buf.len() != width.checked_mul(height)?.checked_mul(3)? {
            return None;
        }
        Some(Self {
            buf,
            width,
            height,
            line_color: [0, 255, 0],
            point_color: [255, 0, 0],
        })
    }

    pub fn with_line_color(mut self, color: [u8; 3]) -> Self {
        self.line_color = color;
        self
    }

    pub fn with_point_color(mut self, color: [u8; 3]) -> Self {
        self.point_color = color;
        self
    }

    /// Draws every command in order.
    pub fn render(&mut self, commands: &[DrawCommand]) {
        for command in commands {
            self.draw(*command);
        }
    }

    fn set_pixel(&mut self, x: usize, y: usize, color: [u8; 3]) {
        let i = (y * self.width + x) * 3;
        self.buf[i..i + 3].copy_from_slice(&color);
    }

    /// Fills the pixels whose top-left corner lies in `[x, x + size) x [y, y + size)`.
    pub fn fill_square(&mut self, x: f32, y: f32, size: f32, color: [u8; 3]) {
        let (x0, x1) = clip_span(x, x + size, self.width);
        let (y0, y1) = clip_span(y, y + size, self.height);
        for py in y0..y1 {
            for px in x0..x1 {
                self.set_pixel(px, py, color);
            }
        }
    }

    /// Bresenham line from `(x1, y1)` to `(x2, y2)`, clipped to the canvas.
    pub fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: [u8; 3]) {
        let Some((x1, y1, x2, y2)) = clip_line(x1, y1, x2, y2, self.width, self.height) else {
            return;
        };
        let (mut x, mut y) = (x1, y1);
        let dx = (x2 - x1).abs();
        let dy = -(y2 - y1).abs();
        let sx = if x1 < x2 { 1 } else { -1 };
        let sy = if y1 < y2 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.set_pixel(x as usize, y as usize, color);
            if x == x2 && y == y2 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }
}

impl DrawSink for Canvas<'_> {
    fn draw(&mut self, command: DrawCommand) {
        match command {
            DrawCommand::Point { x, y, size } => self.fill_square(x, y, size, self.point_color),
            DrawCommand::Segment { x1, y1, x2, y2 } => {
                self.draw_line(x1, y1, x2, y2, self.line_color)
            }
        }
    }
}

fn clip_span(start: f32, end: f32, limit: usize) -> (usize, usize) {
    let start = start.ceil().clamp(0.0, limit as f32) as usize;
    let end = end.ceil().clamp(0.0, limit as f32) as usize;
    (start, end.max(start))
}

/// Liang-Barsky clip against the pixel rectangle, rounded to pixel centers.
fn clip_line(
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
    width: usize,
    height: usize,
) -> Option<(i32, i32, i32, i32)> {
    if width == 0 || height == 0 || !(x1.is_finite() && y1.is_finite() && x2.is_finite() && y2.is_finite()) {
        return None;
    }
    let (max_x, max_y) = ((width - 1) as f32, (height - 1) as f32);
    let (dx, dy) = (x2 - x1, y2 - y1);
    let (mut t0, mut t1) = (0.0f32, 1.0f32);

    for (p, q) in [(-dx, x1), (dx, max_x - x1), (-dy, y1), (dy, max_y - y1)] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let t = q / p;
        if p < 0.0 {
            t0 = t0.max(t);
        } else {
            t1 = t1.min(t);
        }
        if t0 > t1 {
            return None;
        }
    }

    let round = |v: f32, max: f32| v.round().clamp(0.0, max) as i32;
    Some((
        round(x1 + t0 * dx, max_x),
        round(y1 + t0 * dy, max_y),
        round(x1 + t1 * dx, max_x),
        round(y1 + t1 * dy, max_y),
    ))
}
