use crate::{FrameError, PixelLayout};

/// Borrowed view of one camera frame.
///
/// Rows are `stride` bytes apart and the stride may include platform
/// padding, so row `y` always starts at `y * stride`, never at
/// `y * width * bytes_per_pixel`.
#[derive(Debug, Clone, Copy)]
pub struct SourceFrame<'a> {
    width: usize,
    height: usize,
    stride: usize,
    layout: PixelLayout,
    data: &'a [u8],
}

impl<'a> SourceFrame<'a> {
    /// Wraps `data` after checking it can hold `height` rows of `stride` bytes.
    ///
    /// # Errors
    ///
    /// Returns `FrameError::InvalidDimensions` if a dimension is zero, the
    /// stride is shorter than one row of pixels, or `data` is too short.
    pub fn new(
        width: usize,
        height: usize,
        stride: usize,
        layout: PixelLayout,
        data: &'a [u8],
    ) -> Result<Self, FrameError> {
        if width == 0 || height == 0 {
            return Err(FrameError::InvalidDimensions(format!(
                "source frame is {width}x{height}"
            )));
        }
        let row_bytes = width
            .checked_mul(layout.bytes_per_pixel())
            .ok_or_else(|| FrameError::InvalidDimensions(format!("width {width} overflows")))?;
        if stride < row_bytes {
            return Err(FrameError::InvalidDimensions(format!(
                "stride {stride} is shorter than a {width} pixel {layout:?} row ({row_bytes} bytes)"
            )));
        }
        let required = required_len(height, stride, row_bytes, layout).ok_or_else(|| {
            FrameError::InvalidDimensions(format!("{height} rows of {stride} bytes overflow"))
        })?;
        if data.len() < required {
            return Err(FrameError::InvalidDimensions(format!(
                "{width}x{height} {layout:?} frame with stride {stride} needs {required} bytes, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            stride,
            layout,
            data,
        })
    }

    /// Wraps a frame whose rows carry no padding.
    pub fn packed(
        width: usize,
        height: usize,
        layout: PixelLayout,
        data: &'a [u8],
    ) -> Result<Self, FrameError> {
        let stride = width.saturating_mul(layout.bytes_per_pixel());
        Self::new(width, height, stride, layout, data)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn layout(&self) -> PixelLayout {
        self.layout
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Byte offset of pixel `(x, y)` within its row-major plane.
    #[inline]
    pub fn pixel_offset(&self, x: usize, y: usize) -> usize {
        y * self.stride + x * self.layout.bytes_per_pixel()
    }

    /// Pixel `(x, y)` in straight `R, G, B` order.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn rgb_at(&self, x: usize, y: usize) -> [u8; 3] {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) outside frame");
        let i = self.pixel_offset(x, y);
        let data = self.data;
        match self.layout {
            PixelLayout::Bgra8 => [data[i + 2], data[i + 1], data[i]],
            PixelLayout::Rgb8 => [data[i], data[i + 1], data[i + 2]],
            PixelLayout::RgbPlanar => {
                let plane = self.plane_len();
                [data[i], data[plane + i], data[2 * plane + i]]
            }
        }
    }

    pub(crate) fn plane_len(&self) -> usize {
        self.stride * self.height
    }
}

fn required_len(height: usize, stride: usize, row_bytes: usize, layout: PixelLayout) -> Option<usize> {
    match layout {
        // the final row may stop right after its last pixel
        PixelLayout::Bgra8 | PixelLayout::Rgb8 => stride.checked_mul(height - 1)?.checked_add(row_bytes),
        PixelLayout::RgbPlanar => stride.checked_mul(height)?.checked_mul(3),
    }
}
