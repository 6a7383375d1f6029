use crate::{CropPolicy, FrameError, OUTPUT_CHANNELS, PixelLayout, SourceFrame, TargetSpec};
use log::debug;

/// Resampling context owning the model-input buffer.
///
/// The buffer is resized only when the target size changes, so steady-state
/// calls do not allocate. `resample` borrows the resampler mutably, which
/// keeps the buffer single-writer; give each processing thread its own
/// resampler.
#[derive(Debug, Default)]
pub struct FrameResampler {
    scratch: Vec<u8>,
    resizes: usize,
}

impl FrameResampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a resampler whose buffer already fits `target`.
    ///
    /// # Errors
    ///
    /// Returns `FrameError::InvalidDimensions` if `target` fails
    /// `TargetSpec::validate`.
    pub fn with_capacity(target: &TargetSpec) -> Result<Self, FrameError> {
        target.validate()?;
        Ok(Self {
            scratch: vec![0; target.len()],
            resizes: 0,
        })
    }

    /// Resamples `source` into the owned buffer and returns it.
    ///
    /// The returned slice stays valid until the next call.
    ///
    /// # Errors
    ///
    /// Returns `FrameError::InvalidDimensions` if the target is empty or
    /// larger than the source.
    pub fn resample(
        &mut self,
        source: &SourceFrame,
        target: &TargetSpec,
    ) -> Result<&[u8], FrameError> {
        target.validate_for(source)?;

        let len = target.len();
        if self.scratch.len() != len {
            debug!(
                "resizing resample buffer from {} to {} bytes for {}x{} target",
                self.scratch.len(),
                len,
                target.width,
                target.height
            );
            self.scratch.resize(len, 0);
            self.resizes += 1;
        }

        resample_into(source, target, &mut self.scratch)?;
        Ok(self.scratch.as_slice())
    }

    /// Output of the last successful `resample`.
    pub fn buffer(&self) -> &[u8] {
        &self.scratch
    }

    /// Number of times the buffer had to change size.
    pub fn resizes(&self) -> usize {
        self.resizes
    }
}

/// Resamples `source` into a caller-provided buffer.
///
/// `out` must be exactly `target.len()` bytes. Geometry mapping and the
/// channel reorder happen in one pass: one source read and one 3-byte write
/// per output pixel.
///
/// # Errors
///
/// Returns `FrameError::InvalidDimensions` for an empty or oversized target,
/// and `FrameError::BufferSizeMismatch` if `out` has the wrong length.
pub fn resample_into(
    source: &SourceFrame,
    target: &TargetSpec,
    out: &mut [u8],
) -> Result<(), FrameError> {
    target.validate_for(source)?;
    if out.len() != target.len() {
        return Err(FrameError::BufferSizeMismatch {
            expected: target.len(),
            got: out.len(),
        });
    }

    match target.policy {
        CropPolicy::CenterCropResample => center_crop_resample(source, target, out),
        CropPolicy::ExactCrop => exact_crop(source, target, out),
    }
    Ok(())
}

fn center_crop_resample(source: &SourceFrame, target: &TargetSpec, out: &mut [u8]) {
    let (sw, sh) = (source.width(), source.height());
    let (tw, th) = (target.width, target.height);

    // the longer axis span grows by half the aspect difference
    let span_x = sw + sw.saturating_sub(sh) / 2;
    let span_y = sh + sh.saturating_sub(sw) / 2;

    // the widened span maps past the last column/row; clamp to the edge
    remap(
        source,
        out,
        tw,
        |x| (x * span_x / tw).min(sw - 1),
        |y| (y * span_y / th).min(sh - 1),
    );
}

fn exact_crop(source: &SourceFrame, target: &TargetSpec, out: &mut [u8]) {
    let crop_x = (source.width() - target.width) / 2;
    let crop_y = (source.height() - target.height) / 2;

    if source.layout() == PixelLayout::Rgb8 {
        let row_bytes = target.width * OUTPUT_CHANNELS;
        let data = source.data();
        for (y, row) in out.chunks_exact_mut(row_bytes).enumerate() {
            let start = source.pixel_offset(crop_x, crop_y + y);
            row.copy_from_slice(&data[start..start + row_bytes]);
        }
        return;
    }

    remap(source, out, target.width, |x| x + crop_x, |y| y + crop_y);
}

/// Fills `out` row by row, sampling source pixel `(map_x(x), map_y(y))`.
///
/// The layout is matched once per frame so the per-pixel loop carries no
/// layout branch.
fn remap(
    source: &SourceFrame,
    out: &mut [u8],
    target_width: usize,
    map_x: impl Fn(usize) -> usize,
    map_y: impl Fn(usize) -> usize,
) {
    let data = source.data();
    match source.layout() {
        PixelLayout::Bgra8 => fill(out, target_width, &map_x, &map_y, |x, y| {
            let i = source.pixel_offset(x, y);
            [data[i + 2], data[i + 1], data[i]]
        }),
        PixelLayout::Rgb8 => fill(out, target_width, &map_x, &map_y, |x, y| {
            let i = source.pixel_offset(x, y);
            [data[i], data[i + 1], data[i + 2]]
        }),
        PixelLayout::RgbPlanar => {
            let plane = source.plane_len();
            fill(out, target_width, &map_x, &map_y, |x, y| {
                let i = source.pixel_offset(x, y);
                [data[i], data[plane + i], data[2 * plane + i]]
            })
        }
    }
}

#[inline(always)]
fn fill(
    out: &mut [u8],
    target_width: usize,
    map_x: &impl Fn(usize) -> usize,
    map_y: &impl Fn(usize) -> usize,
    read: impl Fn(usize, usize) -> [u8; 3],
) {
    for (y, row) in out.chunks_exact_mut(target_width * OUTPUT_CHANNELS).enumerate() {
        let src_y = map_y(y);
        for (x, pixel) in row.chunks_exact_mut(OUTPUT_CHANNELS).enumerate() {
            pixel.copy_from_slice(&read(map_x(x), src_y));
        }
    }
}
