use crate::PoseError;
use serde::{Deserialize, Serialize};

/// Element type of an integer model output tensor.
pub trait QuantizedValue: Copy {
    fn widen(self) -> i32;
}

impl QuantizedValue for u8 {
    fn widen(self) -> i32 {
        self as i32
    }
}

impl QuantizedValue for i8 {
    fn widen(self) -> i32 {
        self as i32
    }
}

/// Affine quantization parameters of an integer model output tensor.
///
/// `real = (quantized - zero_point) * scale`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quantization {
    pub scale: f32,
    pub zero_point: i32,
}

impl Quantization {
    pub fn new(scale: f32, zero_point: i32) -> Self {
        Self { scale, zero_point }
    }

    #[inline]
    pub fn dequantize(&self, value: i32) -> f32 {
        (value - self.zero_point) as f32 * self.scale
    }

    /// Dequantizes a `uint8` or `int8` tensor into `out`, which must be the
    /// same length.
    pub fn dequantize_slice<Q: QuantizedValue>(
        &self,
        input: &[Q],
        out: &mut [f32],
    ) -> Result<(), PoseError> {
        if input.len() != out.len() {
            return Err(PoseError::MalformedOutput {
                expected: out.len(),
                got: input.len(),
            });
        }
        for (q, value) in input.iter().zip(out.iter_mut()) {
            *value = self.dequantize(q.widen());
        }
        Ok(())
    }
}
