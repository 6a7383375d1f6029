use posecam_pose::{PoseError, Quantization, QuantizedValue};
use std::fmt;

#[derive(Debug)]
pub enum InferenceError {
    /// The model failed to run.
    Runtime(String),
    /// The model produced something other than a flat landmark tensor.
    Output(String),
}

impl fmt::Display for InferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InferenceError::Runtime(msg) => write!(f, "runtime error: {msg}"),
            InferenceError::Output(msg) => write!(f, "output error: {msg}"),
        }
    }
}

impl std::error::Error for InferenceError {}

impl From<PoseError> for InferenceError {
    fn from(err: PoseError) -> Self {
        InferenceError::Output(err.to_string())
    }
}

/// A pose model, run synchronously on the frame-processing thread.
pub trait Inference {
    fn name(&self) -> &str;

    /// Runs the model on a packed `width` x `height` RGB buffer, replacing the
    /// contents of `output` with the flat float result.
    fn run(
        &mut self,
        input: &[u8],
        width: usize,
        height: usize,
        output: &mut Vec<f32>,
    ) -> Result<(), InferenceError>;
}

/// A model whose output tensor is `uint8` or `int8` quantized.
pub trait QuantizedInference {
    /// `u8` or `i8`, as the model's output tensor declares.
    type Value: QuantizedValue;

    fn name(&self) -> &str;

    fn quantization(&self) -> Quantization;

    fn run_quantized(
        &mut self,
        input: &[u8],
        width: usize,
        height: usize,
        output: &mut Vec<Self::Value>,
    ) -> Result<(), InferenceError>;
}

/// Adapts a quantized model to `Inference` by dequantizing its output.
pub struct Dequantize<I: QuantizedInference> {
    inner: I,
    raw: Vec<I::Value>,
}

impl<I: QuantizedInference> Dequantize<I> {
    pub fn new(inner: I) -> Self {
        Self {
            inner,
            raw: Vec::new(),
        }
    }

    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I: QuantizedInference> Inference for Dequantize<I> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn run(
        &mut self,
        input: &[u8],
        width: usize,
        height: usize,
        output: &mut Vec<f32>,
    ) -> Result<(), InferenceError> {
        self.raw.clear();
        self.inner.run_quantized(input, width, height, &mut self.raw)?;
        output.resize(self.raw.len(), 0.0);
        self.inner.quantization().dequantize_slice(&self.raw, output)?;
        Ok(())
    }
}
