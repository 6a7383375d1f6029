use posecam_pipeline::{Inference, InferenceError};

/// Stands in for a pose model by replaying recorded output.
///
/// The recording is a JSON array of floats in model output order.
pub struct KeypointReplay {
    output: Vec<f32>,
}

impl KeypointReplay {
    pub fn from_json(json: &str) -> Result<Self, InferenceError> {
        let output: Vec<f32> =
            serde_json::from_str(json).map_err(|e| InferenceError::Output(e.to_string()))?;
        Ok(Self { output })
    }

    pub fn output(&self) -> &[f32] {
        &self.output
    }
}

impl Inference for KeypointReplay {
    fn name(&self) -> &str {
        "keypoint-replay"
    }

    fn run(
        &mut self,
        _input: &[u8],
        _width: usize,
        _height: usize,
        output: &mut Vec<f32>,
    ) -> Result<(), InferenceError> {
        output.clear();
        output.extend_from_slice(&self.output);
        Ok(())
    }
}
