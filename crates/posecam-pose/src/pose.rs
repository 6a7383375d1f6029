use crate::{LANDMARK_COUNT, Landmark, MODEL_OUTPUT_LEN, PoseError};
use posecam_base::Vec2;

/// One landmark in normalized frame coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Keypoint {
    /// `x` and `y` in `[0, 1]`, relative to the frame the model saw.
    pub position: Vec2<f32>,
    pub confidence: f32,
}

impl Keypoint {
    /// A keypoint is drawn only when its confidence is strictly above the threshold.
    pub fn is_visible(&self, threshold: f32) -> bool {
        self.confidence > threshold
    }

    /// Position in pixels: `x` against the frame width, `y` against its height.
    pub fn to_pixels(&self, frame_width: f32, frame_height: f32) -> Vec2<f32> {
        self.position * Vec2::new(frame_width, frame_height)
    }
}

/// All 17 landmarks of one inference result.
#[derive(Debug, Clone, PartialEq)]
pub struct Pose {
    pub keypoints: [Keypoint; LANDMARK_COUNT],
}

impl Pose {
    pub fn keypoint(&self, landmark: Landmark) -> &Keypoint {
        &self.keypoints[landmark.index()]
    }

    pub fn is_visible(&self, landmark: Landmark, threshold: f32) -> bool {
        self.keypoint(landmark).is_visible(threshold)
    }

    /// Landmarks above `threshold`, in model order.
    pub fn visible(&self, threshold: f32) -> impl Iterator<Item = (Landmark, &Keypoint)> {
        Landmark::ALL
            .into_iter()
            .map(|landmark| (landmark, self.keypoint(landmark)))
            .filter(move |(_, keypoint)| keypoint.is_visible(threshold))
    }
}

/// Reads the flat `[y, x, confidence] x 17` model output.
///
/// # Errors
///
/// Returns `PoseError::MalformedOutput` unless `output` holds exactly
/// `MODEL_OUTPUT_LEN` values.
pub fn decode_pose(output: &[f32]) -> Result<Pose, PoseError> {
    if output.len() != MODEL_OUTPUT_LEN {
        return Err(PoseError::MalformedOutput {
            expected: MODEL_OUTPUT_LEN,
            got: output.len(),
        });
    }

    let mut keypoints = [Keypoint::default(); LANDMARK_COUNT];
    for landmark in Landmark::ALL {
        let i = landmark.offset();
        keypoints[landmark.index()] = Keypoint {
            position: Vec2::new(output[i + 1], output[i]),
            confidence: output[i + 2],
        };
    }
    Ok(Pose { keypoints })
}
