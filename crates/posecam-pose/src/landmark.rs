use serde::{Deserialize, Serialize};

/// Number of landmarks in the single-pose topology.
pub const LANDMARK_COUNT: usize = 17;

/// Each landmark is stored as `y, x, confidence`.
pub const VALUES_PER_LANDMARK: usize = 3;

/// Length of one inference result.
pub const MODEL_OUTPUT_LEN: usize = LANDMARK_COUNT * VALUES_PER_LANDMARK;

/// Body landmarks in model output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(usize)]
pub enum Landmark {
    Nose = 0,
    LeftEye = 1,
    RightEye = 2,
    LeftEar = 3,
    RightEar = 4,
    LeftShoulder = 5,
    RightShoulder = 6,
    LeftElbow = 7,
    RightElbow = 8,
    LeftWrist = 9,
    RightWrist = 10,
    LeftHip = 11,
    RightHip = 12,
    LeftKnee = 13,
    RightKnee = 14,
    LeftAnkle = 15,
    RightAnkle = 16,
}

impl Landmark {
    pub const ALL: [Landmark; LANDMARK_COUNT] = [
        Landmark::Nose,
        Landmark::LeftEye,
        Landmark::RightEye,
        Landmark::LeftEar,
        Landmark::RightEar,
        Landmark::LeftShoulder,
        Landmark::RightShoulder,
        Landmark::LeftElbow,
        Landmark::RightElbow,
        Landmark::LeftWrist,
        Landmark::RightWrist,
        Landmark::LeftHip,
        Landmark::RightHip,
        Landmark::LeftKnee,
        Landmark::RightKnee,
        Landmark::LeftAnkle,
        Landmark::RightAnkle,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Offset of this landmark's `y` value in the flat output.
    /// `x` follows at `+ 1` and the confidence at `+ 2`.
    pub fn offset(self) -> usize {
        self.index() * VALUES_PER_LANDMARK
    }

    pub fn name(self) -> &'static str {
        match self {
            Landmark::Nose => "nose",
            Landmark::LeftEye => "left_eye",
            Landmark::RightEye => "right_eye",
            Landmark::LeftEar => "left_ear",
            Landmark::RightEar => "right_ear",
            Landmark::LeftShoulder => "left_shoulder",
            Landmark::RightShoulder => "right_shoulder",
            Landmark::LeftElbow => "left_elbow",
            Landmark::RightElbow => "right_elbow",
            Landmark::LeftWrist => "left_wrist",
            Landmark::RightWrist => "right_wrist",
            Landmark::LeftHip => "left_hip",
            Landmark::RightHip => "right_hip",
            Landmark::LeftKnee => "left_knee",
            Landmark::RightKnee => "right_knee",
            Landmark::LeftAnkle => "left_ankle",
            Landmark::RightAnkle => "right_ankle",
        }
    }
}

impl From<Landmark> for usize {
    fn from(landmark: Landmark) -> usize {
        landmark.index()
    }
}

impl TryFrom<usize> for Landmark {
    type Error = String;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Landmark::ALL.get(value).copied().ok_or_else(|| {
            format!(
                "invalid landmark index: {value}, must be below {LANDMARK_COUNT}"
            )
        })
    }
}
