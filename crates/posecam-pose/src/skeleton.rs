use crate::Landmark;

/// Pair of landmarks joined by a line in the overlay.
pub type SkeletonEdge = (Landmark, Landmark);

/// Limbs and torso drawn for a visible pose, in drawing order.
pub const SKELETON_EDGES: [SkeletonEdge; 12] = {
    use Landmark::*;
    [
        (LeftShoulder, RightShoulder),
        (LeftShoulder, LeftElbow),
        (LeftElbow, LeftWrist),
        (RightShoulder, RightElbow),
        (RightElbow, RightWrist),
        (LeftShoulder, LeftHip),
        (RightShoulder, RightHip),
        (LeftHip, RightHip),
        (LeftHip, LeftKnee),
        (LeftKnee, LeftAnkle),
        (RightHip, RightKnee),
        (RightKnee, RightAnkle),
    ]
};
