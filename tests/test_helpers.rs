//! Shared fixtures for integration tests

use std::collections::BTreeMap;

use body_face_tracker::types::{
    DetectionResult, FaceGeometryResult, FacePointKind, FaceProperty, FaceRect, PointF,
    Quaternion, ReferenceFrame,
};

pub const HD_FRAME: ReferenceFrame = ReferenceFrame {
    width: 1920,
    height: 1080,
};

/// A face comfortably inside `HD_FRAME`, looking in the direction of `rotation`.
pub fn centered_face(rotation: Quaternion) -> FaceGeometryResult {
    FaceGeometryResult {
        bounding_box: FaceRect {
            left: 860,
            top: 420,
            right: 1060,
            bottom: 660,
        },
        landmarks: Some(BTreeMap::from([
            (FacePointKind::EyeLeft, PointF { x: 920.0, y: 500.0 }),
            (FacePointKind::EyeRight, PointF { x: 1000.0, y: 500.0 }),
            (FacePointKind::Nose, PointF { x: 960.0, y: 550.0 }),
            (FacePointKind::MouthCornerLeft, PointF { x: 930.0, y: 600.0 }),
            (FacePointKind::MouthCornerRight, PointF { x: 990.0, y: 600.0 }),
        ])),
        attributes: BTreeMap::from([
            (FaceProperty::Happy, DetectionResult::Yes),
            (FaceProperty::WearingGlasses, DetectionResult::Maybe),
            (FaceProperty::LookingAway, DetectionResult::No),
        ]),
        rotation,
    }
}
