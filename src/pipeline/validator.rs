use crate::types::{FaceGeometryResult, FaceRect, PointF, ReferenceFrame};

/// Returns true when the face box and every landmark fall inside `frame`.
///
/// The box must have positive extent and may touch the right/bottom edge.
/// Landmarks must lie strictly inside the frame. Missing landmarks are not an
/// error; the box result stands on its own.
pub fn validate(candidate: Option<&FaceGeometryResult>, frame: ReferenceFrame) -> bool {
    let Some(face) = candidate else {
        return false;
    };

    if !box_in_frame(&face.bounding_box, frame) {
        return false;
    }

    match &face.landmarks {
        Some(points) => points.values().all(|point| point_in_frame(point, frame)),
        None => true,
    }
}

fn box_in_frame(rect: &FaceRect, frame: ReferenceFrame) -> bool {
    let (left, top) = (i64::from(rect.left), i64::from(rect.top));
    let (right, bottom) = (i64::from(rect.right), i64::from(rect.bottom));

    right - left > 0
        && bottom - top > 0
        && right <= i64::from(frame.width)
        && bottom <= i64::from(frame.height)
}

fn point_in_frame(point: &PointF, frame: ReferenceFrame) -> bool {
    point.x > 0.0
        && point.y > 0.0
        && point.x < frame.width as f32
        && point.y < frame.height as f32
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::types::{FacePointKind, Quaternion};

    const FRAME: ReferenceFrame = ReferenceFrame {
        width: 1920,
        height: 1080,
    };

    fn face(rect: FaceRect, points: Option<Vec<(FacePointKind, f32, f32)>>) -> FaceGeometryResult {
        FaceGeometryResult {
            bounding_box: rect,
            landmarks: points.map(|points| {
                points
                    .into_iter()
                    .map(|(kind, x, y)| (kind, PointF { x, y }))
                    .collect()
            }),
            attributes: BTreeMap::new(),
            rotation: Quaternion::IDENTITY,
        }
    }

    fn rect(left: i32, top: i32, right: i32, bottom: i32) -> FaceRect {
        FaceRect {
            left,
            top,
            right,
            bottom,
        }
    }

    #[test]
    fn missing_candidate_is_invalid() {
        assert!(!validate(None, FRAME));
    }

    #[test]
    fn box_may_touch_far_edges() {
        assert!(validate(Some(&face(rect(0, 0, 1920, 1080), None)), FRAME));
        assert!(!validate(Some(&face(rect(0, 0, 1921, 1080), None)), FRAME));
        assert!(!validate(Some(&face(rect(0, 0, 1920, 1081), None)), FRAME));
    }

    #[test]
    fn box_needs_positive_extent() {
        assert!(!validate(Some(&face(rect(100, 100, 100, 200), None)), FRAME));
        assert!(!validate(Some(&face(rect(100, 200, 300, 200), None)), FRAME));
        assert!(!validate(Some(&face(rect(300, 100, 100, 200), None)), FRAME));
    }

    #[test]
    fn negative_origin_is_not_checked() {
        assert!(validate(Some(&face(rect(-20, -10, 100, 100), None)), FRAME));
    }

    #[test]
    fn landmarks_use_open_interval() {
        let box_ok = rect(100, 100, 400, 400);
        let at = |x: f32, y: f32| face(box_ok, Some(vec![(FacePointKind::Nose, x, y)]));

        assert!(!validate(Some(&at(0.0, 500.0)), FRAME));
        assert!(!validate(Some(&at(1920.0, 500.0)), FRAME));
        assert!(!validate(Some(&at(500.0, 0.0)), FRAME));
        assert!(!validate(Some(&at(500.0, 1080.0)), FRAME));
        assert!(validate(Some(&at(1919.9, 500.0)), FRAME));
        assert!(validate(Some(&at(0.1, 1079.9)), FRAME));
    }

    #[test]
    fn one_bad_landmark_invalidates_all() {
        let points = vec![
            (FacePointKind::EyeLeft, 200.0, 200.0),
            (FacePointKind::EyeRight, 260.0, 200.0),
            (FacePointKind::Nose, 230.0, 240.0),
            (FacePointKind::MouthCornerLeft, -1.0, 280.0),
            (FacePointKind::MouthCornerRight, 250.0, 280.0),
        ];
        assert!(!validate(Some(&face(rect(100, 100, 400, 400), Some(points))), FRAME));
    }

    #[test]
    fn bad_box_fails_even_with_good_landmarks() {
        let points = vec![(FacePointKind::Nose, 230.0, 240.0)];
        assert!(!validate(Some(&face(rect(100, 100, 2000, 400), Some(points))), FRAME));
    }

    #[test]
    fn empty_landmark_set_keeps_box_result() {
        assert!(validate(Some(&face(rect(100, 100, 400, 400), Some(Vec::new()))), FRAME));
    }
}
