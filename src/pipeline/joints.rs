use std::fmt;

use crate::types::{CameraSpacePoint, JointKind, TrackedBody, TrackingId, TrackingState};

#[derive(Clone, Debug, PartialEq)]
pub struct BodyJointReport {
    /// 1-based position among the tracked bodies of the snapshot.
    pub ordinal: usize,
    pub id: TrackingId,
    pub joints: Vec<JointLine>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum JointLine {
    Measured(JointKind, CameraSpacePoint),
    Inferred(JointKind, CameraSpacePoint),
    Lost(JointKind),
}

impl fmt::Display for JointLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JointLine::Measured(kind, p) => write!(
                f,
                "{} tracked at X:{:.3}, Y:{:.3}, Z:{:.3}",
                kind.label(),
                p.x,
                p.y,
                p.z
            ),
            JointLine::Inferred(kind, p) => write!(
                f,
                "{} inferred at X:{:.3}, Y:{:.3}, Z:{:.3}",
                kind.label(),
                p.x,
                p.y,
                p.z
            ),
            JointLine::Lost(kind) => write!(f, "{} could not be measured", kind.label()),
        }
    }
}

/// Describes the joints of every tracked body, in snapshot order.
pub fn joint_reports(bodies: &[TrackedBody]) -> Vec<BodyJointReport> {
    bodies
        .iter()
        .filter(|body| body.is_tracked)
        .enumerate()
        .map(|(idx, body)| BodyJointReport {
            ordinal: idx + 1,
            id: body.id,
            joints: body
                .joints
                .iter()
                .map(|joint| match joint.state {
                    TrackingState::Tracked => JointLine::Measured(joint.kind, joint.position),
                    TrackingState::Inferred => JointLine::Inferred(joint.kind, joint.position),
                    TrackingState::NotTracked => JointLine::Lost(joint.kind),
                })
                .collect(),
        })
        .collect()
}
