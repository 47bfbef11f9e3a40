use crate::types::{TrackedBody, TrackingId};

/// Binds the face stream to a single body.
///
/// While unbound, each snapshot is scanned in order and the first tracked body
/// wins. Once bound the id is returned unchanged until [`FaceCorrelator::reset`]
/// is called or, if configured, the body has been missing for too long.
#[derive(Clone, Debug, Default)]
pub struct FaceCorrelator {
    bound: Option<TrackingId>,
    release_after: Option<u32>,
    missing_frames: u32,
}

impl FaceCorrelator {
    pub fn new(release_after: Option<u32>) -> Self {
        Self {
            bound: None,
            release_after,
            missing_frames: 0,
        }
    }

    pub fn bound(&self) -> Option<TrackingId> {
        self.bound
    }

    pub fn ensure_binding(&mut self, bodies: &[TrackedBody]) -> Option<TrackingId> {
        if let Some(id) = self.bound {
            if !self.should_release(id, bodies) {
                return Some(id);
            }
            log::info!(
                "releasing face binding {id} after {} missing frames",
                self.missing_frames
            );
            self.bound = None;
        }

        self.missing_frames = 0;
        self.bound = bodies.iter().find(|body| body.is_tracked).map(|body| body.id);
        if let Some(id) = self.bound {
            log::info!("face bound to body {id}");
        }
        self.bound
    }

    /// Drops the binding, e.g. when the face stream reports its id invalid.
    pub fn reset(&mut self) {
        if let Some(id) = self.bound.take() {
            log::info!("face binding {id} reset");
        }
        self.missing_frames = 0;
    }

    fn should_release(&mut self, id: TrackingId, bodies: &[TrackedBody]) -> bool {
        let Some(limit) = self.release_after else {
            return false;
        };

        let present = bodies.iter().any(|body| body.id == id && body.is_tracked);
        if present {
            self.missing_frames = 0;
            return false;
        }

        self.missing_frames = self.missing_frames.saturating_add(1);
        self.missing_frames >= limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(id: u64, tracked: bool) -> TrackedBody {
        TrackedBody::new(id, tracked)
    }

    #[test]
    fn first_tracked_body_wins() {
        let mut correlator = FaceCorrelator::default();
        let bodies = [body(1, false), body(2, true), body(3, true)];
        assert_eq!(correlator.ensure_binding(&bodies), Some(TrackingId(2)));
    }

    #[test]
    fn stays_unbound_without_tracked_bodies() {
        let mut correlator = FaceCorrelator::default();
        assert_eq!(correlator.ensure_binding(&[]), None);
        assert_eq!(correlator.ensure_binding(&[body(1, false), body(2, false)]), None);
        assert_eq!(correlator.bound(), None);
    }

    #[test]
    fn binding_is_sticky_by_default() {
        let mut correlator = FaceCorrelator::default();
        correlator.ensure_binding(&[body(5, true)]);

        assert_eq!(correlator.ensure_binding(&[body(9, true), body(5, true)]), Some(TrackingId(5)));
        assert_eq!(correlator.ensure_binding(&[body(9, true)]), Some(TrackingId(5)));
        assert_eq!(correlator.ensure_binding(&[]), Some(TrackingId(5)));
    }

    #[test]
    fn reset_allows_rebinding() {
        let mut correlator = FaceCorrelator::default();
        correlator.ensure_binding(&[body(5, true)]);
        correlator.reset();
        assert_eq!(correlator.bound(), None);
        assert_eq!(correlator.ensure_binding(&[body(9, true)]), Some(TrackingId(9)));
    }

    #[test]
    fn releases_after_missing_window() {
        let mut correlator = FaceCorrelator::new(Some(3));
        correlator.ensure_binding(&[body(5, true)]);

        let others = [body(9, true)];
        assert_eq!(correlator.ensure_binding(&others), Some(TrackingId(5)));
        assert_eq!(correlator.ensure_binding(&others), Some(TrackingId(5)));
        assert_eq!(correlator.ensure_binding(&others), Some(TrackingId(9)));
    }

    #[test]
    fn untracked_counts_as_missing() {
        let mut correlator = FaceCorrelator::new(Some(1));
        correlator.ensure_binding(&[body(5, true)]);
        assert_eq!(correlator.ensure_binding(&[body(5, false)]), None);
    }

    #[test]
    fn reappearing_body_resets_missing_count() {
        let mut correlator = FaceCorrelator::new(Some(2));
        correlator.ensure_binding(&[body(5, true)]);

        assert_eq!(correlator.ensure_binding(&[body(9, true)]), Some(TrackingId(5)));
        assert_eq!(correlator.ensure_binding(&[body(5, true)]), Some(TrackingId(5)));
        assert_eq!(correlator.ensure_binding(&[body(9, true)]), Some(TrackingId(5)));
        assert_eq!(correlator.ensure_binding(&[body(9, true)]), Some(TrackingId(9)));
    }
}
