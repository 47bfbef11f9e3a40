use std::{
    collections::BTreeMap,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    thread,
    time::{Duration, Instant},
};

use super::{orientation::quaternion_from_degrees, worker::TrackerInputs};
use crate::{
    config::SimulationConfig,
    error::{Error, Result},
    types::{
        CameraSpacePoint, DetectionResult, FaceGeometryResult, FacePointKind, FaceProperty,
        FaceRect, Joint, JointKind, PointF, ReferenceFrame, TrackedBody, TrackingState,
    },
};

const BASE_TRACKING_ID: u64 = 72_057_594_037_927_936;
/// Slot of the body that walks into view; every other slot stays empty.
const ACTIVE_SLOT: usize = 1;
/// The color camera of the Kinect v2.
pub const SENSOR_FRAME: ReferenceFrame = ReferenceFrame {
    width: 1920,
    height: 1080,
};

#[derive(Debug)]
pub struct SensorStream {
    stop: Arc<AtomicBool>,
    handle: Option<thread::JoinHandle<()>>,
}

impl SensorStream {
    pub fn stop(mut self) {
        self.stop.store(true, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Blocks until the stream has produced its configured number of frames.
    pub fn wait(mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for SensorStream {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

pub fn reference_frame() -> ReferenceFrame {
    SENSOR_FRAME
}

/// Feeds synthetic body snapshots and face results into `inputs`.
pub fn start_simulated_sensor(
    config: &SimulationConfig,
    frame: ReferenceFrame,
    inputs: TrackerInputs,
) -> Result<SensorStream> {
    if config.fps == 0 || config.body_count == 0 {
        return Err(Error::Config(format!(
            "simulation needs bodies and a frame rate, got {} bodies at {} fps",
            config.body_count, config.fps
        )));
    }

    let stop = Arc::new(AtomicBool::new(false));
    let stop_flag = stop.clone();
    let body_count = config.body_count;
    let frames = config.frames;
    let interval = Duration::from_secs_f64(1.0 / f64::from(config.fps));

    let handle = thread::Builder::new()
        .name("simulated-sensor".to_string())
        .spawn(move || {
            let mut tick = 0u64;
            while !stop_flag.load(Ordering::Relaxed) && frames.is_none_or(|limit| tick < limit) {
                let tick_start = Instant::now();

                if !inputs.face_result(simulated_face(tick, frame)) {
                    log::warn!("tracker stopped accepting face results");
                    break;
                }
                if !inputs.body_snapshot(simulated_bodies(tick, body_count)) {
                    log::warn!("tracker stopped accepting body snapshots");
                    break;
                }

                tick += 1;
                if let Some(rest) = interval.checked_sub(tick_start.elapsed()) {
                    thread::sleep(rest);
                }
            }
            log::info!("simulated sensor finished after {tick} frames");
        })?;

    Ok(SensorStream {
        stop,
        handle: Some(handle),
    })
}

pub fn simulated_bodies(tick: u64, body_count: usize) -> Vec<TrackedBody> {
    let active = ACTIVE_SLOT.min(body_count.saturating_sub(1));
    (0..body_count)
        .map(|slot| {
            let id = BASE_TRACKING_ID + slot as u64;
            if slot == active {
                TrackedBody::new(id, true).with_joints(simulated_joints(tick))
            } else {
                TrackedBody::new(id, false)
            }
        })
        .collect()
}

fn simulated_joints(tick: u64) -> Vec<Joint> {
    let sway = (tick as f32 * 0.05).sin() * 0.1;
    JointKind::ALL
        .iter()
        .enumerate()
        .map(|(idx, &kind)| Joint {
            kind,
            position: CameraSpacePoint {
                x: sway + (idx % 5) as f32 * 0.1 - 0.2,
                y: 0.8 - idx as f32 * 0.06,
                z: 2.0,
            },
            state: match kind {
                JointKind::HandTipLeft | JointKind::ThumbLeft => TrackingState::Inferred,
                JointKind::FootLeft | JointKind::FootRight if tick % 20 < 5 => {
                    TrackingState::NotTracked
                }
                _ => TrackingState::Tracked,
            },
        })
        .collect()
}

/// A face that turns its head from side to side; every 15th tick drifts out of frame.
pub fn simulated_face(tick: u64, frame: ReferenceFrame) -> Option<FaceGeometryResult> {
    if tick % 45 == 44 {
        return None;
    }

    let phase = tick as f64 * 0.04;
    let yaw = phase.sin() * 40.0;
    let pitch = (phase * 0.5).cos() * 15.0;
    let roll = (phase * 0.3).sin() * 10.0;

    let center_x = frame.width as i32 / 2 + (yaw * 4.0) as i32;
    let center_y = frame.height as i32 / 2;
    let half = 110;
    let drifted = if tick % 15 == 14 { frame.width as i32 } else { 0 };
    let bounding_box = FaceRect {
        left: center_x - half + drifted,
        top: center_y - half,
        right: center_x + half + drifted,
        bottom: center_y + half,
    };

    let landmark = |dx: i32, dy: i32| PointF {
        x: (center_x + dx) as f32,
        y: (center_y + dy) as f32,
    };
    let landmarks = BTreeMap::from([
        (FacePointKind::EyeLeft, landmark(-40, -30)),
        (FacePointKind::EyeRight, landmark(40, -30)),
        (FacePointKind::Nose, landmark(0, 10)),
        (FacePointKind::MouthCornerLeft, landmark(-30, 50)),
        (FacePointKind::MouthCornerRight, landmark(30, 50)),
    ]);

    let cycle = [
        DetectionResult::Yes,
        DetectionResult::No,
        DetectionResult::Maybe,
        DetectionResult::Unknown,
    ];
    let attributes = FaceProperty::ALL
        .iter()
        .enumerate()
        .map(|(idx, &property)| {
            let pick = (idx + (tick / 30) as usize) % cycle.len();
            (property, cycle[pick])
        })
        .collect();

    Some(FaceGeometryResult {
        bounding_box,
        landmarks: Some(landmarks),
        attributes,
        rotation: quaternion_from_degrees(pitch, yaw, roll),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::validator::validate;

    #[test]
    fn one_body_is_tracked() {
        let bodies = simulated_bodies(0, 6);
        assert_eq!(bodies.len(), 6);
        let tracked: Vec<_> = bodies.iter().filter(|b| b.is_tracked).collect();
        assert_eq!(tracked.len(), 1);
        assert_eq!(tracked[0].joints.len(), JointKind::ALL.len());
    }

    #[test]
    fn single_slot_sensor_tracks_slot_zero() {
        let bodies = simulated_bodies(0, 1);
        assert!(bodies[0].is_tracked);
    }

    #[test]
    fn zero_slots_yield_no_bodies() {
        assert!(simulated_bodies(0, 0).is_empty());
    }

    #[test]
    fn faces_mostly_validate() {
        let valid = (0..14)
            .filter(|&tick| validate(simulated_face(tick, SENSOR_FRAME).as_ref(), SENSOR_FRAME))
            .count();
        assert_eq!(valid, 14);
        assert!(!validate(simulated_face(14, SENSOR_FRAME).as_ref(), SENSOR_FRAME));
        assert!(simulated_face(44, SENSOR_FRAME).is_none());
    }
}
