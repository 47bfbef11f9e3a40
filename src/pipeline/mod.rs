pub mod attributes;
pub mod color;
pub mod correlator;
pub mod joints;
pub mod orientation;
pub mod simulated;
pub mod tracker;
pub mod validator;
pub mod worker;

// Re-exports for convenience
pub use color::ColorDisplay;
pub use correlator::FaceCorrelator;
pub use joints::{BodyJointReport, JointLine, joint_reports};
pub use orientation::{OrientationDecoder, quantize_angle};
pub use simulated::{SensorStream, start_simulated_sensor};
pub use tracker::{ChannelSink, FaceSink, FaceTracker, LoggingSink, TrackerEvent};
pub use validator::validate;
pub use worker::{TrackerHandle, TrackerInputs, start_tracker};
