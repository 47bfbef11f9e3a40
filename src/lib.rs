//! Correlates a per-face data stream with tracked bodies from a depth sensor.
//!
//! Each body snapshot binds the face stream to the first tracked body. Face
//! results are validated against the color frame before they are trusted, and
//! the head rotation of a trusted result is decoded into pitch/yaw/roll angles
//! snapped to a fixed step.
//!
//! ```
//! use body_face_tracker::{
//!     config::Config,
//!     pipeline::{FaceTracker, TrackerEvent},
//!     types::*,
//! };
//!
//! let mut tracker = FaceTracker::new(&Config::default(), ReferenceFrame::new(1920, 1080));
//! let mut events: Vec<TrackerEvent> = Vec::new();
//! tracker.on_face_result(None);
//! tracker.on_body_snapshot(&[TrackedBody::new(1, true)], &mut events);
//! assert_eq!(tracker.binding(), Some(TrackingId(1)));
//! ```

pub mod config;
pub mod error;
pub mod pipeline;
pub mod types;

pub use error::{Error, Result};
