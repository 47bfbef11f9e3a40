use std::collections::BTreeMap;

use crossbeam_channel::{Receiver, Sender, bounded};

use super::{
    attributes::present_attributes,
    correlator::FaceCorrelator,
    joints::{BodyJointReport, joint_reports},
    orientation::OrientationDecoder,
    validator::validate,
};
use crate::{
    config::Config,
    types::{
        DetectionResult, FaceGeometryResult, FaceOrientation, FaceProperty, ReferenceFrame,
        TrackedBody, TrackingId,
    },
};

/// Receives what the tracker has to say about each body snapshot.
pub trait FaceSink {
    fn on_orientation(&mut self, orientation: FaceOrientation);
    fn on_attributes(&mut self, attributes: &BTreeMap<FaceProperty, DetectionResult>);
    fn on_binding_changed(&mut self, _binding: Option<TrackingId>) {}
    fn on_joints(&mut self, _reports: &[BodyJointReport]) {}
}

#[derive(Clone, Debug, PartialEq)]
pub enum TrackerEvent {
    Orientation(FaceOrientation),
    Attributes(BTreeMap<FaceProperty, DetectionResult>),
    BindingChanged(Option<TrackingId>),
    Joints(Vec<BodyJointReport>),
}

impl FaceSink for Vec<TrackerEvent> {
    fn on_orientation(&mut self, orientation: FaceOrientation) {
        self.push(TrackerEvent::Orientation(orientation));
    }

    fn on_attributes(&mut self, attributes: &BTreeMap<FaceProperty, DetectionResult>) {
        self.push(TrackerEvent::Attributes(attributes.clone()));
    }

    fn on_binding_changed(&mut self, binding: Option<TrackingId>) {
        self.push(TrackerEvent::BindingChanged(binding));
    }

    fn on_joints(&mut self, reports: &[BodyJointReport]) {
        self.push(TrackerEvent::Joints(reports.to_vec()));
    }
}

/// Forwards events to another thread. Send failures mean nobody is listening.
#[derive(Clone, Debug)]
pub struct ChannelSink {
    tx: Sender<TrackerEvent>,
}

impl ChannelSink {
    pub fn new(tx: Sender<TrackerEvent>) -> Self {
        Self { tx }
    }
}

impl FaceSink for ChannelSink {
    fn on_orientation(&mut self, orientation: FaceOrientation) {
        let _ = self.tx.send(TrackerEvent::Orientation(orientation));
    }

    fn on_attributes(&mut self, attributes: &BTreeMap<FaceProperty, DetectionResult>) {
        let _ = self.tx.send(TrackerEvent::Attributes(attributes.clone()));
    }

    fn on_binding_changed(&mut self, binding: Option<TrackingId>) {
        let _ = self.tx.send(TrackerEvent::BindingChanged(binding));
    }

    fn on_joints(&mut self, reports: &[BodyJointReport]) {
        let _ = self.tx.send(TrackerEvent::Joints(reports.to_vec()));
    }
}

/// Writes each tick to the log, one line per value.
#[derive(Clone, Debug, Default)]
pub struct LoggingSink;

impl FaceSink for LoggingSink {
    fn on_orientation(&mut self, orientation: FaceOrientation) {
        log::info!("FaceYaw : {}", orientation.yaw);
        log::info!("FacePitch : {}", orientation.pitch);
        log::info!("FaceRoll : {}", orientation.roll);
    }

    fn on_attributes(&mut self, attributes: &BTreeMap<FaceProperty, DetectionResult>) {
        for (property, result) in attributes {
            log::info!("{} : {}", property.label(), result.label());
        }
    }

    fn on_binding_changed(&mut self, binding: Option<TrackingId>) {
        match binding {
            Some(id) => log::info!("tracking face of body {id}"),
            None => log::info!("no body bound to the face stream"),
        }
    }

    fn on_joints(&mut self, reports: &[BodyJointReport]) {
        for report in reports {
            log::info!("body #{} ({})", report.ordinal, report.id);
            for line in &report.joints {
                log::info!("  {line}");
            }
        }
    }
}

/// Creates the single-writer/single-reader cell holding the current face result.
/// It holds at most one value; the writer replaces whatever the reader has not
/// taken yet.
fn current_face_cell() -> (
    Sender<Option<FaceGeometryResult>>,
    Receiver<Option<FaceGeometryResult>>,
) {
    bounded(1)
}

/// Writer half: validates face candidates and publishes the outcome.
#[derive(Debug)]
pub struct FacePublisher {
    frame: ReferenceFrame,
    tx: Sender<Option<FaceGeometryResult>>,
    stale: Receiver<Option<FaceGeometryResult>>,
}

impl FacePublisher {
    /// Returns whether the candidate was kept as the current result.
    pub fn publish(&self, candidate: Option<FaceGeometryResult>) -> bool {
        let valid = validate(candidate.as_ref(), self.frame);
        let update = if valid {
            candidate
        } else {
            if candidate.is_some() {
                log::debug!(
                    "discarding face result outside {}x{}",
                    self.frame.width,
                    self.frame.height
                );
            }
            None
        };
        // Only this half writes, so the slot is free again after dropping the stale entry.
        let _ = self.stale.try_recv();
        let _ = self.tx.try_send(update);
        valid
    }
}

/// Reader half: owns the binding and turns body snapshots into sink events.
#[derive(Debug)]
pub struct BodyProcessor {
    correlator: FaceCorrelator,
    decoder: OrientationDecoder,
    report_joints: bool,
    rx: Receiver<Option<FaceGeometryResult>>,
    current: Option<FaceGeometryResult>,
}

impl BodyProcessor {
    pub fn process<S: FaceSink + ?Sized>(&mut self, bodies: &[TrackedBody], sink: &mut S) {
        self.refresh_current();

        if self.report_joints {
            let reports = joint_reports(bodies);
            if !reports.is_empty() {
                sink.on_joints(&reports);
            }
        }

        let previous = self.correlator.bound();
        let binding = self.correlator.ensure_binding(bodies);
        if binding != previous {
            if previous.is_some() {
                self.current = None;
            }
            sink.on_binding_changed(binding);
        }

        if binding.is_none() {
            return;
        }
        let Some(face) = &self.current else {
            return;
        };

        sink.on_attributes(&present_attributes(&face.attributes));
        match self.decoder.decode(face.rotation) {
            Ok(orientation) => sink.on_orientation(orientation),
            Err(err) => log::warn!("skipping face orientation: {err}"),
        }
    }

    /// The face stream no longer follows the bound body.
    pub fn tracking_lost<S: FaceSink + ?Sized>(&mut self, sink: &mut S) {
        self.refresh_current();
        self.current = None;
        if self.correlator.bound().is_some() {
            self.correlator.reset();
            sink.on_binding_changed(None);
        }
    }

    pub fn binding(&self) -> Option<TrackingId> {
        self.correlator.bound()
    }

    pub fn has_current_face(&mut self) -> bool {
        self.refresh_current();
        self.current.is_some()
    }

    fn refresh_current(&mut self) {
        while let Ok(update) = self.rx.try_recv() {
            self.current = update;
        }
    }
}

/// Coordinates the face and body streams of one sensor.
#[derive(Debug)]
pub struct FaceTracker {
    publisher: FacePublisher,
    processor: BodyProcessor,
}

impl FaceTracker {
    pub fn new(config: &Config, frame: ReferenceFrame) -> Self {
        let (tx, rx) = current_face_cell();
        let decoder = OrientationDecoder::new(
            config.orientation.quantization_step,
            config.orientation.unit_tolerance,
        );

        Self {
            publisher: FacePublisher {
                frame,
                tx,
                stale: rx.clone(),
            },
            processor: BodyProcessor {
                correlator: FaceCorrelator::new(config.binding.release_after_missing_frames),
                decoder,
                report_joints: config.report.joints,
                rx,
                current: None,
            },
        }
    }

    pub fn reference_frame(&self) -> ReferenceFrame {
        self.publisher.frame
    }

    pub fn on_face_result(&mut self, candidate: Option<FaceGeometryResult>) -> bool {
        self.publisher.publish(candidate)
    }

    pub fn on_body_snapshot<S: FaceSink + ?Sized>(
        &mut self,
        bodies: &[TrackedBody],
        sink: &mut S,
    ) {
        self.processor.process(bodies, sink);
    }

    pub fn on_tracking_lost<S: FaceSink + ?Sized>(&mut self, sink: &mut S) {
        self.processor.tracking_lost(sink);
    }

    pub fn binding(&self) -> Option<TrackingId> {
        self.processor.binding()
    }

    pub fn has_current_face(&mut self) -> bool {
        self.processor.has_current_face()
    }

    /// Splits into halves that can live on separate threads.
    pub fn split(self) -> (FacePublisher, BodyProcessor) {
        (self.publisher, self.processor)
    }
}
