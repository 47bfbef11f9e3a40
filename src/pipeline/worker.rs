use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    thread,
    time::Duration,
};

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender, bounded};

use super::tracker::{BodyProcessor, FacePublisher, FaceSink, FaceTracker};
use crate::{
    error::{Error, Result},
    types::{FaceGeometryResult, TrackedBody},
};

const POLL_INTERVAL: Duration = Duration::from_millis(50);
/// Inputs queued per stream before senders block.
const INPUT_QUEUE_DEPTH: usize = 4;

#[derive(Clone, Debug)]
pub enum BodyInput {
    Snapshot(Vec<TrackedBody>),
    TrackingLost,
}

/// Sending side of the tracker threads. Sends block while a stream has
/// `INPUT_QUEUE_DEPTH` inputs waiting. Dropping every clone lets the threads
/// drain what is queued and exit.
#[derive(Clone, Debug)]
pub struct TrackerInputs {
    body_tx: Sender<BodyInput>,
    face_tx: Sender<Option<FaceGeometryResult>>,
}

impl TrackerInputs {
    pub fn body_snapshot(&self, bodies: Vec<TrackedBody>) -> bool {
        self.body_tx.send(BodyInput::Snapshot(bodies)).is_ok()
    }

    pub fn tracking_lost(&self) -> bool {
        self.body_tx.send(BodyInput::TrackingLost).is_ok()
    }

    pub fn face_result(&self, candidate: Option<FaceGeometryResult>) -> bool {
        self.face_tx.send(candidate).is_ok()
    }
}

#[derive(Debug)]
pub struct TrackerHandle {
    stop: Arc<AtomicBool>,
    handles: Vec<thread::JoinHandle<()>>,
}

impl TrackerHandle {
    /// Asks both threads to stop and waits for them.
    pub fn stop(mut self) -> Result<()> {
        self.stop.store(true, Ordering::SeqCst);
        self.join_all()
    }

    /// Waits for both threads to finish once all inputs are dropped.
    pub fn join(mut self) -> Result<()> {
        self.join_all()
    }

    fn join_all(&mut self) -> Result<()> {
        let mut panicked = false;
        for handle in self.handles.drain(..) {
            panicked |= handle.join().is_err();
        }
        if panicked {
            return Err(Error::Worker("tracker thread panicked".to_string()));
        }
        Ok(())
    }
}

impl Drop for TrackerHandle {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::SeqCst);
        for handle in self.handles.drain(..) {
            let _ = handle.join();
        }
    }
}

/// Runs the face stream and the body stream on their own threads.
pub fn start_tracker<S>(tracker: FaceTracker, sink: S) -> Result<(TrackerInputs, TrackerHandle)>
where
    S: FaceSink + Send + 'static,
{
    let (publisher, processor) = tracker.split();
    let (body_tx, body_rx) = bounded(INPUT_QUEUE_DEPTH);
    let (face_tx, face_rx) = bounded(INPUT_QUEUE_DEPTH);
    let stop = Arc::new(AtomicBool::new(false));

    let face_stop = stop.clone();
    let face_handle = thread::Builder::new()
        .name("face-stream".to_string())
        .spawn(move || run_face_loop(publisher, face_rx, face_stop))?;

    let body_stop = stop.clone();
    let body_handle = thread::Builder::new()
        .name("body-stream".to_string())
        .spawn(move || run_body_loop(processor, sink, body_rx, body_stop))?;

    log::info!("face tracker threads started");

    Ok((
        TrackerInputs { body_tx, face_tx },
        TrackerHandle {
            stop,
            handles: vec![face_handle, body_handle],
        },
    ))
}

fn run_face_loop(
    publisher: FacePublisher,
    face_rx: Receiver<Option<FaceGeometryResult>>,
    stop: Arc<AtomicBool>,
) {
    while let Some(candidate) = recv_until_stopped(&face_rx, &stop) {
        publisher.publish(candidate);
    }
    log::debug!("face stream closed");
}

fn run_body_loop<S: FaceSink>(
    mut processor: BodyProcessor,
    mut sink: S,
    body_rx: Receiver<BodyInput>,
    stop: Arc<AtomicBool>,
) {
    while let Some(input) = recv_until_stopped(&body_rx, &stop) {
        match input {
            BodyInput::Snapshot(bodies) => processor.process(&bodies, &mut sink),
            BodyInput::TrackingLost => processor.tracking_lost(&mut sink),
        }
    }
    log::debug!("body stream closed");
}

fn recv_until_stopped<T>(rx: &Receiver<T>, stop: &AtomicBool) -> Option<T> {
    loop {
        if stop.load(Ordering::Relaxed) {
            return None;
        }
        match rx.recv_timeout(POLL_INTERVAL) {
            Ok(item) => return Some(item),
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => return None,
        }
    }
}
