//! Moving captures off the UI context and their results back onto it.

use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use futures::StreamExt;

use super::{process_capture, CaptureDelegate, CaptureError, CaptureRequest, CaptureSession};
use super::{Shutter, ShutterGuard};
use crate::frame::OutputImage;
use crate::sink::PhotoSink;
use crate::CameraConfig;

/// The result of one capture, travelling to the UI context.
///
/// The event holds the shutter until it is delivered or dropped.
#[derive(Debug)]
pub struct CaptureEvent {
    pub outcome: Result<OutputImage, CaptureError>,
    guard: ShutterGuard,
}

/// Starts captures on a background worker.
#[derive(Debug, Clone)]
pub struct CaptureDispatcher {
    shutter: Shutter,
    config: CameraConfig,
    events: UnboundedSender<CaptureEvent>,
}

/// The UI context's end: receives capture events and delivers them.
pub struct UiInbox {
    events: UnboundedReceiver<CaptureEvent>,
    sink: Option<Box<dyn PhotoSink + Send>>,
    saves_image: bool,
}

/// Create a dispatcher/inbox pair sharing one shutter.
pub fn channel(shutter: Shutter, config: CameraConfig) -> (CaptureDispatcher, UiInbox) {
    let (tx, rx) = mpsc::unbounded();
    let inbox = UiInbox {
        events: rx,
        sink: None,
        saves_image: config.saves_image,
    };
    let dispatcher = CaptureDispatcher {
        shutter,
        config,
        events: tx,
    };
    (dispatcher, inbox)
}

impl CaptureDispatcher {
    pub fn shutter(&self) -> &Shutter {
        &self.shutter
    }

    /// Press the shutter and capture on a worker thread.
    ///
    /// The outcome arrives on the paired [`UiInbox`]. Returns the worker's
    /// handle, or `ShutterBusy` if a capture is already in flight.
    pub fn shoot<S>(
        &self,
        session: Arc<Mutex<S>>,
        request: CaptureRequest,
    ) -> Result<JoinHandle<()>, CaptureError>
    where
        S: CaptureSession + Send + 'static,
    {
        let guard = self.shutter.press().ok_or(CaptureError::ShutterBusy)?;
        let events = self.events.clone();
        let config = self.config.clone();

        tracing::debug!(
            orientation = ?request.orientation,
            position = ?request.position,
            "shutter pressed"
        );

        thread::Builder::new()
            .name("capture".to_string())
            .spawn(move || {
                let outcome = match session.lock() {
                    Ok(mut session) => process_capture(&mut *session, &request, &config),
                    Err(_) => Err(CaptureError::SessionUnavailable),
                };

                if let Err(e) = &outcome {
                    tracing::warn!(error = %e, "capture failed");
                }

                // A closed inbox drops the event, which re-arms the shutter
                let _ = events.unbounded_send(CaptureEvent { outcome, guard });
            })
            .map_err(|e| CaptureError::WorkerFailed(e.to_string()))
    }
}

impl UiInbox {
    /// Store successful captures in `sink` when saving is enabled.
    pub fn set_sink(&mut self, sink: Box<dyn PhotoSink + Send>) {
        self.sink = Some(sink);
    }

    /// Wait for the next capture event. `None` once every dispatcher is gone.
    pub async fn next_event(&mut self) -> Option<CaptureEvent> {
        self.events.next().await
    }

    /// Hand an event to the delegate and re-arm the shutter.
    ///
    /// Failed captures only re-arm the shutter. Sink failures are logged and
    /// never reach the delegate. Returns whether an image was delivered.
    pub fn deliver<D>(&self, event: CaptureEvent, delegate: &mut D) -> bool
    where
        D: CaptureDelegate + ?Sized,
    {
        let CaptureEvent { outcome, guard } = event;

        let image = match outcome {
            Ok(image) => image,
            Err(_) => {
                drop(guard);
                return false;
            }
        };

        let sink = self.sink.as_ref().filter(|_| self.saves_image);
        match sink {
            Some(sink) => {
                let saved = image.clone();
                delegate.capture_finished(image);
                drop(guard);
                if let Err(e) = sink.save(&saved) {
                    tracing::warn!(error = %e, "failed to save capture");
                }
            }
            None => {
                delegate.capture_finished(image);
                drop(guard);
            }
        }
        true
    }

    /// Deliver events until every dispatcher has been dropped.
    pub async fn run<D>(&mut self, delegate: &mut D)
    where
        D: CaptureDelegate + ?Sized,
    {
        while let Some(event) = self.next_event().await {
            self.deliver(event, delegate);
        }
    }
}
