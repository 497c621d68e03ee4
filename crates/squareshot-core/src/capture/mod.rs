//! Capture orchestration: from shutter press to the delegate.
//!
//! # Flow
//!
//! 1. The UI presses the shutter through [`CaptureDispatcher::shoot`] with an
//!    orientation snapshot. The shutter stays disabled from here on.
//! 2. A worker thread sets the stream rotation, captures a still, stops the
//!    session and crops the frame.
//! 3. The outcome is posted to the [`UiInbox`] owned by the UI context.
//! 4. The UI context delivers it: the delegate sees successful captures,
//!    the optional sink stores them, and the shutter re-arms either way.
//!
//! At most one capture is in flight; a press while the shutter is disabled
//! fails with [`CaptureError::ShutterBusy`].

mod dispatch;
mod session;
mod shutter;

pub use dispatch::{channel, CaptureDispatcher, CaptureEvent, UiInbox};
pub use session::{process_capture, CaptureRequest};
pub use shutter::{Shutter, ShutterGuard};

use thiserror::Error;

use crate::decode::DecodeError;
use crate::frame::{OutputImage, RawFrame};
use crate::orientation::StreamRotation;
use crate::transform::CropError;

/// Errors that can end a capture.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CaptureError {
    /// The captured frame could not be cropped.
    #[error(transparent)]
    Crop(#[from] CropError),

    /// The still delivered by the session could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The capture device rejected its configuration.
    #[error("Device configuration failed: {0}")]
    DeviceConfigurationFailed(String),

    /// The session is gone or unusable.
    #[error("Capture session unavailable")]
    SessionUnavailable,

    /// A capture is already in flight.
    #[error("Shutter is busy with another capture")]
    ShutterBusy,

    /// The background worker could not be started.
    #[error("Failed to start capture worker: {0}")]
    WorkerFailed(String),
}

/// The device-facing half of a camera.
///
/// Implementations wrap the platform capture stack. Input/output wiring and
/// start/stop of the preview are theirs to manage.
pub trait CaptureSession {
    /// Capture one still with the stream rotated as given.
    fn capture_still(&mut self, rotation: StreamRotation) -> Result<RawFrame, CaptureError>;

    /// Stop the session after a capture attempt.
    fn stop(&mut self);
}

/// Receives finished captures on the UI-owning context.
pub trait CaptureDelegate {
    /// Called once per successful capture.
    fn capture_finished(&mut self, image: OutputImage);
}

impl<F> CaptureDelegate for F
where
    F: FnMut(OutputImage),
{
    fn capture_finished(&mut self, image: OutputImage) {
        self(image)
    }
}
