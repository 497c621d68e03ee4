//! Running one capture against a session.

use super::{CaptureError, CaptureSession};
use crate::controls::CameraPosition;
use crate::frame::OutputImage;
use crate::orientation::CaptureOrientation;
use crate::transform::{crop_capture, CropOptions};
use crate::CameraConfig;

/// Everything fixed at the moment the shutter fires.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaptureRequest {
    /// Orientation snapshot (last tilt sample or device fallback).
    pub orientation: CaptureOrientation,
    /// Width of the on-screen preview.
    pub preview_width: f64,
    /// Sensor in use.
    pub position: CameraPosition,
}

impl CaptureRequest {
    pub fn new(orientation: CaptureOrientation, preview_width: f64, position: CameraPosition) -> Self {
        Self {
            orientation,
            preview_width,
            position,
        }
    }
}

/// Capture and crop one still, synchronously.
///
/// The stream rotation is derived from the request's orientation, the
/// session is stopped after the attempt whatever its result, and the frame
/// is cropped unless `config.crop_image` is off.
pub fn process_capture<S>(
    session: &mut S,
    request: &CaptureRequest,
    config: &CameraConfig,
) -> Result<OutputImage, CaptureError>
where
    S: CaptureSession + ?Sized,
{
    let rotation = request.orientation.stream_rotation();
    let captured = session.capture_still(rotation);
    session.stop();
    let frame = captured?;

    let options = CropOptions::new(request.preview_width)
        .mirrored(request.position.is_mirrored())
        .skip_crop(!config.crop_image);

    Ok(crop_capture(&frame, request.orientation, options)?)
}
