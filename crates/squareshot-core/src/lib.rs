//! Squareshot Core - capture orientation and square-crop pipeline
//!
//! This crate turns a captured still into the square, correctly oriented
//! image a photo picker shows: orientation snapshots, the crop itself,
//! decoding/encoding of stills, and the shutter-to-delegate orchestration.

pub mod capture;
pub mod controls;
pub mod decode;
pub mod encode;
pub mod frame;
pub mod orientation;
pub mod sink;
pub mod transform;

pub use capture::{CaptureDelegate, CaptureError, CaptureRequest, CaptureSession};
pub use controls::CameraPosition;
pub use frame::{FrameOrientation, OutputImage, RawFrame};
pub use orientation::{CaptureOrientation, DeviceOrientation, StreamRotation, TiltSample, TiltTracker};
pub use transform::{compute_crop_region, crop_capture, CropError, CropOptions, CropRegion};

/// Camera behavior settings
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Crop captures to the square preview (otherwise hand back the full frame)
    pub crop_image: bool,
    /// Store captures through the configured photo sink
    pub saves_image: bool,
    /// Sensor to open first
    pub default_position: CameraPosition,
    /// Accelerometer update interval in milliseconds
    pub tilt_interval_ms: u64,
    /// JPEG quality for saved captures (1 to 100)
    pub jpeg_quality: u8,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            crop_image: true,
            saves_image: false,
            default_position: CameraPosition::Back,
            tilt_interval_ms: 200,
            jpeg_quality: 90,
        }
    }
}

impl CameraConfig {
    /// Create a new CameraConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Accelerometer update interval as a Duration
    pub fn tilt_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.tilt_interval_ms)
    }
}
