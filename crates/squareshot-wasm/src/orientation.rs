//! WASM bindings for orientation tracking.
//!
//! Browsers deliver `devicemotion` events; feed their acceleration into a
//! `JsTiltTracker` and read a snapshot when the shutter fires.

use crate::types::{capture_orientation_from_u8, capture_orientation_to_u8, device_orientation_from_u8};
use squareshot_core::orientation::{CaptureOrientation, StreamRotation, TiltSample, TiltTracker};
use wasm_bindgen::prelude::*;

/// Acceleration as found on `DeviceMotionEvent.accelerationIncludingGravity`.
#[derive(serde::Deserialize)]
struct MotionReading {
    #[serde(default)]
    x: Option<f64>,
    #[serde(default)]
    y: Option<f64>,
    #[serde(default)]
    z: Option<f64>,
}

/// Tracks the orientation implied by the latest accelerometer reading.
#[wasm_bindgen]
#[derive(Default)]
pub struct JsTiltTracker {
    inner: TiltTracker,
}

#[wasm_bindgen]
impl JsTiltTracker {
    #[wasm_bindgen(constructor)]
    pub fn new() -> JsTiltTracker {
        JsTiltTracker::default()
    }

    /// Record one accelerometer reading (in g).
    pub fn record(&mut self, x: f64, y: f64, z: f64) {
        self.inner.record(TiltSample::new(x, y, z));
    }

    /// Record a `DeviceMotionEvent` acceleration object.
    ///
    /// Browsers report `null` axes when the sensor has no reading yet; those
    /// readings are ignored.
    pub fn record_motion(&mut self, acceleration: JsValue) -> Result<(), JsValue> {
        let reading: MotionReading = serde_wasm_bindgen::from_value(acceleration)
            .map_err(|e| JsValue::from_str(&format!("Invalid acceleration: {}", e)))?;

        if let (Some(x), Some(y)) = (reading.x, reading.y) {
            self.record(x, y, reading.z.unwrap_or(0.0));
        }
        Ok(())
    }

    /// Orientation code to capture with, falling back to a device orientation code.
    pub fn snapshot(&self, fallback: u8) -> u8 {
        capture_orientation_to_u8(self.inner.snapshot(device_orientation_from_u8(fallback)))
    }

    /// Forget the last reading.
    pub fn reset(&mut self) {
        self.inner.reset();
    }
}

/// Classify an accelerometer reading into a capture orientation code.
#[wasm_bindgen]
pub fn classify_tilt(x: f64, y: f64) -> u8 {
    capture_orientation_to_u8(CaptureOrientation::from_acceleration(x, y))
}

/// Stream rotation code (0-3) for a capture orientation code.
///
/// Landscape orientations swap: 2 maps to 3 and 3 maps to 2.
#[wasm_bindgen]
pub fn stream_rotation(orientation: u8) -> u8 {
    match capture_orientation_from_u8(orientation).stream_rotation() {
        StreamRotation::Portrait => 0,
        StreamRotation::PortraitUpsideDown => 1,
        StreamRotation::LandscapeLeft => 2,
        StreamRotation::LandscapeRight => 3,
    }
}
