//! Squareshot WASM - WebAssembly bindings for Squareshot
//!
//! This crate exposes the squareshot-core capture pipeline to web photo
//! pickers: orientation tracking from `devicemotion`, the square crop,
//! still decoding and JPEG encoding.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrappers for frames and captured images
//! - `orientation` - Tilt tracking and stream rotation
//! - `transform` - The square crop
//! - `decode` / `encode` - JPEG stills in and out
//! - `config` - Camera configuration
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsTiltTracker, decode_capture, crop_capture } from '@squareshot/wasm';
//!
//! await init();
//!
//! const tracker = new JsTiltTracker();
//! window.addEventListener('devicemotion', (e) => tracker.record_motion(e.accelerationIncludingGravity));
//!
//! // On shutter press
//! const orientation = tracker.snapshot(0);
//! const frame = decode_capture(stillBytes);
//! const square = crop_capture(frame, orientation, preview.clientWidth, isFrontCamera, false);
//! ```

use wasm_bindgen::prelude::*;

mod config;
mod decode;
mod encode;
mod orientation;
mod transform;
mod types;

// Re-export public types
pub use config::CameraConfig;
pub use decode::{decode_capture, read_orientation};
pub use encode::encode_capture;
pub use orientation::{classify_tilt, stream_rotation, JsTiltTracker};
pub use transform::{compute_crop_region, crop_capture};
pub use types::{JsOutputImage, JsRawFrame};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Convert a core error into a thrown JS `Error`.
pub(crate) fn to_js_error(err: &dyn std::error::Error) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

/// Log a warning to the browser console.
pub(crate) fn warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(message));
}
