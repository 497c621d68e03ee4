//! WASM bindings for decoding captured stills.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! const blob = await imageCapture.takePhoto();
//! const frame = decode_capture(new Uint8Array(await blob.arrayBuffer()));
//! ```

use crate::to_js_error;
use crate::types::JsRawFrame;
use squareshot_core::decode;
use wasm_bindgen::prelude::*;

/// Decode a captured JPEG still, keeping the sensor layout and EXIF tag.
///
/// # Errors
///
/// Throws if the bytes are not a decodable image.
#[wasm_bindgen]
pub fn decode_capture(bytes: &[u8]) -> Result<JsRawFrame, JsValue> {
    decode::decode_capture(bytes)
        .map(JsRawFrame::from_frame)
        .map_err(|e| to_js_error(&e))
}

/// Read the EXIF orientation tag (1-8) of an encoded image; 1 if absent.
#[wasm_bindgen]
pub fn read_orientation(bytes: &[u8]) -> u8 {
    decode::read_orientation(bytes).exif_value()
}
