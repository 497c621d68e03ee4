//! WASM bindings for the capture crop.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! const frame = new JsRawFrame(3024, 4032, pixels, 6);
//! const square = crop_capture(frame, 0, previewEl.clientWidth, isFrontCamera, false);
//! ```

use crate::types::{capture_orientation_from_u8, JsOutputImage, JsRawFrame};
use crate::{to_js_error, warn};
use squareshot_core::transform::{self, CropError, CropOptions};
use wasm_bindgen::prelude::*;

/// Crop a captured frame to the square preview.
///
/// # Arguments
///
/// * `frame` - The captured frame
/// * `orientation` - Capture orientation code (0-3, see `JsRawFrame` docs)
/// * `preview_width` - Width of the on-screen preview
/// * `mirrored` - The capture came from the user-facing camera
/// * `skip_crop` - Return the frame untouched (the mirrored tag still applies)
///
/// # Errors
///
/// Throws if the frame is malformed or the crop falls outside it.
#[wasm_bindgen]
pub fn crop_capture(
    frame: &JsRawFrame,
    orientation: u8,
    preview_width: f64,
    mirrored: bool,
    skip_crop: bool,
) -> Result<JsOutputImage, JsValue> {
    crop_frame(frame, orientation, preview_width, mirrored, skip_crop).map_err(|e| {
        warn(&format!("capture crop failed: {}", e));
        to_js_error(&e)
    })
}

/// Compute the crop region `[x, y, width, height]` without cropping.
#[wasm_bindgen]
pub fn compute_crop_region(frame: &JsRawFrame, orientation: u8) -> Vec<f64> {
    let region = transform::compute_crop_region(
        &frame.to_frame(),
        capture_orientation_from_u8(orientation),
    );
    vec![region.x, region.y, region.width, region.height]
}

fn crop_frame(
    frame: &JsRawFrame,
    orientation: u8,
    preview_width: f64,
    mirrored: bool,
    skip_crop: bool,
) -> Result<JsOutputImage, CropError> {
    let options = CropOptions::new(preview_width)
        .mirrored(mirrored)
        .skip_crop(skip_crop);
    let output = transform::crop_capture(
        &frame.to_frame(),
        capture_orientation_from_u8(orientation),
        options,
    )?;
    Ok(JsOutputImage::from_output(output))
}


/// WASM-specific tests that require JsValue.
///
/// These tests exercise the thrown JS errors and can only run on wasm32
/// targets. Use `wasm-pack test` to run these.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn thrown_message(err: JsValue) -> String {
        let err: js_sys::Error = err.dyn_into().unwrap();
        err.message().into()
    }

    #[wasm_bindgen_test]
    fn test_crop_out_of_bounds_throws() {
        let frame = JsRawFrame::new(8, 6, vec![0u8; 8 * 6 * 3], 1);
        let err = crop_capture(&frame, 0, 375.0, false, false).unwrap_err();
        assert!(thrown_message(err).contains("exceeds source buffer"));
    }

    #[wasm_bindgen_test]
    fn test_crop_invalid_frame_throws() {
        let frame = JsRawFrame::new(0, 6, Vec::new(), 1);
        let err = crop_capture(&frame, 0, 375.0, false, true).unwrap_err();
        assert!(thrown_message(err).starts_with("Invalid frame"));
    }

    #[wasm_bindgen_test]
    fn test_crop_oversized_frame_throws() {
        let frame = JsRawFrame::new(40_000, 40_000, vec![0u8; 3], 1);
        let err = crop_capture(&frame, 0, 375.0, false, false).unwrap_err();
        assert!(thrown_message(err).starts_with("Invalid frame"));
    }
}
