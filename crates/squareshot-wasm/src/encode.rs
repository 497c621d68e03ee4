//! WASM bindings for encoding finished captures.

use crate::to_js_error;
use crate::types::JsOutputImage;
use squareshot_core::encode;
use wasm_bindgen::prelude::*;

/// Encode a finished capture to an upright JPEG.
///
/// The orientation tag is applied to the pixels, so the result displays
/// correctly without EXIF support.
///
/// # Arguments
///
/// * `image` - The captured image
/// * `quality` - JPEG quality (1-100, recommended: 90)
#[wasm_bindgen]
pub fn encode_capture(image: &JsOutputImage, quality: u8) -> Result<Vec<u8>, JsValue> {
    encode::encode_output(&image.to_output(), quality).map_err(|e| to_js_error(&e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use squareshot_core::{FrameOrientation, OutputImage};

    #[test]
    fn test_encode_capture_magic_bytes() {
        let image = JsOutputImage::from_output(OutputImage {
            width: 8,
            height: 8,
            pixels: vec![128u8; 8 * 8 * 3],
            scale: 1.0,
            orientation: FrameOrientation::LeftMirrored,
        });
        let jpeg = encode_capture(&image, 90).unwrap();
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
    }
}
