//! WASM-compatible wrapper types for frames and captured images.
//!
//! Orientations cross the boundary as small integers: capture orientations
//! use 0-3 (see [`capture_orientation_from_u8`]) and frame orientation tags
//! use their EXIF value (1-8).

use squareshot_core::{CaptureOrientation, DeviceOrientation, FrameOrientation, OutputImage, RawFrame};
use wasm_bindgen::prelude::*;

/// A captured frame wrapper for JavaScript.
///
/// `width`/`height` are the reported (displayed) size; the pixel data is RGB
/// in the layout the sensor stored it.
#[wasm_bindgen]
pub struct JsRawFrame {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    orientation: u8,
}

#[wasm_bindgen]
impl JsRawFrame {
    /// Create a frame from its reported size, stored pixels and EXIF orientation tag.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>, orientation: u8) -> JsRawFrame {
        JsRawFrame {
            width,
            height,
            pixels,
            orientation,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// EXIF orientation tag (1-8)
    #[wasm_bindgen(getter)]
    pub fn orientation(&self) -> u8 {
        self.orientation
    }

    /// Returns RGB pixel data as Uint8Array (a copy).
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }
}

impl JsRawFrame {
    pub(crate) fn from_frame(frame: RawFrame) -> Self {
        Self {
            width: frame.width,
            height: frame.height,
            orientation: frame.orientation.exif_value(),
            pixels: frame.pixels,
        }
    }

    /// Convert to a core RawFrame. This clones the pixel data.
    pub(crate) fn to_frame(&self) -> RawFrame {
        RawFrame::new(
            self.width,
            self.height,
            self.pixels.clone(),
            FrameOrientation::from(self.orientation as u32),
        )
    }
}

/// A finished capture wrapper for JavaScript.
#[wasm_bindgen]
pub struct JsOutputImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    scale: f64,
    orientation: u8,
}

#[wasm_bindgen]
impl JsOutputImage {
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Preview width divided by crop width
    #[wasm_bindgen(getter)]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// EXIF orientation tag (1-8); 5 for mirrored captures
    #[wasm_bindgen(getter)]
    pub fn orientation(&self) -> u8 {
        self.orientation
    }

    /// Returns RGB pixel data as Uint8Array (a copy).
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }
}

impl JsOutputImage {
    pub(crate) fn from_output(image: OutputImage) -> Self {
        Self {
            width: image.width,
            height: image.height,
            scale: image.scale,
            orientation: image.orientation.exif_value(),
            pixels: image.pixels,
        }
    }

    pub(crate) fn to_output(&self) -> OutputImage {
        OutputImage {
            width: self.width,
            height: self.height,
            pixels: self.pixels.clone(),
            scale: self.scale,
            orientation: FrameOrientation::from(self.orientation as u32),
        }
    }
}

/// Convert a u8 to a capture orientation.
///
/// Values:
/// - 0 = Portrait
/// - 1 = PortraitUpsideDown
/// - 2 = LandscapeLeft
/// - 3 = LandscapeRight
///
/// Any other value defaults to Portrait.
pub(crate) fn capture_orientation_from_u8(value: u8) -> CaptureOrientation {
    match value {
        1 => CaptureOrientation::PortraitUpsideDown,
        2 => CaptureOrientation::LandscapeLeft,
        3 => CaptureOrientation::LandscapeRight,
        _ => CaptureOrientation::Portrait,
    }
}

/// Inverse of [`capture_orientation_from_u8`].
pub(crate) fn capture_orientation_to_u8(orientation: CaptureOrientation) -> u8 {
    match orientation {
        CaptureOrientation::Portrait => 0,
        CaptureOrientation::PortraitUpsideDown => 1,
        CaptureOrientation::LandscapeLeft => 2,
        CaptureOrientation::LandscapeRight => 3,
    }
}

/// Convert a u8 to a UI-reported device orientation.
///
/// Uses the same 0-3 codes as capture orientations, plus 4 = FaceUp and
/// 5 = FaceDown. Anything else is Unknown.
pub(crate) fn device_orientation_from_u8(value: u8) -> DeviceOrientation {
    match value {
        0 => DeviceOrientation::Portrait,
        1 => DeviceOrientation::PortraitUpsideDown,
        2 => DeviceOrientation::LandscapeLeft,
        3 => DeviceOrientation::LandscapeRight,
        4 => DeviceOrientation::FaceUp,
        5 => DeviceOrientation::FaceDown,
        _ => DeviceOrientation::Unknown,
    }
}
