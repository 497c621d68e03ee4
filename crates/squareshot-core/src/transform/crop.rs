//! Orientation-aware square cropping of captured stills.
//!
//! The preview shows a square window onto the sensor, so a capture is cropped
//! to a square whose side is the effective width of the frame, centered on
//! the frame's vertical midpoint.
//!
//! # Coordinate System
//!
//! - Crop regions are in source-buffer pixel space (the buffer as stored)
//! - Origin is the top-left corner of the stored buffer
//! - Landscape captures swap the reported width and height before the
//!   region is computed
//!
//! # Example
//!
//! ```ignore
//! let options = CropOptions::new(375.0);
//! let output = crop_capture(&frame, CaptureOrientation::Portrait, options)?;
//! ```

use thiserror::Error;

use crate::frame::{FrameOrientation, OutputImage, RawFrame};
use crate::orientation::CaptureOrientation;

/// Errors that can occur while cropping a capture.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CropError {
    /// Zero dimensions or a pixel buffer that doesn't match them.
    /// `expected` is `None` when the dimensions are too large to address.
    #[error("Invalid frame: {width}x{height} with {actual} bytes of pixel data")]
    InvalidFrame {
        width: u32,
        height: u32,
        expected: Option<usize>,
        actual: usize,
    },

    /// The computed region reaches outside the stored buffer
    #[error(
        "Crop region at ({x}, {y}) with side {side} exceeds source buffer {buffer_width}x{buffer_height}",
        x = .region.x,
        y = .region.y,
        side = .region.width
    )]
    CropOutOfBounds {
        region: CropRegion,
        buffer_width: u32,
        buffer_height: u32,
    },
}

/// A square region of the source buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropRegion {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl CropRegion {
    /// Returns true if the region lies entirely inside a buffer of the given size.
    pub fn fits_within(&self, buffer_width: u32, buffer_height: u32) -> bool {
        self.x >= 0.0
            && self.y >= 0.0
            && self.x + self.width <= buffer_width as f64
            && self.y + self.height <= buffer_height as f64
    }
}

/// Per-capture cropping options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropOptions {
    /// Width of the on-screen preview the image is destined for.
    pub preview_width: f64,
    /// The capturing sensor faces the user.
    pub mirrored: bool,
    /// Hand back the frame untouched instead of cropping.
    pub skip_crop: bool,
}

impl CropOptions {
    pub fn new(preview_width: f64) -> Self {
        Self {
            preview_width,
            mirrored: false,
            skip_crop: false,
        }
    }

    pub fn mirrored(mut self, mirrored: bool) -> Self {
        self.mirrored = mirrored;
        self
    }

    pub fn skip_crop(mut self, skip_crop: bool) -> Self {
        self.skip_crop = skip_crop;
        self
    }
}

/// Effective (width, height) of a frame for the given capture orientation.
///
/// Sensors deliver landscape-native buffers, so landscape captures treat the
/// reported dimensions as rotated relative to a portrait-held device.
pub fn effective_dimensions(frame: &RawFrame, orientation: CaptureOrientation) -> (f64, f64) {
    if orientation.is_landscape() {
        (frame.height as f64, frame.width as f64)
    } else {
        (frame.width as f64, frame.height as f64)
    }
}

/// Compute the square crop region for a frame without touching its pixels.
///
/// The region has side `iw`, starts at the top edge and is offset by
/// `ih / 2 - iw / 2` from the left. It is only inside the buffer when the
/// effective height is at least the effective width.
pub fn compute_crop_region(frame: &RawFrame, orientation: CaptureOrientation) -> CropRegion {
    let (iw, ih) = effective_dimensions(frame, orientation);

    // The center coordinate along the Y axis
    let rcy = ih * 0.5;

    CropRegion {
        x: rcy - iw * 0.5,
        y: 0.0,
        width: iw,
        height: iw,
    }
}

/// Crop a captured frame to the square preview window.
///
/// # Arguments
///
/// * `frame` - The captured still
/// * `orientation` - Orientation snapshot taken when the shutter fired
/// * `options` - Preview width, mirroring and the skip-crop switch
///
/// # Returns
///
/// An `OutputImage` with the cropped pixels, `scale = preview_width / iw`
/// and the final orientation tag. Mirrored captures are always tagged
/// `LeftMirrored`; otherwise the frame's own tag passes through.
///
/// # Errors
///
/// * `CropError::InvalidFrame` - zero dimensions or a mismatched buffer
/// * `CropError::CropOutOfBounds` - the region leaves the stored buffer
pub fn crop_capture(
    frame: &RawFrame,
    orientation: CaptureOrientation,
    options: CropOptions,
) -> Result<OutputImage, CropError> {
    validate_frame(frame)?;

    let final_orientation = if options.mirrored {
        FrameOrientation::LeftMirrored
    } else {
        frame.orientation
    };

    let (buffer_width, buffer_height) = frame.stored_dimensions();

    if options.skip_crop {
        return Ok(OutputImage {
            width: buffer_width,
            height: buffer_height,
            pixels: frame.pixels.clone(),
            scale: 1.0,
            orientation: final_orientation,
        });
    }

    let region = compute_crop_region(frame, orientation);
    if !region.fits_within(buffer_width, buffer_height) {
        return Err(CropError::CropOutOfBounds {
            region,
            buffer_width,
            buffer_height,
        });
    }

    let (side, pixels) = extract_square(frame, &region, buffer_width);
    let scale = options.preview_width / region.width;

    tracing::debug!(
        x = region.x,
        side,
        scale,
        ?orientation,
        "cropped capture"
    );

    Ok(OutputImage {
        width: side,
        height: side,
        pixels,
        scale,
        orientation: final_orientation,
    })
}

fn validate_frame(frame: &RawFrame) -> Result<(), CropError> {
    let expected = frame.expected_len();
    if frame.width == 0 || frame.height == 0 || expected != Some(frame.pixels.len()) {
        return Err(CropError::InvalidFrame {
            width: frame.width,
            height: frame.height,
            expected,
            actual: frame.pixels.len(),
        });
    }
    Ok(())
}

/// Copy a region already known to fit the buffer, snapping its origin to the pixel grid.
fn extract_square(frame: &RawFrame, region: &CropRegion, buffer_width: u32) -> (u32, Vec<u8>) {
    let side = region.width as u32;
    let px_left = region.x.floor() as usize;
    let px_top = region.y.floor() as usize;
    let row_bytes = side as usize * 3;
    let stride = buffer_width as usize * 3;

    let mut output = Vec::with_capacity(row_bytes * side as usize);

    // Copy pixel data row by row
    for y in 0..side as usize {
        let start = (px_top + y) * stride + px_left * 3;
        output.extend_from_slice(&frame.pixels[start..start + row_bytes]);
    }

    (side, output)
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn orientation_strategy() -> impl Strategy<Value = CaptureOrientation> {
        prop_oneof![
            Just(CaptureOrientation::Portrait),
            Just(CaptureOrientation::PortraitUpsideDown),
            Just(CaptureOrientation::LandscapeLeft),
            Just(CaptureOrientation::LandscapeRight),
        ]
    }

    fn tag_strategy() -> impl Strategy<Value = FrameOrientation> {
        (1u32..=8).prop_map(FrameOrientation::from)
    }

    /// Build a frame with the given reported size and a position-derived buffer.
    fn create_frame(width: u32, height: u32, tag: FrameOrientation) -> RawFrame {
        let pixels = (0..(width * height * 3) as usize)
            .map(|i| (i % 251) as u8)
            .collect();
        RawFrame::new(width, height, pixels, tag)
    }

    proptest! {
        /// Property: Mirrored captures are tagged LeftMirrored for every orientation.
        #[test]
        fn prop_mirrored_always_left_mirrored(
            side in 2u32..=24,
            orientation in orientation_strategy(),
            tag in tag_strategy(),
        ) {
            // A square frame never fails the bounds check
            let frame = create_frame(side, side, tag);
            let out = crop_capture(&frame, orientation, CropOptions::new(100.0).mirrored(true)).unwrap();
            prop_assert_eq!(out.orientation, FrameOrientation::LeftMirrored);
        }

        /// Property: Scale is exactly preview width over effective width.
        #[test]
        fn prop_scale_is_exact(
            width in 2u32..=24,
            extra in 0u32..=24,
            preview_width in 1.0f64..2000.0,
        ) {
            // Stored landscape-native so the region always fits
            let frame = create_frame(width, width + extra, FrameOrientation::Right);
            let out = crop_capture(&frame, CaptureOrientation::Portrait, CropOptions::new(preview_width)).unwrap();
            prop_assert_eq!(out.scale, preview_width / width as f64);
        }

        /// Property: Skip-crop output is byte-identical to the input buffer.
        #[test]
        fn prop_skip_crop_is_identity(
            (width, height) in (1u32..=24, 1u32..=24),
            orientation in orientation_strategy(),
            tag in tag_strategy(),
            mirrored in any::<bool>(),
        ) {
            let frame = create_frame(width, height, tag);
            let options = CropOptions::new(50.0).skip_crop(true).mirrored(mirrored);
            let out = crop_capture(&frame, orientation, options).unwrap();

            prop_assert_eq!(&out.pixels, &frame.pixels);
            let expected_tag = if mirrored { FrameOrientation::LeftMirrored } else { tag };
            prop_assert_eq!(out.orientation, expected_tag);
        }

        /// Property: Regions are square, top-aligned and centered on the midline.
        #[test]
        fn prop_region_square_and_centered(
            (width, height) in (1u32..=64, 1u32..=64),
            orientation in orientation_strategy(),
        ) {
            let frame = RawFrame::upright(width, height, Vec::new());
            let region = compute_crop_region(&frame, orientation);
            let (iw, ih) = effective_dimensions(&frame, orientation);

            prop_assert_eq!(region.width, region.height);
            prop_assert_eq!(region.width, iw);
            prop_assert_eq!(region.y, 0.0);
            prop_assert_eq!(region.x + region.width * 0.5, ih * 0.5);
        }

        /// Property: A crop either fails out of bounds or yields a side x side buffer.
        #[test]
        fn prop_crop_output_matches_region(
            (width, height) in (1u32..=24, 1u32..=24),
            orientation in orientation_strategy(),
            tag in tag_strategy(),
        ) {
            let frame = create_frame(width, height, tag);
            let region = compute_crop_region(&frame, orientation);
            let (buffer_w, buffer_h) = frame.stored_dimensions();

            match crop_capture(&frame, orientation, CropOptions::new(10.0)) {
                Ok(out) => {
                    prop_assert!(region.fits_within(buffer_w, buffer_h));
                    prop_assert_eq!(out.width, out.height);
                    prop_assert_eq!(out.width as f64, region.width);
                    prop_assert_eq!(out.pixels.len(), (out.width * out.height * 3) as usize);
                }
                Err(CropError::CropOutOfBounds { .. }) => {
                    prop_assert!(!region.fits_within(buffer_w, buffer_h));
                }
                Err(e) => prop_assert!(false, "Unexpected error: {}", e),
            }
        }

        /// Property: Cropping is deterministic.
        #[test]
        fn prop_crop_is_deterministic(
            (width, height) in (1u32..=24, 1u32..=24),
            orientation in orientation_strategy(),
        ) {
            let frame = create_frame(width, height, FrameOrientation::Right);
            let first = crop_capture(&frame, orientation, CropOptions::new(10.0));
            let second = crop_capture(&frame, orientation, CropOptions::new(10.0));
            prop_assert_eq!(first, second);
        }
    }
}
