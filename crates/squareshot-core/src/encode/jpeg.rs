//! JPEG encoding of captured images.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use thiserror::Error;

use crate::frame::OutputImage;
use crate::transform::bake_orientation;

/// Errors that can occur during JPEG encoding.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// JPEG encoding failed
    #[error("JPEG encoding failed: {0}")]
    EncodingFailed(String),
}

/// Encode RGB pixel data to JPEG bytes.
///
/// # Arguments
///
/// * `pixels` - RGB pixel data (3 bytes per pixel, row-major order)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `quality` - JPEG quality, clamped to 1-100
pub fn encode_jpeg(
    pixels: &[u8],
    width: u32,
    height: u32,
    quality: u8,
) -> Result<Vec<u8>, EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    // Saturates for dimensions no buffer could match
    let expected_len = (width as usize)
        .saturating_mul(height as usize)
        .saturating_mul(3);
    if pixels.len() != expected_len {
        return Err(EncodeError::InvalidPixelData {
            expected: expected_len,
            actual: pixels.len(),
        });
    }

    let quality = quality.clamp(1, 100);
    let mut buffer = Cursor::new(Vec::new());

    JpegEncoder::new_with_quality(&mut buffer, quality)
        .write_image(pixels, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

/// Encode a finished capture with its orientation tag applied to the pixels.
///
/// The resulting JPEG is upright and carries no orientation metadata.
pub fn encode_output(image: &OutputImage, quality: u8) -> Result<Vec<u8>, EncodeError> {
    if image.width == 0 || image.height == 0 {
        return Err(EncodeError::InvalidDimensions {
            width: image.width,
            height: image.height,
        });
    }

    let stored = image
        .to_rgb_image()
        .ok_or_else(|| EncodeError::InvalidPixelData {
            expected: (image.width as usize)
                .saturating_mul(image.height as usize)
                .saturating_mul(3),
            actual: image.pixels.len(),
        })?;

    let upright = bake_orientation(&stored, image.orientation);
    let (width, height) = upright.dimensions();
    encode_jpeg(upright.as_raw(), width, height, quality)
}
