//! JPEG still decoding that preserves the sensor layout.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::ImageReader;

use super::DecodeError;
use crate::frame::{FrameOrientation, RawFrame};

/// Decode a captured JPEG still into a [`RawFrame`].
///
/// The pixels are left in stored order; the EXIF orientation becomes the
/// frame's intrinsic tag, and the reported size is the displayed size.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the bytes are not a known image format.
/// Returns `DecodeError::CorruptedData` if decoding fails.
pub fn decode_capture(bytes: &[u8]) -> Result<RawFrame, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::InvalidFormat);
    }

    let orientation = read_orientation(bytes);

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedData(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedData(e.to_string()))?;

    Ok(RawFrame::from_stored(img.into_rgb8(), orientation))
}

/// Read the EXIF orientation of an encoded image.
///
/// Returns `FrameOrientation::Up` if there is no EXIF data or no orientation field.
pub fn read_orientation(bytes: &[u8]) -> FrameOrientation {
    let mut cursor = Cursor::new(bytes);

    match Reader::new().read_from_container(&mut cursor) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .map(FrameOrientation::from)
            .unwrap_or_default(),
        Err(_) => FrameOrientation::Up,
    }
}
