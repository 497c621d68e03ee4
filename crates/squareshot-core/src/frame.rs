//! Frame types flowing through the capture pipeline.
//!
//! A [`RawFrame`] is what the capture session hands over: pixels stored the
//! way the sensor delivered them plus an intrinsic orientation tag. An
//! [`OutputImage`] is what the cropper produces for the delegate.

use serde::{Deserialize, Serialize};

/// Intrinsic orientation of a pixel buffer, using the EXIF orientation values (1-8).
/// See: https://exiftool.org/TagNames/EXIF.html
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum FrameOrientation {
    /// Stored upright.
    #[default]
    Up = 1,
    /// Stored upright, mirrored horizontally.
    UpMirrored = 2,
    /// Stored rotated 180 degrees.
    Down = 3,
    /// Stored rotated 180 degrees, mirrored (a vertical flip).
    DownMirrored = 4,
    /// Mirrored and rotated; displaying needs a transpose.
    LeftMirrored = 5,
    /// Display by rotating 90 degrees clockwise.
    Right = 6,
    /// Mirrored and rotated; displaying needs a transverse.
    RightMirrored = 7,
    /// Display by rotating 90 degrees counter-clockwise.
    Left = 8,
}

impl FrameOrientation {
    /// Returns true if the stored buffer is transposed relative to the
    /// displayed image (the 90° and 270° tags and their mirrored variants).
    #[inline]
    pub fn swaps_dimensions(self) -> bool {
        matches!(
            self,
            FrameOrientation::LeftMirrored
                | FrameOrientation::Right
                | FrameOrientation::RightMirrored
                | FrameOrientation::Left
        )
    }

    /// Returns true for the mirrored tags.
    #[inline]
    pub fn is_mirrored(self) -> bool {
        matches!(
            self,
            FrameOrientation::UpMirrored
                | FrameOrientation::DownMirrored
                | FrameOrientation::LeftMirrored
                | FrameOrientation::RightMirrored
        )
    }

    /// The EXIF orientation value for this tag.
    #[inline]
    pub fn exif_value(self) -> u8 {
        self as u8
    }
}

impl From<u32> for FrameOrientation {
    fn from(value: u32) -> Self {
        match value {
            1 => FrameOrientation::Up,
            2 => FrameOrientation::UpMirrored,
            3 => FrameOrientation::Down,
            4 => FrameOrientation::DownMirrored,
            5 => FrameOrientation::LeftMirrored,
            6 => FrameOrientation::Right,
            7 => FrameOrientation::RightMirrored,
            8 => FrameOrientation::Left,
            _ => FrameOrientation::Up,
        }
    }
}

/// A captured still as delivered by the capture session.
///
/// `width` and `height` are the reported (displayed) dimensions. The pixel
/// buffer is RGB8, row-major, stored sensor-native: when the orientation tag
/// swaps dimensions the buffer is `height` pixels wide and `width` tall.
#[derive(Debug, Clone, PartialEq)]
pub struct RawFrame {
    /// Reported width in pixels.
    pub width: u32,
    /// Reported height in pixels.
    pub height: u32,
    /// RGB pixel data (3 bytes per pixel) in stored layout.
    pub pixels: Vec<u8>,
    /// How the sensor delivered the bytes.
    pub orientation: FrameOrientation,
}

impl RawFrame {
    /// Create a frame from its reported dimensions, stored pixels and tag.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>, orientation: FrameOrientation) -> Self {
        Self {
            width,
            height,
            pixels,
            orientation,
        }
    }

    /// Create an upright frame whose stored layout equals its reported size.
    pub fn upright(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self::new(width, height, pixels, FrameOrientation::Up)
    }

    /// Create a frame from a sensor-native RGB image and its intrinsic tag.
    ///
    /// The reported size is derived from the stored size and the tag.
    pub fn from_stored(img: image::RgbImage, orientation: FrameOrientation) -> Self {
        let (stored_w, stored_h) = img.dimensions();
        let (width, height) = if orientation.swaps_dimensions() {
            (stored_h, stored_w)
        } else {
            (stored_w, stored_h)
        };
        Self::new(width, height, img.into_raw(), orientation)
    }

    /// Dimensions of the pixel buffer as stored.
    pub fn stored_dimensions(&self) -> (u32, u32) {
        if self.orientation.swaps_dimensions() {
            (self.height, self.width)
        } else {
            (self.width, self.height)
        }
    }

    /// Number of bytes the buffer must hold for the reported dimensions.
    ///
    /// `None` if that size is not addressable on this platform.
    pub fn expected_len(&self) -> Option<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)?
            .checked_mul(3)
    }
}

/// The finished image handed to the delegate.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputImage {
    /// Stored width of `pixels`.
    pub width: u32,
    /// Stored height of `pixels`.
    pub height: u32,
    /// RGB pixel data (3 bytes per pixel).
    pub pixels: Vec<u8>,
    /// Destination display width divided by crop width.
    pub scale: f64,
    /// Orientation to display `pixels` with.
    pub orientation: FrameOrientation,
}

impl OutputImage {
    /// Size in display points: stored size, oriented, divided by `scale`.
    pub fn point_size(&self) -> (f64, f64) {
        let (w, h) = if self.orientation.swaps_dimensions() {
            (self.height, self.width)
        } else {
            (self.width, self.height)
        };
        (w as f64 / self.scale, h as f64 / self.scale)
    }

    /// Convert to an image::RgbImage in stored layout.
    pub fn to_rgb_image(&self) -> Option<image::RgbImage> {
        image::RgbImage::from_raw(self.width, self.height, self.pixels.clone())
    }
}
