//! Applying an orientation tag to pixels.

use image::{imageops, RgbImage};

use crate::frame::FrameOrientation;

/// Rewrite a stored buffer so it displays correctly with no orientation tag.
///
/// Swapping tags transpose the result, so a `w x h` input comes back `h x w`.
pub fn bake_orientation(img: &RgbImage, orientation: FrameOrientation) -> RgbImage {
    match orientation {
        FrameOrientation::Up => img.clone(),
        FrameOrientation::UpMirrored => imageops::flip_horizontal(img),
        FrameOrientation::Down => imageops::rotate180(img),
        FrameOrientation::DownMirrored => imageops::flip_vertical(img),
        FrameOrientation::LeftMirrored => imageops::flip_horizontal(&imageops::rotate90(img)),
        FrameOrientation::Right => imageops::rotate90(img),
        FrameOrientation::RightMirrored => imageops::flip_horizontal(&imageops::rotate270(img)),
        FrameOrientation::Left => imageops::rotate270(img),
    }
}
