//! Decoding captured stills into frames.
//!
//! Capture sessions commonly hand back a JPEG still. Decoding keeps the
//! pixels exactly as the sensor stored them and records the EXIF orientation
//! as the frame's intrinsic tag; the cropper works in that stored space.
//!
//! # Examples
//!
//! ```ignore
//! use squareshot_core::decode::decode_capture;
//!
//! let frame = decode_capture(&jpeg_bytes)?;
//! println!("Captured {}x{} ({:?})", frame.width, frame.height, frame.orientation);
//! ```

mod jpeg;
mod types;

pub use jpeg::{decode_capture, read_orientation};
pub use types::DecodeError;
