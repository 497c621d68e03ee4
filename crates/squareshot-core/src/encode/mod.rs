//! Encoding finished captures for persistence.
//!
//! The output of the cropper carries its orientation as a tag. Files written
//! by a sink have the orientation baked into the pixels instead, so any
//! viewer shows them the way the preview did.
//!
//! # Examples
//!
//! ```ignore
//! use squareshot_core::encode::encode_output;
//!
//! let jpeg_bytes = encode_output(&output_image, 90)?;
//! ```

mod jpeg;

pub use jpeg::{encode_jpeg, encode_output, EncodeError};
