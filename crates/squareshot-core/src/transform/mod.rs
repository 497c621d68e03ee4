//! Capture transforms: the square crop and orientation baking.
//!
//! # Pipeline Order
//!
//! A capture flows through:
//! 1. Crop (stored-buffer space, orientation tag carried along)
//! 2. Orientation baking (only when the image leaves the pipeline as a file)
//!
//! # Coordinate System
//!
//! - Crop coordinates are pixels in the stored buffer
//! - Origin is top-left corner

mod crop;
mod orient;

pub use crop::{
    compute_crop_region, crop_capture, effective_dimensions, CropError, CropOptions, CropRegion,
};
pub use orient::bake_orientation;
