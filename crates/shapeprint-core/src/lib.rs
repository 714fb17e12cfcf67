//! Core types and utilities for shape fingerprinting.
//!
//! This crate is intentionally small: pixel-buffer views, luma maps, and the
//! descriptor value shared by the extraction and matching crates. It does
//! *not* decode image files; callers hand it raw pixel buffers.

mod descriptor;
mod error;
mod image;
mod logger;

pub use descriptor::{FeatureDescriptor, COARSE_SIDE, GRID_SIDE, HASH_HEX_LEN};
pub use error::PixelBufferError;
pub use image::{downscale_to_luma, luma, luma_map, LumaMap, RgbaImageView};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
