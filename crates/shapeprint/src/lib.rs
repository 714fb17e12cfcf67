//! High-level facade crate for the `shapeprint-*` workspace.
//!
//! This crate provides:
//! - stable, convenient re-exports of the underlying pipeline crates
//! - (feature-gated) end-to-end helpers that extract a shape fingerprint
//!   from an `image::RgbaImage` or raw RGBA buffer and score it against a
//!   reference descriptor.
//!
//! ## Quickstart
//!
//! ```no_run
//! use shapeprint::analyze::{analyze_image, AnalyzeParams, MatchContext};
//! use shapeprint::matching::{builtins, Matcher};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let img = image::ImageReader::open("photo.png")?.decode()?.to_rgba8();
//! let matcher = Matcher::new(builtins::target_32x32_v1());
//! let params = AnalyzeParams::for_context(MatchContext::SingleShot);
//!
//! let analysis = analyze_image(&img, &matcher, &params)?;
//! println!("similarity: {}%", analysis.percent);
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - `shapeprint::core`: pixel views, luma maps, the descriptor value.
//! - `shapeprint::extract`: thresholding, labeling, normalization, the
//!   descriptor builder.
//! - `shapeprint::matching`: similarity metrics, the `Matcher`, built-in and
//!   JSON-loaded reference fingerprints.
//! - `shapeprint::analyze` (feature `image`): end-to-end helpers from decoded
//!   images and raw buffers.

pub use shapeprint_core as core;
pub use shapeprint_extract as extract;
pub use shapeprint_match as matching;

pub use shapeprint_core::{FeatureDescriptor, PixelBufferError, RgbaImageView};
pub use shapeprint_extract::{ExtractError, ExtractParams};
pub use shapeprint_match::{Matcher, ScoreBreakdown};

#[cfg(feature = "image")]
pub mod analyze;
