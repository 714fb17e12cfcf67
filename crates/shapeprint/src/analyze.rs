//! End-to-end helpers from decoded images and raw RGBA buffers.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::extract::{extract_descriptor, ExtractError, ExtractParams};
use crate::matching::Matcher;
use crate::{FeatureDescriptor, RgbaImageView};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Where a frame came from.
///
/// Streaming capture sees many noisy frames and can afford a stricter accept
/// threshold; a single decoded upload gets one chance and a looser one.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchContext {
    /// Repeated frames from a live capture loop.
    Streaming,
    /// A single decoded upload.
    SingleShot,
}

/// Facade analysis settings.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct AnalyzeParams {
    pub extract: ExtractParams,
    /// Percent (0..=100) at or above which a frame counts as a match.
    pub accept_percent: u8,
}

impl AnalyzeParams {
    /// Defaults for the given capture context: 68% for streaming frames,
    /// 60% for single uploads.
    pub fn for_context(context: MatchContext) -> Self {
        let accept_percent = match context {
            MatchContext::Streaming => 68,
            MatchContext::SingleShot => 60,
        };
        Self {
            extract: ExtractParams::default(),
            accept_percent,
        }
    }
}

impl Default for AnalyzeParams {
    fn default() -> Self {
        Self::for_context(MatchContext::SingleShot)
    }
}

/// Outcome of analyzing one frame or upload.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Analysis {
    /// Extracted descriptor, absent for degenerate images.
    pub descriptor: Option<FeatureDescriptor>,
    /// Raw composite similarity.
    pub score: f32,
    /// `round(score × 100)`, clamped to `0..=100`.
    pub percent: u8,
    /// Whether `percent` reached the accept threshold.
    pub matched: bool,
}

/// Borrow a decoded `image::RgbaImage` as the core view type.
pub fn rgba_view(img: &::image::RgbaImage) -> RgbaImageView<'_> {
    RgbaImageView {
        width: img.width() as usize,
        height: img.height() as usize,
        data: img.as_raw(),
    }
}

/// Extract a shape descriptor from a decoded RGBA image.
pub fn extract_from_image(
    img: &::image::RgbaImage,
    params: &ExtractParams,
) -> Result<Option<FeatureDescriptor>, ExtractError> {
    extract_descriptor(&rgba_view(img), params)
}

/// Run the full pipeline on a decoded image: extract, score, decide.
#[cfg_attr(
    feature = "tracing",
    instrument(
        level = "info",
        skip(img, matcher, params),
        fields(width = img.width(), height = img.height())
    )
)]
pub fn analyze_image(
    img: &::image::RgbaImage,
    matcher: &Matcher,
    params: &AnalyzeParams,
) -> Result<Analysis, ExtractError> {
    let descriptor = extract_from_image(img, &params.extract)?;
    Ok(decide(descriptor, matcher, params))
}

/// Run the full pipeline on a raw RGBA8 buffer.
pub fn analyze_rgba_u8(
    width: usize,
    height: usize,
    pixels: &[u8],
    matcher: &Matcher,
    params: &AnalyzeParams,
) -> Result<Analysis, ExtractError> {
    let view = RgbaImageView::new(width, height, pixels)?;
    let descriptor = extract_descriptor(&view, &params.extract)?;
    Ok(decide(descriptor, matcher, params))
}

fn decide(
    descriptor: Option<FeatureDescriptor>,
    matcher: &Matcher,
    params: &AnalyzeParams,
) -> Analysis {
    let score = matcher.score(descriptor.as_ref());
    let percent = (score * 100.0).round().clamp(0.0, 100.0) as u8;
    let matched = percent >= params.accept_percent;
    debug!("score {score:.4} ({percent}%), matched: {matched}");
    Analysis {
        descriptor,
        score,
        percent,
        matched,
    }
}
