use serde::{Deserialize, Serialize};

/// Extraction pipeline settings.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ExtractParams {
    /// Longer side of the working copy in pixels; larger sources are
    /// downscaled before thresholding.
    pub max_side: usize,
    /// Reject images whose foreground fraction falls below this.
    pub min_ink_ratio: f32,
    /// Reject images whose foreground fraction exceeds this.
    pub max_ink_ratio: f32,
    /// Bounding-box padding as a fraction of the shorter mask side
    /// (never less than 2 px).
    pub pad_frac: f32,
}

impl Default for ExtractParams {
    fn default() -> Self {
        Self {
            max_side: 512,
            min_ink_ratio: 0.005,
            max_ink_ratio: 0.85,
            pad_frac: 0.015,
        }
    }
}
