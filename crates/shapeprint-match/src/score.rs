//! Fixed-weight composite scoring.

use serde::{Deserialize, Serialize};
use shapeprint_core::FeatureDescriptor;

use crate::metrics::{cosine, hamming_hex, ncc};

// Channel weights. They sum to 1.0, so identical descriptors compose to 1.0.
const W_GRID: f32 = 0.25;
const W_V_PROFILE: f32 = 0.10;
const W_H_PROFILE: f32 = 0.10;
const W_HASH: f32 = 0.20;
const W_INK: f32 = 0.10;
const W_ASPECT: f32 = 0.08;
const W_QUADRANTS: f32 = 0.10;
const W_CENTROID: f32 = 0.07;

// Absolute-difference falloffs for the scalar channels.
const INK_FALLOFF: f32 = 3.5;
const ASPECT_FALLOFF: f32 = 2.5;
const CENTROID_FALLOFF: f32 = 5.0;
const HASH_FALLOFF: f32 = 2.5;

/// Per-channel sub-scores and the weighted composite.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub grid: f32,
    pub v_profile: f32,
    pub h_profile: f32,
    pub hash: f32,
    pub ink: f32,
    pub aspect: f32,
    pub quadrants: f32,
    pub centroid: f32,
    /// Weighted sum of every channel; peaks at 1.0 for identical descriptors.
    pub composite: f32,
}

/// Scores candidate descriptors against one immutable reference.
///
/// The reference is injected at construction and never mutated; a matcher can
/// be shared freely across repeated analysis calls.
#[derive(Clone, Debug)]
pub struct Matcher {
    reference: FeatureDescriptor,
}

impl Matcher {
    /// Build a matcher for the given reference descriptor.
    pub fn new(reference: FeatureDescriptor) -> Self {
        Self { reference }
    }

    /// Reference descriptor used by this matcher.
    #[inline]
    pub fn reference(&self) -> &FeatureDescriptor {
        &self.reference
    }

    /// Composite similarity of a candidate; 0.0 when the candidate is absent.
    ///
    /// Absent candidates (failed extraction) and genuinely dissimilar shapes
    /// are indistinguishable to callers by design: both mean "no match".
    pub fn score(&self, candidate: Option<&FeatureDescriptor>) -> f32 {
        candidate.map_or(0.0, |c| self.breakdown(c).composite)
    }

    /// Full per-channel breakdown for a present candidate.
    pub fn breakdown(&self, candidate: &FeatureDescriptor) -> ScoreBreakdown {
        let r = &self.reference;

        let grid = correlation_score(&r.grid_flat(), &candidate.grid_flat());
        let v_profile = correlation_score(&r.v_profile, &candidate.v_profile);
        let h_profile = correlation_score(&r.h_profile, &candidate.h_profile);
        let hash =
            (1.0 - hamming_hex(&r.binary_hash, &candidate.binary_hash) * HASH_FALLOFF).max(0.0);
        let ink = (1.0 - (r.ink_density - candidate.ink_density).abs() * INK_FALLOFF).max(0.0);
        let aspect =
            (1.0 - (r.aspect_ratio - candidate.aspect_ratio).abs() * ASPECT_FALLOFF).max(0.0);
        let quadrants = ncc(&r.quadrants, &candidate.quadrants).max(0.0);
        let centroid = (1.0
            - nalgebra::distance(&r.centroid, &candidate.centroid) * CENTROID_FALLOFF)
            .max(0.0);

        let composite = grid * W_GRID
            + v_profile * W_V_PROFILE
            + h_profile * W_H_PROFILE
            + hash * W_HASH
            + ink * W_INK
            + aspect * W_ASPECT
            + quadrants * W_QUADRANTS
            + centroid * W_CENTROID;

        ScoreBreakdown {
            grid,
            v_profile,
            h_profile,
            hash,
            ink,
            aspect,
            quadrants,
            centroid,
            composite,
        }
    }
}

/// NCC/cosine blend used for the grid and profile channels.
///
/// The NCC term is clamped at zero; the cosine term keeps its sign.
fn correlation_score(a: &[f32], b: &[f32]) -> f32 {
    ncc(a, b).max(0.0) * 0.6 + cosine(a, b) * 0.4
}
