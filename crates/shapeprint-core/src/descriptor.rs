//! The structural shape descriptor shared by extraction and matching.

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Side length of the normalized occupancy grid.
pub const GRID_SIDE: usize = 32;

/// Side length of the coarse block-averaged grid.
pub const COARSE_SIDE: usize = 8;

/// Length of the hex-encoded binary hash: `GRID_SIDE²` bits, 4 per digit.
pub const HASH_HEX_LEN: usize = GRID_SIDE * GRID_SIDE / 4;

/// Fixed-size numeric summary of a foreground shape.
///
/// All fields except `aspect_ratio` lie in `[0, 1]`; `aspect_ratio` is
/// positive and unbounded. `binary_hash` is always [`HASH_HEX_LEN`] lowercase
/// hex characters encoding the occupancy grid thresholded at 0.5, row-major,
/// most-significant bit first within each nibble.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeatureDescriptor {
    /// Coarse grid: mean of each non-overlapping 4×4 block of the occupancy
    /// grid, row-major.
    pub grid: [[f32; COARSE_SIDE]; COARSE_SIDE],
    /// Column-band means (full height, 4 columns per band).
    pub v_profile: [f32; COARSE_SIDE],
    /// Row-band means (full width, 4 rows per band).
    pub h_profile: [f32; COARSE_SIDE],
    /// Mean of all occupancy cells.
    pub ink_density: f32,
    /// Crop width divided by crop height.
    pub aspect_ratio: f32,
    /// Quadrant means, ordered top-left, top-right, bottom-left, bottom-right.
    pub quadrants: [f32; 4],
    /// Occupancy-weighted center of mass, normalized to `[0, 1]²`.
    ///
    /// `(0.5, 0.5)` when the grid carries no mass at all.
    pub centroid: Point2<f32>,
    /// Hex-encoded bit mask of the occupancy grid.
    pub binary_hash: String,
}

impl FeatureDescriptor {
    /// Flattened row-major copy of the coarse grid.
    pub fn grid_flat(&self) -> [f32; COARSE_SIDE * COARSE_SIDE] {
        let mut flat = [0.0; COARSE_SIDE * COARSE_SIDE];
        for (gy, row) in self.grid.iter().enumerate() {
            flat[gy * COARSE_SIDE..(gy + 1) * COARSE_SIDE].copy_from_slice(row);
        }
        flat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_flat_is_row_major() {
        let mut grid = [[0.0f32; COARSE_SIDE]; COARSE_SIDE];
        grid[1][2] = 0.75;
        let d = FeatureDescriptor {
            grid,
            v_profile: [0.0; COARSE_SIDE],
            h_profile: [0.0; COARSE_SIDE],
            ink_density: 0.0,
            aspect_ratio: 1.0,
            quadrants: [0.0; 4],
            centroid: Point2::new(0.5, 0.5),
            binary_hash: "0".repeat(HASH_HEX_LEN),
        };
        assert_eq!(d.grid_flat()[COARSE_SIDE + 2], 0.75);
    }
}
