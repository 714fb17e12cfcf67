//! Descriptor construction from a normalized cluster.

use nalgebra::Point2;
use shapeprint_core::{FeatureDescriptor, COARSE_SIDE, GRID_SIDE, HASH_HEX_LEN};

use crate::cluster::NormalizedCluster;

/// Cells per coarse block side.
const BLOCK: usize = GRID_SIDE / COARSE_SIDE;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Build the full descriptor from a normalized cluster crop.
///
/// Purely arithmetic; always produces a complete descriptor for a valid grid.
pub fn build_descriptor(cluster: &NormalizedCluster) -> FeatureDescriptor {
    let cells = &cluster.grid.cells;

    let mut grid = [[0.0f32; COARSE_SIDE]; COARSE_SIDE];
    for (gy, row) in grid.iter_mut().enumerate() {
        for (gx, cell) in row.iter_mut().enumerate() {
            let mut sum = 0.0f32;
            for y in gy * BLOCK..(gy + 1) * BLOCK {
                for x in gx * BLOCK..(gx + 1) * BLOCK {
                    sum += cells[y * GRID_SIDE + x];
                }
            }
            *cell = sum / (BLOCK * BLOCK) as f32;
        }
    }

    let mut v_profile = [0.0f32; COARSE_SIDE];
    for (gx, band) in v_profile.iter_mut().enumerate() {
        let mut sum = 0.0f32;
        for y in 0..GRID_SIDE {
            for x in gx * BLOCK..(gx + 1) * BLOCK {
                sum += cells[y * GRID_SIDE + x];
            }
        }
        *band = sum / (GRID_SIDE * BLOCK) as f32;
    }

    let mut h_profile = [0.0f32; COARSE_SIDE];
    for (gy, band) in h_profile.iter_mut().enumerate() {
        let mut sum = 0.0f32;
        for y in gy * BLOCK..(gy + 1) * BLOCK {
            for x in 0..GRID_SIDE {
                sum += cells[y * GRID_SIDE + x];
            }
        }
        *band = sum / (GRID_SIDE * BLOCK) as f32;
    }

    let ink_density = cells.iter().sum::<f32>() / cells.len() as f32;
    let aspect_ratio = cluster.crop_width as f32 / cluster.crop_height as f32;

    let half = GRID_SIDE / 2;
    let mut quadrants = [0.0f32; 4];
    for y in 0..GRID_SIDE {
        for x in 0..GRID_SIDE {
            let qi = usize::from(y >= half) * 2 + usize::from(x >= half);
            quadrants[qi] += cells[y * GRID_SIDE + x];
        }
    }
    for q in quadrants.iter_mut() {
        *q /= (half * half) as f32;
    }

    let mut weighted_x = 0.0f32;
    let mut weighted_y = 0.0f32;
    let mut mass = 0.0f32;
    for y in 0..GRID_SIDE {
        for x in 0..GRID_SIDE {
            let v = cells[y * GRID_SIDE + x];
            weighted_x += x as f32 * v;
            weighted_y += y as f32 * v;
            mass += v;
        }
    }
    let centroid = if mass > 0.0 {
        Point2::new(
            weighted_x / mass / GRID_SIDE as f32,
            weighted_y / mass / GRID_SIDE as f32,
        )
    } else {
        Point2::new(0.5, 0.5)
    };

    FeatureDescriptor {
        grid,
        v_profile,
        h_profile,
        ink_density,
        aspect_ratio,
        quadrants,
        centroid,
        binary_hash: encode_hash(cells),
    }
}

/// Threshold every cell at 0.5 and pack the bits row-major into lowercase
/// hex, most-significant bit first within each nibble.
fn encode_hash(cells: &[f32; GRID_SIDE * GRID_SIDE]) -> String {
    let mut out = String::with_capacity(HASH_HEX_LEN);
    for chunk in cells.chunks_exact(4) {
        let mut nibble = 0usize;
        for (i, &v) in chunk.iter().enumerate() {
            if v > 0.5 {
                nibble |= 1 << (3 - i);
            }
        }
        out.push(HEX_DIGITS[nibble] as char);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::NormalizedGrid;
    use approx::assert_relative_eq;

    fn cluster_from_cells(
        cells: [f32; GRID_SIDE * GRID_SIDE],
        crop_width: usize,
        crop_height: usize,
    ) -> NormalizedCluster {
        NormalizedCluster {
            grid: NormalizedGrid { cells },
            crop_width,
            crop_height,
        }
    }

    #[test]
    fn zero_grid_centers_the_centroid() {
        let d = build_descriptor(&cluster_from_cells([0.0; GRID_SIDE * GRID_SIDE], 10, 20));
        assert_relative_eq!(d.centroid.x, 0.5);
        assert_relative_eq!(d.centroid.y, 0.5);
        assert_relative_eq!(d.ink_density, 0.0);
        assert_relative_eq!(d.aspect_ratio, 0.5);
        assert_eq!(d.binary_hash, "0".repeat(HASH_HEX_LEN));
    }

    #[test]
    fn full_grid_saturates_every_channel() {
        let d = build_descriptor(&cluster_from_cells([1.0; GRID_SIDE * GRID_SIDE], 32, 32));
        assert_relative_eq!(d.ink_density, 1.0);
        assert_relative_eq!(d.grid[3][5], 1.0);
        assert_relative_eq!(d.v_profile[7], 1.0);
        assert_relative_eq!(d.h_profile[0], 1.0);
        assert_relative_eq!(d.quadrants[2], 1.0);
        assert_eq!(d.binary_hash, "f".repeat(HASH_HEX_LEN));
    }

    #[test]
    fn hash_packs_msb_first_in_raster_order() {
        let mut cells = [0.0f32; GRID_SIDE * GRID_SIDE];
        cells[0] = 1.0; // first bit of the first nibble
        cells[7] = 1.0; // last bit of the second nibble
        let d = build_descriptor(&cluster_from_cells(cells, 32, 32));
        assert_eq!(d.binary_hash.len(), HASH_HEX_LEN);
        assert!(d.binary_hash.starts_with("81"));
        assert!(d.binary_hash[2..].bytes().all(|b| b == b'0'));
    }

    #[test]
    fn hash_threshold_is_strictly_above_half() {
        let mut cells = [0.0f32; GRID_SIDE * GRID_SIDE];
        cells[0] = 0.5; // not above threshold
        cells[1] = 0.51;
        let d = build_descriptor(&cluster_from_cells(cells, 32, 32));
        assert!(d.binary_hash.starts_with('4'));
    }

    #[test]
    fn centroid_tracks_off_center_mass() {
        let mut cells = [0.0f32; GRID_SIDE * GRID_SIDE];
        cells[4 * GRID_SIDE + 28] = 1.0;
        let d = build_descriptor(&cluster_from_cells(cells, 32, 32));
        assert_relative_eq!(d.centroid.x, 28.0 / 32.0);
        assert_relative_eq!(d.centroid.y, 4.0 / 32.0);
    }

    #[test]
    fn quadrants_are_ordered_tl_tr_bl_br() {
        let mut cells = [0.0f32; GRID_SIDE * GRID_SIDE];
        // Fill only the top-right quadrant.
        for y in 0..16 {
            for x in 16..32 {
                cells[y * GRID_SIDE + x] = 1.0;
            }
        }
        let d = build_descriptor(&cluster_from_cells(cells, 32, 32));
        assert_relative_eq!(d.quadrants[0], 0.0);
        assert_relative_eq!(d.quadrants[1], 1.0);
        assert_relative_eq!(d.quadrants[2], 0.0);
        assert_relative_eq!(d.quadrants[3], 0.0);
    }
}
