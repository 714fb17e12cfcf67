//! Reference fingerprints compiled into the binary.
//!
//! Each entry is the precomputed descriptor of a known target shape, stored
//! as static data and materialized on lookup. References can also be loaded
//! from JSON at runtime via [`crate::load_reference_json`].

use nalgebra::Point2;
use shapeprint_core::FeatureDescriptor;

const TARGET_32X32_V1_GRID: [[f32; 8]; 8] = [
    [0.188, 0.312, 0.438, 0.375, 0.562, 0.125, 0.0, 0.0],
    [0.188, 0.438, 0.75, 0.812, 0.5, 0.062, 0.0, 0.0],
    [0.0, 0.188, 1.0, 1.0, 0.375, 0.0, 0.0, 0.0],
    [0.0, 0.0, 0.562, 1.0, 0.625, 0.5, 0.0, 0.0],
    [0.0, 0.0, 0.438, 0.812, 0.938, 0.188, 0.0, 0.0],
    [0.0, 0.375, 0.438, 0.688, 0.625, 0.5, 0.438, 0.125],
    [0.125, 0.375, 0.625, 0.625, 0.438, 0.688, 0.625, 0.062],
    [0.0, 0.0, 0.5, 0.375, 0.25, 0.062, 0.188, 0.0],
];

const TARGET_32X32_V1_V_PROFILE: [f32; 8] =
    [0.062, 0.211, 0.594, 0.711, 0.539, 0.266, 0.156, 0.023];

const TARGET_32X32_V1_H_PROFILE: [f32; 8] =
    [0.25, 0.344, 0.32, 0.336, 0.297, 0.398, 0.445, 0.172];

const TARGET_32X32_V1_QUADRANTS: [f32; 4] = [0.453, 0.172, 0.336, 0.32];

const TARGET_32X32_V1_HASH: &str = "00084000025ae0004954e40065d5c80032ddd8001adb9000095ba00005ff200002ffc00001ffc00001ff800000ff8000007f8000003f9c00003fff00003fdc00003dd000003ef800002ef100006ff10001adec80022df840066d3be4039a13c2321b3fe407de19c0087e1fe00871e1300031b130007300100073000000018000";

/// Look up a built-in reference fingerprint by name.
pub fn builtin_reference(name: &str) -> Option<FeatureDescriptor> {
    match name {
        "TARGET_32X32_V1" => Some(target_32x32_v1()),
        _ => None,
    }
}

/// The default built-in target fingerprint.
pub fn target_32x32_v1() -> FeatureDescriptor {
    FeatureDescriptor {
        grid: TARGET_32X32_V1_GRID,
        v_profile: TARGET_32X32_V1_V_PROFILE,
        h_profile: TARGET_32X32_V1_H_PROFILE,
        ink_density: 0.32,
        aspect_ratio: 0.346,
        quadrants: TARGET_32X32_V1_QUADRANTS,
        centroid: Point2::new(0.444, 0.488),
        binary_hash: TARGET_32X32_V1_HASH.to_string(),
    }
}
