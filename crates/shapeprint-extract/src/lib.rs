//! Shape segmentation and descriptor extraction.
//!
//! The pipeline runs strictly forward: luma map → Otsu threshold → binary
//! mask → connected-component labeling → largest-cluster normalization →
//! descriptor. Every stage is a pure function of its input; repeated calls on
//! the same buffer produce bit-identical descriptors.

mod cluster;
mod components;
mod describe;
mod extract;
mod params;
mod threshold;

pub use cluster::{ink_ratio, normalize_cluster, NormalizedCluster, NormalizedGrid};
pub use components::{label_components, Labeling};
pub use describe::build_descriptor;
pub use extract::{extract_descriptor, extract_from_luma, ExtractError};
pub use params::ExtractParams;
pub use threshold::otsu_threshold;
