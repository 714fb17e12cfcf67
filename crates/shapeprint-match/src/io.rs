//! JSON load/store for reference descriptors.
//!
//! References are precomputed offline (see the `fingerprint_image` example in
//! the facade crate) and injected at startup; nothing here runs inside the
//! scoring path.

use std::fs;
use std::path::Path;

use shapeprint_core::FeatureDescriptor;

#[derive(thiserror::Error, Debug)]
pub enum ReferenceIoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Load a reference descriptor from JSON on disk.
pub fn load_reference_json(path: impl AsRef<Path>) -> Result<FeatureDescriptor, ReferenceIoError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Write a descriptor to disk as pretty JSON.
pub fn write_reference_json(
    path: impl AsRef<Path>,
    descriptor: &FeatureDescriptor,
) -> Result<(), ReferenceIoError> {
    let json = serde_json::to_string_pretty(descriptor)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtins;

    #[test]
    fn descriptor_round_trips_through_json() {
        let reference = builtins::target_32x32_v1();
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("reference.json");

        write_reference_json(&path, &reference).expect("write");
        let loaded = load_reference_json(&path).expect("load");
        assert_eq!(loaded, reference);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_reference_json("/nonexistent/reference.json").unwrap_err();
        assert!(matches!(err, ReferenceIoError::Io(_)));
    }
}
