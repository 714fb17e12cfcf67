/// Errors for malformed pixel buffers.
///
/// Degenerate-but-well-formed images (blank, saturated) are *not* errors;
/// they surface as an absent descriptor downstream.
#[derive(thiserror::Error, Debug)]
pub enum PixelBufferError {
    #[error("invalid RGBA buffer length (expected {expected} bytes, got {got})")]
    InvalidLength { expected: usize, got: usize },

    #[error("empty image (width={width}, height={height})")]
    EmptyImage { width: usize, height: usize },
}
