//! Error types shared by the pipeline stages and the codec seam.
use thiserror::Error;

/// Failure reported by a [`Codec`](crate::image::io::Codec) or the file
/// helpers wrapped around it.
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("codec error: {0}")]
    Image(#[from] image::ImageError),

    #[error("raster holds {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("image has zero area")]
    EmptyImage,
}

/// Prerequisite state missing for the requested operation.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Precondition {
    /// No raster is loaded.
    #[error("image must be decoded first")]
    NotDecoded,
    /// The gradient field has not been computed yet.
    #[error("differential intensity must be computed first")]
    IntensityNotComputed,
}

#[derive(Error, Debug)]
pub enum EdgeError {
    #[error("decode failed: {0}")]
    Decode(#[source] CodecError),

    #[error("encode failed: {0}")]
    Encode(#[source] CodecError),

    #[error("precondition violated: {0}")]
    Precondition(#[from] Precondition),

    #[error("pixel ({x}, {y}) outside {width}x{height} image")]
    OutOfRange {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("configuration error: {0}")]
    Config(String),
}

impl EdgeError {
    /// True when the error is a missing-prerequisite failure.
    pub fn is_precondition(&self) -> bool {
        matches!(self, EdgeError::Precondition(_))
    }
}
