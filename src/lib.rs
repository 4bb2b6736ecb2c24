//! Orientation-aware edge detection on RGBA rasters.
//!
//! The pipeline smooths the image with a Gaussian kernel, estimates a
//! Sobel gradient on one colour channel, refines the gradient intensity by
//! comparing each pixel's orientation against its neighbours, and
//! binarizes the result at an intensity percentile.

// Public modules (stable-ish surface)
pub mod config;
pub mod detector;
pub mod diagnostics;
pub mod error;
pub mod image;

// Stage-level building blocks.
pub mod angle;
pub mod edges;

// --- High-level re-exports -------------------------------------------------

pub use crate::detector::{run_pipeline, EdgeImage};
pub use crate::error::{CodecError, EdgeError, Precondition};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use edge_detector::prelude::*;
/// use std::path::Path;
///
/// # fn main() -> Result<(), EdgeError> {
/// let mut img = EdgeImage::new();
/// img.decode_file(&PngCodec, Path::new("test.png"))?;
/// img.apply_gauss_filter5()?;
/// img.compute_gradient(Channel::Green)?;
/// img.suppress_orientation(Channel::Green)?;
/// let outcome = img.apply_threshold(89)?;
/// img.encode_file(&PngCodec, Path::new("threshold.png"))?;
/// println!("cutoff={:.3} edges={}", outcome.cutoff, outcome.white_pixels);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::edges::{BlurKernel, ThresholdOutcome};
    pub use crate::image::{Channel, Codec, Pixel, PngCodec};
    pub use crate::{EdgeError, EdgeImage};
}
