//! Pixel-processing stages of the edge pipeline.
//!
//! - `blur`: full-window Gaussian smoothing of the RGBA raster, border taps
//!   replaced by the centre pixel.
//! - `grad`: Sobel gradient intensity and orientation on one channel, border
//!   taps skipped.
//! - `suppress`: orientation-aware refinement of the intensity using an
//!   8-bucket angular kernel bank.
//! - `threshold`: rank-based cutoff and black/white binarization.
//! - `visualize`: intensity rendered back into the raster.
//!
//! Every multi-tap pass reads an immutable snapshot and writes a scratch
//! buffer that is committed after the whole pass, so results never depend
//! on visiting order.

pub mod blur;
pub mod grad;
pub mod kernels;
pub mod suppress;
pub mod threshold;
pub mod visualize;

pub use blur::gaussian_blur;
pub use grad::compute_gradients;
pub use kernels::BlurKernel;
pub use suppress::suppress_orientations;
pub use threshold::{apply_threshold, intensity_at_percentile, ThresholdOutcome};
pub use visualize::map_intensity_to_pixels;
