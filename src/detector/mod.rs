//! Edge detector built around a single owned image.
//!
//! Overview
//! - [`EdgeImage`] owns the decoded RGBA raster together with its gradient
//!   field and exposes every stage as a method that checks its
//!   prerequisites.
//! - [`run_pipeline`] sequences decode → blur → gradient → orientation
//!   suppression → threshold → encode, the way the CLI runs it.
//!
//! Key Ideas
//! - The field exists exactly while a raster is decoded; both are dropped by
//!   `discard`.
//! - Multi-tap stages commit their output only after a full pass, so a
//!   failed or partial run never leaves a half-updated raster.

mod edge_image;
mod pipeline;

pub use edge_image::EdgeImage;
pub use pipeline::run_pipeline;
