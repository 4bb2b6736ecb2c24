//! End-to-end driver: decode, blur, gradient, suppression, threshold.
//!
//! Mirrors the stage order of the command-line tool and writes an optional
//! snapshot after the blur and gradient stages. The image is discarded
//! before returning, on success and on failure alike.
use super::edge_image::EdgeImage;
use crate::config::PipelineConfig;
use crate::diagnostics::{PipelineReport, TimingBreakdown};
use crate::error::EdgeError;
use crate::image::io::{write_json_file, Codec};
use log::info;
use std::path::Path;
use std::time::Instant;

pub fn run_pipeline<C: Codec + ?Sized>(
    config: &PipelineConfig,
    codec: &C,
) -> Result<PipelineReport, EdgeError> {
    let mut image = EdgeImage::new();
    let result = run_stages(&mut image, config, codec);
    image.discard();

    let report = result?;
    if let Some(path) = &config.output.report {
        write_json_file(path, &report)?;
    }
    Ok(report)
}

fn run_stages<C: Codec + ?Sized>(
    image: &mut EdgeImage,
    config: &PipelineConfig,
    codec: &C,
) -> Result<PipelineReport, EdgeError> {
    let total_start = Instant::now();
    let mut timing = TimingBreakdown::default();
    let channel = config.channel;

    timing.time("decode", || image.decode_file(codec, &config.input))?;
    info!(
        "decoded {} ({}x{})",
        config.input.display(),
        image.width(),
        image.height()
    );

    timing.time("blur", || image.gaussian_blur(config.blur))?;
    snapshot(image, codec, config.output.blurred.as_deref())?;
    info!("{:?} blur applied", config.blur);

    timing.time("gradient", || image.compute_gradient(channel))?;
    snapshot(image, codec, config.output.gradient.as_deref())?;

    timing.time("suppress", || image.suppress_orientation(channel))?;
    let max_intensity = image.gradient().map_or(0.0, |f| f.max_intensity());

    let outcome = timing.time("threshold", || image.apply_threshold(config.percentile))?;
    image.encode_file(codec, &config.output.threshold)?;
    info!(
        "threshold at p{} (cutoff {:.3}) marked {} edge pixels",
        config.percentile, outcome.cutoff, outcome.white_pixels
    );

    timing.total_ms = total_start.elapsed().as_secs_f64() * 1000.0;
    Ok(PipelineReport {
        width: image.width(),
        height: image.height(),
        channel,
        blur: config.blur,
        percentile: config.percentile,
        cutoff: outcome.cutoff,
        white_pixels: outcome.white_pixels,
        max_intensity,
        timing,
    })
}

fn snapshot<C: Codec + ?Sized>(
    image: &EdgeImage,
    codec: &C,
    path: Option<&Path>,
) -> Result<(), EdgeError> {
    match path {
        Some(path) => image.encode_file(codec, path),
        None => Ok(()),
    }
}
