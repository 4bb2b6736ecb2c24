//! Percentile cutoff over the gradient field and binarization against it.
//!
//! The rank is `((n - 1) / 100) * p` with integer division for `p < 99` and
//! `n - 1` otherwise. This is not an interpolated percentile: for `n < 101`
//! every `p < 99` selects the minimum.
use crate::image::{GradientField, Pixel, RgbaBuffer};
use log::debug;
use serde::Serialize;

/// Summary of one binarization pass.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdOutcome {
    /// Intensity selected at the requested percentile
    pub cutoff: f32,
    /// Pixels whose intensity is strictly above `cutoff`
    pub white_pixels: usize,
}

/// Index into the ascending intensity sequence for percentile `p`.
#[inline]
pub fn percentile_rank(n: usize, percentile: u32) -> usize {
    debug_assert!(n > 0);
    if percentile < 99 {
        ((n - 1) / 100) * percentile as usize
    } else {
        n - 1
    }
}

/// Intensity at `percentile`, or `None` for an empty field.
pub fn intensity_at_percentile(field: &GradientField, percentile: u32) -> Option<f32> {
    if field.is_empty() {
        return None;
    }
    let mut intensities: Vec<f32> = field.intensities().collect();
    intensities.sort_by(f32::total_cmp);
    Some(intensities[percentile_rank(intensities.len(), percentile)])
}

/// Paint every pixel white if its intensity exceeds `cutoff`, black otherwise.
pub fn binarize(pixels: &mut RgbaBuffer, field: &GradientField, cutoff: f32) -> usize {
    assert_eq!((field.w, field.h), (pixels.w, pixels.h), "gradient field size mismatch");
    let mut white = 0;
    for (cell, out) in field.cells.iter().zip(pixels.data.chunks_exact_mut(4)) {
        let px = if cell.intensity > cutoff {
            white += 1;
            Pixel::WHITE
        } else {
            Pixel::BLACK
        };
        out.copy_from_slice(&px.to_bytes());
    }
    white
}

pub fn apply_threshold(
    pixels: &mut RgbaBuffer,
    field: &GradientField,
    percentile: u32,
) -> ThresholdOutcome {
    let cutoff = intensity_at_percentile(field, percentile).unwrap_or(0.0);
    let white_pixels = binarize(pixels, field, cutoff);
    debug!(
        "apply_threshold p={percentile} cutoff={cutoff:.3} white={white_pixels}/{}",
        field.len()
    );
    ThresholdOutcome {
        cutoff,
        white_pixels,
    }
}
