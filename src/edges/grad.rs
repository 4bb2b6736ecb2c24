//! Per-pixel gradient intensity and orientation on one colour channel.
//!
//! - Convolves the Sobel pair over the scalar channel value (not the RGBA
//!   pixel), kernel half-width 1.
//! - Out-of-bounds taps are skipped: they contribute nothing. This differs
//!   from the blur, which substitutes the centre pixel.
//! - `intensity = sqrt(h² + v²)`, `angle = atan2(h, -v)`. The negated
//!   vertical term turns the derivative direction into its normal; the
//!   orientation buckets in `angle` are laid out for that convention.
//!
//! Complexity: O(W·H) per pass, rows processed in parallel into a scratch
//! field.
use super::blur::offset;
use super::kernels::{SOBEL_HORIZONTAL, SOBEL_VERTICAL};
use crate::image::{Channel, GradientCell, GradientField, RgbaBuffer};
use log::debug;
use rayon::prelude::*;

const RADIUS: isize = 1;

/// Recompute every cell of `field` from `pixels` through `channel`.
pub fn compute_gradients(pixels: &RgbaBuffer, channel: Channel, field: &mut GradientField) {
    let (w, h) = (pixels.w, pixels.h);
    assert_eq!((field.w, field.h), (w, h), "gradient field size mismatch");
    if w == 0 || h == 0 {
        return;
    }
    debug!("compute_gradients {w}x{h} channel={}", channel.name());

    let mut scratch = vec![GradientCell::default(); w * h];
    scratch
        .par_chunks_mut(w)
        .enumerate()
        .for_each(|(y, out_row)| {
            for (x, cell) in out_row.iter_mut().enumerate() {
                *cell = gradient_at(pixels, channel, x, y);
            }
        });

    field.commit(scratch);
}

fn gradient_at(pixels: &RgbaBuffer, channel: Channel, x: usize, y: usize) -> GradientCell {
    let mut horizontal = 0.0f32;
    let mut vertical = 0.0f32;

    for i in -RADIUS..=RADIUS {
        for j in -RADIUS..=RADIUS {
            let Some((sx, sy)) = offset(x, y, i, j, pixels.w, pixels.h) else {
                continue;
            };
            let value = channel.sample(pixels.at(sx, sy)) as f32;
            let (ki, kj) = ((i + RADIUS) as usize, (j + RADIUS) as usize);
            horizontal += value * SOBEL_HORIZONTAL[ki][kj];
            vertical += value * SOBEL_VERTICAL[ki][kj];
        }
    }

    GradientCell {
        intensity: (horizontal * horizontal + vertical * vertical).sqrt(),
        angle: horizontal.atan2(-vertical),
    }
}
