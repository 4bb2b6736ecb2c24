//! Gaussian smoothing of the RGBA raster.
//!
//! - Full 2D window, not separable: `(2k+1)²` taps per pixel.
//! - Taps that fall outside the image sample the centre pixel instead.
//! - Integer weights accumulate in `f32`; the divisor is applied once per
//!   channel, then the value is clamped to `[0, 255]` and truncated.
//! - Alpha is forced opaque.
//!
//! The pass reads the committed raster and writes a scratch buffer row by
//! row in parallel; the scratch replaces the raster only once every row is
//! done.
use super::kernels::BlurKernel;
use crate::image::{Pixel, RgbaBuffer};
use log::debug;
use rayon::prelude::*;

pub fn gaussian_blur(pixels: &mut RgbaBuffer, kernel: BlurKernel) {
    let (w, h) = (pixels.w, pixels.h);
    if w == 0 || h == 0 {
        return;
    }
    debug!("gaussian_blur {w}x{h} kernel={kernel:?}");

    let src: &RgbaBuffer = pixels;
    let mut scratch = vec![0u8; src.data.len()];
    scratch
        .par_chunks_mut(src.row_len())
        .enumerate()
        .for_each(|(y, out_row)| {
            for x in 0..w {
                let px = blur_at(src, x, y, kernel);
                out_row[4 * x..4 * x + 4].copy_from_slice(&px.to_bytes());
            }
        });

    pixels.commit(scratch);
}

fn blur_at(src: &RgbaBuffer, x: usize, y: usize, kernel: BlurKernel) -> Pixel {
    let k = kernel.radius() as isize;
    let center = src.at(x, y);
    let (mut r, mut g, mut b) = (0.0f32, 0.0f32, 0.0f32);

    for i in -k..=k {
        for j in -k..=k {
            let tap = match offset(x, y, i, j, src.w, src.h) {
                Some((sx, sy)) => src.at(sx, sy),
                None => center,
            };
            let weight = kernel.weight((i + k) as usize, (j + k) as usize);
            r += tap.r as f32 * weight;
            g += tap.g as f32 * weight;
            b += tap.b as f32 * weight;
        }
    }

    let norm = kernel.norm();
    Pixel::rgb(to_channel(r / norm), to_channel(g / norm), to_channel(b / norm))
}

/// In-bounds neighbour at `(x + dx, y + dy)`, if any.
#[inline]
pub(crate) fn offset(
    x: usize,
    y: usize,
    dx: isize,
    dy: isize,
    w: usize,
    h: usize,
) -> Option<(usize, usize)> {
    let sx = x.checked_add_signed(dx)?;
    let sy = y.checked_add_signed(dy)?;
    (sx < w && sy < h).then_some((sx, sy))
}

#[inline]
fn to_channel(v: f32) -> u8 {
    v.clamp(0.0, 255.0) as u8
}
