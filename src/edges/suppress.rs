//! Orientation-aware refinement of gradient intensity.
//!
//! Each cell is replaced by a weighted sum over its 3×3 neighbourhood:
//! `neighbour.intensity × cos(neighbour.angle − centre.angle) × k / 4`,
//! where `k` comes from the angular kernel picked by the centre's
//! orientation bucket. Negative sums clamp to zero.
//!
//! Neighbourhood admission tests `x+i ≥ 0`, `y+i ≥ 0`, `x+i < W` and
//! `y+j < H`: the vertical lower bound uses the horizontal offset. On the
//! top row this drops the left neighbour column. Taps that pass that test
//! but sit above the image (`y+j < 0`) contribute nothing.
use super::kernels::ANGULAR_KERNELS;
use crate::angle::{angular_similarity, orientation_bucket};
use crate::image::{GradientCell, GradientField};
use log::debug;
use rayon::prelude::*;

const RADIUS: isize = 1;
const KERNEL_SCALE: f32 = 4.0;

/// Weight of the angular kernel for `angle` at kernel position `(i, j)`.
#[inline]
pub fn angular_kernel_weight(i: usize, j: usize, angle: f32) -> f32 {
    ANGULAR_KERNELS[orientation_bucket(angle)][i][j] / KERNEL_SCALE
}

pub fn suppress_orientations(field: &mut GradientField) {
    let (w, h) = (field.w, field.h);
    if w == 0 || h == 0 {
        return;
    }
    debug!("suppress_orientations {w}x{h}");

    let snapshot: &GradientField = field;
    let mut scratch = vec![GradientCell::default(); w * h];
    scratch
        .par_chunks_mut(w)
        .enumerate()
        .for_each(|(y, out_row)| {
            for (x, cell) in out_row.iter_mut().enumerate() {
                let centre = snapshot.get(x, y);
                *cell = GradientCell {
                    intensity: refined_intensity(snapshot, x, y),
                    angle: centre.angle,
                };
            }
        });

    field.commit(scratch);
}

fn refined_intensity(field: &GradientField, x: usize, y: usize) -> f32 {
    let (w, h) = (field.w as isize, field.h as isize);
    let (cx, cy) = (x as isize, y as isize);
    let centre = field.get(x, y);
    let mut magnitude = 0.0f32;

    for i in -RADIUS..=RADIUS {
        for j in -RADIUS..=RADIUS {
            let (nx, ny) = (cx + i, cy + j);
            if nx < 0 || cy + i < 0 || nx >= w || ny >= h {
                continue;
            }
            if ny < 0 {
                continue;
            }
            let (ki, kj) = ((i + RADIUS) as usize, (j + RADIUS) as usize);
            let kernel = angular_kernel_weight(ki, kj, centre.angle);
            let neighbour = field.get(nx as usize, ny as usize);
            let similarity = angular_similarity(neighbour.angle, centre.angle);
            magnitude += neighbour.intensity * similarity * kernel;
        }
    }

    magnitude.max(0.0)
}
