//! Constant kernel tables.
//!
//! All 3×3 and 5×5 tables are indexed `[dx + r][dy + r]`: the first index
//! walks the horizontal offset, the second the vertical one.
use serde::{Deserialize, Serialize};

pub type Kernel3 = [[f32; 3]; 3];
pub type Kernel5 = [[f32; 5]; 5];

/// Integer 3×3 Gaussian, divided by 16 when applied.
pub const GAUSS_3_WEIGHTS: Kernel3 = [[1.0, 2.0, 1.0], [2.0, 4.0, 2.0], [1.0, 2.0, 1.0]];
pub const GAUSS_3_NORM: f32 = 16.0;

/// Integer 5×5 Gaussian (σ ≈ 1.4), divided by 159 when applied.
pub const GAUSS_5_WEIGHTS: Kernel5 = [
    [2.0, 4.0, 5.0, 4.0, 2.0],
    [4.0, 9.0, 12.0, 9.0, 4.0],
    [5.0, 12.0, 15.0, 12.0, 5.0],
    [4.0, 9.0, 12.0, 9.0, 4.0],
    [2.0, 4.0, 5.0, 4.0, 2.0],
];
pub const GAUSS_5_NORM: f32 = 159.0;

/// Sobel derivative along x.
pub const SOBEL_HORIZONTAL: Kernel3 = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];
/// Sobel derivative along y.
pub const SOBEL_VERTICAL: Kernel3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];

/// Smoothing kernel selectable from configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlurKernel {
    Gauss3,
    #[default]
    Gauss5,
}

impl BlurKernel {
    /// Half-width `k` of the `(2k+1)×(2k+1)` window.
    pub fn radius(self) -> usize {
        match self {
            BlurKernel::Gauss3 => 1,
            BlurKernel::Gauss5 => 2,
        }
    }

    /// Integer weight at offset `(dx, dy)` relative to the centre.
    #[inline]
    pub fn weight(self, i: usize, j: usize) -> f32 {
        match self {
            BlurKernel::Gauss3 => GAUSS_3_WEIGHTS[i][j],
            BlurKernel::Gauss5 => GAUSS_5_WEIGHTS[i][j],
        }
    }

    pub fn norm(self) -> f32 {
        match self {
            BlurKernel::Gauss3 => GAUSS_3_NORM,
            BlurKernel::Gauss5 => GAUSS_5_NORM,
        }
    }

    /// Weight after normalization.
    pub fn normalized_weight(self, i: usize, j: usize) -> f32 {
        self.weight(i, j) / self.norm()
    }
}

/// Suppression kernels, one per 22.5° orientation bucket.
///
/// Bucket `b` is centred on `b * 22.5°`. The positive entries run along
/// the edge tangent `(cos θ, sin θ)` in `(dx, dy)`; the rest are negative
/// so every table sums to zero.
pub const ANGULAR_KERNELS: [Kernel3; 8] = [
    // 0°
    [[-1.0, 2.0, -1.0], [-1.0, 2.0, -1.0], [-1.0, 2.0, -1.0]],
    // 22.5°
    [[1.0, 1.0, -1.5], [-1.5, 2.0, -1.5], [-1.5, 1.0, 1.0]],
    // 45°
    [[2.0, -1.0, -1.0], [-1.0, 2.0, -1.0], [-1.0, -1.0, 2.0]],
    // 67.5°
    [[1.0, -1.5, -1.5], [1.0, 2.0, 1.0], [-1.5, -1.5, 1.0]],
    // 90°
    [[-1.0, -1.0, -1.0], [2.0, 2.0, 2.0], [-1.0, -1.0, -1.0]],
    // 112.5°
    [[-1.5, -1.5, 1.0], [1.0, 2.0, 1.0], [1.0, -1.5, -1.5]],
    // 135°
    [[-1.0, -1.0, 2.0], [-1.0, 2.0, -1.0], [2.0, -1.0, -1.0]],
    // 157.5°
    [[-1.5, 1.0, 1.0], [-1.5, 2.0, -1.5], [1.0, 1.0, -1.5]],
];
