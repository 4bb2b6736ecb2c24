//! Per-pixel gradient estimate: intensity and orientation.
//!
//! Same dimensions and row-major ordering as the RGBA raster it was
//! computed from. Created zeroed when a raster is decoded and dropped
//! together with it.

/// Gradient estimate for a single pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GradientCell {
    /// Edge strength, never negative
    pub intensity: f32,
    /// Orientation in radians, `atan2(horizontal, -vertical)`
    pub angle: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GradientField {
    /// Field width in cells
    pub(crate) w: usize,
    /// Field height in cells
    pub(crate) h: usize,
    /// Backing storage in row-major order
    pub(crate) cells: Vec<GradientCell>,
}

impl GradientField {
    /// Construct a zero-initialized field of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            cells: vec![GradientCell::default(); w * h],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.w
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.h
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> &[GradientCell] {
        &self.cells
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> GradientCell {
        self.cells[self.idx(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, cell: GradientCell) {
        let i = self.idx(x, y);
        self.cells[i] = cell;
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn intensities(&self) -> impl Iterator<Item = f32> + '_ {
        self.cells.iter().map(|c| c.intensity)
    }

    pub fn max_intensity(&self) -> f32 {
        self.intensities().fold(0.0, f32::max)
    }

    /// Replace every cell with the result of a completed pass.
    pub(crate) fn commit(&mut self, scratch: Vec<GradientCell>) {
        assert_eq!(scratch.len(), self.cells.len(), "scratch field size mismatch");
        self.cells = scratch;
    }
}
