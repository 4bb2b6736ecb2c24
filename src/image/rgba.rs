//! Owned RGBA raster in row-major layout, 4 bytes per pixel.
//!
//! Pixel `(x, y)` lives at byte offset `4 * (y * width + x)`. Every stage
//! relies on that layout, including the row-parallel passes which split
//! the buffer into `4 * width` byte rows.
use super::io::DecodedRaster;
use super::pixel::Pixel;
use crate::error::{CodecError, EdgeError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbaBuffer {
    /// Image width in pixels
    pub(crate) w: usize,
    /// Image height in pixels
    pub(crate) h: usize,
    /// Backing storage, `4 * w * h` bytes
    pub(crate) data: Vec<u8>,
}

impl RgbaBuffer {
    /// Wrap raw RGBA bytes, rejecting zero-area rasters and storage that is
    /// not exactly `4 * w * h` bytes long.
    pub fn new(w: usize, h: usize, data: Vec<u8>) -> Result<Self, CodecError> {
        let raster = DecodedRaster {
            width: w,
            height: h,
            rgba: data,
        };
        raster.validate()?;
        Ok(Self::from_raw(w, h, raster.rgba))
    }

    /// Wrap raw RGBA bytes. Callers guarantee `data.len() == 4 * w * h`.
    pub(crate) fn from_raw(w: usize, h: usize, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), 4 * w * h);
        Self { w, h, data }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.w
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.h
    }

    /// Bytes in one row.
    #[inline]
    pub fn row_len(&self) -> usize {
        4 * self.w
    }

    #[inline]
    /// Convert (x, y) to the byte offset of the pixel's red channel.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        4 * (y * self.w + x)
    }

    #[inline]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.w && y < self.h
    }

    /// Unchecked read used by the convolution passes.
    #[inline]
    pub(crate) fn at(&self, x: usize, y: usize) -> Pixel {
        let i = self.idx(x, y);
        Pixel::from_bytes(&self.data[i..i + 4])
    }

    #[inline]
    pub(crate) fn put(&mut self, x: usize, y: usize, px: Pixel) {
        let i = self.idx(x, y);
        self.data[i..i + 4].copy_from_slice(&px.to_bytes());
    }

    pub fn get_pixel(&self, x: usize, y: usize) -> Result<Pixel, EdgeError> {
        self.check(x, y)?;
        Ok(self.at(x, y))
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, px: Pixel) -> Result<(), EdgeError> {
        self.check(x, y)?;
        self.put(x, y, px);
        Ok(())
    }

    /// Replace the whole raster with a finished pass of the same size.
    pub(crate) fn commit(&mut self, scratch: Vec<u8>) {
        assert_eq!(scratch.len(), self.data.len(), "scratch buffer size mismatch");
        self.data = scratch;
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    fn check(&self, x: usize, y: usize) -> Result<(), EdgeError> {
        if self.contains(x, y) {
            Ok(())
        } else {
            Err(EdgeError::OutOfRange {
                x,
                y,
                width: self.w,
                height: self.h,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get_round_trips() {
        let mut buf = RgbaBuffer::from_raw(3, 2, vec![0; 24]);
        let px = Pixel::new(1, 2, 3, 4);
        for y in 0..2 {
            for x in 0..3 {
                buf.set_pixel(x, y, px).unwrap();
                assert_eq!(buf.get_pixel(x, y).unwrap(), px);
            }
        }
    }

    #[test]
    fn checked_constructor_rejects_mismatched_storage() {
        assert!(matches!(
            RgbaBuffer::new(5, 5, Vec::new()),
            Err(CodecError::BufferSize { expected: 100, actual: 0 })
        ));
        assert!(matches!(
            RgbaBuffer::new(0, 3, Vec::new()),
            Err(CodecError::EmptyImage)
        ));
        let buf = RgbaBuffer::new(2, 1, vec![7; 8]).unwrap();
        assert_eq!((buf.width(), buf.height()), (2, 1));
        assert_eq!(buf.get_pixel(1, 0).unwrap(), Pixel::new(7, 7, 7, 7));
    }

    #[test]
    fn layout_is_row_major() {
        let mut buf = RgbaBuffer::from_raw(3, 2, vec![0; 24]);
        buf.set_pixel(1, 1, Pixel::new(9, 8, 7, 6)).unwrap();
        assert_eq!(&buf.data[16..20], &[9, 8, 7, 6]);
    }

    #[test]
    fn out_of_range_is_rejected() {
        let mut buf = RgbaBuffer::from_raw(2, 2, vec![0; 16]);
        assert!(matches!(
            buf.get_pixel(2, 0),
            Err(EdgeError::OutOfRange { x: 2, y: 0, .. })
        ));
        assert!(buf.set_pixel(0, 2, Pixel::WHITE).is_err());
        assert_eq!(buf.data, vec![0; 16]);
    }
}
