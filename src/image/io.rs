//! Codec seam and file helpers.
//!
//! - `Codec`: bytes <-> RGBA raster, all-or-nothing in both directions.
//! - `PngCodec`: `image`-backed codec; reads any format `image` knows,
//!   writes PNG.
//! - `read_file` / `write_file`: filesystem wrappers that create parent
//!   directories on write.
//! - `write_json_file`: pretty-print a serializable value to disk.
use crate::error::{CodecError, EdgeError};
use image::{ImageFormat, RgbaImage};
use serde::Serialize;
use std::fs;
use std::io::Cursor;
use std::path::Path;

/// Raster produced by a successful decode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedRaster {
    pub width: usize,
    pub height: usize,
    /// RGBA bytes, `4 * width * height` long
    pub rgba: Vec<u8>,
}

impl DecodedRaster {
    /// Check the invariants the pipeline relies on.
    pub fn validate(&self) -> Result<(), CodecError> {
        if self.width == 0 || self.height == 0 {
            return Err(CodecError::EmptyImage);
        }
        let expected = 4 * self.width * self.height;
        if self.rgba.len() != expected {
            return Err(CodecError::BufferSize {
                expected,
                actual: self.rgba.len(),
            });
        }
        Ok(())
    }
}

pub trait Codec {
    fn decode(&self, bytes: &[u8]) -> Result<DecodedRaster, CodecError>;

    fn encode(&self, width: usize, height: usize, rgba: &[u8]) -> Result<Vec<u8>, CodecError>;
}

/// Codec backed by the `image` crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct PngCodec;

impl Codec for PngCodec {
    fn decode(&self, bytes: &[u8]) -> Result<DecodedRaster, CodecError> {
        let img = image::load_from_memory(bytes)?.into_rgba8();
        let width = img.width() as usize;
        let height = img.height() as usize;
        Ok(DecodedRaster {
            width,
            height,
            rgba: img.into_raw(),
        })
    }

    fn encode(&self, width: usize, height: usize, rgba: &[u8]) -> Result<Vec<u8>, CodecError> {
        let expected = 4 * width * height;
        let image = RgbaImage::from_raw(width as u32, height as u32, rgba.to_vec()).ok_or(
            CodecError::BufferSize {
                expected,
                actual: rgba.len(),
            },
        )?;
        let mut out = Cursor::new(Vec::new());
        image.write_to(&mut out, ImageFormat::Png)?;
        Ok(out.into_inner())
    }
}

pub fn read_file(path: &Path) -> Result<Vec<u8>, CodecError> {
    Ok(fs::read(path)?)
}

/// Write `bytes` to `path`, creating parent directories.
pub fn write_file(path: &Path, bytes: &[u8]) -> Result<(), CodecError> {
    ensure_parent_dir(path)?;
    fs::write(path, bytes)?;
    Ok(())
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), EdgeError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| EdgeError::Encode(CodecError::from(e)))?;
    write_file(path, json.as_bytes()).map_err(EdgeError::Encode)
}

fn ensure_parent_dir(path: &Path) -> Result<(), CodecError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
