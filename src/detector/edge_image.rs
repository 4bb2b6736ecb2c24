//! `EdgeImage`: owner of the RGBA raster and its gradient field.
//!
//! The raster and the field live together in one `Raster` value, so a
//! field exists exactly while an image is decoded. Stages that need state
//! the image does not have yet return `EdgeError::Precondition`.
use crate::edges::{self, BlurKernel, ThresholdOutcome};
use crate::error::{EdgeError, Precondition};
use crate::image::io::{read_file, write_file, Codec, DecodedRaster};
use crate::image::{Channel, GradientField, Pixel, RgbaBuffer};
use log::debug;
use std::path::Path;

#[derive(Clone, Debug)]
struct Raster {
    pixels: RgbaBuffer,
    field: GradientField,
    intensity_computed: bool,
}

#[derive(Clone, Debug, Default)]
pub struct EdgeImage {
    raster: Option<Raster>,
}

impl EdgeImage {
    /// Empty, undecoded image.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decoded image over raw RGBA bytes.
    pub fn from_rgba(width: usize, height: usize, rgba: Vec<u8>) -> Result<Self, EdgeError> {
        let mut image = Self::new();
        image.load(DecodedRaster {
            width,
            height,
            rgba,
        })?;
        Ok(image)
    }

    pub fn is_decoded(&self) -> bool {
        self.raster.is_some()
    }

    pub fn intensity_computed(&self) -> bool {
        self.raster.as_ref().is_some_and(|r| r.intensity_computed)
    }

    /// Width in pixels, 0 when nothing is decoded.
    pub fn width(&self) -> usize {
        self.raster.as_ref().map_or(0, |r| r.pixels.w)
    }

    /// Height in pixels, 0 when nothing is decoded.
    pub fn height(&self) -> usize {
        self.raster.as_ref().map_or(0, |r| r.pixels.h)
    }

    pub fn pixels(&self) -> Option<&RgbaBuffer> {
        self.raster.as_ref().map(|r| &r.pixels)
    }

    pub fn gradient(&self) -> Option<&GradientField> {
        self.raster.as_ref().map(|r| &r.field)
    }

    /// Decode `bytes` through `codec`.
    ///
    /// A no-op when an image is already decoded. On failure the image is
    /// left untouched.
    pub fn decode<C: Codec + ?Sized>(
        &mut self,
        codec: &C,
        bytes: &[u8],
    ) -> Result<(), EdgeError> {
        if self.is_decoded() {
            return Ok(());
        }
        let raster = codec.decode(bytes).map_err(EdgeError::Decode)?;
        self.load(raster)
    }

    pub fn decode_file<C: Codec + ?Sized>(
        &mut self,
        codec: &C,
        path: &Path,
    ) -> Result<(), EdgeError> {
        if self.is_decoded() {
            return Ok(());
        }
        let bytes = read_file(path).map_err(EdgeError::Decode)?;
        self.decode(codec, &bytes)
    }

    pub fn encode<C: Codec + ?Sized>(&self, codec: &C) -> Result<Vec<u8>, EdgeError> {
        let raster = self.raster()?;
        codec
            .encode(raster.pixels.w, raster.pixels.h, raster.pixels.as_bytes())
            .map_err(EdgeError::Encode)
    }

    pub fn encode_file<C: Codec + ?Sized>(&self, codec: &C, path: &Path) -> Result<(), EdgeError> {
        let bytes = self.encode(codec)?;
        write_file(path, &bytes).map_err(EdgeError::Encode)?;
        debug!("encoded {} bytes to {}", bytes.len(), path.display());
        Ok(())
    }

    /// Drop the raster and the gradient field. Idempotent.
    pub fn discard(&mut self) {
        if self.raster.take().is_some() {
            debug!("discarded decoded image");
        }
    }

    pub fn get_pixel(&self, x: usize, y: usize) -> Result<Pixel, EdgeError> {
        self.raster()?.pixels.get_pixel(x, y)
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, px: Pixel) -> Result<(), EdgeError> {
        self.raster_mut()?.pixels.set_pixel(x, y, px)
    }

    pub fn apply_gauss_filter3(&mut self) -> Result<(), EdgeError> {
        self.gaussian_blur(BlurKernel::Gauss3)
    }

    pub fn apply_gauss_filter5(&mut self) -> Result<(), EdgeError> {
        self.gaussian_blur(BlurKernel::Gauss5)
    }

    pub fn gaussian_blur(&mut self, kernel: BlurKernel) -> Result<(), EdgeError> {
        let raster = self.raster_mut()?;
        edges::gaussian_blur(&mut raster.pixels, kernel);
        Ok(())
    }

    /// Gradient intensity and orientation for every pixel on `channel`.
    /// The raster is overwritten with the rendered intensity.
    pub fn compute_gradient(&mut self, channel: Channel) -> Result<(), EdgeError> {
        let raster = self.raster_mut()?;
        edges::compute_gradients(&raster.pixels, channel, &mut raster.field);
        raster.intensity_computed = true;
        edges::map_intensity_to_pixels(&raster.field, &mut raster.pixels, channel);
        Ok(())
    }

    /// Orientation-aware refinement of the gradient intensity, rendered
    /// back onto `channel`.
    pub fn suppress_orientation(&mut self, channel: Channel) -> Result<(), EdgeError> {
        let raster = self.computed_mut()?;
        edges::suppress_orientations(&mut raster.field);
        edges::map_intensity_to_pixels(&raster.field, &mut raster.pixels, channel);
        Ok(())
    }

    pub fn intensity_at_percentile(&self, percentile: u32) -> Result<f32, EdgeError> {
        let raster = self.raster()?;
        Ok(edges::intensity_at_percentile(&raster.field, percentile).unwrap_or(0.0))
    }

    pub fn apply_threshold(&mut self, percentile: u32) -> Result<ThresholdOutcome, EdgeError> {
        let raster = self.computed_mut()?;
        Ok(edges::apply_threshold(&mut raster.pixels, &raster.field, percentile))
    }

    pub fn map_intensity_to_pixels(&mut self, channel: Channel) -> Result<(), EdgeError> {
        let raster = self.raster_mut()?;
        edges::map_intensity_to_pixels(&raster.field, &mut raster.pixels, channel);
        Ok(())
    }

    fn load(&mut self, decoded: DecodedRaster) -> Result<(), EdgeError> {
        decoded.validate().map_err(EdgeError::Decode)?;
        let DecodedRaster {
            width,
            height,
            rgba,
        } = decoded;
        debug!("decoded {width}x{height} raster");
        self.raster = Some(Raster {
            pixels: RgbaBuffer::from_raw(width, height, rgba),
            field: GradientField::new(width, height),
            intensity_computed: false,
        });
        Ok(())
    }

    fn raster(&self) -> Result<&Raster, EdgeError> {
        self.raster
            .as_ref()
            .ok_or(EdgeError::Precondition(Precondition::NotDecoded))
    }

    fn raster_mut(&mut self) -> Result<&mut Raster, EdgeError> {
        self.raster
            .as_mut()
            .ok_or(EdgeError::Precondition(Precondition::NotDecoded))
    }

    fn computed_mut(&mut self) -> Result<&mut Raster, EdgeError> {
        let raster = self.raster_mut()?;
        if !raster.intensity_computed {
            return Err(Precondition::IntensityNotComputed.into());
        }
        Ok(raster)
    }
}
