use crate::image::{Channel, GradientField, Pixel, RgbaBuffer};

/// Render gradient intensity into `pixels` on `channel`.
///
/// Intensity is truncated and capped at 255. Monochrome writes all three
/// colour channels; a single channel zeroes the other two. Alpha is opaque.
pub fn map_intensity_to_pixels(field: &GradientField, pixels: &mut RgbaBuffer, channel: Channel) {
    assert_eq!((field.w, field.h), (pixels.w, pixels.h), "gradient field size mismatch");
    for (cell, out) in field.cells.iter().zip(pixels.data.chunks_exact_mut(4)) {
        let v = cell.intensity.clamp(0.0, 255.0) as u8;
        let px = match channel {
            Channel::Monochrome => Pixel::rgb(v, v, v),
            Channel::Red => Pixel::rgb(v, 0, 0),
            Channel::Green => Pixel::rgb(0, v, 0),
            Channel::Blue => Pixel::rgb(0, 0, v),
        };
        out.copy_from_slice(&px.to_bytes());
    }
}
