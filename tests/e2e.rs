mod common;

use common::synthetic_image::{
    centred_square_rgba, checkerboard_rgba, uniform_rgba, vertical_step_rgba,
};
use edge_detector::image::{Channel, Codec, Pixel, PngCodec};
use edge_detector::{EdgeError, EdgeImage, Precondition};
use std::f32::consts::{FRAC_PI_2, PI};

fn decode_png(width: usize, height: usize, rgba: &[u8]) -> EdgeImage {
    let bytes = PngCodec
        .encode(width, height, rgba)
        .expect("synthetic raster should encode");
    let mut img = EdgeImage::new();
    img.decode(&PngCodec, &bytes).expect("png should decode");
    img
}

fn pixels_of(img: &EdgeImage) -> Vec<Pixel> {
    let (w, h) = (img.width(), img.height());
    let mut out = Vec::with_capacity(w * h);
    for y in 0..h {
        for x in 0..w {
            out.push(img.get_pixel(x, y).unwrap());
        }
    }
    out
}

#[test]
fn uniform_gray_stays_flat_and_interior_thresholds_black() {
    let _ = env_logger::builder().is_test(true).try_init();
    let gray = Pixel::rgb(128, 128, 128);
    let mut img = decode_png(4, 4, &uniform_rgba(4, 4, [128, 128, 128]));

    img.apply_gauss_filter3().unwrap();
    assert!(pixels_of(&img).iter().all(|&px| px == gray));
    img.apply_gauss_filter5().unwrap();
    assert!(pixels_of(&img).iter().all(|&px| px == gray));

    img.compute_gradient(Channel::Monochrome).unwrap();
    let field = img.gradient().unwrap();
    for y in 1..3 {
        for x in 1..3 {
            assert_eq!(field.get(x, y).intensity, 0.0, "({x},{y})");
        }
    }
    // Skipped border taps leave a response on the frame.
    assert!(field.get(0, 0).intensity > 0.0);
    assert!(field.get(1, 0).intensity > 0.0);

    let outcome = img.apply_threshold(50).unwrap();
    assert_eq!(outcome.cutoff, 0.0);
    assert_eq!(outcome.white_pixels, 12);
    for y in 1..3 {
        for x in 1..3 {
            assert_eq!(img.get_pixel(x, y).unwrap(), Pixel::BLACK, "ties go black");
        }
    }
}

#[test]
fn uniform_black_thresholds_all_black() {
    let mut img = decode_png(4, 4, &uniform_rgba(4, 4, [0, 0, 0]));
    img.apply_gauss_filter3().unwrap();
    img.compute_gradient(Channel::Green).unwrap();
    assert_eq!(img.gradient().unwrap().max_intensity(), 0.0);
    let outcome = img.apply_threshold(50).unwrap();
    assert_eq!(outcome.white_pixels, 0);
    assert!(pixels_of(&img).iter().all(|&px| px == Pixel::BLACK));
}

#[test]
fn step_edge_has_horizontal_gradient_at_the_boundary() {
    let mut img = decode_png(4, 4, &vertical_step_rgba(4, 4, 2));
    img.compute_gradient(Channel::Monochrome).unwrap();
    let field = img.gradient().unwrap();

    for y in 1..3 {
        assert_eq!(field.get(0, y).intensity, 0.0);
        for x in 1..3 {
            let c = field.get(x, y);
            assert_eq!(c.intensity, 1020.0, "({x},{y})");
            assert!((c.angle - FRAC_PI_2).abs() < 1e-6, "angle={}", c.angle);
        }
    }
    // Column 3 loses its right-hand taps to the border and responds
    // with the opposite orientation.
    for y in 1..3 {
        let c = field.get(3, y);
        assert!(c.intensity > 0.0, "(3,{y})");
        assert!((c.angle + FRAC_PI_2).abs() < 1e-6, "angle={}", c.angle);
    }
    // The gradient is rendered straight back into the raster.
    assert_eq!(img.get_pixel(1, 1).unwrap(), Pixel::WHITE);
    assert_eq!(img.get_pixel(0, 1).unwrap(), Pixel::BLACK);
}

#[test]
fn gradient_invariants_hold_on_textured_input() {
    let (w, h) = (24, 18);
    let mut img = decode_png(w, h, &checkerboard_rgba(w, h, 5));
    img.apply_gauss_filter5().unwrap();
    img.compute_gradient(Channel::Blue).unwrap();
    {
        let field = img.gradient().unwrap();
        for cell in field.cells() {
            assert!(cell.intensity >= 0.0);
            assert!(cell.angle > -PI && cell.angle <= PI, "angle={}", cell.angle);
        }
        let max = field.max_intensity();
        let min = field.intensities().fold(f32::INFINITY, f32::min);
        assert_eq!(img.intensity_at_percentile(100).unwrap(), max);
        assert_eq!(img.intensity_at_percentile(0).unwrap(), min);
    }

    img.suppress_orientation(Channel::Blue).unwrap();
    let refined: Vec<f32> = img.gradient().unwrap().intensities().collect();
    assert!(refined.iter().all(|&v| v >= 0.0));

    let outcome = img.apply_threshold(80).unwrap();
    let expected = refined.iter().filter(|&&v| v > outcome.cutoff).count();
    assert_eq!(outcome.white_pixels, expected);
    let pixels = pixels_of(&img);
    assert!(pixels.iter().all(|&px| px == Pixel::WHITE || px == Pixel::BLACK));
    assert_eq!(pixels.iter().filter(|&&px| px == Pixel::WHITE).count(), expected);
}

#[test]
fn refined_response_hugs_the_square_outline() {
    let (w, h) = (32, 32);
    let mut img = decode_png(w, h, &centred_square_rgba(w, h, 12));
    img.apply_gauss_filter5().unwrap();
    img.compute_gradient(Channel::Green).unwrap();
    img.suppress_orientation(Channel::Green).unwrap();

    // Stay clear of the frame, where skipped border taps respond on their own.
    let field = img.gradient().unwrap();
    let mut best = (0usize, 0usize, 0.0f32);
    for y in 3..29 {
        for x in 3..29 {
            let v = field.get(x, y).intensity;
            if v > best.2 {
                best = (x, y, v);
            }
        }
    }
    let (bx, by, peak) = best;
    assert!(peak > 0.0, "expected a positive refined response");

    // The square spans 10..=21 on both axes.
    let near = |v: usize| v.abs_diff(10) <= 4 || v.abs_diff(21) <= 4;
    assert!(
        (near(bx) || near(by)) && (6..=25).contains(&bx) && (6..=25).contains(&by),
        "peak at ({bx},{by}) is not on the square outline"
    );
    // Flat regions well inside and outside the square are suppressed.
    assert_eq!(field.get(16, 16).intensity, 0.0);
    assert_eq!(field.get(4, 4).intensity, 0.0);
}

#[test]
fn decode_twice_keeps_first_image() {
    let mut img = decode_png(2, 2, &uniform_rgba(2, 2, [10, 20, 30]));
    let other = PngCodec.encode(3, 3, &uniform_rgba(3, 3, [1, 1, 1])).unwrap();
    img.decode(&PngCodec, &other).unwrap();
    assert_eq!((img.width(), img.height()), (2, 2));
    assert_eq!(img.get_pixel(1, 1).unwrap(), Pixel::rgb(10, 20, 30));
}

#[test]
fn discard_then_stage_is_a_precondition_error() {
    let mut img = decode_png(3, 3, &vertical_step_rgba(3, 3, 1));
    img.compute_gradient(Channel::Red).unwrap();
    img.discard();

    for err in [
        img.compute_gradient(Channel::Red).unwrap_err(),
        img.suppress_orientation(Channel::Red).unwrap_err(),
        img.apply_threshold(50).unwrap_err(),
        img.intensity_at_percentile(50).unwrap_err(),
    ] {
        assert!(matches!(
            err,
            EdgeError::Precondition(Precondition::NotDecoded)
        ));
    }
}

#[test]
fn encode_round_trips_processed_raster() {
    let mut img = decode_png(6, 5, &checkerboard_rgba(6, 5, 2));
    img.apply_gauss_filter3().unwrap();
    let bytes = img.encode(&PngCodec).unwrap();
    let decoded = PngCodec.decode(&bytes).unwrap();
    assert_eq!((decoded.width, decoded.height), (6, 5));
    assert_eq!(&decoded.rgba, img.pixels().unwrap().as_bytes());
}
