/// Generates a flat RGBA image of the given opaque colour.
pub fn uniform_rgba(width: usize, height: usize, rgb: [u8; 3]) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    [rgb[0], rgb[1], rgb[2], 255].repeat(width * height)
}

/// Black for `x < split_x`, white from `split_x` on.
pub fn vertical_step_rgba(width: usize, height: usize, split_x: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let mut img = Vec::with_capacity(4 * width * height);
    for _y in 0..height {
        for x in 0..width {
            let v = if x < split_x { 0u8 } else { 255u8 };
            img.extend_from_slice(&[v, v, v, 255]);
        }
    }
    img
}

/// Generates a simple high-contrast checkerboard image.
pub fn checkerboard_rgba(width: usize, height: usize, cell: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    let mut img = Vec::with_capacity(4 * width * height);
    for y in 0..height {
        for x in 0..width {
            let cx = (x / cell) as i32;
            let cy = (y / cell) as i32;
            let val = if (cx + cy) & 1 == 0 { 32u8 } else { 220u8 };
            img.extend_from_slice(&[val, val / 2, 255 - val, 255]);
        }
    }
    img
}

/// Dark square of side `side` centred on a light background.
pub fn centred_square_rgba(width: usize, height: usize, side: usize) -> Vec<u8> {
    let x0 = (width - side) / 2;
    let y0 = (height - side) / 2;
    let mut img = Vec::with_capacity(4 * width * height);
    for y in 0..height {
        for x in 0..width {
            let inside = (x0..x0 + side).contains(&x) && (y0..y0 + side).contains(&y);
            let v = if inside { 30u8 } else { 200u8 };
            img.extend_from_slice(&[v, v, v, 255]);
        }
    }
    img
}
