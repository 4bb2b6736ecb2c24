//! Angle utilities used by the orientation suppressor.

/// π as used by the orientation math. The bucket edges and the similarity
/// wrap were tuned against this value, not against `std::f32::consts::PI`.
#[allow(clippy::approx_constant)]
pub const PI_APPROX: f32 = 3.141_592_65;

/// Upper edges (inclusive, degrees) of orientation buckets 0..=7. Angles
/// above the last edge fold back into bucket 0.
pub const BUCKET_EDGES_DEG: [f64; 8] = [
    11.25, 33.75, 56.25, 78.75, 101.25, 123.75, 146.25, 168.75,
];

/// Maps a gradient angle in radians to degrees in `[0, 180]`, treating
/// opposite directions as equivalent.
#[inline]
pub fn fold_to_half_turn_deg(angle: f32) -> f64 {
    let pi = PI_APPROX as f64;
    let a = angle as f64;
    if a < 0.0 {
        (a + pi) * 180.0 / pi
    } else {
        a * 180.0 / pi
    }
}

/// Orientation bucket in `0..8` for a gradient angle.
#[inline]
pub fn orientation_bucket(angle: f32) -> usize {
    let deg = fold_to_half_turn_deg(angle);
    if deg <= BUCKET_EDGES_DEG[0] || deg > BUCKET_EDGES_DEG[7] {
        return 0;
    }
    BUCKET_EDGES_DEG
        .iter()
        .position(|&edge| deg <= edge)
        .unwrap_or(0)
}

/// Cosine of the signed difference `a - b`, wrapped once into `[-π, π]`.
#[inline]
pub fn angular_similarity(a: f32, b: f32) -> f32 {
    let mut diff = a - b;
    if diff > PI_APPROX {
        diff -= 2.0 * PI_APPROX;
    } else if diff < -PI_APPROX {
        diff += 2.0 * PI_APPROX;
    }
    diff.cos()
}
