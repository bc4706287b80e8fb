use super::TWO_PI;
use std::f64::consts::PI;

/// Reduce an angle into `[0, 2π)`. Negative angles wrap by adding a full turn.
pub fn normalize(angle: f64) -> f64 {
    let a = angle.rem_euclid(TWO_PI);
    // rem_euclid of a tiny negative can round up to exactly 2π
    if a >= TWO_PI { 0.0 } else { a }
}

/// Shortest absolute angular distance between two angles, in `[0, π]`.
pub fn angle_difference(a: f64, b: f64) -> f64 {
    // Normalize the difference to [-PI, PI] to find the shortest path around the circle
    ((a - b + PI).rem_euclid(TWO_PI) - PI).abs()
}
