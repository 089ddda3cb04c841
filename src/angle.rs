use std::f32::consts::{FRAC_PI_2, PI, TAU};

/// Angular band (radians) inside which a ray counts as running along a grid axis
pub const CARDINAL_EPSILON: f32 = 1e-4;

pub const THREE_FRAC_PI_2: f32 = 3.0 * FRAC_PI_2;

/// Wrap any angle into [0, 2π)
pub fn normalize(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid rounds tiny negative inputs up to exactly TAU
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// True when `angle` lies within `CARDINAL_EPSILON` of `target`, measured around the circle
pub fn near(angle: f32, target: f32) -> bool {
    let diff = normalize(angle - target);
    diff < CARDINAL_EPSILON || TAU - diff < CARDINAL_EPSILON
}

/// Ray runs parallel to the x axis (0 or π)
pub fn is_along_x(angle: f32) -> bool {
    near(angle, 0.0) || near(angle, PI)
}

/// Ray runs parallel to the y axis (π/2 or 3π/2)
pub fn is_along_y(angle: f32) -> bool {
    near(angle, FRAC_PI_2) || near(angle, THREE_FRAC_PI_2)
}
