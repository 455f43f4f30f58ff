//! Numeric primitives shared by the geometry and gesture mapping code
//!
//! All functions are pure and total: degenerate inputs (empty ranges,
//! non-positive steps) fall through to a well-defined result instead of
//! panicking, because these run on every frame of a drag.

/// Clamp `value` into `[min, max]`
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

/// Linear interpolation between `a` and `b` by factor `t`
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Map `value` in `[min, max]` to a `[0, 1]` ratio
///
/// A degenerate range (`max == min`) maps to 0 rather than dividing by zero.
pub fn normalize(value: f32, min: f32, max: f32) -> f32 {
    if max == min {
        return 0.0;
    }
    (value - min) / (max - min)
}

/// Map a `[0, 1]` ratio back into `[min, max]`
pub fn denormalize(ratio: f32, min: f32, max: f32) -> f32 {
    min + ratio * (max - min)
}

/// Snap `value` to the nearest multiple of `step` offset from `min`
///
/// A step of 0 (or less) means a continuous slider; the value passes
/// through unchanged.
pub fn snap_to_step(value: f32, step: f32, min: f32) -> f32 {
    if step <= 0.0 {
        return value;
    }
    ((value - min) / step).round() * step + min
}

/// Truncate (toward zero) to 2 decimal places
///
/// The rendering surface rejects high-precision floats, so every coordinate
/// we hand out is truncated to pixel-hundredths first.
pub fn trunc2(value: f32) -> f32 {
    (value * 100.0).trunc() / 100.0
}
