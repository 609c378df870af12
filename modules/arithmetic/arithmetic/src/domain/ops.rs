//! Single-precision arithmetic primitives.
//!
//! All four functions follow IEEE 754 except for one deliberate deviation:
//! [`divide`] answers a zero divisor of either sign with NaN instead of a
//! signed infinity. NaN is the only error signal these functions produce.
//! They hold no state and never log, so they are safe to call from any
//! number of threads.

use arithmetic_sdk::Operation;

/// `x + y`
#[inline]
#[must_use]
pub fn add(x: f32, y: f32) -> f32 {
    x + y
}

/// `x * y`
#[inline]
#[must_use]
pub fn multiply(x: f32, y: f32) -> f32 {
    x * y
}

/// `x - y`
#[inline]
#[must_use]
pub fn subtract(x: f32, y: f32) -> f32 {
    x - y
}

/// `x / y`, or NaN when `y` is `0.0` or `-0.0`.
#[inline]
#[must_use]
pub fn divide(x: f32, y: f32) -> f32 {
    // -0.0 == 0.0, so one comparison covers both zeros.
    if y == 0.0 {
        return f32::NAN;
    }
    x / y
}

/// Dispatch `op` to the matching function.
#[must_use]
pub fn apply(op: Operation, x: f32, y: f32) -> f32 {
    match op {
        Operation::Add => add(x, y),
        Operation::Multiply => multiply(x, y),
        Operation::Subtract => subtract(x, y),
        Operation::Divide => divide(x, y),
    }
}
