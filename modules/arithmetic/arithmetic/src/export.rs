//! C ABI exports.
//!
//! Each operation is its own unmangled `extern "C"` symbol so a host can
//! resolve `add`, `multiply`, `subtract` and `divide` independently. On
//! `wasm32-unknown-unknown` the `cdylib` surfaces them as WebAssembly
//! exports with `f32` parameters and results.

#![allow(unsafe_code)]

use crate::domain::ops;

/// Exported `add`: returns `x + y`.
#[unsafe(no_mangle)]
#[must_use]
pub extern "C" fn add(x: f32, y: f32) -> f32 {
    ops::add(x, y)
}

/// Exported `multiply`: returns `x * y`.
#[unsafe(no_mangle)]
#[must_use]
pub extern "C" fn multiply(x: f32, y: f32) -> f32 {
    ops::multiply(x, y)
}

/// Exported `subtract`: returns `x - y`.
#[unsafe(no_mangle)]
#[must_use]
pub extern "C" fn subtract(x: f32, y: f32) -> f32 {
    ops::subtract(x, y)
}

/// Exported `divide`: returns `x / y`, or NaN when `y` is zero.
#[unsafe(no_mangle)]
#[must_use]
pub extern "C" fn divide(x: f32, y: f32) -> f32 {
    ops::divide(x, y)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_exports_match_domain() {
        let samples = [(2.0, 3.0), (4.0, 2.5), (5.0, 7.0), (-1.25, 0.5)];
        for (x, y) in samples {
            assert_eq!(add(x, y), ops::add(x, y));
            assert_eq!(multiply(x, y), ops::multiply(x, y));
            assert_eq!(subtract(x, y), ops::subtract(x, y));
            assert_eq!(divide(x, y), ops::divide(x, y));
        }
    }

    #[test]
    fn test_exported_divide_by_zero() {
        assert!(divide(1.0, 0.0).is_nan());
        assert!(divide(-1.0, -0.0).is_nan());
    }

    #[test]
    fn test_exports_callable_through_fn_pointers() {
        let table: [(&str, extern "C" fn(f32, f32) -> f32); 4] = [
            ("add", add),
            ("multiply", multiply),
            ("subtract", subtract),
            ("divide", divide),
        ];
        let results: Vec<f32> = table.iter().map(|(_, f)| f(8.0, 2.0)).collect();
        assert_eq!(results, vec![10.0, 16.0, 6.0, 4.0]);
    }
}
