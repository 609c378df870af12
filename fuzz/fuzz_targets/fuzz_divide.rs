#![no_main]

use arithmetic::domain::ops::divide;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (f32, f32)| {
    let (x, y) = input;
    let q = divide(x, y);
    if y == 0.0 {
        assert!(q.is_nan(), "zero divisor must yield NaN");
    } else if q.is_nan() {
        assert!((x / y).is_nan());
    } else {
        assert_eq!(q.to_bits(), (x / y).to_bits());
    }
});
