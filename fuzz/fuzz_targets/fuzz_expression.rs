#![no_main]

use arithmetic_sdk::ArithmeticError;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        match arithmetic::evaluate(s) {
            Ok(eval) => {
                assert!(!eval.display.is_empty());
                assert_eq!(eval.display, arithmetic::render(eval.value));
            }
            Err(
                ArithmeticError::Malformed { .. }
                | ArithmeticError::InvalidOperand { .. }
                | ArithmeticError::DivisionByZero,
            ) => {}
            Err(e) => panic!("unexpected error kind: {e}"),
        }
    }
});
