//! Infix expression evaluation.
//!
//! Expressions are a flat sequence `operand (op operand)*` over the four
//! operators `+ - * /`. There is no precedence: operators apply strictly
//! left to right, each step going through [`ops`](super::ops) with a
//! single-precision accumulator, so `2 + 3 * 4` is `20`.
//!
//! Whitespace around operators is ignored. A leading minus is an operator,
//! not a sign, which makes `-5` and `2 * -3` malformed unless the input is
//! first passed through [`normalize_input`].

use arithmetic_sdk::{ArithmeticError, Evaluation, Operation};

use super::ops;

/// Fractional digits kept by [`render`] before trailing zeros are stripped.
pub const DISPLAY_DIGITS: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Operand(&'a str),
    Operator(Operation),
}

/// Split on operator symbols. Blank fragments between operators are dropped,
/// so adjacent operators surface as two consecutive `Operator` tokens.
fn tokenize(expression: &str) -> Vec<Token<'_>> {
    fn push_operand<'a>(tokens: &mut Vec<Token<'a>>, raw: &'a str) {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            tokens.push(Token::Operand(trimmed));
        }
    }

    let mut tokens = Vec::new();
    let mut start = 0;
    for (idx, c) in expression.char_indices() {
        if let Some(op) = Operation::from_symbol(c) {
            push_operand(&mut tokens, &expression[start..idx]);
            tokens.push(Token::Operator(op));
            start = idx + c.len_utf8();
        }
    }
    push_operand(&mut tokens, &expression[start..]);
    tokens
}

fn parse_operand(token: &str) -> Result<f32, ArithmeticError> {
    token
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ArithmeticError::InvalidOperand {
            token: token.to_owned(),
        })
}

/// Evaluate `expression` left to right.
///
/// # Errors
///
/// - [`ArithmeticError::Malformed`] if the input is empty or operands and
///   operators do not alternate (leading, trailing or doubled operator).
/// - [`ArithmeticError::InvalidOperand`] if an operand is not a finite number.
/// - [`ArithmeticError::DivisionByZero`] if a division leaves the
///   accumulator NaN or infinite.
pub fn evaluate(expression: &str) -> Result<Evaluation, ArithmeticError> {
    let malformed = || ArithmeticError::Malformed {
        expression: expression.to_owned(),
    };

    let tokens = tokenize(expression);
    let Some((&Token::Operand(first), rest)) = tokens.split_first() else {
        return Err(malformed());
    };

    let mut acc = parse_operand(first)?;
    for pair in rest.chunks(2) {
        let &[Token::Operator(op), Token::Operand(raw)] = pair else {
            return Err(malformed());
        };
        acc = ops::apply(op, acc, parse_operand(raw)?);
        if op == Operation::Divide && !acc.is_finite() {
            return Err(ArithmeticError::DivisionByZero);
        }
    }

    Ok(Evaluation {
        value: acc,
        display: render(acc),
    })
}

/// Magnitude from which [`render`] switches to exponent notation.
pub const EXPONENT_THRESHOLD: f64 = 1e21;

/// Fractional digits needed to print any `f32` widened to `f64` exactly.
const EXACT_DIGITS: usize = 149;

/// Render a result for display: nine fractional digits, ties rounded away
/// from zero, then trailing zeros and a dangling point removed.
///
/// Magnitudes of at least `1e21` use the shortest round-trip digits in
/// exponent form (`1.0000000200408773e+21`) and are not trimmed.
#[must_use]
pub fn render(value: f32) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }

    let sign = if value.is_sign_negative() { "-" } else { "" };
    if value.is_infinite() {
        return format!("{sign}Infinity");
    }

    let magnitude = f64::from(value).abs();
    if magnitude >= EXPONENT_THRESHOLD {
        let shortest = format!("{magnitude:e}");
        let exponent_form = match shortest.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => shortest,
        };
        return format!("{sign}{exponent_form}");
    }

    let fixed = to_fixed(magnitude, DISPLAY_DIGITS);
    match fixed.trim_end_matches('0').trim_end_matches('.') {
        "0" => "0".to_owned(),
        trimmed => format!("{sign}{trimmed}"),
    }
}

/// Fixed-point rendering of a non-negative value with `digits` fractional
/// digits, rounding the exact decimal expansion half-up.
fn to_fixed(magnitude: f64, digits: usize) -> String {
    let exact = format!("{magnitude:.EXACT_DIGITS$}");
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(digits))
        .collect();

    if frac_part.as_bytes().get(digits).is_some_and(|d| *d >= b'5') {
        let mut carry = true;
        for d in kept.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
        }
    }

    let (int_digits, frac_digits) = kept.split_at(kept.len() - digits);
    let int_str: String = int_digits.iter().copied().map(char::from).collect();
    let frac_str: String = frac_digits.iter().copied().map(char::from).collect();
    if frac_str.is_empty() {
        int_str
    } else {
        format!("{int_str}.{frac_str}")
    }
}

/// Apply the calculator keypad's input cleanup: a run of adjacent operators
/// collapses to the last one typed, and input that does not start with a
/// digit gets a leading `0` (so `-5` becomes `0-5`).
#[must_use]
pub fn normalize_input(input: &str) -> String {
    let trimmed = input.trim();
    let mut out = String::with_capacity(trimmed.len() + 1);
    for c in trimmed.chars() {
        let is_operator = Operation::from_symbol(c).is_some();
        if is_operator
            && out
                .chars()
                .next_back()
                .is_some_and(|prev| Operation::from_symbol(prev).is_some())
        {
            out.pop();
        }
        out.push(c);
    }
    if !out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert(0, '0');
    }
    out
}
