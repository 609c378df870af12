//! Transport-agnostic models for the arithmetic module.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::api::ArithmeticError;

/// One of the four exported binary operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Multiply,
    Subtract,
    Divide,
}

impl Operation {
    /// All operations, in export order.
    pub const ALL: [Self; 4] = [Self::Add, Self::Multiply, Self::Subtract, Self::Divide];

    /// Infix symbol used in expressions.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Multiply => '*',
            Self::Subtract => '-',
            Self::Divide => '/',
        }
    }

    /// Exported function name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Multiply => "multiply",
            Self::Subtract => "subtract",
            Self::Divide => "divide",
        }
    }

    /// Map an infix symbol back to its operation.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '*' => Some(Self::Multiply),
            '-' => Some(Self::Subtract),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = ArithmeticError;

    /// Accepts the exported name (any ASCII case) or the infix symbol.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        let mut chars = trimmed.chars();
        if let (Some(c), None) = (chars.next(), chars.next())
            && let Some(op) = Self::from_symbol(c)
        {
            return Ok(op);
        }

        Self::ALL
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ArithmeticError::UnknownOperation {
                name: s.to_owned(),
            })
    }
}

/// Result of evaluating an expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Single-precision accumulator after the last operation
    pub value: f32,
    /// Host-facing rendering of `value`
    pub display: String,
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_from_symbol() {
        assert_eq!("+".parse::<Operation>(), Ok(Operation::Add));
        assert_eq!("*".parse::<Operation>(), Ok(Operation::Multiply));
        assert_eq!(" - ".parse::<Operation>(), Ok(Operation::Subtract));
        assert_eq!("/".parse::<Operation>(), Ok(Operation::Divide));
    }

    #[test]
    fn test_operation_from_name() {
        assert_eq!("divide".parse::<Operation>(), Ok(Operation::Divide));
        assert_eq!("Multiply".parse::<Operation>(), Ok(Operation::Multiply));
    }

    #[test]
    fn test_operation_unknown() {
        let err = "modulo".parse::<Operation>().unwrap_err();
        assert_eq!(
            err,
            ArithmeticError::UnknownOperation {
                name: "modulo".to_owned()
            }
        );
        assert!("%".parse::<Operation>().is_err());
        assert!("".parse::<Operation>().is_err());
    }

    #[test]
    fn test_symbol_roundtrip_covers_all() {
        for op in Operation::ALL {
            assert_eq!(Operation::from_symbol(op.symbol()), Some(op));
            assert_eq!(op.to_string(), op.name());
        }
    }

    #[test]
    fn test_operation_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Operation::Subtract).unwrap();
        assert_eq!(json, "\"subtract\"");
        let op: Operation = serde_json::from_str("\"divide\"").unwrap();
        assert_eq!(op, Operation::Divide);
    }
}
