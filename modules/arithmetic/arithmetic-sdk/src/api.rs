//! Arithmetic API trait and error types
//!
//! Contract trait and errors for the arithmetic module.

use crate::models::{Evaluation, Operation};

/// Arithmetic API trait
///
/// Single-precision arithmetic over a stateless backend. The four binary
/// operations never fail: division by zero yields NaN, which is the only
/// error signal at that level. Expression evaluation reports failures
/// through [`ArithmeticError`].
pub trait ArithmeticClientV1: Send + Sync {
    /// Return `x + y`.
    fn add(&self, x: f32, y: f32) -> f32;

    /// Return `x * y`.
    fn multiply(&self, x: f32, y: f32) -> f32;

    /// Return `x - y`.
    fn subtract(&self, x: f32, y: f32) -> f32;

    /// Return `x / y`, or NaN when `y` is zero of either sign.
    fn divide(&self, x: f32, y: f32) -> f32;

    /// Run the operation named by `op`.
    fn apply(&self, op: Operation, x: f32, y: f32) -> f32 {
        match op {
            Operation::Add => self.add(x, y),
            Operation::Multiply => self.multiply(x, y),
            Operation::Subtract => self.subtract(x, y),
            Operation::Divide => self.divide(x, y),
        }
    }

    /// Evaluate an infix expression strictly left to right.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::Malformed`] when operands and operators do
    /// not alternate, [`ArithmeticError::InvalidOperand`] when an operand is
    /// not a number and [`ArithmeticError::DivisionByZero`] when a division
    /// produces NaN or an infinity.
    fn evaluate(&self, expression: &str) -> Result<Evaluation, ArithmeticError>;
}

/// Error type for Arithmetic operations
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ArithmeticError {
    /// Operands and operators do not alternate
    #[error("malformed expression: '{expression}'")]
    Malformed { expression: String },

    /// An operand could not be parsed as a number
    #[error("invalid operand: '{token}'")]
    InvalidOperand { token: String },

    /// Operation name or symbol is not recognized
    #[error("unknown operation: '{name}'")]
    UnknownOperation { name: String },

    /// A division produced the NaN sentinel or an infinity
    #[error("division by zero")]
    DivisionByZero,
}
