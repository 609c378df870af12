//! Domain service for arithmetic
//!
//! Implements the SDK contract on top of the pure operations and the
//! expression evaluator.

use arithmetic_sdk::{ArithmeticClientV1, ArithmeticError, Evaluation};
use tracing::debug;

use super::{expression, ops};

/// Domain service that performs arithmetic operations.
///
/// Stateless; clones are free and can be shared across threads.
#[derive(Clone, Copy, Debug, Default)]
pub struct Service;

impl Service {
    /// Create a new service.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ArithmeticClientV1 for Service {
    fn add(&self, x: f32, y: f32) -> f32 {
        debug!(x, y, "performing addition");
        ops::add(x, y)
    }

    fn multiply(&self, x: f32, y: f32) -> f32 {
        debug!(x, y, "performing multiplication");
        ops::multiply(x, y)
    }

    fn subtract(&self, x: f32, y: f32) -> f32 {
        debug!(x, y, "performing subtraction");
        ops::subtract(x, y)
    }

    fn divide(&self, x: f32, y: f32) -> f32 {
        debug!(x, y, "performing division");
        ops::divide(x, y)
    }

    fn evaluate(&self, expression: &str) -> Result<Evaluation, ArithmeticError> {
        debug!(expression, "evaluating expression");
        expression::evaluate(expression)
            .inspect(|eval| {
                debug!(value = eval.value, display = %eval.display, "expression evaluated");
            })
            .inspect_err(|e| debug!(error = %e, "expression rejected"))
    }
}
