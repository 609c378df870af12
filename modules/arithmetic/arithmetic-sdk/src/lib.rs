//! Arithmetic SDK
//!
//! This crate provides the contract of the arithmetic module:
//! - API trait (`ArithmeticClientV1`)
//! - Operation and evaluation types (`Operation`, `Evaluation`)
//! - Error types (`ArithmeticError`)
//!
//! ## Usage
//!
//! ```ignore
//! use arithmetic_sdk::{ArithmeticClientV1, Operation};
//!
//! let client: &dyn ArithmeticClientV1 = &service;
//! let quotient = client.apply(Operation::Divide, 10.0, 4.0);
//! let result = client.evaluate("2 + 3 * 4")?;
//! assert_eq!(result.display, "20");
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === API TRAIT AND TYPES ===
mod api;
pub use api::{ArithmeticClientV1, ArithmeticError};

// === MODELS ===
mod models;
pub use models::{Evaluation, Operation};
