//! Arithmetic Module
//!
//! Single-precision add, multiply, subtract and divide, exported one symbol
//! per operation so an external host can resolve each of them by name.
//!
//! ## Architecture
//!
//! - `domain/ops.rs` - The four operations and the zero-divisor policy
//! - `domain/expression.rs` - Left-to-right expression evaluation and rendering
//! - `domain/service.rs` - `ArithmeticClientV1` implementation
//! - `export.rs` - C ABI symbols (`add`, `multiply`, `subtract`, `divide`)
//!
//! Consumers that only need the contract should depend on `arithmetic-sdk`.

#![deny(rust_2018_idioms)]

// === DOMAIN ===
pub mod domain;
pub use domain::Service;
pub use domain::expression::{evaluate, normalize_input, render};

// === BOUNDARY EXPORTS ===
pub mod export;
