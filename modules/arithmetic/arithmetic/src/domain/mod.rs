//! Domain layer for the arithmetic module
//!
//! Contains the operations, the expression evaluator and the service
//! exposing both through the SDK trait.

pub mod expression;
pub mod ops;
pub mod service;

pub use service::Service;
