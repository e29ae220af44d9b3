//! # Value Objects
//!
//! Immutable values that carry meaning across layers.

mod operation_context;

pub use operation_context::OperationContext;
