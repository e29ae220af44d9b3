//! Shared Utilities
//!
//! Error and response plumbing used by the HTTP layer.

pub mod error;
pub mod response;
pub mod validation;
