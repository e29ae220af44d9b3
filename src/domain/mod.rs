//! # Domain Layer
//!
//! The domain layer contains the core types of the chat service.
//! It is independent of any HTTP or SQL concerns.
//!
//! ## Structure
//!
//! - **entities**: Chat, Message, the ChatMessages read-model and the
//!   storage capability traits
//! - **errors**: the repository-tier error vocabulary
//! - **value_objects**: the cancellation/deadline token
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Capability traits define data access contracts
//! - Storage failures are expressed only as [`RepoError`] kinds

pub mod entities;
pub mod errors;
pub mod value_objects;

// Re-export commonly used types
pub use entities::*;
pub use errors::RepoError;
pub use value_objects::*;
