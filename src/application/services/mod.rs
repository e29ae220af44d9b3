//! Application Services
//!
//! Use cases that coordinate the storage capabilities.
//!
//! ## Available Services
//!
//! - **ChatService**: chat lifecycle, message posting and history reads

pub mod chat_service;

pub use chat_service::{ChatService, ChatServiceImpl, ServiceError};
