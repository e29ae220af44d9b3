//! Data Transfer Objects
//!
//! DTOs for API request/response serialization.

pub mod request;
pub mod response;

pub use request::{ChatMessagesQuery, CreateChatRequest, CreateMessageRequest, Sanitize};
pub use response::{ChatMessagesResponse, ChatResponse, HealthResponse, MessageResponse};
