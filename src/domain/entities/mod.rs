//! # Domain Entities
//!
//! Core domain entities and the storage capabilities that operate on them.
//! All persisted entities map directly to their corresponding database tables.
//!
//! - **Chat**: a named conversation container
//! - **Message**: a timestamped text entry belonging to exactly one chat
//! - **ChatMessages**: read-model combining a chat with its latest messages
//!
//! ## Capability Traits
//!
//! Instead of one repository trait per entity, each operation the use cases
//! perform is its own small trait (`ChatSaver`, `MessageReader`, ...).
//! Implementations live in the infrastructure layer.

mod chat;
mod message;

pub use chat::{Chat, ChatMessages, ChatReader, ChatRemover, ChatSaver, MAX_TITLE_LEN};
pub use message::{Message, MessageReader, MessageSaver, MAX_MESSAGE_TEXT_LEN};

#[cfg(test)]
pub use chat::{MockChatReader, MockChatRemover, MockChatSaver};
#[cfg(test)]
pub use message::{MockMessageReader, MockMessageSaver};

use async_trait::async_trait;

use crate::domain::{OperationContext, RepoError};

/// Reachability check of the backing store, used by the readiness probe.
#[async_trait]
pub trait StoreHealth: Send + Sync {
    async fn ping(&self, ctx: &OperationContext) -> Result<(), RepoError>;
}
