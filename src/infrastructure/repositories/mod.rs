//! Repository Implementations
//!
//! PostgreSQL implementations of the domain storage capabilities.
//!
//! - **PgChatRepository** - `ChatSaver`, `ChatReader`, `ChatRemover`
//! - **PgMessageRepository** - `MessageSaver`, `MessageReader`
//!
//! Every query goes through [`crate::infrastructure::database::execute`],
//! which bounds it in time and classifies its failure.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sqlx::PgPool;
//! use chat_api::infrastructure::repositories::{PgChatRepository, PgMessageRepository};
//!
//! fn setup_repositories(pool: PgPool) {
//!     let chat_repo = PgChatRepository::new(pool.clone());
//!     let message_repo = PgMessageRepository::new(pool);
//! }
//! ```

pub mod chat_repository;
pub mod message_repository;

pub use chat_repository::PgChatRepository;
pub use message_repository::PgMessageRepository;
