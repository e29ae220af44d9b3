//! Response DTOs
//!
//! Data structures for API response bodies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Chat, ChatMessages, Message};

/// Chat response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub id: i64,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

impl From<Chat> for ChatResponse {
    fn from(chat: Chat) -> Self {
        Self {
            id: chat.id,
            title: chat.title,
            created_at: chat.created_at,
        }
    }
}

/// Message response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub id: i64,
    pub chat_id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self {
            id: message.id,
            chat_id: message.chat_id,
            text: message.text,
            created_at: message.created_at,
        }
    }
}

/// Chat with its latest messages, newest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessagesResponse {
    pub id: i64,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub messages: Vec<MessageResponse>,
}

impl From<ChatMessages> for ChatMessagesResponse {
    fn from(output: ChatMessages) -> Self {
        Self {
            id: output.id,
            title: output.title,
            created_at: output.created_at,
            messages: output.messages.into_iter().map(MessageResponse::from).collect(),
        }
    }
}

/// Health probe response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
