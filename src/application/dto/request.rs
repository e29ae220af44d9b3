//! Request DTOs
//!
//! Data structures for API request bodies. Length limits count Unicode code
//! points of the trimmed value.

use std::borrow::Cow;

use serde::{Deserialize, Deserializer};
use validator::{Validate, ValidationError};

use crate::domain::{MAX_MESSAGE_TEXT_LEN, MAX_TITLE_LEN};

/// Normalisation applied to a request body after it validated.
pub trait Sanitize {
    fn sanitize(&mut self);
}

/// Create chat request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateChatRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "validate_title"))]
    pub title: String,
}

impl Sanitize for CreateChatRequest {
    fn sanitize(&mut self) {
        self.title = self.title.trim().to_string();
    }
}

/// Send message request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMessageRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "validate_text"))]
    pub text: String,
}

impl Sanitize for CreateMessageRequest {
    fn sanitize(&mut self) {
        self.text = self.text.trim().to_string();
    }
}

/// Chat read query parameters
///
/// Built from the raw key/value pairs so that no query string can reject the
/// request. `limit` stays raw text and the first occurrence wins.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ChatMessagesQuery {
    pub limit: Option<String>,
}

impl ChatMessagesQuery {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let limit = pairs
            .into_iter()
            .find_map(|(key, value)| (key == "limit").then_some(value));
        Self { limit }
    }
}

/// A missing or `null` field reads as empty text, which validation rejects.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn validate_title(title: &str) -> Result<(), ValidationError> {
    trimmed_length_between(title, MAX_TITLE_LEN, "title")
}

fn validate_text(text: &str) -> Result<(), ValidationError> {
    trimmed_length_between(text, MAX_MESSAGE_TEXT_LEN, "text")
}

fn trimmed_length_between(value: &str, max: usize, field: &str) -> Result<(), ValidationError> {
    let len = value.trim().chars().count();
    if len == 0 || len > max {
        let message = format!("{} should be between 1 and {} characters", field, max);
        return Err(ValidationError::new("length").with_message(Cow::Owned(message)));
    }
    Ok(())
}
