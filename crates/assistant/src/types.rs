//! Shared types for the assistant - messages and errors.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Message role in a chat exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// User message.
    User,
    /// Assistant (model) response.
    Assistant,
    /// System message (the business snapshot prompt).
    System,
}

/// A single message in the conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub role: MessageRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    /// Create a new user message.
    pub fn user(content: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role: MessageRole::User,
            content: content.to_string(),
            created_at: Utc::now(),
        }
    }

    /// Create a new assistant message.
    pub fn assistant(content: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role: MessageRole::Assistant,
            content: content.to_string(),
            created_at: Utc::now(),
        }
    }
}

/// Errors surfaced by the assistant.
#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("Completion API key is not configured")]
    MissingApiKey,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Completion request failed: {0}")]
    Request(String),

    #[error("Completion API returned status {status}: {message}")]
    Provider { status: u16, message: String },

    #[error("Completion API returned no reply")]
    EmptyReply,
}

impl From<reqwest::Error> for AssistantError {
    fn from(err: reqwest::Error) -> Self {
        AssistantError::Request(err.to_string())
    }
}
