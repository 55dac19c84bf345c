//! Provider adapter for the hosted chat-completion API.
//!
//! One trait, one HTTP implementation. The abstraction exists so the
//! service can be exercised with a fake provider in tests without any
//! network access.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::types::{AssistantError, ChatMessage, MessageRole};

/// Connection settings for the completion API.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub api_url: String,
    pub api_key: String,
    pub model: String,
}

/// Adapter over a hosted completion backend.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Sends the system prompt plus the role-tagged conversation and
    /// returns the reply text.
    async fn complete(
        &self,
        system_prompt: &str,
        messages: &[ChatMessage],
    ) -> Result<String, AssistantError>;
}

// Wire format of the chat-completions endpoint.
#[derive(Serialize)]
struct WireMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Deserialize)]
struct CompletionMessage {
    content: String,
}

fn wire_role(role: MessageRole) -> &'static str {
    match role {
        MessageRole::User => "user",
        MessageRole::Assistant => "assistant",
        MessageRole::System => "system",
    }
}

pub struct HostedCompletionProvider {
    http: reqwest::Client,
    config: ProviderConfig,
}

impl HostedCompletionProvider {
    pub fn new(config: ProviderConfig) -> Result<Self, AssistantError> {
        if config.api_key.trim().is_empty() {
            return Err(AssistantError::MissingApiKey);
        }
        Ok(HostedCompletionProvider {
            http: reqwest::Client::new(),
            config,
        })
    }
}

#[async_trait]
impl CompletionProvider for HostedCompletionProvider {
    async fn complete(
        &self,
        system_prompt: &str,
        messages: &[ChatMessage],
    ) -> Result<String, AssistantError> {
        let mut wire = Vec::with_capacity(messages.len() + 1);
        wire.push(WireMessage {
            role: "system",
            content: system_prompt,
        });
        wire.extend(messages.iter().map(|m| WireMessage {
            role: wire_role(m.role),
            content: &m.content,
        }));

        let request = CompletionRequest {
            model: &self.config.model,
            messages: wire,
        };

        let response = self
            .http
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(AssistantError::Provider {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: CompletionResponse = response
            .json()
            .await
            .map_err(|e| AssistantError::Request(e.to_string()))?;
        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(AssistantError::EmptyReply)
    }
}
