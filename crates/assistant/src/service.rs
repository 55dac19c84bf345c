//! Assistant service - snapshot in, reply out.

use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use crate::providers::CompletionProvider;
use crate::snapshot::BusinessSnapshot;
use crate::types::{AssistantError, ChatMessage};

/// Configuration for the assistant service.
pub struct AssistantConfig {
    /// How many trailing conversation messages are replayed to the model.
    pub max_history_messages: usize,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            max_history_messages: 20,
        }
    }
}

/// Trait defining the assistant service API.
#[async_trait]
pub trait AssistantServiceTrait: Send + Sync {
    /// Sends one user message with the business snapshot as context and
    /// returns the assistant reply.
    async fn send_message(
        &self,
        snapshot: &BusinessSnapshot,
        history: &[ChatMessage],
        content: &str,
    ) -> Result<ChatMessage, AssistantError>;
}

pub struct AssistantService {
    provider: Arc<dyn CompletionProvider>,
    config: AssistantConfig,
}

impl AssistantService {
    pub fn new(provider: Arc<dyn CompletionProvider>, config: AssistantConfig) -> Self {
        AssistantService { provider, config }
    }
}

#[async_trait]
impl AssistantServiceTrait for AssistantService {
    async fn send_message(
        &self,
        snapshot: &BusinessSnapshot,
        history: &[ChatMessage],
        content: &str,
    ) -> Result<ChatMessage, AssistantError> {
        if content.trim().is_empty() {
            return Err(AssistantError::InvalidInput(
                "message cannot be empty".to_string(),
            ));
        }

        // Replay only the trailing window of the conversation.
        let start = history
            .len()
            .saturating_sub(self.config.max_history_messages);
        let mut messages: Vec<ChatMessage> = history[start..].to_vec();
        messages.push(ChatMessage::user(content));

        let system_prompt = snapshot.system_prompt();
        debug!(
            "sending {} message(s) with a {}-char snapshot prompt",
            messages.len(),
            system_prompt.len()
        );

        let reply = self.provider.complete(&system_prompt, &messages).await?;
        Ok(ChatMessage::assistant(&reply))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MessageRole;
    use chrono::{NaiveDate, TimeZone, Utc};
    use mentordesk_core::revenue::RevenueBreakdown;
    use rust_decimal_macros::dec;
    use std::sync::Mutex;

    struct MockProvider {
        reply: String,
        seen_prompts: Mutex<Vec<String>>,
        seen_message_counts: Mutex<Vec<usize>>,
    }

    impl MockProvider {
        fn new(reply: &str) -> Self {
            MockProvider {
                reply: reply.to_string(),
                seen_prompts: Mutex::new(Vec::new()),
                seen_message_counts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl CompletionProvider for MockProvider {
        async fn complete(
            &self,
            system_prompt: &str,
            messages: &[ChatMessage],
        ) -> Result<String, AssistantError> {
            self.seen_prompts
                .lock()
                .unwrap()
                .push(system_prompt.to_string());
            self.seen_message_counts.lock().unwrap().push(messages.len());
            Ok(self.reply.clone())
        }
    }

    fn snapshot() -> BusinessSnapshot {
        BusinessSnapshot::build(
            NaiveDate::from_ymd_opt(2024, 3, 20).unwrap(),
            RevenueBreakdown {
                month: "2024-03".to_string(),
                consulting_revenue: dec!(300),
                community_revenue: dec!(938),
                agency_revenue: dec!(1000),
                product_revenue: dec!(0),
                total: dec!(2238),
                goal: dec!(5000),
                progress_percent: dec!(44.76),
            },
            &[],
            &[],
            &[],
            &[],
            Utc.with_ymd_and_hms(2024, 3, 20, 8, 0, 0).unwrap(),
        )
    }

    #[tokio::test]
    async fn reply_is_wrapped_as_assistant_message() {
        let provider = Arc::new(MockProvider::new("You are at 44.76% of goal."));
        let service = AssistantService::new(provider.clone(), AssistantConfig::default());

        let reply = service
            .send_message(&snapshot(), &[], "How is the month going?")
            .await
            .unwrap();

        assert_eq!(reply.role, MessageRole::Assistant);
        assert_eq!(reply.content, "You are at 44.76% of goal.");

        let prompts = provider.seen_prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("$2238 of $5000 goal"));
    }

    #[tokio::test]
    async fn history_is_capped_to_the_trailing_window() {
        let provider = Arc::new(MockProvider::new("ok"));
        let service = AssistantService::new(
            provider.clone(),
            AssistantConfig {
                max_history_messages: 4,
            },
        );

        let history: Vec<ChatMessage> =
            (0..10).map(|i| ChatMessage::user(&format!("m{}", i))).collect();
        service
            .send_message(&snapshot(), &history, "latest")
            .await
            .unwrap();

        // 4 from history + the new user message.
        assert_eq!(*provider.seen_message_counts.lock().unwrap(), vec![5]);
    }

    #[tokio::test]
    async fn empty_message_is_rejected_before_any_call() {
        let provider = Arc::new(MockProvider::new("ok"));
        let service = AssistantService::new(provider.clone(), AssistantConfig::default());

        let result = service.send_message(&snapshot(), &[], "   ").await;
        assert!(matches!(result, Err(AssistantError::InvalidInput(_))));
        assert!(provider.seen_prompts.lock().unwrap().is_empty());
    }
}
