//! Mentordesk Assistant - chat wrapper around a hosted completion API.
//!
//! The assistant answers questions about the business using a read-only
//! snapshot of the same aggregates the dashboard renders: revenue versus
//! goal, overdue students, the lead pipeline, open tasks, and upcoming
//! calls. The snapshot is serialized into the system prompt; the model
//! call itself is a single HTTP request/response.

pub mod providers;
pub mod service;
pub mod snapshot;
pub mod types;

pub use providers::{CompletionProvider, HostedCompletionProvider, ProviderConfig};
pub use service::{AssistantConfig, AssistantService, AssistantServiceTrait};
pub use snapshot::BusinessSnapshot;
pub use types::{AssistantError, ChatMessage, MessageRole};
