use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::calls_model::{Call, NewCall};
use crate::errors::Result;
use crate::store::SessionContext;

#[async_trait]
pub trait CallRepositoryTrait: Send + Sync {
    async fn list(&self, session: &SessionContext) -> Result<Vec<Call>>;

    async fn create(&self, session: &SessionContext, new_call: NewCall) -> Result<Call>;

    async fn set_completed(&self, session: &SessionContext, call_id: &str) -> Result<Call>;

    async fn delete(&self, session: &SessionContext, call_id: &str) -> Result<()>;
}

#[async_trait]
pub trait CallsServiceTrait: Send + Sync {
    async fn list_calls(&self, session: &SessionContext) -> Result<Vec<Call>>;

    /// Calls not yet completed and scheduled at or after the given instant.
    async fn upcoming_calls(
        &self,
        session: &SessionContext,
        from: DateTime<Utc>,
    ) -> Result<Vec<Call>>;

    async fn schedule_call(&self, session: &SessionContext, new_call: NewCall) -> Result<Call>;

    async fn complete_call(&self, session: &SessionContext, call_id: &str) -> Result<Call>;

    async fn delete_call(&self, session: &SessionContext, call_id: &str) -> Result<()>;
}
