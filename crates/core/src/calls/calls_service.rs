use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

use super::calls_model::{Call, NewCall};
use super::calls_traits::{CallRepositoryTrait, CallsServiceTrait};
use crate::errors::Result;
use crate::store::SessionContext;

pub struct CallsService {
    repository: Arc<dyn CallRepositoryTrait>,
}

impl CallsService {
    pub fn new(repository: Arc<dyn CallRepositoryTrait>) -> Self {
        CallsService { repository }
    }
}

#[async_trait]
impl CallsServiceTrait for CallsService {
    async fn list_calls(&self, session: &SessionContext) -> Result<Vec<Call>> {
        self.repository.list(session).await
    }

    async fn upcoming_calls(
        &self,
        session: &SessionContext,
        from: DateTime<Utc>,
    ) -> Result<Vec<Call>> {
        let calls = self.repository.list(session).await?;
        Ok(calls
            .into_iter()
            .filter(|call| !call.completed && call.scheduled_at >= from)
            .collect())
    }

    async fn schedule_call(&self, session: &SessionContext, new_call: NewCall) -> Result<Call> {
        new_call.validate()?;
        self.repository.create(session, new_call).await
    }

    async fn complete_call(&self, session: &SessionContext, call_id: &str) -> Result<Call> {
        self.repository.set_completed(session, call_id).await
    }

    async fn delete_call(&self, session: &SessionContext, call_id: &str) -> Result<()> {
        self.repository.delete(session, call_id).await
    }
}
