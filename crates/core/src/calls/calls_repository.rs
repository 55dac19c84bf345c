use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

use super::calls_model::{Call, NewCall};
use super::calls_traits::CallRepositoryTrait;
use crate::errors::{RemoteError, Result};
use crate::store::{eq, SessionContext, StoreClient};

const CALLS_TABLE: &str = "calls";

pub struct CallRepository {
    client: Arc<StoreClient>,
}

impl CallRepository {
    pub fn new(client: Arc<StoreClient>) -> Self {
        CallRepository { client }
    }
}

#[async_trait]
impl CallRepositoryTrait for CallRepository {
    async fn list(&self, session: &SessionContext) -> Result<Vec<Call>> {
        self.client
            .select(
                session,
                CALLS_TABLE,
                &[
                    ("userId", eq(&session.user_id)),
                    ("order", "scheduledAt.asc".to_string()),
                ],
            )
            .await
    }

    async fn create(&self, session: &SessionContext, new_call: NewCall) -> Result<Call> {
        let mut row = serde_json::to_value(&new_call)?;
        row["id"] = json!(new_call
            .id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string()));
        row["userId"] = json!(session.user_id);
        self.client.insert(session, CALLS_TABLE, &row).await
    }

    async fn set_completed(&self, session: &SessionContext, call_id: &str) -> Result<Call> {
        let patch = json!({ "completed": true });
        let rows: Vec<Call> = self
            .client
            .update(
                session,
                CALLS_TABLE,
                &[("userId", eq(&session.user_id)), ("id", eq(call_id))],
                &patch,
            )
            .await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| RemoteError::NotFound(format!("call '{}'", call_id)).into())
    }

    async fn delete(&self, session: &SessionContext, call_id: &str) -> Result<()> {
        self.client
            .delete(
                session,
                CALLS_TABLE,
                &[("userId", eq(&session.user_id)), ("id", eq(call_id))],
            )
            .await
    }
}
