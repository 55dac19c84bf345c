use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

use super::leads_model::{Lead, LeadStatus, LeadUpdate, NewLead};
use super::leads_traits::LeadRepositoryTrait;
use crate::errors::{RemoteError, Result};
use crate::store::{eq, SessionContext, StoreClient};

const LEADS_TABLE: &str = "leads";

pub struct LeadRepository {
    client: Arc<StoreClient>,
}

impl LeadRepository {
    pub fn new(client: Arc<StoreClient>) -> Self {
        LeadRepository { client }
    }
}

#[async_trait]
impl LeadRepositoryTrait for LeadRepository {
    async fn list(&self, session: &SessionContext) -> Result<Vec<Lead>> {
        self.client
            .select(
                session,
                LEADS_TABLE,
                &[
                    ("userId", eq(&session.user_id)),
                    ("order", "createdAt.desc".to_string()),
                ],
            )
            .await
    }

    async fn create(&self, session: &SessionContext, new_lead: NewLead) -> Result<Lead> {
        let mut row = serde_json::to_value(&new_lead)?;
        row["id"] = json!(new_lead
            .id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string()));
        row["userId"] = json!(session.user_id);
        self.client.insert(session, LEADS_TABLE, &row).await
    }

    async fn update(&self, session: &SessionContext, update: LeadUpdate) -> Result<Lead> {
        let mut patch = serde_json::to_value(&update)?;
        if let Some(body) = patch.as_object_mut() {
            body.remove("id");
        }
        let rows: Vec<Lead> = self
            .client
            .update(
                session,
                LEADS_TABLE,
                &[("userId", eq(&session.user_id)), ("id", eq(&update.id))],
                &patch,
            )
            .await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| RemoteError::NotFound(format!("lead '{}'", update.id)).into())
    }

    async fn update_status(
        &self,
        session: &SessionContext,
        lead_id: &str,
        status: LeadStatus,
    ) -> Result<()> {
        let patch = json!({ "status": status });
        let _rows: Vec<Lead> = self
            .client
            .update(
                session,
                LEADS_TABLE,
                &[("userId", eq(&session.user_id)), ("id", eq(lead_id))],
                &patch,
            )
            .await?;
        Ok(())
    }

    async fn delete(&self, session: &SessionContext, lead_id: &str) -> Result<()> {
        self.client
            .delete(
                session,
                LEADS_TABLE,
                &[("userId", eq(&session.user_id)), ("id", eq(lead_id))],
            )
            .await
    }
}
