use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;

use super::settings_model::{SettingsUpdate, UserSettings};
use super::settings_traits::SettingsRepositoryTrait;
use crate::errors::Result;
use crate::store::{eq, SessionContext, StoreClient};

const USER_SETTINGS_TABLE: &str = "user_settings";

pub struct SettingsRepository {
    client: Arc<StoreClient>,
}

impl SettingsRepository {
    pub fn new(client: Arc<StoreClient>) -> Self {
        SettingsRepository { client }
    }
}

#[async_trait]
impl SettingsRepositoryTrait for SettingsRepository {
    async fn get(&self, session: &SessionContext) -> Result<Option<UserSettings>> {
        let mut rows: Vec<UserSettings> = self
            .client
            .select(
                session,
                USER_SETTINGS_TABLE,
                &[("userId", eq(&session.user_id))],
            )
            .await?;
        Ok(rows.pop())
    }

    async fn upsert(
        &self,
        session: &SessionContext,
        update: &SettingsUpdate,
    ) -> Result<UserSettings> {
        let mut row = serde_json::to_value(update)?;
        row["userId"] = json!(session.user_id);
        self.client.upsert(session, USER_SETTINGS_TABLE, &row).await
    }
}
