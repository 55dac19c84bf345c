use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

use super::community_model::{AnnualMember, NewAnnualMember};
use super::community_traits::CommunityRepositoryTrait;
use crate::errors::Result;
use crate::store::{eq, SessionContext, StoreClient};

const ANNUAL_MEMBERS_TABLE: &str = "community_annual_members";

pub struct CommunityRepository {
    client: Arc<StoreClient>,
}

impl CommunityRepository {
    pub fn new(client: Arc<StoreClient>) -> Self {
        CommunityRepository { client }
    }
}

#[async_trait]
impl CommunityRepositoryTrait for CommunityRepository {
    async fn list(&self, session: &SessionContext) -> Result<Vec<AnnualMember>> {
        self.client
            .select(
                session,
                ANNUAL_MEMBERS_TABLE,
                &[
                    ("userId", eq(&session.user_id)),
                    ("order", "joinedAt.desc".to_string()),
                ],
            )
            .await
    }

    async fn insert(
        &self,
        session: &SessionContext,
        new_member: NewAnnualMember,
    ) -> Result<AnnualMember> {
        let mut row = serde_json::to_value(&new_member)?;
        row["id"] = json!(new_member
            .id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string()));
        row["userId"] = json!(session.user_id);
        self.client.insert(session, ANNUAL_MEMBERS_TABLE, &row).await
    }

    async fn delete(&self, session: &SessionContext, member_id: &str) -> Result<()> {
        self.client
            .delete(
                session,
                ANNUAL_MEMBERS_TABLE,
                &[("userId", eq(&session.user_id)), ("id", eq(member_id))],
            )
            .await
    }
}
