use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use std::sync::Arc;

use super::community_model::{AnnualMember, NewAnnualMember};
use super::community_traits::{CommunityRepositoryTrait, CommunityServiceTrait};
use crate::errors::Result;
use crate::revenue::revenue_model::MonthKey;
use crate::store::SessionContext;

pub struct CommunityService {
    repository: Arc<dyn CommunityRepositoryTrait>,
}

impl CommunityService {
    pub fn new(repository: Arc<dyn CommunityRepositoryTrait>) -> Self {
        CommunityService { repository }
    }
}

#[async_trait]
impl CommunityServiceTrait for CommunityService {
    async fn list_members(&self, session: &SessionContext) -> Result<Vec<AnnualMember>> {
        self.repository.list(session).await
    }

    async fn add_member(
        &self,
        session: &SessionContext,
        mut new_member: NewAnnualMember,
    ) -> Result<AnnualMember> {
        new_member.validate()?;
        if new_member.joined_at.is_none() {
            new_member.joined_at = Some(Utc::now());
        }
        debug!("adding annual member '{}'", new_member.name);
        self.repository.insert(session, new_member).await
    }

    async fn remove_member(&self, session: &SessionContext, member_id: &str) -> Result<()> {
        self.repository.delete(session, member_id).await
    }

    async fn members_joined_in(
        &self,
        session: &SessionContext,
        month: MonthKey,
    ) -> Result<Vec<AnnualMember>> {
        let members = self.repository.list(session).await?;
        Ok(members
            .into_iter()
            .filter(|member| month.contains(member.joined_at.date_naive()))
            .collect())
    }
}
