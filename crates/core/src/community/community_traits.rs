//! Community repository and service traits.

use async_trait::async_trait;

use super::community_model::{AnnualMember, NewAnnualMember};
use crate::errors::Result;
use crate::revenue::revenue_model::MonthKey;
use crate::store::SessionContext;

#[async_trait]
pub trait CommunityRepositoryTrait: Send + Sync {
    async fn list(&self, session: &SessionContext) -> Result<Vec<AnnualMember>>;

    async fn insert(
        &self,
        session: &SessionContext,
        new_member: NewAnnualMember,
    ) -> Result<AnnualMember>;

    async fn delete(&self, session: &SessionContext, member_id: &str) -> Result<()>;
}

#[async_trait]
pub trait CommunityServiceTrait: Send + Sync {
    async fn list_members(&self, session: &SessionContext) -> Result<Vec<AnnualMember>>;

    async fn add_member(
        &self,
        session: &SessionContext,
        new_member: NewAnnualMember,
    ) -> Result<AnnualMember>;

    async fn remove_member(&self, session: &SessionContext, member_id: &str) -> Result<()>;

    /// Members whose join date falls inside the given month.
    async fn members_joined_in(
        &self,
        session: &SessionContext,
        month: MonthKey,
    ) -> Result<Vec<AnnualMember>>;
}
