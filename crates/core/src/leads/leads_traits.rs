//! Lead repository and service traits.

use async_trait::async_trait;

use super::leads_board::{LeadBoard, PendingMove};
use super::leads_model::{Lead, LeadStatus, LeadUpdate, NewLead};
use crate::errors::Result;
use crate::store::SessionContext;

#[async_trait]
pub trait LeadRepositoryTrait: Send + Sync {
    async fn list(&self, session: &SessionContext) -> Result<Vec<Lead>>;

    async fn create(&self, session: &SessionContext, new_lead: NewLead) -> Result<Lead>;

    async fn update(&self, session: &SessionContext, update: LeadUpdate) -> Result<Lead>;

    /// Persists only the pipeline column of a lead.
    async fn update_status(
        &self,
        session: &SessionContext,
        lead_id: &str,
        status: LeadStatus,
    ) -> Result<()>;

    async fn delete(&self, session: &SessionContext, lead_id: &str) -> Result<()>;
}

#[async_trait]
pub trait LeadsServiceTrait: Send + Sync {
    async fn list_leads(&self, session: &SessionContext) -> Result<Vec<Lead>>;

    /// Loads the pipeline into a local board.
    async fn load_board(&self, session: &SessionContext) -> Result<LeadBoard>;

    async fn create_lead(&self, session: &SessionContext, new_lead: NewLead) -> Result<Lead>;

    async fn update_lead(&self, session: &SessionContext, update: LeadUpdate) -> Result<Lead>;

    async fn delete_lead(&self, session: &SessionContext, lead_id: &str) -> Result<()>;

    /// Optimistically moves a lead to another column: the board changes
    /// immediately, then the write is persisted. On failure the board is
    /// rolled back to the pre-move snapshot and the error propagates.
    async fn move_lead(
        &self,
        session: &SessionContext,
        board: &mut LeadBoard,
        lead_id: &str,
        to: LeadStatus,
    ) -> Result<PendingMove>;
}
