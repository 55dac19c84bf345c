use async_trait::async_trait;
use log::{debug, warn};
use std::sync::Arc;

use super::leads_board::{LeadBoard, PendingMove};
use super::leads_model::{Lead, LeadStatus, LeadUpdate, NewLead};
use super::leads_traits::{LeadRepositoryTrait, LeadsServiceTrait};
use crate::errors::Result;
use crate::store::SessionContext;

/// Service for the sales pipeline.
pub struct LeadsService {
    repository: Arc<dyn LeadRepositoryTrait>,
}

impl LeadsService {
    pub fn new(repository: Arc<dyn LeadRepositoryTrait>) -> Self {
        LeadsService { repository }
    }
}

#[async_trait]
impl LeadsServiceTrait for LeadsService {
    async fn list_leads(&self, session: &SessionContext) -> Result<Vec<Lead>> {
        self.repository.list(session).await
    }

    async fn load_board(&self, session: &SessionContext) -> Result<LeadBoard> {
        Ok(LeadBoard::new(self.repository.list(session).await?))
    }

    async fn create_lead(&self, session: &SessionContext, new_lead: NewLead) -> Result<Lead> {
        new_lead.validate()?;
        debug!("creating lead '{}'", new_lead.name);
        self.repository.create(session, new_lead).await
    }

    async fn update_lead(&self, session: &SessionContext, update: LeadUpdate) -> Result<Lead> {
        update.validate()?;
        self.repository.update(session, update).await
    }

    async fn delete_lead(&self, session: &SessionContext, lead_id: &str) -> Result<()> {
        self.repository.delete(session, lead_id).await
    }

    async fn move_lead(
        &self,
        session: &SessionContext,
        board: &mut LeadBoard,
        lead_id: &str,
        to: LeadStatus,
    ) -> Result<PendingMove> {
        let pending = board.begin_move(lead_id, to)?;
        match self.repository.update_status(session, lead_id, to).await {
            Ok(()) => Ok(pending.commit()),
            Err(err) => {
                warn!(
                    "persisting move of lead '{}' failed, rolling back: {}",
                    lead_id, err
                );
                board.rollback(pending);
                Err(err)
            }
        }
    }
}
