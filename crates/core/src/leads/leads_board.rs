//! In-memory board state with optimistic move semantics.
//!
//! A drag on the pipeline applies the status change to local state first
//! and persists afterwards. Each tentative operation is an explicit state
//! machine: `Pending -> Committed | RolledBack`. The pre-move snapshot
//! lives only inside the `PendingMove` for the duration of the in-flight
//! request; commit drops it, rollback writes it back.

use serde::Serialize;

use super::leads_model::{Lead, LeadStatus};
use crate::errors::{Result, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MoveState {
    Pending,
    Committed,
    RolledBack,
}

/// One tentative status transition, holding the pre-move snapshot until it
/// resolves.
#[derive(Debug)]
pub struct PendingMove {
    previous: Lead,
    to: LeadStatus,
    state: MoveState,
}

impl PendingMove {
    pub fn lead_id(&self) -> &str {
        &self.previous.id
    }

    pub fn from(&self) -> LeadStatus {
        self.previous.status
    }

    pub fn to(&self) -> LeadStatus {
        self.to
    }

    pub fn state(&self) -> MoveState {
        self.state
    }

    /// Marks the persisted transition as final and drops the snapshot.
    pub fn commit(mut self) -> PendingMove {
        self.state = MoveState::Committed;
        self
    }
}

/// Local view state of the lead pipeline.
pub struct LeadBoard {
    leads: Vec<Lead>,
}

impl LeadBoard {
    pub fn new(leads: Vec<Lead>) -> Self {
        LeadBoard { leads }
    }

    pub fn leads(&self) -> &[Lead] {
        &self.leads
    }

    pub fn column(&self, status: LeadStatus) -> Vec<&Lead> {
        self.leads.iter().filter(|l| l.status == status).collect()
    }

    /// Applies a tentative move to local state and returns the pending
    /// operation carrying the pre-move snapshot.
    pub fn begin_move(&mut self, lead_id: &str, to: LeadStatus) -> Result<PendingMove> {
        let lead = self
            .leads
            .iter_mut()
            .find(|l| l.id == lead_id)
            .ok_or_else(|| {
                ValidationError::InvalidInput(format!("unknown lead '{}'", lead_id))
            })?;
        if lead.status == to {
            return Err(ValidationError::InvalidInput(format!(
                "lead '{}' is already in that column",
                lead_id
            ))
            .into());
        }
        let previous = lead.clone();
        lead.status = to;
        Ok(PendingMove {
            previous,
            to,
            state: MoveState::Pending,
        })
    }

    /// Restores the pre-move snapshot after a failed persistence call.
    pub fn rollback(&mut self, mut pending: PendingMove) -> PendingMove {
        if let Some(lead) = self.leads.iter_mut().find(|l| l.id == pending.previous.id) {
            *lead = pending.previous.clone();
        }
        pending.state = MoveState::RolledBack;
        pending
    }
}
