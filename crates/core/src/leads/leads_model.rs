use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// Pipeline column a lead sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeadStatus {
    New,
    Contacted,
    Qualified,
    Proposal,
    Won,
    Lost,
}

impl LeadStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, LeadStatus::Won | LeadStatus::Lost)
    }

    /// Board column order, left to right.
    pub const ALL: [LeadStatus; 6] = [
        LeadStatus::New,
        LeadStatus::Contacted,
        LeadStatus::Qualified,
        LeadStatus::Proposal,
        LeadStatus::Won,
        LeadStatus::Lost,
    ];
}

impl Default for LeadStatus {
    fn default() -> Self {
        LeadStatus::New
    }
}

/// Domain model for a sales lead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub company: Option<String>,
    pub contact: Option<String>,
    pub status: LeadStatus,
    /// Estimated deal value, when known.
    pub value: Option<Decimal>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input model for creating a lead.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewLead {
    pub id: Option<String>,
    pub name: String,
    pub company: Option<String>,
    pub contact: Option<String>,
    #[serde(default)]
    pub status: LeadStatus,
    pub value: Option<Decimal>,
    pub notes: Option<String>,
}

impl NewLead {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()).into());
        }
        Ok(())
    }
}

/// Input model for editing a lead.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LeadUpdate {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<LeadStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl LeadUpdate {
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::MissingField("id".to_string()).into());
        }
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(ValidationError::MissingField("name".to_string()).into());
            }
        }
        Ok(())
    }
}
