use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: Option<String>,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewNote {
    pub id: Option<String>,
    pub title: Option<String>,
    pub body: String,
}

impl NewNote {
    pub fn validate(&self) -> Result<()> {
        if self.body.trim().is_empty() {
            return Err(ValidationError::MissingField("body".to_string()).into());
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NoteUpdate {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl NoteUpdate {
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::MissingField("id".to_string()).into());
        }
        if let Some(body) = &self.body {
            if body.trim().is_empty() {
                return Err(ValidationError::MissingField("body".to_string()).into());
            }
        }
        Ok(())
    }
}
