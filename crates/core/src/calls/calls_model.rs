use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// A scheduled coaching or sales call, optionally tied to a student.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Call {
    pub id: String,
    pub student_id: Option<String>,
    pub topic: String,
    pub scheduled_at: DateTime<Utc>,
    #[serde(default)]
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewCall {
    pub id: Option<String>,
    pub student_id: Option<String>,
    pub topic: String,
    pub scheduled_at: DateTime<Utc>,
}

impl NewCall {
    pub fn validate(&self) -> Result<()> {
        if self.topic.trim().is_empty() {
            return Err(ValidationError::MissingField("topic".to_string()).into());
        }
        Ok(())
    }
}
