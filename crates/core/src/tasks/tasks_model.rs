use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    pub due_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub id: Option<String>,
    pub title: String,
    pub due_date: Option<NaiveDate>,
}

impl NewTask {
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingField("title".to_string()).into());
        }
        Ok(())
    }
}
