use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A PDF attached to a student: contract, invoice, worksheet. The blob
/// lives in the backend's storage bucket; only the public URL is kept
/// here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StudentDocument {
    pub id: String,
    pub student_id: String,
    pub file_name: String,
    pub url: String,
    pub uploaded_at: DateTime<Utc>,
}
