use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// A community member on the annual plan. Independent of students; the
/// join timestamp is what attributes the payment to a month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnnualMember {
    pub id: String,
    pub name: String,
    pub amount_paid: Decimal,
    /// Treated as the join/payment date for monthly attribution.
    pub joined_at: DateTime<Utc>,
    /// Informational acquisition tag ("twitter", "referral", ...).
    pub source: Option<String>,
}

/// Input model for adding an annual member.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewAnnualMember {
    pub id: Option<String>,
    pub name: String,
    pub amount_paid: Decimal,
    pub joined_at: Option<DateTime<Utc>>,
    pub source: Option<String>,
}

impl NewAnnualMember {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()).into());
        }
        if self.amount_paid <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveAmount(self.amount_paid.to_string()).into());
        }
        Ok(())
    }
}
