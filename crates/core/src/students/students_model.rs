use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// Domain model for a mentee enrolled in the coaching program.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    pub name: String,
    pub occupation: Option<String>,
    /// Date the program began. Immutable once set.
    pub start_date: NaiveDate,
    /// Manual override: a student marked paid in full never reports debt.
    #[serde(default)]
    pub paid_in_full: bool,
    /// Legacy lifetime totals kept for display. Derived billing status
    /// ignores them entirely.
    #[serde(default)]
    pub amount_paid: Decimal,
    #[serde(default)]
    pub amount_owed: Decimal,
    /// Write-through cache of the last extend-cycle payment date + 30 days.
    /// Status derivation always recomputes; this field only serves readers
    /// of the raw table.
    pub next_billing_date: Option<NaiveDate>,
    #[serde(default)]
    pub payments: Vec<Payment>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One recorded payment. Immutable once stored: there is no edit or delete
/// surface, so history stays intact for audit display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: String,
    pub student_id: String,
    pub amount: Decimal,
    /// Time of day is kept for display and ordering only; cycle math uses
    /// the date part.
    pub payment_date: NaiveDateTime,
    pub note: Option<String>,
}

impl Payment {
    /// Rows with a non-positive amount stay in history but never count
    /// toward billing or revenue.
    pub fn is_valid(&self) -> bool {
        self.amount > Decimal::ZERO
    }
}

/// Input model for enrolling a student.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewStudent {
    pub id: Option<String>,
    pub name: String,
    pub occupation: Option<String>,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub paid_in_full: bool,
    #[serde(default)]
    pub amount_paid: Decimal,
    #[serde(default)]
    pub amount_owed: Decimal,
}

impl NewStudent {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()).into());
        }
        Ok(())
    }
}

/// Input model for editing a student. `start_date` is deliberately absent:
/// the program start is immutable once set.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct StudentUpdate {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_in_full: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_paid: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_owed: Option<Decimal>,
}

impl StudentUpdate {
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

/// Input model for recording a payment.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewPayment {
    pub id: Option<String>,
    pub amount: Decimal,
    pub payment_date: NaiveDateTime,
    pub note: Option<String>,
}

impl NewPayment {
    /// Validated against the caller's clock so the check stays pure.
    pub fn validate(&self, as_of: NaiveDate) -> Result<()> {
        if self.amount <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveAmount(self.amount.to_string()).into());
        }
        if self.payment_date.date() > as_of {
            return Err(ValidationError::FutureDate(self.payment_date.to_string()).into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn new_student_requires_name() {
        let new_student = NewStudent {
            id: None,
            name: "   ".to_string(),
            occupation: None,
            start_date: date(2024, 1, 10),
            paid_in_full: false,
            amount_paid: Decimal::ZERO,
            amount_owed: Decimal::ZERO,
        };
        assert!(matches!(
            new_student.validate(),
            Err(Error::Validation(ValidationError::MissingField(_)))
        ));
    }

    #[test]
    fn payment_rejects_non_positive_amount() {
        let payment = NewPayment {
            id: None,
            amount: dec!(0),
            payment_date: date(2024, 2, 1).and_hms_opt(10, 0, 0).unwrap(),
            note: None,
        };
        assert!(matches!(
            payment.validate(date(2024, 2, 2)),
            Err(Error::Validation(ValidationError::NonPositiveAmount(_)))
        ));
    }

    #[test]
    fn payment_rejects_future_date() {
        let payment = NewPayment {
            id: None,
            amount: dec!(500),
            payment_date: date(2024, 3, 1).and_hms_opt(9, 0, 0).unwrap(),
            note: None,
        };
        assert!(matches!(
            payment.validate(date(2024, 2, 28)),
            Err(Error::Validation(ValidationError::FutureDate(_)))
        ));
        // Same day with a later time of day is still fine: cycle math is
        // day-granular.
        assert!(payment.validate(date(2024, 3, 1)).is_ok());
    }

    #[test]
    fn non_positive_payment_is_not_valid() {
        let refund = Payment {
            id: "p1".to_string(),
            student_id: "s1".to_string(),
            amount: dec!(-100),
            payment_date: date(2024, 2, 1).and_hms_opt(0, 0, 0).unwrap(),
            note: Some("refund".to_string()),
        };
        assert!(!refund.is_valid());
    }
}
