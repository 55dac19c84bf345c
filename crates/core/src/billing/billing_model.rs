use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Derived billing-cycle status for one student.
///
/// Every surface that asks "is this student current on payments" — card
/// badge, detail panel, KPI aggregation, stagnant-account flag, assistant
/// snapshot — reads this struct, produced by the one calculator in
/// `billing_calculator`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingStatus {
    /// 1-based month of the program the student is currently in.
    pub current_program_month: i32,
    /// Count of payments with a positive amount.
    pub payments_count: i32,
    /// Program months accrued but not yet covered by a payment. Can be
    /// positive inside a still-open 30-day window; `is_overdue` alone
    /// decides lateness.
    pub months_owed: i32,
    pub is_overdue: bool,
    /// Not overdue yet, but the due date is inside the urgency window.
    pub is_due_soon: bool,
    pub due_date: NaiveDate,
    /// Whole days until the due date. Negative once it has passed.
    pub days_until_due: i64,
}
