//! Billing-cycle derivation.
//!
//! One canonical algorithm: the due date is a rolling 30-day window
//! anchored to the latest valid payment, or to the program start when no
//! payment exists. A calendar-month rollover alone never resets a student
//! to current. The calculation is pure; the persisted
//! `next_billing_date` cache on the student row is never read here.

use chrono::{Duration, NaiveDate};

use super::billing_model::BillingStatus;
use crate::constants::{BILLING_CYCLE_DAYS, DUE_SOON_THRESHOLD_DAYS};
use crate::students::students_model::{Payment, Student};
use crate::utils::time_utils::months_elapsed;

/// Due date that results from a payment made on `payment_date`.
pub fn next_billing_date(payment_date: NaiveDate) -> NaiveDate {
    payment_date + Duration::days(BILLING_CYCLE_DAYS)
}

/// Derives the billing status of a student as of a given day.
///
/// Payments with a non-positive amount are ignored for counting and for
/// anchoring the window, but the caller's payment list is left untouched —
/// history stays intact. Dates are compared at day granularity; a student
/// is not overdue on the due date itself, only strictly after it.
pub fn compute_billing_status(
    start_date: NaiveDate,
    payments: &[Payment],
    paid_in_full: bool,
    as_of: NaiveDate,
) -> BillingStatus {
    let payments_count = payments.iter().filter(|p| p.is_valid()).count() as i32;
    let anchor = payments
        .iter()
        .filter(|p| p.is_valid())
        .map(|p| p.payment_date.date())
        .max();

    let due_date = next_billing_date(anchor.unwrap_or(start_date));
    let days_until_due = (due_date - as_of).num_days();

    let current_program_month = months_elapsed(start_date, as_of) + 1;
    let is_overdue = !paid_in_full && as_of > due_date;
    let months_owed = if paid_in_full {
        0
    } else {
        (current_program_month - payments_count).max(0)
    };
    let is_due_soon = !paid_in_full && !is_overdue && days_until_due <= DUE_SOON_THRESHOLD_DAYS;

    BillingStatus {
        current_program_month,
        payments_count,
        months_owed,
        is_overdue,
        is_due_soon,
        due_date,
        days_until_due,
    }
}

/// Convenience wrapper over [`compute_billing_status`] for a loaded student.
pub fn billing_status(student: &Student, as_of: NaiveDate) -> BillingStatus {
    compute_billing_status(
        student.start_date,
        &student.payments,
        student.paid_in_full,
        as_of,
    )
}
