use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Length of one billing cycle in days.
pub const BILLING_CYCLE_DAYS: i64 = 30;

/// A student is flagged "due soon" when the due date is at most this close.
pub const DUE_SOON_THRESHOLD_DAYS: i64 = 5;

/// Default unit price of a monthly community subscription.
pub const COMMUNITY_MONTHLY_PRICE: Decimal = dec!(59);

/// Denominator used when no monthly goal is configured.
pub const GOAL_FALLBACK: Decimal = Decimal::ONE;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Upper bound for uploaded PDF size in bytes.
pub const MAX_PDF_BYTES: usize = 10 * 1024 * 1024;
