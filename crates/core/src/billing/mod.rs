// Module declarations
pub mod billing_calculator;
pub mod billing_model;


// Re-export the public interface
pub use billing_calculator::{billing_status, compute_billing_status, next_billing_date};
pub use billing_model::BillingStatus;
