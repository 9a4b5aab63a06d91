// Admin table models
//
// The admin pages keep their rows in these models and only render them.
// Every mutation is a plain method so it can be checked without a browser.
use thiserror::Error;

pub mod payments;
pub mod plans;
pub mod users;

pub use payments::{seed_payments, DateRange, PaymentFilter, PaymentLedger, PaymentStats};
pub use plans::{seed_plans, NewPlan, PlanTable};
pub use users::{seed_users, UserDirectory, UserFilter};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdminError {
    #[error("no record with id {0}")]
    NotFound(String),
    #[error("plan name is required")]
    EmptyPlanName,
    #[error("only successful payments can be refunded (payment {0})")]
    NotRefundable(String),
}
