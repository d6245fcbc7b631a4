//! Error Types

use thiserror::Error;

/// Result type alias for catalog lookups
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Plan id not present in the catalog
    #[error("Unknown plan: {0}")]
    UnknownPlan(String),

    /// Billing cycle other than monthly/yearly
    #[error("Unknown billing cycle: {0}")]
    UnknownBillingCycle(String),
}
