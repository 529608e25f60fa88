//! Domain errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("End date must be after start date")]
    EndDateNotAfterStart,

    #[error("Valid rent amount is required")]
    InvalidRentAmount,

    #[error("Amendment reason is required")]
    MissingAmendmentReason,

    #[error("Lease is not in a sendable state: {0}")]
    NotSendable(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(errors: validator::ValidationErrors) -> Self {
        DomainError::Validation(errors.to_string())
    }
}
