// src/application/error.rs
use crate::domain::{errors::DomainError, workflow::TransitionError};
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation error on {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn validation(field: &'static str, msg: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: msg.into(),
        }
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }

    /// The transition failure carried by this error, if any.
    pub const fn transition(&self) -> Option<&TransitionError> {
        match self {
            Self::Domain(DomainError::InvalidTransition(err)) => Some(err),
            _ => None,
        }
    }

    /// Field name for validation failures raised at either layer.
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::Validation { field, .. } | Self::Domain(DomainError::Validation { field, .. }) => {
                Some(field)
            }
            _ => None,
        }
    }
}

impl From<TransitionError> for ApplicationError {
    fn from(err: TransitionError) -> Self {
        Self::Domain(DomainError::InvalidTransition(err))
    }
}
