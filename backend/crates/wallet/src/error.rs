//! Wallet Error Types
//!
//! This module provides wallet-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.
//!
//! Store-level failures are translated here into a stable taxonomy; raw
//! detail (constraint names, SQL) stays in the logs and never reaches
//! external callers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Wallet-specific result type alias
pub type WalletResult<T> = Result<T, WalletError>;

/// Wallet-specific error variants
#[derive(Debug, Error)]
pub enum WalletError {
    /// Customer does not exist
    #[error("Customer does not exist")]
    CustomerNotFound,

    /// No account exists for the customer
    #[error("Account not found")]
    AccountNotFound,

    /// A customer with this customer id already exists
    #[error("Customer with customerId: {0} exists")]
    DuplicateCustomerId(String),

    /// A customer with this email already exists
    #[error("Customer with email: {0} exists")]
    DuplicateEmail(String),

    /// Generated account number lost a race against a concurrent insert
    #[error("Account number already exists")]
    DuplicateAccountNo(String),

    /// PIN mismatch. The message never says which of customer id or PIN
    /// was wrong.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Request-level validation failure (bad value object input)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl WalletError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            WalletError::CustomerNotFound | WalletError::AccountNotFound => StatusCode::NOT_FOUND,
            WalletError::DuplicateCustomerId(_)
            | WalletError::DuplicateEmail(_)
            | WalletError::DuplicateAccountNo(_) => StatusCode::CONFLICT,
            WalletError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            WalletError::Validation(_) => StatusCode::BAD_REQUEST,
            WalletError::Database(e) => {
                StatusCode::from_u16(database_kind(e).status_code())
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            WalletError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            WalletError::CustomerNotFound | WalletError::AccountNotFound => ErrorKind::NotFound,
            WalletError::DuplicateCustomerId(_)
            | WalletError::DuplicateEmail(_)
            | WalletError::DuplicateAccountNo(_) => ErrorKind::Conflict,
            WalletError::InvalidCredentials => ErrorKind::Unauthorized,
            WalletError::Validation(_) => ErrorKind::BadRequest,
            WalletError::Database(e) => database_kind(e),
            WalletError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let message = match self {
            // Store detail stays server-side
            WalletError::Database(_) => "Database error".to_string(),
            other => other.to_string(),
        };
        AppError::new(self.kind(), message)
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            WalletError::Database(e) => {
                tracing::error!(error = %e, "Wallet database error");
            }
            WalletError::Internal(msg) => {
                tracing::error!(message = %msg, "Wallet internal error");
            }
            WalletError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            WalletError::DuplicateAccountNo(account_no) => {
                tracing::warn!(account_no = %account_no, "Account number collision at insert");
            }
            _ => {
                tracing::debug!(error = %self, "Wallet error");
            }
        }
    }
}

/// Classify a store failure: transient unavailability vs everything else
fn database_kind(err: &sqlx::Error) -> ErrorKind {
    match err {
        sqlx::Error::PoolTimedOut | sqlx::Error::Io(_) | sqlx::Error::PoolClosed => {
            ErrorKind::ServiceUnavailable
        }
        _ => ErrorKind::InternalServerError,
    }
}

impl IntoResponse for WalletError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for WalletError {
    fn from(err: AppError) -> Self {
        if err.is_client_error() {
            WalletError::Validation(err.message().to_string())
        } else {
            WalletError::Internal(err.to_string())
        }
    }
}
