//! Customer Id Value Object
//!
//! The customer id is the caller-supplied business identifier of a
//! customer. It is distinct from the internal row UUID and is the key
//! used for login and account lookups.
//!
//! ## Invariants
//! - 1 to 32 characters after trimming
//! - ASCII letters, digits, `-` and `_` only (no whitespace)

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum customer id length (in characters)
pub const CUSTOMER_ID_MAX_LENGTH: usize = 32;

/// Customer business identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerId(String);

impl CustomerId {
    /// Create a new customer id with validation
    pub fn new(raw: impl Into<String>) -> AppResult<Self> {
        let id = raw.into().trim().to_string();

        if id.is_empty() {
            return Err(AppError::bad_request("Customer id cannot be empty"));
        }

        if id.len() > CUSTOMER_ID_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Customer id must be at most {} characters",
                CUSTOMER_ID_MAX_LENGTH
            )));
        }

        if !id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(AppError::bad_request(
                "Customer id may contain only letters, digits, '-' and '_'",
            ));
        }

        Ok(Self(id))
    }

    /// Create from a store value (assumed already validated)
    pub fn from_db(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CustomerId {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        CustomerId::new(s)
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for CustomerId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
