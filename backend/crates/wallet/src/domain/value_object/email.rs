//! Email Value Object
//!
//! Represents a validated, lowercased email address. Email is a unique
//! key for customers, so normalization happens here, once, before
//! anything is compared or stored.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum email length (per RFC 5321)
const EMAIL_MAX_LENGTH: usize = 254;

/// Maximum length of the local part
const LOCAL_PART_MAX_LENGTH: usize = 64;

/// Email address value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    /// Create a new email with validation
    ///
    /// Input is trimmed and lowercased before validation; two addresses
    /// differing only in case are the same customer key.
    pub fn new(email: impl Into<String>) -> AppResult<Self> {
        let email = email.into().trim().to_lowercase();

        if email.is_empty() {
            return Err(AppError::bad_request("Email cannot be empty"));
        }

        if email.len() > EMAIL_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Email must be at most {} characters",
                EMAIL_MAX_LENGTH
            )));
        }

        Self::check_format(&email)?;

        Ok(Self(email))
    }

    /// Structural format check (local@domain, sane domain)
    fn check_format(email: &str) -> AppResult<()> {
        let invalid = || AppError::bad_request("Invalid email format");

        let (local, domain) = email.split_once('@').ok_or_else(invalid)?;

        if local.is_empty() || local.len() > LOCAL_PART_MAX_LENGTH {
            return Err(invalid());
        }
        // A second '@' would end up in the domain part
        if domain.is_empty() || domain.contains('@') || !domain.contains('.') {
            return Err(invalid());
        }
        if !domain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
        {
            return Err(invalid());
        }
        if domain.starts_with(['.', '-']) || domain.ends_with(['.', '-']) {
            return Err(invalid());
        }

        Ok(())
    }

    /// Create from a store value (assumed already validated)
    pub fn from_db(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    /// Get the email as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Email {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        Email::new(s)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
