//! Account Number Value Object
//!
//! Account numbers are system-generated business identifiers with the
//! fixed shape `ACC` followed by 10 lowercase hex characters. Candidates
//! come from 128 bits of secure randomness truncated to 10 hex digits;
//! uniqueness against the store is the caller's responsibility (see
//! `application::account_number`).

use kernel::error::app_error::{AppError, AppResult};
use platform::crypto;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Literal prefix of every account number
pub const ACCOUNT_NO_PREFIX: &str = "ACC";

/// Number of hex characters after the prefix
pub const ACCOUNT_NO_HEX_LENGTH: usize = 10;

/// Account number value object (`^ACC[0-9a-f]{10}$`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountNo(String);

impl AccountNo {
    /// Create an account number with format validation
    pub fn new(raw: impl Into<String>) -> AppResult<Self> {
        let value = raw.into();

        let Some(hex) = value.strip_prefix(ACCOUNT_NO_PREFIX) else {
            return Err(AppError::bad_request("Account number must start with ACC"));
        };

        if hex.len() != ACCOUNT_NO_HEX_LENGTH
            || !hex
                .chars()
                .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase())
        {
            return Err(AppError::bad_request(format!(
                "Account number must be ACC followed by {} lowercase hex characters",
                ACCOUNT_NO_HEX_LENGTH
            )));
        }

        Ok(Self(value))
    }

    /// Generate a random candidate account number
    ///
    /// 128 random bits rendered as lowercase hex, truncated to the first
    /// 10 characters and prefixed with `ACC`. The caller must check the
    /// candidate against the store before using it.
    pub fn generate() -> Self {
        let entropy = crypto::to_hex_lower(&crypto::random_bytes(16));
        Self(format!(
            "{}{}",
            ACCOUNT_NO_PREFIX,
            &entropy[..ACCOUNT_NO_HEX_LENGTH]
        ))
    }

    /// Create from a store value (assumed already validated)
    pub fn from_db(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the account number as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for AccountNo {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        AccountNo::new(s)
    }
}

impl fmt::Display for AccountNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for AccountNo {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
