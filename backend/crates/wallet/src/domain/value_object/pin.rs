//! Customer PIN Value Objects
//!
//! Domain wrappers over `platform::pin`. Two representations exist and
//! they never mix:
//! - [`RawPin`] - cleartext from a request, zeroized on drop, only valid
//!   transiently during provisioning or login.
//! - [`CustomerPin`] - the stored Argon2id hash. This is the only form
//!   that is ever persisted, and verification (not equality) is the
//!   comparison contract on both the provisioning and login paths.

use kernel::error::app_error::{AppError, AppResult};
use platform::pin::{ClearTextPin, HashedPin, PinPolicyError};
use std::fmt;

// ============================================================================
// Raw PIN (request input)
// ============================================================================

/// Cleartext PIN from a request
///
/// Memory is zeroized when dropped. `Debug` output is redacted.
pub struct RawPin(ClearTextPin);

impl RawPin {
    /// Create a new raw PIN with validation (4-8 ASCII digits after NFKC)
    pub fn new(raw: String) -> AppResult<Self> {
        let clear_text = ClearTextPin::new(raw).map_err(|e| match e {
            PinPolicyError::Empty => {
                AppError::bad_request("PIN cannot be empty").with_action("Please enter a PIN")
            }
            PinPolicyError::NonDigit => AppError::bad_request("PIN must contain only digits")
                .with_action("Use digits 0-9 only"),
            PinPolicyError::TooShort { min, actual } => AppError::bad_request(format!(
                "PIN must be at least {} digits (got {})",
                min, actual
            )),
            PinPolicyError::TooLong { max, actual } => AppError::bad_request(format!(
                "PIN must be at most {} digits (got {})",
                max, actual
            )),
        })?;

        Ok(Self(clear_text))
    }

    pub(crate) fn inner(&self) -> &ClearTextPin {
        &self.0
    }
}

impl fmt::Debug for RawPin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPin").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// Customer PIN (stored hash)
// ============================================================================

/// Stored customer PIN (Argon2id PHC string)
#[derive(Clone, PartialEq, Eq)]
pub struct CustomerPin(HashedPin);

impl CustomerPin {
    /// Hash a raw PIN for storage
    pub fn from_raw(raw: &RawPin, pepper: Option<&[u8]>) -> AppResult<Self> {
        let hashed = raw
            .inner()
            .hash(pepper)
            .map_err(|e| AppError::internal("PIN hashing failed").with_source(e))?;
        Ok(Self(hashed))
    }

    /// Rehydrate from a stored PHC string
    pub fn from_phc_string(s: impl Into<String>) -> AppResult<Self> {
        let hashed = HashedPin::from_phc_string(s)
            .map_err(|e| AppError::internal("Stored PIN hash is malformed").with_source(e))?;
        Ok(Self(hashed))
    }

    /// Verify a raw PIN against this hash (constant-time)
    pub fn verify(&self, raw: &RawPin, pepper: Option<&[u8]>) -> bool {
        self.0.verify(raw.inner(), pepper)
    }

    /// PHC string for storage
    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }
}

impl fmt::Debug for CustomerPin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CustomerPin").field(&"[HASH]").finish()
    }
}
