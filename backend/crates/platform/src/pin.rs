//! PIN Hashing and Verification
//!
//! Wallet PINs are short numeric secrets, so the hashing side matters
//! even more than for passwords:
//! - Argon2id hashing (memory-hard, recommended by OWASP)
//! - Zeroization of the cleartext PIN
//! - Constant-time verification
//! - Pepper support for an additional application-wide secret
//!
//! Verification, not equality, is the comparison contract: hashing the
//! same PIN twice yields different PHC strings (random salt).

use std::fmt;

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use rand::rngs::OsRng;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop};

// ============================================================================
// Constants
// ============================================================================

/// Minimum PIN length in digits
pub const MIN_PIN_LENGTH: usize = 4;

/// Maximum PIN length in digits
pub const MAX_PIN_LENGTH: usize = 8;

// ============================================================================
// Error Types
// ============================================================================

/// PIN policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PinPolicyError {
    /// PIN is too short
    #[error("PIN must be at least {min} digits (got {actual})")]
    TooShort { min: usize, actual: usize },

    /// PIN is too long
    #[error("PIN must be at most {max} digits (got {actual})")]
    TooLong { max: usize, actual: usize },

    /// PIN is empty
    #[error("PIN cannot be empty")]
    Empty,

    /// PIN contains a non-digit character
    #[error("PIN must contain only digits 0-9")]
    NonDigit,
}

/// PIN hashing/verification errors
#[derive(Debug, Error)]
pub enum PinHashError {
    /// Hashing operation failed
    #[error("PIN hashing failed: {0}")]
    HashingFailed(String),

    /// Invalid hash format
    #[error("Invalid PIN hash format")]
    InvalidHashFormat,
}

// ============================================================================
// Clear Text PIN (Zeroized on drop)
// ============================================================================

/// Clear text PIN with automatic memory zeroization
///
/// Ensures the PIN is erased from memory when the value is dropped.
/// Does not implement `Clone`; `Debug` output is redacted.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPin(String);

impl ClearTextPin {
    /// Create a new clear text PIN with validation
    ///
    /// The input is NFKC-normalized first (fullwidth digits become ASCII),
    /// then checked: 4-8 characters, all ASCII digits.
    pub fn new(raw: String) -> Result<Self, PinPolicyError> {
        let normalized: String = raw.nfkc().collect();

        if normalized.is_empty() {
            return Err(PinPolicyError::Empty);
        }

        if normalized.chars().any(|c| !c.is_ascii_digit()) {
            return Err(PinPolicyError::NonDigit);
        }

        let len = normalized.len();
        if len < MIN_PIN_LENGTH {
            return Err(PinPolicyError::TooShort {
                min: MIN_PIN_LENGTH,
                actual: len,
            });
        }
        if len > MAX_PIN_LENGTH {
            return Err(PinPolicyError::TooLong {
                max: MAX_PIN_LENGTH,
                actual: len,
            });
        }

        Ok(Self(normalized))
    }

    /// Get the PIN as bytes for hashing
    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Hash the PIN using Argon2id
    ///
    /// ## Arguments
    /// * `pepper` - Optional application-wide secret appended before hashing
    ///
    /// ## Returns
    /// PHC-formatted hash string wrapped in [`HashedPin`]
    pub fn hash(&self, pepper: Option<&[u8]>) -> Result<HashedPin, PinHashError> {
        let pin_bytes = match pepper {
            Some(p) => {
                let mut combined = self.as_bytes().to_vec();
                combined.extend_from_slice(p);
                combined
            }
            None => self.as_bytes().to_vec(),
        };

        // Random salt (128 bits = 16 bytes)
        let salt = SaltString::generate(OsRng);

        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(&pin_bytes, &salt)
            .map_err(|e| PinHashError::HashingFailed(e.to_string()))?;

        Ok(HashedPin {
            hash: hash.to_string(),
        })
    }
}

impl fmt::Debug for ClearTextPin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPin").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// Hashed PIN (Safe to store)
// ============================================================================

/// Hashed PIN in PHC string format
///
/// Stores the Argon2id hash in PHC format (algorithm, version, parameters,
/// salt, and hash). This is the only representation that is ever persisted.
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPin {
    hash: String,
}

impl HashedPin {
    /// Create from a PHC string (e.g., from the store)
    pub fn from_phc_string(s: impl Into<String>) -> Result<Self, PinHashError> {
        let hash = s.into();

        // Validate it's a valid PHC string
        PasswordHash::new(&hash).map_err(|_| PinHashError::InvalidHashFormat)?;

        Ok(Self { hash })
    }

    /// Get the PHC string for storage
    pub fn as_phc_string(&self) -> &str {
        &self.hash
    }

    /// Verify a PIN against this hash
    ///
    /// ## Arguments
    /// * `pin` - The clear text PIN to verify
    /// * `pepper` - Optional pepper (must match the one used during hashing)
    pub fn verify(&self, pin: &ClearTextPin, pepper: Option<&[u8]>) -> bool {
        let pin_bytes = match pepper {
            Some(p) => {
                let mut combined = pin.as_bytes().to_vec();
                combined.extend_from_slice(p);
                combined
            }
            None => pin.as_bytes().to_vec(),
        };

        let parsed_hash = match PasswordHash::new(&self.hash) {
            Ok(h) => h,
            Err(_) => return false,
        };

        let argon2 = Argon2::default();

        // Argon2 uses constant-time comparison internally
        argon2.verify_password(&pin_bytes, &parsed_hash).is_ok()
    }
}

impl fmt::Debug for HashedPin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPin").field("hash", &"[HASH]").finish()
    }
}
