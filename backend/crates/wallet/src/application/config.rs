//! Application Configuration
//!
//! Configuration for the Wallet application layer.

/// Wallet application configuration
#[derive(Debug, Clone, Default)]
pub struct WalletConfig {
    /// PIN pepper (optional, application-wide secret mixed into hashes)
    pub pin_pepper: Option<Vec<u8>>,
}

impl WalletConfig {
    /// Create config for development (no pepper)
    pub fn development() -> Self {
        Self::default()
    }

    /// Create config with a pepper
    pub fn with_pepper(pepper: Vec<u8>) -> Self {
        Self {
            pin_pepper: Some(pepper),
        }
    }

    /// Get the PIN pepper as a slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.pin_pepper.as_deref()
    }
}
