//! Wallet Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Customer provisioning with a dedicated account per customer
//! - PIN-based login returning the customer profile
//! - Collision-checked account number generation (`ACC` + 10 hex chars)
//! - Transaction lookup by customer, by transaction id, and mini statements
//!
//! ## Security Model
//! - PINs hashed with Argon2id; verification on login uses the stored
//!   hash, never a plaintext comparison
//! - Credential material is redacted from every response and log line
//! - Uniqueness of customer id, email, and account number is enforced
//!   at the store level

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::WalletConfig;
pub use error::{WalletError, WalletResult};
pub use infra::memory::InMemoryWalletRepository;
pub use infra::postgres::PgWalletRepository;
pub use presentation::router::{wallet_router, wallet_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::memory::InMemoryWalletRepository;
    pub use crate::infra::postgres::PgWalletRepository as WalletStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}
