//! Domain Layer
//!
//! Contains entities, value objects, and repository traits.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::{account::Account, customer::Customer, transaction::Transaction};
pub use repository::{AccountRepository, CustomerRepository, TransactionRepository};
