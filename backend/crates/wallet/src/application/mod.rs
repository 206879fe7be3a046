//! Application Layer
//!
//! Use cases and application services.

pub mod account_number;
pub mod config;
pub mod create_customer;
pub mod delete_customer;
pub mod list_customers;
pub mod login;
pub mod transaction_lookup;

// Re-exports
pub use account_number::generate_account_no;
pub use config::WalletConfig;
pub use create_customer::{CreateCustomerInput, CreateCustomerOutput, CreateCustomerUseCase};
pub use delete_customer::DeleteCustomerUseCase;
pub use list_customers::ListCustomersUseCase;
pub use login::{LoginInput, LoginUseCase, Profile};
pub use transaction_lookup::TransactionLookupUseCase;
