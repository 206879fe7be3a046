//! Repository Traits
//!
//! Store contracts for the three wallet tables. Implementations live in
//! the infrastructure layer. Each query function documents its predicate
//! and ordering; nothing here is derived from method names by magic.
//!
//! Uniqueness of `customer_id`, `email` and `account_no` is enforced by
//! the implementations at the write layer; the `exists_*` checks are a
//! fast path, not the guarantee.

use crate::domain::entity::{
    account::Account,
    customer::Customer,
    transaction::{NewTransaction, Transaction},
};
use crate::domain::value_object::{
    account_no::AccountNo, customer_id::CustomerId, email::Email,
};
use crate::error::WalletResult;

/// Customer store (identity) trait
#[trait_variant::make(CustomerRepository: Send)]
pub trait LocalCustomerRepository {
    /// Insert a new customer. Fails with a duplicate conflict if the
    /// `customer_id` or `email` is already taken.
    async fn create(&self, customer: &Customer) -> WalletResult<()>;

    /// Point lookup by business identifier
    async fn find_by_customer_id(&self, customer_id: &CustomerId)
    -> WalletResult<Option<Customer>>;

    /// Point lookup by email
    async fn find_by_email(&self, email: &Email) -> WalletResult<Option<Customer>>;

    /// Existence check by business identifier
    async fn exists_by_customer_id(&self, customer_id: &CustomerId) -> WalletResult<bool>;

    /// Existence check by email
    async fn exists_by_email(&self, email: &Email) -> WalletResult<bool>;

    /// Full scan, store-natural order
    async fn find_all(&self) -> WalletResult<Vec<Customer>>;

    /// Customers whose email contains `fragment` (case-sensitive substring)
    async fn search_by_email_fragment(&self, fragment: &str) -> WalletResult<Vec<Customer>>;

    /// Update a customer's first name; returns the number of rows touched
    async fn update_first_name(
        &self,
        customer_id: &CustomerId,
        first_name: &str,
    ) -> WalletResult<u64>;

    /// Delete by business identifier; returns the number of rows removed
    async fn delete_by_customer_id(&self, customer_id: &CustomerId) -> WalletResult<u64>;
}

/// Account store trait
#[trait_variant::make(AccountRepository: Send)]
pub trait LocalAccountRepository {
    /// Insert a new account. Fails with a duplicate conflict if the
    /// `account_no` is already taken.
    async fn create(&self, account: &Account) -> WalletResult<()>;

    /// The account owned by a customer
    async fn find_by_customer_id(&self, customer_id: &CustomerId) -> WalletResult<Option<Account>>;

    /// Existence check by account number (used by the generation loop)
    async fn exists_by_account_no(&self, account_no: &AccountNo) -> WalletResult<bool>;
}

/// Transaction store trait
#[trait_variant::make(TransactionRepository: Send)]
pub trait LocalTransactionRepository {
    /// Append a transaction; the store assigns the ordering key
    async fn record(&self, tx: &NewTransaction) -> WalletResult<Transaction>;

    /// All transactions for a customer, store-natural order
    async fn find_by_customer_id(&self, customer_id: &CustomerId) -> WalletResult<Vec<Transaction>>;

    /// All transactions with the given business transaction id
    async fn find_by_transaction_id(&self, transaction_id: &str) -> WalletResult<Vec<Transaction>>;

    /// Logical OR of the two predicates above
    async fn find_by_customer_or_transaction_id(
        &self,
        transaction_id: &str,
        customer_id: &CustomerId,
    ) -> WalletResult<Vec<Transaction>>;

    /// Transactions for a customer+account pair, strictly descending by
    /// the store-assigned ordering key (most recent first)
    async fn mini_statement(
        &self,
        customer_id: &CustomerId,
        account_no: &AccountNo,
    ) -> WalletResult<Vec<Transaction>>;
}
