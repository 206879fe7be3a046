//! In-Memory Repository Implementation
//!
//! Reference store used by the use-case tests and local development.
//! Enforces the same uniqueness invariants as the PostgreSQL schema at
//! insert time, under a single write lock, so a losing concurrent writer
//! observes the same duplicate conflict it would get from the database.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::Utc;

use crate::domain::entity::{
    account::Account,
    customer::Customer,
    transaction::{NewTransaction, Transaction},
};
use crate::domain::repository::{AccountRepository, CustomerRepository, TransactionRepository};
use crate::domain::value_object::{
    account_no::AccountNo, customer_id::CustomerId, email::Email,
};
use crate::error::{WalletError, WalletResult};

#[derive(Default)]
struct Tables {
    /// Keyed by business customer id
    customers: HashMap<String, Customer>,
    /// Keyed by account number
    accounts: HashMap<String, Account>,
    /// Append-only; index order is insertion order
    transactions: Vec<Transaction>,
    /// Next transaction ordering key
    next_transaction_id: i64,
}

/// In-memory wallet repository
#[derive(Clone, Default)]
pub struct InMemoryWalletRepository {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryWalletRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Tables> {
        // Lock poisoning only happens after a panic in another holder;
        // tests want the panic surfaced, not masked.
        self.tables.read().expect("wallet tables lock poisoned")
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Tables> {
        self.tables.write().expect("wallet tables lock poisoned")
    }
}

// ============================================================================
// Customer Repository Implementation
// ============================================================================

impl CustomerRepository for InMemoryWalletRepository {
    async fn create(&self, customer: &Customer) -> WalletResult<()> {
        let mut tables = self.write();

        // Uniqueness is checked and committed under one write lock
        if tables.customers.contains_key(customer.customer_id.as_str()) {
            return Err(WalletError::DuplicateCustomerId(
                customer.customer_id.as_str().to_string(),
            ));
        }
        if tables
            .customers
            .values()
            .any(|c| c.email == customer.email)
        {
            return Err(WalletError::DuplicateEmail(
                customer.email.as_str().to_string(),
            ));
        }

        tables
            .customers
            .insert(customer.customer_id.as_str().to_string(), customer.clone());
        Ok(())
    }

    async fn find_by_customer_id(
        &self,
        customer_id: &CustomerId,
    ) -> WalletResult<Option<Customer>> {
        Ok(self.read().customers.get(customer_id.as_str()).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> WalletResult<Option<Customer>> {
        Ok(self
            .read()
            .customers
            .values()
            .find(|c| &c.email == email)
            .cloned())
    }

    async fn exists_by_customer_id(&self, customer_id: &CustomerId) -> WalletResult<bool> {
        Ok(self.read().customers.contains_key(customer_id.as_str()))
    }

    async fn exists_by_email(&self, email: &Email) -> WalletResult<bool> {
        Ok(self.read().customers.values().any(|c| &c.email == email))
    }

    async fn find_all(&self) -> WalletResult<Vec<Customer>> {
        Ok(self.read().customers.values().cloned().collect())
    }

    async fn search_by_email_fragment(&self, fragment: &str) -> WalletResult<Vec<Customer>> {
        Ok(self
            .read()
            .customers
            .values()
            .filter(|c| c.email.as_str().contains(fragment))
            .cloned()
            .collect())
    }

    async fn update_first_name(
        &self,
        customer_id: &CustomerId,
        first_name: &str,
    ) -> WalletResult<u64> {
        let mut tables = self.write();
        match tables.customers.get_mut(customer_id.as_str()) {
            Some(customer) => {
                customer.set_first_name(first_name.to_string());
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_by_customer_id(&self, customer_id: &CustomerId) -> WalletResult<u64> {
        let mut tables = self.write();
        let removed = tables.customers.remove(customer_id.as_str());
        if removed.is_some() {
            // Same cascade the accounts foreign key gives us in Postgres
            tables
                .accounts
                .retain(|_, account| &account.customer_id != customer_id);
        }
        Ok(u64::from(removed.is_some()))
    }
}

// ============================================================================
// Account Repository Implementation
// ============================================================================

impl AccountRepository for InMemoryWalletRepository {
    async fn create(&self, account: &Account) -> WalletResult<()> {
        let mut tables = self.write();

        if tables.accounts.contains_key(account.account_no.as_str()) {
            return Err(WalletError::DuplicateAccountNo(
                account.account_no.as_str().to_string(),
            ));
        }

        tables
            .accounts
            .insert(account.account_no.as_str().to_string(), account.clone());
        Ok(())
    }

    async fn find_by_customer_id(&self, customer_id: &CustomerId) -> WalletResult<Option<Account>> {
        Ok(self
            .read()
            .accounts
            .values()
            .find(|a| &a.customer_id == customer_id)
            .cloned())
    }

    async fn exists_by_account_no(&self, account_no: &AccountNo) -> WalletResult<bool> {
        Ok(self.read().accounts.contains_key(account_no.as_str()))
    }
}

// ============================================================================
// Transaction Repository Implementation
// ============================================================================

impl TransactionRepository for InMemoryWalletRepository {
    async fn record(&self, tx: &NewTransaction) -> WalletResult<Transaction> {
        let mut tables = self.write();

        tables.next_transaction_id += 1;
        let transaction = Transaction {
            id: tables.next_transaction_id,
            transaction_id: tx.transaction_id.clone(),
            customer_id: tx.customer_id.clone(),
            account_no: tx.account_no.clone(),
            amount: tx.amount,
            created_at: Utc::now(),
        };

        tables.transactions.push(transaction.clone());
        Ok(transaction)
    }

    async fn find_by_customer_id(
        &self,
        customer_id: &CustomerId,
    ) -> WalletResult<Vec<Transaction>> {
        Ok(self
            .read()
            .transactions
            .iter()
            .filter(|t| &t.customer_id == customer_id)
            .cloned()
            .collect())
    }

    async fn find_by_transaction_id(
        &self,
        transaction_id: &str,
    ) -> WalletResult<Vec<Transaction>> {
        Ok(self
            .read()
            .transactions
            .iter()
            .filter(|t| t.transaction_id == transaction_id)
            .cloned()
            .collect())
    }

    async fn find_by_customer_or_transaction_id(
        &self,
        transaction_id: &str,
        customer_id: &CustomerId,
    ) -> WalletResult<Vec<Transaction>> {
        Ok(self
            .read()
            .transactions
            .iter()
            .filter(|t| t.transaction_id == transaction_id || &t.customer_id == customer_id)
            .cloned()
            .collect())
    }

    async fn mini_statement(
        &self,
        customer_id: &CustomerId,
        account_no: &AccountNo,
    ) -> WalletResult<Vec<Transaction>> {
        let mut matches: Vec<Transaction> = self
            .read()
            .transactions
            .iter()
            .filter(|t| &t.customer_id == customer_id && &t.account_no == account_no)
            .cloned()
            .collect();

        // Most recent first
        matches.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(matches)
    }
}
