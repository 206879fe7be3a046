//! Transaction Lookup Use Case
//!
//! Read-only queries over the transaction store. Every operation returns
//! an empty Vec, not an error, when nothing matches.

use std::sync::Arc;

use crate::domain::entity::transaction::Transaction;
use crate::domain::repository::TransactionRepository;
use crate::domain::value_object::{account_no::AccountNo, customer_id::CustomerId};
use crate::error::WalletResult;

/// Transaction lookup use case
pub struct TransactionLookupUseCase<T>
where
    T: TransactionRepository,
{
    transaction_repo: Arc<T>,
}

impl<T> TransactionLookupUseCase<T>
where
    T: TransactionRepository,
{
    pub fn new(transaction_repo: Arc<T>) -> Self {
        Self { transaction_repo }
    }

    /// All transactions for a customer (store-natural order)
    pub async fn by_customer(&self, customer_id: &str) -> WalletResult<Vec<Transaction>> {
        let customer_id = CustomerId::new(customer_id)?;
        self.transaction_repo.find_by_customer_id(&customer_id).await
    }

    /// All transactions with the given transaction id
    pub async fn by_transaction_id(&self, transaction_id: &str) -> WalletResult<Vec<Transaction>> {
        self.transaction_repo
            .find_by_transaction_id(transaction_id)
            .await
    }

    /// Transactions matching either the transaction id or the customer id
    pub async fn by_customer_or_transaction_id(
        &self,
        transaction_id: &str,
        customer_id: &str,
    ) -> WalletResult<Vec<Transaction>> {
        let customer_id = CustomerId::new(customer_id)?;
        self.transaction_repo
            .find_by_customer_or_transaction_id(transaction_id, &customer_id)
            .await
    }

    /// Mini-statement for a customer+account pair, most recent first.
    /// The descending order is a correctness requirement, not cosmetics.
    pub async fn mini_statement(
        &self,
        customer_id: &str,
        account_no: &str,
    ) -> WalletResult<Vec<Transaction>> {
        let customer_id = CustomerId::new(customer_id)?;
        let account_no = AccountNo::new(account_no)?;
        self.transaction_repo
            .mini_statement(&customer_id, &account_no)
            .await
    }
}
