//! Transaction Entity
//!
//! Immutable ledger rows. Nothing in this subsystem creates transactions
//! as part of a business flow; the store's `record` contract exists for
//! ingestion and seeding, and everything else is retrieval.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::domain::value_object::{account_no::AccountNo, customer_id::CustomerId};

/// Transaction entity
#[derive(Debug, Clone)]
pub struct Transaction {
    /// Store-assigned, monotonically increasing ordering key
    pub id: i64,
    /// Business transaction identifier
    pub transaction_id: String,
    pub customer_id: CustomerId,
    pub account_no: AccountNo,
    pub amount: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Input for recording a transaction (store assigns `id` and timestamp)
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub transaction_id: String,
    pub customer_id: CustomerId,
    pub account_no: AccountNo,
    pub amount: Decimal,
}
