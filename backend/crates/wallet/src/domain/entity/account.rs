//! Account Entity
//!
//! Monetary account owned by a customer. Provisioning creates exactly
//! one account per customer; balance movement is out of scope for this
//! subsystem, so the balance only ever starts at zero here.

use chrono::{DateTime, Utc};
use kernel::id::AccountRowId;
use rust_decimal::Decimal;

use crate::domain::value_object::{account_no::AccountNo, customer_id::CustomerId};

/// Account entity
#[derive(Debug, Clone)]
pub struct Account {
    /// Internal UUID row identifier
    pub id: AccountRowId,
    /// Business identifier (unique, `^ACC[0-9a-f]{10}$`)
    pub account_no: AccountNo,
    /// Owning customer
    pub customer_id: CustomerId,
    /// Non-negative balance
    pub balance: Decimal,
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Open a new account with a zero balance
    pub fn open(customer_id: CustomerId, account_no: AccountNo) -> Self {
        Self {
            id: AccountRowId::new(),
            account_no,
            customer_id,
            balance: Decimal::ZERO,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_starts_at_zero() {
        let account = Account::open(
            CustomerId::from_db("C1"),
            AccountNo::from_db("ACC0123456789"),
        );
        assert_eq!(account.balance, Decimal::ZERO);
        assert_eq!(account.customer_id.as_str(), "C1");
    }
}
