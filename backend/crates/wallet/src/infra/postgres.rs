//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{
    account::Account,
    customer::Customer,
    transaction::{NewTransaction, Transaction},
};
use crate::domain::repository::{AccountRepository, CustomerRepository, TransactionRepository};
use crate::domain::value_object::{
    account_no::AccountNo, customer_id::CustomerId, email::Email, pin::CustomerPin,
};
use crate::error::{WalletError, WalletResult};

/// PostgreSQL-backed wallet repository
///
/// Implements all three store contracts over one pool. The unique
/// constraints on `customer_id`, `email` and `account_no` are the
/// authoritative uniqueness guard; insert failures against them are
/// translated into the duplicate conflicts of the error taxonomy.
#[derive(Clone)]
pub struct PgWalletRepository {
    pool: PgPool,
}

impl PgWalletRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Map a 23505 unique violation to the conflict for the named constraint
fn translate_unique_violation(err: sqlx::Error) -> WalletError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some("23505") {
            match db_err.constraint() {
                Some("customers_customer_id_key") => {
                    return WalletError::DuplicateCustomerId(String::new());
                }
                Some("customers_email_key") => {
                    return WalletError::DuplicateEmail(String::new());
                }
                Some("accounts_account_no_key") => {
                    return WalletError::DuplicateAccountNo(String::new());
                }
                _ => {}
            }
        }
    }
    WalletError::Database(err)
}

/// Fill in the conflicting key for a translated duplicate error
fn with_duplicate_key(err: WalletError, customer_id: &str, email: &str) -> WalletError {
    match err {
        WalletError::DuplicateCustomerId(_) => {
            WalletError::DuplicateCustomerId(customer_id.to_string())
        }
        WalletError::DuplicateEmail(_) => WalletError::DuplicateEmail(email.to_string()),
        other => other,
    }
}

// ============================================================================
// Customer Repository Implementation
// ============================================================================

impl CustomerRepository for PgWalletRepository {
    async fn create(&self, customer: &Customer) -> WalletResult<()> {
        sqlx::query(
            r#"
            INSERT INTO customers (
                id,
                customer_id,
                first_name,
                last_name,
                email,
                pin_hash,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(customer.id.as_uuid())
        .bind(customer.customer_id.as_str())
        .bind(&customer.first_name)
        .bind(&customer.last_name)
        .bind(customer.email.as_str())
        .bind(customer.pin.as_phc_string())
        .bind(customer.created_at)
        .bind(customer.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            with_duplicate_key(
                translate_unique_violation(e),
                customer.customer_id.as_str(),
                customer.email.as_str(),
            )
        })?;

        Ok(())
    }

    async fn find_by_customer_id(
        &self,
        customer_id: &CustomerId,
    ) -> WalletResult<Option<Customer>> {
        let row = sqlx::query_as::<_, CustomerRow>(
            r#"
            SELECT id, customer_id, first_name, last_name, email, pin_hash, created_at, updated_at
            FROM customers
            WHERE customer_id = $1
            "#,
        )
        .bind(customer_id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_customer()).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> WalletResult<Option<Customer>> {
        let row = sqlx::query_as::<_, CustomerRow>(
            r#"
            SELECT id, customer_id, first_name, last_name, email, pin_hash, created_at, updated_at
            FROM customers
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_customer()).transpose()
    }

    async fn exists_by_customer_id(&self, customer_id: &CustomerId) -> WalletResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM customers WHERE customer_id = $1)",
        )
        .bind(customer_id.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn exists_by_email(&self, email: &Email) -> WalletResult<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM customers WHERE email = $1)")
                .bind(email.as_str())
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    async fn find_all(&self) -> WalletResult<Vec<Customer>> {
        let rows = sqlx::query_as::<_, CustomerRow>(
            r#"
            SELECT id, customer_id, first_name, last_name, email, pin_hash, created_at, updated_at
            FROM customers
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_customer()).collect()
    }

    async fn search_by_email_fragment(&self, fragment: &str) -> WalletResult<Vec<Customer>> {
        let rows = sqlx::query_as::<_, CustomerRow>(
            r#"
            SELECT id, customer_id, first_name, last_name, email, pin_hash, created_at, updated_at
            FROM customers
            WHERE email LIKE '%' || $1 || '%'
            "#,
        )
        .bind(fragment)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_customer()).collect()
    }

    async fn update_first_name(
        &self,
        customer_id: &CustomerId,
        first_name: &str,
    ) -> WalletResult<u64> {
        let updated = sqlx::query(
            r#"
            UPDATE customers SET
                first_name = $2,
                updated_at = $3
            WHERE customer_id = $1
            "#,
        )
        .bind(customer_id.as_str())
        .bind(first_name)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(updated)
    }

    async fn delete_by_customer_id(&self, customer_id: &CustomerId) -> WalletResult<u64> {
        let deleted = sqlx::query("DELETE FROM customers WHERE customer_id = $1")
            .bind(customer_id.as_str())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted)
    }
}

// ============================================================================
// Account Repository Implementation
// ============================================================================

impl AccountRepository for PgWalletRepository {
    async fn create(&self, account: &Account) -> WalletResult<()> {
        sqlx::query(
            r#"
            INSERT INTO accounts (
                id,
                account_no,
                customer_id,
                balance,
                created_at
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(account.id.as_uuid())
        .bind(account.account_no.as_str())
        .bind(account.customer_id.as_str())
        .bind(account.balance)
        .bind(account.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match translate_unique_violation(e) {
            WalletError::DuplicateAccountNo(_) => {
                WalletError::DuplicateAccountNo(account.account_no.as_str().to_string())
            }
            other => other,
        })?;

        Ok(())
    }

    async fn find_by_customer_id(&self, customer_id: &CustomerId) -> WalletResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, account_no, customer_id, balance, created_at
            FROM accounts
            WHERE customer_id = $1
            "#,
        )
        .bind(customer_id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_account()))
    }

    async fn exists_by_account_no(&self, account_no: &AccountNo) -> WalletResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM accounts WHERE account_no = $1)",
        )
        .bind(account_no.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }
}

// ============================================================================
// Transaction Repository Implementation
// ============================================================================

impl TransactionRepository for PgWalletRepository {
    async fn record(&self, tx: &NewTransaction) -> WalletResult<Transaction> {
        let row = sqlx::query_as::<_, TransactionRow>(
            r#"
            INSERT INTO transactions (transaction_id, customer_id, account_no, amount, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, transaction_id, customer_id, account_no, amount, created_at
            "#,
        )
        .bind(&tx.transaction_id)
        .bind(tx.customer_id.as_str())
        .bind(tx.account_no.as_str())
        .bind(tx.amount)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_transaction())
    }

    async fn find_by_customer_id(
        &self,
        customer_id: &CustomerId,
    ) -> WalletResult<Vec<Transaction>> {
        let rows = sqlx::query_as::<_, TransactionRow>(
            r#"
            SELECT id, transaction_id, customer_id, account_no, amount, created_at
            FROM transactions
            WHERE customer_id = $1
            "#,
        )
        .bind(customer_id.as_str())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_transaction()).collect())
    }

    async fn find_by_transaction_id(
        &self,
        transaction_id: &str,
    ) -> WalletResult<Vec<Transaction>> {
        let rows = sqlx::query_as::<_, TransactionRow>(
            r#"
            SELECT id, transaction_id, customer_id, account_no, amount, created_at
            FROM transactions
            WHERE transaction_id = $1
            "#,
        )
        .bind(transaction_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_transaction()).collect())
    }

    async fn find_by_customer_or_transaction_id(
        &self,
        transaction_id: &str,
        customer_id: &CustomerId,
    ) -> WalletResult<Vec<Transaction>> {
        let rows = sqlx::query_as::<_, TransactionRow>(
            r#"
            SELECT id, transaction_id, customer_id, account_no, amount, created_at
            FROM transactions
            WHERE transaction_id = $1 OR customer_id = $2
            "#,
        )
        .bind(transaction_id)
        .bind(customer_id.as_str())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_transaction()).collect())
    }

    async fn mini_statement(
        &self,
        customer_id: &CustomerId,
        account_no: &AccountNo,
    ) -> WalletResult<Vec<Transaction>> {
        // ORDER BY id DESC is load-bearing: most recent first
        let rows = sqlx::query_as::<_, TransactionRow>(
            r#"
            SELECT id, transaction_id, customer_id, account_no, amount, created_at
            FROM transactions
            WHERE customer_id = $1 AND account_no = $2
            ORDER BY id DESC
            "#,
        )
        .bind(customer_id.as_str())
        .bind(account_no.as_str())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_transaction()).collect())
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct CustomerRow {
    id: Uuid,
    customer_id: String,
    first_name: String,
    last_name: String,
    email: String,
    pin_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl CustomerRow {
    fn into_customer(self) -> WalletResult<Customer> {
        Ok(Customer {
            id: self.id.into(),
            customer_id: CustomerId::from_db(self.customer_id),
            first_name: self.first_name,
            last_name: self.last_name,
            email: Email::from_db(self.email),
            pin: CustomerPin::from_phc_string(self.pin_hash)?,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct AccountRow {
    id: Uuid,
    account_no: String,
    customer_id: String,
    balance: Decimal,
    created_at: DateTime<Utc>,
}

impl AccountRow {
    fn into_account(self) -> Account {
        Account {
            id: self.id.into(),
            account_no: AccountNo::from_db(self.account_no),
            customer_id: CustomerId::from_db(self.customer_id),
            balance: self.balance,
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct TransactionRow {
    id: i64,
    transaction_id: String,
    customer_id: String,
    account_no: String,
    amount: Decimal,
    created_at: DateTime<Utc>,
}

impl TransactionRow {
    fn into_transaction(self) -> Transaction {
        Transaction {
            id: self.id,
            transaction_id: self.transaction_id,
            customer_id: CustomerId::from_db(self.customer_id),
            account_no: AccountNo::from_db(self.account_no),
            amount: self.amount,
            created_at: self.created_at,
        }
    }
}
