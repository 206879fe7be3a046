//! Create Customer Use Case
//!
//! Provisions a customer identity and its monetary account as one
//! logical unit: uniqueness checks, PIN hashing, customer persistence,
//! unique account-number generation, account creation.

use std::sync::Arc;

use crate::application::account_number::generate_account_no;
use crate::application::config::WalletConfig;
use crate::domain::entity::{account::Account, customer::Customer};
use crate::domain::repository::{AccountRepository, CustomerRepository};
use crate::domain::value_object::{
    customer_id::CustomerId,
    email::Email,
    pin::{CustomerPin, RawPin},
};
use crate::error::{WalletError, WalletResult};

/// Create customer input
pub struct CreateCustomerInput {
    pub customer_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub pin: String,
}

/// Create customer output
#[derive(Debug)]
pub struct CreateCustomerOutput {
    pub customer: Customer,
    pub account: Account,
}

/// Create customer use case
pub struct CreateCustomerUseCase<C, A>
where
    C: CustomerRepository,
    A: AccountRepository,
{
    customer_repo: Arc<C>,
    account_repo: Arc<A>,
    config: Arc<WalletConfig>,
}

impl<C, A> CreateCustomerUseCase<C, A>
where
    C: CustomerRepository,
    A: AccountRepository,
{
    pub fn new(customer_repo: Arc<C>, account_repo: Arc<A>, config: Arc<WalletConfig>) -> Self {
        Self {
            customer_repo,
            account_repo,
            config,
        }
    }

    pub async fn execute(&self, input: CreateCustomerInput) -> WalletResult<CreateCustomerOutput> {
        let customer_id = CustomerId::new(input.customer_id)?;
        let email = Email::new(input.email)?;

        // Fast-path uniqueness checks. The store's unique constraints
        // remain the authoritative guard under concurrency; a concurrent
        // writer losing the race gets the same conflict from `create`.
        if self.customer_repo.exists_by_customer_id(&customer_id).await? {
            return Err(WalletError::DuplicateCustomerId(
                customer_id.as_str().to_string(),
            ));
        }
        if self.customer_repo.exists_by_email(&email).await? {
            return Err(WalletError::DuplicateEmail(email.as_str().to_string()));
        }

        // Hash the PIN; only the hash is ever stored
        let raw_pin = RawPin::new(input.pin)?;
        let pin = CustomerPin::from_raw(&raw_pin, self.config.pepper())?;

        // Persist the customer first; the account row references it
        let customer = Customer::new(
            customer_id.clone(),
            input.first_name,
            input.last_name,
            email,
            pin,
        );
        self.customer_repo.create(&customer).await?;

        // Provisioning is one logical unit: if the account cannot be
        // created, the customer row must not survive, or every retry
        // would hit DuplicateCustomerId with no account to log into.
        let account = match self.open_account(customer_id).await {
            Ok(account) => account,
            Err(err) => {
                if let Err(cleanup_err) = self
                    .customer_repo
                    .delete_by_customer_id(&customer.customer_id)
                    .await
                {
                    tracing::error!(
                        customer_id = %customer.customer_id,
                        error = %cleanup_err,
                        "Failed to roll back customer after account creation failure"
                    );
                }
                return Err(err);
            }
        };

        tracing::info!(
            customer_id = %customer.customer_id,
            account_no = %account.account_no,
            "Customer provisioned"
        );

        Ok(CreateCustomerOutput { customer, account })
    }

    /// Generate a unique account number and persist the zero-balance account
    async fn open_account(&self, customer_id: CustomerId) -> WalletResult<Account> {
        let account_no = generate_account_no(self.account_repo.as_ref()).await?;
        let account = Account::open(customer_id, account_no);
        self.account_repo.create(&account).await?;
        Ok(account)
    }
}
