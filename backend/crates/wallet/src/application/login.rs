//! Login Use Case
//!
//! Authenticates a customer by PIN and assembles the profile response.
//! The stored credential is an Argon2id hash, so the comparison goes
//! through `CustomerPin::verify` on this path as well; there is no
//! plaintext equality anywhere.
//!
//! Read-only and idempotent. No session or token is issued; the profile
//! is the entire response.

use std::sync::Arc;

use crate::application::config::WalletConfig;
use crate::domain::repository::{AccountRepository, CustomerRepository};
use crate::domain::value_object::{
    account_no::AccountNo, customer_id::CustomerId, email::Email, pin::RawPin,
};
use crate::error::{WalletError, WalletResult};

/// Login input
pub struct LoginInput {
    pub customer_id: String,
    pub pin: String,
}

/// Login output: the customer profile with its account number.
/// Never carries credential material.
#[derive(Debug)]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub customer_id: CustomerId,
    pub email: Email,
    pub account_no: AccountNo,
}

/// Login use case
pub struct LoginUseCase<C, A>
where
    C: CustomerRepository,
    A: AccountRepository,
{
    customer_repo: Arc<C>,
    account_repo: Arc<A>,
    config: Arc<WalletConfig>,
}

impl<C, A> LoginUseCase<C, A>
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

    pub async fn execute(&self, input: LoginInput) -> WalletResult<Profile> {
        let customer_id = CustomerId::new(input.customer_id)?;

        let customer = self
            .customer_repo
            .find_by_customer_id(&customer_id)
            .await?
            .ok_or(WalletError::CustomerNotFound)?;

        // A malformed PIN can never match a stored hash
        let raw_pin = RawPin::new(input.pin).map_err(|_| WalletError::InvalidCredentials)?;

        if !customer.pin.verify(&raw_pin, self.config.pepper()) {
            return Err(WalletError::InvalidCredentials);
        }

        let account = self
            .account_repo
            .find_by_customer_id(&customer_id)
            .await?
            .ok_or(WalletError::AccountNotFound)?;

        tracing::info!(
            customer_id = %customer.customer_id,
            "Customer logged in"
        );

        Ok(Profile {
            first_name: customer.first_name,
            last_name: customer.last_name,
            customer_id: customer.customer_id,
            email: customer.email,
            account_no: account.account_no,
        })
    }
}
