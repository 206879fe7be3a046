//! Unique Account Number Generation
//!
//! Generate-and-check loop over the account store. A candidate that is
//! already present is discarded and a fresh one is drawn; over a 40-bit
//! space the expected retry count is effectively zero at realistic table
//! sizes, so no retry cap is imposed. A store *error* during the
//! existence check propagates immediately; only a successful "found"
//! result loops.

use crate::domain::repository::AccountRepository;
use crate::domain::value_object::account_no::AccountNo;
use crate::error::WalletResult;

/// Generate an account number not currently present in the store
pub async fn generate_account_no<A>(accounts: &A) -> WalletResult<AccountNo>
where
    A: AccountRepository,
{
    loop {
        let candidate = AccountNo::generate();
        if !accounts.exists_by_account_no(&candidate).await? {
            return Ok(candidate);
        }
        tracing::debug!(account_no = %candidate, "Account number collision, regenerating");
    }
}
