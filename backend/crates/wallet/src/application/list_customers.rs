//! List Customers Use Case
//!
//! Full-scan listing and email substring search. Pagination is out of
//! scope.

use std::sync::Arc;

use crate::domain::entity::customer::Customer;
use crate::domain::repository::CustomerRepository;
use crate::error::WalletResult;

/// List customers use case
pub struct ListCustomersUseCase<C>
where
    C: CustomerRepository,
{
    customer_repo: Arc<C>,
}

impl<C> ListCustomersUseCase<C>
where
    C: CustomerRepository,
{
    pub fn new(customer_repo: Arc<C>) -> Self {
        Self { customer_repo }
    }

    /// All customers, store-natural order
    pub async fn execute(&self) -> WalletResult<Vec<Customer>> {
        self.customer_repo.find_all().await
    }

    /// Customers whose email contains the given fragment
    pub async fn search_by_email(&self, fragment: &str) -> WalletResult<Vec<Customer>> {
        self.customer_repo.search_by_email_fragment(fragment).await
    }
}
