//! Delete Customer Use Case

use std::sync::Arc;

use crate::domain::repository::CustomerRepository;
use crate::domain::value_object::customer_id::CustomerId;
use crate::error::{WalletError, WalletResult};

/// Delete customer use case
pub struct DeleteCustomerUseCase<C>
where
    C: CustomerRepository,
{
    customer_repo: Arc<C>,
}

impl<C> DeleteCustomerUseCase<C>
where
    C: CustomerRepository,
{
    pub fn new(customer_repo: Arc<C>) -> Self {
        Self { customer_repo }
    }

    pub async fn execute(&self, customer_id: &str) -> WalletResult<()> {
        let customer_id = CustomerId::new(customer_id)?;

        let deleted = self.customer_repo.delete_by_customer_id(&customer_id).await?;
        if deleted == 0 {
            return Err(WalletError::CustomerNotFound);
        }

        tracing::info!(customer_id = %customer_id, "Customer deleted");

        Ok(())
    }
}
