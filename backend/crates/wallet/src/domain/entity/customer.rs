//! Customer Entity
//!
//! Customer profile plus the stored PIN credential. The cleartext PIN
//! never reaches this type; provisioning hashes it first.

use chrono::{DateTime, Utc};
use kernel::id::CustomerRowId;

use crate::domain::value_object::{
    customer_id::CustomerId, email::Email, pin::CustomerPin,
};

/// Customer entity
///
/// Exactly one customer exists per `customer_id` and per `email`; the
/// store enforces both at the write layer.
#[derive(Debug, Clone)]
pub struct Customer {
    /// Internal UUID row identifier
    pub id: CustomerRowId,
    /// Business identifier (unique, caller-supplied)
    pub customer_id: CustomerId,
    pub first_name: String,
    pub last_name: String,
    /// Unique, normalized lowercase
    pub email: Email,
    /// Hashed PIN credential
    pub pin: CustomerPin,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Customer {
    /// Create a new customer
    pub fn new(
        customer_id: CustomerId,
        first_name: String,
        last_name: String,
        email: Email,
        pin: CustomerPin,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: CustomerRowId::new(),
            customer_id,
            first_name,
            last_name,
            email,
            pin,
            created_at: now,
            updated_at: now,
        }
    }

    /// Update the first name
    pub fn set_first_name(&mut self, first_name: String) {
        self.first_name = first_name;
        self.updated_at = Utc::now();
    }
}
