//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::application::create_customer::CreateCustomerOutput;
use crate::application::login::Profile;
use crate::domain::entity::{customer::Customer, transaction::Transaction};

// ============================================================================
// Create Customer
// ============================================================================

/// Create customer request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerRequest {
    pub customer_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub pin: String,
}

/// Create customer response
///
/// Echoes the created resource plus the provisioned account number.
/// The PIN hash is never part of any response body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerResponse {
    pub customer_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub account_no: String,
    pub balance: Decimal,
}

impl From<CreateCustomerOutput> for CreateCustomerResponse {
    fn from(output: CreateCustomerOutput) -> Self {
        Self {
            customer_id: output.customer.customer_id.as_str().to_string(),
            first_name: output.customer.first_name,
            last_name: output.customer.last_name,
            email: output.customer.email.as_str().to_string(),
            account_no: output.account.account_no.as_str().to_string(),
            balance: output.account.balance,
        }
    }
}

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub customer_id: String,
    pub pin: String,
}

/// Login response: the customer profile
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub first_name: String,
    pub last_name: String,
    pub customer_id: String,
    pub email: String,
    pub customer_account: String,
}

impl From<Profile> for LoginResponse {
    fn from(profile: Profile) -> Self {
        Self {
            first_name: profile.first_name,
            last_name: profile.last_name,
            customer_id: profile.customer_id.as_str().to_string(),
            email: profile.email.as_str().to_string(),
            customer_account: profile.account_no.as_str().to_string(),
        }
    }
}

// ============================================================================
// Customer listing / search
// ============================================================================

/// Customer resource (listing); no credential material
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
    pub customer_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            customer_id: customer.customer_id.as_str().to_string(),
            first_name: customer.first_name,
            last_name: customer.last_name,
            email: customer.email.as_str().to_string(),
        }
    }
}

/// Email substring search query
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailSearchQuery {
    pub email: String,
}

// ============================================================================
// Transactions
// ============================================================================

/// Transaction resource
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    pub id: i64,
    pub transaction_id: String,
    pub customer_id: String,
    pub account_no: String,
    pub amount: Decimal,
    pub created_at: DateTime<Utc>,
}

impl From<Transaction> for TransactionResponse {
    fn from(tx: Transaction) -> Self {
        Self {
            id: tx.id,
            transaction_id: tx.transaction_id,
            customer_id: tx.customer_id.as_str().to_string(),
            account_no: tx.account_no.as_str().to_string(),
            amount: tx.amount,
            created_at: tx.created_at,
        }
    }
}

/// OR-query over transaction id and customer id
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionSearchQuery {
    pub transaction_id: String,
    pub customer_id: String,
}

/// Mini-statement query
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MiniStatementQuery {
    pub customer_id: String,
    pub account_no: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_camel_case() {
        let req: CreateCustomerRequest = serde_json::from_str(
            r#"{"customerId":"C1","firstName":"Ada","lastName":"Lovelace","email":"a@x.com","pin":"1234"}"#,
        )
        .unwrap();
        assert_eq!(req.customer_id, "C1");
        assert_eq!(req.first_name, "Ada");
    }

    #[test]
    fn test_login_response_keys() {
        let resp = LoginResponse {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            customer_id: "C1".into(),
            email: "a@x.com".into(),
            customer_account: "ACC0123456789".into(),
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["customerAccount"], "ACC0123456789");
        assert_eq!(json["customerId"], "C1");
        // No credential material in the profile
        assert!(json.get("pin").is_none());
    }
}
