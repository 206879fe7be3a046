//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::sync::Arc;

use crate::application::config::WalletConfig;
use crate::application::{
    CreateCustomerInput, CreateCustomerUseCase, DeleteCustomerUseCase, ListCustomersUseCase,
    LoginInput, LoginUseCase, TransactionLookupUseCase,
};
use crate::domain::repository::{AccountRepository, CustomerRepository, TransactionRepository};
use crate::error::WalletResult;
use crate::presentation::dto::{
    CreateCustomerRequest, CreateCustomerResponse, CustomerResponse, EmailSearchQuery,
    LoginRequest, LoginResponse, MiniStatementQuery, TransactionResponse, TransactionSearchQuery,
};

/// Shared state for wallet handlers
#[derive(Clone)]
pub struct WalletAppState<R>
where
    R: CustomerRepository
        + AccountRepository
        + TransactionRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<WalletConfig>,
}

// ============================================================================
// Create Customer
// ============================================================================

/// POST /api/wallet/customers
pub async fn create_customer<R>(
    State(state): State<WalletAppState<R>>,
    Json(req): Json<CreateCustomerRequest>,
) -> WalletResult<impl IntoResponse>
where
    R: CustomerRepository
        + AccountRepository
        + TransactionRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    let use_case =
        CreateCustomerUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let input = CreateCustomerInput {
        customer_id: req.customer_id,
        first_name: req.first_name,
        last_name: req.last_name,
        email: req.email,
        pin: req.pin,
    };

    let output = use_case.execute(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateCustomerResponse::from(output)),
    ))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/wallet/customers/login
pub async fn login<R>(
    State(state): State<WalletAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> WalletResult<Json<LoginResponse>>
where
    R: CustomerRepository
        + AccountRepository
        + TransactionRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    let use_case =
        LoginUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let profile = use_case
        .execute(LoginInput {
            customer_id: req.customer_id,
            pin: req.pin,
        })
        .await?;

    Ok(Json(LoginResponse::from(profile)))
}

// ============================================================================
// Customer listing / search / delete
// ============================================================================

/// GET /api/wallet/customers
pub async fn list_customers<R>(
    State(state): State<WalletAppState<R>>,
) -> WalletResult<Json<Vec<CustomerResponse>>>
where
    R: CustomerRepository
        + AccountRepository
        + TransactionRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    let use_case = ListCustomersUseCase::new(state.repo.clone());
    let customers = use_case.execute().await?;

    Ok(Json(
        customers.into_iter().map(CustomerResponse::from).collect(),
    ))
}

/// GET /api/wallet/customers/search?email=fragment
pub async fn search_customers<R>(
    State(state): State<WalletAppState<R>>,
    Query(query): Query<EmailSearchQuery>,
) -> WalletResult<Json<Vec<CustomerResponse>>>
where
    R: CustomerRepository
        + AccountRepository
        + TransactionRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    let use_case = ListCustomersUseCase::new(state.repo.clone());
    let customers = use_case.search_by_email(&query.email).await?;

    Ok(Json(
        customers.into_iter().map(CustomerResponse::from).collect(),
    ))
}

/// DELETE /api/wallet/customers/{customer_id}
pub async fn delete_customer<R>(
    State(state): State<WalletAppState<R>>,
    Path(customer_id): Path<String>,
) -> WalletResult<StatusCode>
where
    R: CustomerRepository
        + AccountRepository
        + TransactionRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    let use_case = DeleteCustomerUseCase::new(state.repo.clone());
    use_case.execute(&customer_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Transactions
// ============================================================================

/// GET /api/wallet/transactions/customer/{customer_id}
pub async fn transactions_by_customer<R>(
    State(state): State<WalletAppState<R>>,
    Path(customer_id): Path<String>,
) -> WalletResult<Json<Vec<TransactionResponse>>>
where
    R: CustomerRepository
        + AccountRepository
        + TransactionRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    let use_case = TransactionLookupUseCase::new(state.repo.clone());
    let transactions = use_case.by_customer(&customer_id).await?;

    Ok(Json(
        transactions
            .into_iter()
            .map(TransactionResponse::from)
            .collect(),
    ))
}

/// GET /api/wallet/transactions/id/{transaction_id}
pub async fn transactions_by_id<R>(
    State(state): State<WalletAppState<R>>,
    Path(transaction_id): Path<String>,
) -> WalletResult<Json<Vec<TransactionResponse>>>
where
    R: CustomerRepository
        + AccountRepository
        + TransactionRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    let use_case = TransactionLookupUseCase::new(state.repo.clone());
    let transactions = use_case.by_transaction_id(&transaction_id).await?;

    Ok(Json(
        transactions
            .into_iter()
            .map(TransactionResponse::from)
            .collect(),
    ))
}

/// GET /api/wallet/transactions?transactionId=..&customerId=..
pub async fn search_transactions<R>(
    State(state): State<WalletAppState<R>>,
    Query(query): Query<TransactionSearchQuery>,
) -> WalletResult<Json<Vec<TransactionResponse>>>
where
    R: CustomerRepository
        + AccountRepository
        + TransactionRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    let use_case = TransactionLookupUseCase::new(state.repo.clone());
    let transactions = use_case
        .by_customer_or_transaction_id(&query.transaction_id, &query.customer_id)
        .await?;

    Ok(Json(
        transactions
            .into_iter()
            .map(TransactionResponse::from)
            .collect(),
    ))
}

/// GET /api/wallet/ministatement?customerId=..&accountNo=..
pub async fn mini_statement<R>(
    State(state): State<WalletAppState<R>>,
    Query(query): Query<MiniStatementQuery>,
) -> WalletResult<Json<Vec<TransactionResponse>>>
where
    R: CustomerRepository
        + AccountRepository
        + TransactionRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    let use_case = TransactionLookupUseCase::new(state.repo.clone());
    let transactions = use_case
        .mini_statement(&query.customer_id, &query.account_no)
        .await?;

    Ok(Json(
        transactions
            .into_iter()
            .map(TransactionResponse::from)
            .collect(),
    ))
}
