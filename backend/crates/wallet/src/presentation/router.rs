//! Wallet Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::WalletConfig;
use crate::domain::repository::{AccountRepository, CustomerRepository, TransactionRepository};
use crate::infra::postgres::PgWalletRepository;
use crate::presentation::handlers::{self, WalletAppState};

/// Create the Wallet router with PostgreSQL repository
pub fn wallet_router(repo: PgWalletRepository, config: WalletConfig) -> Router {
    wallet_router_generic(repo, config)
}

/// Create a generic Wallet router for any repository implementation
pub fn wallet_router_generic<R>(repo: R, config: WalletConfig) -> Router
where
    R: CustomerRepository
        + AccountRepository
        + TransactionRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    let state = WalletAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route(
            "/customers",
            post(handlers::create_customer::<R>).get(handlers::list_customers::<R>),
        )
        .route("/customers/login", post(handlers::login::<R>))
        .route("/customers/search", get(handlers::search_customers::<R>))
        .route(
            "/customers/{customer_id}",
            axum::routing::delete(handlers::delete_customer::<R>),
        )
        .route("/transactions", get(handlers::search_transactions::<R>))
        .route(
            "/transactions/customer/{customer_id}",
            get(handlers::transactions_by_customer::<R>),
        )
        .route(
            "/transactions/id/{transaction_id}",
            get(handlers::transactions_by_id::<R>),
        )
        .route("/ministatement", get(handlers::mini_statement::<R>))
        .with_state(state)
}
