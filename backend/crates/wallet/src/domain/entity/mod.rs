//! Entity Module

pub mod account;
pub mod customer;
pub mod transaction;
