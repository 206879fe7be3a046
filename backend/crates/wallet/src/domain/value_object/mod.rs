//! Value Object Module

pub mod account_no;
pub mod customer_id;
pub mod email;
pub mod pin;
