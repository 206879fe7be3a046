//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (random bytes, lowercase hex)
//! - PIN hashing (Argon2id, salted, constant-time verification)

pub mod crypto;
pub mod pin;
