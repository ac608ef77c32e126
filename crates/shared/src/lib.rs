//! Shared utilities for the Contact Book backend.
//!
//! This crate provides functionality used across the other crates:
//! - Password hashing with Argon2id behind the `PasswordHashing` capability
//! - Common validation helpers and field limits

pub mod password;
pub mod validation;

pub use password::{Argon2PasswordHasher, PasswordError, PasswordHashing};
