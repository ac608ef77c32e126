//! Domain layer for the Contact Book backend.
//!
//! This crate contains:
//! - Domain models (Contact, User) and request payloads
//! - Store traits describing the storage seam
//! - Contact and user services holding the business rules
//! - Domain error types

pub mod models;
pub mod services;
