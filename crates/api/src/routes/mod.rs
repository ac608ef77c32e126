//! HTTP route handlers.

pub mod auth;
pub mod contacts;
pub mod health;

use serde::Serialize;

/// Body of successful mutations that return nothing else.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}
