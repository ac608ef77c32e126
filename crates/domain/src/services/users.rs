//! User store: registration and credential checks.

use std::collections::BTreeMap;
use std::sync::Arc;

use shared::password::{PasswordError, PasswordHashing};
use shared::validation::{first_error_message, non_empty};
use thiserror::Error;
use tokio::sync::RwLock;
use validator::{Validate, ValidationErrors};

use super::store::StoreError;
use crate::models::{CredentialsRequest, NewUser, User};

/// Errors returned by user operations.
#[derive(Debug, Error)]
pub enum UserError {
    #[error("Email and password are required")]
    MissingCredentials,

    #[error("{0}")]
    Validation(String),

    #[error("Email already registered")]
    EmailTaken,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Storage error: {0}")]
    Store(StoreError),
}

impl From<StoreError> for UserError {
    fn from(err: StoreError) -> Self {
        if err.is_unique_violation() {
            UserError::EmailTaken
        } else {
            UserError::Store(err)
        }
    }
}

impl From<ValidationErrors> for UserError {
    fn from(errors: ValidationErrors) -> Self {
        UserError::Validation(first_error_message(&errors))
    }
}

/// Storage operations backing the user store.
#[async_trait::async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Persists a user, assigning `id` and `created_at`.
    async fn insert(&self, user: NewUser) -> Result<User, StoreError>;

    /// Checks that the backend is reachable.
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// User store operations.
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
    hasher: Arc<dyn PasswordHashing>,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>, hasher: Arc<dyn PasswordHashing>) -> Self {
        Self { store, hasher }
    }

    /// Registers a new user, storing only the password digest.
    pub async fn register(&self, request: CredentialsRequest) -> Result<User, UserError> {
        let (email, password) = required_credentials(&request)?;
        request.validate()?;

        if self.store.find_by_email(email).await?.is_some() {
            return Err(UserError::EmailTaken);
        }

        let password_hash = self.hasher.hash(password)?;
        let user = self
            .store
            .insert(NewUser {
                email: email.to_string(),
                password_hash,
            })
            .await?;

        tracing::info!(user_id = user.id, "User registered");
        Ok(user)
    }

    /// Checks credentials. Unknown email and wrong password are indistinguishable.
    ///
    /// Nothing is issued on success; every request authenticates on its own.
    pub async fn authenticate(&self, request: CredentialsRequest) -> Result<User, UserError> {
        let (email, password) = required_credentials(&request)?;

        let user = self
            .store
            .find_by_email(email)
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        if self.hasher.verify(password, &user.password_hash)? {
            Ok(user)
        } else {
            tracing::debug!(user_id = user.id, "Password mismatch");
            Err(UserError::InvalidCredentials)
        }
    }

    pub async fn ping(&self) -> Result<(), StoreError> {
        self.store.ping().await
    }
}

fn required_credentials(request: &CredentialsRequest) -> Result<(&str, &str), UserError> {
    match (
        non_empty(request.email.as_deref()),
        non_empty(request.password.as_deref()),
    ) {
        (Some(email), Some(password)) => Ok((email, password)),
        _ => Err(UserError::MissingCredentials),
    }
}

#[derive(Debug, Default)]
struct UserTable {
    rows: BTreeMap<i64, User>,
    last_id: i64,
}

/// In-memory user store for development and testing.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    table: RwLock<UserTable>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self
            .table
            .read()
            .await
            .rows
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn insert(&self, user: NewUser) -> Result<User, StoreError> {
        let mut table = self.table.write().await;
        if table.rows.values().any(|u| u.email == user.email) {
            return Err(StoreError::UniqueViolation("users_email_key".into()));
        }

        table.last_id += 1;
        let row = User {
            id: table.last_id,
            email: user.email,
            password_hash: user.password_hash,
            created_at: chrono::Utc::now(),
        };
        table.rows.insert(row.id, row.clone());
        Ok(row)
    }
}
