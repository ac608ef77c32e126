//! Contact store: the storage seam and the rules around it.

use std::collections::BTreeMap;
use std::sync::Arc;

use shared::validation::{first_error_message, non_empty};
use thiserror::Error;
use tokio::sync::RwLock;
use validator::{Validate, ValidationErrors};

use super::store::StoreError;
use crate::models::{Contact, ContactChanges, CreateContactRequest, NewContact, UpdateContactRequest};

/// Errors returned by contact operations.
#[derive(Debug, Error)]
pub enum ContactError {
    #[error("Contact not found")]
    NotFound,

    #[error("Name and email are required")]
    MissingFields,

    #[error("{0}")]
    Validation(String),

    #[error("Email already exists")]
    EmailTaken,

    #[error("Storage error: {0}")]
    Store(StoreError),
}

impl From<StoreError> for ContactError {
    fn from(err: StoreError) -> Self {
        if err.is_unique_violation() {
            ContactError::EmailTaken
        } else {
            ContactError::Store(err)
        }
    }
}

impl From<ValidationErrors> for ContactError {
    fn from(errors: ValidationErrors) -> Self {
        ContactError::Validation(first_error_message(&errors))
    }
}

/// Storage operations backing the contact store.
///
/// Implementations must enforce email uniqueness and report a collision as
/// [`StoreError::UniqueViolation`].
#[async_trait::async_trait]
pub trait ContactStore: Send + Sync {
    /// All contacts ordered by ascending id.
    async fn list(&self) -> Result<Vec<Contact>, StoreError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Contact>, StoreError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<Contact>, StoreError>;

    /// Persists a contact, assigning `id` and `created_at`.
    async fn insert(&self, contact: NewContact) -> Result<Contact, StoreError>;

    /// Applies changes to an existing row. `Ok(None)` when the id is unknown.
    async fn update(
        &self,
        id: i64,
        changes: ContactChanges,
    ) -> Result<Option<Contact>, StoreError>;

    /// Removes a row. `Ok(false)` when the id is unknown.
    async fn delete(&self, id: i64) -> Result<bool, StoreError>;

    /// Checks that the backend is reachable.
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Contact store operations.
#[derive(Clone)]
pub struct ContactService {
    store: Arc<dyn ContactStore>,
}

impl ContactService {
    pub fn new(store: Arc<dyn ContactStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<Contact>, ContactError> {
        Ok(self.store.list().await?)
    }

    pub async fn get(&self, id: i64) -> Result<Contact, ContactError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(ContactError::NotFound)
    }

    /// Creates a contact.
    ///
    /// `name` and `email` must be present and non-empty; the email must not
    /// belong to another contact.
    pub async fn create(&self, request: CreateContactRequest) -> Result<Contact, ContactError> {
        let (name, email) = match (
            non_empty(request.name.as_deref()),
            non_empty(request.email.as_deref()),
        ) {
            (Some(name), Some(email)) => (name.to_string(), email.to_string()),
            _ => return Err(ContactError::MissingFields),
        };
        request.validate()?;

        if self.store.find_by_email(&email).await?.is_some() {
            return Err(ContactError::EmailTaken);
        }

        // A concurrent insert with the same email still fails on the unique constraint.
        let contact = self
            .store
            .insert(NewContact {
                name,
                email,
                phone: request.phone,
                company: request.company,
            })
            .await?;

        tracing::info!(contact_id = contact.id, "Contact created");
        Ok(contact)
    }

    /// Partially updates a contact; absent fields keep their value.
    pub async fn update(
        &self,
        id: i64,
        request: UpdateContactRequest,
    ) -> Result<Contact, ContactError> {
        let current = self.get(id).await?;
        request.validate()?;

        if let Some(email) = request.email.as_deref() {
            if email != current.email {
                if let Some(other) = self.store.find_by_email(email).await? {
                    if other.id != id {
                        return Err(ContactError::EmailTaken);
                    }
                }
            }
        }

        self.store
            .update(id, request.into())
            .await?
            .ok_or(ContactError::NotFound)
    }

    pub async fn delete(&self, id: i64) -> Result<(), ContactError> {
        if self.store.delete(id).await? {
            tracing::info!(contact_id = id, "Contact deleted");
            Ok(())
        } else {
            Err(ContactError::NotFound)
        }
    }

    pub async fn ping(&self) -> Result<(), StoreError> {
        self.store.ping().await
    }
}

#[derive(Debug, Default)]
struct ContactTable {
    rows: BTreeMap<i64, Contact>,
    last_id: i64,
}

impl ContactTable {
    fn email_taken(&self, email: &str, except: Option<i64>) -> bool {
        self.rows
            .values()
            .any(|c| c.email == email && Some(c.id) != except)
    }
}

/// In-memory contact store for development and testing.
///
/// Ids start at 1 and are never reused, matching a database sequence.
#[derive(Debug, Default)]
pub struct InMemoryContactStore {
    table: RwLock<ContactTable>,
}

impl InMemoryContactStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl ContactStore for InMemoryContactStore {
    async fn list(&self) -> Result<Vec<Contact>, StoreError> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Contact>, StoreError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Contact>, StoreError> {
        Ok(self
            .table
            .read()
            .await
            .rows
            .values()
            .find(|c| c.email == email)
            .cloned())
    }

    async fn insert(&self, contact: NewContact) -> Result<Contact, StoreError> {
        let mut table = self.table.write().await;
        if table.email_taken(&contact.email, None) {
            return Err(StoreError::UniqueViolation("contacts_email_key".into()));
        }

        table.last_id += 1;
        let row = Contact {
            id: table.last_id,
            name: contact.name,
            email: contact.email,
            phone: contact.phone,
            company: contact.company,
            created_at: chrono::Utc::now(),
        };
        table.rows.insert(row.id, row.clone());
        Ok(row)
    }

    async fn update(
        &self,
        id: i64,
        changes: ContactChanges,
    ) -> Result<Option<Contact>, StoreError> {
        let mut table = self.table.write().await;
        let Some(current) = table.rows.get(&id).cloned() else {
            return Ok(None);
        };

        let updated = changes.apply(current);
        if table.email_taken(&updated.email, Some(id)) {
            return Err(StoreError::UniqueViolation("contacts_email_key".into()));
        }

        table.rows.insert(id, updated.clone());
        Ok(Some(updated))
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        Ok(self.table.write().await.rows.remove(&id).is_some())
    }
}
