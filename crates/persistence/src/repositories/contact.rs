//! Contact repository for database operations.

use domain::models::{Contact, ContactChanges, NewContact};
use domain::services::{ContactStore, StoreError};
use sqlx::PgPool;

use super::store_error;
use crate::entities::ContactEntity;
use crate::metrics::QueryTimer;

/// Repository for contact-related database operations.
#[derive(Clone)]
pub struct ContactRepository {
    pool: PgPool,
}

impl ContactRepository {
    /// Creates a new ContactRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl ContactStore for ContactRepository {
    async fn list(&self) -> Result<Vec<Contact>, StoreError> {
        let timer = QueryTimer::new("list_contacts");
        let result = sqlx::query_as::<_, ContactEntity>(
            r#"
            SELECT id, name, email, phone, company, created_at
            FROM contacts
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();

        let rows = result.map_err(store_error)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Contact>, StoreError> {
        let timer = QueryTimer::new("find_contact_by_id");
        let result = sqlx::query_as::<_, ContactEntity>(
            r#"
            SELECT id, name, email, phone, company, created_at
            FROM contacts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();

        Ok(result.map_err(store_error)?.map(Into::into))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Contact>, StoreError> {
        let timer = QueryTimer::new("find_contact_by_email");
        let result = sqlx::query_as::<_, ContactEntity>(
            r#"
            SELECT id, name, email, phone, company, created_at
            FROM contacts
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await;
        timer.record();

        Ok(result.map_err(store_error)?.map(Into::into))
    }

    async fn insert(&self, contact: NewContact) -> Result<Contact, StoreError> {
        let timer = QueryTimer::new("create_contact");
        let result = sqlx::query_as::<_, ContactEntity>(
            r#"
            INSERT INTO contacts (name, email, phone, company)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, phone, company, created_at
            "#,
        )
        .bind(&contact.name)
        .bind(&contact.email)
        .bind(&contact.phone)
        .bind(&contact.company)
        .fetch_one(&self.pool)
        .await;
        timer.record();

        Ok(result.map_err(store_error)?.into())
    }

    async fn update(
        &self,
        id: i64,
        changes: ContactChanges,
    ) -> Result<Option<Contact>, StoreError> {
        // Optional columns carry a "present" flag so NULL can be written explicitly
        let (set_phone, phone) = match changes.phone {
            Some(value) => (true, value),
            None => (false, None),
        };
        let (set_company, company) = match changes.company {
            Some(value) => (true, value),
            None => (false, None),
        };

        let timer = QueryTimer::new("update_contact");
        let result = sqlx::query_as::<_, ContactEntity>(
            r#"
            UPDATE contacts
            SET name = COALESCE($2, name),
                email = COALESCE($3, email),
                phone = CASE WHEN $4::boolean THEN $5 ELSE phone END,
                company = CASE WHEN $6::boolean THEN $7 ELSE company END
            WHERE id = $1
            RETURNING id, name, email, phone, company, created_at
            "#,
        )
        .bind(id)
        .bind(changes.name)
        .bind(changes.email)
        .bind(set_phone)
        .bind(phone)
        .bind(set_company)
        .bind(company)
        .fetch_optional(&self.pool)
        .await;
        timer.record();

        Ok(result.map_err(store_error)?.map(Into::into))
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let timer = QueryTimer::new("delete_contact");
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;
        timer.record();

        Ok(result.map_err(store_error)?.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(store_error)
    }
}
