//! Contact endpoint handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use domain::models::{Contact, CreateContactRequest, UpdateContactRequest};
use domain::services::ContactError;
use serde::Serialize;

use super::MessageResponse;
use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{JsonBody, RequiredJsonBody};

/// Response for a newly created contact.
#[derive(Debug, Serialize)]
pub struct ContactCreatedResponse {
    pub message: &'static str,
    pub id: i64,
}

/// Parses the `{id}` path segment. Anything that is not an integer names no
/// contact.
fn parse_contact_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::from(ContactError::NotFound))
}

/// List all contacts.
///
/// GET /contacts
pub async fn list_contacts(State(state): State<AppState>) -> Result<Json<Vec<Contact>>, ApiError> {
    Ok(Json(state.contacts.list().await?))
}

/// Get a single contact.
///
/// GET /contacts/:id
pub async fn get_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Contact>, ApiError> {
    let id = parse_contact_id(&id)?;
    Ok(Json(state.contacts.get(id).await?))
}

/// Create a contact.
///
/// POST /contacts
pub async fn create_contact(
    State(state): State<AppState>,
    RequiredJsonBody(request): RequiredJsonBody<CreateContactRequest>,
) -> Result<(StatusCode, Json<ContactCreatedResponse>), ApiError> {
    let contact = state.contacts.create(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(ContactCreatedResponse {
            message: "Contact added",
            id: contact.id,
        }),
    ))
}

/// Partially update a contact.
///
/// PUT /contacts/:id
///
/// An unknown id is reported before the body is looked at.
pub async fn update_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<JsonBody<UpdateContactRequest>, ApiError>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_contact_id(&id)?;
    state.contacts.get(id).await?;

    let JsonBody(request) = body?;
    let contact = state.contacts.update(id, request).await?;
    tracing::info!(contact_id = contact.id, "Contact updated");

    Ok(Json(MessageResponse::new("Contact updated")))
}

/// Delete a contact.
///
/// DELETE /contacts/:id
pub async fn delete_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_contact_id(&id)?;
    state.contacts.delete(id).await?;

    Ok(Json(MessageResponse::new("Contact deleted")))
}
