//! Registration and login handlers.

use axum::{extract::State, http::StatusCode, Json};
use domain::models::CredentialsRequest;

use super::MessageResponse;
use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::RequiredJsonBody;

/// Register a new user with email and password.
///
/// POST /register
pub async fn register(
    State(state): State<AppState>,
    RequiredJsonBody(request): RequiredJsonBody<CredentialsRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    state.users.register(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User registered successfully")),
    ))
}

/// Check a user's credentials.
///
/// POST /login
///
/// No session or token is issued.
pub async fn login(
    State(state): State<AppState>,
    RequiredJsonBody(request): RequiredJsonBody<CredentialsRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let user = state.users.authenticate(request).await?;
    tracing::info!(user_id = user.id, "User logged in");

    Ok(Json(MessageResponse::new("Login successful")))
}
