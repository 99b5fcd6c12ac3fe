//! Dynamic client registration endpoint handler.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::discovery::client_auth_methods;
use crate::registration::{validate, NormalizedRegistration, RegistrationRequest, RegistrationResponse};

use super::discovery::error_response;
use super::state::{ApplicationStore, OidcState};

/// `POST /oauth/register`.
///
/// Validates the request, persists the application and returns the issued
/// credentials with `201 Created`. Validation failures come back as
/// `400 invalid_client_params`.
pub async fn register<S: ApplicationStore>(
    State(state): State<OidcState<S>>,
    Json(request): Json<RegistrationRequest>,
) -> impl IntoResponse {
    let registration = match validate(&request) {
        Ok(registration) => registration,
        Err(err) => {
            return (StatusCode::BAD_REQUEST, Json(err.to_error_response())).into_response();
        }
    };

    match create_client(&state, registration).await {
        Ok(response) => (StatusCode::CREATED, Json(response)).into_response(),
        Err(err) => error_response(&err),
    }
}

async fn create_client<S: ApplicationStore>(
    state: &OidcState<S>,
    mut registration: NormalizedRegistration,
) -> crate::error::OidcResult<RegistrationResponse> {
    if registration.scope.is_none() {
        registration.scope = Some(state.provider.config.default_scope());
    }

    let application = state.store.create_application(registration).await?;
    tracing::debug!(client_id = %application.client_id, "registered client");

    Ok(RegistrationResponse {
        client_secret: application.client_secret,
        client_id: application.client_id,
        client_id_issued_at: application.created_at.timestamp(),
        redirect_uris: application.redirect_uris,
        token_endpoint_auth_methods_supported: client_auth_methods(),
        response_types: state.provider.config.response_types.clone(),
        grant_types: state.provider.grant_types_supported(),
        scope: application.scope,
        application_type: "web".to_string(),
    })
}
