//! Discovery and JWKS endpoint handlers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::error::OidcError;

use super::state::{ApplicationStore, OidcState};

/// `GET /.well-known/openid-configuration`.
pub async fn well_known<S: ApplicationStore>(
    State(state): State<OidcState<S>>,
) -> impl IntoResponse {
    match state.provider.discovery_document() {
        Ok(metadata) => (StatusCode::OK, Json(metadata)).into_response(),
        Err(err) => error_response(&err),
    }
}

/// `GET /oauth/discovery/keys`.
pub async fn jwks<S: ApplicationStore>(State(state): State<OidcState<S>>) -> impl IntoResponse {
    match state.provider.jwks() {
        Ok(keys) => (StatusCode::OK, Json(keys)).into_response(),
        Err(err) => error_response(&err),
    }
}

/// Maps a protocol error to its HTTP response. Server-side failures are
/// logged here, at the edge.
pub(super) fn error_response(err: &OidcError) -> Response {
    let status = StatusCode::from_u16(err.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    if status.is_server_error() {
        tracing::error!(error = %err, "request failed");
    }
    (status, Json(err.to_error_response())).into_response()
}
