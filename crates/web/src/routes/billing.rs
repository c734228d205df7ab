//! Billing portal endpoint.

use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::{HeaderMap, Method, StatusCode, header::AUTHORIZATION},
    response::{IntoResponse, Response},
};
use framecraft_core::PortalRequest;
use tracing::instrument;

use crate::error::PortalError;
use crate::services::{CallerToken, billing_portal};
use crate::state::AppState;

/// Create a billing portal session for the caller.
///
/// `OPTIONS` short-circuits as a CORS preflight. Every other method runs the
/// full flow; malformed calls fail on body parsing or authentication. A body
/// the extractor refuses (for example one over the size limit) is a parse
/// failure like any other.
///
/// Success is `200 {"url": ...}`; failures are `{"error", "code"}` with a
/// status chosen by the configured policy.
#[instrument(skip_all, fields(method = %method))]
pub async fn portal_session(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    if method == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }

    let result = async {
        let body = body.map_err(|rejection| PortalError::Parse(rejection.body_text()))?;
        let request = parse_body(&body)?;
        let caller = caller_token(&headers);
        billing_portal::open_portal_session(
            state.profiles(),
            state.billing(),
            caller.as_ref(),
            &request,
        )
        .await
    }
    .await;

    match result {
        Ok(session) => (StatusCode::OK, Json(session)).into_response(),
        Err(err) => err.respond(state.status_policy()),
    }
}

fn parse_body(body: &[u8]) -> Result<PortalRequest, PortalError> {
    serde_json::from_slice(body).map_err(|e| PortalError::Parse(e.to_string()))
}

fn caller_token(headers: &HeaderMap) -> Option<CallerToken> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(CallerToken::from_header)
}
