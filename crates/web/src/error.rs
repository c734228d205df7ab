//! Billing portal error handling with Sentry integration.
//!
//! `PortalError` keeps failure kinds apart so they can be logged, reported,
//! and (optionally) mapped to distinct status codes. The response body is
//! always `{"error": <message>, "code": <kind>}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::config::StatusPolicy;
use crate::services::{DataStoreError, StripeError};

/// Failures of the billing portal flow.
#[derive(Debug, Error)]
pub enum PortalError {
    /// No user resolves from the forwarded token.
    #[error("User not authenticated")]
    Unauthenticated,

    /// No billing customer id in the request or the stored profile.
    #[error("No Stripe customer found")]
    CustomerNotFound,

    /// The data store failed.
    #[error(transparent)]
    DataStore(#[from] DataStoreError),

    /// The payments provider failed.
    #[error(transparent)]
    Billing(#[from] StripeError),

    /// The request body could not be decoded.
    #[error("{0}")]
    Parse(String),
}

/// Coarse failure category, exposed to clients as `code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Authentication,
    Resolution,
    Upstream,
    Parse,
}

impl ErrorKind {
    /// Status code for this kind when kinds are distinguished.
    #[must_use]
    pub const fn distinct_status(self) -> StatusCode {
        match self {
            Self::Authentication => StatusCode::UNAUTHORIZED,
            Self::Resolution => StatusCode::NOT_FOUND,
            Self::Upstream => StatusCode::BAD_GATEWAY,
            Self::Parse => StatusCode::BAD_REQUEST,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    code: ErrorKind,
}

impl PortalError {
    /// The failure category.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Unauthenticated => ErrorKind::Authentication,
            Self::CustomerNotFound => ErrorKind::Resolution,
            Self::DataStore(_) | Self::Billing(_) => ErrorKind::Upstream,
            Self::Parse(_) => ErrorKind::Parse,
        }
    }

    /// Status code under the given policy.
    #[must_use]
    pub const fn status(&self, policy: StatusPolicy) -> StatusCode {
        match policy {
            StatusPolicy::Uniform => StatusCode::BAD_REQUEST,
            StatusPolicy::Distinct => self.kind().distinct_status(),
        }
    }

    /// Log the error and build the JSON response.
    pub fn respond(self, policy: StatusPolicy) -> Response {
        let kind = self.kind();

        if kind == ErrorKind::Upstream {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Billing portal upstream failure"
            );
        } else {
            tracing::warn!(error = %self, code = ?kind, "Billing portal request rejected");
        }

        let body = ErrorBody {
            error: self.to_string(),
            code: kind,
        };
        (self.status(policy), Json(body)).into_response()
    }
}

/// Result type alias for `PortalError`.
pub type Result<T> = std::result::Result<T, PortalError>;

/// Set the Sentry user context from a user ID.
///
/// Call this after successful authentication to associate errors with users.
pub fn set_sentry_user(user_id: &impl ToString, email: Option<&str>) {
    sentry::configure_scope(|scope| {
        scope.set_user(Some(sentry::User {
            id: Some(user_id.to_string()),
            email: email.map(String::from),
            ..Default::default()
        }));
    });
}
