//! Supabase client for session introspection and profile reads.
//!
//! Every request carries the project's anonymous key as `apikey` and the
//! caller's own `Authorization` header, so row-level security applies as if
//! the caller queried the store directly.

use async_trait::async_trait;
use framecraft_core::{CustomerIdError, StripeCustomerId, UserId};
use reqwest::{Client, RequestBuilder, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument};

use super::{AuthUser, CallerToken, ProfileStore};
use crate::config::SupabaseConfig;

/// Errors that can occur when talking to the data store.
#[derive(Debug, Error)]
pub enum DataStoreError {
    /// HTTP request failed.
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// The store returned an error response.
    #[error("Data store error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response.
    #[error("Invalid data store response: {0}")]
    Parse(String),

    /// A stored customer id is malformed.
    #[error("Stored customer id is invalid: {0}")]
    InvalidCustomerId(#[from] CustomerIdError),
}

/// Supabase REST client.
#[derive(Clone)]
pub struct SupabaseClient {
    client: Client,
    base_url: String,
    anon_key: SecretString,
}

impl std::fmt::Debug for SupabaseClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupabaseClient")
            .field("base_url", &self.base_url)
            .field("anon_key", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl SupabaseClient {
    /// Create a client sharing the given connection pool.
    #[must_use]
    pub fn new(config: &SupabaseConfig, client: Client) -> Self {
        Self {
            client,
            base_url: config.url.as_str().trim_end_matches('/').to_string(),
            anon_key: config.anon_key.clone(),
        }
    }

    /// Start a GET request scoped to the caller.
    fn scoped_get(&self, path: &str, caller: &CallerToken) -> RequestBuilder {
        self.client
            .get(format!("{}/{path}", self.base_url))
            .header("apikey", self.anon_key.expose_secret())
            .header(reqwest::header::AUTHORIZATION, caller.expose())
    }
}

#[async_trait]
impl ProfileStore for SupabaseClient {
    #[instrument(skip_all)]
    async fn current_user(&self, caller: &CallerToken) -> Result<Option<AuthUser>, DataStoreError> {
        let response = self.scoped_get("auth/v1/user", caller).send().await?;
        let status = response.status();

        // Rejected tokens mean "nobody", not a store failure.
        if matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) {
            debug!(status = status.as_u16(), "Caller token rejected");
            return Ok(None);
        }

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(DataStoreError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let user: UserResponse = response
            .json()
            .await
            .map_err(|e| DataStoreError::Parse(e.to_string()))?;

        Ok(Some(AuthUser {
            id: user.id,
            email: user.email,
        }))
    }

    #[instrument(skip(self, caller), fields(user_id = %user))]
    async fn stripe_customer_id(
        &self,
        caller: &CallerToken,
        user: UserId,
    ) -> Result<Option<StripeCustomerId>, DataStoreError> {
        let id_filter = format!("eq.{user}");
        let response = self
            .scoped_get("rest/v1/profiles", caller)
            .query(&[("select", "stripe_customer_id"), ("id", id_filter.as_str())])
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(DataStoreError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let rows: Vec<ProfileRow> = response
            .json()
            .await
            .map_err(|e| DataStoreError::Parse(e.to_string()))?;

        stored_customer_id(rows)
    }
}

/// Pick the customer id out of the profile rows for one user.
fn stored_customer_id(rows: Vec<ProfileRow>) -> Result<Option<StripeCustomerId>, DataStoreError> {
    let stored = rows
        .into_iter()
        .next()
        .and_then(|row| row.stripe_customer_id)
        .filter(|id| !id.is_empty());

    match stored {
        Some(raw) => Ok(Some(StripeCustomerId::parse(&raw)?)),
        None => Ok(None),
    }
}

/// Body of `GET /auth/v1/user`.
#[derive(Debug, Deserialize)]
struct UserResponse {
    id: UserId,
    email: Option<String>,
}

/// A `profiles` row restricted to the billing column.
#[derive(Debug, Deserialize)]
struct ProfileRow {
    stripe_customer_id: Option<String>,
}
