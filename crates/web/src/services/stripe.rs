//! Stripe API client for billing portal sessions.

use async_trait::async_trait;
use framecraft_core::{PortalSession, StripeCustomerId};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument, warn};

use super::BillingProvider;
use crate::config::StripeConfig;

/// Errors that can occur when interacting with the Stripe API.
///
/// `Display` yields the underlying message so it can be relayed to callers.
#[derive(Debug, Error)]
pub enum StripeError {
    /// HTTP request failed.
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// Stripe rejected the request.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Failed to parse response.
    #[error("Invalid response from Stripe: {0}")]
    Parse(String),
}

/// Stripe API client.
#[derive(Clone)]
pub struct StripeClient {
    client: Client,
    secret_key: SecretString,
    api_base: String,
}

impl std::fmt::Debug for StripeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StripeClient")
            .field("secret_key", &"[REDACTED]")
            .field("api_base", &self.api_base)
            .finish_non_exhaustive()
    }
}

impl StripeClient {
    /// Create a client sharing the given connection pool.
    #[must_use]
    pub fn new(config: &StripeConfig, client: Client) -> Self {
        Self {
            client,
            secret_key: config.secret_key.clone(),
            api_base: config.api_base.as_str().trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/v1/{path}", self.api_base)
    }
}

#[async_trait]
impl BillingProvider for StripeClient {
    #[instrument(skip(self, return_url), fields(customer = %customer))]
    async fn create_portal_session(
        &self,
        customer: &StripeCustomerId,
        return_url: Option<&str>,
    ) -> Result<PortalSession, StripeError> {
        let mut form = vec![("customer", customer.as_str())];
        if let Some(return_url) = return_url {
            form.push(("return_url", return_url));
        }

        let response = self
            .client
            .post(self.endpoint("billing_portal/sessions"))
            .bearer_auth(self.secret_key.expose_secret())
            .form(&form)
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = api_error_message(&body)
                .unwrap_or_else(|| format!("Stripe request failed with status {status}"));
            warn!(status = status.as_u16(), %message, "Stripe rejected portal session");
            return Err(StripeError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let session: PortalSession = response
            .json()
            .await
            .map_err(|e| StripeError::Parse(e.to_string()))?;
        debug!("Billing portal session created");
        Ok(session)
    }
}

/// Stripe error envelope: `{"error": {"message": "...", "type": "..."}}`.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Extract the human-readable message from a Stripe error body.
fn api_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .and_then(|envelope| envelope.error.message)
        .filter(|message| !message.is_empty())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use url::Url;

    use super::*;

    #[test]
    fn test_api_error_message() {
        let body = r#"{"error":{"code":"resource_missing","message":"No such customer: 'cus_404'","type":"invalid_request_error"}}"#;
        assert_eq!(
            api_error_message(body).as_deref(),
            Some("No such customer: 'cus_404'")
        );
    }

    #[test]
    fn test_api_error_message_unparseable() {
        assert_eq!(api_error_message("<html>502</html>"), None);
        assert_eq!(api_error_message(r#"{"error":{"message":""}}"#), None);
    }

    #[test]
    fn test_api_error_displays_provider_message() {
        let err = StripeError::Api {
            status: 400,
            message: "No such customer: 'cus_404'".to_string(),
        };
        assert_eq!(err.to_string(), "No such customer: 'cus_404'");
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let config = StripeConfig {
            secret_key: SecretString::from("sk_test_51Hq8vKJf2nQpR7tLw"),
            api_base: Url::parse("http://127.0.0.1:4010/").unwrap(),
        };
        let client = StripeClient::new(&config, Client::new());
        assert_eq!(
            client.endpoint("billing_portal/sessions"),
            "http://127.0.0.1:4010/v1/billing_portal/sessions"
        );
        assert!(!format!("{client:?}").contains("sk_test"));
    }
}
