//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::{StatusPolicy, WebConfig};
use crate::services::{BillingProvider, ProfileStore, StripeClient, SupabaseClient};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. It holds the external
/// collaborators behind traits so tests can substitute them.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    profiles: Arc<dyn ProfileStore>,
    billing: Arc<dyn BillingProvider>,
    status_policy: StatusPolicy,
}

impl AppState {
    /// Build state with the real Supabase and Stripe clients.
    ///
    /// Both clients share one connection pool with the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built (e.g. TLS backend
    /// initialization fails).
    pub fn new(config: &WebConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .connect_timeout(config.http_timeout)
            .build()?;

        let profiles = SupabaseClient::new(&config.supabase, http.clone());
        let billing = StripeClient::new(&config.stripe, http);

        Ok(Self::from_parts(
            Arc::new(profiles),
            Arc::new(billing),
            config.status_policy,
        ))
    }

    /// Build state from explicit collaborators.
    #[must_use]
    pub fn from_parts(
        profiles: Arc<dyn ProfileStore>,
        billing: Arc<dyn BillingProvider>,
        status_policy: StatusPolicy,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                profiles,
                billing,
                status_policy,
            }),
        }
    }

    /// Get the identity/profile store.
    #[must_use]
    pub fn profiles(&self) -> &dyn ProfileStore {
        self.inner.profiles.as_ref()
    }

    /// Get the payments provider.
    #[must_use]
    pub fn billing(&self) -> &dyn BillingProvider {
        self.inner.billing.as_ref()
    }

    /// Get the status mapping for billing failures.
    #[must_use]
    pub fn status_policy(&self) -> StatusPolicy {
        self.inner.status_policy
    }
}
