//! Integration tests for Framecraft.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p framecraft-integration-tests
//! ```
//!
//! No external services are needed: the billing flow is driven with the
//! substitute collaborators below, and the real HTTP clients are pointed at
//! fake upstreams served on an ephemeral local port.
//!
//! # Test Categories
//!
//! - `billing_portal` - Billing endpoint contract
//! - `sidebar` - Navigation fragment
//! - `upstream_clients` - Supabase and Stripe clients against fake upstreams

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use framecraft_core::{PortalSession, StripeCustomerId, UserId};
use framecraft_web::config::StatusPolicy;
use framecraft_web::routes;
use framecraft_web::services::{
    AuthUser, BillingProvider, CallerToken, DataStoreError, ProfileStore, StripeError,
};
use framecraft_web::state::AppState;
use tower::ServiceExt;

/// The only token [`FakeProfiles`] accepts.
pub const VALID_TOKEN: &str = "Bearer valid-session-token";

// =============================================================================
// Substitute collaborators
// =============================================================================

/// In-memory identity and profile store.
#[derive(Default)]
pub struct FakeProfiles {
    /// User returned for [`VALID_TOKEN`].
    pub user: Option<UserId>,
    /// Stored `stripe_customer_id` for that user.
    pub stored_customer: Option<String>,
    /// Fail every call with this message.
    pub fail_with: Option<String>,
    /// Number of profile lookups performed.
    pub lookups: Mutex<u32>,
}

impl FakeProfiles {
    /// A store where [`VALID_TOKEN`] resolves to a fresh user.
    #[must_use]
    pub fn signed_in() -> Self {
        Self {
            user: Some(UserId::new(uuid::Uuid::new_v4())),
            ..Self::default()
        }
    }

    /// Set the stored customer id.
    #[must_use]
    pub fn with_customer(mut self, customer: &str) -> Self {
        self.stored_customer = Some(customer.to_string());
        self
    }

    /// Number of profile lookups so far.
    #[must_use]
    pub fn lookup_count(&self) -> u32 {
        *self.lookups.lock().expect("lock poisoned")
    }

    fn check_failure(&self) -> Result<(), DataStoreError> {
        match &self.fail_with {
            Some(message) => Err(DataStoreError::Api {
                status: 503,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ProfileStore for FakeProfiles {
    async fn current_user(&self, caller: &CallerToken) -> Result<Option<AuthUser>, DataStoreError> {
        self.check_failure()?;
        if caller.expose() != VALID_TOKEN {
            return Ok(None);
        }
        Ok(self.user.map(|id| AuthUser { id, email: None }))
    }

    async fn stripe_customer_id(
        &self,
        _caller: &CallerToken,
        _user: UserId,
    ) -> Result<Option<StripeCustomerId>, DataStoreError> {
        *self.lookups.lock().expect("lock poisoned") += 1;
        self.check_failure()?;
        self.stored_customer
            .as_deref()
            .map(StripeCustomerId::parse)
            .transpose()
            .map_err(DataStoreError::from)
    }
}

/// Records portal session requests and answers with a canned URL or error.
#[derive(Default)]
pub struct FakeBilling {
    /// `(customer, return_url)` for every call.
    pub calls: Mutex<Vec<(String, Option<String>)>>,
    /// Reject every call with this message.
    pub fail_with: Option<String>,
}

impl FakeBilling {
    /// A provider that rejects every call with `message`.
    #[must_use]
    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Self::default()
        }
    }

    /// Recorded calls so far.
    #[must_use]
    pub fn recorded(&self) -> Vec<(String, Option<String>)> {
        self.calls.lock().expect("lock poisoned").clone()
    }

    /// The URL returned for `customer`.
    #[must_use]
    pub fn session_url(customer: &str) -> String {
        format!("https://billing.stripe.com/p/session/test_{customer}")
    }
}

#[async_trait]
impl BillingProvider for FakeBilling {
    async fn create_portal_session(
        &self,
        customer: &StripeCustomerId,
        return_url: Option<&str>,
    ) -> Result<PortalSession, StripeError> {
        self.calls
            .lock()
            .expect("lock poisoned")
            .push((customer.to_string(), return_url.map(String::from)));

        if let Some(message) = &self.fail_with {
            return Err(StripeError::Api {
                status: 400,
                message: message.clone(),
            });
        }

        Ok(PortalSession {
            url: Self::session_url(customer.as_str()),
        })
    }
}

// =============================================================================
// Harness
// =============================================================================

/// Application under test with handles to its collaborators.
pub struct TestApp {
    pub profiles: Arc<FakeProfiles>,
    pub billing: Arc<FakeBilling>,
    router: Router,
}

impl TestApp {
    /// Build the full application around the given fakes.
    #[must_use]
    pub fn new(profiles: FakeProfiles, billing: FakeBilling, policy: StatusPolicy) -> Self {
        let profiles = Arc::new(profiles);
        let billing = Arc::new(billing);
        let state = AppState::from_parts(profiles.clone(), billing.clone(), policy);
        Self {
            profiles,
            billing,
            router: routes::app(state),
        }
    }

    /// Send one request through the router.
    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible")
    }
}

/// Collect a response body as a UTF-8 string.
pub async fn body_string(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    String::from_utf8(bytes.to_vec()).expect("body should be UTF-8")
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let text = body_string(response).await;
    serde_json::from_str(&text).expect("body should be JSON")
}

/// Serve `router` on an ephemeral local port and return its address.
pub async fn serve(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("listener has an address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("fake upstream");
    });
    addr
}
