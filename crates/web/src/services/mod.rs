//! External collaborators and the billing portal flow.
//!
//! # Services
//!
//! - `supabase` - Identity introspection and profile lookups ([`ProfileStore`])
//! - `stripe` - Billing portal session creation ([`BillingProvider`])
//! - `billing_portal` - The request flow tying the two together
//!
//! Handlers only see the traits, so tests can substitute either side.

pub mod billing_portal;
pub mod stripe;
pub mod supabase;

use async_trait::async_trait;
use framecraft_core::{PortalSession, StripeCustomerId, UserId};
use secrecy::{ExposeSecret, SecretString};

pub use stripe::{StripeClient, StripeError};
pub use supabase::{DataStoreError, SupabaseClient};

/// The caller's `Authorization` header, forwarded verbatim to the data store.
#[derive(Clone)]
pub struct CallerToken(SecretString);

impl CallerToken {
    /// Wrap a raw header value. Blank values are treated as absent.
    #[must_use]
    pub fn from_header(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        (!trimmed.is_empty()).then(|| Self(SecretString::from(trimmed.to_string())))
    }

    /// The header value to forward.
    #[must_use]
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl std::fmt::Debug for CallerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("CallerToken([REDACTED])")
    }
}

/// A user resolved from a caller token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub id: UserId,
    pub email: Option<String>,
}

/// Identity and profile reads, scoped to the caller's token.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Resolve the user behind `caller`.
    ///
    /// Returns `Ok(None)` when the token does not identify anyone.
    async fn current_user(&self, caller: &CallerToken) -> Result<Option<AuthUser>, DataStoreError>;

    /// Read the stored billing customer id from the user's profile.
    ///
    /// Returns `Ok(None)` when there is no profile row or the field is unset.
    async fn stripe_customer_id(
        &self,
        caller: &CallerToken,
        user: UserId,
    ) -> Result<Option<StripeCustomerId>, DataStoreError>;
}

/// Payments provider operations.
#[async_trait]
pub trait BillingProvider: Send + Sync {
    /// Create a hosted billing portal session for `customer`.
    async fn create_portal_session(
        &self,
        customer: &StripeCustomerId,
        return_url: Option<&str>,
    ) -> Result<PortalSession, StripeError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caller_token_blank_is_absent() {
        assert!(CallerToken::from_header("").is_none());
        assert!(CallerToken::from_header("   ").is_none());
    }

    #[test]
    fn test_caller_token_debug_redacts() {
        let token = CallerToken::from_header("Bearer eyJhbGciOi.payload.sig");
        let debug = format!("{token:?}");
        assert!(!debug.contains("eyJhbGciOi"));
        assert_eq!(
            token.as_ref().map(CallerToken::expose),
            Some("Bearer eyJhbGciOi.payload.sig")
        );
    }
}
