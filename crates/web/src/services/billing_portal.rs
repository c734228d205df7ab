//! Billing portal flow: authenticate, resolve the customer, open a session.

use framecraft_core::{PortalRequest, PortalSession, StripeCustomerId};
use tracing::{debug, instrument};

use super::{AuthUser, BillingProvider, CallerToken, ProfileStore};
use crate::error::{PortalError, Result, set_sentry_user};

/// Run the portal flow for one request.
///
/// Strictly sequential: the caller is authenticated before the customer id
/// is resolved, and the id is resolved before the provider is called. No
/// step is retried.
///
/// # Errors
///
/// - [`PortalError::Unauthenticated`] if no user resolves from `caller`
/// - [`PortalError::CustomerNotFound`] if neither the request nor the profile
///   carries a customer id
/// - [`PortalError::Parse`] if the explicit customer id is malformed
/// - [`PortalError::DataStore`] / [`PortalError::Billing`] on upstream failures
#[instrument(skip_all)]
pub async fn open_portal_session(
    profiles: &dyn ProfileStore,
    billing: &dyn BillingProvider,
    caller: Option<&CallerToken>,
    request: &PortalRequest,
) -> Result<PortalSession> {
    let caller = caller.ok_or(PortalError::Unauthenticated)?;
    let user = profiles
        .current_user(caller)
        .await?
        .ok_or(PortalError::Unauthenticated)?;
    set_sentry_user(&user.id, user.email.as_deref());

    let customer = resolve_customer(profiles, caller, &user, request).await?;
    debug!(customer = %customer, "Resolved billing customer");

    let session = billing
        .create_portal_session(&customer, request.return_url())
        .await?;
    Ok(session)
}

/// Prefer the id in the request; fall back to the stored profile.
async fn resolve_customer(
    profiles: &dyn ProfileStore,
    caller: &CallerToken,
    user: &AuthUser,
    request: &PortalRequest,
) -> Result<StripeCustomerId> {
    let explicit = request
        .explicit_customer_id()
        .map_err(|e| PortalError::Parse(format!("customerId: {e}")))?;
    if let Some(customer) = explicit {
        return Ok(customer);
    }

    profiles
        .stripe_customer_id(caller, user.id)
        .await?
        .ok_or(PortalError::CustomerNotFound)
}
