//! Billing portal request and session payloads.

use serde::{Deserialize, Serialize};

use super::customer::{CustomerIdError, StripeCustomerId};

/// Body of a billing portal request.
///
/// Field names follow the browser client's camelCase JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortalRequest {
    /// Explicit billing customer id. Takes precedence over the stored profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    /// Where the provider sends the customer when they leave the portal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,
}

impl PortalRequest {
    /// The explicitly requested customer id, if one was supplied.
    ///
    /// An empty string counts as "not supplied" so the stored profile is
    /// consulted instead.
    ///
    /// # Errors
    ///
    /// Returns an error if a non-empty id fails structural validation.
    pub fn explicit_customer_id(&self) -> Result<Option<StripeCustomerId>, CustomerIdError> {
        match self.customer_id.as_deref() {
            None | Some("") => Ok(None),
            Some(raw) => StripeCustomerId::parse(raw).map(Some),
        }
    }

    /// The return URL, if one was supplied and is non-empty.
    #[must_use]
    pub fn return_url(&self) -> Option<&str> {
        self.return_url.as_deref().filter(|url| !url.is_empty())
    }
}

/// A provider-hosted billing portal session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortalSession {
    /// Time-limited URL of the hosted portal page.
    pub url: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case() {
        let req: PortalRequest = serde_json::from_str(
            r#"{"customerId":"cus_999","returnUrl":"https://app.example.com/settings"}"#,
        )
        .unwrap();
        assert_eq!(req.customer_id.as_deref(), Some("cus_999"));
        assert_eq!(req.return_url(), Some("https://app.example.com/settings"));
    }

    #[test]
    fn test_missing_fields_default_to_none() {
        let req: PortalRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req, PortalRequest::default());
        assert_eq!(req.explicit_customer_id(), Ok(None));
        assert_eq!(req.return_url(), None);
    }

    #[test]
    fn test_empty_customer_id_is_not_explicit() {
        let req = PortalRequest {
            customer_id: Some(String::new()),
            return_url: None,
        };
        assert_eq!(req.explicit_customer_id(), Ok(None));
    }

    #[test]
    fn test_explicit_customer_id_is_parsed() {
        let req = PortalRequest {
            customer_id: Some("cus_999".to_string()),
            return_url: None,
        };
        let id = req.explicit_customer_id().unwrap().unwrap();
        assert_eq!(id.as_str(), "cus_999");
    }

    #[test]
    fn test_explicit_customer_id_rejects_whitespace() {
        let req = PortalRequest {
            customer_id: Some("cus 999".to_string()),
            return_url: None,
        };
        assert_eq!(
            req.explicit_customer_id(),
            Err(CustomerIdError::InvalidCharacter)
        );
    }

    #[test]
    fn test_session_serializes_url_only() {
        let session = PortalSession {
            url: "https://billing.stripe.com/p/session/test_123".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&session).unwrap(),
            serde_json::json!({"url": "https://billing.stripe.com/p/session/test_123"})
        );
    }
}
