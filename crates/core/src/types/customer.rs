//! Billing customer identifier type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`StripeCustomerId`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CustomerIdError {
    /// The input string is empty.
    #[error("customer id cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("customer id must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input contains whitespace or control characters.
    #[error("customer id cannot contain whitespace or control characters")]
    InvalidCharacter,
}

/// A payments-provider customer identifier (e.g. `cus_NffrFeUfNV2Hib`).
///
/// The provider owns the format, so only structural checks are made here:
/// the provider itself rejects ids that do not exist.
///
/// ## Constraints
///
/// - Length: 1-255 characters
/// - No whitespace or control characters
///
/// ## Examples
///
/// ```
/// use framecraft_core::StripeCustomerId;
///
/// assert!(StripeCustomerId::parse("cus_123").is_ok());
///
/// assert!(StripeCustomerId::parse("").is_err());
/// assert!(StripeCustomerId::parse("cus 123").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct StripeCustomerId(String);

impl StripeCustomerId {
    /// Maximum length accepted for a customer id.
    pub const MAX_LENGTH: usize = 255;

    /// Parse a `StripeCustomerId` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input:
    /// - Is empty
    /// - Is longer than 255 characters
    /// - Contains whitespace or control characters
    pub fn parse(s: &str) -> Result<Self, CustomerIdError> {
        if s.is_empty() {
            return Err(CustomerIdError::Empty);
        }

        if s.len() > Self::MAX_LENGTH {
            return Err(CustomerIdError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        if s.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(CustomerIdError::InvalidCharacter);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the customer id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the id and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for StripeCustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for StripeCustomerId {
    type Err = CustomerIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for StripeCustomerId {
    type Error = CustomerIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<StripeCustomerId> for String {
    fn from(id: StripeCustomerId) -> Self {
        id.0
    }
}

impl AsRef<str> for StripeCustomerId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_ids() {
        assert!(StripeCustomerId::parse("cus_123").is_ok());
        assert!(StripeCustomerId::parse("cus_NffrFeUfNV2Hib").is_ok());
        assert!(StripeCustomerId::parse("x").is_ok());
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(StripeCustomerId::parse(""), Err(CustomerIdError::Empty));
    }

    #[test]
    fn test_parse_too_long() {
        let long = format!("cus_{}", "a".repeat(260));
        assert!(matches!(
            StripeCustomerId::parse(&long),
            Err(CustomerIdError::TooLong { .. })
        ));
    }

    #[test]
    fn test_parse_whitespace() {
        assert_eq!(
            StripeCustomerId::parse(" cus_123"),
            Err(CustomerIdError::InvalidCharacter)
        );
        assert_eq!(
            StripeCustomerId::parse("cus_1\n23"),
            Err(CustomerIdError::InvalidCharacter)
        );
    }

    #[test]
    fn test_serde_rejects_invalid() {
        let parsed: Result<StripeCustomerId, _> = serde_json::from_str("\"\"");
        assert!(parsed.is_err());

        let parsed: StripeCustomerId = serde_json::from_str("\"cus_999\"").unwrap();
        assert_eq!(parsed.as_str(), "cus_999");
    }

    #[test]
    fn test_display() {
        let id = StripeCustomerId::parse("cus_123").unwrap();
        assert_eq!(format!("{id}"), "cus_123");
    }
}
