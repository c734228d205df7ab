//! User identifier issued by the identity service.

use core::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of an authenticated user.
///
/// The identity service issues UUIDs; the same value keys the user's row in
/// the `profiles` table.
///
/// ```
/// use framecraft_core::UserId;
/// use uuid::Uuid;
///
/// let raw = Uuid::new_v4();
/// let id = UserId::new(raw);
/// assert_eq!(id.as_uuid(), raw);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Create a new ID from a UUID.
    #[must_use]
    pub const fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Get the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<UserId> for Uuid {
    fn from(id: UserId) -> Self {
        id.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_hyphenated_uuid() {
        let raw = Uuid::parse_str("6f1c2d4e-8a3b-4c5d-9e7f-0a1b2c3d4e5f").unwrap();
        assert_eq!(
            UserId::new(raw).to_string(),
            "6f1c2d4e-8a3b-4c5d-9e7f-0a1b2c3d4e5f"
        );
    }

    #[test]
    fn test_deserializes_from_plain_string() {
        let id: UserId = serde_json::from_str("\"6f1c2d4e-8a3b-4c5d-9e7f-0a1b2c3d4e5f\"").unwrap();
        assert_eq!(
            Uuid::from(id).to_string(),
            "6f1c2d4e-8a3b-4c5d-9e7f-0a1b2c3d4e5f"
        );
    }
}
