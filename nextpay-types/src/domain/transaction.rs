//! Transaction identifier issued by the gateway.

use serde::{Deserialize, Serialize};

/// Opaque transaction identifier.
///
/// Issued by the gateway when a purchase token is created; required input
/// to verification and refund. The gateway defines no structure for it, so
/// it is carried as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    /// Wraps a gateway-issued identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the underlying string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for TransactionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for TransactionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_id_roundtrip() {
        let id = TransactionId::new("nx-9f2c");
        assert_eq!(id.as_str(), "nx-9f2c");
        assert_eq!(id.to_string(), "nx-9f2c");
        assert_eq!(TransactionId::from("nx-9f2c"), id);
    }
}
