//! Gateway error taxonomy.
//!
//! The gateway reports every failure as an integer `code` in the response
//! body. Each operation has its own table, so the same number can mean
//! different things per endpoint; the classifiers below own those tables.
//! Codes outside a table fall through to [`GatewayError::UnknownCode`] so
//! callers still see the raw value.

/// Failure categories reported by the gateway, plus the one client-side
/// precondition (`InvalidKey`).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    #[error("key {key} is not accepted by the gateway")]
    InvalidKey { key: String },

    #[error("callback_uri rejected by the gateway (code {code})")]
    InvalidCallbackUri { code: i32 },

    #[error("api key rejected by the gateway (code {code})")]
    InvalidToken { code: i32 },

    #[error("trans_id is not known to the gateway")]
    InvalidTransactionId,

    #[error("purchase amount rejected by the gateway")]
    InvalidPrice,

    #[error("purchase declined by the payer or the bank")]
    PurchaseDeclined,

    #[error("purchase canceled")]
    PurchaseCanceled,

    #[error("purchase already verified and paid")]
    PurchaseAlreadyMade,

    #[error("refund request failed (code {code})")]
    RefundFailed { code: i32 },

    #[error("merchant balance too low to refund")]
    InsufficientBalance,

    #[error("unhandled gateway code {code}")]
    UnknownCode { code: i32 },
}

impl GatewayError {
    /// Classifies a non-success code from the purchase-token endpoint.
    pub fn from_purchase_code(code: i32) -> Self {
        match code {
            // -32: malformed, -73: unreachable or too long
            -32 | -73 => GatewayError::InvalidCallbackUri { code },
            -33 | -35 | -38 | -39 | -40 | -47 => GatewayError::InvalidToken { code },
            _ => GatewayError::UnknownCode { code },
        }
    }

    /// Classifies a non-success code from the verify endpoint.
    pub fn from_verify_code(code: i32) -> Self {
        match code {
            -2 => GatewayError::PurchaseDeclined,
            -4 => GatewayError::PurchaseCanceled,
            -24 => GatewayError::InvalidPrice,
            -25 => GatewayError::PurchaseAlreadyMade,
            -27 => GatewayError::InvalidTransactionId,
            _ => GatewayError::UnknownCode { code },
        }
    }

    /// Classifies a non-success code from a refund request.
    pub fn from_refund_code(code: i32) -> Self {
        match code {
            -91 | -92 => GatewayError::RefundFailed { code },
            -93 => GatewayError::InsufficientBalance,
            -27 => GatewayError::InvalidTransactionId,
            _ => GatewayError::UnknownCode { code },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_purchase_code_table() {
        assert_eq!(
            GatewayError::from_purchase_code(-32),
            GatewayError::InvalidCallbackUri { code: -32 }
        );
        assert_eq!(
            GatewayError::from_purchase_code(-73),
            GatewayError::InvalidCallbackUri { code: -73 }
        );
        for code in [-33, -35, -38, -39, -40, -47] {
            assert_eq!(
                GatewayError::from_purchase_code(code),
                GatewayError::InvalidToken { code }
            );
        }
        assert_eq!(
            GatewayError::from_purchase_code(-999),
            GatewayError::UnknownCode { code: -999 }
        );
    }

    #[test]
    fn test_verify_code_table() {
        assert_eq!(
            GatewayError::from_verify_code(-2),
            GatewayError::PurchaseDeclined
        );
        assert_eq!(
            GatewayError::from_verify_code(-4),
            GatewayError::PurchaseCanceled
        );
        assert_eq!(
            GatewayError::from_verify_code(-24),
            GatewayError::InvalidPrice
        );
        assert_eq!(
            GatewayError::from_verify_code(-25),
            GatewayError::PurchaseAlreadyMade
        );
        assert_eq!(
            GatewayError::from_verify_code(-27),
            GatewayError::InvalidTransactionId
        );
        assert_eq!(
            GatewayError::from_verify_code(7),
            GatewayError::UnknownCode { code: 7 }
        );
    }

    #[test]
    fn test_refund_code_table() {
        assert_eq!(
            GatewayError::from_refund_code(-91),
            GatewayError::RefundFailed { code: -91 }
        );
        assert_eq!(
            GatewayError::from_refund_code(-92),
            GatewayError::RefundFailed { code: -92 }
        );
        assert_eq!(
            GatewayError::from_refund_code(-93),
            GatewayError::InsufficientBalance
        );
        assert_eq!(
            GatewayError::from_refund_code(-27),
            GatewayError::InvalidTransactionId
        );
        assert_eq!(
            GatewayError::from_refund_code(-1),
            GatewayError::UnknownCode { code: -1 }
        );
    }

    #[test]
    fn test_error_messages_carry_raw_code() {
        let err = GatewayError::from_purchase_code(-555);
        assert!(err.to_string().contains("-555"));
        let err = GatewayError::from_purchase_code(-39);
        assert!(err.to_string().contains("-39"));
    }
}
