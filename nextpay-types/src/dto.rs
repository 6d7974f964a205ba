//! Request options and wire-level response shapes.

use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::domain::Currency;
use crate::error::GatewayError;

/// Field names the purchase-token endpoint accepts beyond the required
/// quartet of `api_key`/`amount`/`order_id`/`callback_uri`.
pub const ALLOWED_PURCHASE_FIELDS: &[&str] = &[
    "currency",
    "phone",
    "custom_json_fields",
    "payer_name",
    "payer_desc",
    "auto_verify",
    "allowed_card",
];

/// Optional named fields for a purchase request.
///
/// The gateway rejects unknown field names, so the client refuses them
/// up front: [`PurchaseOptions::validate`] runs before any request is
/// built and fails with [`GatewayError::InvalidKey`] naming the first
/// foreign key. The typed setters below can only produce allowed fields;
/// [`PurchaseOptions::set`] is the raw escape hatch for callers that
/// assemble fields dynamically.
#[derive(Debug, Clone, Default)]
pub struct PurchaseOptions {
    fields: BTreeMap<String, Value>,
}

impl PurchaseOptions {
    /// Creates an empty option set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Settlement currency for the purchase.
    pub fn currency(mut self, currency: Currency) -> Self {
        self.fields
            .insert("currency".into(), Value::String(currency.to_string()));
        self
    }

    /// Phone number of the payer.
    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.fields.insert("phone".into(), Value::String(phone.into()));
        self
    }

    /// Opaque JSON object passed through to the gateway verbatim.
    pub fn custom_json_fields(mut self, fields: serde_json::Map<String, Value>) -> Self {
        self.fields
            .insert("custom_json_fields".into(), Value::Object(fields));
        self
    }

    /// Name of the payer.
    pub fn payer_name(mut self, name: impl Into<String>) -> Self {
        self.fields
            .insert("payer_name".into(), Value::String(name.into()));
        self
    }

    /// Free-form description of the payer.
    pub fn payer_desc(mut self, desc: impl Into<String>) -> Self {
        self.fields
            .insert("payer_desc".into(), Value::String(desc.into()));
        self
    }

    /// Asks the gateway to verify the purchase automatically. The gateway
    /// only accepts `true` for this field, so the setter takes no argument.
    pub fn auto_verify(mut self) -> Self {
        self.fields.insert("auto_verify".into(), Value::Bool(true));
        self
    }

    /// Restrict the purchase to a single card number.
    pub fn allowed_card(mut self, card: impl Into<String>) -> Self {
        self.fields
            .insert("allowed_card".into(), Value::String(card.into()));
        self
    }

    /// Inserts an arbitrary field. Keys outside the allow-list are caught
    /// by [`PurchaseOptions::validate`] before any request goes out.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Checks every key against [`ALLOWED_PURCHASE_FIELDS`].
    pub fn validate(&self) -> Result<(), GatewayError> {
        for key in self.fields.keys() {
            if !ALLOWED_PURCHASE_FIELDS.contains(&key.as_str()) {
                return Err(GatewayError::InvalidKey { key: key.clone() });
            }
        }
        Ok(())
    }

    /// Iterates the fields in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Whether any field is set.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Response body of the purchase-token endpoint.
///
/// `trans_id` is only present on success; everything else the gateway
/// sends back is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub code: i32,
    #[serde(default)]
    pub trans_id: Option<String>,
}

/// Response body of the verify endpoint (verification and refunds alike).
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyResponse {
    pub code: i32,
}
