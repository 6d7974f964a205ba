//! # NextPay Client SDK
//!
//! A typed Rust client for the NextPay payment gateway.
//!
//! The gateway exposes three operations: create a purchase token, verify a
//! purchase, and refund one. Every response carries an integer `code`; the
//! tables in [`nextpay_types::GatewayError`] turn those into typed errors,
//! while transport failures (connection errors, non-JSON bodies) propagate
//! as [`ClientError::Http`] unclassified.

use nextpay_types::{
    Currency, GatewayError, PurchaseOptions, TokenResponse, TransactionId, VerifyResponse,
};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

/// Production gateway origin.
const BASE_URL: &str = "https://nextpay.org";
/// Purchase-token creation endpoint.
const TOKEN_PATH: &str = "/nx/gateway/token";
/// Verification endpoint. The gateway also handles refunds here,
/// distinguished by the `refund_request` form field.
const VERIFY_PATH: &str = "/nx/gateway/verify";
/// Hosted payment page, completed with a transaction id.
const PAYMENT_PATH: &str = "/nx/gateway/payment";
/// User agent the gateway expects on every request.
const USER_AGENT: &str = "PostmanRuntime/7.26.8";
/// Marker value that turns a verify request into a refund.
const REFUND_REQUEST: &str = "yes_money_back";

const PURCHASE_OK: i32 = -1;
const VERIFY_OK: i32 = 0;
const REFUND_OK: i32 = -90;

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error("gateway response is missing the `{0}` field")]
    MissingField(&'static str),
}

/// NextPay gateway client.
///
/// Holds the merchant credential, the purchase amount, and the callback
/// address; all three are fixed at construction. Instances are cheap to
/// create and safe to share across tasks.
pub struct NextPayClient {
    base_url: String,
    token: String,
    amount: u64,
    callback_uri: String,
    http: Client,
}

impl NextPayClient {
    /// Creates a new client.
    ///
    /// No validation happens here: a bad token, amount, or callback address
    /// surfaces as a gateway-reported error on the first request.
    pub fn new(token: impl Into<String>, amount: u64, callback_uri: impl Into<String>) -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            token: token.into(),
            amount,
            callback_uri: callback_uri.into(),
            http: Client::new(),
        }
    }

    /// Points the client at a different gateway origin.
    ///
    /// Intended for tests running against a local mock server; production
    /// code never needs it.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Requests a purchase token for `order_id`.
    ///
    /// `order_id` must be unique per merchant. Option keys are checked
    /// against the allow-list before anything goes on the wire; a foreign
    /// key fails with [`GatewayError::InvalidKey`] and zero network calls.
    ///
    /// On success returns the transaction id to redirect the payer with
    /// (see [`NextPayClient::payment_page_url`]) and to pass to
    /// [`NextPayClient::verify`] afterwards.
    pub async fn purchase(
        &self,
        order_id: &str,
        options: &PurchaseOptions,
    ) -> Result<TransactionId, ClientError> {
        options.validate()?;

        let mut form = vec![
            ("api_key".to_string(), self.token.clone()),
            ("amount".to_string(), self.amount.to_string()),
            ("order_id".to_string(), order_id.to_string()),
            ("callback_uri".to_string(), self.callback_uri.clone()),
        ];
        for (key, value) in options.iter() {
            form.push((key.to_string(), form_value(value)));
        }

        debug!(order_id, "requesting purchase token");
        let resp: TokenResponse = self.post(TOKEN_PATH, &form).await?;

        if resp.code == PURCHASE_OK {
            let trans_id = resp
                .trans_id
                .ok_or(ClientError::MissingField("trans_id"))?;
            debug!(trans_id = %trans_id, "purchase token created");
            return Ok(TransactionId::from(trans_id));
        }

        warn!(code = resp.code, order_id, "purchase rejected by gateway");
        Err(GatewayError::from_purchase_code(resp.code).into())
    }

    /// Verifies that the purchase behind `trans_id` was paid.
    ///
    /// `currency` is forwarded when given; the enum only admits the values
    /// the gateway accepts.
    pub async fn verify(
        &self,
        trans_id: &TransactionId,
        currency: Option<Currency>,
    ) -> Result<(), ClientError> {
        let mut form = vec![
            ("api_key".to_string(), self.token.clone()),
            ("amount".to_string(), self.amount.to_string()),
            ("trans_id".to_string(), trans_id.to_string()),
        ];
        if let Some(currency) = currency {
            form.push(("currency".to_string(), currency.to_string()));
        }

        debug!(trans_id = %trans_id, "verifying purchase");
        let resp: VerifyResponse = self.post(VERIFY_PATH, &form).await?;

        if resp.code == VERIFY_OK {
            return Ok(());
        }

        warn!(code = resp.code, trans_id = %trans_id, "verification rejected by gateway");
        Err(GatewayError::from_verify_code(resp.code).into())
    }

    /// Refunds the purchase behind `trans_id` to the payer.
    ///
    /// Goes to the verify endpoint with `refund_request=yes_money_back`;
    /// the gateway has no dedicated refund endpoint.
    pub async fn refund(&self, trans_id: &TransactionId) -> Result<(), ClientError> {
        let form = [
            ("api_key".to_string(), self.token.clone()),
            ("amount".to_string(), self.amount.to_string()),
            ("trans_id".to_string(), trans_id.to_string()),
            ("refund_request".to_string(), REFUND_REQUEST.to_string()),
        ];

        debug!(trans_id = %trans_id, "requesting refund");
        let resp: VerifyResponse = self.post(VERIFY_PATH, &form).await?;

        if resp.code == REFUND_OK {
            return Ok(());
        }

        warn!(code = resp.code, trans_id = %trans_id, "refund rejected by gateway");
        Err(GatewayError::from_refund_code(resp.code).into())
    }

    /// URL of the hosted payment page for a created purchase. The payer is
    /// redirected here to complete the payment; the SDK never requests it.
    pub fn payment_page_url(&self, trans_id: &TransactionId) -> String {
        format!("{}{}/{}", self.base_url, PAYMENT_PATH, trans_id)
    }

    async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        form: &[(String, String)],
    ) -> Result<T, ClientError> {
        let resp = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .form(form)
            .send()
            .await?;
        Ok(resp.json::<T>().await?)
    }
}

/// Renders an option value for the form body. Strings go through bare;
/// everything else (booleans, numbers, the `custom_json_fields` object)
/// is sent as its JSON text.
fn form_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = NextPayClient::new("nx-token", 42_000, "https://shop.example/callback");
        assert_eq!(client.base_url, "https://nextpay.org");
        assert_eq!(client.token, "nx-token");
        assert_eq!(client.amount, 42_000);
        assert_eq!(client.callback_uri, "https://shop.example/callback");
    }

    #[test]
    fn test_base_url_override_trims_trailing_slash() {
        let client = NextPayClient::new("t", 1, "cb").with_base_url("http://localhost:3000/");
        assert_eq!(client.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_payment_page_url() {
        let client = NextPayClient::new("t", 1, "cb");
        let trans_id = TransactionId::from("T123");
        assert_eq!(
            client.payment_page_url(&trans_id),
            "https://nextpay.org/nx/gateway/payment/T123"
        );
    }

    #[test]
    fn test_form_value_rendering() {
        assert_eq!(form_value(&Value::String("abc".into())), "abc");
        assert_eq!(form_value(&Value::Bool(true)), "true");
        let obj: Value = serde_json::json!({"k": "v"});
        assert_eq!(form_value(&obj), r#"{"k":"v"}"#);
    }
}
