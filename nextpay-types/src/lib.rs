//! # NextPay Types
//!
//! Domain types, request/response DTOs, and the gateway error taxonomy for
//! the NextPay client SDK. This crate has ZERO IO dependencies - only data
//! structures and the code-to-error classification tables.
//!
//! ## Architecture
//!
//! - `domain/` - Pure domain types (Currency, TransactionId)
//! - `dto/` - Request options and wire-level response shapes
//! - `error/` - Gateway error taxonomy and per-operation code tables

pub mod domain;
pub mod dto;
pub mod error;

// Re-export commonly used types
pub use domain::{Currency, TransactionId};
pub use dto::{PurchaseOptions, TokenResponse, VerifyResponse, ALLOWED_PURCHASE_FIELDS};
pub use error::GatewayError;
