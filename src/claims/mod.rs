//! Claims handling
//!
//! Claims are decoded by the token library into any `serde::Deserialize`
//! type. [`MapClaims`] is the untyped default used by
//! [`JwtValidator::validate`](crate::JwtValidator::validate).

mod validation;

pub use validation::ClaimsValidation;

/// Untyped claims: the payload as a JSON object
pub type MapClaims = serde_json::Map<String, serde_json::Value>;
