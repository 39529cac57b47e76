//! Verification key resolution
//!
//! A key resolver maps the header of a parsed but not yet verified token to the
//! key that should verify it. Resolvers are supplied by the caller; this module
//! provides the common shapes:
//! - a single static key ([`static_key`], [`secret`])
//! - a set of keys selected by the header `kid` ([`key_set`])
//!
//! Resolvers never see the claims. They should base their decision only on
//! header metadata, which is attacker controlled until the signature checks out.

use crate::error::KeyError;
use jsonwebtoken::{DecodingKey, Header};
use std::collections::HashMap;
use std::sync::Arc;

/// Function supplying the verification key for a token header
#[allow(clippy::type_complexity)]
pub type KeyResolver =
    Arc<dyn Fn(&Header) -> Result<DecodingKey, KeyError> + Send + Sync + 'static>;

/// Resolver that always returns the same key
pub fn static_key(key: DecodingKey) -> KeyResolver {
    Arc::new(move |_: &Header| -> Result<DecodingKey, KeyError> { Ok(key.clone()) })
}

/// Resolver that always returns the same shared secret (HMAC algorithms)
pub fn secret(secret: &[u8]) -> KeyResolver {
    static_key(DecodingKey::from_secret(secret))
}

/// Resolver selecting a key by the `kid` header parameter
///
/// Tokens without a `kid`, or with a `kid` not present in `keys`, are
/// rejected before any signature verification takes place.
pub fn key_set(keys: HashMap<String, DecodingKey>) -> KeyResolver {
    Arc::new(move |header: &Header| -> Result<DecodingKey, KeyError> {
        let kid = header.kid.as_deref().ok_or(KeyError::MissingKeyId)?;
        keys.get(kid)
            .cloned()
            .ok_or_else(|| KeyError::UnknownKeyId(kid.into()))
    })
}
