//! Request validator
//!
//! [`JwtValidator`] is configured once from [`Options`] and shared by every
//! request. A validation is a single linear pass:
//!
//! ```text
//! request
//!     │ extractor
//!     ▼
//! raw token (non-empty)
//!     │ key resolver + token library (structure, signature, temporal claims)
//!     ▼
//! decoded token
//!     │ algorithm pin
//!     ▼
//! Token<C>
//! ```
//!
//! The first failing step ends the validation. There are no retries and no
//! fallback to another key or algorithm.

use crate::algorithm::{DEFAULT_ALGORITHM, algorithm_name, ensure_algorithm};
use crate::claims::{ClaimsValidation, MapClaims};
use crate::error::{Error, KeyError, Result};
use crate::extractor::{TokenExtractor, from_auth_header};
use crate::keys::{self, KeyResolver};
use crate::limits::MAX_TOKEN_LENGTH;
use crate::request::RequestHead;
use crate::token::Token;
use jsonwebtoken::{Algorithm, DecodingKey, Header};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Validator configuration
///
/// Only the key resolver is mandatory. Unset fields fall back to:
/// - extractor: [`from_auth_header`]
/// - algorithm: [`DEFAULT_ALGORITHM`] (HS256)
/// - claims: [`ClaimsValidation::default`]
#[derive(Clone, Default)]
pub struct Options {
    key_resolver: Option<KeyResolver>,
    extractor: Option<TokenExtractor>,
    algorithm: Option<Algorithm>,
    claims: ClaimsValidation,
}

impl Options {
    /// Create empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the key resolver
    ///
    /// The resolver receives the unverified token header and returns the key to
    /// verify the token with.
    pub fn key_resolver<F>(mut self, resolver: F) -> Self
    where
        F: Fn(&Header) -> std::result::Result<DecodingKey, KeyError> + Send + Sync + 'static,
    {
        self.key_resolver = Some(Arc::new(resolver));
        self
    }

    /// Configure a static verification key
    pub fn key(mut self, key: DecodingKey) -> Self {
        self.key_resolver = Some(keys::static_key(key));
        self
    }

    /// Configure a shared secret (HMAC algorithms)
    pub fn secret(mut self, secret: &[u8]) -> Self {
        self.key_resolver = Some(keys::secret(secret));
        self
    }

    /// Configure the token extractor
    pub fn extractor<F>(mut self, extractor: F) -> Self
    where
        F: Fn(&dyn RequestHead) -> std::result::Result<String, crate::ExtractError>
            + Send
            + Sync
            + 'static,
    {
        self.extractor = Some(Arc::new(extractor));
        self
    }

    /// Configure a prebuilt token extractor, e.g. from [`from_first`](crate::extractor::from_first)
    pub fn token_extractor(mut self, extractor: TokenExtractor) -> Self {
        self.extractor = Some(extractor);
        self
    }

    /// Pin the signing algorithm
    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = Some(algorithm);
        self
    }

    /// Configure claims validation
    pub fn claims(mut self, claims: ClaimsValidation) -> Self {
        self.claims = claims;
        self
    }
}

/// JWT validator for HTTP requests
///
/// Cloning is cheap and every clone shares the same configuration.
#[derive(Clone)]
pub struct JwtValidator {
    key_resolver: Option<KeyResolver>,
    extractor: TokenExtractor,
    algorithm: Algorithm,
    claims: ClaimsValidation,
}

impl JwtValidator {
    /// Create a validator, applying defaults for unset options
    pub fn new(options: Options) -> Self {
        Self {
            key_resolver: options.key_resolver,
            extractor: options.extractor.unwrap_or_else(|| Arc::new(from_auth_header)),
            algorithm: options.algorithm.unwrap_or(DEFAULT_ALGORITHM),
            claims: options.claims,
        }
    }

    /// The pinned signing algorithm
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Extract and validate the token of a request
    ///
    /// Claims are decoded into a JSON object.
    pub fn validate<R: RequestHead>(&self, request: &R) -> Result<Token<MapClaims>> {
        self.validate_with_claims::<MapClaims, R>(request)
    }

    /// Extract and validate the token of a request, decoding claims into `C`
    pub fn validate_with_claims<C, R>(&self, request: &R) -> Result<Token<C>>
    where
        C: DeserializeOwned,
        R: RequestHead,
    {
        let raw = self.raw_token(request)?;
        self.verify(raw)
    }

    /// Validate a raw token that did not come from an HTTP request
    ///
    /// Runs the same size, verification and algorithm checks as
    /// [`validate_with_claims`](Self::validate_with_claims).
    pub fn verify<C: DeserializeOwned>(&self, raw: impl Into<String>) -> Result<Token<C>> {
        let raw = raw.into();

        if raw.len() > MAX_TOKEN_LENGTH {
            return Err(Error::TokenTooLarge {
                size: raw.len(),
                max: MAX_TOKEN_LENGTH,
            });
        }

        let header = jsonwebtoken::decode_header(&raw).map_err(|e| {
            tracing::debug!(error = %e, "failed to decode token header");
            Error::Parse(e)
        })?;

        let key = self.resolve_key(&header)?;
        let validation = self.claims.to_validation(header.alg)?;

        let data = jsonwebtoken::decode::<C>(&raw, &key, &validation).map_err(|e| {
            tracing::debug!(error = %e, alg = algorithm_name(header.alg), "token rejected");
            Error::Parse(e)
        })?;

        if let Err(e) = ensure_algorithm(self.algorithm, &data.header) {
            tracing::warn!(
                expected = algorithm_name(self.algorithm),
                found = algorithm_name(data.header.alg),
                "token signed with unexpected algorithm"
            );
            return Err(e);
        }

        tracing::debug!(
            alg = algorithm_name(data.header.alg),
            kid = data.header.kid.as_deref(),
            "token validated"
        );

        Ok(Token::new(raw, data.header, data.claims))
    }

    /// Extract a non-empty raw token from a request
    fn raw_token<R: RequestHead>(&self, request: &R) -> Result<String> {
        let raw = (self.extractor)(request).map_err(|e| {
            tracing::debug!(error = %e, "failed to extract token");
            Error::Extraction(e)
        })?;

        if raw.is_empty() {
            return Err(Error::TokenNotFound);
        }

        Ok(raw)
    }

    /// Resolve the verification key for an unverified header
    fn resolve_key(&self, header: &Header) -> Result<DecodingKey> {
        let resolver = self
            .key_resolver
            .as_ref()
            .ok_or_else(|| Error::ConfigurationInvalid("Must configure a key resolver".into()))?;

        resolver(header).map_err(|e| {
            tracing::debug!(error = %e, kid = header.kid.as_deref(), "failed to resolve key");
            Error::KeyResolution(e)
        })
    }
}
