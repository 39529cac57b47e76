//! # jwtbearer - Bearer Token Validation for HTTP Requests
//!
//! **jwtbearer** pulls a JSON Web Token (JWT) out of an inbound HTTP request,
//! verifies it against a caller-supplied key resolver and checks that it was
//! signed with the one algorithm the deployment trusts. It is meant to sit in
//! front of protected handlers.
//!
//! Signature algorithms, token decoding and claim deserialization are provided
//! by [`jsonwebtoken`]. This crate adds request extraction and the algorithm
//! pin on top.
//!
//! ## Quick Start
//!
//! ```ignore
//! use jwtbearer::*;
//!
//! let validator = JwtValidator::new(Options::new().secret(b"your-256-bit-secret"));
//!
//! // Authorization: Bearer <token>
//! let token = validator.validate(&request)?;
//! println!("Subject: {:?}", token.subject());
//! ```
//!
//! ## Validation Flow
//!
//! ```text
//! Request
//!     │ extractor (default: Authorization header)
//!     ▼
//! raw token
//!     │ key resolver + jsonwebtoken (structure, signature, exp/nbf)
//!     ▼
//! decoded token
//!     │ algorithm pin (default: HS256)
//!     ▼
//! Token<C>
//! ```
//!
//! Any failing step ends the validation with a typed [`Error`].
//!
//! ## Configuration
//!
//! ```ignore
//! let validator = JwtValidator::new(
//!     Options::new()
//!         .key_resolver(|header| keys.lookup(header.kid.as_deref()))
//!         .token_extractor(extractor::from_cookie("session"))
//!         .algorithm(Algorithm::RS256)
//!         .claims(ClaimsValidation::new().require_audience("my-api").leeway(30)),
//! );
//! ```
//!
//! `Options` is consumed by [`JwtValidator::new`]; the resulting validator is
//! immutable and can be cloned into every request handler.
//!
//! ## Security
//!
//! ### Algorithm Confusion Prevention
//!
//! The expected algorithm always comes from configuration. A token declaring
//! `RS256` is rejected by a validator pinned to `HS256` even when its
//! signature checks out under the resolved key.
//!
//! ### "none" Algorithm Rejection
//!
//! Unsigned tokens never decode, and [`parse_algorithm`] refuses to pin `none`.
//!
//! ## Features
//!
//! - **`axum`**: [`middleware::require_token`], an axum middleware that rejects
//!   unauthenticated requests.
//!
//! ## References
//!
//! - [RFC 6750](https://datatracker.ietf.org/doc/html/rfc6750) — Bearer Token Usage
//! - [RFC 7519](https://datatracker.ietf.org/doc/html/rfc7519) — JSON Web Token (JWT)
//! - [RFC 8725](https://datatracker.ietf.org/doc/html/rfc8725) — JSON Web Token Best Current Practices

// Core modules
pub mod error;
pub(crate) mod limits;

// Request side
pub mod extractor;
pub mod request;

// Verification
pub mod algorithm;
pub mod claims;
pub mod keys;
pub mod token;

// Validator (main public API)
pub mod validator;

#[cfg(feature = "axum")]
pub mod middleware;

// ============================================================================
// PUBLIC API
// ============================================================================

pub use validator::{JwtValidator, Options};

pub use algorithm::{DEFAULT_ALGORITHM, algorithm_name, parse_algorithm};
pub use claims::{ClaimsValidation, MapClaims};
pub use error::{Error, ExtractError, KeyError, Result};
pub use extractor::{TokenExtractor, from_auth_header};
pub use keys::KeyResolver;
pub use request::RequestHead;
pub use token::Token;

pub use jsonwebtoken::{Algorithm, DecodingKey, Header};
