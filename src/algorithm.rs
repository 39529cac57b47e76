//! Signing algorithm pinning
//!
//! A deployment trusts exactly one signing algorithm. The pin comes from
//! configuration and is compared against the `alg` a verified token declares;
//! it is never inferred from the token itself.

use crate::error::{Error, Result};
use jsonwebtoken::{Algorithm, Header};

/// Algorithm used when none is configured
pub const DEFAULT_ALGORITHM: Algorithm = Algorithm::HS256;

/// Canonical JOSE identifier of an algorithm (RFC 7518)
pub const fn algorithm_name(algorithm: Algorithm) -> &'static str {
    match algorithm {
        Algorithm::HS256 => "HS256",
        Algorithm::HS384 => "HS384",
        Algorithm::HS512 => "HS512",
        Algorithm::ES256 => "ES256",
        Algorithm::ES384 => "ES384",
        Algorithm::RS256 => "RS256",
        Algorithm::RS384 => "RS384",
        Algorithm::RS512 => "RS512",
        Algorithm::PS256 => "PS256",
        Algorithm::PS384 => "PS384",
        Algorithm::PS512 => "PS512",
        Algorithm::EdDSA => "EdDSA",
    }
}

/// Parse an algorithm identifier from configuration
///
/// Matching is exact and case-sensitive. `none` is always rejected.
pub fn parse_algorithm(name: &str) -> Result<Algorithm> {
    if name.eq_ignore_ascii_case("none") {
        return Err(Error::AlgorithmNoneRejected);
    }

    name.parse::<Algorithm>()
        .map_err(|_| Error::AlgorithmUnsupported(name.into()))
}

/// Check that a verified token was signed with the pinned algorithm
pub(crate) fn ensure_algorithm(expected: Algorithm, header: &Header) -> Result<()> {
    if header.alg == expected {
        Ok(())
    } else {
        Err(Error::AlgorithmMismatch {
            expected: algorithm_name(expected).into(),
            found: algorithm_name(header.alg).into(),
        })
    }
}
