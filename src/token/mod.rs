//! Verified token

use crate::algorithm::algorithm_name;
use crate::claims::MapClaims;
use jsonwebtoken::Header;

/// A token whose signature, claims and algorithm have been verified
///
/// Created fresh for each validated request and handed to the caller by value.
#[derive(Debug, Clone)]
pub struct Token<C = MapClaims> {
    raw: String,
    header: Header,
    claims: C,
}

impl<C> Token<C> {
    pub(crate) fn new(raw: String, header: Header, claims: C) -> Self {
        Self {
            raw,
            header,
            claims,
        }
    }

    /// The token exactly as it was extracted from the request
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Decoded JOSE header
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Canonical name of the signing algorithm, e.g. `"HS256"`
    pub fn algorithm(&self) -> &'static str {
        algorithm_name(self.header.alg)
    }

    /// Key ID (`kid`) the token was signed with, if any
    pub fn key_id(&self) -> Option<&str> {
        self.header.kid.as_deref()
    }

    /// Decoded claims
    pub fn claims(&self) -> &C {
        &self.claims
    }

    /// Consume the token, returning its claims
    pub fn into_claims(self) -> C {
        self.claims
    }
}

impl Token<MapClaims> {
    /// Subject (`sub`) claim, if present and a string
    pub fn subject(&self) -> Option<&str> {
        self.claims.get("sub").and_then(|sub| sub.as_str())
    }

    /// Issuer (`iss`) claim, if present and a string
    pub fn issuer(&self) -> Option<&str> {
        self.claims.get("iss").and_then(|iss| iss.as_str())
    }
}
