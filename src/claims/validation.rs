//! Temporal and registered-claim checks
//!
//! These settings are handed to the token library, which performs the checks
//! after the signature has been verified.

use crate::error::{Error, Result};
use crate::limits::MAX_LEEWAY_SECONDS;
use jsonwebtoken::{Algorithm, Validation};

/// Configuration for claims validation
///
/// By default `exp` and `nbf` are checked when present, no claim is required
/// and audience/issuer are not pinned.
#[derive(Debug, Clone)]
pub struct ClaimsValidation {
    validate_exp: bool,
    validate_nbf: bool,
    leeway_seconds: u64,
    required_claims: Vec<String>,
    audience: Option<String>,
    issuer: Option<String>,
}

impl Default for ClaimsValidation {
    fn default() -> Self {
        Self {
            validate_exp: true,
            validate_nbf: true,
            leeway_seconds: 0,
            required_claims: Vec::new(),
            audience: None,
            issuer: None,
        }
    }
}

impl ClaimsValidation {
    /// Create a new validation config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set clock skew tolerance for `exp` and `nbf`
    ///
    /// # Security
    /// Leeway is limited to 300 seconds. Larger values are rejected when a
    /// token is validated.
    pub fn leeway(mut self, seconds: u64) -> Self {
        self.leeway_seconds = seconds;
        self
    }

    /// Require the `aud` claim to contain `audience`
    pub fn require_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = Some(audience.into());
        self
    }

    /// Require the `iss` claim to equal `issuer`
    pub fn require_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }

    /// Require a registered claim (`exp`, `nbf`, `aud`, `iss` or `sub`) to be present
    pub fn require_claim(mut self, claim: impl Into<String>) -> Self {
        self.required_claims.push(claim.into());
        self
    }

    /// Disable expiration validation
    pub fn no_exp_validation(mut self) -> Self {
        self.validate_exp = false;
        self
    }

    /// Disable not-before validation
    pub fn no_nbf_validation(mut self) -> Self {
        self.validate_nbf = false;
        self
    }

    /// Build the token library's validation for a token signed with `algorithm`
    pub(crate) fn to_validation(&self, algorithm: Algorithm) -> Result<Validation> {
        if self.leeway_seconds > MAX_LEEWAY_SECONDS {
            return Err(Error::ConfigurationInvalid(format!(
                "Leeway too large: {} seconds (maximum: {} seconds)",
                self.leeway_seconds, MAX_LEEWAY_SECONDS
            )));
        }

        let mut validation = Validation::new(algorithm);
        validation.leeway = self.leeway_seconds;
        validation.validate_exp = self.validate_exp;
        validation.validate_nbf = self.validate_nbf;
        validation.set_required_spec_claims(&self.required_claims);

        match &self.audience {
            Some(audience) => validation.set_audience(&[audience]),
            None => validation.validate_aud = false,
        }
        if let Some(issuer) = &self.issuer {
            validation.set_issuer(&[issuer]);
        }

        Ok(validation)
    }
}
