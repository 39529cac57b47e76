//! Size limit constants for input validation

/// Maximum length for a raw token string (64KB)
/// Checked before the token reaches the key resolver or the token library
pub(crate) const MAX_TOKEN_LENGTH: usize = 64 * 1024;

/// Maximum clock skew tolerance (300 seconds = 5 minutes)
/// Prevents leeway from effectively disabling expiration checks
pub(crate) const MAX_LEEWAY_SECONDS: u64 = 300;
