//! axum integration
//!
//! ```ignore
//! use axum::{Router, middleware::from_fn_with_state, routing::get};
//! use jwtbearer::{JwtValidator, Options, middleware::require_token};
//!
//! let validator = JwtValidator::new(Options::new().secret(b"secret"));
//! let app: Router = Router::new()
//!     .route("/", get(handler))
//!     .layer(from_fn_with_state(validator, require_token));
//! ```
//!
//! Handlers read the verified token with `Extension<Token>`.

use crate::error::Error;
use crate::validator::JwtValidator;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::Response;

impl Error {
    /// HTTP status to answer a request that failed validation with
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Extraction(_) => StatusCode::BAD_REQUEST,
            Error::ConfigurationInvalid(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::UNAUTHORIZED,
        }
    }
}

/// Reject requests without a valid token
///
/// On success the [`Token`](crate::Token) is inserted into the request
/// extensions before the request is passed on.
pub async fn require_token(
    State(validator): State<JwtValidator>,
    mut request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let token = validator.validate(&request).map_err(|e| {
        tracing::warn!(error = %e, path = %request.uri().path(), "rejecting request");
        e.status_code()
    })?;

    request.extensions_mut().insert(token);

    Ok(next.run(request).await)
}
