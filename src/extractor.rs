//! Token extractors
//!
//! An extractor pulls the raw token string out of a request. Returning an
//! empty string means "no token here" and is not an error; the validator turns
//! it into [`Error::TokenNotFound`](crate::Error::TokenNotFound). Errors are
//! reserved for tokens that are present but malformed.
//!
//! [`from_auth_header`] is the default. Any closure with the same signature can
//! be installed through [`Options::extractor`](crate::Options::extractor).

use crate::error::ExtractError;
use crate::request::RequestHead;
use http::header::{AUTHORIZATION, COOKIE};
use std::sync::Arc;

/// Function extracting the raw token from a request
#[allow(clippy::type_complexity)]
pub type TokenExtractor =
    Arc<dyn Fn(&dyn RequestHead) -> Result<String, ExtractError> + Send + Sync + 'static>;

const BEARER_SCHEME: &[u8] = b"bearer";

/// Extract the token from an `Authorization: Bearer <token>` header
///
/// A missing or empty header yields an empty string. Otherwise the value must
/// be exactly two parts separated by a single space, the first being `Bearer`
/// (case-insensitive). The token part is returned verbatim, so a malformed
/// token surfaces later as a parse error. Only bytes that are not UTF-8 are a
/// format error here.
pub fn from_auth_header(request: &dyn RequestHead) -> Result<String, ExtractError> {
    let Some(value) = request.headers().get(AUTHORIZATION) else {
        return Ok(String::new());
    };
    if value.is_empty() {
        return Ok(String::new());
    }

    let parts: Vec<&[u8]> = value.as_bytes().split(|b| *b == b' ').collect();
    match parts.as_slice() {
        [scheme, token] if scheme.eq_ignore_ascii_case(BEARER_SCHEME) => {
            // Token bytes are passed on untouched; only non-UTF-8 is unusable
            String::from_utf8(token.to_vec()).map_err(|_| ExtractError::InvalidFormat)
        }
        _ => Err(ExtractError::InvalidFormat),
    }
}

/// The default extractor as a [`TokenExtractor`]
pub fn default_extractor() -> TokenExtractor {
    Arc::new(from_auth_header)
}

/// Extract the token from a query parameter
///
/// The first occurrence of `name` wins. Values are percent-decoded.
pub fn from_parameter(name: impl Into<String>) -> TokenExtractor {
    let name = name.into();
    Arc::new(move |request: &dyn RequestHead| -> Result<String, ExtractError> {
        let Some(query) = request.uri().query() else {
            return Ok(String::new());
        };

        for pair in query.split('&') {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            if key == name {
                let value = value.replace('+', " ");
                return urlencoding::decode(&value)
                    .map(|decoded| decoded.into_owned())
                    .map_err(|e| {
                        ExtractError::other(format!("Invalid query parameter '{name}': {e}"))
                    });
            }
        }

        Ok(String::new())
    })
}

/// Extract the token from a cookie
///
/// All `Cookie` headers are searched; the first cookie called `name` wins.
pub fn from_cookie(name: impl Into<String>) -> TokenExtractor {
    let name = name.into();
    Arc::new(move |request: &dyn RequestHead| -> Result<String, ExtractError> {
        for value in request.headers().get_all(COOKIE) {
            // Non-ASCII cookie headers cannot carry a JWT
            let Ok(cookies) = value.to_str() else {
                continue;
            };

            let found = cookies
                .split(';')
                .filter_map(|cookie| cookie.trim().split_once('='))
                .find(|(key, _)| *key == name);

            if let Some((_, token)) = found {
                return Ok(token.trim_matches('"').to_string());
            }
        }

        Ok(String::new())
    })
}

/// Try several extractors in order
///
/// Returns the first non-empty token. An error from any extractor stops the
/// search and is returned as is.
pub fn from_first(extractors: Vec<TokenExtractor>) -> TokenExtractor {
    Arc::new(move |request: &dyn RequestHead| -> Result<String, ExtractError> {
        for extractor in &extractors {
            let token = extractor(request)?;
            if !token.is_empty() {
                return Ok(token);
            }
        }

        Ok(String::new())
    })
}
