//! Read-only view of an inbound HTTP request
//!
//! Extractors only need the request head (headers and URI), never the body,
//! so anything that exposes those two can be validated.

use http::{HeaderMap, Uri};

/// The parts of an HTTP request that token extractors read
pub trait RequestHead {
    /// Request headers
    fn headers(&self) -> &HeaderMap;
    /// Request URI (path and query)
    fn uri(&self) -> &Uri;
}

impl<B> RequestHead for http::Request<B> {
    fn headers(&self) -> &HeaderMap {
        http::Request::headers(self)
    }

    fn uri(&self) -> &Uri {
        http::Request::uri(self)
    }
}

impl RequestHead for http::request::Parts {
    fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    fn uri(&self) -> &Uri {
        &self.uri
    }
}
