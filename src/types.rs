//! Opaque host records handed to the cache adapter
//!
//! The host tool owns these shapes; the adapter only inspects the response
//! status code and the originating request, and otherwise passes them through
//! to the configured key/expiration/skip policies untouched.

use std::collections::HashMap;

/// Incoming request as seen by the host tool.
#[derive(Debug, Clone, Default)]
pub struct Request {
    /// Request method, e.g. `GET`.
    pub method: String,
    /// Raw request path, before normalization.
    pub path: String,
    /// Request headers, lowercased names.
    pub headers: HashMap<String, String>,
}

impl Request {
    /// Create a request record for the given method and path.
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            headers: HashMap::new(),
        }
    }
}

/// Outgoing response as seen by the host tool.
#[derive(Debug, Clone, Default)]
pub struct Response {
    /// HTTP status code of the response being cached.
    pub status: u16,
    /// Originating request, when the host still has it.
    pub req: Option<Request>,
}

impl Response {
    /// Create a response record with the given status code.
    pub fn new(status: u16) -> Self {
        Self { status, req: None }
    }

    /// Attach the originating request.
    pub fn with_req(mut self, req: Request) -> Self {
        self.req = Some(req);
        self
    }
}
