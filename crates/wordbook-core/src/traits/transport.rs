// # Transport Trait
//
// Defines the interface for the injected HTTP capability.
//
// ## Implementations
//
// - Reqwest: `wordbook-transport-reqwest` crate
// - Test doubles: scripted transports in `tests/common`
//
// ## Trust Level
//
// Transports are narrow, single-shot collaborators:
//
// - Execute exactly one HTTP exchange per call
// - Parse the response body (JSON, with a string fallback)
// - Report transport-level failure and nothing else
//
// They must NOT retry, cache, or interpret response bodies beyond parsing;
// error classification is owned by the clients in `crate::client`, and
// timeouts are the transport's own concern.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// HTTP method of a transport request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Read a resource
    Get,
    /// Create or replace a resource
    Post,
}

impl Method {
    /// Wire name of the method
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// One outgoing HTTP request
#[derive(Debug, Clone)]
pub struct Request {
    /// HTTP method
    pub method: Method,
    /// Absolute request URL
    pub url: String,
    /// Header name/value pairs, sent as-is
    pub headers: Vec<(String, String)>,
    /// Optional structured body, serialized as JSON
    pub body: Option<Value>,
}

/// Status code and parsed body of a completed HTTP exchange
#[derive(Debug, Clone)]
pub struct Response {
    /// HTTP status code
    pub status: u16,
    /// Parsed response body; a non-JSON body arrives as a JSON string
    pub body: Value,
}

impl Response {
    /// Whether the status code is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport-level failure (DNS, connectivity, timeout)
#[derive(Error, Debug)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Trait for the injected HTTP transport
///
/// # Thread Safety
///
/// Implementations must be thread-safe and usable across async tasks.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute one HTTP request and return its status and parsed body
    ///
    /// A non-2xx status is NOT a transport error; it is returned as a normal
    /// [`Response`] for the caller to classify.
    async fn execute(&self, request: Request) -> Result<Response, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_range_is_2xx() {
        let ok = Response {
            status: 204,
            body: Value::Null,
        };
        let redirect = Response {
            status: 301,
            body: Value::Null,
        };
        assert!(ok.is_success());
        assert!(!redirect.is_success());
    }

    #[test]
    fn method_wire_names() {
        assert_eq!(Method::Get.as_str(), "GET");
        assert_eq!(Method::Post.as_str(), "POST");
    }
}
