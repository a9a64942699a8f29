// # Reqwest Transport
//
// This crate provides the production `Transport` implementation for the
// wordbook system, backed by `reqwest`.
//
// ## Purpose
//
// All real HTTP lives here. The core stays free of network dependencies and
// is exercised in tests through scripted transports.
//
// ## Constraints
//
// - Executes exactly one HTTP exchange per call
// - NO retry logic (failures propagate to the caller)
// - NO caching
// - NO classification of HTTP status or envelopes (owned by the core clients)
// - Timeout is configured on the client and reported as a transport error

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use wordbook_core::traits::{Method, Request, Response, Transport, TransportError};

/// Default HTTP timeout for API requests (30 seconds)
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP transport backed by a shared `reqwest::Client`
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport with the default request timeout
    pub fn new() -> Result<Self, TransportError> {
        Self::with_timeout(DEFAULT_HTTP_TIMEOUT)
    }

    /// Create a transport with an explicit request timeout
    pub fn with_timeout(timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: Request) -> Result<Response, TransportError> {
        let mut builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
        };

        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError(format!("request failed: {e}")))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| TransportError(format!("failed to read response body: {e}")))?;

        // Non-JSON bodies still matter for HTTP status diagnostics.
        let body = serde_json::from_str(&text).unwrap_or(Value::String(text));

        Ok(Response { status, body })
    }
}
