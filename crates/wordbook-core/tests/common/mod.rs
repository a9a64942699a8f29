//! Test doubles and common utilities for contract tests
//!
//! This module provides a scripted transport that records every request and
//! replays canned outcomes, so the collect pipeline can be verified without
//! any real network.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use serde_json::{Value, json};
use wordbook_core::traits::{Request, Response, Transport, TransportError};
use wordbook_core::{CollectConfig, Credentials};

/// Outcome a scripted transport replays for one request
pub enum Outcome {
    /// Complete the exchange with a status code and parsed body
    Respond { status: u16, body: Value },
    /// Fail at the transport level with the given cause
    Fail(String),
}

/// A transport that replays scripted outcomes in order and records requests
///
/// The request log is shared through an `Arc` so tests keep access after the
/// transport is boxed into a collector.
pub struct ScriptedTransport {
    outcomes: Mutex<VecDeque<Outcome>>,
    requests: Arc<Mutex<Vec<Request>>>,
}

impl ScriptedTransport {
    /// Create a transport and a handle to its request log
    pub fn new(outcomes: Vec<Outcome>) -> (Self, Arc<Mutex<Vec<Request>>>) {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let transport = Self {
            outcomes: Mutex::new(outcomes.into()),
            requests: Arc::clone(&requests),
        };
        (transport, requests)
    }
}

#[async_trait::async_trait]
impl Transport for ScriptedTransport {
    async fn execute(&self, request: Request) -> Result<Response, TransportError> {
        self.requests.lock().unwrap().push(request);

        match self.outcomes.lock().unwrap().pop_front() {
            Some(Outcome::Respond { status, body }) => Ok(Response { status, body }),
            Some(Outcome::Fail(detail)) => Err(TransportError(detail)),
            None => Err(TransportError(
                "scripted transport received an unexpected extra request".to_string(),
            )),
        }
    }
}

/// Minimal valid configuration for tests
pub fn minimal_config() -> CollectConfig {
    CollectConfig::new(Credentials::new("test-token", "1234"))
}

/// Successful fetch envelope wrapping the given document content
pub fn fetch_envelope(content: &str) -> Value {
    json!({
        "success": true,
        "data": {
            "notepad": {
                "status": "PUBLISHED",
                "content": content,
                "title": "words",
                "brief": "collected words",
                "tags": ["pot"],
            }
        }
    })
}

/// Successful submit envelope
pub fn ok_envelope() -> Value {
    json!({ "success": true, "data": {} })
}
