//! Remote document clients for the notebook service
//!
//! [`NotepadClient`] speaks the free-text notepad endpoints: `fetch` reads the
//! current document, `submit` writes the full merged document back to the same
//! resource path. [`VocabularyClient`] is the single-call alternative that
//! appends one word per request with no document round trip.
//!
//! Both translate each outcome into the typed taxonomy in [`crate::error`],
//! evaluated in a fixed order: transport failure → network class, non-2xx →
//! HTTP-status class carrying the raw body, failing envelope → business class
//! carrying the service reason.

use serde_json::{Value, json};

use crate::config::Credentials;
use crate::error::{Error, Result, Stage};
use crate::notepad::Notepad;
use crate::traits::{Method, Request, Response, Transport};

use envelope::{NotepadEnvelope, VocabularyEnvelope};

mod envelope;

/// Content type sent on every request
const CONTENT_TYPE: &str = "application/json;charset=UTF-8";

/// Normalize a token into an `Authorization` header value
///
/// A token already carrying the `Bearer` prefix is used unchanged, so the
/// header is never double-prefixed.
pub fn bearer_header(token: &str) -> String {
    if token.starts_with("Bearer") {
        token.to_string()
    } else {
        format!("Bearer {token}")
    }
}

fn request_headers(authorization: &str) -> Vec<(String, String)> {
    vec![
        ("Content-Type".to_string(), CONTENT_TYPE.to_string()),
        ("Authorization".to_string(), authorization.to_string()),
    ]
}

/// Run one exchange through the transport and classify transport and HTTP
/// failures; a 2xx response is handed back for envelope decoding.
async fn execute(transport: &dyn Transport, stage: Stage, request: Request) -> Result<Response> {
    tracing::debug!("{} {}", request.method.as_str(), request.url);

    let response = transport
        .execute(request)
        .await
        .map_err(|e| Error::network(stage, e.to_string()))?;

    if !response.is_success() {
        return Err(Error::http_status(
            stage,
            response.status,
            response.body.to_string(),
        ));
    }

    Ok(response)
}

/// Decode a notepad envelope, surfacing a failing one as a business error
///
/// The error message is the service-provided `msg`, falling back to the
/// serialized envelope when the service sent none.
fn decode_notepad_envelope(stage: Stage, body: Value) -> Result<NotepadEnvelope> {
    let rendered = body.to_string();
    let envelope: NotepadEnvelope =
        serde_json::from_value(body).map_err(|_| Error::business(stage, rendered.clone()))?;

    if !envelope.success {
        let reason = envelope.msg.unwrap_or(rendered);
        return Err(Error::business(stage, reason));
    }

    Ok(envelope)
}

/// Client for the free-text notepad endpoints
///
/// Holds the injected transport, the resolved API base, and the normalized
/// Authorization value. Carries no state between calls.
pub struct NotepadClient {
    transport: Box<dyn Transport>,
    api_base: String,
    authorization: String,
}

impl NotepadClient {
    /// Create a client from an injected transport and credentials
    pub fn new(
        transport: Box<dyn Transport>,
        api_base: impl Into<String>,
        credentials: &Credentials,
    ) -> Self {
        Self {
            transport,
            api_base: api_base.into().trim_end_matches('/').to_string(),
            authorization: bearer_header(&credentials.auth_token),
        }
    }

    fn notepad_url(&self, notebook_id: &str) -> String {
        format!("{}/notepads/{}", self.api_base, notebook_id)
    }

    /// Read the current notepad document
    ///
    /// ```http
    /// GET /notepads/:notebook_id
    /// Authorization: Bearer <token>
    /// ```
    pub async fn fetch(&self, notebook_id: &str) -> Result<Notepad> {
        let request = Request {
            method: Method::Get,
            url: self.notepad_url(notebook_id),
            headers: request_headers(&self.authorization),
            body: None,
        };

        let response = execute(self.transport.as_ref(), Stage::Fetch, request).await?;

        let rendered = response.body.to_string();
        let NotepadEnvelope { data, msg, .. } = decode_notepad_envelope(Stage::Fetch, response.body)?;
        data.and_then(|data| data.notepad)
            .ok_or_else(|| Error::business(Stage::Fetch, msg.unwrap_or(rendered)))
    }

    /// Write the full document back to the notepad resource
    ///
    /// ```http
    /// POST /notepads/:notebook_id
    /// { "notepad": { ... } }
    /// ```
    pub async fn submit(&self, notebook_id: &str, notepad: &Notepad) -> Result<()> {
        let request = Request {
            method: Method::Post,
            url: self.notepad_url(notebook_id),
            headers: request_headers(&self.authorization),
            body: Some(json!({ "notepad": notepad })),
        };

        let response = execute(self.transport.as_ref(), Stage::Submit, request).await?;
        decode_notepad_envelope(Stage::Submit, response.body)?;
        Ok(())
    }
}

/// Client for the structured vocabulary endpoint
///
/// The simpler alternative protocol: one word per call, no document merging.
pub struct VocabularyClient {
    transport: Box<dyn Transport>,
    api_base: String,
    authorization: String,
    source: String,
}

impl VocabularyClient {
    /// Create a client from an injected transport and credentials
    pub fn new(
        transport: Box<dyn Transport>,
        api_base: impl Into<String>,
        credentials: &Credentials,
        source: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            api_base: api_base.into().trim_end_matches('/').to_string(),
            authorization: bearer_header(&credentials.auth_token),
            source: source.into(),
        }
    }

    /// Append one word in a single structured call
    ///
    /// ```http
    /// POST /vocabularies
    /// { "vocabulary_id": ..., "word": ..., "source": ... }
    /// ```
    pub async fn add(&self, notebook_id: &str, word: &str) -> Result<()> {
        let request = Request {
            method: Method::Post,
            url: format!("{}/vocabularies", self.api_base),
            headers: request_headers(&self.authorization),
            body: Some(json!({
                "vocabulary_id": notebook_id,
                "word": word,
                "source": self.source,
            })),
        };

        let response = execute(self.transport.as_ref(), Stage::Vocabulary, request).await?;

        let rendered = response.body.to_string();
        let envelope: VocabularyEnvelope = serde_json::from_value(response.body)
            .map_err(|_| Error::business(Stage::Vocabulary, rendered.clone()))?;

        if envelope.is_success() {
            Ok(())
        } else {
            Err(Error::business(
                Stage::Vocabulary,
                envelope.msg.unwrap_or(rendered),
            ))
        }
    }
}
