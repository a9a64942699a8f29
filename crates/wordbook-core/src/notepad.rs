//! The remote notepad document

use serde::{Deserialize, Serialize};

/// A cloud notepad document as returned by the remote service
///
/// `content` is the only field the core interprets or mutates: a
/// newline-delimited sequence of date-sectioned lines. The remaining fields
/// are carried verbatim through the fetch → submit round trip. Anything else
/// the service returns (ids, timestamps) is dropped on fetch and therefore
/// never submitted back, matching the service's own update contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notepad {
    /// Publication status of the notepad
    #[serde(default)]
    pub status: String,

    /// Full document text, newline-delimited
    #[serde(default)]
    pub content: String,

    /// Display title
    #[serde(default)]
    pub title: String,

    /// Short description
    #[serde(default)]
    pub brief: String,

    /// Service-side tags
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Notepad {
    /// Replace the document content, leaving every other field untouched
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }
}
