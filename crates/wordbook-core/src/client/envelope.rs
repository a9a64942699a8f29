//! Typed response envelopes for the two remote API shapes
//!
//! The notepad endpoints wrap results in `{ success, data, msg }`; the
//! vocabulary endpoint uses a numeric `{ code, msg, data }` with `code == 0`
//! meaning success. Each shape gets its own decoder rather than duck-typed
//! field probing.

use serde::Deserialize;

use crate::notepad::Notepad;

/// `{ success, data: { notepad }, msg }` envelope of the notepad endpoints
#[derive(Debug, Deserialize)]
pub(crate) struct NotepadEnvelope {
    #[serde(default)]
    pub success: bool,

    #[serde(default)]
    pub data: Option<NotepadData>,

    #[serde(default)]
    pub msg: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NotepadData {
    #[serde(default)]
    pub notepad: Option<Notepad>,
}

/// `{ code, msg }` envelope of the vocabulary endpoint
#[derive(Debug, Deserialize)]
pub(crate) struct VocabularyEnvelope {
    // An absent code must not read as success.
    #[serde(default = "missing_code")]
    pub code: i64,

    #[serde(default)]
    pub msg: Option<String>,
}

impl VocabularyEnvelope {
    pub fn is_success(&self) -> bool {
        self.code == 0
    }
}

fn missing_code() -> i64 {
    -1
}
