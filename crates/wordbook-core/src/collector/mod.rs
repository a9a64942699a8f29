//! Synchronization orchestrator
//!
//! The Collector sequences one collect operation:
//!
//! ```text
//! Idle → Validating → Fetching → Merging → Submitting → Done
//!          │             │          │           │
//!          └─────────────┴──────────┴───────────┴──→ Failed(reason)
//! ```
//!
//! Any failure aborts the pipeline immediately; there is no retry and no
//! rollback. The remote document is only mutated by the final submit, so a
//! failure before submit leaves remote state untouched.
//!
//! ## Concurrency
//!
//! One logical operation per invocation, the two network calls strictly
//! sequential. The core imposes no synchronization across invocations:
//! concurrent operations against the same notebook can race, and the second
//! submit overwrites the first's insertion. The remote API offers no version
//! token to build on; the race is an accepted limitation.

use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use crate::client::{NotepadClient, VocabularyClient};
use crate::config::{ApiKind, CollectConfig};
use crate::error::Result;
use crate::merge;
use crate::traits::Transport;

/// Orchestrates appending one word to the configured remote notebook
pub struct Collector {
    config: CollectConfig,
    backend: Backend,
}

/// The remote API shape the collector talks through
enum Backend {
    Notepad(NotepadClient),
    Vocabulary(VocabularyClient),
}

impl Collector {
    /// Create a collector from a configuration and an injected transport
    pub fn new(config: CollectConfig, transport: Box<dyn Transport>) -> Self {
        let backend = match config.api {
            ApiKind::Notepad => Backend::Notepad(NotepadClient::new(
                transport,
                config.api_base.clone(),
                &config.credentials,
            )),
            ApiKind::Vocabulary => Backend::Vocabulary(VocabularyClient::new(
                transport,
                config.api_base.clone(),
                &config.credentials,
                config.source.clone(),
            )),
        };

        Self { config, backend }
    }

    /// Append one word under today's date heading
    ///
    /// Today is the local calendar date at the time of the call.
    pub async fn collect(&self, word: &str) -> Result<()> {
        self.collect_on(word, Local::now().date_naive()).await
    }

    /// Like [`Collector::collect`], with the section date supplied by the
    /// caller
    ///
    /// Separated out so tests can pin the date; production code goes through
    /// [`Collector::collect`].
    pub async fn collect_on(&self, word: &str, today: NaiveDate) -> Result<()> {
        self.config.validate()?;

        let notebook_id = &self.config.credentials.notebook_id;
        match &self.backend {
            Backend::Notepad(client) => {
                debug!("Fetching notepad {}", notebook_id);
                let notepad = client.fetch(notebook_id).await?;

                debug!("Merging \"{}\" under {}", word, merge::heading_for(today));
                let merged = merge::insert_word(&notepad.content, word, today);
                let updated = notepad.with_content(merged);

                debug!("Submitting merged notepad {}", notebook_id);
                client.submit(notebook_id, &updated).await?;
            }
            Backend::Vocabulary(client) => {
                debug!("Adding \"{}\" through the vocabulary endpoint", word);
                client.add(notebook_id, word).await?;
            }
        }

        info!("Collected \"{}\" into notebook {}", word, notebook_id);
        Ok(())
    }
}
