// # wordbook-core
//
// Core library for appending user-selected words to remote, cloud-hosted
// vocabulary notebooks.
//
// ## Architecture Overview
//
// This library provides the full collect pipeline for the notepad-style API
// and the simpler single-call vocabulary alternative:
//
// - **Transport**: trait for the injected HTTP capability; the core never
//   talks to the network directly
// - **NotepadClient / VocabularyClient**: typed clients for the two remote
//   API shapes, owning error classification
// - **merge**: pure insertion of a word into a date-sectioned document
// - **Collector**: orchestrates validate → fetch → merge → submit
//
// ## Design Principles
//
// 1. **Separation of Concerns**: classification and merging are separate from
//    transport implementations
// 2. **Library-First**: everything the CLI does is available as a library
// 3. **Pure Core**: the document mutation is a pure function, testable
//    without any network
// 4. **Single-Shot**: one operation per invocation; no caching, no retries,
//    no state across calls

pub mod client;
pub mod collector;
pub mod config;
pub mod error;
pub mod merge;
pub mod notepad;
pub mod traits;

// Re-export core types for convenience
pub use client::{NotepadClient, VocabularyClient};
pub use collector::Collector;
pub use config::{ApiKind, CollectConfig, ConfigError, Credentials};
pub use error::{Error, Result, Stage};
pub use notepad::Notepad;
pub use traits::{Method, Request, Response, Transport, TransportError};
