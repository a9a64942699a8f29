//! Error types for the wordbook system
//!
//! This module defines all error types used throughout the crate.
//!
//! The taxonomy has exactly four classes, evaluated in a fixed order at each
//! remote call:
//!
//! - [`Error::Config`]: a required credential is missing; detected before any
//!   network access
//! - [`Error::Network`]: transport-level failure (DNS, connectivity, timeout)
//! - [`Error::HttpStatus`]: the service answered with a non-2xx status
//! - [`Error::Business`]: a 2xx response whose envelope reports failure
//!
//! All classes are fatal to the operation; nothing is retried.

use thiserror::Error;

/// Result type alias for wordbook operations
pub type Result<T> = std::result::Result<T, Error>;

/// The remote call an error was raised in
///
/// Network, HTTP, and business errors carry their stage so the final message
/// tells the user which half of the round trip failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Reading the current notepad document
    Fetch,
    /// Writing the merged notepad document back
    Submit,
    /// Single-call insertion through the vocabulary endpoint
    Vocabulary,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Fetch => write!(f, "fetching the notepad"),
            Stage::Submit => write!(f, "updating the notepad"),
            Stage::Vocabulary => write!(f, "adding the vocabulary entry"),
        }
    }
}

/// Core error type for the wordbook system
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration errors (missing or invalid credentials)
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// Transport-level failure on a remote call
    #[error("network error while {stage}: {detail}")]
    Network {
        /// Remote call the failure occurred in
        stage: Stage,
        /// Underlying transport cause
        detail: String,
    },

    /// Non-2xx HTTP response
    #[error("HTTP error while {stage}: status {status}, response: {body}")]
    HttpStatus {
        /// Remote call the failure occurred in
        stage: Stage,
        /// HTTP status code of the response
        status: u16,
        /// Raw response body, for diagnosis
        body: String,
    },

    /// 2xx response whose envelope indicates failure
    #[error("request rejected while {stage}: {message}")]
    Business {
        /// Remote call the failure occurred in
        stage: Stage,
        /// Service-provided reason, or the serialized envelope
        message: String,
    },
}

impl Error {
    /// Create a network error
    pub fn network(stage: Stage, detail: impl Into<String>) -> Self {
        Self::Network {
            stage,
            detail: detail.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(stage: Stage, status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            stage,
            status,
            body: body.into(),
        }
    }

    /// Create a business-logic error
    pub fn business(stage: Stage, message: impl Into<String>) -> Self {
        Self::Business {
            stage,
            message: message.into(),
        }
    }

    /// The remote call this error was raised in, if any
    ///
    /// Configuration errors are detected before any remote call and have no
    /// stage.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            Self::Config(_) => None,
            Self::Network { stage, .. }
            | Self::HttpStatus { stage, .. }
            | Self::Business { stage, .. } => Some(*stage),
        }
    }
}
