//! Core traits for the wordbook system
//!
//! This module defines the abstract interfaces the core depends on.
//!
//! - [`Transport`]: execute one HTTP exchange on behalf of the core

pub mod transport;

pub use transport::{Method, Request, Response, Transport, TransportError};
