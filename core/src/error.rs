//! Error types for the catalog client.
//!
//! # Design
//! One enum covers every way fetching the catalog can fail. The kinds are
//! kept apart so a host can tell "never got a response" from "got a bad
//! response" from "got an unreadable response". Errors are returned, never
//! logged here; the host reports them once at its top level.

use thiserror::Error;

/// Errors returned while fetching and decoding the product list.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request never produced a response (unreachable host, reset, ...).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body could not be decoded into products.
    #[error("decoding products failed: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Decode(err.to_string())
    }
}
