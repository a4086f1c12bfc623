//! Error types for remote synchronization.

use thiserror::Error;

/// Errors reaching or talking to the remote collection.
///
/// All variants are treated the same way by the actions: logged, then
/// surfaced to the user as a generic transient message. None of them is
/// fatal to the store.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The request never produced a response (connect failure, timeout,
    /// broken transport).
    #[error("request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The remote resource answered outside the 2xx range.
    #[error("remote returned {status} for '{url}'")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The response body was not the expected shape.
    #[error("failed to decode response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}
