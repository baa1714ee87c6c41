//! Error types surfaced by member page fetches.

use thiserror::Error;

/// Errors returned while fetching a page from the directory service.
///
/// A fetch failure is never fatal to the listing: the state machine records
/// it, keeps the last good page on display, and leaves retrying to the
/// consumer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// Networking failed while calling the directory service.
    #[error("network error talking to the directory service: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// The directory service returned an error response.
    #[error("directory service error: {message}")]
    Service {
        /// Response detail describing the failure.
        message: String,
    },
}
