//! Errors raised by server round trips.

/// Result alias used by the API bindings.
pub type SyncResult<T> = Result<T, SyncError>;

#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// The request never produced an HTTP response (offline, CORS, aborted).
    #[error("transport error: {0}")]
    Transport(String),

    #[error("{path} answered HTTP {status}")]
    Status { path: String, status: u16 },

    #[error("failed to decode response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}
