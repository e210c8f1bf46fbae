//! Error types for docsync-core

/// Result type for docsync-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during a synchronization pass
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The index document could not be retrieved. Fatal for the run.
    #[error("Failed to fetch index: {source}")]
    IndexFetch {
        #[source]
        source: Box<Error>,
    },

    /// A request completed with a non-success status.
    #[error("unexpected status {status} fetching {url}")]
    Status { url: String, status: u16 },

    /// A request failed below the HTTP layer.
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Filesystem error from docsync-fs
    #[error(transparent)]
    Fs(#[from] docsync_fs::Error),
}
