//! Sync configuration and fixed locations

use std::time::Duration;

use docsync_fs::NormalizedPath;

/// Index document listing the documentation file URLs.
pub const DEFAULT_INDEX_URL: &str = "https://code.claude.com/docs/llms.txt";

/// Directory the documentation set is mirrored into.
pub const DEFAULT_MIRROR_DIR: &str = "docs";

/// File name the raw index snapshot is written to on every pass.
pub const INDEX_SNAPSHOT_NAME: &str = "index.txt";

/// Extension of the recognized documentation files.
pub const DOC_EXTENSION: &str = ".md";

/// Timeout applied to the index fetch and to every document fetch.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for one synchronization pass.
///
/// The tool itself is zero-configuration; [`Default`] supplies the fixed
/// production locations. Tests point `index_url` at a local origin and
/// `mirror_dir` at a temp directory.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// URL of the index document.
    pub index_url: String,
    /// Local directory the documentation set is mirrored into.
    pub mirror_dir: NormalizedPath,
    /// Timeout applied to each HTTP request.
    pub request_timeout: Duration,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            index_url: DEFAULT_INDEX_URL.to_string(),
            mirror_dir: NormalizedPath::new(DEFAULT_MIRROR_DIR),
            request_timeout: REQUEST_TIMEOUT,
        }
    }
}
