//! Change record for one synchronization pass

use serde::{Deserialize, Serialize};

/// Files created, updated, and deleted by one pass, in processing order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SyncReport {
    /// Files written that had no local counterpart.
    pub created: Vec<String>,
    /// Files whose local content differed from the fetched content.
    pub updated: Vec<String>,
    /// Local files no longer listed by the index.
    pub deleted: Vec<String>,
}

impl SyncReport {
    /// Total number of recorded changes.
    pub fn total_changes(&self) -> usize {
        self.created.len() + self.updated.len() + self.deleted.len()
    }

    /// True when the pass changed nothing.
    pub fn is_empty(&self) -> bool {
        self.total_changes() == 0
    }
}

/// Progress notification emitted while a pass runs.
///
/// The engine itself prints nothing; the CLI turns these into the running
/// per-file log.
#[derive(Debug, Clone)]
pub enum SyncEvent {
    /// The index document was retrieved and scanned for links.
    IndexFetched {
        /// Number of documentation links found, duplicates included.
        link_count: usize,
    },
    /// A file with no local counterpart was written.
    Created(String),
    /// A changed file was overwritten.
    Updated(String),
    /// A file no longer listed by the index was removed.
    Deleted(String),
    /// A document fetch failed; the file was left untouched.
    Skipped {
        /// Local file name derived from the URL.
        name: String,
        /// Failure description for the inline log note.
        reason: String,
    },
}
