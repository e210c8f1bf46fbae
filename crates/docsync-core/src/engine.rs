//! SyncEngine implementation
//!
//! One linear pass: snapshot the mirror directory, fetch the index, fetch
//! each listed document in order, write what changed, then delete what is no
//! longer listed.

use std::collections::HashMap;

use docsync_fs::io;
use tracing::{debug, warn};

use crate::config::{DOC_EXTENSION, INDEX_SNAPSHOT_NAME, SyncConfig};
use crate::fetch::{Fetch, HttpFetcher};
use crate::index::{doc_file_name, extract_doc_urls};
use crate::report::{SyncEvent, SyncReport};
use crate::{Error, Result};

/// Engine for one full mirror pass.
///
/// Documents are fetched strictly sequentially in index order; the deletion
/// pass runs only after every listed document has been reconciled.
pub struct SyncEngine {
    config: SyncConfig,
    fetcher: Box<dyn Fetch>,
}

impl SyncEngine {
    /// Create an engine that talks to the origin over HTTP.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: SyncConfig) -> Result<Self> {
        let fetcher = HttpFetcher::new(config.request_timeout)?;
        Ok(Self {
            config,
            fetcher: Box::new(fetcher),
        })
    }

    /// Create an engine with a caller-supplied [`Fetch`] implementation.
    pub fn with_fetcher(config: SyncConfig, fetcher: Box<dyn Fetch>) -> Self {
        Self { config, fetcher }
    }

    /// Run one pass, discarding progress events.
    pub async fn sync(&self) -> Result<SyncReport> {
        self.sync_with_progress(|_| {}).await
    }

    /// Run one pass, reporting progress through `on_event`.
    ///
    /// Document fetch failures are recovered: the file is skipped, left
    /// untouched on disk, and excluded from the report. An index fetch
    /// failure or any filesystem failure aborts the pass; files already
    /// written stay written.
    pub async fn sync_with_progress<F>(&self, mut on_event: F) -> Result<SyncReport>
    where
        F: FnMut(SyncEvent),
    {
        let mirror = &self.config.mirror_dir;
        io::ensure_dir(mirror)?;

        // Names present before any write of this pass.
        let existing = io::list_files_with_extension(mirror, DOC_EXTENSION)?;

        let index = self
            .fetcher
            .fetch_text(&self.config.index_url)
            .await
            .map_err(|source| Error::IndexFetch {
                source: Box::new(source),
            })?;

        // Raw snapshot for inspection, independent of the reconciliation.
        io::write_text(&mirror.join(INDEX_SNAPSHOT_NAME), &index)?;

        let urls = extract_doc_urls(&index);
        debug!(count = urls.len(), "extracted documentation links");
        on_event(SyncEvent::IndexFetched {
            link_count: urls.len(),
        });

        let mut report = SyncReport::default();
        // File name -> source URL, for every name seen this pass. A name is
        // targeted even when its fetch fails: a failed fetch must not
        // schedule the file for deletion.
        let mut targeted: HashMap<String, String> = HashMap::new();

        for url in &urls {
            let name = doc_file_name(url);
            if let Some(previous) = targeted.insert(name.to_string(), url.clone()) {
                if previous != *url {
                    warn!(name, %previous, %url, "distinct URLs share a file name; last fetch wins");
                }
            }

            let content = match self.fetcher.fetch_text(url).await {
                Ok(content) => content,
                Err(error) => {
                    warn!(%url, %error, "skipping document");
                    on_event(SyncEvent::Skipped {
                        name: name.to_string(),
                        reason: error.to_string(),
                    });
                    continue;
                }
            };

            let path = mirror.join(name);
            if existing.contains(name) {
                let current = io::read_text(&path)?;
                if current != content {
                    io::write_text(&path, &content)?;
                    report.updated.push(name.to_string());
                    on_event(SyncEvent::Updated(name.to_string()));
                }
            } else {
                io::write_text(&path, &content)?;
                report.created.push(name.to_string());
                on_event(SyncEvent::Created(name.to_string()));
            }
        }

        // Baseline files never targeted above are no longer listed.
        for name in &existing {
            if !targeted.contains_key(name) {
                io::remove_file(&mirror.join(name))?;
                report.deleted.push(name.clone());
                on_event(SyncEvent::Deleted(name.clone()));
            }
        }

        Ok(report)
    }

    /// The configuration this engine runs with.
    pub fn config(&self) -> &SyncConfig {
        &self.config
    }
}
