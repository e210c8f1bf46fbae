//! Synchronization engine for docsync
//!
//! Mirrors a remote documentation set into a local directory: fetches the
//! index document, downloads each listed file, writes new and changed files,
//! and removes local files no longer listed.
//!
//! # Example
//!
//! ```ignore
//! use docsync_core::{SyncConfig, SyncEngine};
//!
//! # async fn run() -> docsync_core::Result<()> {
//! let engine = SyncEngine::new(SyncConfig::default())?;
//! let report = engine.sync().await?;
//! println!("{} changes", report.total_changes());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod fetch;
pub mod index;
pub mod report;

pub use config::{
    DEFAULT_INDEX_URL, DEFAULT_MIRROR_DIR, DOC_EXTENSION, INDEX_SNAPSHOT_NAME, SyncConfig,
};
pub use engine::SyncEngine;
pub use error::{Error, Result};
pub use fetch::{Fetch, HttpFetcher};
pub use index::{doc_file_name, extract_doc_urls};
pub use report::{SyncEvent, SyncReport};
