//! Command implementations for the docsync CLI

pub mod sync;

pub use sync::{run_sync, run_sync_with_engine};
