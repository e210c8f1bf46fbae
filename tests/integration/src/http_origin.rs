//! Engine passes against a real HTTP origin
//!
//! The extraction pattern only accepts `https://` links, so these tests
//! exercise the transport path and the zero-link behavior rather than full
//! reconciliation; see `sync_flow.rs` for that.

use std::time::Duration;

use docsync_core::{Error, SyncConfig, SyncEngine, INDEX_SNAPSHOT_NAME};
use docsync_test_utils::{MirrorDir, MockDocs};
use pretty_assertions::assert_eq;

fn config_for(mirror: &MirrorDir, server: &MockDocs) -> SyncConfig {
    SyncConfig {
        index_url: server.index_url(),
        mirror_dir: mirror.normalized(),
        request_timeout: Duration::from_secs(5),
    }
}

#[tokio::test]
async fn index_without_recognized_links_empties_the_mirror() {
    let mirror = MirrorDir::new();
    mirror.seed("stale.md", "old");

    let server = MockDocs::start().await;
    let index_body = format!("- [A]({}/en/docs/a.md)\n", server.uri());
    server.serve_index(&index_body).await;

    let engine = SyncEngine::new(config_for(&mirror, &server)).unwrap();
    let report = engine.sync().await.unwrap();

    // Plain-http links do not match the pattern, so the target set is empty
    // and the baseline is cleared.
    assert!(report.created.is_empty());
    assert_eq!(report.deleted, vec!["stale.md"]);

    // The raw snapshot is still written, byte for byte.
    assert_eq!(mirror.read(INDEX_SNAPSHOT_NAME), index_body);
}

#[tokio::test]
async fn index_server_error_aborts_the_pass() {
    let mirror = MirrorDir::new();
    mirror.seed("a.md", "survives");

    let server = MockDocs::start().await;
    server.fail_index(503).await;

    let engine = SyncEngine::new(config_for(&mirror, &server)).unwrap();
    let error = engine.sync().await.unwrap_err();

    assert!(matches!(error, Error::IndexFetch { .. }));
    assert!(error.to_string().contains("503"));
    assert_eq!(mirror.read("a.md"), "survives");
}

#[tokio::test]
async fn unreachable_index_origin_aborts_the_pass() {
    let mirror = MirrorDir::new();

    let server = MockDocs::start().await;
    let config = config_for(&mirror, &server);
    drop(server);

    let engine = SyncEngine::new(config).unwrap();
    let error = engine.sync().await.unwrap_err();

    assert!(matches!(error, Error::IndexFetch { .. }));
    assert!(error.to_string().starts_with("Failed to fetch index:"));
}
