//! End-to-end reconciliation flow across multiple passes
//!
//! Each pass builds a fresh engine the way the CLI does, against the same
//! mirror directory, with the origin's content evolving between passes.

use docsync_core::{SyncConfig, SyncEngine, SyncReport};
use docsync_fs::NormalizedPath;
use docsync_test_utils::origin::index_line;
use docsync_test_utils::{FakeDocs, MirrorDir};
use pretty_assertions::assert_eq;

async fn pass(mirror_dir: NormalizedPath, origin: FakeDocs) -> SyncReport {
    let config = SyncConfig {
        index_url: origin.index_url().to_string(),
        mirror_dir,
        ..SyncConfig::default()
    };
    SyncEngine::with_fetcher(config, Box::new(origin))
        .sync()
        .await
        .unwrap()
}

#[tokio::test]
async fn full_lifecycle_create_settle_update_delete() {
    let mirror = MirrorDir::new();

    // First pass against an empty mirror: everything is new.
    let index = format!("{}{}", index_line("Alpha", "a.md"), index_line("Beta", "b.md"));
    let origin = FakeDocs::new(index.clone())
        .doc("a.md", "alpha v1")
        .doc("b.md", "beta v1");
    let report = pass(mirror.normalized(), origin).await;
    assert_eq!(report.created, vec!["a.md", "b.md"]);
    assert!(report.updated.is_empty());
    assert!(report.deleted.is_empty());

    // Second pass with identical content: nothing to do.
    let origin = FakeDocs::new(index)
        .doc("a.md", "alpha v1")
        .doc("b.md", "beta v1");
    let report = pass(mirror.normalized(), origin).await;
    assert!(report.is_empty());

    // Third pass: beta changed, gamma appeared, alpha dropped from the index.
    let index = format!("{}{}", index_line("Beta", "b.md"), index_line("Gamma", "c.md"));
    let origin = FakeDocs::new(index)
        .doc("b.md", "beta v2")
        .doc("c.md", "gamma v1");
    let report = pass(mirror.normalized(), origin).await;
    assert_eq!(report.updated, vec!["b.md"]);
    assert_eq!(report.created, vec!["c.md"]);
    assert_eq!(report.deleted, vec!["a.md"]);

    mirror.assert_absent("a.md");
    assert_eq!(mirror.read("b.md"), "beta v2");
    assert_eq!(mirror.read("c.md"), "gamma v1");
}

#[tokio::test]
async fn mirror_directory_is_created_with_missing_parents() {
    let temp = tempfile::TempDir::new().unwrap();
    let mirror_dir = NormalizedPath::new(temp.path()).join("mirror/docs");

    let origin = FakeDocs::new(index_line("A", "a.md")).doc("a.md", "body");
    let report = pass(mirror_dir.clone(), origin).await;

    assert_eq!(report.created, vec!["a.md"]);
    assert!(mirror_dir.join("a.md").exists());
}

#[tokio::test]
async fn skipped_file_is_picked_up_by_a_later_pass() {
    let mirror = MirrorDir::new();
    let index = index_line("A", "a.md");

    // The document's first fetch fails; the pass still succeeds.
    let origin = FakeDocs::new(index.clone()).failing_doc("a.md", 500);
    let report = pass(mirror.normalized(), origin).await;
    assert!(report.is_empty());
    mirror.assert_absent("a.md");

    // The origin recovers and the next pass creates the file.
    let origin = FakeDocs::new(index).doc("a.md", "finally");
    let report = pass(mirror.normalized(), origin).await;
    assert_eq!(report.created, vec!["a.md"]);
    assert_eq!(mirror.read("a.md"), "finally");
}

#[tokio::test]
async fn unrecognized_local_files_are_never_touched() {
    let mirror = MirrorDir::new();
    mirror.seed("notes.txt", "not a doc");
    mirror.seed("stale.md", "doc");

    let origin = FakeDocs::new("no links at all");
    let report = pass(mirror.normalized(), origin).await;

    // Only recognized documentation files participate in deletion.
    assert_eq!(report.deleted, vec!["stale.md"]);
    assert_eq!(mirror.read("notes.txt"), "not a doc");
}
