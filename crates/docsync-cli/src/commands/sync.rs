//! Sync command implementation
//!
//! Prints the running per-file log while the engine works, then the final
//! tri-section change summary.

use colored::Colorize;
use docsync_core::{SyncConfig, SyncEngine, SyncEvent, SyncReport};

use crate::error::Result;

/// Run one synchronization pass against `config` and print the results.
pub async fn run_sync(config: SyncConfig) -> Result<()> {
    let engine = SyncEngine::new(config)?;
    run_sync_with_engine(&engine).await
}

/// Run one pass with a prepared engine.
pub async fn run_sync_with_engine(engine: &SyncEngine) -> Result<()> {
    println!("Downloading index...");

    let report = engine
        .sync_with_progress(|event| match event {
            SyncEvent::IndexFetched { link_count } => {
                println!("Found {link_count} documentation files to sync...\n");
            }
            SyncEvent::Created(name) => println!("  {} {}", "+".green(), name),
            SyncEvent::Updated(name) => println!("  {} {}", "~".yellow(), name),
            SyncEvent::Deleted(name) => println!("  {} {}", "-".red(), name),
            SyncEvent::Skipped { name, reason } => {
                eprintln!("  {} {}: {}", "!".red(), name, reason);
            }
        })
        .await?;

    print_summary(&report);
    Ok(())
}

/// Print the banner-framed summary: created, updated, deleted.
fn print_summary(report: &SyncReport) {
    println!("\n{}", "=".repeat(40));
    println!("Documentation Sync Complete");
    println!("{}\n", "=".repeat(40));

    print_section("New files", &report.created);
    println!();
    print_section("Updated files", &report.updated);
    println!();
    print_section("Deleted files", &report.deleted);
}

fn print_section(label: &str, names: &[String]) {
    println!("{} ({}):", label, names.len());
    if names.is_empty() {
        println!("  (none)");
    } else {
        for name in names {
            println!("  - {name}");
        }
    }
}
