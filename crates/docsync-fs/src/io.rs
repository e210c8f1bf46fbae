//! Blocking filesystem operations for the mirror directory

use std::collections::BTreeSet;
use std::fs::{self, OpenOptions};
use std::io::Write;

use fs2::FileExt;

use crate::{Error, NormalizedPath, Result};

/// Create `dir` and any missing parents.
pub fn ensure_dir(dir: &NormalizedPath) -> Result<()> {
    let native = dir.to_native();
    fs::create_dir_all(&native).map_err(|e| Error::io(&native, e))
}

/// List the names of plain files in `dir` whose name ends with `extension`.
///
/// Returns a sorted set so callers iterate in a stable order. Directories
/// and non-UTF-8 names are skipped.
pub fn list_files_with_extension(
    dir: &NormalizedPath,
    extension: &str,
) -> Result<BTreeSet<String>> {
    let native = dir.to_native();
    let mut names = BTreeSet::new();

    for entry in fs::read_dir(&native).map_err(|e| Error::io(&native, e))? {
        let entry = entry.map_err(|e| Error::io(&native, e))?;
        let file_type = entry.file_type().map_err(|e| Error::io(entry.path(), e))?;
        if !file_type.is_file() {
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if name.ends_with(extension) {
            names.insert(name.to_string());
        }
    }

    Ok(names)
}

/// Read a file's content as UTF-8 text.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native = path.to_native();
    fs::read_to_string(&native).map_err(|e| Error::io(&native, e))
}

/// Write content atomically to a file with locking.
///
/// Uses write-to-temp-then-rename to prevent partial writes, holding an
/// advisory lock on the temp file. The parent directory is created if it
/// does not exist yet.
pub fn write_atomic(path: &NormalizedPath, content: &[u8]) -> Result<()> {
    let native = path.to_native();

    if let Some(parent) = native.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    // Temp file lives next to the destination so the rename stays on one
    // filesystem.
    let temp_name = format!(
        ".{}.{}.tmp",
        native
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = native.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file.lock_exclusive().map_err(|_| Error::LockFailed {
        path: native.clone(),
    })?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(&temp_path, e))?;
    temp_file
        .sync_all()
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file.unlock().map_err(|_| Error::LockFailed {
        path: native.clone(),
    })?;

    fs::rename(&temp_path, &native).map_err(|e| Error::io(&native, e))?;

    Ok(())
}

/// Write UTF-8 text atomically to a file.
pub fn write_text(path: &NormalizedPath, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}

/// Remove a file.
pub fn remove_file(path: &NormalizedPath) -> Result<()> {
    let native = path.to_native();
    fs::remove_file(&native).map_err(|e| Error::io(&native, e))
}
