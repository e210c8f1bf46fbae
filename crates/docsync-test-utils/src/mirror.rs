//! [`MirrorDir`] fixture for the local mirror directory.

use std::fs;
use std::path::Path;

use docsync_fs::NormalizedPath;
use tempfile::TempDir;

/// A temporary mirror directory with seeding and assertion helpers.
///
/// # Example
///
/// ```rust,no_run
/// use docsync_test_utils::MirrorDir;
///
/// let mirror = MirrorDir::new();
/// mirror.seed("a.md", "old content");
/// mirror.assert_exists("a.md");
/// ```
pub struct MirrorDir {
    temp: TempDir,
}

impl Default for MirrorDir {
    fn default() -> Self {
        Self::new()
    }
}

impl MirrorDir {
    /// Create an empty temporary mirror directory.
    pub fn new() -> Self {
        Self {
            temp: TempDir::new().unwrap(),
        }
    }

    /// Native path of the mirror directory.
    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Normalized path of the mirror directory, for `SyncConfig`.
    pub fn normalized(&self) -> NormalizedPath {
        NormalizedPath::new(self.temp.path())
    }

    /// Seed a file into the mirror before a pass runs.
    pub fn seed(&self, name: &str, content: &str) {
        fs::write(self.temp.path().join(name), content)
            .expect("MirrorDir::seed: failed to write file");
    }

    /// Read a mirrored file's content.
    ///
    /// # Panics
    /// Panics if the file does not exist or is not UTF-8.
    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.temp.path().join(name))
            .expect("MirrorDir::read: failed to read file")
    }

    /// Whether `name` exists in the mirror.
    pub fn has(&self, name: &str) -> bool {
        self.temp.path().join(name).exists()
    }

    /// Assert that `name` exists in the mirror.
    ///
    /// # Panics
    /// Panics with a descriptive message if the file does not exist.
    pub fn assert_exists(&self, name: &str) {
        assert!(self.has(name), "Expected mirrored file to exist: {name}");
    }

    /// Assert that `name` does **not** exist in the mirror.
    ///
    /// # Panics
    /// Panics with a descriptive message if the file exists.
    pub fn assert_absent(&self, name: &str) {
        assert!(!self.has(name), "Expected mirrored file to be absent: {name}");
    }
}
