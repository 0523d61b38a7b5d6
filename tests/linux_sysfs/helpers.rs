//! Fake sysfs and procfs trees.

use camino::{Utf8Path, Utf8PathBuf};
use rstest::fixture;
use std::fs;
use tempfile::TempDir;

/// Temporary directory laid out like a sysfs or procfs mount.
pub struct FakeTree {
    dir: TempDir,
}

impl FakeTree {
    /// Returns the mount point.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory path is not UTF-8.
    #[must_use]
    pub fn root(&self) -> Utf8PathBuf {
        Utf8Path::from_path(self.dir.path())
            .expect("temporary directory should be UTF-8")
            .to_path_buf()
    }

    /// Writes `contents` to `relative`, creating parent directories.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    pub fn write(&self, relative: &str, contents: &str) {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent directories");
        }
        fs::write(&path, contents).expect("write fake attribute");
    }

    /// Creates an empty directory at `relative`.
    ///
    /// # Panics
    ///
    /// Panics if the directory cannot be created.
    pub fn mkdir(&self, relative: &str) {
        fs::create_dir_all(self.dir.path().join(relative)).expect("create fake directory");
    }

    /// Reads the file at `relative`.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be read.
    #[must_use]
    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative)).expect("read fake attribute")
    }
}

/// Provides an empty fake tree.
#[fixture]
pub fn tree() -> FakeTree {
    FakeTree {
        dir: TempDir::new().expect("create temporary directory"),
    }
}

/// Adds an rfkill entry with `hard`/`soft` attributes.
pub fn add_rfkill(tree: &FakeTree, id: &str, kind: &str, name: &str, hard: u8, soft: u8) {
    tree.write(&format!("class/rfkill/{id}/type"), &format!("{kind}\n"));
    tree.write(&format!("class/rfkill/{id}/name"), &format!("{name}\n"));
    tree.write(&format!("class/rfkill/{id}/hard"), &format!("{hard}\n"));
    tree.write(&format!("class/rfkill/{id}/soft"), &format!("{soft}\n"));
}
