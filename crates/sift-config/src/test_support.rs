//! Temporary directory trees of `.sift.toml` files for unit tests.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

use crate::discovery::CONFIG_FILENAME;

/// A throwaway directory tree that config files can be planted in.
pub struct ConfigTree {
    /// Owned temporary directory, removed on drop.
    root: TempDir,
}

impl ConfigTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
        }
    }

    /// Returns `rel` under the tree root, creating the directory.
    pub fn dir(&self, rel: &str) -> PathBuf {
        let path = self.root.path().join(rel);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Plants a `.sift.toml` with the given contents in `rel` ("" for the tree root).
    pub fn config(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.dir(rel).join(CONFIG_FILENAME);
        fs::write(&path, contents).unwrap();
        path
    }

    /// Plants a config that only sets `[settings]` keys.
    pub fn settings(&self, rel: &str, settings: &str) -> PathBuf {
        self.config(rel, &format!("[settings]\n{settings}\n"))
    }

    /// Returns the tree root.
    pub fn path(&self) -> &Path {
        self.root.path()
    }
}
