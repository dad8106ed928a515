//! Configuration file discovery.
//!
//! Every ancestor of the starting directory may hold a `.sift.toml`. The walk ends at the
//! first file marked `root = true`; otherwise the home directory's file is consulted last.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::parse::is_root_config;

/// The configuration filename.
pub const CONFIG_FILENAME: &str = ".sift.toml";

/// Where a discovered config file sits relative to the starting directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigScope {
    /// Found in the starting directory or an ancestor.
    Local,
    /// The file in the home directory.
    Global,
}

/// A discovered config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSource {
    /// Path to the file.
    pub path: PathBuf,
    /// How it was found.
    pub scope: ConfigScope,
}

/// Discovers config files for `cwd`, highest precedence first.
///
/// A home-directory file that is also an ancestor of `cwd` is reported once, as local.
pub fn discover_config_sources(cwd: &Path) -> Vec<ConfigSource> {
    let mut sources: Vec<ConfigSource> = Vec::new();

    for candidate in cwd.ancestors().map(|dir| dir.join(CONFIG_FILENAME)) {
        if !candidate.is_file() {
            continue;
        }
        let stop = is_root_config(&candidate);
        sources.push(ConfigSource {
            path: candidate,
            scope: ConfigScope::Local,
        });
        if stop {
            return sources;
        }
    }

    if let Some(home) = global_config_path().filter(|p| p.is_file())
        && sources.iter().all(|s| s.path != home)
    {
        sources.push(ConfigSource {
            path: home,
            scope: ConfigScope::Global,
        });
    }
    sources
}

/// Discovers config file paths for `cwd`, highest precedence first.
pub fn discover_config_files(cwd: &Path) -> Vec<PathBuf> {
    discover_config_sources(cwd)
        .into_iter()
        .map(|source| source.path)
        .collect()
}

/// Path of the home-directory config file, if the home directory is known.
pub fn global_config_path() -> Option<PathBuf> {
    let dirs = BaseDirs::new()?;
    Some(dirs.home_dir().join(CONFIG_FILENAME))
}
