//! Data home directory layout and cache maintenance.

use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use fcompdata_types::{FcompError, Frequency, Result};

use crate::RemoteDataset;

/// Environment variable overriding the data home.
pub const DATA_HOME_ENV: &str = "FCOMPDATA_HOME";

/// Name of the data home directory inside the user's home directory.
pub const DEFAULT_DIR_NAME: &str = ".fcompdata";

/// Root directory holding downloaded dataset files.
///
/// Layout: `<root>/<dataset>/<dataset>_<frequency>.json`. The only state
/// tracked per entry is whether its file exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataHome {
    root: PathBuf,
}

impl DataHome {
    /// Creates a data home rooted at `root`. Nothing is created on disk.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolves the data home from `FCOMPDATA_HOME`, falling back to
    /// `~/.fcompdata`.
    ///
    /// # Errors
    ///
    /// Returns [`FcompError::NoDataHome`] if no home directory can be found.
    pub fn from_env() -> Result<Self> {
        Self::from_var(std::env::var_os(DATA_HOME_ENV))
    }

    fn from_var(var: Option<OsString>) -> Result<Self> {
        match var.filter(|v| !v.is_empty()) {
            Some(root) => Ok(Self::new(root)),
            None => Self::default_root().map(Self::new),
        }
    }

    /// Returns `~/.fcompdata` for the current user.
    ///
    /// # Errors
    ///
    /// Returns [`FcompError::NoDataHome`] if no home directory can be found.
    pub fn default_root() -> Result<PathBuf> {
        BaseDirs::new()
            .map(|dirs| dirs.home_dir().to_path_buf())
            .or_else(|| std::env::var_os("HOME").map(PathBuf::from))
            .map(|home| home.join(DEFAULT_DIR_NAME))
            .ok_or(FcompError::NoDataHome)
    }

    /// Returns the root path without touching the filesystem.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the root, creating it if needed.
    ///
    /// Creation is idempotent, so concurrent processes may call this freely.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn ensure(&self) -> Result<&Path> {
        fs::create_dir_all(&self.root)?;
        Ok(&self.root)
    }

    /// Returns the cache subdirectory of a dataset.
    #[must_use]
    pub fn dataset_dir(&self, dataset: RemoteDataset) -> PathBuf {
        self.root.join(dataset.dir_name())
    }

    /// Returns the local path of one dataset frequency.
    ///
    /// The mapping is deterministic and does not check existence.
    #[must_use]
    pub fn path_for(&self, dataset: RemoteDataset, frequency: Frequency) -> PathBuf {
        self.dataset_dir(dataset).join(dataset.file_name(frequency))
    }

    /// Returns the local path only if the file has been downloaded.
    #[must_use]
    pub fn cached_path(&self, dataset: RemoteDataset, frequency: Frequency) -> Option<PathBuf> {
        let path = self.path_for(dataset, frequency);
        path.is_file().then_some(path)
    }

    /// Returns true if the dataset frequency has been downloaded.
    #[must_use]
    pub fn is_cached(&self, dataset: RemoteDataset, frequency: Frequency) -> bool {
        self.path_for(dataset, frequency).is_file()
    }

    /// Removes everything under the data home and returns the number of
    /// top-level entries removed.
    ///
    /// The root itself is kept. An absent or empty root is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if an entry cannot be removed.
    pub fn clear_cache(&self) -> Result<usize> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(e.into()),
        };

        let mut removed = 0;
        for entry in entries {
            let entry = entry?;
            let path = entry.path();
            if entry.file_type()?.is_dir() {
                fs::remove_dir_all(&path)?;
            } else {
                fs::remove_file(&path)?;
            }
            tracing::debug!(path = %path.display(), "removed cache entry");
            removed += 1;
        }

        tracing::info!(root = %self.root.display(), removed, "cleared data cache");
        Ok(removed)
    }

    /// Removes one dataset's cache directory.
    ///
    /// Returns false if nothing was cached for it.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be removed.
    pub fn clear_dataset(&self, dataset: RemoteDataset) -> Result<bool> {
        match fs::remove_dir_all(self.dataset_dir(dataset)) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
