//! Library configuration.

use std::path::PathBuf;

use fcompdata_fetch::{ClientConfig, DataHome};
use fcompdata_load::default_data_dir;
use fcompdata_types::Result;

/// Where datasets are read from and downloaded to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the bundled M1, M3 and Tourism files.
    pub bundled_dir: PathBuf,
    /// Cache root for downloaded datasets.
    pub data_home: DataHome,
    /// HTTP settings for downloads.
    pub client: ClientConfig,
}

impl Config {
    /// Creates a configuration with the default HTTP settings.
    #[must_use]
    pub fn new(bundled_dir: impl Into<PathBuf>, data_home: DataHome) -> Self {
        Self {
            bundled_dir: bundled_dir.into(),
            data_home,
            client: ClientConfig::default(),
        }
    }

    /// Builds the configuration from the environment.
    ///
    /// Reads `FCOMPDATA_DATA_DIR`, `FCOMPDATA_HOME` and `FCOMPDATA_M4_URL`,
    /// falling back to the crate's `data/` directory, `~/.fcompdata` and the
    /// default download mirror.
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined for the data
    /// cache.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            bundled_dir: default_data_dir(),
            data_home: DataHome::from_env()?,
            client: ClientConfig::from_env(),
        })
    }

    /// Replaces the HTTP settings.
    #[must_use]
    pub fn with_client(mut self, client: ClientConfig) -> Self {
        self.client = client;
        self
    }
}
