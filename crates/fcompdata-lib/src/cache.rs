//! Cache management entry points.

use std::path::PathBuf;

use fcompdata_fetch::{DownloadReport, Downloader, RemoteDataset};
use fcompdata_types::{FcompError, Frequency, Result};

use crate::Config;

/// Returns the data home, creating it if absent.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn get_data_home(config: &Config) -> Result<PathBuf> {
    config.data_home.ensure().map(PathBuf::from)
}

/// Returns the local path of a dataset frequency without checking that it
/// exists.
#[must_use]
pub fn get_path(config: &Config, dataset: RemoteDataset, frequency: Frequency) -> PathBuf {
    config.data_home.path_for(dataset, frequency)
}

/// Downloads one frequency, or all of them when `frequency` is `None`.
///
/// Frequencies already on disk are skipped. Per-frequency failures are
/// collected in the returned report instead of aborting the batch.
///
/// # Errors
///
/// Returns an error if the HTTP client or the data home cannot be set up.
pub fn download(
    config: &Config,
    dataset: RemoteDataset,
    frequency: Option<Frequency>,
) -> Result<DownloadReport> {
    let downloader = Downloader::from_config(config.data_home.clone(), config.client.clone())
        .map_err(|e| FcompError::Http(e.to_string()))?;
    downloader.download(dataset, frequency)
}

/// Removes every cached file under the data home.
///
/// Returns the number of removed entries; an empty or missing cache yields 0.
///
/// # Errors
///
/// Returns an error if an entry cannot be removed.
pub fn clear_cache(config: &Config) -> Result<usize> {
    config.data_home.clear_cache()
}
