//! Eager loader functions.

use fcompdata_fetch::RemoteDataset;
use fcompdata_load::{BundledDataset, load_bundled, load_m4_file};
use fcompdata_types::{Dataset, Frequency, Result};

use crate::Config;

/// Loads the M1 competition dataset (181 yearly, 203 quarterly and 617
/// monthly series).
///
/// # Errors
///
/// Returns a not-found error if `m1_data.json` is not installed and a parse
/// error if it is malformed.
pub fn load_m1(config: &Config) -> Result<Dataset> {
    load_bundled(BundledDataset::M1, &config.bundled_dir)
}

/// Loads the M3 competition dataset (645 yearly, 756 quarterly, 1428 monthly
/// and 174 other series).
///
/// # Errors
///
/// Returns a not-found error if `m3_data.json` is not installed and a parse
/// error if it is malformed.
pub fn load_m3(config: &Config) -> Result<Dataset> {
    load_bundled(BundledDataset::M3, &config.bundled_dir)
}

/// Loads the Tourism competition dataset (518 yearly, 427 quarterly and 366
/// monthly series).
///
/// # Errors
///
/// Returns a not-found error if `tcomp_data.json` is not installed and a
/// parse error if it is malformed.
pub fn load_tourism(config: &Config) -> Result<Dataset> {
    load_bundled(BundledDataset::Tourism, &config.bundled_dir)
}

/// Loads one M4 frequency from the data home.
///
/// The file must have been downloaded first, see [`crate::download`].
///
/// # Errors
///
/// Returns a not-found error if the frequency has not been downloaded and a
/// parse error if the file is malformed.
pub fn load_m4(config: &Config, frequency: Frequency) -> Result<Dataset> {
    let path = config.data_home.path_for(RemoteDataset::M4, frequency);
    load_m4_file(&path, frequency)
}
