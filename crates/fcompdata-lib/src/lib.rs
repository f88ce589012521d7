//! Forecasting competition datasets with R-style access.
//!
//! This is a facade crate that re-exports the fcompdata workspace crates and
//! adds lazy dataset handles.
//!
//! # Quick Start
//!
//! ```no_run
//! use fcompdata_lib::prelude::*;
//!
//! let config = Config::from_env()?;
//! let datasets = Datasets::new(config);
//!
//! // 1-based, like R's Mcomp
//! let series = datasets.m3().series(1)?;
//! println!("{} train={} test={} h={}", series.sn(), series.n(), series.xx().len(), series.h());
//!
//! let monthly = datasets.m1().subset(SeriesType::Monthly)?;
//! println!("{monthly}");
//!
//! // M4 is downloaded on request and read from the data home afterwards
//! download(datasets.config(), RemoteDataset::M4, Some(Frequency::Hourly))?.into_result()?;
//! let hourly = datasets.m4(Frequency::Hourly).get()?;
//! println!("{hourly}");
//! # Ok::<(), FcompError>(())
//! ```

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cache;
mod config;
mod lazy;
mod load;
mod registry;

pub use cache::{clear_cache, download, get_data_home, get_path};
pub use config::Config;
pub use lazy::LazyDataset;
pub use load::{load_m1, load_m3, load_m4, load_tourism};
pub use registry::Datasets;

// Re-export core types
pub use fcompdata_types::*;

// Re-export loaders
pub use fcompdata_load::{
    BundledDataset, DATA_DIR_ENV, default_data_dir, load_bundled, load_json_file,
    load_json_reader, load_m4_file, parse_json_str, read_m4_csv, write_json,
};

// Re-export the download cache
pub use fcompdata_fetch::{
    BASE_URL_ENV, ClientConfig, DATA_HOME_ENV, DataHome, DownloadClient, DownloadError,
    DownloadOutcome, DownloadReport, Downloader, Fetch, RemoteDataset, Split,
};

/// Prelude module for convenient imports.
///
/// ```
/// use fcompdata_lib::prelude::*;
/// ```
pub mod prelude {
    pub use fcompdata_types::{
        Dataset, FcompError, Frequency, RangeError, Result, Series, SeriesType,
    };

    pub use fcompdata_fetch::{DataHome, DownloadReport, RemoteDataset};
    pub use fcompdata_load::BundledDataset;

    pub use crate::{
        Config, Datasets, LazyDataset, clear_cache, download, get_data_home, get_path, load_m1,
        load_m3, load_m4, load_tourism,
    };
}
