//! Download cache for fcompdata's remote datasets.
//!
//! This crate manages datasets too large to bundle:
//!
//! - [`DataHome`] - Cache root, path mapping and cache clearing
//! - [`RemoteDataset`] / [`remote_url`] - Remote and local file naming
//! - [`DownloadClient`] - Blocking HTTP client implementing [`Fetch`]
//! - [`Downloader`] - Skip-if-present downloads converted and renamed into
//!   place atomically
//!
//! # Example
//!
//! ```no_run
//! use fcompdata_fetch::{ClientConfig, DataHome, Downloader, RemoteDataset};
//! use fcompdata_types::Frequency;
//!
//! let downloader = Downloader::from_config(DataHome::from_env()?, ClientConfig::from_env())?;
//! let report = downloader.download(RemoteDataset::M4, Some(Frequency::Yearly))?;
//! for (frequency, outcome) in report.succeeded() {
//!     println!("{frequency}: {}", outcome.path().display());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cache;
mod client;
mod download;
mod remote;

pub use cache::{DATA_HOME_ENV, DEFAULT_DIR_NAME, DataHome};
pub use client::{ClientConfig, DownloadClient, DownloadError, Fetch};
pub use download::{DownloadOutcome, DownloadReport, Downloader};
pub use remote::{BASE_URL_ENV, DEFAULT_BASE_URL, RemoteDataset, Split, remote_url};
