//! Dataset loaders for fcompdata.
//!
//! This crate turns competition data files into [`Dataset`]s:
//!
//! - [`load_json_file`] / [`load_json_reader`] / [`parse_json_str`] - Generic
//!   record loaders
//! - [`BundledDataset`] and [`load_bundled`] - M1, M3 and Tourism
//! - [`load_m4_file`] - One downloaded M4 frequency file
//! - [`read_m4_csv`] - The official M4 train/test CSV pair of one frequency
//! - [`write_json`] - Stores a dataset in the record layout
//!
//! # Example
//!
//! ```no_run
//! use fcompdata_load::{BundledDataset, default_data_dir, load_bundled};
//!
//! let m3 = load_bundled(BundledDataset::M3, &default_data_dir())?;
//! println!("{m3}");
//! # Ok::<(), fcompdata_types::FcompError>(())
//! ```
//!
//! [`Dataset`]: fcompdata_types::Dataset

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bundled;
mod loader;
mod m4;
mod record;

pub use bundled::{BundledDataset, DATA_DIR_ENV, default_data_dir, load_bundled};
pub use loader::{load_json_file, load_json_reader, parse_json_str, write_json};
pub use m4::{load_m4_file, read_m4_csv};
