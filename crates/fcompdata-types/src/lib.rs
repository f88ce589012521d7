//! Core types for fcompdata forecasting competition datasets.
//!
//! This crate provides the data structures shared by the loaders, the
//! download cache and the facade crate:
//!
//! - [`Series`] - One series with training/test split, horizon and period
//! - [`Dataset`] - Ordered series collection with 1-based indexing
//! - [`SeriesType`] - Yearly, quarterly, monthly, ... classification
//! - [`Frequency`] - The six M4 frequency subsets
//! - [`FcompError`] - Error taxonomy for every fcompdata operation

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod dataset;
mod error;
mod frequency;
mod series;
mod series_type;

pub use dataset::Dataset;
pub use error::{FcompError, RangeError, Result};
pub use frequency::{Frequency, FrequencyParseError};
pub use series::{SERIES_KEYS, Series, SeriesError, SeriesField};
pub use series_type::{SeriesType, SeriesTypeParseError};
