//! Load-on-first-access dataset handle.

use std::ops::RangeInclusive;
use std::sync::{Mutex, OnceLock, PoisonError};

use fcompdata_types::{Dataset, Result, Series, SeriesType};

type Loader = dyn Fn() -> Result<Dataset> + Send + Sync;

/// A dataset that is loaded on first access and kept for the handle's
/// lifetime.
///
/// The loader runs at most once per successful load, even when several
/// threads touch the handle at the same time. A failed load is not
/// remembered: the error is returned and the next access tries again.
///
/// ```
/// use fcompdata_lib::{Dataset, LazyDataset};
///
/// let handle = LazyDataset::new("Empty", || Ok(Dataset::new("Empty", Vec::new())));
/// assert!(!handle.is_loaded());
/// assert_eq!(handle.len()?, 0);
/// assert!(handle.is_loaded());
/// # Ok::<(), fcompdata_lib::FcompError>(())
/// ```
pub struct LazyDataset {
    name: String,
    loader: Box<Loader>,
    data: OnceLock<Dataset>,
    init: Mutex<()>,
}

impl LazyDataset {
    /// Creates a handle that calls `loader` on first access.
    pub fn new<F>(name: impl Into<String>, loader: F) -> Self
    where
        F: Fn() -> Result<Dataset> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            loader: Box::new(loader),
            data: OnceLock::new(),
            init: Mutex::new(()),
        }
    }

    /// Returns the handle name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true once the dataset has been loaded.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.data.get().is_some()
    }

    /// Returns the dataset, loading it on first call.
    ///
    /// Every successful call returns the same instance.
    ///
    /// # Errors
    ///
    /// Propagates the loader's error unchanged.
    pub fn get(&self) -> Result<&Dataset> {
        if let Some(dataset) = self.data.get() {
            return Ok(dataset);
        }

        // Poisoned only if an earlier loader panicked, in which case the cell is still empty
        let _guard = self.init.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(dataset) = self.data.get() {
            return Ok(dataset);
        }

        let dataset = (self.loader)()?;
        tracing::debug!(
            dataset = %self.name,
            series = dataset.len(),
            "materialized lazy dataset"
        );
        Ok(self.data.get_or_init(|| dataset))
    }

    /// Returns the number of series.
    ///
    /// # Errors
    ///
    /// Propagates load errors.
    pub fn len(&self) -> Result<usize> {
        Ok(self.get()?.len())
    }

    /// Returns true if the loaded dataset has no series.
    ///
    /// # Errors
    ///
    /// Propagates load errors.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.get()?.is_empty())
    }

    /// Returns the series at a 1-based index.
    ///
    /// # Errors
    ///
    /// Propagates load errors, or returns
    /// [`FcompError::Range`](fcompdata_types::FcompError::Range) for an
    /// invalid index.
    pub fn series(&self, index: usize) -> Result<&Series> {
        Ok(self.get()?.get(index)?)
    }

    /// Returns the valid indices, `1..=len`.
    ///
    /// # Errors
    ///
    /// Propagates load errors.
    pub fn indices(&self) -> Result<RangeInclusive<usize>> {
        Ok(self.get()?.indices())
    }

    /// Iterates over series in file order.
    ///
    /// # Errors
    ///
    /// Propagates load errors.
    pub fn iter(&self) -> Result<std::slice::Iter<'_, Series>> {
        Ok(self.get()?.iter())
    }

    /// Returns the series of one type.
    ///
    /// # Errors
    ///
    /// Propagates load errors.
    pub fn subset(&self, series_type: SeriesType) -> Result<Dataset> {
        Ok(self.get()?.subset(series_type))
    }
}

impl std::fmt::Debug for LazyDataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LazyDataset")
            .field("name", &self.name)
            .field("loaded", &self.is_loaded())
            .finish_non_exhaustive()
    }
}

impl std::fmt::Display for LazyDataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.data.get() {
            Some(dataset) => write!(f, "{dataset}"),
            None => write!(f, "{} Dataset (not loaded yet)", self.name),
        }
    }
}
