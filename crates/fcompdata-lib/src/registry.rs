//! Registry of lazily loaded competition datasets.

use std::sync::Arc;

use fcompdata_fetch::{DownloadError, Downloader, RemoteDataset};
use fcompdata_load::{BundledDataset, load_bundled, load_m4_file};
use fcompdata_types::Frequency;

use crate::{Config, LazyDataset};

/// One lazy handle per supported dataset, built from an explicit [`Config`].
///
/// Nothing is read from disk until a handle is first accessed. M4 handles
/// only read files that are already in the data home; use
/// [`Datasets::downloader`] to fetch them first.
///
/// ```no_run
/// use fcompdata_lib::{Config, Datasets, SeriesType};
///
/// let datasets = Datasets::new(Config::from_env()?);
/// let series = datasets.m3().series(2568)?;
/// println!("{series}: h = {}", series.h());
///
/// let yearly = datasets.m3().subset(SeriesType::Yearly)?;
/// assert_eq!(yearly.len(), 645);
/// # Ok::<(), fcompdata_lib::FcompError>(())
/// ```
#[derive(Debug)]
pub struct Datasets {
    config: Arc<Config>,
    m1: LazyDataset,
    m3: LazyDataset,
    tourism: LazyDataset,
    /// Indexed by `Frequency::index`.
    m4: Vec<LazyDataset>,
}

impl Datasets {
    /// Creates unloaded handles for every dataset.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);
        let m4 = Frequency::all()
            .iter()
            .map(|&frequency| m4_handle(&config, frequency))
            .collect();

        Self {
            m1: bundled_handle(&config, BundledDataset::M1),
            m3: bundled_handle(&config, BundledDataset::M3),
            tourism: bundled_handle(&config, BundledDataset::Tourism),
            m4,
            config,
        }
    }

    /// Returns the configuration the handles read from.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the M1 handle (1001 series).
    #[must_use]
    pub const fn m1(&self) -> &LazyDataset {
        &self.m1
    }

    /// Returns the M3 handle (3003 series).
    #[must_use]
    pub const fn m3(&self) -> &LazyDataset {
        &self.m3
    }

    /// Returns the Tourism handle (1311 series).
    #[must_use]
    pub const fn tourism(&self) -> &LazyDataset {
        &self.tourism
    }

    /// Returns the handle of a bundled dataset.
    #[must_use]
    pub const fn bundled(&self, dataset: BundledDataset) -> &LazyDataset {
        match dataset {
            BundledDataset::M1 => &self.m1,
            BundledDataset::M3 => &self.m3,
            BundledDataset::Tourism => &self.tourism,
        }
    }

    /// Returns the handle of one M4 frequency.
    #[must_use]
    pub fn m4(&self, frequency: Frequency) -> &LazyDataset {
        &self.m4[frequency.index()]
    }

    /// Creates a downloader for the configured data home.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn downloader(&self) -> Result<Downloader, DownloadError> {
        Downloader::from_config(self.config.data_home.clone(), self.config.client.clone())
    }
}

fn bundled_handle(config: &Arc<Config>, dataset: BundledDataset) -> LazyDataset {
    let config = Arc::clone(config);
    LazyDataset::new(dataset.name(), move || {
        load_bundled(dataset, &config.bundled_dir)
    })
}

fn m4_handle(config: &Arc<Config>, frequency: Frequency) -> LazyDataset {
    let config = Arc::clone(config);
    LazyDataset::new(format!("M4_{frequency}"), move || {
        let path = config.data_home.path_for(RemoteDataset::M4, frequency);
        load_m4_file(&path, frequency)
    })
}
