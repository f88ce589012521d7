//! Downloading remote dataset files into the data home.

use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use fcompdata_load::{read_m4_csv, write_json};
use fcompdata_types::{FcompError, Frequency, Result};
use tempfile::NamedTempFile;

use crate::{
    ClientConfig, DataHome, DownloadClient, DownloadError, Fetch, RemoteDataset, Split,
    remote_url,
};

/// Result of materializing one dataset frequency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// The file was fetched and moved into place.
    Downloaded {
        /// The local file path.
        path: PathBuf,
        /// Number of bytes fetched.
        bytes: u64,
    },
    /// The file already existed; nothing was fetched.
    Cached {
        /// The local file path.
        path: PathBuf,
    },
}

impl DownloadOutcome {
    /// Returns the local file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Downloaded { path, .. } | Self::Cached { path } => path,
        }
    }

    /// Returns true if no transfer took place.
    #[must_use]
    pub const fn is_cached(&self) -> bool {
        matches!(self, Self::Cached { .. })
    }
}

/// Per-frequency results of a batch download.
///
/// A failing frequency does not stop the remaining ones.
#[derive(Debug)]
pub struct DownloadReport {
    dataset: RemoteDataset,
    results: Vec<(Frequency, std::result::Result<DownloadOutcome, DownloadError>)>,
}

impl DownloadReport {
    /// Returns the dataset the report covers.
    #[must_use]
    pub const fn dataset(&self) -> RemoteDataset {
        self.dataset
    }

    /// Returns every frequency with its result, in request order.
    #[must_use]
    pub fn results(&self) -> &[(Frequency, std::result::Result<DownloadOutcome, DownloadError>)] {
        &self.results
    }

    /// Iterates over frequencies that are now present locally.
    pub fn succeeded(&self) -> impl Iterator<Item = (Frequency, &DownloadOutcome)> {
        self.results
            .iter()
            .filter_map(|(f, r)| r.as_ref().ok().map(|outcome| (*f, outcome)))
    }

    /// Iterates over frequencies that failed.
    pub fn failed(&self) -> impl Iterator<Item = (Frequency, &DownloadError)> {
        self.results
            .iter()
            .filter_map(|(f, r)| r.as_ref().err().map(|err| (*f, err)))
    }

    /// Returns true if every requested frequency is present locally.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.results.iter().all(|(_, r)| r.is_ok())
    }

    /// Converts the report into the successful outcomes.
    ///
    /// # Errors
    ///
    /// Returns [`FcompError::Download`] for the first failed frequency.
    pub fn into_result(self) -> Result<Vec<(Frequency, DownloadOutcome)>> {
        let dataset = self.dataset;
        self.results
            .into_iter()
            .map(|(frequency, result)| {
                result
                    .map(|outcome| (frequency, outcome))
                    .map_err(|e| FcompError::Download {
                        dataset: dataset.name().to_string(),
                        frequency,
                        message: e.to_string(),
                    })
            })
            .collect()
    }
}

/// Materializes remote dataset files in a [`DataHome`].
///
/// Published files are streamed into temporary files in the target directory,
/// converted, and the result renamed into place once complete, so a target
/// path never holds a partial download and concurrent writers resolve to the
/// last successful rename.
#[derive(Debug)]
pub struct Downloader<F = DownloadClient> {
    home: DataHome,
    fetcher: F,
    base_url: String,
}

impl Downloader<DownloadClient> {
    /// Creates a downloader using an HTTP client built from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn from_config(
        home: DataHome,
        config: ClientConfig,
    ) -> std::result::Result<Self, DownloadError> {
        let base_url = config.base_url.clone();
        let client = DownloadClient::new(config)?;
        Ok(Self::new(home, client, base_url))
    }
}

impl<F: Fetch> Downloader<F> {
    /// Creates a downloader with a custom fetcher.
    pub fn new(home: DataHome, fetcher: F, base_url: impl Into<String>) -> Self {
        Self {
            home,
            fetcher,
            base_url: base_url.into(),
        }
    }

    /// Returns the data home.
    #[must_use]
    pub const fn home(&self) -> &DataHome {
        &self.home
    }

    /// Returns the fetcher.
    #[must_use]
    pub const fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Downloads one frequency, or every frequency when `frequency` is `None`.
    ///
    /// Files already present are skipped without any network access or
    /// integrity check.
    ///
    /// # Errors
    ///
    /// Returns an error only if the data home cannot be created. Failures of
    /// individual frequencies are reported in the [`DownloadReport`].
    pub fn download(
        &self,
        dataset: RemoteDataset,
        frequency: Option<Frequency>,
    ) -> Result<DownloadReport> {
        self.home.ensure()?;

        let frequencies = frequency.map_or_else(|| dataset.frequencies().to_vec(), |f| vec![f]);
        let mut results = Vec::with_capacity(frequencies.len());

        for frequency in frequencies {
            let result = self.download_one(dataset, frequency);
            if let Err(e) = &result {
                tracing::warn!(%dataset, %frequency, error = %e, "download failed");
            }
            results.push((frequency, result));
        }

        Ok(DownloadReport { dataset, results })
    }

    /// Materializes a single dataset frequency.
    ///
    /// Both published halves are fetched, joined and stored as one JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if a transfer fails, the files do not form a valid
    /// dataset, or the result cannot be written. The target path is left
    /// untouched in that case.
    pub fn download_one(
        &self,
        dataset: RemoteDataset,
        frequency: Frequency,
    ) -> std::result::Result<DownloadOutcome, DownloadError> {
        let target = self.home.path_for(dataset, frequency);
        if target.is_file() {
            tracing::debug!(path = %target.display(), "already downloaded, skipping");
            return Ok(DownloadOutcome::Cached { path: target });
        }

        let dir = self.home.dataset_dir(dataset);
        fs::create_dir_all(&dir).map_err(|source| DownloadError::Write {
            path: dir.clone(),
            source,
        })?;

        let (train, train_bytes) = self.fetch_to_temp(&dir, dataset, frequency, Split::Train)?;
        let (test, test_bytes) = self.fetch_to_temp(&dir, dataset, frequency, Split::Test)?;

        let joined = match dataset {
            RemoteDataset::M4 => read_m4_csv(
                BufReader::new(reopen(&train)?),
                BufReader::new(reopen(&test)?),
                frequency,
            ),
        }
        .map_err(DownloadError::Malformed)?;

        let output = temp_file_in(&dir)?;
        let mut writer = BufWriter::new(output.as_file());
        write_json(&joined, &mut writer)
            .map_err(|e| match e {
                FcompError::Io(source) => DownloadError::Write {
                    path: output.path().to_path_buf(),
                    source,
                },
                other => DownloadError::Malformed(other),
            })?;
        writer
            .flush()
            .and_then(|()| output.as_file().sync_all())
            .map_err(|source| DownloadError::Write {
                path: output.path().to_path_buf(),
                source,
            })?;
        drop(writer);

        output.persist(&target).map_err(|e| DownloadError::Persist {
            path: target.clone(),
            source: e.error,
        })?;

        let bytes = train_bytes + test_bytes;
        tracing::info!(
            path = %target.display(),
            bytes,
            series = joined.len(),
            "download complete"
        );
        Ok(DownloadOutcome::Downloaded {
            path: target,
            bytes,
        })
    }

    /// Streams one published file into a temporary file in `dir`.
    fn fetch_to_temp(
        &self,
        dir: &Path,
        dataset: RemoteDataset,
        frequency: Frequency,
        split: Split,
    ) -> std::result::Result<(NamedTempFile, u64), DownloadError> {
        let mut temp = temp_file_in(dir)?;
        let url = remote_url(&self.base_url, dataset, frequency, split);
        tracing::info!(%url, "downloading");

        let bytes = self.fetcher.fetch(&url, &mut temp).map_err(|e| match e {
            DownloadError::Sink(source) => DownloadError::Write {
                path: temp.path().to_path_buf(),
                source,
            },
            other => other,
        })?;
        Ok((temp, bytes))
    }
}

fn temp_file_in(dir: &Path) -> std::result::Result<NamedTempFile, DownloadError> {
    tempfile::Builder::new()
        .prefix(".download-")
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(|source| DownloadError::Write {
            path: dir.to_path_buf(),
            source,
        })
}

fn reopen(temp: &NamedTempFile) -> std::result::Result<fs::File, DownloadError> {
    temp.reopen().map_err(|source| DownloadError::Write {
        path: temp.path().to_path_buf(),
        source,
    })
}
