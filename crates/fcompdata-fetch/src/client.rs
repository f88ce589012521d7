//! Blocking HTTP client for dataset files.

use std::io::{ErrorKind, Read, Write};
use std::path::PathBuf;
use std::time::Duration;

use fcompdata_types::FcompError;
use reqwest::blocking::Client;
use thiserror::Error;

use crate::remote::{BASE_URL_ENV, DEFAULT_BASE_URL};

/// Configuration for the download client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL the dataset files are fetched from.
    pub base_url: String,
    /// Connection timeout.
    pub connect_timeout: Duration,
    /// Overall request timeout, `None` for unbounded transfers.
    pub timeout: Option<Duration>,
    /// User agent string.
    pub user_agent: String,
    /// Whether to honour `HTTP_PROXY`-style environment variables.
    pub use_system_proxy: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(30),
            timeout: None, // Full M4 monthly file is large on slow links
            user_agent: format!("fcompdata/{}", env!("CARGO_PKG_VERSION")),
            use_system_proxy: true,
        }
    }
}

impl ClientConfig {
    /// Returns the default configuration with `FCOMPDATA_M4_URL` applied.
    #[must_use]
    pub fn from_env() -> Self {
        let config = Self::default();
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.is_empty() => config.with_base_url(url),
            _ => config,
        }
    }

    /// Sets the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the overall request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets whether system proxy settings are used.
    #[must_use]
    pub const fn with_system_proxy(mut self, enabled: bool) -> Self {
        self.use_system_proxy = enabled;
        self
    }
}

/// Errors that can occur while downloading one file.
#[derive(Error, Debug)]
pub enum DownloadError {
    /// HTTP transport failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned a non-success status.
    #[error("Server returned {status} for {url}")]
    ServerError {
        /// HTTP status code.
        status: u16,
        /// The requested URL.
        url: String,
    },

    /// The connection failed while the body was being read.
    #[error("Transfer of {url} failed: {source}")]
    Transfer {
        /// The requested URL.
        url: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The destination rejected downloaded bytes.
    ///
    /// Returned by [`Fetch`] implementations, which do not know the
    /// destination path; the downloader reports it as [`DownloadError::Write`].
    #[error("Failed to store downloaded data: {0}")]
    Sink(#[source] std::io::Error),

    /// The downloaded files could not be converted into a dataset.
    #[error("Downloaded data is malformed: {0}")]
    Malformed(#[source] FcompError),

    /// Failed to create or write the temporary download file.
    #[error("Failed to write '{path}': {source}")]
    Write {
        /// The path being written.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to move the finished download into place.
    #[error("Failed to move download into '{path}': {source}")]
    Persist {
        /// The final target path.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

/// Source of remote file contents.
///
/// [`DownloadClient`] is the production implementation; the downloader only
/// depends on this trait.
pub trait Fetch {
    /// Streams the body at `url` into `writer`, returning the byte count.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status, and
    /// [`DownloadError::Sink`] when `writer` fails.
    fn fetch(&self, url: &str, writer: &mut dyn Write) -> Result<u64, DownloadError>;
}

/// Blocking HTTP client.
#[derive(Debug, Clone)]
pub struct DownloadClient {
    client: Client,
    config: ClientConfig,
}

impl DownloadClient {
    /// Creates a new download client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .gzip(true);
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build()?;
        Ok(Self { client, config })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(ClientConfig::default())
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }
}

impl Fetch for DownloadClient {
    fn fetch(&self, url: &str, writer: &mut dyn Write) -> Result<u64, DownloadError> {
        let mut response = self.client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(DownloadError::ServerError {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let mut buf = vec![0; 64 * 1024];
        let mut total = 0u64;
        loop {
            let n = match response.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(source) => {
                    return Err(DownloadError::Transfer {
                        url: url.to_string(),
                        source,
                    });
                }
            };
            writer.write_all(&buf[..n]).map_err(DownloadError::Sink)?;
            total += n as u64;
        }

        Ok(total)
    }
}
