//! Remote datasets and their URLs.

use fcompdata_types::Frequency;

/// Default location of the M4 competition files, the organisers' published
/// `Dataset` directory with its `Train/` and `Test/` subdirectories.
pub const DEFAULT_BASE_URL: &str =
    "https://raw.githubusercontent.com/Mcompetitions/M4-methods/master/Dataset";

/// Environment variable overriding [`DEFAULT_BASE_URL`].
pub const BASE_URL_ENV: &str = "FCOMPDATA_M4_URL";

/// A dataset fetched on demand rather than bundled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemoteDataset {
    /// M4 competition (Makridakis et al., 2018), 100,000 series.
    M4,
}

/// Half of a published train/test pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Split {
    /// In-sample observations.
    Train,
    /// Out-of-sample observations.
    Test,
}

impl Split {
    /// Returns the lowercase file suffix.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Train => "train",
            Self::Test => "test",
        }
    }

    /// Returns the remote directory holding this half.
    #[must_use]
    pub const fn dir_name(&self) -> &'static str {
        match self {
            Self::Train => "Train",
            Self::Test => "Test",
        }
    }
}

impl RemoteDataset {
    /// Returns the display name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::M4 => "M4",
        }
    }

    /// Returns the cache subdirectory and file name prefix.
    #[must_use]
    pub const fn dir_name(&self) -> &'static str {
        match self {
            Self::M4 => "m4",
        }
    }

    /// Returns the frequencies published for this dataset.
    #[must_use]
    pub const fn frequencies(&self) -> &'static [Frequency] {
        match self {
            Self::M4 => Frequency::all(),
        }
    }

    /// Returns the local file name of one frequency, e.g. `m4_yearly.json`.
    #[must_use]
    pub fn file_name(&self, frequency: Frequency) -> String {
        format!("{}_{frequency}.json", self.dir_name())
    }

    /// Returns the path of one published file relative to the base URL,
    /// e.g. `Train/Yearly-train.csv`.
    #[must_use]
    pub fn source_path(&self, frequency: Frequency, split: Split) -> String {
        match self {
            Self::M4 => format!(
                "{}/{}-{}.csv",
                split.dir_name(),
                frequency.title(),
                split.as_str()
            ),
        }
    }
}

impl std::fmt::Display for RemoteDataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Builds the download URL of one half of a dataset frequency.
///
/// # Example
///
/// ```
/// use fcompdata_fetch::{RemoteDataset, Split, remote_url};
/// use fcompdata_types::Frequency;
///
/// let url = remote_url("https://example.org/m4/", RemoteDataset::M4, Frequency::Hourly, Split::Test);
/// assert_eq!(url, "https://example.org/m4/Test/Hourly-test.csv");
/// ```
#[must_use]
pub fn remote_url(
    base_url: &str,
    dataset: RemoteDataset,
    frequency: Frequency,
    split: Split,
) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        dataset.source_path(frequency, split)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names() {
        assert_eq!(
            RemoteDataset::M4.file_name(Frequency::Yearly),
            "m4_yearly.json"
        );
        assert_eq!(
            RemoteDataset::M4.file_name(Frequency::Quarterly),
            "m4_quarterly.json"
        );
    }

    #[test]
    fn test_default_urls_follow_published_layout() {
        assert_eq!(
            remote_url(DEFAULT_BASE_URL, RemoteDataset::M4, Frequency::Yearly, Split::Train),
            "https://raw.githubusercontent.com/Mcompetitions/M4-methods/master/Dataset/Train/Yearly-train.csv"
        );
        assert_eq!(
            remote_url(DEFAULT_BASE_URL, RemoteDataset::M4, Frequency::Monthly, Split::Test),
            "https://raw.githubusercontent.com/Mcompetitions/M4-methods/master/Dataset/Test/Monthly-test.csv"
        );
    }

    #[test]
    fn test_every_frequency_has_both_halves() {
        for frequency in RemoteDataset::M4.frequencies() {
            for split in [Split::Train, Split::Test] {
                let url = remote_url(DEFAULT_BASE_URL, RemoteDataset::M4, *frequency, split);
                assert!(url.starts_with(DEFAULT_BASE_URL));
                assert!(url.ends_with(&format!("{}-{}.csv", frequency.title(), split.as_str())));
            }
        }
    }

    #[test]
    fn test_remote_url_trims_slash() {
        assert_eq!(
            remote_url("http://localhost:8080", RemoteDataset::M4, Frequency::Daily, Split::Train),
            remote_url("http://localhost:8080/", RemoteDataset::M4, Frequency::Daily, Split::Train)
        );
    }
}
