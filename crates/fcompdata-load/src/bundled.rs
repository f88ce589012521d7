//! Datasets shipped with the library.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use fcompdata_types::{Dataset, Result, SeriesType};

use crate::load_json_file;

/// Environment variable overriding the bundled data directory.
pub const DATA_DIR_ENV: &str = "FCOMPDATA_DATA_DIR";

/// A competition dataset distributed as a bundled JSON file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BundledDataset {
    /// M1 competition (Makridakis et al., 1982).
    M1,
    /// M3 competition (Makridakis & Hibon, 2000).
    M3,
    /// Tourism forecasting competition (Athanasopoulos et al., 2011).
    Tourism,
}

impl BundledDataset {
    /// Returns the display name used for the loaded dataset.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::M1 => "M1",
            Self::M3 => "M3",
            Self::Tourism => "Tourism",
        }
    }

    /// Returns the file name inside the data directory.
    #[must_use]
    pub const fn file_name(&self) -> &'static str {
        match self {
            Self::M1 => "m1_data.json",
            Self::M3 => "m3_data.json",
            Self::Tourism => "tcomp_data.json",
        }
    }

    /// Returns the number of series in the published dataset.
    #[must_use]
    pub const fn declared_len(&self) -> usize {
        match self {
            Self::M1 => 1001,
            Self::M3 => 3003,
            Self::Tourism => 1311,
        }
    }

    /// Returns the published number of series per type.
    #[must_use]
    pub const fn declared_type_counts(&self) -> &'static [(SeriesType, usize)] {
        match self {
            Self::M1 => &[
                (SeriesType::Yearly, 181),
                (SeriesType::Quarterly, 203),
                (SeriesType::Monthly, 617),
            ],
            Self::M3 => &[
                (SeriesType::Yearly, 645),
                (SeriesType::Quarterly, 756),
                (SeriesType::Monthly, 1428),
                (SeriesType::Other, 174),
            ],
            Self::Tourism => &[
                (SeriesType::Yearly, 518),
                (SeriesType::Quarterly, 427),
                (SeriesType::Monthly, 366),
            ],
        }
    }

    /// Returns all bundled datasets.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::M1, Self::M3, Self::Tourism]
    }
}

impl std::fmt::Display for BundledDataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Returns the bundled data directory.
///
/// Uses `FCOMPDATA_DATA_DIR` when set, otherwise the `data/` directory of
/// this crate.
#[must_use]
pub fn default_data_dir() -> PathBuf {
    data_dir_from(std::env::var_os(DATA_DIR_ENV))
}

fn data_dir_from(var: Option<OsString>) -> PathBuf {
    var.filter(|v| !v.is_empty()).map_or_else(
        || PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/data")),
        PathBuf::from,
    )
}

/// Loads a bundled dataset from `data_dir`.
///
/// # Errors
///
/// Returns [`fcompdata_types::FcompError::NotFound`] if the data file is not
/// installed, or a parse error if it is malformed.
pub fn load_bundled(dataset: BundledDataset, data_dir: &Path) -> Result<Dataset> {
    load_json_file(&data_dir.join(dataset.file_name()), dataset.name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_declared_counts_sum_to_len() {
        for dataset in BundledDataset::all() {
            let total: usize = dataset.declared_type_counts().iter().map(|(_, n)| n).sum();
            assert_eq!(total, dataset.declared_len(), "{dataset}");
        }
    }

    #[test]
    fn test_data_dir_override() {
        assert_eq!(
            data_dir_from(Some(OsString::from("/opt/fcompdata"))),
            PathBuf::from("/opt/fcompdata")
        );
        assert!(data_dir_from(None).ends_with("data"));
        assert!(data_dir_from(Some(OsString::new())).ends_with("data"));
    }

    #[test]
    fn test_missing_bundled_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = load_bundled(BundledDataset::Tourism, temp_dir.path()).unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("tcomp_data.json"));
    }

    #[test]
    fn test_load_bundled_from_dir() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("m1_data.json"),
            r#"{"YAF2": {"sn": ["YAF2"], "x": [3, 4], "xx": [5], "h": [1], "period": ["YEARLY"]}}"#,
        )
        .unwrap();

        let dataset = load_bundled(BundledDataset::M1, temp_dir.path()).unwrap();
        assert_eq!(dataset.name(), "M1");
        assert_eq!(dataset[1].sn(), "YAF2");
    }
}
