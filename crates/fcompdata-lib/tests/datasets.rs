//! Dataset access through the facade.

use std::path::{Path, PathBuf};

use approx::assert_relative_eq;
use fcompdata_lib::prelude::*;
use fcompdata_lib::{Series, SeriesField, default_data_dir};
use tempfile::TempDir;

fn fixtures() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn fixture_datasets(temp_dir: &TempDir) -> Datasets {
    Datasets::new(Config::new(
        fixtures(),
        DataHome::new(temp_dir.path().join("home")),
    ))
}

#[test]
fn test_one_based_access() {
    let temp_dir = TempDir::new().unwrap();
    let datasets = fixture_datasets(&temp_dir);
    let m3 = datasets.m3();

    let first = m3.series(1).unwrap();
    assert_eq!(first.sn(), "N0001");
    assert_eq!(first.n(), 14);
    assert_eq!(first.h(), 6);
    assert_relative_eq!(first.xx()[0], 5379.75);
    assert_eq!(first.description(), "SALES ( CODE= ABT)");

    let len = m3.len().unwrap();
    assert_eq!(len, 6);
    assert_eq!(m3.series(len).unwrap().sn(), "N0003");
    assert!(matches!(m3.series(0), Err(FcompError::Range(_))));
    assert!(matches!(m3.series(len + 1), Err(FcompError::Range(_))));
}

#[test]
fn test_lazy_handle_is_identity_stable() {
    let temp_dir = TempDir::new().unwrap();
    let datasets = fixture_datasets(&temp_dir);

    let first = datasets.m3().get().unwrap();
    let second = datasets.m3().get().unwrap();
    assert!(std::ptr::eq(first, second));
}

#[test]
fn test_every_horizon_matches_test_length() {
    let temp_dir = TempDir::new().unwrap();
    let datasets = fixture_datasets(&temp_dir);

    for series in datasets.m3().iter().unwrap() {
        assert_eq!(series.xx().len(), series.h(), "{series}");
        assert!(series.n() >= 1);
    }
}

#[test]
fn test_subset_by_type() {
    let temp_dir = TempDir::new().unwrap();
    let datasets = fixture_datasets(&temp_dir);
    let m3 = datasets.m3();

    let yearly = m3.subset(SeriesType::Yearly).unwrap();
    let names: Vec<_> = yearly.iter().map(Series::sn).collect();
    assert_eq!(names, ["N0001", "N0002", "N0003"]);
    assert_eq!(yearly.name(), "M3_yearly");

    let monthly = m3.subset(SeriesType::Monthly).unwrap();
    assert_eq!(monthly.len(), 1);
    assert_eq!(monthly[1].period(), 12);

    let total: usize = SeriesType::all()
        .iter()
        .map(|ty| m3.subset(*ty).unwrap().len())
        .sum();
    assert_eq!(total, m3.len().unwrap());
}

#[test]
fn test_indexed_iteration_matches_get() {
    let temp_dir = TempDir::new().unwrap();
    let datasets = fixture_datasets(&temp_dir);
    let m3 = datasets.m3().get().unwrap();

    for (index, series) in m3.iter_indexed() {
        assert_eq!(m3.get(index).unwrap(), series);
    }
    assert_eq!(m3.indices().next(), Some(1));
}

#[test]
fn test_field_view() {
    let temp_dir = TempDir::new().unwrap();
    let datasets = fixture_datasets(&temp_dir);
    let series = datasets.m3().series(3).unwrap();

    assert_eq!(series.field("sn"), Some(SeriesField::Text("N0646")));
    assert_eq!(series.field("h"), Some(SeriesField::Count(8)));
    assert_eq!(series.field("period"), Some(SeriesField::Count(4)));
    assert_eq!(
        series.field("type"),
        Some(SeriesField::Type(SeriesType::Quarterly))
    );
}

#[test]
fn test_eager_loader_matches_handle() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::new(fixtures(), DataHome::new(temp_dir.path()));

    let eager = load_m3(&config).unwrap();
    let datasets = Datasets::new(config);
    assert_eq!(&eager, datasets.m3().get().unwrap());
    assert_eq!(eager.to_string(), "M3 Dataset: 6 series");
}

#[test]
fn test_missing_bundled_files_are_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::new(fixtures(), DataHome::new(temp_dir.path()));

    assert!(load_m1(&config).unwrap_err().is_not_found());
    assert!(load_tourism(&config).unwrap_err().is_not_found());
}

#[test]
fn test_unknown_frequency_string() {
    let err: FcompError = "invalid".parse::<Frequency>().unwrap_err().into();
    assert!(err.to_string().starts_with("Unknown frequency"));
}

/// Checks the published datasets in `FCOMPDATA_DATA_DIR`.
///
/// Run with `cargo test -- --ignored` once the R exports are installed.
#[test]
#[ignore = "requires FCOMPDATA_DATA_DIR with the R exports"]
fn test_bundled_datasets_match_published_counts() {
    let data_dir = default_data_dir();
    let temp_dir = TempDir::new().unwrap();
    let datasets = Datasets::new(Config::new(&data_dir, DataHome::new(temp_dir.path())));

    for bundled in BundledDataset::all() {
        let dataset = match datasets.bundled(*bundled).get() {
            Ok(dataset) => dataset,
            Err(e) => panic!("{bundled} is not installed in {}: {e}", data_dir.display()),
        };

        assert_eq!(dataset.len(), bundled.declared_len(), "{bundled}");
        for (series_type, count) in bundled.declared_type_counts() {
            assert_eq!(
                dataset.subset(*series_type).len(),
                *count,
                "{bundled} {series_type}"
            );
        }
        assert!(dataset.iter().all(|s| s.xx().len() == s.h()));
        assert!(dataset.get(0).is_err());
        assert!(dataset.get(dataset.len() + 1).is_err());
    }
}

#[test]
fn test_declared_counts_are_consistent() {
    for bundled in BundledDataset::all() {
        let total: usize = bundled
            .declared_type_counts()
            .iter()
            .map(|(_, count)| count)
            .sum();
        assert_eq!(total, bundled.declared_len(), "{bundled}");
    }
    assert_eq!(BundledDataset::M3.declared_len(), 3003);
    assert_eq!(BundledDataset::M1.declared_len(), 1001);
    assert_eq!(BundledDataset::Tourism.declared_len(), 1311);
}
