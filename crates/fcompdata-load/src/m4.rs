//! M4 competition files.
//!
//! The competition publishes every frequency as a pair of wide CSV files,
//! `<Frequency>-train.csv` and `<Frequency>-test.csv`. Each row holds a series
//! id followed by its observations, padded with empty cells up to the longest
//! series. [`read_m4_csv`] joins such a pair into a [`Dataset`]; once stored
//! with [`write_json`](crate::write_json) it is read back by [`load_m4_file`].

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use fcompdata_types::{Dataset, FcompError, Frequency, Result, Series};

use crate::load_json_file;

fn dataset_name(frequency: Frequency) -> String {
    format!("M4_{frequency}")
}

/// Loads one downloaded M4 frequency file.
///
/// The dataset is named `M4_<frequency>`. Every series must belong to the
/// requested frequency and use its official horizon.
///
/// # Errors
///
/// Returns [`FcompError::NotFound`] if the file has not been downloaded and
/// [`FcompError::Parse`] if it is malformed or holds series that do not match
/// the frequency.
pub fn load_m4_file(path: &Path, frequency: Frequency) -> Result<Dataset> {
    let dataset = load_json_file(path, &dataset_name(frequency))?;

    let expected = frequency.series_type();
    let horizon = frequency.horizon();
    for (index, series) in dataset.iter_indexed() {
        let problem = if series.series_type() != expected {
            format!("is {} but the file holds {frequency} series", series.series_type())
        } else if series.h() != horizon {
            format!("has horizon {}, {frequency} series use {horizon}", series.h())
        } else {
            continue;
        };
        return Err(FcompError::parse(
            path.display().to_string(),
            format!("record {index}: series '{}' {problem}", series.sn()),
        ));
    }

    Ok(dataset)
}

/// Joins the official train and test CSV files of one frequency.
///
/// Series keep the order of the training file. Every training row needs a
/// test row with the same id holding exactly [`Frequency::horizon`] values.
///
/// # Errors
///
/// Returns [`FcompError::Parse`] for malformed rows, ids present in only one
/// file, empty training data or a test row of the wrong length.
pub fn read_m4_csv<R: Read, S: Read>(train: R, test: S, frequency: Frequency) -> Result<Dataset> {
    let train_origin = format!("{}-train.csv", frequency.title());
    let test_origin = format!("{}-test.csv", frequency.title());

    let mut test_rows: HashMap<String, Vec<f64>> =
        read_rows(test, &test_origin)?.into_iter().collect();

    let series_type = frequency.series_type();
    let horizon = frequency.horizon();
    let train_rows = read_rows(train, &train_origin)?;

    let mut series = Vec::with_capacity(train_rows.len());
    for (i, (sn, x)) in train_rows.into_iter().enumerate() {
        let xx = test_rows.remove(&sn).ok_or_else(|| {
            FcompError::parse(&test_origin, format!("no test row for series '{sn}'"))
        })?;
        let joined = Series::new(sn, x, xx, horizon, series_type.period(), series_type, "")
            .map_err(|e| FcompError::parse(&train_origin, format!("row {}: {e}", i + 1)))?;
        series.push(joined);
    }

    if let Some(sn) = test_rows.keys().min() {
        return Err(FcompError::parse(
            &test_origin,
            format!("test row for unknown series '{sn}'"),
        ));
    }

    let name = dataset_name(frequency);
    tracing::debug!(dataset = %name, series = series.len(), "joined M4 train and test files");
    Ok(Dataset::new(name, series))
}

/// Reads `(id, observations)` rows, skipping the header.
fn read_rows<R: Read>(reader: R, origin: &str) -> Result<Vec<(String, Vec<f64>)>> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let mut rows = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let row = i + 1;
        let record = record.map_err(|e| FcompError::parse(origin, format!("row {row}: {e}")))?;

        let mut fields = record.iter();
        let sn = fields
            .next()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| FcompError::parse(origin, format!("row {row}: missing series id")))?
            .to_string();
        let values = parse_values(fields)
            .map_err(|message| FcompError::parse(origin, format!("row {row} ({sn}): {message}")))?;
        rows.push((sn, values));
    }

    Ok(rows)
}

/// Parses observations up to the padding of shorter rows.
fn parse_values<'a>(
    fields: impl Iterator<Item = &'a str>,
) -> std::result::Result<Vec<f64>, String> {
    let mut values = Vec::new();
    let mut padding = false;

    for field in fields.map(str::trim) {
        if field.is_empty() || field == "NA" {
            padding = true;
            continue;
        }
        if padding {
            return Err(format!("value '{field}' follows an empty cell"));
        }
        match field.parse::<f64>() {
            Ok(value) if value.is_finite() => values.push(value),
            _ => return Err(format!("'{field}' is not a finite number")),
        }
    }

    Ok(values)
}
