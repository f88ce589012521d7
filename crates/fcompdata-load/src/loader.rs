//! JSON dataset loading.

use std::fs::File;
use std::io::{self, BufReader, ErrorKind, Read, Write};
use std::path::Path;

use fcompdata_types::{Dataset, FcompError, Result};
use serde_json::Value;

use crate::record::{RawRecord, RecordRef};

/// Loads a dataset from a JSON file.
///
/// # Errors
///
/// Returns [`FcompError::NotFound`] if the file does not exist and
/// [`FcompError::Parse`] if its contents are malformed or a record fails
/// validation.
pub fn load_json_file(path: &Path, name: &str) -> Result<Dataset> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(FcompError::NotFound(path.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };

    load_json_reader(BufReader::new(file), name, &path.display().to_string())
}

/// Loads a dataset from any JSON reader.
///
/// `origin` names the source in error messages.
///
/// # Errors
///
/// Returns [`FcompError::Parse`] if the document is malformed or a record
/// fails validation.
pub fn load_json_reader<R: Read>(reader: R, name: &str, origin: &str) -> Result<Dataset> {
    let document: Value =
        serde_json::from_reader(reader).map_err(|e| FcompError::parse(origin, e.to_string()))?;
    dataset_from_value(document, name, origin)
}

/// Parses a dataset from an in-memory JSON string.
///
/// # Errors
///
/// Returns [`FcompError::Parse`] if the document is malformed or a record
/// fails validation.
pub fn parse_json_str(json: &str, name: &str) -> Result<Dataset> {
    let document: Value =
        serde_json::from_str(json).map_err(|e| FcompError::parse(name, e.to_string()))?;
    dataset_from_value(document, name, name)
}

/// Writes a dataset as a JSON array of records that the loaders read back
/// unchanged.
///
/// # Errors
///
/// Returns [`FcompError::Io`] if the writer fails.
pub fn write_json<W: Write>(dataset: &Dataset, writer: W) -> Result<()> {
    let records: Vec<RecordRef<'_>> = dataset.iter().map(RecordRef::from).collect();
    serde_json::to_writer(writer, &records).map_err(io::Error::from)?;
    Ok(())
}

/// Builds a dataset from a parsed document.
///
/// Object documents are read in key order (the R export layout); array
/// documents in element order.
fn dataset_from_value(document: Value, name: &str, origin: &str) -> Result<Dataset> {
    let records: Vec<Value> = match document {
        Value::Object(map) => map.into_iter().map(|(_, record)| record).collect(),
        Value::Array(records) => records,
        other => {
            return Err(FcompError::parse(
                origin,
                format!(
                    "expected an object or array of records, found {}",
                    kind_of(&other)
                ),
            ));
        }
    };

    let series = records
        .into_iter()
        .enumerate()
        .map(|(i, value)| {
            let position = i + 1;
            let record: RawRecord = serde_json::from_value(value).map_err(|e| {
                FcompError::parse(origin, format!("record {position}: {e}"))
            })?;
            record.into_series(origin, position)
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(dataset = name, series = series.len(), "loaded dataset");
    Ok(Dataset::new(name, series))
}

const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
