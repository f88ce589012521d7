//! Synthetic dataset files for fcompdata benchmarks.

use std::io;
use std::path::{Path, PathBuf};

use fcompdata_lib::SeriesType;
use serde_json::{Map, Value, json};

/// Top-level layout of a generated dataset file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Object keyed by series name, values wrapped in one-element arrays.
    Object,
    /// Array of records with bare scalars.
    Array,
}

/// Shape of a generated dataset.
#[derive(Debug, Clone)]
pub struct SyntheticConfig {
    /// Number of series.
    pub series: usize,
    /// Training observations per series.
    pub train_len: usize,
    /// File layout.
    pub layout: Layout,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            series: 1000,
            train_len: 60,
            layout: Layout::Object,
        }
    }
}

/// Series types cycled through by the generator, with their horizons.
const CYCLE: [(SeriesType, usize); 4] = [
    (SeriesType::Yearly, 6),
    (SeriesType::Quarterly, 8),
    (SeriesType::Monthly, 18),
    (SeriesType::Other, 8),
];

fn observations(seed: usize, len: usize) -> Vec<f64> {
    (0..len)
        .map(|t| {
            let t = t as f64;
            let level = 1000.0 + (seed % 97) as f64 * 25.0;
            level + 5.0 * t + 40.0 * (t * 0.5 + seed as f64).sin()
        })
        .collect()
}

fn record(index: usize, train_len: usize, layout: Layout) -> (String, Value) {
    let (series_type, h) = CYCLE[index % CYCLE.len()];
    let sn = format!("N{:04}", index + 1);
    let values = observations(index, train_len + h);
    let (x, xx) = values.split_at(train_len);
    let period = series_type.as_str().to_uppercase();

    let value = match layout {
        Layout::Object => json!({
            "sn": [sn],
            "x": x,
            "xx": xx,
            "h": [h],
            "period": [period],
            "description": ["SYNTHETIC"],
        }),
        Layout::Array => json!({
            "sn": sn,
            "x": x,
            "xx": xx,
            "h": h,
            "period": period,
        }),
    };
    (sn, value)
}

/// Generates a dataset document in the loader's JSON format.
#[must_use]
pub fn generate_json(config: &SyntheticConfig) -> String {
    let records = (0..config.series).map(|i| record(i, config.train_len, config.layout));

    let document = match config.layout {
        Layout::Object => Value::Object(records.collect::<Map<_, _>>()),
        Layout::Array => Value::Array(records.map(|(_, value)| value).collect()),
    };
    document.to_string()
}

/// Writes a generated dataset to `dir/file_name`.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_dataset(dir: &Path, file_name: &str, config: &SyntheticConfig) -> io::Result<PathBuf> {
    let path = dir.join(file_name);
    std::fs::write(&path, generate_json(config))?;
    Ok(path)
}

/// Format bytes as a human-readable string.
#[must_use]
pub fn format_bytes(bytes: u64) -> String {
    if bytes >= 1_000_000 {
        format!("{:.2} MB", bytes as f64 / 1_000_000.0)
    } else if bytes >= 1_000 {
        format!("{:.2} KB", bytes as f64 / 1_000.0)
    } else {
        format!("{bytes} B")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fcompdata_lib::parse_json_str;

    #[test]
    fn test_generated_object_loads() {
        let config = SyntheticConfig {
            series: 8,
            train_len: 12,
            layout: Layout::Object,
        };
        let dataset = parse_json_str(&generate_json(&config), "SYN").unwrap();

        assert_eq!(dataset.len(), 8);
        assert_eq!(dataset[1].sn(), "N0001");
        assert_eq!(dataset.subset(SeriesType::Monthly).len(), 2);
        assert!(dataset.iter().all(|s| s.n() == 12 && s.xx().len() == s.h()));
    }

    #[test]
    fn test_generated_array_loads() {
        let config = SyntheticConfig {
            series: 5,
            train_len: 3,
            layout: Layout::Array,
        };
        let dataset = parse_json_str(&generate_json(&config), "SYN").unwrap();

        assert_eq!(dataset.len(), 5);
        assert_eq!(dataset[5].series_type(), SeriesType::Yearly);
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2_500), "2.50 KB");
        assert_eq!(format_bytes(3_000_000), "3.00 MB");
    }
}
