//! Raw record layout of the competition JSON files.

use fcompdata_types::{FcompError, Result, Series, SeriesType};
use serde::{Deserialize, Serialize};

/// A scalar that R's `jsonlite` may have wrapped in a one-element list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Scalar<T> {
    Bare(T),
    Wrapped(Vec<T>),
}

impl<T> Scalar<T> {
    fn into_inner(self) -> Option<T> {
        match self {
            Self::Bare(value) => Some(value),
            Self::Wrapped(values) => values.into_iter().next(),
        }
    }
}

/// Observation vector; a length-one vector may be exported as a bare number.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Values {
    Many(Vec<f64>),
    One(f64),
}

impl Values {
    fn into_vec(self) -> Vec<f64> {
        match self {
            Self::Many(values) => values,
            Self::One(value) => vec![value],
        }
    }
}

/// One series record as stored on disk.
#[derive(Debug, Deserialize)]
pub(crate) struct RawRecord {
    sn: Scalar<String>,
    x: Values,
    xx: Values,
    h: Scalar<f64>,
    period: Scalar<String>,
    #[serde(default)]
    description: Option<Scalar<String>>,
}

impl RawRecord {
    /// Validates the record and converts it into a [`Series`].
    ///
    /// `position` is the 1-based record position, used in error messages.
    pub(crate) fn into_series(self, origin: &str, position: usize) -> Result<Series> {
        let fail = |message: String| FcompError::parse(origin, format!("record {position}: {message}"));

        let sn = self
            .sn
            .into_inner()
            .ok_or_else(|| fail("empty `sn`".to_string()))?;
        let h = self
            .h
            .into_inner()
            .ok_or_else(|| fail(format!("series '{sn}' has an empty `h`")))?;
        let horizon = integral(h).ok_or_else(|| {
            fail(format!(
                "series '{sn}' has horizon {h}, expected a non-negative integer"
            ))
        })?;
        let period = self
            .period
            .into_inner()
            .ok_or_else(|| fail(format!("series '{sn}' has an empty `period`")))?;
        let series_type: SeriesType = period
            .parse()
            .map_err(|e| fail(format!("series '{sn}': {e}")))?;
        let description = self
            .description
            .and_then(Scalar::into_inner)
            .unwrap_or_default();

        Series::new(
            sn,
            self.x.into_vec(),
            self.xx.into_vec(),
            horizon,
            series_type.period(),
            series_type,
            description,
        )
        .map_err(|e| fail(e.to_string()))
    }
}

/// Borrowed record in the array layout, with bare scalars.
#[derive(Debug, Serialize)]
pub(crate) struct RecordRef<'a> {
    sn: &'a str,
    x: &'a [f64],
    xx: &'a [f64],
    h: usize,
    period: String,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'a str,
}

impl<'a> From<&'a Series> for RecordRef<'a> {
    fn from(series: &'a Series) -> Self {
        Self {
            sn: series.sn(),
            x: series.x(),
            xx: series.xx(),
            h: series.h(),
            period: series.series_type().as_str().to_uppercase(),
            description: series.description(),
        }
    }
}

/// Converts an exported number to a horizon if it is a non-negative integer.
fn integral(value: f64) -> Option<usize> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 {
        Some(value as usize)
    } else {
        None
    }
}
