//! 1-indexed dataset container.

use std::collections::BTreeMap;
use std::ops::{Index, RangeInclusive};

use crate::{RangeError, Series, SeriesType};

/// An ordered, named collection of series indexed from 1.
///
/// Index 0 and indices past the end are invalid, matching R's `Mcomp`
/// conventions.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    name: String,
    series: Vec<Series>,
}

impl Dataset {
    /// Creates a dataset from series in file order.
    #[must_use]
    pub fn new(name: impl Into<String>, series: Vec<Series>) -> Self {
        Self {
            name: name.into(),
            series,
        }
    }

    /// Returns the dataset name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Returns true if the dataset has no series.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Returns the series at a 1-based index.
    ///
    /// # Errors
    ///
    /// Returns a [`RangeError`] for index 0 or an index greater than
    /// [`Dataset::len`].
    pub fn get(&self, index: usize) -> Result<&Series, RangeError> {
        index
            .checked_sub(1)
            .and_then(|i| self.series.get(i))
            .ok_or_else(|| self.range_error(index))
    }

    /// Returns the first series, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Series> {
        self.series.first()
    }

    /// Returns the last series, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Series> {
        self.series.last()
    }

    /// Returns the valid indices, `1..=len`.
    #[must_use]
    pub fn indices(&self) -> RangeInclusive<usize> {
        1..=self.series.len()
    }

    /// Iterates over series in file order.
    pub fn iter(&self) -> std::slice::Iter<'_, Series> {
        self.series.iter()
    }

    /// Iterates over `(index, series)` pairs with 1-based indices.
    pub fn iter_indexed(&self) -> impl Iterator<Item = (usize, &Series)> {
        self.series.iter().enumerate().map(|(i, s)| (i + 1, s))
    }

    /// Returns the series slice in file order.
    #[must_use]
    pub fn as_slice(&self) -> &[Series] {
        &self.series
    }

    /// Returns a new dataset holding only series of the given type.
    ///
    /// Relative order is preserved and the subset is named
    /// `{name}_{type}`, e.g. `M3_yearly`.
    #[must_use]
    pub fn subset(&self, series_type: SeriesType) -> Self {
        let series = self
            .series
            .iter()
            .filter(|s| s.series_type() == series_type)
            .cloned()
            .collect();
        Self::new(format!("{}_{}", self.name, series_type), series)
    }

    /// Counts series per type. Types with no series are omitted.
    #[must_use]
    pub fn type_counts(&self) -> BTreeMap<SeriesType, usize> {
        let mut counts = BTreeMap::new();
        for series in &self.series {
            *counts.entry(series.series_type()).or_insert(0) += 1;
        }
        counts
    }

    fn range_error(&self, index: usize) -> RangeError {
        RangeError {
            index,
            len: self.series.len(),
            dataset: self.name.clone(),
        }
    }
}

impl Index<usize> for Dataset {
    type Output = Series;

    /// Returns the series at a 1-based index.
    ///
    /// # Panics
    ///
    /// Panics if the index is 0 or greater than the dataset length.
    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Ok(series) => series,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Series;
    type IntoIter = std::slice::Iter<'a, Series>;

    fn into_iter(self) -> Self::IntoIter {
        self.series.iter()
    }
}

impl std::fmt::Display for Dataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} Dataset: {} series", self.name, self.series.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(sn: &str, series_type: SeriesType) -> Series {
        Series::new(
            sn,
            vec![1.0, 2.0, 3.0],
            vec![4.0],
            1,
            series_type.period(),
            series_type,
            "",
        )
        .unwrap()
    }

    fn mixed() -> Dataset {
        Dataset::new(
            "M3",
            vec![
                series("N0001", SeriesType::Yearly),
                series("N0646", SeriesType::Quarterly),
                series("N0002", SeriesType::Yearly),
                series("N1402", SeriesType::Monthly),
                series("N2830", SeriesType::Other),
                series("N0003", SeriesType::Yearly),
            ],
        )
    }

    #[test]
    fn test_one_based_get() {
        let dataset = mixed();
        assert_eq!(dataset.get(1).unwrap().sn(), "N0001");
        assert_eq!(dataset.get(dataset.len()).unwrap().sn(), "N0003");
        assert_eq!(dataset[2].sn(), "N0646");
    }

    #[test]
    fn test_out_of_range() {
        let dataset = mixed();
        let zero = dataset.get(0).unwrap_err();
        assert_eq!(zero.index, 0);
        assert_eq!(zero.len, 6);
        assert_eq!(zero.dataset, "M3");

        assert!(dataset.get(7).is_err());
        assert!(dataset.get(usize::MAX).is_err());
    }

    #[test]
    #[should_panic(expected = "Series 0 not found in M3 dataset")]
    fn test_index_zero_panics() {
        let dataset = mixed();
        let _ = &dataset[0];
    }

    #[test]
    fn test_first_and_last_match_bounds() {
        let dataset = mixed();
        assert_eq!(dataset.first(), Some(&dataset[1]));
        assert_eq!(dataset.last(), Some(&dataset[dataset.len()]));
    }

    #[test]
    fn test_indices_and_iter_indexed() {
        let dataset = mixed();
        assert_eq!(dataset.indices(), 1..=6);

        let pairs: Vec<_> = dataset
            .iter_indexed()
            .map(|(i, s)| (i, s.sn().to_string()))
            .collect();
        assert_eq!(pairs[0], (1, "N0001".to_string()));
        assert_eq!(pairs[5], (6, "N0003".to_string()));
    }

    #[test]
    fn test_subset_preserves_order() {
        let dataset = mixed();
        let yearly = dataset.subset(SeriesType::Yearly);

        assert_eq!(yearly.name(), "M3_yearly");
        let names: Vec<_> = yearly.iter().map(Series::sn).collect();
        assert_eq!(names, ["N0001", "N0002", "N0003"]);
        assert!(yearly.iter().all(|s| s.series_type() == SeriesType::Yearly));
    }

    #[test]
    fn test_subsets_partition_dataset() {
        let dataset = mixed();
        let total: usize = SeriesType::all()
            .iter()
            .map(|ty| dataset.subset(*ty).len())
            .sum();
        assert_eq!(total, dataset.len());
    }

    #[test]
    fn test_subset_of_absent_type_is_empty() {
        let hourly = mixed().subset(SeriesType::Hourly);
        assert!(hourly.is_empty());
        assert!(hourly.get(1).is_err());
    }

    #[test]
    fn test_type_counts() {
        let counts = mixed().type_counts();
        assert_eq!(counts[&SeriesType::Yearly], 3);
        assert_eq!(counts[&SeriesType::Quarterly], 1);
        assert_eq!(counts.get(&SeriesType::Daily), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(mixed().to_string(), "M3 Dataset: 6 series");
    }
}
