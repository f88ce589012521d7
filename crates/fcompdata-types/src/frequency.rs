//! M4 competition frequencies.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::SeriesType;

/// Frequency subset of the M4 competition.
///
/// Each frequency is distributed as a separate file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    /// 23,000 yearly series.
    Yearly,
    /// 24,000 quarterly series.
    Quarterly,
    /// 48,000 monthly series.
    Monthly,
    /// 359 weekly series.
    Weekly,
    /// 4,227 daily series.
    Daily,
    /// 414 hourly series.
    Hourly,
}

impl Frequency {
    /// Returns the official M4 forecast horizon for this frequency.
    #[must_use]
    pub const fn horizon(&self) -> usize {
        match self {
            Self::Yearly => 6,
            Self::Quarterly => 8,
            Self::Monthly => 18,
            Self::Weekly => 13,
            Self::Daily => 14,
            Self::Hourly => 48,
        }
    }

    /// Returns the series type of every series in this frequency.
    #[must_use]
    pub const fn series_type(&self) -> SeriesType {
        match self {
            Self::Yearly => SeriesType::Yearly,
            Self::Quarterly => SeriesType::Quarterly,
            Self::Monthly => SeriesType::Monthly,
            Self::Weekly => SeriesType::Weekly,
            Self::Daily => SeriesType::Daily,
            Self::Hourly => SeriesType::Hourly,
        }
    }

    /// Returns the position of this frequency in [`Frequency::all`].
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::Yearly => 0,
            Self::Quarterly => 1,
            Self::Monthly => 2,
            Self::Weekly => 3,
            Self::Daily => 4,
            Self::Hourly => 5,
        }
    }

    /// Returns the capitalized name used by the M4 distribution files,
    /// e.g. `Yearly-train.csv`.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Yearly => "Yearly",
            Self::Quarterly => "Quarterly",
            Self::Monthly => "Monthly",
            Self::Weekly => "Weekly",
            Self::Daily => "Daily",
            Self::Hourly => "Hourly",
        }
    }

    /// Returns the frequency as a lowercase string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.series_type().as_str()
    }

    /// Returns all frequencies in canonical order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Yearly,
            Self::Quarterly,
            Self::Monthly,
            Self::Weekly,
            Self::Daily,
            Self::Hourly,
        ]
    }
}

impl From<Frequency> for SeriesType {
    fn from(frequency: Frequency) -> Self {
        frequency.series_type()
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = FrequencyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "yearly" => Ok(Self::Yearly),
            "quarterly" => Ok(Self::Quarterly),
            "monthly" => Ok(Self::Monthly),
            "weekly" => Ok(Self::Weekly),
            "daily" => Ok(Self::Daily),
            "hourly" => Ok(Self::Hourly),
            _ => Err(FrequencyParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an unknown frequency string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyParseError(String);

impl std::fmt::Display for FrequencyParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Unknown frequency '{}', expected one of: yearly, quarterly, monthly, weekly, daily, hourly",
            self.0
        )
    }
}

impl std::error::Error for FrequencyParseError {}
