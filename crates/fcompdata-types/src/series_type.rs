//! Series type (sampling frequency class) definitions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Sampling class of a competition series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesType {
    /// Yearly observations.
    Yearly,
    /// Quarterly observations.
    Quarterly,
    /// Monthly observations.
    Monthly,
    /// Weekly observations.
    Weekly,
    /// Daily observations.
    Daily,
    /// Hourly observations.
    Hourly,
    /// Anything else (M3 "other" series).
    Other,
}

impl SeriesType {
    /// Returns the seasonal period for this type.
    ///
    /// Records only carry the textual period, so everything without an
    /// established quarterly or monthly cycle maps to 1.
    #[must_use]
    pub const fn period(&self) -> u32 {
        match self {
            Self::Quarterly => 4,
            Self::Monthly => 12,
            Self::Yearly | Self::Weekly | Self::Daily | Self::Hourly | Self::Other => 1,
        }
    }

    /// Returns the type as a lowercase string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Yearly => "yearly",
            Self::Quarterly => "quarterly",
            Self::Monthly => "monthly",
            Self::Weekly => "weekly",
            Self::Daily => "daily",
            Self::Hourly => "hourly",
            Self::Other => "other",
        }
    }

    /// Returns all series types.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Yearly,
            Self::Quarterly,
            Self::Monthly,
            Self::Weekly,
            Self::Daily,
            Self::Hourly,
            Self::Other,
        ]
    }
}

impl std::fmt::Display for SeriesType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SeriesType {
    type Err = SeriesTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "yearly" => Ok(Self::Yearly),
            "quarterly" => Ok(Self::Quarterly),
            "monthly" => Ok(Self::Monthly),
            "weekly" => Ok(Self::Weekly),
            "daily" => Ok(Self::Daily),
            "hourly" => Ok(Self::Hourly),
            "other" => Ok(Self::Other),
            _ => Err(SeriesTypeParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid series type string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesTypeParseError(String);

impl std::fmt::Display for SeriesTypeParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid series type '{}', expected one of: yearly, quarterly, monthly, weekly, daily, hourly, other",
            self.0
        )
    }
}

impl std::error::Error for SeriesTypeParseError {}
