//! Day, period, and semester vocabularies.
//!
//! Each teaching-schedule concept has two closed forms: a localized short
//! form used for display (`Day`, `Period`) and a canonical English form
//! used when building queries (`DayQuery`, `PeriodQuery`, `SemesterQuery`).
//! Total translation functions link the two, so no code outside this module
//! ever compares locale-dependent strings.
//!
//! The display vocabularies cover the five-day, five-period teaching grid.
//! The query vocabularies are wider where the query grammar is wider (it
//! also names the weekend and a sixth period); those extra members have no
//! short form and are only reachable by naming them directly.

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A weekday on the teaching grid, displayed as its single-kanji symbol.
///
/// Weekend days are not part of this vocabulary; parsing `"土"` or `"日"`
/// fails like any other unknown symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Day {
    #[serde(rename = "月")]
    Monday,
    #[serde(rename = "火")]
    Tuesday,
    #[serde(rename = "水")]
    Wednesday,
    #[serde(rename = "木")]
    Thursday,
    #[serde(rename = "金")]
    Friday,
}

/// The teaching days in Monday-first order, for ordered UI controls and
/// index-based storage.
pub const DAYS: [Day; 5] = [
    Day::Monday,
    Day::Tuesday,
    Day::Wednesday,
    Day::Thursday,
    Day::Friday,
];

impl Day {
    /// The single-character display symbol (`"月"` through `"金"`).
    pub fn symbol(self) -> &'static str {
        match self {
            Day::Monday => "月",
            Day::Tuesday => "火",
            Day::Wednesday => "水",
            Day::Thursday => "木",
            Day::Friday => "金",
        }
    }

    /// Translates to the canonical English form used in queries.
    pub fn to_query(self) -> DayQuery {
        match self {
            Day::Monday => DayQuery::Monday,
            Day::Tuesday => DayQuery::Tuesday,
            Day::Wednesday => DayQuery::Wednesday,
            Day::Thursday => DayQuery::Thursday,
            Day::Friday => DayQuery::Friday,
        }
    }

    /// Looks up a day by its 0-based position in [`DAYS`].
    ///
    /// Timetable slots store days as grid positions; indices outside the
    /// five-day grid fail with [`CatalogError::InvalidEnumValue`].
    pub fn from_index(index: usize) -> Result<Self, CatalogError> {
        DAYS.get(index)
            .copied()
            .ok_or_else(|| CatalogError::invalid_enum("day index", index.to_string()))
    }

    /// The 0-based position of this day in [`DAYS`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Day {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "月" => Ok(Day::Monday),
            "火" => Ok(Day::Tuesday),
            "水" => Ok(Day::Wednesday),
            "木" => Ok(Day::Thursday),
            "金" => Ok(Day::Friday),
            other => Err(CatalogError::invalid_enum("day", other)),
        }
    }
}

/// A class period on the teaching grid, displayed as its ordinal digit.
///
/// One period spans two clock hours on the syllabus pages ("1-2" is the
/// first period, "3-4" the second, and so on).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "1")]
    First,
    #[serde(rename = "2")]
    Second,
    #[serde(rename = "3")]
    Third,
    #[serde(rename = "4")]
    Fourth,
    #[serde(rename = "5")]
    Fifth,
}

/// The class periods in first-to-last order, for ordered UI controls and
/// index-based storage.
pub const PERIODS: [Period; 5] = [
    Period::First,
    Period::Second,
    Period::Third,
    Period::Fourth,
    Period::Fifth,
];

impl Period {
    /// The single-digit display label (`"1"` through `"5"`).
    pub fn label(self) -> &'static str {
        match self {
            Period::First => "1",
            Period::Second => "2",
            Period::Third => "3",
            Period::Fourth => "4",
            Period::Fifth => "5",
        }
    }

    /// Translates to the canonical English form used in queries.
    pub fn to_query(self) -> PeriodQuery {
        match self {
            Period::First => PeriodQuery::First,
            Period::Second => PeriodQuery::Second,
            Period::Third => PeriodQuery::Third,
            Period::Fourth => PeriodQuery::Fourth,
            Period::Fifth => PeriodQuery::Fifth,
        }
    }

    /// Looks up a period by its 0-based position in [`PERIODS`].
    ///
    /// Timetable slots store periods as grid positions; indices outside
    /// the grid fail with [`CatalogError::InvalidEnumValue`].
    pub fn from_index(index: usize) -> Result<Self, CatalogError> {
        PERIODS.get(index)
            .copied()
            .ok_or_else(|| CatalogError::invalid_enum("period index", index.to_string()))
    }

    /// The 0-based position of this period in [`PERIODS`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Period {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(Period::First),
            "2" => Ok(Period::Second),
            "3" => Ok(Period::Third),
            "4" => Ok(Period::Fourth),
            "5" => Ok(Period::Fifth),
            other => Err(CatalogError::invalid_enum("period", other)),
        }
    }
}

/// Canonical English weekday used when building queries.
///
/// Wider than [`Day`]: the query grammar also names the weekend, even
/// though no display symbol maps to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayQuery {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayQuery {
    /// The canonical English name, identical to the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            DayQuery::Monday => "Monday",
            DayQuery::Tuesday => "Tuesday",
            DayQuery::Wednesday => "Wednesday",
            DayQuery::Thursday => "Thursday",
            DayQuery::Friday => "Friday",
            DayQuery::Saturday => "Saturday",
            DayQuery::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for DayQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical English period ordinal used when building queries.
///
/// Wider than [`Period`]: the query grammar names a sixth period that the
/// display grid does not show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PeriodQuery {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
    Sixth,
}

impl PeriodQuery {
    /// The canonical English name, identical to the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            PeriodQuery::First => "First",
            PeriodQuery::Second => "Second",
            PeriodQuery::Third => "Third",
            PeriodQuery::Fourth => "Fourth",
            PeriodQuery::Fifth => "Fifth",
            PeriodQuery::Sixth => "Sixth",
        }
    }
}

impl fmt::Display for PeriodQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the four teaching quarters of an academic year.
///
/// Stored records encode the quarter as its 1-based number; [`TryFrom`]
/// is the decoding boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SemesterQuery {
    First,
    Second,
    Third,
    Fourth,
}

impl SemesterQuery {
    /// The canonical English name, identical to the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            SemesterQuery::First => "First",
            SemesterQuery::Second => "Second",
            SemesterQuery::Third => "Third",
            SemesterQuery::Fourth => "Fourth",
        }
    }

    /// The 1-based quarter number used in stored records.
    pub fn number(self) -> i32 {
        self as i32 + 1
    }

    /// The half-term label containing this quarter: quarters 1 and 2 fall
    /// in the first half (前期), quarters 3 and 4 in the second (後期).
    pub fn half_term(self) -> &'static str {
        match self {
            SemesterQuery::First | SemesterQuery::Second => "前期",
            SemesterQuery::Third | SemesterQuery::Fourth => "後期",
        }
    }
}

impl fmt::Display for SemesterQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<i32> for SemesterQuery {
    type Error = CatalogError;

    /// Decodes the 1-based quarter number used in stored records.
    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(SemesterQuery::First),
            2 => Ok(SemesterQuery::Second),
            3 => Ok(SemesterQuery::Third),
            4 => Ok(SemesterQuery::Fourth),
            other => Err(CatalogError::invalid_enum("quarter number", other.to_string())),
        }
    }
}
