//! Calendar dates attached to exercise entries

use crate::error::{CoreError, Result};
use chrono::{DateTime, Datelike, Local, NaiveDate};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// `Sun Jan 15 2023`
const DISPLAY_FORMAT: &str = "%a %b %d %Y";
/// `2023-01-15`, also the persisted form (sorts lexically)
const ISO_FORMAT: &str = "%Y-%m-%d";

/// Four-digit years only. Outside this range chrono writes a sign (`+10000`,
/// `-0001`) and the persisted form stops sorting in calendar order.
const YEARS: std::ops::RangeInclusive<i32> = 0..=9999;

/// Calendar date of an exercise, without a time component.
///
/// Serializes to the human-readable display form (`Sun Jan 15 2023`).
/// The year is always within `0..=9999`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExerciseDate(NaiveDate);

impl ExerciseDate {
    /// Wrap a calendar date, rejecting years that need more than four digits
    pub fn new(date: NaiveDate) -> Result<Self> {
        if YEARS.contains(&date.year()) {
            Ok(Self(date))
        } else {
            Err(CoreError::invalid_input(format!(
                "date out of range: {} (years {}..={} only)",
                date,
                YEARS.start(),
                YEARS.end()
            )))
        }
    }

    /// Build from year, month, day. `None` for an impossible or out-of-range date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).and_then(|date| Self::new(date).ok())
    }

    /// Today's date in the server's local time zone
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// Parse user input.
    ///
    /// Accepts `YYYY-MM-DD`, RFC 3339 timestamps (the calendar date of the
    /// timestamp in its own offset) and the display form `Sun Jan 15 2023`.
    pub fn parse(input: &str) -> Result<Self> {
        let s = input.trim();

        let parsed = NaiveDate::parse_from_str(s, ISO_FORMAT)
            .ok()
            .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|ts| ts.date_naive()))
            .or_else(|| NaiveDate::parse_from_str(s, DISPLAY_FORMAT).ok());

        match parsed {
            Some(date) => Self::new(date),
            None => Err(CoreError::invalid_input(format!("invalid date: {:?}", input))),
        }
    }

    /// Parse an optional form field. Missing and blank values are `None`.
    pub fn parse_optional(input: Option<&str>) -> Result<Option<Self>> {
        match input.map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => Self::parse(s).map(Some),
        }
    }

    /// `YYYY-MM-DD`, the form written to storage
    pub fn to_iso_string(&self) -> String {
        self.0.format(ISO_FORMAT).to_string()
    }

    /// Read back the persisted `YYYY-MM-DD` form
    pub fn from_iso_str(s: &str) -> Result<Self> {
        NaiveDate::parse_from_str(s, ISO_FORMAT)
            .map_err(|e| CoreError::storage(format!("corrupt stored date {:?}: {}", s, e)))
            .and_then(|date| {
                Self::new(date).map_err(|e| CoreError::storage(format!("corrupt stored date: {}", e)))
            })
    }

    pub fn naive(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for ExerciseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DISPLAY_FORMAT))
    }
}

impl FromStr for ExerciseDate {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<NaiveDate> for ExerciseDate {
    type Error = CoreError;

    fn try_from(date: NaiveDate) -> Result<Self> {
        Self::new(date)
    }
}

impl Serialize for ExerciseDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ExerciseDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(de::Error::custom)
    }
}
