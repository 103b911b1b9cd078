//! date.rs
//!
//! Raw form input as it arrives from the three numeric fields, plus the
//! month-length lookup the age calculator borrows from.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::IntErrorKind;

/// One of the three inputs of the date-of-birth form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Day,
    Month,
    Year,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Day, Field::Month, Field::Year];

    pub fn name(self) -> &'static str {
        match self {
            Field::Day => "day",
            Field::Month => "month",
            Field::Year => "year",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// User-entered day/month/year. `None` marks a blank or non-numeric field.
///
/// Nothing is checked at construction; validity is decided by the validator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateTriple {
    pub day: Option<i32>,
    pub month: Option<i32>,
    pub year: Option<i32>,
}

impl DateTriple {
    pub fn new(day: i32, month: i32, year: i32) -> Self {
        Self {
            day: Some(day),
            month: Some(month),
            year: Some(year),
        }
    }

    /// Builds a triple from the raw text of the three inputs.
    pub fn parse(day: &str, month: &str, year: &str) -> Self {
        Self {
            day: parse_field(day),
            month: parse_field(month),
            year: parse_field(year),
        }
    }

    pub fn get(&self, field: Field) -> Option<i32> {
        match field {
            Field::Day => self.day,
            Field::Month => self.month,
            Field::Year => self.year,
        }
    }

    pub fn set(&mut self, field: Field, value: Option<i32>) {
        match field {
            Field::Day => self.day = value,
            Field::Month => self.month = value,
            Field::Year => self.year = value,
        }
    }

    /// Fields that hold no usable integer.
    pub fn missing(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| self.get(*f).is_none())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.day.is_some() && self.month.is_some() && self.year.is_some()
    }
}

/// Parses the text of one input. Blank or non-integer text yields `None`.
///
/// Digit strings too long for `i32` saturate instead, so they read as an
/// out-of-range number rather than as a blank field.
pub fn parse_field(raw: &str) -> Option<i32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<i32>() {
        Ok(v) => Some(v),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i32::MAX),
            IntErrorKind::NegOverflow => Some(i32::MIN),
            _ => None,
        },
    }
}

/// Zero-padded `YYYY-MM-DD` rendering of a complete triple.
pub fn format_date_string(triple: &DateTriple) -> Option<String> {
    let (day, month, year) = (triple.day?, triple.month?, triple.year?);
    Some(format!("{year}-{month:02}-{day:02}"))
}

/// Length of the month before `date`'s month: the day number of the last
/// day before the 1st. January looks back to December of the prior year.
pub fn days_in_previous_month(date: NaiveDate) -> u32 {
    date.with_day(1)
        .and_then(|first| first.pred_opt())
        .map_or(31, |last| last.day())
}
