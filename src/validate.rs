//! validate.rs
//!
//! Field and composite validation of a date of birth.
//!
//! Every outcome is plain data: a rejected input is an `Err(FieldErrors)`,
//! never a panic. Checks run in a fixed order and the first failing stage
//! decides the reported errors:
//!
//!   required → range → calendar round-trip → future date

use crate::date::{DateTriple, Field};
use crate::rules::{ValidationRule, ValidationRules, YearCeiling};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use tracing::debug;

pub const MSG_REQUIRED: &str = "Este campo es requerido";
pub const MSG_INVALID_DATE: &str = "Fecha inválida";
pub const MSG_FUTURE: &str = "La fecha no puede ser en el futuro";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorKind {
    Required,
    OutOfRange,
    InvalidDate,
    Future,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: Field,
    pub kind: ErrorKind,
    pub message: &'static str,
}

impl FieldError {
    pub fn required(field: Field) -> Self {
        Self {
            field,
            kind: ErrorKind::Required,
            message: MSG_REQUIRED,
        }
    }

    pub fn out_of_range(rule: &ValidationRule) -> Self {
        Self {
            field: rule.field,
            kind: ErrorKind::OutOfRange,
            message: rule.message,
        }
    }

    pub fn invalid_date() -> Self {
        Self {
            field: Field::Day,
            kind: ErrorKind::InvalidDate,
            message: MSG_INVALID_DATE,
        }
    }

    pub fn future() -> Self {
        Self {
            field: Field::Year,
            kind: ErrorKind::Future,
            message: MSG_FUTURE,
        }
    }
}

/// At most one error per field. An absent entry means the field is clear.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<FieldError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<FieldError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<FieldError>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        match field {
            Field::Day => self.day.as_ref(),
            Field::Month => self.month.as_ref(),
            Field::Year => self.year.as_ref(),
        }
    }

    pub fn set(&mut self, error: FieldError) {
        *self.slot(error.field) = Some(error);
    }

    pub fn clear(&mut self, field: Field) {
        *self.slot(field) = None;
    }

    pub fn clear_all(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.day.is_none() && self.month.is_none() && self.year.is_none()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Errors in form order (day, month, year).
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        [&self.day, &self.month, &self.year]
            .into_iter()
            .filter_map(Option::as_ref)
    }

    fn slot(&mut self, field: Field) -> &mut Option<FieldError> {
        match field {
            Field::Day => &mut self.day,
            Field::Month => &mut self.month,
            Field::Year => &mut self.year,
        }
    }
}

impl From<FieldError> for FieldErrors {
    fn from(error: FieldError) -> Self {
        let mut errors = FieldErrors::default();
        errors.set(error);
        errors
    }
}

/// Outcome of validating while the user is still typing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiveCheck {
    /// Some field is blank or non-numeric; nothing is reported yet.
    Pending,
    Valid(NaiveDate),
    Invalid(FieldErrors),
}

/// Range check of a single field against its rule.
pub fn validate_field(value: Option<i32>, rule: &ValidationRule) -> Result<i32, FieldError> {
    match value {
        Some(v) if rule.contains(v) => Ok(v),
        _ => Err(FieldError::out_of_range(rule)),
    }
}

/// Builds the calendar date a triple names, if it names a real one.
///
/// The date is accepted only when reading year, month and day back from it
/// reproduces the triple exactly, so day 31 of a 30-day month or February 30
/// never rolls over into the following month.
pub fn calendar_date(triple: &DateTriple) -> Option<NaiveDate> {
    let year = triple.year?;
    let month = u32::try_from(triple.month?).ok()?;
    let day = u32::try_from(triple.day?).ok()?;

    // chrono already rejects rather than normalises; the read-back pins that.
    NaiveDate::from_ymd_opt(year, month, day)
        .filter(|date| date.year() == year && date.month() == month && date.day() == day)
}

pub fn is_valid_calendar_date(triple: &DateTriple) -> bool {
    calendar_date(triple).is_some()
}

/// Strictly later than today. A birth date equal to today is not future.
pub fn is_future_date(date: NaiveDate, today: NaiveDate) -> bool {
    date > today
}

/// Validation pipeline bound to a set of rules and a year-ceiling policy.
#[derive(Debug, Clone)]
pub struct Validator {
    rules: ValidationRules,
    ceiling: YearCeiling,
}

impl Validator {
    /// Builds a validator whose startup rules cap the year at `today`'s year.
    pub fn new(ceiling: YearCeiling, today: NaiveDate) -> Self {
        Self {
            rules: ValidationRules::for_year(today.year()),
            ceiling,
        }
    }

    /// Rules in force for a call made on `today`.
    pub fn rules(&self, today: NaiveDate) -> ValidationRules {
        self.ceiling.rules_for(&self.rules, today)
    }

    /// Range, calendar and future checks on a triple.
    ///
    /// Range failures are reported for every failing field at once; the
    /// calendar failure is reported against the day and the future failure
    /// against the year.
    pub fn validate_date_values(
        &self,
        triple: &DateTriple,
        today: NaiveDate,
    ) -> Result<NaiveDate, FieldErrors> {
        let rules = self.rules(today);

        let mut errors = FieldErrors::default();
        for field in Field::ALL {
            if let Err(e) = validate_field(triple.get(field), rules.get(field)) {
                errors.set(e);
            }
        }
        if !errors.is_empty() {
            debug!(?triple, count = errors.len(), "range check failed");
            return Err(errors);
        }

        let Some(date) = calendar_date(triple) else {
            debug!(?triple, "not a calendar date");
            return Err(FieldError::invalid_date().into());
        };

        if is_future_date(date, today) {
            debug!(%date, %today, "birth date in the future");
            return Err(FieldError::future().into());
        }

        Ok(date)
    }

    /// Validation on form submission. Blank fields are reported as required
    /// and nothing else is checked until every field holds a number.
    pub fn validate_submission(
        &self,
        triple: &DateTriple,
        today: NaiveDate,
    ) -> Result<NaiveDate, FieldErrors> {
        let missing = triple.missing();
        if !missing.is_empty() {
            let mut errors = FieldErrors::default();
            for field in missing {
                errors.set(FieldError::required(field));
            }
            debug!(count = errors.len(), "required fields missing");
            return Err(errors);
        }

        self.validate_date_values(triple, today)
    }

    /// Validation while typing: silent until all three fields parse.
    pub fn validate_live(&self, triple: &DateTriple, today: NaiveDate) -> LiveCheck {
        if !triple.is_complete() {
            return LiveCheck::Pending;
        }
        match self.validate_date_values(triple, today) {
            Ok(date) => LiveCheck::Valid(date),
            Err(errors) => LiveCheck::Invalid(errors),
        }
    }
}
