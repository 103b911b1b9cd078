//! form.rs
//!
//! The date-of-birth form: current field values, the errors currently on
//! display, and the two events that change them (typing into a field and
//! submitting). Validation and age math stay in `validate` and `age`; this
//! type only sequences them and remembers the outcome.

use crate::age::{AgeResult, calculate_age};
use crate::clock::Clock;
use crate::date::{DateTriple, Field, parse_field};
use crate::validate::{FieldErrors, LiveCheck, Validator, validate_field};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info};

/// A successful submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub birth_date: NaiveDate,
    pub today: NaiveDate,
    pub age: AgeResult,
}

pub struct Form<C: Clock> {
    validator: Validator,
    clock: C,
    values: DateTriple,
    errors: FieldErrors,
}

impl<C: Clock> Form<C> {
    pub fn new(validator: Validator, clock: C) -> Self {
        Self {
            validator,
            clock,
            values: DateTriple::default(),
            errors: FieldErrors::default(),
        }
    }

    pub fn values(&self) -> &DateTriple {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Replaces all three values without validating them.
    pub fn fill(&mut self, values: DateTriple) {
        self.values = values;
    }

    /// The user changed the text of `field`.
    ///
    /// Emptying a field clears its error. Otherwise the field is range
    /// checked on its own, and once all three fields hold numbers the whole
    /// date is re-validated.
    pub fn input(&mut self, field: Field, raw: &str) -> &FieldErrors {
        let today = self.clock.today();
        let value = parse_field(raw);
        self.values.set(field, value);

        if raw.trim().is_empty() {
            self.errors.clear(field);
            return &self.errors;
        }

        let rules = self.validator.rules(today);
        match validate_field(value, rules.get(field)) {
            Ok(_) => self.errors.clear(field),
            Err(e) => self.errors.set(e),
        }

        if value.is_some() {
            match self.validator.validate_live(&self.values, today) {
                LiveCheck::Pending => {}
                LiveCheck::Valid(date) => {
                    debug!(%date, "live check passed");
                    self.errors.clear_all();
                }
                LiveCheck::Invalid(errors) => self.errors = errors,
            }
        }

        &self.errors
    }

    /// Validates the current values and, if they pass, computes the age.
    pub fn submit(&mut self) -> Result<Submission, FieldErrors> {
        let today = self.clock.today();
        self.errors.clear_all();

        match self.validator.validate_submission(&self.values, today) {
            Ok(birth_date) => {
                let age = calculate_age(birth_date, today);
                info!(
                    %birth_date,
                    %today,
                    years = age.years,
                    months = age.months,
                    days = age.days,
                    "age computed"
                );
                Ok(Submission {
                    birth_date,
                    today,
                    age,
                })
            }
            Err(errors) => {
                self.errors = errors;
                Err(errors)
            }
        }
    }
}
