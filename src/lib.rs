//! Date-of-birth validation and age calculation.
//!
//! `validate` and `age` are pure functions over a [`DateTriple`] and an
//! explicit `today`; `form` sequences them the way an input form does, and
//! `render` holds the output adapters.

pub mod age;
pub mod clock;
pub mod config;
pub mod date;
pub mod form;
pub mod render;
pub mod rules;
pub mod validate;

pub use age::{AgeResult, calculate_age};
pub use clock::{Clock, FixedClock, SystemClock};
pub use date::{DateTriple, Field, format_date_string};
pub use form::{Form, Submission};
pub use rules::{ValidationRule, ValidationRules, YearCeiling};
pub use validate::{
    ErrorKind, FieldError, FieldErrors, LiveCheck, Validator, is_future_date,
    is_valid_calendar_date, validate_field,
};
