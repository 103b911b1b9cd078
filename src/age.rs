//! age.rs
//!
//! Elapsed age between a birth date and today, as years, months and days.
//!
//! Subtracts component-wise and borrows from the month before today's month
//! when the day count goes negative, then from the year when the month count
//! does. The borrowed month length never drops below the birth day, which keeps
//! the day count non-negative when that month is shorter than the birth day.

use crate::date::days_in_previous_month;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeResult {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

/// Age of someone born on `birthdate`, as of `today`.
///
/// Both dates are calendar dates, so no time-of-day enters the result.
/// A `birthdate` later than `today` yields all zeros.
pub fn calculate_age(birthdate: NaiveDate, today: NaiveDate) -> AgeResult {
    if birthdate >= today {
        return AgeResult::default();
    }

    let mut years = today.year() - birthdate.year();
    let mut months = today.month() as i32 - birthdate.month() as i32;
    let mut days = today.day() as i32 - birthdate.day() as i32;

    // Fix day underflow
    if days < 0 {
        months -= 1;

        // Previous month is 28–31 days long. A birth day past its end counts
        // the month as ending on the birth day, keeping `days` non-negative.
        let borrowed = days_in_previous_month(today).max(birthdate.day());
        days += borrowed as i32;
    }

    // Fix month underflow
    if months < 0 {
        years -= 1;
        months += 12;
    }

    AgeResult {
        years: years as u32,
        months: months as u32,
        days: days as u32,
    }
}

impl fmt::Display for AgeResult {
    /// "X años, Y meses, Z días"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}, {} {}, {} {}",
            self.years,
            unit(self.years, "año", "años"),
            self.months,
            unit(self.months, "mes", "meses"),
            self.days,
            unit(self.days, "día", "días"),
        )
    }
}

fn unit(n: u32, one: &'static str, many: &'static str) -> &'static str {
    if n == 1 { one } else { many }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn age(years: u32, months: u32, days: u32) -> AgeResult {
        AgeResult {
            years,
            months,
            days,
        }
    }

    #[test]
    fn exact_anniversary() {
        assert_eq!(calculate_age(date(1990, 1, 1), date(2024, 1, 1)), age(34, 0, 0));
    }

    #[test]
    fn borrows_days_and_months() {
        assert_eq!(calculate_age(date(1990, 12, 31), date(2024, 1, 1)), age(33, 0, 1));
    }

    #[test]
    fn same_day_is_zero() {
        let today = date(2024, 6, 15);
        assert_eq!(calculate_age(today, today), AgeResult::default());
    }

    #[test]
    fn borrow_uses_leap_february() {
        // 2024-03-10 borrows from February 2024 (29 days).
        assert_eq!(calculate_age(date(2000, 1, 20), date(2024, 3, 10)), age(24, 1, 19));
        // 2023-03-10 borrows from February 2023 (28 days).
        assert_eq!(calculate_age(date(2000, 1, 20), date(2023, 3, 10)), age(23, 1, 18));
    }

    #[test]
    fn birth_day_past_end_of_previous_month() {
        assert_eq!(calculate_age(date(2023, 1, 31), date(2023, 3, 1)), age(0, 1, 1));
        assert_eq!(calculate_age(date(2000, 5, 31), date(2023, 7, 1)), age(23, 1, 1));
    }

    #[test]
    fn leap_day_birthday() {
        assert_eq!(calculate_age(date(2000, 2, 29), date(2023, 2, 28)), age(22, 11, 30));
        assert_eq!(calculate_age(date(2000, 2, 29), date(2024, 2, 29)), age(24, 0, 0));
    }

    #[test]
    fn components_stay_in_range() {
        let today = date(2024, 3, 1);
        let mut birth = date(1990, 1, 1);
        while birth <= today {
            let a = calculate_age(birth, today);
            assert!(a.months <= 11, "{birth}: {a:?}");
            assert!(a.days <= 30, "{birth}: {a:?}");
            birth = birth.succ_opt().unwrap();
        }
    }

    #[test]
    fn display_pluralises() {
        assert_eq!(age(1, 1, 1).to_string(), "1 año, 1 mes, 1 día");
        assert_eq!(age(33, 0, 2).to_string(), "33 años, 0 meses, 2 días");
    }
}
