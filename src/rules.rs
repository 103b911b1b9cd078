//! Range rules for the three form fields.

use crate::date::Field;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Earliest accepted birth year.
pub const MIN_YEAR: i32 = 1900;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationRule {
    pub min: i32,
    pub max: i32,
    pub field: Field,
    pub message: &'static str,
}

impl ValidationRule {
    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationRules {
    pub day: ValidationRule,
    pub month: ValidationRule,
    pub year: ValidationRule,
}

impl ValidationRules {
    /// Rules with the year capped at `max_year`.
    pub fn for_year(max_year: i32) -> Self {
        Self {
            day: ValidationRule {
                min: 1,
                max: 31,
                field: Field::Day,
                message: "Día inválido",
            },
            month: ValidationRule {
                min: 1,
                max: 12,
                field: Field::Month,
                message: "Mes inválido",
            },
            year: ValidationRule {
                min: MIN_YEAR,
                max: max_year,
                field: Field::Year,
                message: "Año inválido",
            },
        }
    }

    pub fn get(&self, field: Field) -> &ValidationRule {
        match field {
            Field::Day => &self.day,
            Field::Month => &self.month,
            Field::Year => &self.year,
        }
    }
}

/// When the upper bound of the year rule is taken from the calendar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum YearCeiling {
    /// Captured once, when the validator is built.
    #[default]
    Startup,
    /// Re-read from the `today` passed to every validation call.
    PerCall,
}

impl FromStr for YearCeiling {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "startup" => Ok(YearCeiling::Startup),
            "per-call" | "per_call" => Ok(YearCeiling::PerCall),
            other => Err(format!("expected `startup` or `per-call`, got `{other}`")),
        }
    }
}

impl YearCeiling {
    /// Rules in force for a call made on `today`, given the rules built at startup.
    pub fn rules_for(self, startup: &ValidationRules, today: NaiveDate) -> ValidationRules {
        match self {
            YearCeiling::Startup => *startup,
            YearCeiling::PerCall => ValidationRules::for_year(today.year()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_inclusive() {
        let rules = ValidationRules::for_year(2024);
        assert!(rules.day.contains(1));
        assert!(rules.day.contains(31));
        assert!(!rules.day.contains(0));
        assert!(!rules.month.contains(13));
        assert!(rules.year.contains(1900));
        assert!(rules.year.contains(2024));
        assert!(!rules.year.contains(2025));
    }

    #[test]
    fn per_call_ceiling_follows_today() {
        let startup = ValidationRules::for_year(2024);
        let new_year = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(YearCeiling::Startup.rules_for(&startup, new_year).year.max, 2024);
        assert_eq!(YearCeiling::PerCall.rules_for(&startup, new_year).year.max, 2025);
    }

    #[test]
    fn parses_ceiling_names() {
        assert_eq!("startup".parse::<YearCeiling>(), Ok(YearCeiling::Startup));
        assert_eq!("Per-Call".parse::<YearCeiling>(), Ok(YearCeiling::PerCall));
        assert!("yearly".parse::<YearCeiling>().is_err());
    }
}
