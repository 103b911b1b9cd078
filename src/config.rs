//! Runtime settings read from `AGECALC_*` environment variables.
//!
//! Unset variables fall back to defaults; set but malformed ones are an
//! error naming the variable.

use crate::render::animate::{CountUp, MAX_DURATION};
use crate::rules::YearCeiling;
use chrono::NaiveDate;
use std::time::Duration;
use thiserror::Error;

pub const ENV_TODAY: &str = "AGECALC_TODAY";
pub const ENV_YEAR_CEILING: &str = "AGECALC_YEAR_CEILING";
pub const ENV_ANIMATE: &str = "AGECALC_ANIMATE";
pub const ENV_ANIMATION_MS: &str = "AGECALC_ANIMATION_MS";

#[derive(Debug, Error, PartialEq, Eq)]
#[error("{var}={value:?}: {reason}")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Fixed "today"; `None` reads the local system date.
    pub today: Option<NaiveDate>,
    pub year_ceiling: YearCeiling,
    pub animate: bool,
    pub animation: CountUp,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            today: None,
            year_ceiling: YearCeiling::Startup,
            animate: true,
            animation: CountUp::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(value) = lookup(ENV_TODAY) {
            config.today = Some(parse_date(&value).map_err(|reason| ConfigError {
                var: ENV_TODAY,
                value,
                reason,
            })?);
        }

        if let Some(value) = lookup(ENV_YEAR_CEILING) {
            config.year_ceiling = value.parse().map_err(|reason| ConfigError {
                var: ENV_YEAR_CEILING,
                value,
                reason,
            })?;
        }

        if let Some(value) = lookup(ENV_ANIMATE) {
            config.animate = parse_bool(&value).ok_or_else(|| ConfigError {
                var: ENV_ANIMATE,
                value,
                reason: "expected 1, 0, true or false".to_string(),
            })?;
        }

        if let Some(value) = lookup(ENV_ANIMATION_MS) {
            let ms = value.trim().parse::<u64>().map_err(|e| ConfigError {
                var: ENV_ANIMATION_MS,
                value: value.clone(),
                reason: e.to_string(),
            })?;
            let duration = Duration::from_millis(ms);
            if duration > MAX_DURATION {
                return Err(ConfigError {
                    var: ENV_ANIMATION_MS,
                    value,
                    reason: format!("at most {} ms", MAX_DURATION.as_millis()),
                });
            }
            config.animation.duration = duration;
        }

        Ok(config)
    }
}

/// `YYYY-MM-DD`.
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
