use crate::consts::{
    DEFAULT_MAX_AGE, DEFAULT_MIN_AGE, DEFAULT_SUBMIT_NAME, PLACEHOLDER_DAY, PLACEHOLDER_MONTH,
    PLACEHOLDER_YEAR, SUFFIX_ND, SUFFIX_RD, SUFFIX_ST, SUFFIX_TH,
};
use crate::format::DateFormat;
use serde::{Deserialize, Serialize};

/// How the month dropdown labels its entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthFormat {
    /// Full names ("January")
    #[default]
    Long,
    /// Abbreviated names ("Jan")
    Short,
    /// Plain numbers, optionally suffixed ("1st")
    Numeric,
}

/// The four ordinal suffix strings.
///
/// Only the strings are configurable; which one a number takes is fixed by
/// [`crate::labels::ordinal_suffix`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Suffixes {
    pub st: String,
    pub nd: String,
    pub rd: String,
    pub th: String,
}

impl Default for Suffixes {
    fn default() -> Self {
        Self {
            st: SUFFIX_ST.to_owned(),
            nd: SUFFIX_ND.to_owned(),
            rd: SUFFIX_RD.to_owned(),
            th: SUFFIX_TH.to_owned(),
        }
    }
}

/// Per-instance widget configuration, immutable once the widget is built.
///
/// `Default` reproduces the stock behavior: ISO submit format, long month
/// names, suffixed day labels, ages 0-120, sink named "date".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Value to preseed the widget with, expressed in `default_date_format`
    pub default_date: Option<String>,
    /// Format of `default_date`
    pub default_date_format: DateFormat,
    /// Format written to the submission sink
    pub submit_format: DateFormat,
    /// Youngest selectable age; ignored when `max_year` is given
    pub min_age: u16,
    /// Oldest selectable age; ignored when `min_year` is given
    pub max_age: u16,
    /// Explicit oldest selectable year, overriding `max_age`
    pub min_year: Option<u16>,
    /// Explicit newest selectable year, overriding `min_age`
    pub max_year: Option<u16>,
    /// Name of the submission sink; must be unique within the host form
    pub submit_field_name: String,
    /// Suffix day labels ("1st") instead of zero-padded numbers ("01")
    pub day_suffixes: bool,
    /// Suffix numeric month labels; only relevant for `MonthFormat::Numeric`
    pub month_suffixes: bool,
    /// Month label style
    pub month_format: MonthFormat,
    /// Suffix strings used when suffixing is on
    pub suffixes: Suffixes,
    /// Label of the day dropdown's "nothing selected" entry
    pub day_placeholder: String,
    /// Label of the month dropdown's "nothing selected" entry
    pub month_placeholder: String,
    /// Label of the year dropdown's "nothing selected" entry
    pub year_placeholder: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_date: None,
            default_date_format: DateFormat::Iso,
            submit_format: DateFormat::Iso,
            min_age: DEFAULT_MIN_AGE,
            max_age: DEFAULT_MAX_AGE,
            min_year: None,
            max_year: None,
            submit_field_name: DEFAULT_SUBMIT_NAME.to_owned(),
            day_suffixes: true,
            month_suffixes: true,
            month_format: MonthFormat::default(),
            suffixes: Suffixes::default(),
            day_placeholder: PLACEHOLDER_DAY.to_owned(),
            month_placeholder: PLACEHOLDER_MONTH.to_owned(),
            year_placeholder: PLACEHOLDER_YEAR.to_owned(),
        }
    }
}

/// Error type for widget construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The host form already submits a field under this name.
    #[error("Duplicate submission field name: {0:?}")]
    DuplicateSubmitName(String),

    /// A submission sink needs an identifier.
    #[error("Submission field name must not be empty")]
    EmptySubmitName,

    /// Explicit year bounds in the wrong order.
    #[error("Invalid year range: minimum ({min}) is after maximum ({max})")]
    InvalidYearRange { min: u16, max: u16 },

    /// Age bounds in the wrong order.
    #[error("Invalid age range: minimum ({min_age}) is above maximum ({max_age})")]
    InvalidAgeRange { min_age: u16, max_age: u16 },
}

impl Config {
    /// Resolves the selectable year window for the given current year.
    ///
    /// Explicit `min_year`/`max_year` bounds take precedence; otherwise the
    /// window is derived from the age bounds, oldest year first.
    pub fn year_range(&self, current_year: u16) -> (u16, u16) {
        let min = self
            .min_year
            .unwrap_or_else(|| current_year.saturating_sub(self.max_age.saturating_add(1)));
        let max = self
            .max_year
            .unwrap_or_else(|| current_year.saturating_sub(self.min_age));
        (min, max)
    }

    pub(crate) fn ensure_valid(&self) -> Result<(), ConfigError> {
        if self.submit_field_name.is_empty() {
            return Err(ConfigError::EmptySubmitName);
        }
        if let (Some(min), Some(max)) = (self.min_year, self.max_year) {
            if min > max {
                return Err(ConfigError::InvalidYearRange { min, max });
            }
        }
        if self.min_age > self.max_age {
            return Err(ConfigError::InvalidAgeRange {
                min_age: self.min_age,
                max_age: self.max_age,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_stock_behavior() {
        let config = Config::default();
        assert_eq!(config.submit_format, DateFormat::Iso);
        assert_eq!(config.default_date_format, DateFormat::Iso);
        assert_eq!(config.submit_field_name, "date");
        assert_eq!(config.min_age, 0);
        assert_eq!(config.max_age, 120);
        assert!(config.day_suffixes);
        assert!(config.month_suffixes);
        assert_eq!(config.month_format, MonthFormat::Long);
        assert_eq!(config.day_placeholder, "Day");
        assert_eq!(config.month_placeholder, "Month");
        assert_eq!(config.year_placeholder, "Year");
    }

    #[test]
    fn test_year_range_from_ages() {
        let config = Config::default();
        // Ages 0-120 relative to 2024
        assert_eq!(config.year_range(2024), (1903, 2024));

        let config = Config {
            min_age: 18,
            max_age: 65,
            ..Config::default()
        };
        assert_eq!(config.year_range(2024), (1958, 2006));
    }

    #[test]
    fn test_year_range_explicit_bounds_win() {
        let config = Config {
            min_year: Some(1990),
            max_year: Some(2010),
            min_age: 18,
            max_age: 65,
            ..Config::default()
        };
        assert_eq!(config.year_range(2024), (1990, 2010));

        // A single explicit bound still combines with the age fallback
        let config = Config {
            min_year: Some(2000),
            ..Config::default()
        };
        assert_eq!(config.year_range(2024), (2000, 2024));
    }

    #[test]
    fn test_ensure_valid_rejects_empty_name() {
        let config = Config {
            submit_field_name: String::new(),
            ..Config::default()
        };
        assert_eq!(config.ensure_valid(), Err(ConfigError::EmptySubmitName));
    }

    #[test]
    fn test_ensure_valid_rejects_inverted_years() {
        let config = Config {
            min_year: Some(2020),
            max_year: Some(1990),
            ..Config::default()
        };
        assert_eq!(
            config.ensure_valid(),
            Err(ConfigError::InvalidYearRange {
                min: 2020,
                max: 1990
            })
        );
    }

    #[test]
    fn test_ensure_valid_rejects_inverted_ages() {
        let config = Config {
            min_age: 70,
            max_age: 30,
            ..Config::default()
        };
        assert_eq!(
            config.ensure_valid(),
            Err(ConfigError::InvalidAgeRange {
                min_age: 70,
                max_age: 30
            })
        );
    }

    #[test]
    fn test_config_serde_round_trip() {
        let config = Config {
            default_date: Some("1990-06-15".to_owned()),
            submit_format: DateFormat::from("dd/mm/yyyy"),
            month_format: MonthFormat::Short,
            min_year: Some(1950),
            ..Config::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_config_serde_fills_defaults() {
        let parsed: Config = serde_json::from_str(r#"{"submit_field_name":"dob"}"#).unwrap();
        assert_eq!(parsed.submit_field_name, "dob");
        assert_eq!(parsed.max_age, 120);
        assert_eq!(parsed.submit_format, DateFormat::Iso);
    }
}
