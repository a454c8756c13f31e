use crate::consts::{
    ISO_SEPARATOR, MAX_YEAR, PATTERN_DAY_FIRST, PATTERN_ISO, PATTERN_MONTH_FIRST, PATTERN_UNIX,
    SECONDS_PER_DAY, SENTINEL_FIELD, SENTINEL_YEAR, SLASH_SEPARATOR, TOKEN_DAY, TOKEN_MONTH,
    TOKEN_YEAR,
};
use crate::types::Selection;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// The textual representation used for the submission sink and for
/// interpreting a configured default date.
///
/// Any string other than the four recognized tags is treated as a custom
/// template in which the `dd`, `mm` and `yyyy` tokens are each substituted
/// once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum DateFormat {
    /// `yyyy-mm-dd`
    #[default]
    Iso,
    /// `dd/mm/yyyy`
    DayMonthYear,
    /// `mm/dd/yyyy`
    MonthDayYear,
    /// Whole seconds since the Unix epoch for the date at UTC midnight
    Unix,
    /// Free-form template containing `dd`/`mm`/`yyyy` tokens
    Custom(String),
}

impl DateFormat {
    /// The pattern string this format substitutes into
    fn pattern(&self) -> &str {
        match self {
            Self::Iso => PATTERN_ISO,
            Self::DayMonthYear => PATTERN_DAY_FIRST,
            Self::MonthDayYear => PATTERN_MONTH_FIRST,
            Self::Unix => PATTERN_UNIX,
            Self::Custom(template) => template,
        }
    }

    /// Renders the submission value for a complete selection.
    ///
    /// The caller guards this with [`crate::daylist::check`]: all three
    /// fields must be selected and valid. Sentinel fields never panic, but
    /// the named patterns then emit the sentinel text and `Unix` emits an
    /// empty string.
    pub fn format(&self, fields: &FieldValues) -> String {
        match self {
            Self::Unix => {
                let selection = fields.to_selection();
                match (selection.year(), selection.month(), selection.day()) {
                    (Some(year), Some(month), Some(day)) => {
                        epoch_seconds(year, month, day).to_string()
                    }
                    _ => String::new(),
                }
            }
            _ => self
                .pattern()
                .replacen(TOKEN_YEAR, &fields.year, 1)
                .replacen(TOKEN_MONTH, &fields.month, 1)
                .replacen(TOKEN_DAY, &fields.day, 1),
        }
    }

    /// Splits a stored value back into zero-padded field strings.
    ///
    /// Pure: the same format and value always yield the same triple.
    /// Unknown formats fall back to the ISO split rule. Malformed input
    /// degrades field by field to the sentinel forms; this is best-effort
    /// by contract, never an error.
    pub fn parse(&self, value: &str) -> FieldValues {
        match self {
            Self::Unix => parse_epoch(value),
            Self::DayMonthYear => {
                let parts: Vec<&str> = value.trim().split(SLASH_SEPARATOR).collect();
                fields_from(parts.first(), parts.get(1), parts.get(2))
            }
            Self::MonthDayYear => {
                let parts: Vec<&str> = value.trim().split(SLASH_SEPARATOR).collect();
                fields_from(parts.get(1), parts.first(), parts.get(2))
            }
            Self::Iso | Self::Custom(_) => {
                let parts: Vec<&str> = value.trim().split(ISO_SEPARATOR).collect();
                fields_from(parts.get(2), parts.get(1), parts.first())
            }
        }
    }
}

impl From<&str> for DateFormat {
    fn from(s: &str) -> Self {
        match s {
            PATTERN_ISO => Self::Iso,
            PATTERN_DAY_FIRST => Self::DayMonthYear,
            PATTERN_MONTH_FIRST => Self::MonthDayYear,
            PATTERN_UNIX => Self::Unix,
            other => Self::Custom(other.to_owned()),
        }
    }
}

impl From<String> for DateFormat {
    fn from(s: String) -> Self {
        match s.as_str() {
            PATTERN_ISO => Self::Iso,
            PATTERN_DAY_FIRST => Self::DayMonthYear,
            PATTERN_MONTH_FIRST => Self::MonthDayYear,
            PATTERN_UNIX => Self::Unix,
            _ => Self::Custom(s),
        }
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pattern())
    }
}

impl Serialize for DateFormat {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.pattern())
    }
}

impl<'de> Deserialize<'de> for DateFormat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s))
    }
}

/// The zero-padded string forms of the three fields, exactly as the widget
/// stores them: two digits for day and month, four for the year, with
/// `"00"`/`"0000"` marking an unselected field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldValues {
    pub day: String,
    pub month: String,
    pub year: String,
}

impl Default for FieldValues {
    fn default() -> Self {
        Self {
            day: SENTINEL_FIELD.to_owned(),
            month: SENTINEL_FIELD.to_owned(),
            year: SENTINEL_YEAR.to_owned(),
        }
    }
}

impl FieldValues {
    /// Pads the given numeric fields into their stored string forms
    pub fn new(day: u8, month: u8, year: u16) -> Self {
        Self {
            day: format!("{day:02}"),
            month: format!("{month:02}"),
            year: format!("{year:04}"),
        }
    }

    /// String forms of a selection; unselected fields become sentinels
    pub fn from_selection(selection: &Selection) -> Self {
        Self {
            day: selection
                .day()
                .map_or_else(|| SENTINEL_FIELD.to_owned(), |d| format!("{d:02}")),
            month: selection
                .month()
                .map_or_else(|| SENTINEL_FIELD.to_owned(), |m| format!("{m:02}")),
            year: selection
                .year()
                .map_or_else(|| SENTINEL_YEAR.to_owned(), |y| format!("{y:04}")),
        }
    }

    /// Parses the string forms back into a typed selection
    pub fn to_selection(&self) -> Selection {
        Selection::from_values(&self.day, &self.month, &self.year)
    }
}

fn fields_from(day: Option<&&str>, month: Option<&&str>, year: Option<&&str>) -> FieldValues {
    FieldValues {
        day: padded_part(day, 2, SENTINEL_FIELD),
        month: padded_part(month, 2, SENTINEL_FIELD),
        year: padded_part(year, 4, SENTINEL_YEAR),
    }
}

fn padded_part(part: Option<&&str>, width: usize, sentinel: &str) -> String {
    part.and_then(|p| p.trim().parse::<u16>().ok())
        .filter(|&n| n != 0)
        .map(|n| format!("{n:0width$}"))
        .unwrap_or_else(|| sentinel.to_owned())
}

fn parse_epoch(value: &str) -> FieldValues {
    match value.trim().parse::<i64>() {
        Ok(seconds) => {
            let (year, month, day) = civil_from_days(seconds.div_euclid(SECONDS_PER_DAY));
            FieldValues {
                day: format!("{day:02}"),
                month: format!("{month:02}"),
                year: format!("{year:04}"),
            }
        }
        Err(_) => FieldValues::default(),
    }
}

/// Whole seconds since the Unix epoch for the given date at UTC midnight
fn epoch_seconds(year: u16, month: u8, day: u8) -> i64 {
    days_from_civil(i64::from(year), month, day) * SECONDS_PER_DAY
}

/// Days since 1970-01-01 in the proleptic Gregorian calendar.
/// Era-based arithmetic over 400-year cycles of 146097 days.
pub(crate) const fn days_from_civil(year: i64, month: u8, day: u8) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = (month as i64 + 9) % 12;
    let doy = (153 * mp + 2) / 5 + day as i64 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Inverse of [`days_from_civil`]: (year, month, day) for an epoch day count
pub(crate) const fn civil_from_days(days: i64) -> (i64, u8, u8) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;
    let year = if month <= 2 { y + 1 } else { y };
    (year, month, day)
}

/// The current UTC year, for resolving age-relative year windows.
/// Clamped into the representable range; a pre-epoch clock reads as 1970.
pub fn current_year() -> u16 {
    let seconds = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or_default();
    let (year, _, _) = civil_from_days(seconds.div_euclid(SECONDS_PER_DAY));
    year.clamp(1, MAX_YEAR as i64) as u16
}
