use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_DAY, MAX_MONTH, MAX_YEAR,
};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// Error raised when a single dropdown field holds an out-of-range value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum FieldError {
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day: {} (must be 1-{})", "_0", MAX_DAY)]
    InvalidDay(u8),
}

impl std::error::Error for FieldError {}

/// A year value guaranteed to be in the range `1..=MAX_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `FieldError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, FieldError> {
        let non_zero = NonZeroU16::new(value).ok_or(FieldError::InvalidYear(value))?;
        if value > MAX_YEAR {
            return Err(FieldError::InvalidYear(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl TryFrom<u16> for Year {
    type Error = FieldError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `FieldError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, FieldError> {
        let non_zero = NonZeroU8::new(value).ok_or(FieldError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(FieldError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = FieldError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value guaranteed to be in the range `1..=MAX_DAY` (1..=31)
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
///
/// Only the structural range is checked here. Whether the day actually exists
/// in the currently selected month and year is decided per change event by
/// [`crate::daylist::check`], because a stale day selection (the 31st while
/// switching January to April) must remain representable until corrected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and <= `MAX_DAY`
    ///
    /// # Errors
    /// Returns `FieldError::InvalidDay` if the value is 0 or > `MAX_DAY`.
    pub fn new(value: u8) -> Result<Self, FieldError> {
        let non_zero = NonZeroU8::new(value).ok_or(FieldError::InvalidDay(value))?;
        if value > MAX_DAY {
            return Err(FieldError::InvalidDay(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = FieldError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The three independently-chosen dropdown fields.
///
/// Any field may be unselected (`None`). A partial selection is a normal
/// state, not an error: the user picks the fields in whatever order they
/// like and the widget only submits once all three are present and valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    pub day: Option<Day>,
    pub month: Option<Month>,
    pub year: Option<Year>,
}

impl Selection {
    /// Builds a selection from the widget's stored value strings.
    ///
    /// The widget keeps zero-padded string forms (`"05"`, `"03"`, `"2024"`);
    /// the sentinels `"00"`/`"0000"` and anything non-numeric or out of
    /// range degrade to `None` rather than failing, since host UI state is
    /// read fresh on every change and may be mid-edit.
    pub fn from_values(day: &str, month: &str, year: &str) -> Self {
        Self {
            day: parse_field(day).and_then(|v| Day::new(v).ok()),
            month: parse_field(month).and_then(|v| Month::new(v).ok()),
            year: parse_field(year).and_then(|v| Year::new(v).ok()),
        }
    }

    /// True when all three fields are selected
    pub const fn is_complete(&self) -> bool {
        self.day.is_some() && self.month.is_some() && self.year.is_some()
    }

    /// Returns the day component if selected (as u8 for convenience)
    pub fn day(&self) -> Option<u8> {
        self.day.map(Day::get)
    }

    /// Returns the month component if selected (as u8 for convenience)
    pub fn month(&self) -> Option<u8> {
        self.month.map(Month::get)
    }

    /// Returns the year component if selected (as u16 for convenience)
    pub fn year(&self) -> Option<u16> {
        self.year.map(Year::get)
    }
}

fn parse_field<T: std::str::FromStr>(s: &str) -> Option<T> {
    s.trim().parse::<T>().ok()
}

/// One selectable row of a choice list: the value string the host submits
/// and the label it displays.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display(fmt = "{value}: {label}")]
pub struct Entry {
    pub value: String,
    pub label: String,
}

impl Entry {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}
