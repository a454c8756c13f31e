use crate::config::{Config, MonthFormat, Suffixes};
use crate::consts::{MAX_DAY, MAX_MONTH, MONTH_LONG, MONTH_SHORT, SENTINEL_FIELD, SENTINEL_YEAR};
use crate::types::Entry;

/// Picks the ordinal suffix for a day or month number.
///
/// The rule is fixed: decided by the last digit, except that numbers ending
/// in 11, 12 or 13 always take the `th` form ("11th", not "11st"). Which
/// strings are returned comes from the configured [`Suffixes`] set.
pub fn ordinal_suffix(number: u8, suffixes: &Suffixes) -> &str {
    match number % 10 {
        1 if number % 100 != 11 => &suffixes.st,
        2 if number % 100 != 12 => &suffixes.nd,
        3 if number % 100 != 13 => &suffixes.rd,
        _ => &suffixes.th,
    }
}

/// Zero-padded two-digit value string for a day or month entry
pub fn field_value(number: u8) -> String {
    format!("{number:02}")
}

/// Display label for a day entry: suffixed ("1st") when day suffixing is on,
/// zero-padded ("01") when it is off.
pub fn day_label(day: u8, config: &Config) -> String {
    if config.day_suffixes {
        format!("{day}{}", ordinal_suffix(day, &config.suffixes))
    } else {
        field_value(day)
    }
}

/// Display label for a month entry, per the configured month format.
/// Numeric labels are unpadded and suffixed only when month suffixing is on.
pub fn month_label(month: u8, config: &Config) -> String {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    match config.month_format {
        MonthFormat::Long => MONTH_LONG[month as usize - 1].to_owned(),
        MonthFormat::Short => MONTH_SHORT[month as usize - 1].to_owned(),
        MonthFormat::Numeric => {
            if config.month_suffixes {
                format!("{month}{}", ordinal_suffix(month, &config.suffixes))
            } else {
                month.to_string()
            }
        }
    }
}

/// Full day dropdown contents: the placeholder entry followed by days 1-31.
/// The widget always starts with the full list; the per-month correction is
/// applied afterwards by [`crate::daylist::DayList::reconcile`].
pub fn day_entries(config: &Config) -> Vec<Entry> {
    let mut entries = Vec::with_capacity(MAX_DAY as usize + 1);
    entries.push(Entry::new(SENTINEL_FIELD, config.day_placeholder.clone()));
    for day in 1..=MAX_DAY {
        entries.push(Entry::new(field_value(day), day_label(day, config)));
    }
    entries
}

/// Full month dropdown contents: the placeholder entry followed by the
/// twelve months.
pub fn month_entries(config: &Config) -> Vec<Entry> {
    let mut entries = Vec::with_capacity(MAX_MONTH as usize + 1);
    entries.push(Entry::new(SENTINEL_FIELD, config.month_placeholder.clone()));
    for month in 1..=MAX_MONTH {
        entries.push(Entry::new(field_value(month), month_label(month, config)));
    }
    entries
}

/// Full year dropdown contents for the window resolved by
/// [`Config::year_range`]: the placeholder entry followed by the years in
/// descending order (newest first, as a birth-date picker lists them).
pub fn year_entries(config: &Config, current_year: u16) -> Vec<Entry> {
    let (min_year, max_year) = config.year_range(current_year);

    let mut entries = Vec::with_capacity((max_year.saturating_sub(min_year) as usize) + 2);
    entries.push(Entry::new(SENTINEL_YEAR, config.year_placeholder.clone()));
    for year in (min_year..=max_year).rev() {
        entries.push(Entry::new(format!("{year:04}"), year.to_string()));
    }
    entries
}
