mod config;
mod consts;
mod daylist;
mod format;
mod labels;
mod prelude;
mod types;

pub use config::{Config, ConfigError, MonthFormat, Suffixes};
pub use consts::*;
pub use daylist::{DayList, Outcome, check, grow_entries};
pub use format::{DateFormat, FieldValues, current_year};
pub use labels::{
    day_entries, day_label, field_value, month_entries, month_label, ordinal_suffix, year_entries,
};
pub use types::{Day, Entry, FieldError, Month, Selection, Year, days_in_month, is_leap_year};

/// What the host should do with the submission sink after a change.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SinkUpdate {
    /// Leave the stored value alone (the selection is still incomplete)
    Unchanged,
    /// Blank the stored value to prevent submitting an invalid date
    Clear,
    /// Store this formatted value
    Set(String),
}

/// Result of one change notification: whether the day control should be
/// flagged as erroneous, and what to write to the sink.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Change {
    pub day_invalid: bool,
    pub sink: SinkUpdate,
}

/// Values to preset the three dropdowns with from a configured default
/// date, plus the matching sink and error state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DefaultSeed {
    pub fields: FieldValues,
    pub day_invalid: bool,
    pub sink: SinkUpdate,
}

/// The core of one date-dropdowns widget instance.
///
/// The host owns the three choice-list UI elements and the hidden
/// submission field; this type owns the decisions. It hands the host the
/// initial entry lists, and on every change event turns the current field
/// values into a validation verdict, an incremental day-list correction
/// and a sink update. All methods are synchronous pure computations over
/// the supplied state; instances share nothing, so one form can hold
/// several widgets as long as their sink names differ.
#[derive(Debug, Clone, PartialEq)]
pub struct DateDropdowns {
    config: Config,
}

impl DateDropdowns {
    /// Builds a widget core, refusing configurations the host must not
    /// proceed with.
    ///
    /// `existing_sink_names` are the submission field names already present
    /// in the host form; a clash is a hard error because two widgets
    /// writing one sink would silently overwrite each other.
    ///
    /// # Errors
    /// Returns `ConfigError::DuplicateSubmitName` on a sink-name clash,
    /// `ConfigError::EmptySubmitName` or the range errors on a malformed
    /// configuration.
    pub fn new<I, S>(config: Config, existing_sink_names: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        config.ensure_valid()?;
        if existing_sink_names
            .into_iter()
            .any(|name| name.as_ref() == config.submit_field_name)
        {
            return Err(ConfigError::DuplicateSubmitName(
                config.submit_field_name.clone(),
            ));
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Initial day dropdown contents (placeholder plus all 31 days)
    pub fn day_entries(&self) -> Vec<Entry> {
        labels::day_entries(&self.config)
    }

    /// Month dropdown contents
    pub fn month_entries(&self) -> Vec<Entry> {
        labels::month_entries(&self.config)
    }

    /// Year dropdown contents for an explicit current year
    pub fn year_entries_at(&self, current_year: u16) -> Vec<Entry> {
        labels::year_entries(&self.config, current_year)
    }

    /// Year dropdown contents relative to the system clock
    pub fn year_entries(&self) -> Vec<Entry> {
        self.year_entries_at(format::current_year())
    }

    /// The day-list arena the host keeps between change events
    pub fn initial_day_list(&self) -> DayList {
        DayList::new(&self.config)
    }

    /// Handles one change notification.
    ///
    /// Validates the current field values, corrects `list` in place by the
    /// month-length delta, and decides the sink update: an invalid day
    /// blanks the sink, a complete valid selection stores the formatted
    /// value, anything else leaves the sink untouched.
    pub fn on_change(&self, values: &FieldValues, list: &mut DayList) -> Change {
        let selection = values.to_selection();
        let outcome = daylist::check(&selection, list.day_count());
        list.reconcile(outcome.day_count, &self.config);

        if outcome.invalid {
            return Change {
                day_invalid: true,
                sink: SinkUpdate::Clear,
            };
        }

        let sink = if selection.is_complete() {
            SinkUpdate::Set(self.config.submit_format.format(values))
        } else {
            SinkUpdate::Unchanged
        };

        Change {
            day_invalid: false,
            sink,
        }
    }

    /// Splits the configured default date into dropdown presets.
    ///
    /// Returns `None` when no default is configured. The raw default string
    /// goes to the sink as-is unless the combination turns out invalid, in
    /// which case the sink is blanked and the day control starts flagged.
    /// `list` receives the same correction a change event would apply.
    pub fn seed_default(&self, list: &mut DayList) -> Option<DefaultSeed> {
        let raw = self.config.default_date.as_deref()?;
        let fields = self.config.default_date_format.parse(raw);
        let outcome = daylist::check(&fields.to_selection(), list.day_count());
        list.reconcile(outcome.day_count, &self.config);

        let sink = if outcome.invalid {
            SinkUpdate::Clear
        } else {
            SinkUpdate::Set(raw.to_owned())
        };

        Some(DefaultSeed {
            fields,
            day_invalid: outcome.invalid,
            sink,
        })
    }
}

#[cfg(test)]
pub(crate) mod test_utils {
    use crate::types::{Day, Month, Selection, Year};

    /// Selection from plain numbers; 0 means unselected
    pub fn selection(day: u8, month: u8, year: u16) -> Selection {
        Selection {
            day: Day::new(day).ok(),
            month: Month::new(month).ok(),
            year: Year::new(year).ok(),
        }
    }
}
