use crate::config::Config;
use crate::consts::{DAYS_IN_MONTH, MAX_DAY, SENTINEL_FIELD};
use crate::labels::{day_label, field_value};
use crate::types::{Entry, Selection, days_in_month};
use serde::{Deserialize, Serialize};

/// Result of validating a selection against the current day list.
///
/// Produced by [`check`]; the host (or [`DayList::reconcile`]) applies the
/// structural correction and the flags drive the error styling and the
/// blanking of the submission sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Outcome {
    /// The chosen day does not exist in the chosen month and year
    pub invalid: bool,
    /// Number of selectable days the list should offer after correction
    pub day_count: u8,
    /// The correction removed the previously chosen day
    pub dropped_selected_day: bool,
}

impl Outcome {
    const fn unchanged(day_count: u8) -> Self {
        Self {
            invalid: false,
            day_count,
            dropped_selected_day: false,
        }
    }
}

/// Validates a selection and computes the day count the list must shrink or
/// grow to.
///
/// A partial selection is not an error state: with no month chosen there is
/// nothing to correct against and the outcome reports the list unchanged.
/// With no year chosen, February takes its non-leap count.
///
/// Never panics; invalid combinations are reported through the flags.
pub fn check(selection: &Selection, current_day_count: u8) -> Outcome {
    let Some(month) = selection.month else {
        return Outcome::unchanged(current_day_count);
    };

    let day_count = match selection.year {
        Some(year) => days_in_month(year.get(), month.get()),
        None => DAYS_IN_MONTH[month.get() as usize],
    };

    let day_over = selection.day().is_some_and(|day| day > day_count);

    Outcome {
        invalid: day_over,
        day_count,
        dropped_selected_day: day_over && current_day_count > day_count,
    }
}

/// Entries for days `from + 1 ..= to`, labelled per the configuration.
///
/// This is the exact sequence [`DayList::reconcile`] appends when growing;
/// hosts that keep their own list representation apply it themselves.
pub fn grow_entries(from: u8, to: u8, config: &Config) -> Vec<Entry> {
    (from.saturating_add(1)..=to)
        .map(|day| Entry::new(field_value(day), day_label(day, config)))
        .collect()
}

/// The day dropdown's entry list: the placeholder row at index 0 and the
/// entry for day `d` at index `d`.
///
/// This is the one piece of derived state that survives across change
/// events. It is corrected incrementally, only ever by the delta between
/// the old and new month length, so entries for days that remain valid are
/// preserved along with whatever selection points at them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayList {
    entries: Vec<Entry>,
}

impl DayList {
    /// Builds the initial list: placeholder plus the full 31 days.
    pub fn new(config: &Config) -> Self {
        Self::with_day_count(MAX_DAY, config)
    }

    /// Builds a list offering days `1..=day_count`.
    pub fn with_day_count(day_count: u8, config: &Config) -> Self {
        let mut entries = Vec::with_capacity(day_count as usize + 1);
        entries.push(Entry::new(SENTINEL_FIELD, config.day_placeholder.clone()));
        entries.extend(grow_entries(0, day_count, config));
        Self { entries }
    }

    /// Number of selectable days currently offered (the placeholder row is
    /// not counted).
    pub fn day_count(&self) -> u8 {
        (self.entries.len() - 1) as u8
    }

    /// Total number of rows, placeholder included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All rows in display order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Row at `index`; day `d` lives at index `d`, the placeholder at 0
    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    /// Shrinks or grows the list to offer exactly `day_count` days.
    ///
    /// Shrinking removes entries from the tail; growing appends the missing
    /// entries with freshly computed labels. Entries below the target are
    /// never touched.
    pub fn reconcile(&mut self, day_count: u8, config: &Config) {
        while self.day_count() > day_count {
            self.entries.pop();
        }

        let current = self.day_count();
        if current < day_count {
            self.entries.extend(grow_entries(current, day_count, config));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::selection;

    #[test]
    fn test_check_no_month_is_not_an_error() {
        // Day 31 with no month chosen: nothing to correct against
        let outcome = check(&selection(31, 0, 2024), 31);
        assert_eq!(outcome, Outcome::unchanged(31));

        let outcome = check(&selection(0, 0, 0), 31);
        assert_eq!(outcome, Outcome::unchanged(31));
    }

    #[test]
    fn test_check_shrink_drops_selected_day() {
        // January -> April with the 31st selected
        let outcome = check(&selection(31, 4, 2024), 31);
        assert!(outcome.invalid);
        assert!(outcome.dropped_selected_day);
        assert_eq!(outcome.day_count, 30);
    }

    #[test]
    fn test_check_shrink_keeps_earlier_day() {
        // January -> April with the 12th selected: structural change only
        let outcome = check(&selection(12, 4, 2024), 31);
        assert!(!outcome.invalid);
        assert!(!outcome.dropped_selected_day);
        assert_eq!(outcome.day_count, 30);
    }

    #[test]
    fn test_check_grow_is_never_invalid() {
        // February -> March with nothing selected in the day dropdown
        let outcome = check(&selection(0, 3, 2024), 28);
        assert!(!outcome.invalid);
        assert!(!outcome.dropped_selected_day);
        assert_eq!(outcome.day_count, 31);
    }

    #[test]
    fn test_check_equal_length_no_change() {
        let outcome = check(&selection(15, 3, 2024), 31);
        assert_eq!(
            outcome,
            Outcome {
                invalid: false,
                day_count: 31,
                dropped_selected_day: false,
            }
        );
    }

    #[test]
    fn test_check_leap_february() {
        let outcome = check(&selection(29, 2, 2024), 31);
        assert!(!outcome.invalid);
        assert_eq!(outcome.day_count, 29);

        let outcome = check(&selection(29, 2, 2023), 31);
        assert!(outcome.invalid);
        assert!(outcome.dropped_selected_day);
        assert_eq!(outcome.day_count, 28);

        // Century rule
        assert_eq!(check(&selection(0, 2, 1900), 31).day_count, 28);
        assert_eq!(check(&selection(0, 2, 2000), 31).day_count, 29);
    }

    #[test]
    fn test_check_unselected_year_uses_non_leap_february() {
        let outcome = check(&selection(29, 2, 0), 31);
        assert!(outcome.invalid);
        assert_eq!(outcome.day_count, 28);
    }

    #[test]
    fn test_grow_entries_delta_only() {
        let config = Config::default();
        let entries = grow_entries(28, 31, &config);

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0], Entry::new("29", "29th"));
        assert_eq!(entries[1], Entry::new("30", "30th"));
        assert_eq!(entries[2], Entry::new("31", "31st"));

        assert!(grow_entries(31, 31, &config).is_empty());
    }

    #[test]
    fn test_day_list_initial_shape() {
        let config = Config::default();
        let list = DayList::new(&config);

        assert_eq!(list.day_count(), 31);
        assert_eq!(list.len(), 32);
        assert_eq!(list.get(0), Some(&Entry::new("00", "Day")));
        assert_eq!(list.get(31), Some(&Entry::new("31", "31st")));
        assert_eq!(list.get(32), None);
    }

    #[test]
    fn test_day_list_shrink_preserves_head() {
        let config = Config::default();
        let mut list = DayList::new(&config);
        let before = list.entries()[..29].to_vec();

        list.reconcile(28, &config);

        assert_eq!(list.day_count(), 28);
        assert_eq!(list.len(), 29);
        assert_eq!(list.entries(), &before[..]);
    }

    #[test]
    fn test_day_list_grow_appends_tail() {
        let config = Config::default();
        let mut list = DayList::with_day_count(28, &config);

        list.reconcile(31, &config);

        assert_eq!(list.day_count(), 31);
        assert_eq!(list.get(29), Some(&Entry::new("29", "29th")));
        assert_eq!(list.get(31), Some(&Entry::new("31", "31st")));
    }

    #[test]
    fn test_day_list_reconcile_noop() {
        let config = Config::default();
        let mut list = DayList::with_day_count(30, &config);
        let before = list.clone();

        list.reconcile(30, &config);

        assert_eq!(list, before);
    }

    #[test]
    fn test_day_list_round_trip_through_check() {
        // Drive the list through a month sequence and verify it tracks the
        // calendar: Jan(31) -> Feb(28) -> Feb leap(29) -> Apr(30)
        let config = Config::default();
        let mut list = DayList::new(&config);

        let steps = [
            (selection(0, 2, 2023), 28),
            (selection(0, 2, 2024), 29),
            (selection(0, 4, 2024), 30),
            (selection(0, 1, 2024), 31),
        ];

        for (sel, expected) in steps {
            let outcome = check(&sel, list.day_count());
            list.reconcile(outcome.day_count, &config);
            assert_eq!(list.day_count(), expected);
            assert_eq!(list.len(), expected as usize + 1);
        }
    }

    #[test]
    fn test_day_list_unsuffixed_labels() {
        let config = Config {
            day_suffixes: false,
            ..Config::default()
        };
        let mut list = DayList::with_day_count(28, &config);
        list.reconcile(31, &config);

        assert_eq!(list.get(29), Some(&Entry::new("29", "29")));
        assert_eq!(list.get(31), Some(&Entry::new("31", "31")));
    }
}
