/// Keys of the weekdays, Monday first, as stored by name-valued pickers.
pub const WEEKDAY_KEYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Every label of one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    /// Field name of the year picker.
    pub year: &'static str,
    /// Field name of the month picker.
    pub month: &'static str,
    /// Field name of the week picker.
    pub week: &'static str,
    /// Field name of the weekday picker.
    pub weekday: &'static str,
    /// Field name of the day-of-month picker.
    pub day_of_month: &'static str,
    /// Weekday names, Monday first.
    pub weekdays: [&'static str; 7],
    /// Abbreviated weekday names, Monday first.
    pub weekdays_short: [&'static str; 7],
    /// Month names, January first.
    pub months: [&'static str; 12],
    /// Abbreviated month names, January first.
    pub months_short: [&'static str; 12],
    /// Words around a range.
    pub range: RangeLabels,
    /// Button captions.
    pub actions: ActionLabels,
    /// Trigger text while nothing is selected.
    pub placeholders: Placeholders,
}

/// Words around a range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeLabels {
    /// Caption of the first end.
    pub start: &'static str,
    /// Caption of the second end.
    pub end: &'static str,
    /// Word joining the two ends.
    pub to: &'static str,
}

/// Button captions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionLabels {
    #[allow(missing_docs)]
    pub clear: &'static str,
    #[allow(missing_docs)]
    pub confirm: &'static str,
    #[allow(missing_docs)]
    pub cancel: &'static str,
    #[allow(missing_docs)]
    pub select_all: &'static str,
    #[allow(missing_docs)]
    pub deselect_all: &'static str,
}

/// Placeholders per picker kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholders {
    #[allow(missing_docs)]
    pub year: &'static str,
    #[allow(missing_docs)]
    pub month: &'static str,
    #[allow(missing_docs)]
    pub week: &'static str,
    #[allow(missing_docs)]
    pub weekday: &'static str,
    #[allow(missing_docs)]
    pub day_of_month: &'static str,
}

impl Labels {
    /// Name of ISO weekday `number` (1 = Monday ... 7 = Sunday).
    #[must_use]
    pub fn weekday(&self, number: u8) -> Option<&'static str> {
        self.weekdays.get(index(number)?).copied()
    }

    /// Abbreviated name of ISO weekday `number`.
    #[must_use]
    pub fn weekday_short(&self, number: u8) -> Option<&'static str> {
        self.weekdays_short.get(index(number)?).copied()
    }

    /// Name of month `number` (1 = January).
    #[must_use]
    pub fn month(&self, number: u8) -> Option<&'static str> {
        self.months.get(index(number)?).copied()
    }

    /// Abbreviated name of month `number`.
    #[must_use]
    pub fn month_short(&self, number: u8) -> Option<&'static str> {
        self.months_short.get(index(number)?).copied()
    }

    /// Weekday name for a storage key such as `"friday"`.
    #[must_use]
    pub fn weekday_by_key(&self, key: &str, short: bool) -> Option<&'static str> {
        let position = WEEKDAY_KEYS.iter().position(|candidate| *candidate == key)?;
        let names = if short { &self.weekdays_short } else { &self.weekdays };
        names.get(position).copied()
    }
}

fn index(number: u8) -> Option<usize> {
    usize::from(number).checked_sub(1)
}

#[cfg(test)]
mod tests {
    use crate::Locale;

    #[test]
    fn numbered_lookups_are_one_based() {
        let labels = Locale::En.labels();
        assert_eq!(labels.weekday(1), Some("Monday"));
        assert_eq!(labels.weekday_short(7), Some("Sun"));
        assert_eq!(labels.month(12), Some("December"));
        assert_eq!(labels.month_short(1), Some("Jan"));
        assert_eq!(labels.weekday(0), None);
        assert_eq!(labels.month(13), None);
    }

    #[test]
    fn weekday_keys_resolve_in_each_locale() {
        assert_eq!(Locale::En.labels().weekday_by_key("friday", false), Some("Friday"));
        assert_eq!(Locale::ZhCn.labels().weekday_by_key("sunday", true), Some("日"));
        assert_eq!(Locale::En.labels().weekday_by_key("someday", false), None);
    }
}
