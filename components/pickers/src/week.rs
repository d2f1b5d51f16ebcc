//! ISO week picker and its month calendar.

use temporal_picker_core::{
    PickerConfig, PickerKind, PickerOption, PickerStateMachine, PickerValue, SelectionMode,
    StateChannel,
};
use time::{Month, OffsetDateTime};
use tracing::{debug, warn};

use crate::calendar::{self, WeekRow};
use crate::{Field, TemporalPicker};

/// Navigation span used when no year bound is set, in years around the
/// present year.
const OPEN_SPAN: i32 = 5;

/// Picks ISO weeks, stored as `YYYY-Www`.
#[derive(Debug, Clone)]
pub struct WeekPicker {
    field: Field,
    min_year: Option<i32>,
    max_year: Option<i32>,
    show_week_number: bool,
}

field_builders!(WeekPicker);

impl WeekPicker {
    /// Creates a single-week picker stored under `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            field: Field::new(name, SelectionMode::Single),
            min_year: None,
            max_year: None,
            show_week_number: true,
        }
    }

    /// Both ends of the selectable years.
    #[must_use]
    pub const fn year_range(mut self, min: i32, max: i32) -> Self {
        self.min_year = Some(min);
        self.max_year = Some(max);
        self
    }

    /// First selectable year.
    #[must_use]
    pub const fn min_year(mut self, year: i32) -> Self {
        self.min_year = Some(year);
        self
    }

    /// Last selectable year.
    #[must_use]
    pub const fn max_year(mut self, year: i32) -> Self {
        self.max_year = Some(year);
        self
    }

    /// Whether the calendar shows a clickable week-number column.
    #[must_use]
    pub const fn show_week_number(mut self, show: bool) -> Self {
        self.show_week_number = show;
        self
    }

    /// See [`Self::show_week_number`].
    #[must_use]
    pub const fn shows_week_number(&self) -> bool {
        self.show_week_number
    }

    /// First selectable year; five years before the present by default.
    #[must_use]
    pub fn resolved_min_year(&self) -> i32 {
        self.min_year
            .unwrap_or_else(|| self.field.present_year().saturating_sub(OPEN_SPAN))
    }

    /// Last selectable year; five years after the present by default.
    #[must_use]
    pub fn resolved_max_year(&self) -> i32 {
        self.max_year
            .unwrap_or_else(|| self.field.present_year().saturating_add(OPEN_SPAN))
    }

    /// Every week of `year`, labelled with the localized word for week.
    #[must_use]
    pub fn options_for_year(&self, year: i32) -> Vec<PickerOption> {
        let word = self.field.labels().week;
        (1..=calendar::weeks_in_year(year))
            .map(|week| PickerOption::new(calendar::format_week(year, week), format!("{word} {week}")))
            .collect()
    }

    /// Mounts the picker together with its lazily built calendar.
    pub fn mount_session<C: StateChannel>(&self, channel: C) -> WeekPickerSession<C> {
        WeekPickerSession {
            machine: self.mount(channel),
            calendar: None,
            first_day_of_week: self.field.first_day_of_week(),
            show_week_numbers: self.show_week_number,
            min_year: self.resolved_min_year(),
            max_year: self.resolved_max_year(),
        }
    }
}

impl TemporalPicker for WeekPicker {
    fn kind(&self) -> PickerKind {
        PickerKind::Week
    }

    fn config(&self) -> PickerConfig {
        self.field
            .builder(PickerKind::Week, &self.field.settings.formats.week)
            .year_range(self.resolved_min_year(), self.resolved_max_year())
            .build()
    }

    /// Weeks of the present year.
    fn options(&self) -> Vec<PickerOption> {
        self.options_for_year(self.field.present_year())
    }

    fn placeholder(&self) -> &'static str {
        self.field.labels().placeholders.week
    }
}

/// Month grid of the week picker. Navigation never leaves the year bounds:
/// stepping before the first year lands on its January, stepping past the
/// last year lands on its December.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekCalendar {
    year: i32,
    month: Month,
    first_day_of_week: u8,
    show_week_numbers: bool,
    min_year: i32,
    max_year: i32,
    rows: Vec<WeekRow>,
}

impl WeekCalendar {
    /// Builds the grid for `month` of `year`, snapped into the bounds.
    #[must_use]
    pub fn new(
        year: i32,
        month: Month,
        first_day_of_week: u8,
        show_week_numbers: bool,
        (min_year, max_year): (i32, i32),
    ) -> Self {
        let mut calendar = Self {
            year,
            month,
            first_day_of_week,
            show_week_numbers,
            min_year,
            max_year,
            rows: Vec::new(),
        };
        calendar.enforce_boundaries();
        calendar.refresh();
        calendar
    }

    /// Displayed year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Displayed month.
    #[must_use]
    pub const fn month(&self) -> Month {
        self.month
    }

    /// Rows of the displayed month.
    #[must_use]
    pub fn rows(&self) -> &[WeekRow] {
        &self.rows
    }

    /// Whether the week-number column is shown.
    #[must_use]
    pub const fn shows_week_numbers(&self) -> bool {
        self.show_week_numbers
    }

    /// One month back.
    pub fn previous_month(&mut self) -> bool {
        let (year, month) = match self.month {
            Month::January => (self.year.saturating_sub(1), Month::December),
            month => (self.year, month.previous()),
        };
        self.go_to(year, month)
    }

    /// One month forward.
    pub fn next_month(&mut self) -> bool {
        let (year, month) = match self.month {
            Month::December => (self.year.saturating_add(1), Month::January),
            month => (self.year, month.next()),
        };
        self.go_to(year, month)
    }

    /// Shows `month` of `year`, snapped into the bounds. Returns whether the
    /// displayed month changed.
    pub fn go_to(&mut self, year: i32, month: Month) -> bool {
        let before = (self.year, self.month);
        self.year = year;
        self.month = month;
        self.enforce_boundaries();
        if (self.year, self.month) == before {
            return false;
        }
        self.refresh();
        true
    }

    /// Rebuilds the rows of the displayed month.
    pub fn refresh(&mut self) {
        self.rows = calendar::month_rows(self.year, self.month, self.first_day_of_week)
            .unwrap_or_else(|| {
                warn!(year = self.year, month = %self.month, "month outside the supported date range");
                Vec::new()
            });
    }

    fn enforce_boundaries(&mut self) {
        if self.year < self.min_year {
            debug!(year = self.year, min_year = self.min_year, "navigated before the first year");
            self.year = self.min_year;
            self.month = Month::January;
        } else if self.year > self.max_year {
            debug!(year = self.year, max_year = self.max_year, "navigated after the last year");
            self.year = self.max_year;
            self.month = Month::December;
        }
    }
}

/// A mounted week picker and its calendar.
///
/// The calendar is built the first time the dropdown opens and refreshed on
/// every later open.
#[derive(Debug)]
pub struct WeekPickerSession<C> {
    machine: PickerStateMachine<C>,
    calendar: Option<WeekCalendar>,
    first_day_of_week: u8,
    show_week_numbers: bool,
    min_year: i32,
    max_year: i32,
}

impl<C: StateChannel> WeekPickerSession<C> {
    /// Opens the dropdown, building or refreshing the calendar.
    pub fn open(&mut self) -> bool {
        if !self.machine.open() {
            return false;
        }
        match &mut self.calendar {
            Some(calendar) => calendar.refresh(),
            None => self.calendar = Some(self.build_calendar()),
        }
        true
    }

    /// Closes the dropdown. The calendar is kept.
    pub fn close(&mut self) -> bool {
        self.machine.close()
    }

    /// The calendar, once the dropdown has been opened.
    #[must_use]
    pub const fn calendar(&self) -> Option<&WeekCalendar> {
        self.calendar.as_ref()
    }

    /// Shows the previous month.
    pub fn previous_month(&mut self) -> bool {
        self.calendar
            .as_mut()
            .is_some_and(WeekCalendar::previous_month)
    }

    /// Shows the next month.
    pub fn next_month(&mut self) -> bool {
        self.calendar
            .as_mut()
            .is_some_and(WeekCalendar::next_month)
    }

    /// Selects week `week` of ISO year `year` from the week-number column.
    /// Weeks of years outside the bounds are blocked.
    pub fn click_week_number(&mut self, year: i32, week: u8) -> bool {
        if year < self.min_year || year > self.max_year {
            warn!(year, week, min_year = self.min_year, max_year = self.max_year, "blocked week outside the year bounds");
            return false;
        }
        self.machine.toggle(calendar::format_week(year, week))
    }

    /// The underlying state machine.
    #[must_use]
    pub const fn machine(&self) -> &PickerStateMachine<C> {
        &self.machine
    }

    /// The underlying state machine, mutably.
    pub const fn machine_mut(&mut self) -> &mut PickerStateMachine<C> {
        &mut self.machine
    }

    fn build_calendar(&self) -> WeekCalendar {
        let (year, month) = self.initial_month();
        WeekCalendar::new(
            year,
            month,
            self.first_day_of_week,
            self.show_week_numbers,
            (self.min_year, self.max_year),
        )
    }

    /// Month of the selected week, else the current month of the cursor
    /// year.
    fn initial_month(&self) -> (i32, Month) {
        if let PickerValue::Single(Some(value)) = self.machine.value()
            && let Some((year, week)) = value.as_text().and_then(calendar::parse_week)
            && let Some(monday) = calendar::week_start(year, week)
        {
            return (monday.year(), monday.month());
        }
        let today = OffsetDateTime::now_utc();
        let year = self.machine.state().view_year();
        let month = if year == today.year() {
            today.month()
        } else {
            Month::January
        };
        (year, month)
    }
}
