//! Calendar arithmetic: month lengths, ISO weeks and month grids.

use time::{Date, Month, Weekday, util};

/// Number of days in `month` of `year`.
#[must_use]
pub const fn days_in_month(year: i32, month: Month) -> u8 {
    match month {
        Month::February => {
            if util::is_leap_year(year) {
                29
            } else {
                28
            }
        }
        Month::April | Month::June | Month::September | Month::November => 30,
        _ => 31,
    }
}

/// Number of ISO weeks in `year` (52 or 53).
#[must_use]
pub const fn weeks_in_year(year: i32) -> u8 {
    util::weeks_in_year(year)
}

/// Storage form of a month, `YYYY-MM`.
#[must_use]
pub fn format_month(year: i32, month: u8) -> String {
    format!("{year:04}-{month:02}")
}

/// Storage form of an ISO week, `YYYY-Www`.
#[must_use]
pub fn format_week(year: i32, week: u8) -> String {
    format!("{year:04}-W{week:02}")
}

/// Reads a `YYYY-Www` value naming a week that exists in its year.
#[must_use]
pub fn parse_week(text: &str) -> Option<(i32, u8)> {
    let (year, week) = text.split_once("-W")?;
    if year.len() != 4 || week.len() != 2 {
        return None;
    }
    let year: i32 = year.parse().ok()?;
    let week: u8 = week.parse().ok()?;
    (1..=weeks_in_year(year)).contains(&week).then_some((year, week))
}

/// ISO year and week containing `date`.
#[must_use]
pub const fn iso_week(date: Date) -> (i32, u8) {
    let (year, week, _) = date.to_iso_week_date();
    (year, week)
}

/// Monday of an ISO week.
#[must_use]
pub fn week_start(year: i32, week: u8) -> Option<Date> {
    Date::from_iso_week_date(year, week, Weekday::Monday).ok()
}

/// One row of a month grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekRow {
    /// ISO year the row's week belongs to.
    pub iso_year: i32,
    /// ISO week number.
    pub week: u8,
    /// The seven days of the row, starting at the configured first day.
    pub days: [Date; 7],
}

impl WeekRow {
    /// Storage form of the row's week.
    #[must_use]
    pub fn value(&self) -> String {
        format_week(self.iso_year, self.week)
    }
}

/// Rows covering every day of `month` in `year`.
///
/// Rows start on Sunday when `first_day_of_week` is 0 and on Monday
/// otherwise. Each row is numbered by the ISO week of its Monday. Returns
/// `None` at the edges of the representable date range.
#[must_use]
pub fn month_rows(year: i32, month: Month, first_day_of_week: u8) -> Option<Vec<WeekRow>> {
    let first = Date::from_calendar_date(year, month, 1).ok()?;
    let last = Date::from_calendar_date(year, month, days_in_month(year, month)).ok()?;
    let lead = if first_day_of_week == 0 {
        first.weekday().number_days_from_sunday()
    } else {
        first.weekday().number_days_from_monday()
    };

    let mut start = first;
    for _ in 0..lead {
        start = start.previous_day()?;
    }

    let mut rows = Vec::with_capacity(6);
    while start <= last {
        let mut days = [start; 7];
        for index in 1..7 {
            days[index] = days[index - 1].next_day()?;
        }
        let monday = if first_day_of_week == 0 { days[1] } else { days[0] };
        let (iso_year, week) = iso_week(monday);
        rows.push(WeekRow { iso_year, week, days });
        start = days[6].next_day()?;
    }
    Some(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn february_follows_leap_years() {
        assert_eq!(days_in_month(2024, Month::February), 29);
        assert_eq!(days_in_month(2023, Month::February), 28);
        assert_eq!(days_in_month(1900, Month::February), 28);
        assert_eq!(days_in_month(2000, Month::February), 29);
        assert_eq!(days_in_month(2023, Month::September), 30);
    }

    #[test]
    fn iso_week_counts() {
        assert_eq!(weeks_in_year(2020), 53);
        assert_eq!(weeks_in_year(2024), 52);
        assert_eq!(weeks_in_year(2026), 53);
    }

    #[test]
    fn week_parsing_rejects_missing_weeks() {
        assert_eq!(parse_week("2020-W53"), Some((2020, 53)));
        assert_eq!(parse_week("2024-W53"), None);
        assert_eq!(parse_week("2024-W00"), None);
        assert_eq!(parse_week("2024-W5"), None);
        assert_eq!(parse_week("2024-05"), None);
    }

    #[test]
    fn year_edges_belong_to_neighbouring_iso_years() {
        let date = Date::from_calendar_date(2024, Month::December, 30).unwrap();
        assert_eq!(iso_week(date), (2025, 1));
        let date = Date::from_calendar_date(2021, Month::January, 1).unwrap();
        assert_eq!(iso_week(date), (2020, 53));
    }

    #[test]
    fn monday_rows_cover_the_month() {
        // 1 September 2024 is a Sunday.
        let rows = month_rows(2024, Month::September, 1).unwrap();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0].days[6], Date::from_calendar_date(2024, Month::September, 1).unwrap());
        assert_eq!(rows[0].value(), "2024-W35");
        assert_eq!(rows[5].days[0], Date::from_calendar_date(2024, Month::September, 30).unwrap());
    }

    #[test]
    fn sunday_rows_start_on_sunday() {
        let rows = month_rows(2024, Month::September, 0).unwrap();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].days[0].weekday(), Weekday::Sunday);
        assert_eq!(rows[0].days[0].day(), 1);
        assert_eq!(rows[0].value(), "2024-W36");
    }

    #[test]
    fn week_start_is_monday() {
        let monday = week_start(2025, 1).unwrap();
        assert_eq!(monday, Date::from_calendar_date(2024, Month::December, 30).unwrap());
    }
}
