//! Month grid layout for the calendar popup.

use chrono::{Datelike, Days, Local, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// First day of the displayed week.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Monday,
    Sunday,
}

impl WeekStart {
    pub fn first_weekday(self) -> Weekday {
        match self {
            Self::Monday => Weekday::Mon,
            Self::Sunday => Weekday::Sun,
        }
    }

    /// Column of `weekday` in a week starting on `self`.
    pub fn column(self, weekday: Weekday) -> u32 {
        match self {
            Self::Monday => weekday.num_days_from_monday(),
            Self::Sunday => weekday.num_days_from_sunday(),
        }
    }

    /// Two-letter header labels in column order.
    pub fn day_labels(self) -> [&'static str; 7] {
        match self {
            Self::Monday => ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"],
            Self::Sunday => ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"],
        }
    }
}

/// A cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// False for leading/trailing days of the neighbouring months.
    pub in_month: bool,
}

/// One row of the month grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Week {
    /// ISO week number.
    pub number: u32,
    pub days: Vec<CalendarDay>,
}

/// Full weeks covering one month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub month_start: NaiveDate,
    pub week_start: WeekStart,
    pub weeks: Vec<Week>,
}

impl MonthGrid {
    /// Lay out the month containing `month`.
    pub fn new(month: NaiveDate, week_start: WeekStart) -> Self {
        let month_start = first_of_month(month);
        let lead = week_start.column(month_start.weekday());
        let mut day = month_start
            .checked_sub_days(Days::new(u64::from(lead)))
            .unwrap_or(month_start);

        let mut weeks = Vec::new();
        'weeks: loop {
            let mut days = Vec::with_capacity(7);
            for _ in 0..7 {
                days.push(CalendarDay {
                    date: day,
                    in_month: same_month(day, month_start),
                });
                match day.succ_opt() {
                    Some(next) => day = next,
                    None => {
                        weeks.push(Week::from_days(days));
                        break 'weeks;
                    }
                }
            }
            weeks.push(Week::from_days(days));

            if !same_month(day, month_start) {
                break;
            }
        }

        Self {
            month_start,
            week_start,
            weeks,
        }
    }

    /// Header text, e.g. "January 2024".
    pub fn title(&self) -> String {
        self.month_start.format("%B %Y").to_string()
    }

    pub fn days(&self) -> impl Iterator<Item = &CalendarDay> {
        self.weeks.iter().flat_map(|week| week.days.iter())
    }
}

impl Week {
    fn from_days(days: Vec<CalendarDay>) -> Self {
        // ISO weeks are identified by their Thursday
        let number = days
            .iter()
            .find(|day| day.date.weekday() == Weekday::Thu)
            .or(days.first())
            .map(|day| day.date.iso_week().week())
            .unwrap_or(0);
        Self { number, days }
    }
}

fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// First day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// First day of the month `delta` months away, saturating at chrono's range.
pub fn shift_months(month: NaiveDate, delta: i32) -> NaiveDate {
    let start = first_of_month(month);
    let shifted = if delta >= 0 {
        start.checked_add_months(Months::new(delta.unsigned_abs()))
    } else {
        start.checked_sub_months(Months::new(delta.unsigned_abs()))
    };
    shifted.unwrap_or(start)
}

/// Today's date in local time.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_grid_monday_start() {
        // 1 January 2024 is a Monday
        let grid = MonthGrid::new(ymd(2024, 1, 17), WeekStart::Monday);
        assert_eq!(grid.month_start, ymd(2024, 1, 1));
        assert_eq!(grid.weeks.len(), 5);
        assert_eq!(grid.weeks[0].days[0].date, ymd(2024, 1, 1));
        assert_eq!(grid.weeks[0].number, 1);

        let last = grid.weeks[4].days[6];
        assert_eq!(last.date, ymd(2024, 2, 4));
        assert!(!last.in_month);
    }

    #[test]
    fn test_month_grid_sunday_start() {
        let grid = MonthGrid::new(ymd(2024, 1, 1), WeekStart::Sunday);
        let first = grid.weeks[0].days[0];
        assert_eq!(first.date, ymd(2023, 12, 31));
        assert!(!first.in_month);
        assert_eq!(grid.weeks[0].days[1].date, ymd(2024, 1, 1));
    }

    #[test]
    fn test_month_grid_covers_every_day() {
        let grid = MonthGrid::new(ymd(2024, 2, 1), WeekStart::Monday);
        let in_month = grid.days().filter(|day| day.in_month).count();
        assert_eq!(in_month, 29);
        assert!(grid.weeks.iter().all(|week| week.days.len() == 7));
    }

    #[test]
    fn test_six_week_month() {
        // 1 September 2024 is a Sunday, 30 days
        let grid = MonthGrid::new(ymd(2024, 9, 1), WeekStart::Monday);
        assert_eq!(grid.weeks.len(), 6);
    }

    #[test]
    fn test_title() {
        let grid = MonthGrid::new(ymd(2024, 3, 9), WeekStart::Monday);
        assert_eq!(grid.title(), "March 2024");
    }

    #[test]
    fn test_shift_months() {
        assert_eq!(shift_months(ymd(2024, 1, 31), 1), ymd(2024, 2, 1));
        assert_eq!(shift_months(ymd(2024, 1, 15), -1), ymd(2023, 12, 1));
        assert_eq!(shift_months(ymd(2024, 11, 2), 14), ymd(2026, 1, 1));
        assert_eq!(shift_months(ymd(2024, 5, 5), 0), ymd(2024, 5, 1));
    }

    #[test]
    fn test_week_start_labels() {
        assert_eq!(WeekStart::Monday.day_labels()[0], "Mo");
        assert_eq!(WeekStart::Sunday.day_labels()[0], "Su");
        assert_eq!(WeekStart::Sunday.column(Weekday::Mon), 1);
        assert_eq!(WeekStart::Monday.first_weekday(), Weekday::Mon);
    }
}
