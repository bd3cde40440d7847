use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::Serialize;
use tracing::warn;

/// Upper bound on day-by-day scans in [`BusinessCalendar::next_business_day`]
pub const MAX_BUSINESS_DAY_SCAN: u32 = 14;

/// How a holiday's date is determined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayKind {
    /// Same calendar date every year
    Fixed,
    /// Nth (or last) weekday of a month
    Floating,
}

/// A federal holiday resolved to a concrete date
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Holiday {
    pub name: &'static str,
    pub date: NaiveDate,
    pub kind: HolidayKind,
}

/// Occurrence of a weekday within a month
#[derive(Debug, Clone, Copy)]
enum Occurrence {
    Nth(u32),
    Last,
}

const FIXED_HOLIDAYS: &[(&str, u32, u32)] = &[
    ("New Year's Day", 1, 1),
    ("Juneteenth", 6, 19),
    ("Independence Day", 7, 4),
    ("Veterans Day", 11, 11),
    ("Christmas Day", 12, 25),
];

// Presidents Day is not part of the filing calendar.
const FLOATING_HOLIDAYS: &[(&str, u32, Weekday, Occurrence)] = &[
    ("Martin Luther King Jr. Day", 1, Weekday::Mon, Occurrence::Nth(3)),
    ("Memorial Day", 5, Weekday::Mon, Occurrence::Last),
    ("Labor Day", 9, Weekday::Mon, Occurrence::Nth(1)),
    ("Columbus Day", 10, Weekday::Mon, Occurrence::Nth(2)),
    ("Thanksgiving Day", 11, Weekday::Thu, Occurrence::Nth(4)),
];

/// U.S. federal holiday calendar used to extend filing deadlines
pub struct FederalHolidayCalendar;

impl FederalHolidayCalendar {
    /// All modeled holidays for a year, ordered by date
    pub fn holidays_for_year(year: i32) -> Vec<Holiday> {
        let fixed = FIXED_HOLIDAYS.iter().filter_map(|&(name, month, day)| {
            NaiveDate::from_ymd_opt(year, month, day).map(|date| Holiday {
                name,
                date,
                kind: HolidayKind::Fixed,
            })
        });

        let floating = FLOATING_HOLIDAYS
            .iter()
            .filter_map(|&(name, month, weekday, occurrence)| {
                let date = match occurrence {
                    Occurrence::Nth(n) => Self::nth_weekday_of_month(year, month, weekday, n),
                    Occurrence::Last => Self::last_weekday_of_month(year, month, weekday),
                }?;
                Some(Holiday {
                    name,
                    date,
                    kind: HolidayKind::Floating,
                })
            });

        let mut holidays: Vec<Holiday> = fixed.chain(floating).collect();
        holidays.sort_by_key(|h| h.date);
        holidays
    }

    /// Check if a date is a federal holiday. Weekend status is not considered.
    pub fn is_holiday(date: NaiveDate) -> bool {
        if FIXED_HOLIDAYS
            .iter()
            .any(|&(_, month, day)| date.month() == month && date.day() == day)
        {
            return true;
        }

        FLOATING_HOLIDAYS
            .iter()
            .filter(|&&(_, month, weekday, _)| date.month() == month && date.weekday() == weekday)
            .any(|&(_, month, weekday, occurrence)| {
                let target = match occurrence {
                    Occurrence::Nth(n) => {
                        Self::nth_weekday_of_month(date.year(), month, weekday, n)
                    }
                    Occurrence::Last => Self::last_weekday_of_month(date.year(), month, weekday),
                };
                target == Some(date)
            })
    }

    /// Get the nth occurrence of a weekday in a month
    ///
    /// Finds the first occurrence, then steps forward `(n - 1)` weeks.
    pub fn nth_weekday_of_month(
        year: i32,
        month: u32,
        weekday: Weekday,
        n: u32,
    ) -> Option<NaiveDate> {
        if n == 0 {
            return None;
        }

        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let offset = (7 + weekday.num_days_from_monday() as i64
            - first.weekday().num_days_from_monday() as i64)
            % 7;
        let first_match = first.checked_add_days(Days::new(offset as u64))?;
        let target = first_match.checked_add_days(Days::new(u64::from(n - 1) * 7))?;

        (target.month() == month).then_some(target)
    }

    /// Get the last occurrence of a weekday in a month
    pub fn last_weekday_of_month(year: i32, month: u32, weekday: Weekday) -> Option<NaiveDate> {
        // Start from the last day of the month and work backwards
        let last_day = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)?.pred_opt()?
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)?.pred_opt()?
        };

        let mut current = last_day;
        while current.month() == month {
            if current.weekday() == weekday {
                return Some(current);
            }
            current = current.pred_opt()?;
        }

        None
    }
}

/// Business-day arithmetic over the federal holiday calendar
pub struct BusinessCalendar;

impl BusinessCalendar {
    /// Check if a date is a business day (not weekend or holiday)
    pub fn is_business_day(date: NaiveDate) -> bool {
        !Self::is_weekend(date) && !FederalHolidayCalendar::is_holiday(date)
    }

    /// Check if a date is a weekend
    pub fn is_weekend(date: NaiveDate) -> bool {
        matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Return `date` if it is a business day, otherwise the first business day after it
    pub fn next_business_day(date: NaiveDate) -> NaiveDate {
        let mut current = date;

        for _ in 0..MAX_BUSINESS_DAY_SCAN {
            if Self::is_business_day(current) {
                return current;
            }
            match current.succ_opt() {
                Some(next) => current = next,
                None => return current,
            }
        }

        if !Self::is_business_day(current) {
            warn!(
                start = %date,
                stopped_at = %current,
                "business day scan hit its cap"
            );
        }
        current
    }

    /// Add business days to a date, excluding weekends and federal holidays
    ///
    /// Returns `None` if the calendar runs out of representable dates.
    pub fn add_business_days(start_date: NaiveDate, days: u32) -> Option<NaiveDate> {
        let mut current_date = start_date;
        let mut remaining_days = days;

        while remaining_days > 0 {
            current_date = current_date.succ_opt()?;

            if Self::is_business_day(current_date) {
                remaining_days -= 1;
            }
        }

        Some(current_date)
    }
}
