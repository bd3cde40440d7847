//! Deadline results and the generic day-offset path

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::Serialize;

use crate::calendar::{BusinessCalendar, FederalHolidayCalendar};
use crate::error::DeadlineError;
use crate::rules::{SpecialRules, StateRule};

/// Preliminary notice window when a rule carries no day count
pub const DEFAULT_PRELIMINARY_NOTICE_DAYS: u32 = 30;

/// Lien filing window when a rule carries no day count
pub const DEFAULT_LIEN_FILING_DAYS: u32 = 90;

/// The two statutory deadlines for a claim
///
/// `preliminary_notice` is `None` when no notice is required for the claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeadlineResult {
    pub preliminary_notice: Option<NaiveDate>,
    pub lien_filing: NaiveDate,
}

impl DeadlineResult {
    /// Days from `reference_date` to each deadline (negative once passed)
    pub fn days_remaining(&self, reference_date: NaiveDate) -> DaysRemaining {
        DaysRemaining {
            preliminary_notice: self
                .preliminary_notice
                .map(|d| (d - reference_date).num_days()),
            lien_filing: (self.lien_filing - reference_date).num_days(),
        }
    }
}

/// Output of [`DeadlineResult::days_remaining`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DaysRemaining {
    pub preliminary_notice: Option<i64>,
    pub lien_filing: i64,
}

/// Reminder bucket for a number of days remaining
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Overdue,
    Critical,
    Warning,
    Upcoming,
}

impl Urgency {
    pub fn from_days(days: i64) -> Self {
        match days {
            d if d < 0 => Urgency::Overdue,
            0..=7 => Urgency::Critical,
            8..=30 => Urgency::Warning,
            _ => Urgency::Upcoming,
        }
    }
}

pub(crate) fn add_days(date: NaiveDate, days: u32) -> Result<NaiveDate, DeadlineError> {
    date.checked_add_days(Days::new(u64::from(days)))
        .ok_or(DeadlineError::DateOutOfRange(date))
}

/// The 15th (or any `day`) of the month `months` after the month of `date`
pub(crate) fn day_of_month_after(
    date: NaiveDate,
    months: u32,
    day: u32,
) -> Result<NaiveDate, DeadlineError> {
    date.with_day(1)
        .and_then(|first| first.checked_add_months(Months::new(months)))
        .and_then(|month| month.with_day(day))
        .ok_or(DeadlineError::DateOutOfRange(date))
}

/// Apply a jurisdiction's extension policy to a raw deadline
///
/// Weekend and holiday checks form a priority chain: the holiday branch is
/// only consulted when the weekend branch does not fire.
pub fn apply_extension(date: NaiveDate, rules: &SpecialRules) -> NaiveDate {
    if rules.weekend_extension && BusinessCalendar::is_weekend(date) {
        BusinessCalendar::next_business_day(date)
    } else if rules.holiday_extension && FederalHolidayCalendar::is_holiday(date) {
        BusinessCalendar::next_business_day(date)
    } else {
        date
    }
}

/// Day-offset calculation for jurisdictions without a custom formula
pub fn generic_deadlines(
    rule: &StateRule,
    invoice_date: NaiveDate,
) -> Result<DeadlineResult, DeadlineError> {
    let prelim_days = rule
        .preliminary_notice
        .deadline_days
        .unwrap_or(DEFAULT_PRELIMINARY_NOTICE_DAYS);
    let lien_days = rule
        .lien_filing
        .deadline_days
        .unwrap_or(DEFAULT_LIEN_FILING_DAYS);

    let prelim = add_days(invoice_date, prelim_days)?;
    let lien = add_days(invoice_date, lien_days)?;

    Ok(DeadlineResult {
        preliminary_notice: Some(apply_extension(prelim, &rule.special_rules)),
        lien_filing: apply_extension(lien, &rule.special_rules),
    })
}

/// Deadlines for a jurisdiction missing from the rule table. No extension applies.
pub fn fallback_deadlines(invoice_date: NaiveDate) -> Result<DeadlineResult, DeadlineError> {
    Ok(DeadlineResult {
        preliminary_notice: Some(add_days(invoice_date, DEFAULT_PRELIMINARY_NOTICE_DAYS)?),
        lien_filing: add_days(invoice_date, DEFAULT_LIEN_FILING_DAYS)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jurisdiction::State;
    use crate::rules::{get_rule, LienFilingRule, PreliminaryNoticeRule};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn flags(weekend: bool, holiday: bool) -> SpecialRules {
        SpecialRules {
            weekend_extension: weekend,
            holiday_extension: holiday,
            residential_vs_commercial: false,
            notice_of_completion_trigger: false,
            notes: "",
        }
    }

    #[test]
    fn test_extension_weekend_flag() {
        let saturday = date(2025, 4, 5);
        assert_eq!(apply_extension(saturday, &flags(true, false)), date(2025, 4, 7));
        assert_eq!(apply_extension(saturday, &flags(false, false)), saturday);
    }

    #[test]
    fn test_holiday_flag_does_not_extend_plain_saturday() {
        let saturday = date(2025, 4, 5);
        assert_eq!(apply_extension(saturday, &flags(false, true)), saturday);
    }

    #[test]
    fn test_holiday_flag_extends_weekday_holiday() {
        // Friday July 4, 2025
        let holiday = date(2025, 7, 4);
        assert_eq!(apply_extension(holiday, &flags(false, true)), date(2025, 7, 7));
        assert_eq!(apply_extension(holiday, &flags(true, false)), holiday);
    }

    #[test]
    fn test_holiday_on_saturday_with_holiday_flag_only() {
        // July 4, 2026 is a Saturday: the holiday branch fires and the
        // business day scan carries it past the weekend
        let holiday = date(2026, 7, 4);
        assert_eq!(apply_extension(holiday, &flags(false, true)), date(2026, 7, 6));
    }

    #[test]
    fn test_weekend_extension_also_skips_following_holiday() {
        // Saturday before Labor Day 2025
        let saturday = date(2025, 8, 30);
        assert_eq!(apply_extension(saturday, &flags(true, false)), date(2025, 9, 2));
    }

    #[test]
    fn test_generic_hawaii_no_extension() {
        let rule = get_rule("HI").unwrap();
        let result = generic_deadlines(rule, date(2025, 1, 15)).unwrap();
        // March 1, 2025 is a Saturday; Hawaii does not extend
        assert_eq!(result.lien_filing, date(2025, 3, 1));
        // No day count in the rule: 30-day default
        assert_eq!(result.preliminary_notice, Some(date(2025, 2, 14)));
    }

    #[test]
    fn test_generic_florida_extends() {
        let rule = get_rule("FL").unwrap();
        // Jan 4, 2025 + 45 = Feb 18 (Tue); + 90 = Apr 4 (Fri)
        let result = generic_deadlines(rule, date(2025, 1, 4)).unwrap();
        assert_eq!(result.preliminary_notice, Some(date(2025, 2, 18)));
        assert_eq!(result.lien_filing, date(2025, 4, 4));

        // Jan 5, 2025 + 90 = Apr 5 (Sat) -> Apr 7
        let result = generic_deadlines(rule, date(2025, 1, 5)).unwrap();
        assert_eq!(result.lien_filing, date(2025, 4, 7));
    }

    fn formula_only_rule(special_rules: SpecialRules) -> StateRule {
        StateRule {
            state: State::NV,
            preliminary_notice: PreliminaryNoticeRule::optional("Notice", "Test"),
            lien_filing: LienFilingRule::formula("Test formula", "Lien", "Test"),
            special_rules,
        }
    }

    #[test]
    fn test_generic_lien_defaults_without_day_count() {
        // Jan 5, 2025 + 90 = Saturday Apr 5
        let rule = formula_only_rule(flags(false, false));
        let result = generic_deadlines(&rule, date(2025, 1, 5)).unwrap();
        assert_eq!(result.preliminary_notice, Some(date(2025, 2, 4)));
        assert_eq!(result.lien_filing, date(2025, 4, 5));
    }

    #[test]
    fn test_generic_defaulted_lien_still_extended() {
        let rule = formula_only_rule(flags(true, false));
        let result = generic_deadlines(&rule, date(2025, 1, 5)).unwrap();
        assert_eq!(result.lien_filing, date(2025, 4, 7));
    }

    #[test]
    fn test_fallback_is_plain_offset() {
        // Jan 5, 2025 + 90 lands on Saturday Apr 5 and stays there
        let result = fallback_deadlines(date(2025, 1, 5)).unwrap();
        assert_eq!(result.preliminary_notice, Some(date(2025, 2, 4)));
        assert_eq!(result.lien_filing, date(2025, 4, 5));
    }

    #[test]
    fn test_day_of_month_after_crosses_year() {
        assert_eq!(
            day_of_month_after(date(2024, 11, 30), 3, 15).unwrap(),
            date(2025, 2, 15)
        );
        assert_eq!(
            day_of_month_after(date(2024, 1, 31), 1, 15).unwrap(),
            date(2024, 2, 15)
        );
    }

    #[test]
    fn test_add_days_out_of_range() {
        assert_eq!(
            add_days(NaiveDate::MAX, 1),
            Err(DeadlineError::DateOutOfRange(NaiveDate::MAX))
        );
    }

    #[test]
    fn test_days_remaining_and_urgency() {
        let result = DeadlineResult {
            preliminary_notice: Some(date(2025, 2, 17)),
            lien_filing: date(2025, 3, 17),
        };
        let remaining = result.days_remaining(date(2025, 2, 10));
        assert_eq!(remaining.preliminary_notice, Some(7));
        assert_eq!(remaining.lien_filing, 35);

        assert_eq!(Urgency::from_days(-1), Urgency::Overdue);
        assert_eq!(Urgency::from_days(0), Urgency::Critical);
        assert_eq!(Urgency::from_days(7), Urgency::Critical);
        assert_eq!(Urgency::from_days(8), Urgency::Warning);
        assert_eq!(Urgency::from_days(30), Urgency::Warning);
        assert_eq!(Urgency::from_days(31), Urgency::Upcoming);
    }
}
