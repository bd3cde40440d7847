//! Oregon Construction Lien Deadlines
//!
//! ORS 87.021 counts the Notice of Right to Lien window in business days;
//! ORS 87.035 gives 75 calendar days to record the lien.

use chrono::NaiveDate;

use crate::calendar::BusinessCalendar;
use crate::deadline::{add_days, DeadlineResult};
use crate::error::DeadlineError;

pub const NOTICE_BUSINESS_DAYS: u32 = 8;
pub const LIEN_FILING_DAYS: u32 = 75;

pub const BUSINESS_DAY_NOTE: &str = "Oregon Notice of Right to Lien is counted in business \
days; a late notice only protects materials delivered after it is served";

pub fn calculate(invoice_date: NaiveDate) -> Result<DeadlineResult, DeadlineError> {
    let notice = BusinessCalendar::add_business_days(invoice_date, NOTICE_BUSINESS_DAYS)
        .ok_or(DeadlineError::DateOutOfRange(invoice_date))?;
    let lien = add_days(invoice_date, LIEN_FILING_DAYS)?;

    Ok(DeadlineResult {
        preliminary_notice: Some(notice),
        lien_filing: BusinessCalendar::next_business_day(lien),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_notice_counts_business_days() {
        // Thu Jan 9, 2025: 10, 13, 14, 15, 16, 17, (20 MLK), 21, 22
        let result = calculate(date(2025, 1, 9)).unwrap();
        assert_eq!(result.preliminary_notice, Some(date(2025, 1, 22)));
    }

    #[test]
    fn test_lien_extends_past_weekend() {
        // Jan 20 + 75 = Saturday Apr 5, 2025 -> Apr 7
        let result = calculate(date(2025, 1, 20)).unwrap();
        assert_eq!(result.lien_filing, date(2025, 4, 7));
    }
}
