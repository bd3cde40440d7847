//! California Construction Lien Deadlines
//!
//! Civil Code Part 6 (Works of Improvement):
//! - § 8204 - 20-Day Preliminary Notice
//! - § 8412/8414 - Mechanics lien recorded within 90 days after completion,
//!   or 30 days after a recorded Notice of Completion
//!
//! The engine only receives the invoice date, so the lien deadline is
//! approximated as 90 days from invoice without extension. Every California
//! calculation carries [`LIEN_APPROXIMATION_NOTE`].

use chrono::NaiveDate;

use crate::calendar::BusinessCalendar;
use crate::deadline::{add_days, DeadlineResult};
use crate::error::DeadlineError;

pub const PRELIMINARY_NOTICE_DAYS: u32 = 20;
pub const LIEN_FILING_DAYS: u32 = 90;

pub const LIEN_APPROXIMATION_NOTE: &str = "California lien deadline runs 90 days from project \
completion (30 days after a recorded Notice of Completion); this date is approximated as 90 \
days from the invoice date";

pub fn calculate(invoice_date: NaiveDate) -> Result<DeadlineResult, DeadlineError> {
    let notice = add_days(invoice_date, PRELIMINARY_NOTICE_DAYS)?;
    let lien = add_days(invoice_date, LIEN_FILING_DAYS)?;

    Ok(DeadlineResult {
        preliminary_notice: Some(BusinessCalendar::next_business_day(notice)),
        lien_filing: lien,
    })
}
