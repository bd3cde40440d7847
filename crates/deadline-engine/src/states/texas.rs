//! Texas Construction Lien Deadlines
//!
//! Texas Property Code Chapter 53. Deadlines fall on the 15th day of a month
//! counted from the month of delivery, not on a day count:
//! - § 53.056 - Notice of claim: 2nd month (residential) / 3rd month (commercial)
//! - § 53.052 - Lien affidavit: 3rd month (residential) / 4th month (commercial)
//!
//! Both dates extend to the next business day when they fall on a weekend
//! or holiday.

use chrono::NaiveDate;

use crate::calendar::BusinessCalendar;
use crate::deadline::{day_of_month_after, DeadlineResult};
use crate::error::DeadlineError;
use crate::jurisdiction::ProjectType;

pub const DEADLINE_DAY_OF_MONTH: u32 = 15;

/// Months after the month of delivery for (notice, lien)
pub fn month_offsets(project_type: ProjectType) -> (u32, u32) {
    match project_type {
        ProjectType::Residential => (2, 3),
        ProjectType::Commercial => (3, 4),
    }
}

pub fn calculate(
    invoice_date: NaiveDate,
    project_type: ProjectType,
) -> Result<DeadlineResult, DeadlineError> {
    let (notice_months, lien_months) = month_offsets(project_type);

    let notice = day_of_month_after(invoice_date, notice_months, DEADLINE_DAY_OF_MONTH)?;
    let lien = day_of_month_after(invoice_date, lien_months, DEADLINE_DAY_OF_MONTH)?;

    Ok(DeadlineResult {
        preliminary_notice: Some(BusinessCalendar::next_business_day(notice)),
        lien_filing: BusinessCalendar::next_business_day(lien),
    })
}
