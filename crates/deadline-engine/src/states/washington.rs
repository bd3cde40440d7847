//! Washington Construction Lien Deadlines
//!
//! RCW 60.04. Only material suppliers owe the 60-day notice to owner
//! (RCW 60.04.031); for every other claimant no preliminary notice is
//! required. The lien itself is due within 90 days (RCW 60.04.091).

use chrono::NaiveDate;

use crate::calendar::BusinessCalendar;
use crate::deadline::{add_days, DeadlineResult};
use crate::error::DeadlineError;
use crate::jurisdiction::ClaimantRole;

pub const SUPPLIER_NOTICE_DAYS: u32 = 60;
pub const LIEN_FILING_DAYS: u32 = 90;

/// Only material suppliers owe the notice to owner
pub fn notice_required(role: ClaimantRole) -> bool {
    role == ClaimantRole::Supplier
}

pub fn calculate(
    invoice_date: NaiveDate,
    role: ClaimantRole,
) -> Result<DeadlineResult, DeadlineError> {
    let preliminary_notice = if notice_required(role) {
        Some(BusinessCalendar::next_business_day(add_days(
            invoice_date,
            SUPPLIER_NOTICE_DAYS,
        )?))
    } else {
        None
    };

    let lien = add_days(invoice_date, LIEN_FILING_DAYS)?;

    Ok(DeadlineResult {
        preliminary_notice,
        lien_filing: BusinessCalendar::next_business_day(lien),
    })
}
