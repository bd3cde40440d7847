use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeadlineError {
    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidInputDate(String),

    #[error("Unknown project type '{0}': must be 'residential' or 'commercial'")]
    UnknownProjectType(String),

    #[error("Unknown claimant role '{0}': must be 'supplier' or 'subcontractor'")]
    UnknownRole(String),

    #[error("Deadline arithmetic from {0} is out of the supported date range")]
    DateOutOfRange(NaiveDate),
}
