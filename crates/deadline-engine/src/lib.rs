//! Statutory deadline calculation for construction-material suppliers
//!
//! Given an invoice/delivery date, a jurisdiction, a project type and a
//! claimant role, computes the preliminary notice and lien filing deadlines.
//!
//! Dispatch per call: normalize the state code, look up its rule, then run
//! the state's override calculator, the generic day-offset path, or (for
//! codes outside the table) a flat 30/90-day fallback.

pub mod calendar;
pub mod deadline;
pub mod error;
pub mod jurisdiction;
pub mod rules;
pub mod states;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, warn};

pub use calendar::{BusinessCalendar, FederalHolidayCalendar, Holiday, HolidayKind};
pub use deadline::{
    DaysRemaining, DeadlineResult, Urgency, DEFAULT_LIEN_FILING_DAYS,
    DEFAULT_PRELIMINARY_NOTICE_DAYS,
};
pub use error::DeadlineError;
pub use jurisdiction::{ClaimantRole, ProjectType, State};
pub use rules::{get_rule, StateRule};
pub use states::StateOverride;

pub const LEGAL_DISCLAIMER: &str = "Deadlines are estimates computed from the configured rule \
table and the invoice date. They are not legal advice. Confirm every deadline against the \
current statute or with a construction attorney before relying on it.";

const FALLBACK_NOTE: &str = "Jurisdiction not recognized: using default 30-day notice and \
90-day lien deadlines without weekend or holiday extension";

/// Which path produced a [`DeadlineCalculation`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "state", rename_all = "snake_case")]
pub enum CalculationMethod {
    Override(StateOverride),
    Generic,
    Fallback,
}

impl CalculationMethod {
    pub fn label(&self) -> &'static str {
        match self {
            CalculationMethod::Override(_) => "override",
            CalculationMethod::Generic => "generic",
            CalculationMethod::Fallback => "fallback",
        }
    }
}

/// A deadline result together with how it was derived
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeadlineCalculation {
    /// `None` when the code did not resolve to a jurisdiction in the table
    pub state: Option<State>,
    pub method: CalculationMethod,
    pub result: DeadlineResult,
    pub notes: Vec<&'static str>,
}

/// DeadlineEngine entry point
pub struct DeadlineEngine;

impl DeadlineEngine {
    pub fn new() -> Self {
        Self
    }

    /// Compute the preliminary notice and lien filing deadlines
    pub fn calculate_state_deadline(
        &self,
        state_code: &str,
        invoice_date: NaiveDate,
        project_type: ProjectType,
        role: ClaimantRole,
    ) -> Result<DeadlineResult, DeadlineError> {
        self.calculate_detailed(state_code, invoice_date, project_type, role)
            .map(|calc| calc.result)
    }

    /// Same as [`Self::calculate_state_deadline`], parsing a `YYYY-MM-DD` invoice date
    pub fn calculate_from_str(
        &self,
        state_code: &str,
        invoice_date: &str,
        project_type: ProjectType,
        role: ClaimantRole,
    ) -> Result<DeadlineResult, DeadlineError> {
        let invoice_date = parse_date(invoice_date)?;
        self.calculate_state_deadline(state_code, invoice_date, project_type, role)
    }

    /// Compute deadlines and report the path taken plus any caveats
    pub fn calculate_detailed(
        &self,
        state_code: &str,
        invoice_date: NaiveDate,
        project_type: ProjectType,
        role: ClaimantRole,
    ) -> Result<DeadlineCalculation, DeadlineError> {
        let Some(rule) = get_rule(state_code) else {
            warn!(
                state_code,
                %invoice_date,
                "no rule for jurisdiction, using fallback deadlines"
            );
            return Ok(DeadlineCalculation {
                state: None,
                method: CalculationMethod::Fallback,
                result: deadline::fallback_deadlines(invoice_date)?,
                notes: vec![FALLBACK_NOTE],
            });
        };

        let calculation = match StateOverride::for_state(rule.state) {
            Some(state_override) => DeadlineCalculation {
                state: Some(rule.state),
                method: CalculationMethod::Override(state_override),
                result: state_override.calculate(invoice_date, project_type, role)?,
                notes: state_override.notes().to_vec(),
            },
            None => DeadlineCalculation {
                state: Some(rule.state),
                method: CalculationMethod::Generic,
                result: deadline::generic_deadlines(rule, invoice_date)?,
                notes: Vec::new(),
            },
        };

        debug!(
            state = %rule.state,
            method = calculation.method.label(),
            project_type = project_type.as_str(),
            role = role.as_str(),
            %invoice_date,
            lien_filing = %calculation.result.lien_filing,
            "calculated deadlines"
        );

        Ok(calculation)
    }

    /// What the claimant must serve or record; empty for unknown jurisdictions
    pub fn serving_requirements(&self, state_code: &str, role: ClaimantRole) -> Vec<String> {
        get_rule(state_code)
            .map(|rule| rule.serving_requirements(role))
            .unwrap_or_default()
    }

    /// Every jurisdiction the rule table covers
    pub fn supported_states(&self) -> Vec<State> {
        rules::all_rules().iter().map(|rule| rule.state).collect()
    }
}

impl Default for DeadlineEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a strict `YYYY-MM-DD` date
///
/// Four-digit year, zero-padded month and day, no sign. Surrounding
/// whitespace is ignored.
pub fn parse_date(input: &str) -> Result<NaiveDate, DeadlineError> {
    let trimmed = input.trim();
    let well_formed = trimmed.len() == 10
        && trimmed.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });

    if !well_formed {
        return Err(DeadlineError::InvalidInputDate(input.to_string()));
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| DeadlineError::InvalidInputDate(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_texas_commercial() {
        let engine = DeadlineEngine::new();
        let result = engine
            .calculate_state_deadline(
                "TX",
                date(2024, 11, 1),
                ProjectType::Commercial,
                ClaimantRole::Supplier,
            )
            .unwrap();

        assert_eq!(result.preliminary_notice, Some(date(2025, 2, 17)));
        assert_eq!(result.lien_filing, date(2025, 3, 17));
    }

    #[test]
    fn test_washington_roles() {
        let engine = DeadlineEngine::new();
        let supplier = engine
            .calculate_state_deadline(
                "wa",
                date(2025, 1, 1),
                ProjectType::default(),
                ClaimantRole::Supplier,
            )
            .unwrap();
        assert_eq!(supplier.preliminary_notice, Some(date(2025, 3, 3)));

        let sub = engine
            .calculate_state_deadline(
                "wa",
                date(2025, 1, 1),
                ProjectType::default(),
                ClaimantRole::Subcontractor,
            )
            .unwrap();
        assert_eq!(sub.preliminary_notice, None);
        assert_eq!(sub.lien_filing, supplier.lien_filing);
    }

    #[test]
    fn test_hawaii_lien_not_extended() {
        let engine = DeadlineEngine::new();
        let result = engine
            .calculate_state_deadline(
                "HI",
                date(2025, 1, 15),
                ProjectType::Commercial,
                ClaimantRole::Supplier,
            )
            .unwrap();
        assert_eq!(result.lien_filing, date(2025, 3, 1));
    }

    #[test]
    fn test_kansas_saturday_not_extended() {
        // Jan 5 + 90 = Saturday Apr 5, 2025: holiday-only extension leaves it
        let engine = DeadlineEngine::new();
        let result = engine
            .calculate_state_deadline(
                "KS",
                date(2025, 1, 5),
                ProjectType::Commercial,
                ClaimantRole::Supplier,
            )
            .unwrap();
        assert_eq!(result.lien_filing, date(2025, 4, 5));
    }

    #[test]
    fn test_kansas_holiday_extended() {
        // Apr 5 + 90 = Friday July 4, 2025 -> Monday July 7
        let engine = DeadlineEngine::new();
        let result = engine
            .calculate_state_deadline(
                "KS",
                date(2025, 4, 5),
                ProjectType::Commercial,
                ClaimantRole::Supplier,
            )
            .unwrap();
        assert_eq!(result.lien_filing, date(2025, 7, 7));
    }

    #[test]
    fn test_unknown_state_falls_back() {
        let engine = DeadlineEngine::new();
        let calc = engine
            .calculate_detailed(
                "ZZ",
                date(2025, 1, 5),
                ProjectType::Commercial,
                ClaimantRole::Supplier,
            )
            .unwrap();

        assert_eq!(calc.method, CalculationMethod::Fallback);
        assert_eq!(calc.state, None);
        assert_eq!(calc.result.preliminary_notice, Some(date(2025, 2, 4)));
        // Saturday, not extended
        assert_eq!(calc.result.lien_filing, date(2025, 4, 5));
        assert_eq!(calc.notes.len(), 1);
    }

    #[test]
    fn test_override_dispatch_reported() {
        let engine = DeadlineEngine::new();
        let calc = engine
            .calculate_detailed(
                "california",
                date(2025, 1, 1),
                ProjectType::Commercial,
                ClaimantRole::Supplier,
            )
            .unwrap();
        assert_eq!(
            calc.method,
            CalculationMethod::Override(StateOverride::California)
        );
        assert_eq!(calc.state, Some(State::CA));
        assert_eq!(calc.notes, vec![states::california::LIEN_APPROXIMATION_NOTE]);

        let calc = engine
            .calculate_detailed(
                "FL",
                date(2025, 1, 1),
                ProjectType::Commercial,
                ClaimantRole::Supplier,
            )
            .unwrap();
        assert_eq!(calc.method, CalculationMethod::Generic);
        assert!(calc.notes.is_empty());
    }

    #[test]
    fn test_calculate_from_str_rejects_bad_dates() {
        let engine = DeadlineEngine::new();
        for bad in [
            "2025-02-30",
            "01/15/2025",
            "",
            "2025-1-15x",
            "2025-1-5",
            "+2025-01-05",
        ] {
            assert_eq!(
                engine.calculate_from_str(
                    "TX",
                    bad,
                    ProjectType::Commercial,
                    ClaimantRole::Supplier
                ),
                Err(DeadlineError::InvalidInputDate(bad.to_string()))
            );
        }

        let result = engine
            .calculate_from_str(
                "TX",
                "2024-11-01",
                ProjectType::Commercial,
                ClaimantRole::Supplier,
            )
            .unwrap();
        assert_eq!(result.lien_filing, date(2025, 3, 17));
    }

    #[test]
    fn test_parse_date_shape() {
        assert_eq!(parse_date(" 2025-01-05 "), Ok(date(2025, 1, 5)));
        assert!(parse_date("2025-01-5").is_err());
        assert!(parse_date("12025-01-05").is_err());
        assert!(parse_date("2025/01/05").is_err());
    }

    #[test]
    fn test_serving_requirements() {
        let engine = DeadlineEngine::new();
        assert!(engine
            .serving_requirements("ZZ", ClaimantRole::Supplier)
            .is_empty());
        assert!(!engine
            .serving_requirements("TX", ClaimantRole::Supplier)
            .is_empty());
    }

    #[test]
    fn test_supported_states() {
        let engine = DeadlineEngine::new();
        let supported = engine.supported_states();
        assert_eq!(supported.len(), 51);
        assert!(supported.contains(&State::DC));
    }

    #[test]
    fn test_calculation_serializes() {
        let engine = DeadlineEngine::new();
        let calc = engine
            .calculate_detailed(
                "TX",
                date(2024, 11, 1),
                ProjectType::Commercial,
                ClaimantRole::Supplier,
            )
            .unwrap();
        let json = serde_json::to_value(&calc).unwrap();
        assert_eq!(json["state"], "TX");
        assert_eq!(json["method"]["type"], "override");
        assert_eq!(json["method"]["state"], "texas");
        assert_eq!(json["result"]["preliminary_notice"], "2025-02-17");
        assert_eq!(json["result"]["lien_filing"], "2025-03-17");
    }
}
