//! State-specific deadline calculators
//!
//! Jurisdictions whose statutes cannot be expressed as "invoice date plus N
//! days" get a dedicated module here. The set is closed: [`StateOverride`]
//! lists every one, and [`StateOverride::for_state`] is the only dispatch.

pub mod california;
pub mod oregon;
pub mod texas;
pub mod washington;

use chrono::NaiveDate;
use serde::Serialize;

use crate::deadline::DeadlineResult;
use crate::error::DeadlineError;
use crate::jurisdiction::{ClaimantRole, ProjectType, State};

/// Custom calculator for a single jurisdiction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StateOverride {
    Texas,
    Washington,
    California,
    Oregon,
}

impl StateOverride {
    pub const ALL: [StateOverride; 4] = [
        StateOverride::Texas,
        StateOverride::Washington,
        StateOverride::California,
        StateOverride::Oregon,
    ];

    /// Override registered for a state, if any
    pub fn for_state(state: State) -> Option<Self> {
        match state {
            State::TX => Some(StateOverride::Texas),
            State::WA => Some(StateOverride::Washington),
            State::CA => Some(StateOverride::California),
            State::OR => Some(StateOverride::Oregon),
            _ => None,
        }
    }

    pub fn state(&self) -> State {
        match self {
            StateOverride::Texas => State::TX,
            StateOverride::Washington => State::WA,
            StateOverride::California => State::CA,
            StateOverride::Oregon => State::OR,
        }
    }

    /// Compute both deadlines, including any weekend/holiday extension
    pub fn calculate(
        &self,
        invoice_date: NaiveDate,
        project_type: ProjectType,
        role: ClaimantRole,
    ) -> Result<DeadlineResult, DeadlineError> {
        match self {
            StateOverride::Texas => texas::calculate(invoice_date, project_type),
            StateOverride::Washington => washington::calculate(invoice_date, role),
            StateOverride::California => california::calculate(invoice_date),
            StateOverride::Oregon => oregon::calculate(invoice_date),
        }
    }

    /// Role-dependent notice requirement, `None` when the rule table decides
    pub fn preliminary_notice_required(&self, role: ClaimantRole) -> Option<bool> {
        match self {
            StateOverride::Washington => Some(washington::notice_required(role)),
            StateOverride::Texas | StateOverride::California | StateOverride::Oregon => None,
        }
    }

    /// Caveats the caller should surface alongside the computed dates
    pub fn notes(&self) -> &'static [&'static str] {
        match self {
            StateOverride::California => &[california::LIEN_APPROXIMATION_NOTE],
            StateOverride::Oregon => &[oregon::BUSINESS_DAY_NOTE],
            StateOverride::Texas | StateOverride::Washington => &[],
        }
    }
}
