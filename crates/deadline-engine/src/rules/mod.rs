//! Statutory deadline rules per jurisdiction
//!
//! One [`StateRule`] per state code (plus DC). The table is static data;
//! the lookup index is built once on first access and never mutated.

mod table;

use std::collections::HashMap;

use lazy_static::lazy_static;
use serde::Serialize;

use crate::jurisdiction::{ClaimantRole, State};
use crate::states::StateOverride;

pub use table::STATE_RULES;

lazy_static! {
    static ref RULE_INDEX: HashMap<State, &'static StateRule> =
        STATE_RULES.iter().map(|rule| (rule.state, rule)).collect();
}

/// Preliminary notice requirement (notice to owner, notice of furnishing, etc.)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreliminaryNoticeRule {
    pub required: bool,
    /// Calendar days after invoice/first delivery
    pub deadline_days: Option<u32>,
    /// Used where the deadline is not a flat day count
    pub deadline_formula: Option<&'static str>,
    pub description: &'static str,
    pub statute: &'static str,
}

impl PreliminaryNoticeRule {
    pub const fn required(days: u32, description: &'static str, statute: &'static str) -> Self {
        Self {
            required: true,
            deadline_days: Some(days),
            deadline_formula: None,
            description,
            statute,
        }
    }

    pub const fn optional(description: &'static str, statute: &'static str) -> Self {
        Self {
            required: false,
            deadline_days: None,
            deadline_formula: None,
            description,
            statute,
        }
    }

    pub const fn formula(
        formula: &'static str,
        description: &'static str,
        statute: &'static str,
    ) -> Self {
        Self {
            required: true,
            deadline_days: None,
            deadline_formula: Some(formula),
            description,
            statute,
        }
    }
}

/// Lien claim recording deadline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LienFilingRule {
    pub deadline_days: Option<u32>,
    pub deadline_formula: Option<&'static str>,
    pub description: &'static str,
    pub statute: &'static str,
}

impl LienFilingRule {
    pub const fn days(days: u32, description: &'static str, statute: &'static str) -> Self {
        Self {
            deadline_days: Some(days),
            deadline_formula: None,
            description,
            statute,
        }
    }

    pub const fn formula(
        formula: &'static str,
        description: &'static str,
        statute: &'static str,
    ) -> Self {
        Self {
            deadline_days: None,
            deadline_formula: Some(formula),
            description,
            statute,
        }
    }
}

/// Flags that change how a computed date is adjusted or qualified
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecialRules {
    /// Deadline landing on Saturday/Sunday moves to the next business day
    pub weekend_extension: bool,
    /// Deadline landing on a federal holiday moves to the next business day
    pub holiday_extension: bool,
    pub residential_vs_commercial: bool,
    pub notice_of_completion_trigger: bool,
    pub notes: &'static str,
}

/// Complete deadline rule for one jurisdiction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateRule {
    pub state: State,
    pub preliminary_notice: PreliminaryNoticeRule,
    pub lien_filing: LienFilingRule,
    pub special_rules: SpecialRules,
}

impl StateRule {
    /// Whether the claimant must serve a preliminary notice
    ///
    /// A state override with a role-dependent requirement takes precedence
    /// over the table's `required` flag.
    pub fn preliminary_notice_required(&self, role: ClaimantRole) -> bool {
        StateOverride::for_state(self.state)
            .and_then(|state_override| state_override.preliminary_notice_required(role))
            .unwrap_or(self.preliminary_notice.required)
    }

    /// Checklist of what the claimant has to serve or record to keep lien rights
    pub fn serving_requirements(&self, role: ClaimantRole) -> Vec<String> {
        let mut requirements = Vec::new();

        if self.preliminary_notice_required(role) {
            requirements.push(format!(
                "Serve preliminary notice: {} ({})",
                self.preliminary_notice.description, self.preliminary_notice.statute
            ));
        }

        requirements.push(format!(
            "Record lien claim: {} ({})",
            self.lien_filing.description, self.lien_filing.statute
        ));

        if self.special_rules.notice_of_completion_trigger {
            requirements.push(
                "Monitor for a recorded Notice of Completion, which can shorten the lien deadline"
                    .to_string(),
            );
        }

        if self.special_rules.residential_vs_commercial {
            requirements.push(
                "Confirm the project type: residential and commercial deadlines differ"
                    .to_string(),
            );
        }

        requirements
    }
}

/// Look up the rule for a state code or name
///
/// Returns `None` for codes outside the table; callers pick the fallback.
pub fn get_rule(state_code: &str) -> Option<&'static StateRule> {
    State::parse_code(state_code).and_then(rule_for)
}

/// Look up the rule for an already-parsed state
pub fn rule_for(state: State) -> Option<&'static StateRule> {
    RULE_INDEX.get(&state).copied()
}

/// Every rule, in table order
pub fn all_rules() -> &'static [StateRule] {
    &STATE_RULES
}
