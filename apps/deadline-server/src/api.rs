//! API handlers for the deadline server
//!
//! Provides REST endpoints for:
//! - Deadline calculation
//! - Rule table lookup
//! - Holiday listing

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ServerError;
use crate::AppState;

use deadline_engine::{
    parse_date, rules, ClaimantRole, DaysRemaining, FederalHolidayCalendar, Holiday,
    ProjectType, StateRule, Urgency, LEGAL_DISCLAIMER,
};

/// Earliest and latest years served by the holiday endpoint
const HOLIDAY_YEARS: std::ops::RangeInclusive<i32> = 1900..=2199;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Handler: GET /health
pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "deadline-server",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Deadline calculation request body
#[derive(Deserialize)]
pub struct CalculateDeadlineRequest {
    /// Invoice or delivery date, `YYYY-MM-DD`
    pub invoice_date: String,

    /// State code (e.g., "TX", "WA") or full name
    pub state: String,

    /// "supplier" (default) or "subcontractor"
    #[serde(default = "default_role")]
    pub role: String,

    /// "commercial" (default) or "residential"
    #[serde(default = "default_project_type")]
    pub project_type: String,

    /// Date to count days remaining from, `YYYY-MM-DD`
    pub reference_date: Option<String>,
}

fn default_role() -> String {
    ClaimantRole::default().as_str().to_string()
}

fn default_project_type() -> String {
    ProjectType::default().as_str().to_string()
}

/// Days remaining with reminder buckets
#[derive(Serialize)]
pub struct DaysRemainingInfo {
    pub reference_date: NaiveDate,
    pub preliminary_notice: Option<i64>,
    pub preliminary_notice_urgency: Option<Urgency>,
    pub lien_filing: i64,
    pub lien_filing_urgency: Urgency,
}

impl DaysRemainingInfo {
    fn new(reference_date: NaiveDate, remaining: DaysRemaining) -> Self {
        Self {
            reference_date,
            preliminary_notice: remaining.preliminary_notice,
            preliminary_notice_urgency: remaining.preliminary_notice.map(Urgency::from_days),
            lien_filing: remaining.lien_filing,
            lien_filing_urgency: Urgency::from_days(remaining.lien_filing),
        }
    }
}

/// Deadline calculation response
#[derive(Serialize)]
pub struct CalculateDeadlineResponse {
    pub success: bool,
    /// Normalized state code, `None` when the fallback rule was used
    pub state: Option<String>,
    pub state_name: Option<&'static str>,
    pub invoice_date: NaiveDate,
    pub project_type: ProjectType,
    pub role: ClaimantRole,
    pub preliminary_notice: Option<NaiveDate>,
    pub preliminary_notice_required: bool,
    pub lien_filing: NaiveDate,
    pub calculation_method: &'static str,
    pub notes: Vec<&'static str>,
    pub serving_requirements: Vec<String>,
    pub days_remaining: Option<DaysRemainingInfo>,
    pub disclaimer: &'static str,
}

/// Handler: POST /api/calculate-deadline
pub async fn handle_calculate_deadline(
    State(state): State<AppState>,
    Json(req): Json<CalculateDeadlineRequest>,
) -> Result<Json<CalculateDeadlineResponse>, ServerError> {
    info!(
        "Deadline request: state={}, invoice_date={}, role={}, project_type={}",
        req.state, req.invoice_date, req.role, req.project_type
    );

    let invoice_date = parse_date(&req.invoice_date)?;
    let role: ClaimantRole = req.role.parse()?;
    let project_type: ProjectType = req.project_type.parse()?;
    let reference_date = req.reference_date.as_deref().map(parse_date).transpose()?;

    let calculation = state
        .engine
        .calculate_detailed(&req.state, invoice_date, project_type, role)?;
    debug!("Calculation: {:?}", calculation);

    let result = calculation.result;
    let serving_requirements = state.engine.serving_requirements(&req.state, role);

    Ok(Json(CalculateDeadlineResponse {
        success: true,
        state: calculation.state.map(|s| s.code()),
        state_name: calculation.state.map(|s| s.name()),
        invoice_date,
        project_type,
        role,
        preliminary_notice: result.preliminary_notice,
        preliminary_notice_required: result.preliminary_notice.is_some()
            && calculation
                .state
                .and_then(rules::rule_for)
                .map_or(true, |rule| rule.preliminary_notice_required(role)),
        lien_filing: result.lien_filing,
        calculation_method: calculation.method.label(),
        notes: calculation.notes,
        serving_requirements,
        days_remaining: reference_date
            .map(|today| DaysRemainingInfo::new(today, result.days_remaining(today))),
        disclaimer: LEGAL_DISCLAIMER,
    }))
}

/// Rule table response
#[derive(Serialize)]
pub struct StateRulesResponse {
    pub success: bool,
    pub rules: &'static [StateRule],
    pub count: usize,
}

/// Handler: GET /api/states
pub async fn handle_list_state_rules() -> Json<StateRulesResponse> {
    let rules = rules::all_rules();
    Json(StateRulesResponse {
        success: true,
        rules,
        count: rules.len(),
    })
}

/// Single rule response
#[derive(Serialize)]
pub struct StateRuleResponse {
    pub success: bool,
    pub state_name: &'static str,
    pub rule: &'static StateRule,
}

/// Handler: GET /api/states/:code
pub async fn handle_get_state_rule(
    Path(code): Path<String>,
) -> Result<Json<StateRuleResponse>, ServerError> {
    let rule = rules::get_rule(&code).ok_or_else(|| ServerError::StateNotFound(code.clone()))?;

    Ok(Json(StateRuleResponse {
        success: true,
        state_name: rule.state.name(),
        rule,
    }))
}

/// Holiday list response
#[derive(Serialize)]
pub struct HolidaysResponse {
    pub success: bool,
    pub year: i32,
    pub holidays: Vec<Holiday>,
    pub count: usize,
}

/// Handler: GET /api/holidays/:year
pub async fn handle_list_holidays(
    Path(year): Path<i32>,
) -> Result<Json<HolidaysResponse>, ServerError> {
    if !HOLIDAY_YEARS.contains(&year) {
        return Err(ServerError::InvalidRequest(format!(
            "Year {} out of range ({}-{})",
            year,
            HOLIDAY_YEARS.start(),
            HOLIDAY_YEARS.end()
        )));
    }

    let holidays = FederalHolidayCalendar::holidays_for_year(year);
    let count = holidays.len();

    Ok(Json(HolidaysResponse {
        success: true,
        year,
        holidays,
        count,
    }))
}
