//! Tests for the deadline server API
//!
//! Test categories:
//! - Property tests over request parsing and deadline invariants
//! - HTTP endpoint integration tests using axum-test

#[cfg(test)]
mod property_tests {
    use proptest::prelude::*;

    use deadline_engine::{parse_date, ClaimantRole, DeadlineEngine, ProjectType, State};

    /// Generate arbitrary supported state codes in mixed case
    fn state_code() -> impl Strategy<Value = String> {
        (proptest::sample::select(State::all().to_vec()), any::<bool>()).prop_map(
            |(state, lower)| {
                if lower {
                    state.code().to_lowercase()
                } else {
                    state.code()
                }
            },
        )
    }

    /// Generate valid ISO dates
    fn iso_date() -> impl Strategy<Value = String> {
        (2000i32..2060, 1u32..=12, 1u32..=28)
            .prop_map(|(y, m, d)| format!("{:04}-{:02}-{:02}", y, m, d))
    }

    proptest! {
        /// Property: Valid ISO dates always parse
        #[test]
        fn iso_dates_parse(date in iso_date()) {
            prop_assert!(parse_date(&date).is_ok());
        }

        /// Property: US-style dates are rejected, not reinterpreted
        #[test]
        fn us_style_dates_rejected(m in 1u32..=12, d in 1u32..=28, y in 2000i32..2060) {
            let input = format!("{:02}/{:02}/{:04}", m, d, y);
            prop_assert!(parse_date(&input).is_err());
        }

        /// Property: State codes resolve regardless of case
        #[test]
        fn state_codes_resolve(code in state_code()) {
            prop_assert!(State::parse_code(&code).is_some());
        }

        /// Property: Every state yields a lien deadline for any valid request
        #[test]
        fn every_state_calculates(code in state_code(), date in iso_date()) {
            let engine = DeadlineEngine::new();
            let result = engine.calculate_from_str(
                &code,
                &date,
                ProjectType::Residential,
                ClaimantRole::Subcontractor,
            );
            prop_assert!(result.is_ok());
        }

        /// Property: Unknown roles are rejected
        #[test]
        fn unknown_roles_rejected(role in "[a-z]{3,12}".prop_filter(
            "Must not be a valid role",
            |s| !matches!(s.as_str(), "supplier" | "subcontractor")
        )) {
            prop_assert!(role.parse::<ClaimantRole>().is_err());
        }
    }
}

#[cfg(test)]
mod http_tests {
    //! HTTP endpoint integration tests using axum-test

    use axum_test::TestServer;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::{router, AppState};

    /// Create a test server with the full router
    fn create_test_server() -> TestServer {
        TestServer::new(router(AppState::default())).unwrap()
    }

    #[tokio::test]
    async fn test_health_returns_200() {
        let server = create_test_server();
        let response = server.get("/health").await;
        response.assert_status_ok();

        let json = response.json::<serde_json::Value>();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["service"], "deadline-server");
    }

    #[tokio::test]
    async fn test_texas_commercial_deadlines() {
        let server = create_test_server();

        let response = server
            .post("/api/calculate-deadline")
            .json(&json!({
                "invoice_date": "2024-11-01",
                "state": "TX",
                "project_type": "commercial"
            }))
            .await;

        response.assert_status_ok();

        let json = response.json::<serde_json::Value>();
        assert!(json["success"].as_bool().unwrap());
        assert_eq!(json["state"], "TX");
        assert_eq!(json["state_name"], "Texas");
        assert_eq!(json["preliminary_notice"], "2025-02-17");
        assert_eq!(json["lien_filing"], "2025-03-17");
        assert_eq!(json["calculation_method"], "override");
        assert_eq!(json["role"], "supplier");
        assert!(!json["serving_requirements"].as_array().unwrap().is_empty());
        assert!(json["disclaimer"].as_str().unwrap().contains("not legal advice"));
    }

    #[tokio::test]
    async fn test_washington_subcontractor_has_no_notice() {
        let server = create_test_server();

        let response = server
            .post("/api/calculate-deadline")
            .json(&json!({
                "invoice_date": "2025-01-01",
                "state": "wa",
                "role": "subcontractor"
            }))
            .await;

        response.assert_status_ok();

        let json = response.json::<serde_json::Value>();
        assert!(json["preliminary_notice"].is_null());
        assert_eq!(json["preliminary_notice_required"], false);
        assert_eq!(json["lien_filing"], "2025-04-01");
    }

    #[tokio::test]
    async fn test_california_reports_approximation() {
        let server = create_test_server();

        let response = server
            .post("/api/calculate-deadline")
            .json(&json!({
                "invoice_date": "2025-01-05",
                "state": "CA"
            }))
            .await;

        response.assert_status_ok();

        let json = response.json::<serde_json::Value>();
        assert_eq!(json["lien_filing"], "2025-04-05");
        let notes = json["notes"].as_array().unwrap();
        assert_eq!(notes.len(), 1);
        assert!(notes[0].as_str().unwrap().contains("approximated"));
    }

    #[tokio::test]
    async fn test_unknown_state_uses_fallback() {
        let server = create_test_server();

        let response = server
            .post("/api/calculate-deadline")
            .json(&json!({
                "invoice_date": "2025-01-05",
                "state": "ZZ"
            }))
            .await;

        response.assert_status_ok();

        let json = response.json::<serde_json::Value>();
        assert!(json["state"].is_null());
        assert_eq!(json["calculation_method"], "fallback");
        assert_eq!(json["preliminary_notice"], "2025-02-04");
        assert_eq!(json["lien_filing"], "2025-04-05");
        assert!(json["serving_requirements"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_days_remaining_with_reference_date() {
        let server = create_test_server();

        let response = server
            .post("/api/calculate-deadline")
            .json(&json!({
                "invoice_date": "2024-11-01",
                "state": "TX",
                "reference_date": "2025-02-10"
            }))
            .await;

        response.assert_status_ok();

        let json = response.json::<serde_json::Value>();
        let remaining = &json["days_remaining"];
        assert_eq!(remaining["reference_date"], "2025-02-10");
        assert_eq!(remaining["preliminary_notice"], 7);
        assert_eq!(remaining["preliminary_notice_urgency"], "critical");
        assert_eq!(remaining["lien_filing"], 35);
        assert_eq!(remaining["lien_filing_urgency"], "upcoming");
    }

    #[tokio::test]
    async fn test_rejects_invalid_date() {
        let server = create_test_server();

        let response = server
            .post("/api/calculate-deadline")
            .json(&json!({
                "invoice_date": "2025-02-30",
                "state": "TX"
            }))
            .await;

        response.assert_status_bad_request();

        let json = response.json::<serde_json::Value>();
        assert_eq!(json["success"], false);
        assert_eq!(json["code"], "INVALID_DATE");
    }

    #[tokio::test]
    async fn test_rejects_invalid_role() {
        let server = create_test_server();

        let response = server
            .post("/api/calculate-deadline")
            .json(&json!({
                "invoice_date": "2025-01-01",
                "state": "TX",
                "role": "owner"
            }))
            .await;

        response.assert_status_bad_request();

        let json = response.json::<serde_json::Value>();
        assert_eq!(json["code"], "INVALID_ROLE");
    }

    #[tokio::test]
    async fn test_rejects_invalid_project_type() {
        let server = create_test_server();

        let response = server
            .post("/api/calculate-deadline")
            .json(&json!({
                "invoice_date": "2025-01-01",
                "state": "TX",
                "project_type": "industrial"
            }))
            .await;

        response.assert_status_bad_request();

        let json = response.json::<serde_json::Value>();
        assert_eq!(json["code"], "INVALID_PROJECT_TYPE");
    }

    #[tokio::test]
    async fn test_list_states() {
        let server = create_test_server();
        let response = server.get("/api/states").await;
        response.assert_status_ok();

        let json = response.json::<serde_json::Value>();
        assert_eq!(json["count"], 51);
        assert_eq!(json["rules"].as_array().unwrap().len(), 51);
    }

    #[tokio::test]
    async fn test_get_state_rule() {
        let server = create_test_server();
        let response = server.get("/api/states/hi").await;
        response.assert_status_ok();

        let json = response.json::<serde_json::Value>();
        assert_eq!(json["state_name"], "Hawaii");
        assert_eq!(json["rule"]["state"], "HI");
        assert_eq!(json["rule"]["lien_filing"]["deadline_days"], 45);
        assert_eq!(json["rule"]["special_rules"]["weekend_extension"], false);
    }

    #[tokio::test]
    async fn test_get_unknown_state_rule() {
        let server = create_test_server();
        let response = server.get("/api/states/ZZ").await;
        response.assert_status_not_found();

        let json = response.json::<serde_json::Value>();
        assert_eq!(json["code"], "STATE_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_list_holidays() {
        let server = create_test_server();
        let response = server.get("/api/holidays/2025").await;
        response.assert_status_ok();

        let json = response.json::<serde_json::Value>();
        assert_eq!(json["count"], 10);
        assert_eq!(json["holidays"][0]["name"], "New Year's Day");
        assert_eq!(json["holidays"][0]["date"], "2025-01-01");
        assert_eq!(json["holidays"][0]["kind"], "fixed");
    }

    #[tokio::test]
    async fn test_holidays_year_out_of_range() {
        let server = create_test_server();
        let response = server.get("/api/holidays/10000").await;
        response.assert_status_bad_request();
    }
}
