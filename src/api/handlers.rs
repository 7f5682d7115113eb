//! HTTP request handlers for the payslip engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Local;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_pay_slip, generate_payslip_from_entries, last_n_cycles_from};
use crate::models::{PaySlipInput, SalaryCycle, SalaryRecord, TimeEntry, applicable_record};

use super::request::{CyclesQuery, PayslipRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Upper bound on the number of cycles one `/cycles` request may ask for.
const MAX_CYCLES_PER_REQUEST: usize = 60;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payslip", post(payslip_handler))
        .route("/projection", post(projection_handler))
        .route("/cycles", get(cycles_handler))
        .with_state(state)
}

/// Maps a JSON extractor rejection to an API error.
fn rejection_to_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde.
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

fn bad_request(error: ApiError) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

fn engine_error(err: crate::error::EngineError) -> axum::response::Response {
    let api_error: ApiErrorResponse = err.into();
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

/// Handler for the POST /payslip endpoint.
///
/// Resolves the applicable salary record from the submitted history and
/// generates a payslip from the cycle's time entries.
async fn payslip_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayslipRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payslip request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_to_error(rejection, correlation_id)),
    };

    let cycle = match SalaryCycle::new(request.cycle.start_date, request.cycle.end_date) {
        Ok(cycle) => cycle,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid cycle");
            return engine_error(err);
        }
    };

    let history: Vec<SalaryRecord> = request
        .salary_history
        .into_iter()
        .map(Into::into)
        .collect();

    // The record in force at cycle end governs the whole cycle.
    let record = match applicable_record(&history, cycle.end_date) {
        Some(record) => record.clone(),
        None => {
            warn!(
                correlation_id = %correlation_id,
                date = %cycle.end_date,
                "No applicable salary record"
            );
            return engine_error(crate::error::EngineError::NoApplicableSalary {
                date: cycle.end_date,
            });
        }
    };

    let policy = match request.policy {
        Some(policy) => policy,
        None => state.policy().policy().clone(),
    };
    if let Err(err) = policy.validate() {
        warn!(correlation_id = %correlation_id, error = %err, "Invalid policy override");
        return bad_request(ApiError::validation_error(err.to_string()));
    }

    let entries: Vec<TimeEntry> = request.entries.into_iter().map(Into::into).collect();

    let start_time = Instant::now();
    let payslip =
        generate_payslip_from_entries(&entries, &record, &policy, &cycle, &request.user_id);
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        payslip_id = %payslip.id,
        user_id = %payslip.user_id,
        entries_count = entries.len(),
        net_salary = %payslip.summary.net_salary,
        duration_us = duration.as_micros(),
        "Payslip generated successfully"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(payslip),
    )
        .into_response()
}

/// Handler for the POST /projection endpoint.
///
/// Calculates a pay projection from pre-aggregated attendance counters,
/// without time entries.
async fn projection_handler(
    payload: Result<Json<PaySlipInput>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing projection request");

    let input = match payload {
        Ok(Json(input)) => input,
        Err(rejection) => return bad_request(rejection_to_error(rejection, correlation_id)),
    };

    // The cycle deserializes unvalidated; reject inverted bounds here.
    if input.cycle.end_date < input.cycle.start_date {
        return engine_error(crate::error::EngineError::InvalidCycle {
            start: input.cycle.start_date,
            end: input.cycle.end_date,
        });
    }
    if let Err(err) = input.working_days.validate() {
        warn!(correlation_id = %correlation_id, error = %err, "Invalid working days config");
        return bad_request(ApiError::validation_error(err.to_string()));
    }

    let start_time = Instant::now();
    let output = calculate_pay_slip(&input);
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        gross_salary = %output.gross_salary,
        net_salary = %output.net_salary,
        duration_us = duration.as_micros(),
        "Projection completed successfully"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(output),
    )
        .into_response()
}

/// Handler for the GET /cycles endpoint.
///
/// Returns the last `count` salary cycles for the given start day,
/// oldest first.
async fn cycles_handler(Query(query): Query<CyclesQuery>) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        start_day = query.start_day,
        count = query.count,
        "Processing cycles request"
    );

    if query.count == 0 || query.count > MAX_CYCLES_PER_REQUEST {
        return bad_request(ApiError::validation_error(format!(
            "count must be within 1..={}, got {}",
            MAX_CYCLES_PER_REQUEST, query.count
        )));
    }

    let anchor = query.from.unwrap_or_else(|| Local::now().date_naive());
    match last_n_cycles_from(anchor, query.count, query.start_day) {
        Ok(cycles) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            Json(cycles),
        )
            .into_response(),
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Cycle listing failed");
            engine_error(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::request::{CycleRequest, SalaryRecordRequest, TimeEntryRequest, WorkingTermsRequest};
    use crate::config::PolicyLoader;
    use crate::models::{PayslipData, SalaryType};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let policy =
            PolicyLoader::load("./config/policies/default.yaml").expect("Failed to load policy");
        AppState::new(policy)
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn create_valid_request() -> PayslipRequest {
        PayslipRequest {
            user_id: "65f1a2b3c4d5e6f7a8b9c0d1".to_string(),
            cycle: CycleRequest {
                start_date: make_date("2024-01-01"),
                end_date: make_date("2024-01-31"),
            },
            salary_history: vec![SalaryRecordRequest {
                amount: Decimal::from(30_000),
                salary_type: SalaryType::Monthly,
                effective_from: make_date("2023-01-01"),
                working: WorkingTermsRequest {
                    hours_per_day: Decimal::from(8),
                    days_per_month: Decimal::from(26),
                },
                note: None,
            }],
            entries: vec![TimeEntryRequest {
                date: make_date("2024-01-03"),
                time_in: Some("09:00".to_string()),
                time_out: Some("17:00".to_string()),
                total_hours: Decimal::from(8),
                leave: None,
            }],
            policy: None,
        }
    }

    async fn post_json(router: Router, uri: &str, body: String) -> axum::response::Response {
        router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_api_001_valid_payslip_request_returns_200() {
        let router = create_router(create_test_state());
        let body = serde_json::to_string(&create_valid_request()).unwrap();

        let response = post_json(router, "/payslip", body).await;
        assert_eq!(response.status(), StatusCode::OK);

        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let payslip: PayslipData = serde_json::from_slice(&body).unwrap();
        assert_eq!(payslip.id, "PS-b9c0d1-20240101");
        assert_eq!(payslip.attendance.days_worked, 1);
    }

    #[tokio::test]
    async fn test_api_002_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let response = post_json(router, "/payslip", "{invalid json".to_string()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_api_003_missing_user_id_returns_400() {
        let router = create_router(create_test_state());

        let body = r#"{
            "cycle": {"start_date": "2024-01-01", "end_date": "2024-01-31"},
            "salary_history": []
        }"#;

        let response = post_json(router, "/payslip", body.to_string()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert!(
            error.message.contains("missing field")
                || error.message.to_lowercase().contains("user_id"),
            "Expected error message to mention missing field, got: {}",
            error.message
        );
    }

    #[tokio::test]
    async fn test_api_004_inverted_cycle_returns_400() {
        let router = create_router(create_test_state());

        let mut request = create_valid_request();
        request.cycle = CycleRequest {
            start_date: make_date("2024-01-31"),
            end_date: make_date("2024-01-01"),
        };
        let body = serde_json::to_string(&request).unwrap();

        let response = post_json(router, "/payslip", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_CYCLE");
    }

    #[tokio::test]
    async fn test_api_005_empty_salary_history_returns_400() {
        let router = create_router(create_test_state());

        let mut request = create_valid_request();
        request.salary_history.clear();
        let body = serde_json::to_string(&request).unwrap();

        let response = post_json(router, "/payslip", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "NO_APPLICABLE_SALARY");
    }

    #[tokio::test]
    async fn test_api_006_cycles_listing() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/cycles?start_day=19&count=3&from=2026-01-05")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let cycles: Vec<SalaryCycle> = serde_json::from_slice(&body).unwrap();
        assert_eq!(cycles.len(), 3);
        // Oldest first; the newest contains the anchor date.
        assert_eq!(cycles[2].start_date, make_date("2025-12-19"));
        assert_eq!(cycles[2].end_date, make_date("2026-01-18"));
        assert!(cycles[0].start_date < cycles[1].start_date);
    }

    #[tokio::test]
    async fn test_api_007_cycles_rejects_bad_start_day() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/cycles?start_day=29")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_CYCLE_START_DAY");
    }

    #[tokio::test]
    async fn test_api_008_projection_round_trip() {
        let router = create_router(create_test_state());

        let body = r#"{
            "base_salary": "27000",
            "salary_pay_type": "fixed_monthly",
            "salary_basis": "working_days_only",
            "cycle": {"start_date": "2024-01-01", "end_date": "2024-01-31"},
            "unpaid_leave_taken": "2"
        }"#;

        let response = post_json(router, "/projection", body.to_string()).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let output: crate::models::PaySlipOutput = serde_json::from_slice(&body).unwrap();
        // 27 working days at 1000/day, 2 unpaid.
        assert_eq!(output.base_pay, Decimal::from(25_000));
        assert_eq!(
            output.breakdown.deductions.unpaid_leave_deduction,
            Decimal::from(2_000)
        );
    }
}
