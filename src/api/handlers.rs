//! HTTP request handlers for the Tardiness Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::classification::{Admission, admit, backfill, classify_raw, summarize};
use crate::models::{ArrivalRecord, TardinessRecord};

use super::request::{BackfillRequest, ClassifyRequest, RegistrationRequest, SummaryRequest};
use super::response::{ApiError, ApiErrorResponse, BackfillResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/classify", post(classify_handler))
        .route("/tardiness", post(register_handler))
        .route("/backfill", post(backfill_handler))
        .route("/summary", post(summary_handler))
        .route("/policy", get(policy_handler))
        .with_state(state)
}

/// Handler for POST /classify.
///
/// Classifies a single arrival against the configured cutoff.
async fn classify_handler(
    State(state): State<AppState>,
    payload: Result<Json<ClassifyRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match classify_raw(
        request.hour,
        request.minute,
        request.certificate_provided,
        state.config().cutoff(),
    ) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                hour = request.hour,
                minute = request.minute,
                concept = %result.concept,
                "Arrival classified"
            );
            (StatusCode::OK, Json(result)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Classification failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /tardiness.
///
/// Classifies the arrival, applies the submission policy and returns the
/// record the caller should persist.
async fn register_handler(
    State(state): State<AppState>,
    payload: Result<Json<RegistrationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing tardiness registration");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let config = state.config();
    let arrival_time = match request.local_arrival_time(config.timezone()) {
        Ok(time) => time,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid arrival time");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let record = match TardinessRecord::new(
        request.student_id,
        request.reason,
        ArrivalRecord::new(arrival_time, request.certificate_provided),
        request.certificate_file,
        config.cutoff(),
        Utc::now(),
    ) {
        Ok(record) => record,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid tardiness record");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    if let Admission::Rejected { reason, .. } =
        admit(record.classification, config.submission_policy())
    {
        warn!(
            correlation_id = %correlation_id,
            student_id = %record.student_id,
            arrival_time = %record.arrival_time,
            "Registration rejected: certificate required"
        );
        return ApiErrorResponse::bad_request(ApiError::certificate_required(reason))
            .into_response();
    }

    info!(
        correlation_id = %correlation_id,
        record_id = %record.id,
        student_id = %record.student_id,
        arrival_time = %record.arrival_time,
        concept = %record.classification.concept,
        "Tardiness registered"
    );
    (StatusCode::CREATED, Json(record)).into_response()
}

/// Handler for POST /backfill.
///
/// Reclassifies historical rows; bad rows are reported per row.
async fn backfill_handler(
    State(state): State<AppState>,
    payload: Result<Json<BackfillRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let outcomes = backfill(&request.records, state.config().cutoff());
    let summary = summarize(outcomes.iter().filter_map(|o| o.classification()));
    let failed = outcomes.len() - summary.total as usize;

    info!(
        correlation_id = %correlation_id,
        records = outcomes.len(),
        failed,
        "Backfill processed"
    );

    (
        StatusCode::OK,
        Json(BackfillResponse {
            outcomes,
            summary,
            failed,
        }),
    )
        .into_response()
}

/// Handler for POST /summary.
async fn summary_handler(payload: Result<Json<SummaryRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    (StatusCode::OK, Json(summarize(&request.results))).into_response()
}

/// Handler for GET /policy.
async fn policy_handler(State(state): State<AppState>) -> Response {
    (StatusCode::OK, Json(state.config().settings().view())).into_response()
}

/// Turns a JSON extraction failure into a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
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
    };
    ApiErrorResponse::bad_request(error).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use crate::models::{ClassificationResult, Concept, TardinessSummary};
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/policy.yaml").expect("Failed to load config");
        AppState::new(config)
    }

    async fn post_json(router: Router, uri: &str, body: String) -> (StatusCode, Value) {
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_classify_valid_request_returns_200() {
        let router = create_router(create_test_state());
        let body = json!({"hour": 9, "minute": 31, "certificate_provided": true});

        let (status, json) = post_json(router, "/classify", body.to_string()).await;

        assert_eq!(status, StatusCode::OK);
        let result: ClassificationResult = serde_json::from_value(json).unwrap();
        assert_eq!(result, ClassificationResult::LATE_PRESENT);
    }

    #[tokio::test]
    async fn test_classify_invalid_time_returns_400() {
        let router = create_router(create_test_state());
        let body = json!({"hour": 24, "minute": 0, "certificate_provided": false});

        let (status, json) = post_json(router, "/classify", body.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_value(json).unwrap();
        assert_eq!(error.code, "INVALID_TIME");
    }

    #[tokio::test]
    async fn test_classify_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let (status, json) = post_json(router, "/classify", "{invalid json".to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_classify_missing_certificate_flag_returns_400() {
        let router = create_router(create_test_state());
        let body = json!({"hour": 9, "minute": 0});

        let (status, json) = post_json(router, "/classify", body.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert!(json["message"].as_str().unwrap().contains("certificate_provided"));
    }

    #[tokio::test]
    async fn test_register_on_time_returns_201() {
        let router = create_router(create_test_state());
        let body = json!({
            "student_id": "stu_001",
            "reason": "traffic",
            "arrival_time": "08:43",
            "certificate_provided": false
        });

        let (status, json) = post_json(router, "/tardiness", body.to_string()).await;

        assert_eq!(status, StatusCode::CREATED);
        let record: TardinessRecord = serde_json::from_value(json).unwrap();
        assert_eq!(record.student_id, "stu_001");
        assert_eq!(record.classification.concept, Concept::Present);
    }

    #[tokio::test]
    async fn test_register_late_without_certificate_is_rejected() {
        let router = create_router(create_test_state());
        let body = json!({
            "student_id": "stu_001",
            "arrival_time": "11:33",
            "certificate_provided": false
        });

        let (status, json) = post_json(router, "/tardiness", body.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "CERTIFICATE_REQUIRED");
    }

    #[tokio::test]
    async fn test_register_late_without_certificate_stored_when_policy_allows() {
        let config = ConfigLoader::load("./config/store_as_absent.yaml").unwrap();
        let router = create_router(AppState::new(config));
        let body = json!({
            "student_id": "stu_001",
            "arrival_time": "08:30",
            "certificate_provided": false
        });

        let (status, json) = post_json(router, "/tardiness", body.to_string()).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["classification"]["concept"], "absent");
        assert_eq!(json["classification"]["certificate_required"], true);
    }

    #[tokio::test]
    async fn test_register_converts_instant_to_local_time() {
        let router = create_router(create_test_state());
        // 12:31 UTC is 09:31 at UTC-03:00
        let body = json!({
            "student_id": "stu_002",
            "arrived_at": "2026-03-09T12:31:00Z",
            "certificate_provided": true,
            "certificate_file": "certificates/stu_002.pdf"
        });

        let (status, json) = post_json(router, "/tardiness", body.to_string()).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["arrival_time"], "09:31");
        assert_eq!(json["classification"]["concept"], "late_present");
        assert_eq!(json["certificate_file"], "certificates/stu_002.pdf");
    }

    #[tokio::test]
    async fn test_register_blank_student_returns_400() {
        let router = create_router(create_test_state());
        let body = json!({
            "student_id": "",
            "arrival_time": "08:00",
            "certificate_provided": false
        });

        let (status, json) = post_json(router, "/tardiness", body.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "INVALID_RECORD");
    }

    #[tokio::test]
    async fn test_register_blank_student_late_without_certificate_is_invalid_record() {
        let router = create_router(create_test_state());
        let body = json!({
            "student_id": " ",
            "arrival_time": "11:33",
            "certificate_provided": false
        });

        let (status, json) = post_json(router, "/tardiness", body.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "INVALID_RECORD");
    }

    #[tokio::test]
    async fn test_classify_negative_hour_is_malformed_json() {
        let router = create_router(create_test_state());
        let body = json!({"hour": -1, "minute": 0, "certificate_provided": false});

        let (status, json) = post_json(router, "/classify", body.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_summary_rejects_contradictory_result() {
        let router = create_router(create_test_state());
        let body = json!({"results": [
            {"concept": "present", "certificate_required": true}
        ]});

        let (status, json) = post_json(router, "/summary", body.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_backfill_reports_per_row() {
        let router = create_router(create_test_state());
        let body = json!({"records": [
            {"student_id": "stu_1", "arrival_time": "08:43"},
            {"student_id": "stu_2", "arrival_time": "10:00"},
            {"student_id": "stu_3", "arrival_time": "10:00", "certificate_provided": true},
            {"student_id": "stu_4", "arrival_time": "99:99"}
        ]});

        let (status, json) = post_json(router, "/backfill", body.to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["outcomes"].as_array().unwrap().len(), 4);
        assert_eq!(json["outcomes"][1]["classification"]["concept"], "absent");
        assert_eq!(json["outcomes"][3]["status"], "failed");
        assert_eq!(json["failed"], 1);
        assert_eq!(json["summary"]["total"], 3);
    }

    #[tokio::test]
    async fn test_summary_counts_concepts() {
        let router = create_router(create_test_state());
        let body = json!({"results": [
            {"concept": "present", "certificate_required": false},
            {"concept": "absent", "certificate_required": true}
        ]});

        let (status, json) = post_json(router, "/summary", body.to_string()).await;

        assert_eq!(status, StatusCode::OK);
        let summary: TardinessSummary = serde_json::from_value(json).unwrap();
        assert_eq!(summary.total, 2);
        assert_eq!(summary.absent, 1);
    }

    #[tokio::test]
    async fn test_policy_returns_settings() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(Request::builder().uri("/policy").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["cutoff"], "09:30");
        assert_eq!(json["cutoff_minutes"], 570);
        assert_eq!(json["utc_offset_minutes"], -180);
        assert_eq!(json["submission_policy"], "reject_absent");
    }
}
