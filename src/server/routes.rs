//! HTTP API routes
//!
//! Defines all REST API endpoints for the server.

use crate::coverage::lookup_coverage;
use crate::coverage::report::CoverageReport;
use crate::error::Error;
use crate::server::state::AppState;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::error;

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/coverage", get(coverage_handler))
        .route("/api/status", get(status_handler))
        .route("/api/operators", get(operators_handler))
        .with_state(state)
}

/// Coverage query parameters
#[derive(Debug, Deserialize)]
pub struct CoverageQuery {
    /// Textual address
    pub address: String,
}

/// API error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self.code.as_str() {
            "ADDRESS_NOT_FOUND" | "LOW_CONFIDENCE_MATCH" | "COVERAGE_NOT_FOUND"
            | "NO_CLOSEST_MATCH" => StatusCode::NOT_FOUND,
            "UPSTREAM_ERROR" => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status(), Json(self)).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let code = match &err {
            Error::Upstream(_) => "UPSTREAM_ERROR",
            Error::AddressNotFound(_) => "ADDRESS_NOT_FOUND",
            Error::LowConfidence { .. } => "LOW_CONFIDENCE_MATCH",
            Error::CoverageNotFound => "COVERAGE_NOT_FOUND",
            Error::NoClosestMatch => "NO_CLOSEST_MATCH",
            _ => "INTERNAL_ERROR",
        };

        // Anything unanticipated is logged here and surfaced as a generic
        // internal error, never as raw internals.
        let message = if code == "INTERNAL_ERROR" {
            error!("Internal server error: {}", err);
            "Internal server error".to_string()
        } else {
            err.to_string()
        };

        ApiError {
            error: message,
            code: code.to_string(),
        }
    }
}

/// Network coverage lookup endpoint
///
/// GET /api/coverage?address=...
async fn coverage_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CoverageQuery>,
) -> Result<Json<CoverageReport>, ApiError> {
    let outcome = lookup_coverage(
        &state.geocoder,
        &state.dataset,
        &state.config.search,
        &query.address,
    )
    .await?;

    Ok(Json(outcome.report))
}

/// Status response
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Server is running
    pub running: bool,
    /// Server version
    pub version: String,
    /// Number of coverage records loaded
    pub records: usize,
    /// Number of distinct operators in the dataset
    pub operators: usize,
}

/// Server status endpoint
///
/// GET /api/status
async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        running: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
        records: state.dataset.len(),
        operators: state.dataset.operators().len(),
    })
}

/// Operators list response
#[derive(Debug, Serialize, Deserialize)]
pub struct OperatorsResponse {
    pub operators: Vec<String>,
}

/// List distinct operators present in the dataset
///
/// GET /api/operators
async fn operators_handler(State(state): State<Arc<AppState>>) -> Json<OperatorsResponse> {
    Json(OperatorsResponse {
        operators: state.dataset.operators(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::coverage::{CoverageDataset, CoverageRecord};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn record(lng: f64, lat: f64, operator: &str) -> CoverageRecord {
        CoverageRecord {
            lng,
            lat,
            operator: operator.to_string(),
            g2: true,
            g3: true,
            g4: false,
        }
    }

    fn create_test_state() -> Arc<AppState> {
        let dataset = CoverageDataset::from_records(vec![
            record(2.380383, 48.860248, "Orange"),
            record(2.385, 48.862, "SFR"),
        ]);
        Arc::new(AppState::new(Config::default(), dataset))
    }

    #[tokio::test]
    async fn test_status_endpoint() {
        let state = create_test_state();
        let app = create_router(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/status")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let status: StatusResponse = serde_json::from_slice(&body).unwrap();

        assert!(status.running);
        assert_eq!(status.records, 2);
        assert_eq!(status.operators, 2);
    }

    #[tokio::test]
    async fn test_operators_endpoint() {
        let state = create_test_state();
        let app = create_router(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/operators")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let operators: OperatorsResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(operators.operators, vec!["Orange", "SFR"]);
    }

    #[tokio::test]
    async fn test_coverage_endpoint_missing_address() {
        let state = create_test_state();
        let app = create_router(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/coverage")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        // Query extraction rejects the request before the handler runs
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_api_error_status_codes() {
        let not_found = ApiError::from(Error::CoverageNotFound);
        assert_eq!(not_found.code, "COVERAGE_NOT_FOUND");
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let upstream = ApiError::from(Error::Upstream("boom".to_string()));
        assert_eq!(upstream.code, "UPSTREAM_ERROR");
        assert_eq!(upstream.status(), StatusCode::BAD_GATEWAY);

        let low = ApiError::from(Error::LowConfidence { score: 0.3 });
        assert_eq!(low.code, "LOW_CONFIDENCE_MATCH");
        assert_eq!(low.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_api_error_hides_internals() {
        let internal = ApiError::from(Error::Tolerance("reference latitude 90".to_string()));
        assert_eq!(internal.code, "INTERNAL_ERROR");
        assert_eq!(internal.error, "Internal server error");
        assert_eq!(internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
