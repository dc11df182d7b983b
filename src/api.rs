// 🌐 REST API with Axum
// Thin dispatcher: check request shape, call the calculator, wrap the result.

use crate::birth::KuaFormula;
use crate::compatibility::check_compatibility;
use crate::config::ServerConfig;
use crate::error::NumerologyError;
use crate::identifier::IdentifierKind;
use crate::name::calculate_name_number;
use crate::periods::parse_evaluation_date;
use crate::report::{IdentifierReport, NumerologyReport, ReportInput};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    config: Arc<ServerConfig>,
}

/// API Response wrapper
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            error: None,
        }
    }
}

impl ApiResponse<()> {
    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: (),
            error: Some(message.into()),
        }
    }
}

// ============================================================================
// Requests
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub name: String,
    pub dob: String,
    pub gender: String,
    /// Evaluation date, defaults to today
    #[serde(default)]
    pub target_date: Option<String>,
    /// Overrides the server's default Kua formula
    #[serde(default)]
    pub kua_formula: Option<KuaFormula>,
}

#[derive(Debug, Deserialize)]
pub struct MobileRequest {
    pub dob: String,
    pub mobile_number: String,
}

#[derive(Debug, Deserialize)]
pub struct VehicleRequest {
    pub dob: String,
    pub vehicle_number: String,
}

#[derive(Debug, Deserialize)]
pub struct HouseRequest {
    pub dob: String,
    pub house_number: String,
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET / - Service banner
async fn root() -> impl IntoResponse {
    Json(ApiResponse::ok("Numerology API is running"))
}

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::ok("OK"))
}

/// POST /api/analyze - Full report for a name, birth date and gender
async fn analyze(State(state): State<AppState>, Json(request): Json<AnalyzeRequest>) -> Response {
    let formula = request.kua_formula.unwrap_or(state.config.kua_formula);

    let result = evaluation_date(request.target_date.as_deref()).and_then(|today| {
        let input = ReportInput::new(&request.name, &request.dob, &request.gender)
            .with_kua_formula(formula);
        NumerologyReport::generate(&input, today)
    });

    respond(result, "analyze")
}

/// POST /api/analyze/mobile
async fn analyze_mobile(Json(request): Json<MobileRequest>) -> Response {
    let result = IdentifierReport::generate(&request.dob, IdentifierKind::Mobile, &request.mobile_number);
    respond(result, "analyze/mobile")
}

/// POST /api/analyze/vehicle
async fn analyze_vehicle(Json(request): Json<VehicleRequest>) -> Response {
    let result = IdentifierReport::generate(&request.dob, IdentifierKind::Vehicle, &request.vehicle_number);
    respond(result, "analyze/vehicle")
}

/// POST /api/analyze/house
async fn analyze_house(Json(request): Json<HouseRequest>) -> Response {
    let result = IdentifierReport::generate(&request.dob, IdentifierKind::House, &request.house_number);
    respond(result, "analyze/house")
}

/// GET /api/compatibility/:root/:number
///
/// Segments that are not non-negative integers become 0: an unknown root,
/// or a number off the chart.
async fn compatibility(Path((root, number)): Path<(String, String)>) -> impl IntoResponse {
    let root = root.trim().parse::<u32>().unwrap_or(0);
    let number = number.trim().parse::<u32>().unwrap_or(0);
    Json(ApiResponse::ok(check_compatibility(root, number)))
}

/// GET /api/name-number/:name
async fn name_number(Path(name): Path<String>) -> impl IntoResponse {
    Json(ApiResponse::ok(calculate_name_number(&name)))
}

fn evaluation_date(target: Option<&str>) -> Result<NaiveDate, NumerologyError> {
    match target {
        Some(date) => parse_evaluation_date(date),
        None => Ok(Local::now().date_naive()),
    }
}

fn respond<T: Serialize>(result: Result<T, NumerologyError>, endpoint: &str) -> Response {
    match result {
        Ok(data) => (StatusCode::OK, Json(ApiResponse::ok(data))).into_response(),
        Err(e) => {
            warn!(endpoint, error = %e, "rejected request");
            (StatusCode::BAD_REQUEST, Json(ApiResponse::err(e.to_string()))).into_response()
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn router(config: ServerConfig) -> Router {
    let state = AppState {
        config: Arc::new(config),
    };

    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/analyze", post(analyze))
        .route("/analyze/mobile", post(analyze_mobile))
        .route("/analyze/vehicle", post(analyze_vehicle))
        .route("/analyze/house", post(analyze_house))
        .route("/compatibility/:root/:number", get(compatibility))
        .route("/name-number/:name", get(name_number))
        .with_state(state);

    Router::new()
        .route("/", get(root))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
