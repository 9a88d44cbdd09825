use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde_json::Value;
use tracing::debug;

use super::views::{EstimationView, RatioView};
use super::{CalculatorService, EstimationRequest, RatioRequest, ReportRequest};
use crate::error::AppError;
use crate::financial::{DebtCalculation, FinancesInput, FinancialReport};

/// Router builder exposing the calculators over HTTP.
pub fn calculator_router(service: Arc<CalculatorService>) -> Router {
    Router::new()
        .route("/api/v1/debts", post(debts_handler))
        .route("/api/v1/ratio", post(ratio_handler))
        .route("/api/v1/estimation", post(estimation_handler))
        .route("/api/v1/report", post(report_handler))
        .with_state(service)
}

pub(crate) async fn debts_handler(
    State(service): State<Arc<CalculatorService>>,
    Json(body): Json<Value>,
) -> Result<Json<DebtCalculation>, AppError> {
    let finances: FinancesInput = service.decode(body)?;
    let debts = service.debts(&finances);
    debug!(total = debts.total_monthly_debts, "computed monthly debts");
    Ok(Json(debts))
}

pub(crate) async fn ratio_handler(
    State(service): State<Arc<CalculatorService>>,
    Json(body): Json<Value>,
) -> Result<Json<RatioView>, AppError> {
    let request: RatioRequest = service.decode(body)?;
    let view = service.ratio(&request);
    debug!(ratio = view.ratio, category = view.label, "analyzed debt ratio");
    Ok(Json(view))
}

pub(crate) async fn estimation_handler(
    State(service): State<Arc<CalculatorService>>,
    Json(body): Json<Value>,
) -> Result<Json<EstimationView>, AppError> {
    let request: EstimationRequest = service.decode(body)?;
    let view = service.estimate(&request);
    debug!(
        min = view.estimation.estimated_rent_min,
        max = view.estimation.estimated_rent_max,
        "estimated rent range"
    );
    Ok(Json(view))
}

pub(crate) async fn report_handler(
    State(service): State<Arc<CalculatorService>>,
    Json(body): Json<Value>,
) -> Result<Json<FinancialReport<FinancesInput>>, AppError> {
    let request: ReportRequest = service.decode(body)?;
    let report = service.report(&request);
    debug!(
        risk = report.budget_compatibility.risk_level.label(),
        "generated financial report"
    );
    Ok(Json(report))
}
