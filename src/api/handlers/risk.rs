use axum::Json;
use serde_json::Value;

use crate::errors::AppError;
use crate::risk::{self, RiskEstimate};
use crate::schema;

use super::ApiResponse;

/// POST /api/risk/estimate — placeholder portfolio risk metrics for a
/// validated position set.
pub async fn estimate(Json(body): Json<Value>) -> Result<Json<ApiResponse<RiskEstimate>>, AppError> {
    let request = schema::validate_risk_estimate_request(&body)?;
    let estimate = risk::estimate(&request);

    Ok(ApiResponse::ok(estimate))
}
