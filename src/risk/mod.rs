use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::schema::RiskEstimateRequest;

/// Response body for `POST /api/risk/estimate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskEstimate {
    pub var: Decimal,
    pub beta: Decimal,
    pub sharpe_ratio: Decimal,
    pub max_drawdown: Decimal,
}

/// Placeholder risk model carried over from the prototype: VaR is the
/// weight total scaled by 1%, beta is pinned to 1, the remaining metrics
/// report zero. Real estimation needs a price-history source this service
/// does not have; the horizon is validated but unused until then.
pub fn estimate(request: &RiskEstimateRequest) -> RiskEstimate {
    let total_weight: Decimal = request.positions.iter().map(|p| p.weight).sum();

    RiskEstimate {
        var: total_weight * Decimal::new(1, 2),
        beta: Decimal::ONE,
        sharpe_ratio: Decimal::ZERO,
        max_drawdown: Decimal::ZERO,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
