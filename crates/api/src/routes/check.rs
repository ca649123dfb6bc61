//! Check Routes

use advisor::{validate_range, Assessment, CheckRequest, RiskBand, AGE_RANGE, SEVERITY_RANGE};
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::error::ApiError;
use crate::AppState;

/// Query parameters for the score endpoint
#[derive(Debug, Deserialize)]
pub struct ScoreQuery {
    pub severity: u32,
    pub age: u32,
}

/// Response for the score endpoint
#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub risk_percent: u32,
    pub risk_band: RiskBand,
    pub risk_summary: String,
}

/// Run a "Check Result" action
pub async fn post_check(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CheckRequest>, JsonRejection>,
) -> Result<Json<Assessment>, ApiError> {
    let Json(request) = payload?;
    let assessment = state.advisor.check(&request)?;

    metrics::counter!("symptom_checks_total").increment(1);
    metrics::histogram!("symptom_risk_percent").record(f64::from(assessment.risk_percent));
    if !assessment.matched {
        metrics::counter!("symptom_lookup_misses_total").increment(1);
    }

    info!(
        "Check: {} -> {}",
        assessment.symptom_display, assessment.risk_summary
    );

    Ok(Json(assessment))
}

/// Risk percentage and band for a severity/age pair
pub async fn get_score(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ScoreQuery>, QueryRejection>,
) -> Result<Json<ScoreResponse>, ApiError> {
    let Query(params) = query?;
    validate_range("severity", params.severity, SEVERITY_RANGE)?;
    validate_range("age", params.age, AGE_RANGE)?;

    let risk = state.advisor.score(params.severity, params.age);
    let band = RiskBand::from_risk(risk);

    Ok(Json(ScoreResponse {
        risk_percent: risk,
        risk_band: band,
        risk_summary: band.summary(risk),
    }))
}
