//! Symptom Routes

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::ApiError;
use crate::AppState;

/// Response for the symptom options endpoint
#[derive(Debug, Serialize)]
pub struct SymptomListResponse {
    pub data: Vec<String>,
    pub count: usize,
}

/// Query parameters for the lookup endpoint
#[derive(Debug, Deserialize)]
pub struct LookupQuery {
    pub symptom: String,
}

/// Response for the lookup endpoint
#[derive(Debug, Serialize)]
pub struct LookupResponse {
    pub symptom: String,
    pub cause: String,
    pub advice: String,
    pub matched: bool,
}

/// Distinct, sorted symptom options
pub async fn get_symptoms(State(state): State<Arc<AppState>>) -> Json<SymptomListResponse> {
    let data: Vec<String> = state
        .advisor
        .symptoms()
        .into_iter()
        .map(str::to_string)
        .collect();

    Json(SymptomListResponse {
        count: data.len(),
        data,
    })
}

/// Cause and advice for a single symptom
pub async fn get_lookup(
    State(state): State<Arc<AppState>>,
    query: Result<Query<LookupQuery>, QueryRejection>,
) -> Result<Json<LookupResponse>, ApiError> {
    let Query(params) = query?;
    let advice = state.advisor.lookup(&params.symptom);
    if !advice.matched {
        metrics::counter!("symptom_lookup_misses_total").increment(1);
    }

    Ok(Json(LookupResponse {
        cause: advice.cause.to_string(),
        advice: advice.advice.to_string(),
        matched: advice.matched,
        symptom: params.symptom,
    }))
}
