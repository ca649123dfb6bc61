//! Assessment Report

use crate::advisor::Advice;
use crate::request::{CheckRequest, Gender};
use risk_scoring::RiskBand;
use serde::Serialize;
use symptom_rules::normalize_symptom;

/// Everything the result panel shows for one check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assessment {
    /// Symptom with its first letter capitalized
    pub symptom_display: String,
    pub cause: String,
    pub advice: String,
    /// False when the fallback advice was used
    pub matched: bool,
    pub risk_percent: u32,
    pub risk_band: RiskBand,
    /// e.g. "High Risk (85%)"
    pub risk_summary: String,
    pub gender: Gender,
    pub age: u32,
    pub severity: u32,
    /// Echo of the inputs that were considered
    pub notes: Vec<String>,
}

impl Assessment {
    pub(crate) fn new(request: &CheckRequest, advice: Advice<'_>, risk: u32, band: RiskBand) -> Self {
        Self {
            symptom_display: capitalize(&normalize_symptom(&request.symptom)),
            cause: advice.cause.to_string(),
            advice: advice.advice.to_string(),
            matched: advice.matched,
            risk_percent: risk,
            risk_band: band,
            risk_summary: band.summary(risk),
            gender: request.gender,
            age: request.age,
            severity: request.severity,
            notes: vec![
                format!("Gender Considered: {}", request.gender),
                format!("Age Considered: {} years", request.age),
                format!("Severity Score: {}/10", request.severity),
            ],
        }
    }
}

/// Upper-case the first character and lower-case the rest
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
