//! Symptom Advisor
//!
//! Combines the immutable rule table with risk scoring to answer a single
//! "check result" request: cause, advice, risk percentage and band.

mod advisor;
mod error;
mod report;
mod request;

pub use advisor::{Advice, AdvisorConfig, SymptomAdvisor, FALLBACK_ADVICE, FALLBACK_CAUSE};
pub use error::ValidationError;
pub use report::Assessment;
pub use request::{validate_range, CheckRequest, Gender, AGE_RANGE, SEVERITY_RANGE};

pub use risk_scoring::RiskBand;
pub use symptom_rules::{MatchPolicy, RuleError, RuleRow, RuleTable};
