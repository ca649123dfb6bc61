//! Symptom Advisor Implementation

use crate::error::ValidationError;
use crate::report::Assessment;
use crate::request::CheckRequest;
use risk_scoring::RiskBand;
use serde::{Deserialize, Serialize};
use std::path::Path;
use symptom_rules::{MatchPolicy, RuleError, RuleTable};
use tracing::{debug, info};

/// Cause returned when no rule matches
pub const FALLBACK_CAUSE: &str = "Unknown cause";
/// Advice returned when no rule matches
pub const FALLBACK_ADVICE: &str = "Rest, drink water, and monitor the symptom.";

/// Advisor configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvisorConfig {
    /// How symptom queries are matched against rule keys
    #[serde(default)]
    pub match_policy: MatchPolicy,
}

/// Cause/advice pair answered for a symptom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Advice<'a> {
    pub cause: &'a str,
    pub advice: &'a str,
    /// Whether a rule matched (false means the fallback pair)
    pub matched: bool,
}

impl Advice<'static> {
    fn fallback() -> Self {
        Self {
            cause: FALLBACK_CAUSE,
            advice: FALLBACK_ADVICE,
            matched: false,
        }
    }
}

impl<'a> Advice<'a> {
    /// The (cause, advice) pair
    pub fn pair(&self) -> (&'a str, &'a str) {
        (self.cause, self.advice)
    }
}

/// Rule lookup and risk scoring over a load-once rule table.
///
/// Holds no mutable state; share it behind an `Arc` across request handlers.
#[derive(Debug, Clone)]
pub struct SymptomAdvisor {
    table: RuleTable,
    config: AdvisorConfig,
}

impl SymptomAdvisor {
    /// Create an advisor over an already loaded table
    pub fn new(table: RuleTable, config: AdvisorConfig) -> Self {
        info!(
            "Creating symptom advisor: {} rules, {} matching",
            table.len(),
            config.match_policy.as_str()
        );
        Self { table, config }
    }

    /// Load the rule table from a CSV file and create an advisor
    pub fn from_path(path: impl AsRef<Path>, config: AdvisorConfig) -> Result<Self, RuleError> {
        let table = RuleTable::from_path(path)?;
        Ok(Self::new(table, config))
    }

    /// Look up cause and advice for a symptom. Never fails: an unknown
    /// symptom yields the fallback pair.
    pub fn lookup(&self, symptom: &str) -> Advice<'_> {
        match self.table.find(symptom, self.config.match_policy) {
            Some(row) => Advice {
                cause: &row.cause,
                advice: &row.advice,
                matched: true,
            },
            None => {
                debug!("No rule for symptom '{}', using fallback", symptom.trim());
                Advice::fallback()
            }
        }
    }

    /// Risk percentage for a severity and age
    pub fn score(&self, severity: u32, age: u32) -> u32 {
        risk_scoring::score(severity, age)
    }

    /// Run the full "check result" action for one form submission
    pub fn check(&self, request: &CheckRequest) -> Result<Assessment, ValidationError> {
        request.validate()?;

        let advice = self.lookup(&request.symptom);
        let risk = self.score(request.severity, request.age);
        let band = RiskBand::from_risk(risk);

        debug!(
            "Checked '{}': risk {}% ({}), matched={}",
            request.symptom.trim(),
            risk,
            band,
            advice.matched
        );

        Ok(Assessment::new(request, advice, risk, band))
    }

    /// Symptom options: distinct, sorted, normalized
    pub fn symptoms(&self) -> Vec<&str> {
        self.table.symptoms()
    }

    /// The underlying rule table
    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    /// Active configuration
    pub fn config(&self) -> &AdvisorConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::Gender;
    use proptest::prelude::*;
    use symptom_rules::RuleRow;

    fn rules() -> RuleTable {
        RuleTable::from_rows(vec![
            RuleRow::new("Dry Cough", "Allergy", "Avoid dust"),
            RuleRow::new("Cough", "Common cold", "Warm fluids"),
            RuleRow::new("Fever", "Viral infection", "Rest and paracetamol"),
        ])
    }

    fn advisor(policy: MatchPolicy) -> SymptomAdvisor {
        SymptomAdvisor::new(rules(), AdvisorConfig { match_policy: policy })
    }

    #[test]
    fn test_lookup_hit() {
        let advisor = advisor(MatchPolicy::Contains);
        let advice = advisor.lookup("fever");
        assert!(advice.matched);
        assert_eq!(advice.pair(), ("Viral infection", "Rest and paracetamol"));
    }

    #[test]
    fn test_lookup_normalizes_query() {
        let advisor = advisor(MatchPolicy::Exact);
        assert_eq!(advisor.lookup("   FEVER  "), advisor.lookup("fever"));
    }

    #[test]
    fn test_lookup_fallback() {
        for policy in [MatchPolicy::Contains, MatchPolicy::Exact] {
            let advisor = advisor(policy);
            let advice = advisor.lookup("zzz-not-a-symptom");
            assert!(!advice.matched);
            assert_eq!(
                advice.pair(),
                ("Unknown cause", "Rest, drink water, and monitor the symptom.")
            );
        }
    }

    #[test]
    fn test_fallback_is_static() {
        let advice: Advice<'static> = Advice::fallback();
        assert_eq!(advice.pair(), (FALLBACK_CAUSE, FALLBACK_ADVICE));
        assert!(!advice.matched);
    }

    #[test]
    fn test_lookup_repeatable() {
        let advisor = advisor(MatchPolicy::Contains);
        let first = advisor.lookup("cough");
        let second = advisor.lookup("cough");
        assert_eq!(first, second);
        assert_eq!(advisor.table().len(), 3);
    }

    #[test]
    fn test_policy_is_configurable() {
        let contains = advisor(MatchPolicy::Contains);
        let exact = advisor(MatchPolicy::Exact);
        assert_eq!(contains.lookup("cough").cause, "Allergy");
        assert_eq!(exact.lookup("cough").cause, "Common cold");
    }

    #[test]
    fn test_score_delegates() {
        let advisor = advisor(MatchPolicy::Contains);
        assert_eq!(advisor.score(5, 30), 50);
        assert_eq!(advisor.score(7, 60), 100);
    }

    #[test]
    fn test_check_assessment() {
        let advisor = advisor(MatchPolicy::Exact);
        let request = CheckRequest::new("fever")
            .with_age(62)
            .with_gender(Gender::Female)
            .with_severity(4);

        let assessment = advisor.check(&request).unwrap();
        assert_eq!(assessment.symptom_display, "Fever");
        assert_eq!(assessment.cause, "Viral infection");
        assert_eq!(assessment.risk_percent, 55);
        assert_eq!(assessment.risk_band, RiskBand::Moderate);
        assert_eq!(assessment.risk_summary, "Moderate Risk (55%)");
        assert!(assessment.matched);
    }

    #[test]
    fn test_check_rejects_invalid_input() {
        let advisor = advisor(MatchPolicy::Exact);
        let request = CheckRequest::new("fever").with_severity(0);
        assert!(matches!(
            advisor.check(&request),
            Err(ValidationError::OutOfRange { field: "severity", .. })
        ));
    }

    proptest! {
        #[test]
        fn prop_lookup_ignores_case_and_padding(
            left in " {0,4}",
            right in "[ \\t]{0,4}",
            upper in any::<bool>(),
        ) {
            let advisor = advisor(MatchPolicy::Exact);
            let name = if upper { "FEVER" } else { "Fever" };
            let query = format!("{}{}{}", left, name, right);
            prop_assert_eq!(advisor.lookup(&query), advisor.lookup("fever"));
        }
    }

    #[test]
    fn test_config_deserializes() {
        let config: AdvisorConfig = serde_json::from_str(r#"{"match_policy":"exact"}"#).unwrap();
        assert_eq!(config.match_policy, MatchPolicy::Exact);

        let config: AdvisorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, AdvisorConfig::default());
    }
}
