//! Rule Table Implementation

use crate::normalizer::normalize_symptom;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

/// How a query is compared against the stored symptom keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchPolicy {
    /// Stored symptom contains the query as a literal substring
    #[default]
    Contains,
    /// Stored symptom equals the query
    Exact,
}

impl MatchPolicy {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchPolicy::Contains => "contains",
            MatchPolicy::Exact => "exact",
        }
    }

    /// Check a normalized stored key against a normalized query
    pub fn matches(&self, key: &str, query: &str) -> bool {
        match self {
            MatchPolicy::Contains => key.contains(query),
            MatchPolicy::Exact => key == query,
        }
    }
}

/// One symptom rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleRow {
    /// Normalized lookup key
    pub symptom: String,
    /// Free-text explanation
    pub cause: String,
    /// Free-text recommendation
    pub advice: String,
}

impl RuleRow {
    /// Create a rule, normalizing the symptom key
    pub fn new(symptom: &str, cause: impl Into<String>, advice: impl Into<String>) -> Self {
        Self {
            symptom: normalize_symptom(symptom),
            cause: cause.into(),
            advice: advice.into(),
        }
    }
}

/// Immutable, ordered set of symptom rules.
///
/// Source order is preserved: when several rows match a query the first one
/// wins. Rows with an empty symptom key never enter the table.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    rows: Vec<RuleRow>,
}

impl RuleTable {
    /// Build a table from rows, dropping rows whose normalized symptom is empty
    pub fn from_rows(rows: impl IntoIterator<Item = RuleRow>) -> Self {
        let rows = rows
            .into_iter()
            .map(|row| RuleRow {
                symptom: normalize_symptom(&row.symptom),
                ..row
            })
            .filter(|row| !row.symptom.is_empty())
            .collect();

        Self { rows }
    }

    /// Find the first rule matching `query` under `policy`.
    ///
    /// The query is normalized first; a query that normalizes to the empty
    /// string matches nothing.
    pub fn find(&self, query: &str, policy: MatchPolicy) -> Option<&RuleRow> {
        let query = normalize_symptom(query);
        if query.is_empty() {
            return None;
        }

        let found = self
            .rows
            .iter()
            .find(|row| policy.matches(&row.symptom, &query));

        debug!(
            "Rule lookup '{}' ({}): {}",
            query,
            policy.as_str(),
            if found.is_some() { "hit" } else { "miss" }
        );
        found
    }

    /// Distinct symptom keys in sorted order
    pub fn symptoms(&self) -> Vec<&str> {
        self.rows
            .iter()
            .map(|row| row.symptom.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// All rules in source order
    pub fn rows(&self) -> &[RuleRow] {
        &self.rows
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table holds no rules
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
