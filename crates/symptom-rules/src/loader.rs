//! CSV Rule Loading

use crate::error::RuleError;
use crate::table::{RuleRow, RuleTable};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

/// Columns the rule table header must carry
const REQUIRED_COLUMNS: [&str; 3] = ["symptom", "cause", "advice"];

/// Raw CSV record before normalization
#[derive(Debug, Deserialize)]
struct RawRule {
    #[serde(default)]
    symptom: Option<String>,
    #[serde(default)]
    cause: Option<String>,
    #[serde(default)]
    advice: Option<String>,
}

impl RuleTable {
    /// Load the rule table from a CSV file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RuleError> {
        let path = path.as_ref();
        info!("Loading symptom rules from {}", path.display());

        let file = File::open(path).map_err(|source| RuleError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_reader(file)
    }

    /// Load the rule table from any CSV source.
    ///
    /// Extra columns are ignored. Rows whose symptom is blank are skipped;
    /// blank cause or advice cells load as empty strings.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, RuleError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|header| header == column) {
                return Err(RuleError::MissingColumn(column));
            }
        }

        let mut rows = Vec::new();
        let mut dropped = 0usize;
        for record in csv_reader.deserialize::<RawRule>() {
            let raw = record?;
            let symptom = raw.symptom.unwrap_or_default();
            if symptom.trim().is_empty() {
                dropped += 1;
                continue;
            }
            rows.push(RuleRow::new(
                &symptom,
                raw.cause.unwrap_or_default(),
                raw.advice.unwrap_or_default(),
            ));
        }

        if dropped > 0 {
            warn!("Dropped {} rule rows with an empty symptom", dropped);
        }

        let table = RuleTable::from_rows(rows);
        info!("Loaded {} symptom rules", table.len());
        Ok(table)
    }
}
