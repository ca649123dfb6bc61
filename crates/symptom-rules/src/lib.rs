//! Symptom Rule Table
//!
//! Loads the symptom -> (cause, advice) rules once and answers lookups
//! against the immutable, normalized table.

mod error;
mod loader;
mod normalizer;
mod table;

pub use error::RuleError;
pub use normalizer::normalize_symptom;
pub use table::{MatchPolicy, RuleRow, RuleTable};
