//! Check Request and Input Validation

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use symptom_rules::normalize_symptom;

/// Allowed age range (years)
pub const AGE_RANGE: (u32, u32) = (1, 100);
/// Allowed severity range
pub const SEVERITY_RANGE: (u32, u32) = (1, 10);

/// Gender echoed back in the assessment notes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    #[serde(alias = "male")]
    Male,
    #[serde(alias = "female")]
    Female,
    #[serde(alias = "other")]
    Other,
}

impl Gender {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input of a single "Check Result" action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRequest {
    /// Selected symptom (normalized on lookup)
    pub symptom: String,
    /// Age in years
    #[serde(default = "default_age")]
    pub age: u32,
    #[serde(default)]
    pub gender: Gender,
    /// Severity slider value
    #[serde(default = "default_severity")]
    pub severity: u32,
}

fn default_age() -> u32 {
    25
}

fn default_severity() -> u32 {
    SEVERITY_RANGE.0
}

impl CheckRequest {
    /// Create a request with the form defaults for everything but the symptom
    pub fn new(symptom: impl Into<String>) -> Self {
        Self {
            symptom: symptom.into(),
            age: default_age(),
            gender: Gender::default(),
            severity: default_severity(),
        }
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = age;
        self
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    pub fn with_severity(mut self, severity: u32) -> Self {
        self.severity = severity;
        self
    }

    /// Check all fields against the form constraints
    pub fn validate(&self) -> Result<(), ValidationError> {
        if normalize_symptom(&self.symptom).is_empty() {
            return Err(ValidationError::EmptySymptom);
        }
        validate_range("age", self.age, AGE_RANGE)?;
        validate_range("severity", self.severity, SEVERITY_RANGE)?;
        Ok(())
    }
}

/// Check a form value against an inclusive range
pub fn validate_range(field: &'static str, value: u32, range: (u32, u32)) -> Result<(), ValidationError> {
    if value < range.0 || value > range.1 {
        Err(ValidationError::OutOfRange {
            field,
            value,
            min: range.0,
            max: range.1,
        })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_defaults() {
        let request: CheckRequest = serde_json::from_str(r#"{"symptom":"fever"}"#).unwrap();
        assert_eq!(request, CheckRequest::new("fever"));
        assert_eq!(request.age, 25);
        assert_eq!(request.severity, 1);
        assert_eq!(request.gender, Gender::Male);
    }

    #[test]
    fn test_gender_names() {
        let request: CheckRequest =
            serde_json::from_str(r#"{"symptom":"rash","gender":"other"}"#).unwrap();
        assert_eq!(request.gender, Gender::Other);

        let request: CheckRequest =
            serde_json::from_str(r#"{"symptom":"rash","gender":"Female"}"#).unwrap();
        assert_eq!(request.gender.to_string(), "Female");
    }

    #[test]
    fn test_bounds_accepted() {
        for (age, severity) in [(1, 1), (100, 10), (25, 5)] {
            let request = CheckRequest::new("fever").with_age(age).with_severity(severity);
            assert!(request.validate().is_ok());
        }
    }

    #[test]
    fn test_out_of_range_rejected() {
        let err = CheckRequest::new("fever").with_age(0).validate().unwrap_err();
        assert_eq!(
            err,
            ValidationError::OutOfRange { field: "age", value: 0, min: 1, max: 100 }
        );

        let err = CheckRequest::new("fever").with_severity(11).validate().unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { field: "severity", .. }));
        assert_eq!(err.to_string(), "severity value 11 is out of range [1, 10]");
    }

    #[test]
    fn test_empty_symptom_rejected() {
        let err = CheckRequest::new("   ").validate().unwrap_err();
        assert_eq!(err, ValidationError::EmptySymptom);
    }
}
