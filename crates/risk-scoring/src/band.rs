//! Risk Band Mapping

use serde::{Deserialize, Serialize};
use std::fmt;

/// Risk classification derived from a risk percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskBand {
    /// risk < 30
    Low,
    /// 30 <= risk < 70
    Moderate,
    /// risk >= 70
    High,
}

impl RiskBand {
    /// Lower bound of the moderate band
    pub const MODERATE_FROM: u32 = 30;
    /// Lower bound of the high band
    pub const HIGH_FROM: u32 = 70;

    /// Map a risk percentage to its band
    pub fn from_risk(risk: u32) -> Self {
        if risk < Self::MODERATE_FROM {
            RiskBand::Low
        } else if risk < Self::HIGH_FROM {
            RiskBand::Moderate
        } else {
            RiskBand::High
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            RiskBand::Low => "Low",
            RiskBand::Moderate => "Moderate",
            RiskBand::High => "High",
        }
    }

    /// Result line shown to the user, e.g. `Moderate Risk (45%)`
    pub fn summary(&self, risk: u32) -> String {
        format!("{} Risk ({}%)", self.label(), risk)
    }
}

impl fmt::Display for RiskBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
