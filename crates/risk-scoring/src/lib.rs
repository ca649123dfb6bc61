//! Risk Scoring
//!
//! Turns a symptom severity and patient age into a risk percentage and maps
//! that percentage onto a Low/Moderate/High band.

mod band;
mod scorer;

pub use band::RiskBand;
pub use scorer::score;
