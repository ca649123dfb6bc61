//! API Routes

pub mod check;
pub mod symptoms;
