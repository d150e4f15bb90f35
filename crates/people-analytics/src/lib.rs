//! Turnover risk scoring and workforce metrics behind the people analytics dashboard.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
