//! Turnover risk scoring for individual employees.
//!
//! A submission passes through the intake guard, which enforces the form's
//! domain ranges, and is then scored by seven hand-tuned factor curves. The
//! weighted sum is capped, classified into a tier and explained by its three
//! strongest factors together with tier-specific advice.

pub mod domain;
pub mod intake;
pub mod router;
pub(crate) mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{EmployeeProfile, FactorKind, ProfileSubmission, RiskTier};
pub use intake::{FieldBounds, IntakePolicy, ProfileGuard, ProfileViolation};
pub use router::{roster_row_view, turnover_router, AssessRequest, RosterRequest, RosterRowView};
pub use scoring::{
    AssessmentView, Recommendation, RiskAssessment, RiskFactor, ScoringError, TurnoverRiskScorer,
    HIGH_RISK_THRESHOLD, MODERATE_RISK_THRESHOLD, RISK_SCORE_CAP, TOP_FACTOR_COUNT,
    VERY_HIGH_RISK_THRESHOLD, WEIGHT_SCALE,
};
pub use service::{TurnoverRiskService, TurnoverServiceError};
