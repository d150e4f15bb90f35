use chrono::NaiveDate;
use tracing::{debug, warn};

use super::domain::ProfileSubmission;
use super::intake::{ProfileGuard, ProfileViolation};
use super::scoring::{RiskAssessment, ScoringError, TurnoverRiskScorer};
use crate::workflows::roster::{RosterEntry, RosterRowError};

/// Service composing the intake guard and the turnover risk scorer.
#[derive(Debug, Clone, Default)]
pub struct TurnoverRiskService {
    guard: ProfileGuard,
    scorer: TurnoverRiskScorer,
    reference_date: Option<NaiveDate>,
}

impl TurnoverRiskService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_guard(guard: ProfileGuard) -> Self {
        Self {
            guard,
            scorer: TurnoverRiskScorer::new(),
            reference_date: None,
        }
    }

    /// Pin the evaluation date used when a caller does not supply one.
    pub fn with_reference_date(mut self, reference_date: Option<NaiveDate>) -> Self {
        self.reference_date = reference_date;
        self
    }

    /// Requested date, else the pinned reference date, else the local calendar date.
    pub fn resolve_today(&self, requested: Option<NaiveDate>) -> NaiveDate {
        requested
            .or(self.reference_date)
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }

    /// Validate and score one submission. Failures are logged and returned, never panicked on.
    pub fn assess(
        &self,
        submission: ProfileSubmission,
        today: NaiveDate,
    ) -> Result<RiskAssessment, TurnoverServiceError> {
        let result = self
            .guard
            .profile_from_submission(submission, today)
            .map_err(TurnoverServiceError::from)
            .and_then(|profile| {
                self.scorer
                    .assess(&profile)
                    .map_err(TurnoverServiceError::from)
            });

        match &result {
            Ok(assessment) => debug!(
                tier = %assessment.tier,
                risk_score = assessment.risk_score,
                "turnover risk assessed"
            ),
            Err(err) => warn!(error = %err, "could not compute risk"),
        }

        result
    }

    /// Score each roster entry independently; one failing row never aborts the batch.
    pub fn assess_batch(
        &self,
        entries: Vec<RosterEntry>,
        today: NaiveDate,
    ) -> Vec<Result<RiskAssessment, TurnoverServiceError>> {
        let results: Vec<_> = entries
            .into_iter()
            .map(|entry| match entry {
                Ok(submission) => self.assess(submission, today),
                Err(err) => {
                    warn!(row = err.row, error = %err, "could not compute risk");
                    Err(TurnoverServiceError::from(err))
                }
            })
            .collect();

        let failed = results.iter().filter(|result| result.is_err()).count();
        debug!(rows = results.len(), failed, "roster scored");
        results
    }
}

/// Error raised by the turnover risk service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TurnoverServiceError {
    #[error("could not compute risk: {0}")]
    Validation(#[from] ProfileViolation),
    #[error("could not compute risk: {0}")]
    UnreadableRow(#[from] RosterRowError),
    #[error(transparent)]
    Computation(#[from] ScoringError),
}
