pub(crate) mod curves;
pub(crate) mod tiers;
mod weights;

pub use tiers::Recommendation;
pub use weights::{
    HIGH_RISK_THRESHOLD, MODERATE_RISK_THRESHOLD, RISK_SCORE_CAP, VERY_HIGH_RISK_THRESHOLD,
    WEIGHT_SCALE,
};

use super::domain::{EmployeeProfile, FactorKind, RiskTier};
use serde::{Deserialize, Serialize};

/// Number of factors surfaced as the explanation of a score.
pub const TOP_FACTOR_COUNT: usize = 3;

/// Stateless scorer mapping a profile to a turnover risk assessment.
#[derive(Debug, Clone, Copy, Default)]
pub struct TurnoverRiskScorer;

impl TurnoverRiskScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn assess(&self, profile: &EmployeeProfile) -> Result<RiskAssessment, ScoringError> {
        let mut factors = Vec::with_capacity(FactorKind::ALL.len());
        for (name, raw_score) in curves::raw_scores(profile) {
            if !raw_score.is_finite() {
                return Err(ScoringError::NonFiniteFactor { factor: name });
            }
            factors.push(RiskFactor::new(name, raw_score));
        }

        let weighted = weighted_sum(&factors);
        if !weighted.is_finite() {
            return Err(ScoringError::NonFiniteAggregate);
        }
        let risk_score = combine(&factors);

        rank(&mut factors);
        let top_factors: Vec<FactorKind> = factors
            .iter()
            .take(TOP_FACTOR_COUNT)
            .map(|factor| factor.name)
            .collect();

        let tier = tiers::classify(risk_score);
        let recommendations = tiers::recommendations(tier, &top_factors);

        Ok(RiskAssessment {
            risk_score,
            tier,
            factors,
            top_factors,
            recommendations,
        })
    }
}

/// One scored dimension of the assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFactor {
    pub name: FactorKind,
    pub raw_score: f64,
    pub weight: f64,
    pub weighted_impact: f64,
}

impl RiskFactor {
    pub fn new(name: FactorKind, raw_score: f64) -> Self {
        let weight = name.weight();
        Self {
            name,
            raw_score,
            weight,
            weighted_impact: raw_score * weight,
        }
    }
}

/// Scorer output. `factors` is ranked by weighted impact, highest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub risk_score: f64,
    pub tier: RiskTier,
    pub factors: Vec<RiskFactor>,
    pub top_factors: Vec<FactorKind>,
    pub recommendations: Vec<Recommendation>,
}

impl RiskAssessment {
    pub fn headline(&self) -> String {
        tiers::headline(self.tier, self.risk_score)
    }

    pub fn is_very_high(&self) -> bool {
        self.risk_score > VERY_HIGH_RISK_THRESHOLD
    }

    pub fn factor(&self, name: FactorKind) -> Option<&RiskFactor> {
        self.factors.iter().find(|factor| factor.name == name)
    }

    pub fn view(&self) -> AssessmentView {
        AssessmentView {
            risk_score: (self.risk_score * 100.0).round() / 100.0,
            risk_percent: self.risk_score * 100.0,
            tier: self.tier.label(),
            headline: self.headline(),
            factors: self.factors.clone(),
            top_factors: self.top_factors.clone(),
            recommendations: self
                .recommendations
                .iter()
                .map(|advice| advice.text.clone())
                .collect(),
        }
    }
}

/// Display-ready projection of an assessment for API and CLI callers.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentView {
    pub risk_score: f64,
    pub risk_percent: f64,
    pub tier: &'static str,
    pub headline: String,
    pub factors: Vec<RiskFactor>,
    pub top_factors: Vec<FactorKind>,
    pub recommendations: Vec<String>,
}

/// Raised when the formulas cannot produce a usable number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoringError {
    #[error("could not compute risk: {factor} factor is not a finite number")]
    NonFiniteFactor { factor: FactorKind },
    #[error("could not compute risk: weighted sum is not a finite number")]
    NonFiniteAggregate,
}

pub(crate) fn weighted_sum(factors: &[RiskFactor]) -> f64 {
    factors.iter().map(|factor| factor.weighted_impact).sum()
}

/// Weighted sum truncated at [`RISK_SCORE_CAP`].
pub(crate) fn combine(factors: &[RiskFactor]) -> f64 {
    weighted_sum(factors).min(RISK_SCORE_CAP)
}

// Stable sort: equal impacts keep canonical factor order.
pub(crate) fn rank(factors: &mut [RiskFactor]) {
    factors.sort_by(|a, b| b.weighted_impact.total_cmp(&a.weighted_impact));
}
