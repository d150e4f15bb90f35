use super::super::domain::{FactorKind, RiskTier};
use super::weights::{HIGH_RISK_THRESHOLD, MODERATE_RISK_THRESHOLD, VERY_HIGH_RISK_THRESHOLD};
use serde::{Deserialize, Serialize};

/// Advice attached to an assessment. `factor` is `None` for the tier-wide note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub factor: Option<FactorKind>,
    pub text: String,
}

pub(crate) fn classify(risk_score: f64) -> RiskTier {
    if risk_score > HIGH_RISK_THRESHOLD {
        RiskTier::High
    } else if risk_score > MODERATE_RISK_THRESHOLD {
        RiskTier::Moderate
    } else {
        RiskTier::Low
    }
}

pub(crate) fn headline(tier: RiskTier, risk_score: f64) -> String {
    let percent = risk_score * 100.0;
    match tier {
        RiskTier::High if risk_score > VERY_HIGH_RISK_THRESHOLD => {
            format!("very high turnover risk ({percent:.1}%)")
        }
        RiskTier::High => format!("high turnover risk ({percent:.1}%)"),
        RiskTier::Moderate => format!("moderate turnover risk ({percent:.1}%)"),
        RiskTier::Low => format!("low turnover risk ({percent:.1}%)"),
    }
}

fn tier_guidance(tier: RiskTier) -> &'static str {
    match tier {
        RiskTier::High => {
            "Prioritize a retention conversation with the employee and their manager this month."
        }
        RiskTier::Moderate => {
            "Monitor engagement and schedule a check-in before the next review cycle."
        }
        RiskTier::Low => "Retention outlook is stable; keep current engagement practices.",
    }
}

fn factor_guidance(tier: RiskTier, factor: FactorKind) -> Option<&'static str> {
    use FactorKind::*;
    use RiskTier::*;

    match (tier, factor) {
        (High, Sanctions) => Some(
            "Arrange coaching on the policy violations behind recent sanctions and agree a follow-up plan.",
        ),
        (High, SalaryGrowth) => {
            Some("Review salary progression since 2020; stalled pay is a leading exit driver.")
        }
        (High, Tenure) => {
            Some("Assign a mentor and hold stay interviews while tenure is still short.")
        }
        (High, Age) => Some(
            "Tailor career conversations to the employee's career stage: growth paths early on, flexibility later.",
        ),
        (High, NewHire) => {
            Some("Reinforce onboarding with structured 30/60/90-day check-ins.")
        }
        (High, MarketAlignment) => Some(
            "Run a compensation review against market pay for comparable experience.",
        ),
        (High, Adjustment) => Some(
            "Give the experienced hire clear scope and early wins to shorten the adjustment period.",
        ),
        (Moderate, Sanctions) => {
            Some("Clarify conduct expectations and track whether sanctions recur.")
        }
        (Moderate, SalaryGrowth) => {
            Some("Discuss the path to the next salary step at the upcoming review.")
        }
        (Moderate, Tenure) => Some("Keep regular one-to-ones during the early years of service."),
        (Moderate, Age) => Some("Discuss development goals that fit the employee's career stage."),
        (Moderate, NewHire) => Some("Confirm onboarding milestones are being met."),
        (Moderate, MarketAlignment) => {
            Some("Benchmark pay against the market before the next compensation cycle.")
        }
        (Moderate, Adjustment) => {
            Some("Check in on how prior experience is being put to use in the new role.")
        }
        (Low, MarketAlignment) => {
            Some("Keep compensation benchmarked at the regular review cycle.")
        }
        (Low, _) => None,
    }
}

/// Tier-wide note followed by factor-specific advice for each top factor, in ranked order.
pub(crate) fn recommendations(tier: RiskTier, top_factors: &[FactorKind]) -> Vec<Recommendation> {
    let mut advice = vec![Recommendation {
        factor: None,
        text: tier_guidance(tier).to_string(),
    }];

    advice.extend(top_factors.iter().filter_map(|factor| {
        factor_guidance(tier, *factor).map(|text| Recommendation {
            factor: Some(*factor),
            text: text.to_string(),
        })
    }));

    advice
}
