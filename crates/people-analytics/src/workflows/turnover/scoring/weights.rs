use super::super::domain::FactorKind;

/// Weights are held as basis points so their total is exact.
pub const WEIGHT_SCALE: u32 = 10_000;

/// Ceiling applied to the weighted sum. Truncates, never renormalizes.
pub const RISK_SCORE_CAP: f64 = 0.9;

pub const HIGH_RISK_THRESHOLD: f64 = 0.35;
pub const VERY_HIGH_RISK_THRESHOLD: f64 = 0.6;
pub const MODERATE_RISK_THRESHOLD: f64 = 0.25;

pub(crate) const BASE_EXPECTED_SALARY: f64 = 25_000.0;
pub(crate) const SALARY_PER_EXPERIENCE_YEAR: f64 = 1_000.0;

impl FactorKind {
    pub const fn weight_basis_points(self) -> u32 {
        match self {
            FactorKind::Sanctions => 2_500,
            FactorKind::SalaryGrowth => 1_500,
            FactorKind::Tenure => 2_000,
            FactorKind::Age => 1_000,
            FactorKind::NewHire => 1_000,
            FactorKind::MarketAlignment => 1_500,
            FactorKind::Adjustment => 500,
        }
    }

    pub fn weight(self) -> f64 {
        f64::from(self.weight_basis_points()) / f64::from(WEIGHT_SCALE)
    }
}
