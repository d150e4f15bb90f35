use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Raw employee attributes as collected by an intake form or roster row.
///
/// Fields are deliberately wide and signed so out-of-range values can be
/// reported back to the caller instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSubmission {
    pub sanctions_count: i64,
    pub birth_year: i64,
    pub age: i64,
    pub is_new_hire: bool,
    pub prior_experience_months: i64,
    pub contract_start_date: NaiveDate,
    pub tenure_years: i64,
    pub tenure_months: i64,
    pub initial_salary_2020: i64,
    pub current_salary_2020: i64,
}

/// Validated employee attributes consumed by the scorer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeProfile {
    pub sanctions_count: u8,
    pub birth_year: u16,
    pub age: u8,
    pub is_new_hire: bool,
    pub prior_experience_months: u16,
    pub contract_start_date: NaiveDate,
    pub tenure_years: u8,
    pub tenure_months: u8,
    pub initial_salary_2020: u32,
    pub current_salary_2020: u32,
}

impl EmployeeProfile {
    pub fn total_tenure_years(&self) -> f64 {
        f64::from(self.tenure_years) + f64::from(self.tenure_months) / 12.0
    }

    /// Relative change from the initial to the current salary. Zero or negative
    /// when pay stagnated or dropped.
    pub fn salary_growth_ratio(&self) -> f64 {
        let initial = f64::from(self.initial_salary_2020);
        let current = f64::from(self.current_salary_2020);
        (current - initial) / initial.max(1.0)
    }

    pub fn market_experience_years(&self) -> f64 {
        self.total_tenure_years() + f64::from(self.prior_experience_months) / 12.0
    }
}

/// The seven dimensions contributing to turnover risk, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FactorKind {
    Sanctions,
    SalaryGrowth,
    Tenure,
    Age,
    NewHire,
    MarketAlignment,
    Adjustment,
}

impl FactorKind {
    pub const ALL: [FactorKind; 7] = [
        FactorKind::Sanctions,
        FactorKind::SalaryGrowth,
        FactorKind::Tenure,
        FactorKind::Age,
        FactorKind::NewHire,
        FactorKind::MarketAlignment,
        FactorKind::Adjustment,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            FactorKind::Sanctions => "Sanctions",
            FactorKind::SalaryGrowth => "SalaryGrowth",
            FactorKind::Tenure => "Tenure",
            FactorKind::Age => "Age",
            FactorKind::NewHire => "NewHire",
            FactorKind::MarketAlignment => "MarketAlignment",
            FactorKind::Adjustment => "Adjustment",
        }
    }
}

impl fmt::Display for FactorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Coarse classification of a risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

impl RiskTier {
    pub const fn label(self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Moderate => "Moderate",
            RiskTier::High => "High",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
