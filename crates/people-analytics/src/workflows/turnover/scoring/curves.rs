use super::super::domain::{EmployeeProfile, FactorKind};
use super::weights::{BASE_EXPECTED_SALARY, SALARY_PER_EXPERIENCE_YEAR};

/// Quantities shared by several curves, computed once per profile.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ProfileSignals {
    pub total_tenure_years: f64,
    pub salary_growth_ratio: f64,
    pub market_experience_years: f64,
}

impl ProfileSignals {
    pub(crate) fn from_profile(profile: &EmployeeProfile) -> Self {
        Self {
            total_tenure_years: profile.total_tenure_years(),
            salary_growth_ratio: profile.salary_growth_ratio(),
            market_experience_years: profile.market_experience_years(),
        }
    }
}

pub(crate) fn sanctions_risk(count: u32) -> f64 {
    let n = f64::from(count);
    match count {
        0 => 0.0,
        1..=2 => 0.15 * n,
        3..=5 => 0.30 + 0.05 * (n - 2.0),
        _ => 0.45 + 0.07 * (n - 5.0),
    }
}

pub(crate) fn salary_growth_risk(growth_ratio: f64) -> f64 {
    if growth_ratio <= 0.0 {
        0.6
    } else {
        0.6 * (-5.0 * growth_ratio).exp()
    }
}

pub(crate) fn tenure_risk(years: f64) -> f64 {
    if years < 1.0 {
        0.7 - 0.4 * years
    } else if years < 3.0 {
        0.3 - 0.1 * (years - 1.0)
    } else {
        0.1 * (-0.2 * (years - 3.0)).exp()
    }
}

// U-shaped: youngest and oldest employees leave more often.
pub(crate) fn age_risk(age: u32) -> f64 {
    let a = f64::from(age);
    if age < 30 {
        0.5 - 0.03 * (a - 20.0)
    } else if age < 50 {
        0.2 - 0.005 * (a - 30.0)
    } else {
        0.1 + 0.015 * (a - 50.0)
    }
}

pub(crate) fn new_hire_risk(is_new_hire: bool) -> f64 {
    if is_new_hire {
        0.3
    } else {
        0.0
    }
}

pub(crate) fn expected_salary(market_experience_years: f64) -> f64 {
    BASE_EXPECTED_SALARY + SALARY_PER_EXPERIENCE_YEAR * market_experience_years
}

pub(crate) fn market_alignment_risk(current_salary: f64, market_experience_years: f64) -> f64 {
    let ratio = current_salary / expected_salary(market_experience_years).max(1.0);
    if ratio >= 1.1 {
        0.05
    } else if ratio >= 0.9 {
        0.15
    } else if ratio >= 0.8 {
        0.30
    } else {
        0.50
    }
}

/// Experienced hires still inside their first two years.
pub(crate) fn adjustment_risk(total_tenure_years: f64, prior_experience_months: u32) -> f64 {
    if total_tenure_years < 2.0 && prior_experience_months > 60 {
        0.25
    } else {
        0.0
    }
}

/// Raw (unweighted) score per factor, in canonical order, clamped to `[0, 1]`.
///
/// NaN is passed through unchanged so the caller can report it.
pub(crate) fn raw_scores(profile: &EmployeeProfile) -> [(FactorKind, f64); 7] {
    let signals = ProfileSignals::from_profile(profile);

    FactorKind::ALL.map(|kind| {
        let raw = match kind {
            FactorKind::Sanctions => sanctions_risk(u32::from(profile.sanctions_count)),
            FactorKind::SalaryGrowth => salary_growth_risk(signals.salary_growth_ratio),
            FactorKind::Tenure => tenure_risk(signals.total_tenure_years),
            FactorKind::Age => age_risk(u32::from(profile.age)),
            FactorKind::NewHire => new_hire_risk(profile.is_new_hire),
            FactorKind::MarketAlignment => market_alignment_risk(
                f64::from(profile.current_salary_2020),
                signals.market_experience_years,
            ),
            FactorKind::Adjustment => adjustment_risk(
                signals.total_tenure_years,
                u32::from(profile.prior_experience_months),
            ),
        };
        (kind, raw.clamp(0.0, 1.0))
    })
}
