use std::sync::Arc;

use axum::Router;
use chrono::NaiveDate;

use crate::workflows::turnover::domain::{EmployeeProfile, ProfileSubmission};
use crate::workflows::turnover::{turnover_router, TurnoverRiskService};

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 30).expect("valid date")
}

/// Three-year employee on a modest raise; lands in the Low tier.
pub(super) fn baseline_submission() -> ProfileSubmission {
    ProfileSubmission {
        sanctions_count: 0,
        birth_year: 1990,
        age: 35,
        is_new_hire: false,
        prior_experience_months: 36,
        contract_start_date: NaiveDate::from_ymd_opt(2022, 6, 1).expect("valid date"),
        tenure_years: 3,
        tenure_months: 0,
        initial_salary_2020: 30_000,
        current_salary_2020: 35_000,
    }
}

pub(super) fn baseline_profile() -> EmployeeProfile {
    EmployeeProfile {
        sanctions_count: 0,
        birth_year: 1990,
        age: 35,
        is_new_hire: false,
        prior_experience_months: 36,
        contract_start_date: NaiveDate::from_ymd_opt(2022, 6, 1).expect("valid date"),
        tenure_years: 3,
        tenure_months: 0,
        initial_salary_2020: 30_000,
        current_salary_2020: 35_000,
    }
}

/// Six months in, no raise, paid below market: Moderate tier.
pub(super) fn recent_hire_profile() -> EmployeeProfile {
    EmployeeProfile {
        sanctions_count: 0,
        birth_year: 1998,
        age: 22,
        is_new_hire: true,
        prior_experience_months: 0,
        contract_start_date: NaiveDate::from_ymd_opt(2024, 12, 30).expect("valid date"),
        tenure_years: 0,
        tenure_months: 6,
        initial_salary_2020: 20_000,
        current_salary_2020: 20_000,
    }
}

/// Every factor pushed to its worst value inside the form ranges.
pub(super) fn worst_case_profile() -> EmployeeProfile {
    EmployeeProfile {
        sanctions_count: 10,
        birth_year: 2000,
        age: 20,
        is_new_hire: true,
        prior_experience_months: 72,
        contract_start_date: NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date"),
        tenure_years: 0,
        tenure_months: 0,
        initial_salary_2020: 30_000,
        current_salary_2020: 18_000,
    }
}

/// Every factor other than `is_new_hire` at the bottom of its curve.
pub(super) fn minimum_risk_profile(is_new_hire: bool) -> EmployeeProfile {
    EmployeeProfile {
        sanctions_count: 0,
        birth_year: 1975,
        age: 50,
        is_new_hire,
        prior_experience_months: 0,
        contract_start_date: NaiveDate::from_ymd_opt(2000, 1, 1).expect("valid date"),
        tenure_years: 30,
        tenure_months: 11,
        initial_salary_2020: 15_000,
        current_salary_2020: 150_000,
    }
}

pub(super) fn service() -> Arc<TurnoverRiskService> {
    Arc::new(TurnoverRiskService::new())
}

pub(super) fn router() -> Router {
    turnover_router(service())
}

pub(super) fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} (+/- {tolerance}), got {actual}"
    );
}
