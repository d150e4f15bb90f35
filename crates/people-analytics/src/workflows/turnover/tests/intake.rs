use super::common::*;
use crate::workflows::turnover::intake::{FieldBounds, IntakePolicy, ProfileGuard, ProfileViolation};
use chrono::NaiveDate;

#[test]
fn guard_converts_valid_submission() {
    let profile = ProfileGuard::default()
        .profile_from_submission(baseline_submission(), today())
        .expect("submission within form ranges");

    assert_eq!(profile, baseline_profile());
}

#[test]
fn guard_reports_out_of_range_age() {
    let mut submission = baseline_submission();
    submission.age = 19;

    let violation = ProfileGuard::default()
        .profile_from_submission(submission, today())
        .expect_err("age below range");

    assert_eq!(
        violation,
        ProfileViolation::OutOfRange {
            field: "age",
            min: 20,
            max: 70,
            found: 19,
        }
    );
    assert_eq!(violation.to_string(), "age must be between 20 and 70 (found 19)");
}

#[test]
fn guard_rejects_negative_and_oversized_values() {
    let guard = ProfileGuard::default();

    let mut negative = baseline_submission();
    negative.sanctions_count = -2;
    assert!(matches!(
        guard.profile_from_submission(negative, today()),
        Err(ProfileViolation::OutOfRange {
            field: "sanctions_count",
            ..
        })
    ));

    let mut months = baseline_submission();
    months.tenure_months = 12;
    assert!(matches!(
        guard.profile_from_submission(months, today()),
        Err(ProfileViolation::OutOfRange {
            field: "tenure_months",
            ..
        })
    ));

    let mut salary = baseline_submission();
    salary.current_salary_2020 = 150_001;
    assert!(matches!(
        guard.profile_from_submission(salary, today()),
        Err(ProfileViolation::OutOfRange {
            field: "current_salary_2020",
            ..
        })
    ));
}

#[test]
fn guard_accepts_range_edges() {
    let mut submission = baseline_submission();
    submission.sanctions_count = 10;
    submission.birth_year = 1950;
    submission.age = 70;
    submission.prior_experience_months = 240;
    submission.tenure_years = 30;
    submission.tenure_months = 11;
    submission.initial_salary_2020 = 100_000;
    submission.current_salary_2020 = 15_000;
    submission.contract_start_date = today();

    let profile = ProfileGuard::default()
        .profile_from_submission(submission, today())
        .expect("edges are inclusive");
    assert_eq!(profile.sanctions_count, 10);
    assert_eq!(profile.prior_experience_months, 240);
}

#[test]
fn guard_rejects_future_and_ancient_contract_dates() {
    let guard = ProfileGuard::default();

    let mut future = baseline_submission();
    future.contract_start_date = NaiveDate::from_ymd_opt(2025, 7, 1).expect("valid date");
    match guard.profile_from_submission(future, today()) {
        Err(ProfileViolation::ContractStartOutOfRange { latest, .. }) => {
            assert_eq!(latest, today())
        }
        other => panic!("expected contract start violation, got {other:?}"),
    }

    let mut ancient = baseline_submission();
    ancient.contract_start_date = NaiveDate::from_ymd_opt(1999, 12, 31).expect("valid date");
    assert!(matches!(
        guard.profile_from_submission(ancient, today()),
        Err(ProfileViolation::ContractStartOutOfRange { .. })
    ));
}

#[test]
fn custom_policy_bounds_are_enforced() {
    let policy = IntakePolicy {
        sanctions_count: FieldBounds { min: 0, max: 3 },
        ..IntakePolicy::default()
    };
    let guard = ProfileGuard::with_policy(policy);
    assert_eq!(guard.policy().sanctions_count.max, 3);

    let mut submission = baseline_submission();
    submission.sanctions_count = 4;
    assert!(guard.profile_from_submission(submission, today()).is_err());
}

#[test]
fn bounds_wider_than_storage_type_still_reject() {
    let policy = IntakePolicy {
        age: FieldBounds { min: 0, max: 1_000 },
        ..IntakePolicy::default()
    };
    let mut submission = baseline_submission();
    submission.age = 300;

    let violation = ProfileGuard::with_policy(policy)
        .profile_from_submission(submission, today())
        .expect_err("age does not fit in u8");
    assert!(matches!(
        violation,
        ProfileViolation::OutOfRange { field: "age", found: 300, .. }
    ));
}
