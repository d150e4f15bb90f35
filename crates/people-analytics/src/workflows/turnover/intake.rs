use chrono::NaiveDate;

use super::domain::{EmployeeProfile, ProfileSubmission};

/// Validation errors raised by the profile guard.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileViolation {
    #[error("{field} must be between {min} and {max} (found {found})")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
        found: i64,
    },
    #[error("contract_start_date {found} must fall between {earliest} and {latest}")]
    ContractStartOutOfRange {
        found: NaiveDate,
        earliest: NaiveDate,
        latest: NaiveDate,
    },
}

/// Inclusive bounds accepted by the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldBounds {
    pub min: i64,
    pub max: i64,
}

impl FieldBounds {
    const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    fn check<T: TryFrom<i64>>(&self, field: &'static str, found: i64) -> Result<T, ProfileViolation> {
        let violation = ProfileViolation::OutOfRange {
            field,
            min: self.min,
            max: self.max,
            found,
        };

        if found < self.min || found > self.max {
            return Err(violation);
        }
        T::try_from(found).map_err(|_| violation)
    }
}

/// Domain ranges applied to each submission field.
#[derive(Debug, Clone)]
pub struct IntakePolicy {
    pub sanctions_count: FieldBounds,
    pub birth_year: FieldBounds,
    pub age: FieldBounds,
    pub prior_experience_months: FieldBounds,
    pub tenure_years: FieldBounds,
    pub tenure_months: FieldBounds,
    pub initial_salary_2020: FieldBounds,
    pub current_salary_2020: FieldBounds,
    pub earliest_contract_start: NaiveDate,
}

impl Default for IntakePolicy {
    fn default() -> Self {
        Self {
            sanctions_count: FieldBounds::new(0, 10),
            birth_year: FieldBounds::new(1950, 2000),
            age: FieldBounds::new(20, 70),
            prior_experience_months: FieldBounds::new(0, 240),
            tenure_years: FieldBounds::new(0, 30),
            tenure_months: FieldBounds::new(0, 11),
            initial_salary_2020: FieldBounds::new(15_000, 100_000),
            current_salary_2020: FieldBounds::new(15_000, 150_000),
            earliest_contract_start: NaiveDate::from_ymd_opt(2000, 1, 1)
                .unwrap_or(NaiveDate::MIN),
        }
    }
}

/// Guard responsible for producing `EmployeeProfile` instances.
#[derive(Debug, Clone, Default)]
pub struct ProfileGuard {
    policy: IntakePolicy,
}

impl ProfileGuard {
    pub fn with_policy(policy: IntakePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &IntakePolicy {
        &self.policy
    }

    /// Convert a raw submission into a profile, rejecting the first out-of-domain field.
    pub fn profile_from_submission(
        &self,
        submission: ProfileSubmission,
        today: NaiveDate,
    ) -> Result<EmployeeProfile, ProfileViolation> {
        let policy = &self.policy;

        let start = submission.contract_start_date;
        if start < policy.earliest_contract_start || start > today {
            return Err(ProfileViolation::ContractStartOutOfRange {
                found: start,
                earliest: policy.earliest_contract_start,
                latest: today,
            });
        }

        Ok(EmployeeProfile {
            sanctions_count: policy
                .sanctions_count
                .check("sanctions_count", submission.sanctions_count)?,
            birth_year: policy
                .birth_year
                .check("birth_year", submission.birth_year)?,
            age: policy.age.check("age", submission.age)?,
            is_new_hire: submission.is_new_hire,
            prior_experience_months: policy
                .prior_experience_months
                .check("prior_experience_months", submission.prior_experience_months)?,
            contract_start_date: start,
            tenure_years: policy
                .tenure_years
                .check("tenure_years", submission.tenure_years)?,
            tenure_months: policy
                .tenure_months
                .check("tenure_months", submission.tenure_months)?,
            initial_salary_2020: policy
                .initial_salary_2020
                .check("initial_salary_2020", submission.initial_salary_2020)?,
            current_salary_2020: policy
                .current_salary_2020
                .check("current_salary_2020", submission.current_salary_2020)?,
        })
    }
}
