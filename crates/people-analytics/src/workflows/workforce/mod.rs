//! Workforce KPIs reported alongside turnover risk: turnover rate, employee
//! Net Promoter Score and absenteeism rate.

pub mod router;

pub use router::workforce_router;

use serde::{Deserialize, Serialize};

/// Survey scores at or above this value count as promoters.
pub const PROMOTER_MIN_SCORE: u8 = 9;
/// Survey scores at or above this value (and below promoters) count as passives.
pub const PASSIVE_MIN_SCORE: u8 = 7;
pub const MAX_SURVEY_SCORE: u8 = 10;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MetricsError {
    #[error("average headcount must be greater than zero (found {0})")]
    NoHeadcount(f64),
    #[error("eNPS requires at least one survey response")]
    EmptySurvey,
    #[error("survey score {0} is outside 0..=10")]
    ScoreOutOfRange(u8),
    #[error("{field} must be a non-negative number (found {found})")]
    NegativeHours { field: &'static str, found: f64 },
    #[error("effective agreed hours must be greater than zero (found {0})")]
    NoEffectiveHours(f64),
}

/// Percentage of the average headcount that left during the period.
pub fn turnover_rate(terminations: u32, average_headcount: f64) -> Result<f64, MetricsError> {
    if !average_headcount.is_finite() || average_headcount <= 0.0 {
        return Err(MetricsError::NoHeadcount(average_headcount));
    }
    Ok(f64::from(terminations) * 100.0 / average_headcount)
}

/// Promoter/passive/detractor split of an employee survey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnpsBreakdown {
    pub responses: usize,
    pub promoters: usize,
    pub passives: usize,
    pub detractors: usize,
    /// Percentage of promoters minus percentage of detractors, in `-100..=100`.
    pub score: f64,
}

impl EnpsBreakdown {
    pub fn promoter_pct(&self) -> f64 {
        self.promoters as f64 * 100.0 / self.responses as f64
    }

    pub fn detractor_pct(&self) -> f64 {
        self.detractors as f64 * 100.0 / self.responses as f64
    }
}

pub fn employee_nps(scores: &[u8]) -> Result<EnpsBreakdown, MetricsError> {
    if scores.is_empty() {
        return Err(MetricsError::EmptySurvey);
    }

    let (mut promoters, mut passives, mut detractors) = (0, 0, 0);
    for &score in scores {
        match score {
            s if s > MAX_SURVEY_SCORE => return Err(MetricsError::ScoreOutOfRange(s)),
            s if s >= PROMOTER_MIN_SCORE => promoters += 1,
            s if s >= PASSIVE_MIN_SCORE => passives += 1,
            _ => detractors += 1,
        }
    }

    let responses = scores.len();
    let score = (promoters as f64 - detractors as f64) * 100.0 / responses as f64;

    Ok(EnpsBreakdown {
        responses,
        promoters,
        passives,
        detractors,
        score,
    })
}

/// Hours inputs for the absenteeism rate over one period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AbsenteeismInputs {
    /// Hours not worked for occasional causes, temporary disability or other reasons.
    pub hours_lost: f64,
    pub agreed_hours: f64,
    #[serde(default)]
    pub overtime_hours: f64,
    #[serde(default)]
    pub vacation_and_holiday_hours: f64,
}

impl AbsenteeismInputs {
    pub fn effective_agreed_hours(&self) -> f64 {
        self.agreed_hours + self.overtime_hours - self.vacation_and_holiday_hours
    }

    pub fn rate(&self) -> Result<f64, MetricsError> {
        for (field, found) in [
            ("hours_lost", self.hours_lost),
            ("agreed_hours", self.agreed_hours),
            ("overtime_hours", self.overtime_hours),
            ("vacation_and_holiday_hours", self.vacation_and_holiday_hours),
        ] {
            if found < 0.0 || !found.is_finite() {
                return Err(MetricsError::NegativeHours { field, found });
            }
        }

        let effective = self.effective_agreed_hours();
        if effective <= 0.0 {
            return Err(MetricsError::NoEffectiveHours(effective));
        }
        Ok(self.hours_lost * 100.0 / effective)
    }
}
