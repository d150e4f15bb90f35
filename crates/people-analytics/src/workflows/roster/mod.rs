//! CSV rosters of employee profiles for batch turnover scoring.
//!
//! The header row names the profile fields (`sanctions_count`, `birth_year`,
//! `age`, `is_new_hire`, `prior_experience_months`, `contract_start_date`,
//! `tenure_years`, `tenure_months`, `initial_salary_2020`,
//! `current_salary_2020`). Range checks happen later, in the intake guard.

mod parser;

use crate::workflows::turnover::ProfileSubmission;
use std::io::Read;
use std::path::Path;

/// Failure that prevents the roster from being read at all.
#[derive(Debug)]
pub enum RosterImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    MissingColumn { column: &'static str },
}

impl std::fmt::Display for RosterImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterImportError::Io(err) => write!(f, "failed to read roster: {}", err),
            RosterImportError::Csv(err) => write!(f, "invalid roster CSV data: {}", err),
            RosterImportError::MissingColumn { column } => {
                write!(f, "roster header is missing the '{}' column", column)
            }
        }
    }
}

impl std::error::Error for RosterImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RosterImportError::Io(err) => Some(err),
            RosterImportError::Csv(err) => Some(err),
            RosterImportError::MissingColumn { .. } => None,
        }
    }
}

impl From<std::io::Error> for RosterImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for RosterImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// A single roster row that could not be turned into a submission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("roster row {row} is invalid: {detail}")]
pub struct RosterRowError {
    pub row: usize,
    pub detail: String,
}

/// One roster row: a submission ready for intake, or why the row was unreadable.
pub type RosterEntry = Result<ProfileSubmission, RosterRowError>;

pub struct RosterImporter;

impl RosterImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<RosterEntry>, RosterImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Parse every row; rows are numbered from 1, excluding the header.
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<RosterEntry>, RosterImportError> {
        Ok(parser::read_entries(reader)?
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                entry.map_err(|detail| RosterRowError {
                    row: index + 1,
                    detail,
                })
            })
            .collect())
    }
}
