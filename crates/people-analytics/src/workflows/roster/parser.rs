use super::RosterImportError;
use crate::workflows::turnover::ProfileSubmission;
use chrono::NaiveDate;
use serde::Deserialize;
use std::io::Read;

/// Header-keyed roster row; booleans and dates stay textual until validated.
#[derive(Debug, Deserialize)]
pub(crate) struct RosterRow {
    sanctions_count: i64,
    birth_year: i64,
    age: i64,
    is_new_hire: String,
    prior_experience_months: i64,
    contract_start_date: String,
    tenure_years: i64,
    tenure_months: i64,
    initial_salary_2020: i64,
    current_salary_2020: i64,
}

impl RosterRow {
    pub(crate) fn into_submission(self) -> Result<ProfileSubmission, String> {
        let is_new_hire = parse_flag(&self.is_new_hire)
            .ok_or_else(|| format!("is_new_hire '{}' is not a yes/no value", self.is_new_hire))?;
        let contract_start_date = parse_date(&self.contract_start_date).ok_or_else(|| {
            format!(
                "contract_start_date '{}' is not formatted as YYYY-MM-DD",
                self.contract_start_date
            )
        })?;

        Ok(ProfileSubmission {
            sanctions_count: self.sanctions_count,
            birth_year: self.birth_year,
            age: self.age,
            is_new_hire,
            prior_experience_months: self.prior_experience_months,
            contract_start_date,
            tenure_years: self.tenure_years,
            tenure_months: self.tenure_months,
            initial_salary_2020: self.initial_salary_2020,
            current_salary_2020: self.current_salary_2020,
        })
    }
}

const COLUMNS: [&str; 10] = [
    "sanctions_count",
    "birth_year",
    "age",
    "is_new_hire",
    "prior_experience_months",
    "contract_start_date",
    "tenure_years",
    "tenure_months",
    "initial_salary_2020",
    "current_salary_2020",
];

/// Read every data row, keeping per-row parse failures as `Err(detail)`.
///
/// Only I/O failures and a header missing a profile column fail the whole roster.
pub(crate) fn read_entries<R: Read>(
    reader: R,
) -> Result<Vec<Result<ProfileSubmission, String>>, RosterImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    if let Some(column) = COLUMNS
        .iter()
        .find(|column| !headers.iter().any(|header| header == **column))
    {
        return Err(RosterImportError::MissingColumn { column: *column });
    }

    let mut entries = Vec::new();
    for record in csv_reader.deserialize::<RosterRow>() {
        let entry = match record {
            Ok(row) => row.into_submission(),
            Err(err) if err.is_io_error() => return Err(err.into()),
            Err(err) => Err(describe(&err, &headers)),
        };
        entries.push(entry);
    }
    Ok(entries)
}

fn describe(error: &csv::Error, headers: &csv::StringRecord) -> String {
    match error.kind() {
        csv::ErrorKind::Deserialize { err, .. } => {
            let column = err
                .field()
                .and_then(|index| usize::try_from(index).ok())
                .and_then(|index| headers.get(index));
            match column {
                Some(column) => format!("{column}: {}", err.kind()),
                None => err.kind().to_string(),
            }
        }
        csv::ErrorKind::UnequalLengths { expected_len, len, .. } => {
            format!("expected {expected_len} fields, found {len}")
        }
        _ => error.to_string(),
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Some(true),
        "false" | "no" | "n" | "0" => Some(false),
        _ => None,
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
pub(crate) fn parse_flag_for_tests(value: &str) -> Option<bool> {
    parse_flag(value)
}
