//! Roster ingestion — parses the uploaded CSV into `Employee` rows.
//!
//! Structural problems (missing columns, malformed rows) are fatal for the
//! request and name the offending column or line, per the error contract.

use crate::errors::AppError;
use crate::models::employee::Employee;

/// Columns the scoring pipeline reads. Every one must be present in the
/// upload header; extra columns are ignored.
pub const REQUIRED_COLUMNS: &[&str] = &[
    "employee_id",
    "name",
    "role",
    "skills",
    "location",
    "past_projects",
    "performance_score",
    "billable_utilization_pct",
    "annual_cost",
    "experience_years",
    "availability_start_date",
    "stake_tier",
];

pub fn parse_roster(data: &[u8]) -> Result<Vec<Employee>, AppError> {
    let mut reader = csv::Reader::from_reader(data);

    let headers = reader
        .headers()
        .map_err(|e| AppError::Validation(format!("Could not read roster header row: {e}")))?
        .clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h.trim() == *column) {
            return Err(AppError::MissingColumn((*column).to_string()));
        }
    }

    let mut employees = Vec::new();
    for result in reader.deserialize::<Employee>() {
        match result {
            Ok(employee) => employees.push(employee),
            Err(e) => {
                let line = e.position().map(|p| p.line()).unwrap_or(0);
                return Err(AppError::InvalidRow {
                    line,
                    message: e.to_string(),
                });
            }
        }
    }

    Ok(employees)
}
