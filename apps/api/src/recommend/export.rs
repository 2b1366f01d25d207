//! CSV export of the scored-and-ranked table.

use anyhow::{Context, Result};

use super::ranking::RankedEmployee;

/// Display column order, followed by the remaining roster columns. The rank
/// is a presentation index and is not exported.
const EXPORT_COLUMNS: &[&str] = &[
    "score",
    "reasons",
    "employee_id",
    "name",
    "role",
    "annual_cost",
    "location",
    "performance_score",
    "experience_years",
    "availability_start_date",
    "stake_tier",
    "skills",
    "past_projects",
    "billable_utilization_pct",
];

/// Serializes the ranked table as UTF-8 CSV, header row included.
pub fn to_csv(ranked: &[RankedEmployee]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(EXPORT_COLUMNS)
        .context("writing CSV header")?;

    for entry in ranked {
        let e = &entry.scored.employee;
        writer
            .write_record(&[
                entry.scored.score.to_string(),
                entry.scored.reasons.clone(),
                e.employee_id.clone(),
                e.name.clone(),
                e.role.clone(),
                e.annual_cost.to_string(),
                e.location.clone(),
                e.performance_score.to_string(),
                e.experience_years.to_string(),
                e.availability_start_date.clone(),
                e.stake_tier.clone(),
                e.skills.clone(),
                e.past_projects.clone(),
                e.billable_utilization_pct.to_string(),
            ])
            .context("writing CSV row")?;
    }

    let bytes = writer
        .into_inner()
        .context("flushing CSV export buffer")?;
    String::from_utf8(bytes).context("CSV export is not valid UTF-8")
}
