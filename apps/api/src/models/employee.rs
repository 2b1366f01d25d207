use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the uploaded roster. Field names match the required CSV
/// columns exactly; extra columns in the upload are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub employee_id: String,
    pub name: String,
    pub role: String,
    /// Comma/keyword-bearing free text, matched by substring during scoring.
    pub skills: String,
    pub location: String,
    /// Free text of prior project tags, matched by substring during scoring.
    pub past_projects: String,
    pub performance_score: f64,
    pub billable_utilization_pct: f64,
    pub annual_cost: f64,
    pub experience_years: f64,
    /// Kept as the raw upload string; parsed lazily because a bad date must
    /// only cost the availability bonus, never the row.
    pub availability_start_date: String,
    pub stake_tier: String,
}

impl Employee {
    /// Best-effort parse of the availability start date. `None` on anything
    /// unrecognized.
    pub fn availability_date(&self) -> Option<NaiveDate> {
        parse_flexible_date(&self.availability_start_date)
    }
}

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%m-%Y"];

/// Lenient date parse used for both roster dates and the extracted
/// `availability_before` target.
pub fn parse_flexible_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, fmt) {
            return Some(date);
        }
    }
    // RFC 3339 timestamps ("2025-01-01T00:00:00Z")
    raw.parse::<chrono::DateTime<chrono::Utc>>()
        .ok()
        .map(|dt| dt.date_naive())
}
