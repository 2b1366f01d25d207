//! Scoring Engine — applies a filter record to every roster row, producing a
//! score and a human-readable justification per row.
//!
//! The rule table is an explicit ordered list evaluated per row. Scores are
//! additive, so evaluation order only fixes the order reasons are appended —
//! which keeps the justification text deterministic.

use chrono::NaiveDate;
use serde::Serialize;

use crate::filters::FilterRecord;
use crate::models::employee::{parse_flexible_date, Employee};

pub const ROLE_BONUS: f64 = 20.0;
pub const SKILL_BONUS: f64 = 15.0;
pub const LOCATION_BONUS: f64 = 10.0;
pub const PROJECT_BONUS: f64 = 10.0;
pub const AVAILABILITY_BONUS: f64 = 10.0;

const REASON_SEPARATOR: &str = " | ";
/// Safety net for an empty reason list. Unreachable while the performance
/// rule stays unconditional.
const DEFAULT_REASON: &str = "General fit based on performance and utilization";

/// An employee together with its computed score and justification.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredEmployee {
    pub score: f64,
    pub reasons: String,
    #[serde(flatten)]
    pub employee: Employee,
}

struct RuleHit {
    delta: f64,
    reason: String,
}

/// Per-request scoring inputs: the filter record plus the target availability
/// date, parsed once instead of per row.
struct ScoringContext<'a> {
    filters: &'a FilterRecord,
    availability_target: Option<NaiveDate>,
}

type ScoringRule = fn(&Employee, &ScoringContext) -> Option<RuleHit>;

/// The rule table, in the order reasons appear in the output.
const RULES: &[ScoringRule] = &[
    role_rule,
    skills_rule,
    location_rule,
    past_projects_rule,
    performance_rule,
    availability_rule,
];

/// Pure function: one output per input row, input order preserved, inputs
/// untouched. Ranking is a separate step.
pub fn score_roster(roster: &[Employee], filters: &FilterRecord) -> Vec<ScoredEmployee> {
    let ctx = ScoringContext {
        filters,
        availability_target: filters
            .availability_before
            .as_deref()
            .and_then(parse_flexible_date),
    };

    roster
        .iter()
        .map(|employee| {
            let mut score = 0.0;
            let mut reasons: Vec<String> = Vec::new();

            for rule in RULES {
                if let Some(hit) = rule(employee, &ctx) {
                    score += hit.delta;
                    reasons.push(hit.reason);
                }
            }

            let reasons = if reasons.is_empty() {
                DEFAULT_REASON.to_string()
            } else {
                reasons.join(REASON_SEPARATOR)
            };

            ScoredEmployee {
                score,
                reasons,
                employee: employee.clone(),
            }
        })
        .collect()
}

fn role_rule(employee: &Employee, ctx: &ScoringContext) -> Option<RuleHit> {
    if ctx.filters.role.is_empty() || !ctx.filters.role.iter().any(|r| r == &employee.role) {
        return None;
    }
    Some(RuleHit {
        delta: ROLE_BONUS,
        reason: format!("Role '{}' fits project requirement", employee.role),
    })
}

fn skills_rule(employee: &Employee, ctx: &ScoringContext) -> Option<RuleHit> {
    let matched = substring_matches(&ctx.filters.skills, &employee.skills);
    if matched.is_empty() {
        return None;
    }
    Some(RuleHit {
        delta: SKILL_BONUS * matched.len() as f64,
        reason: format!("Employee has required skills: {}", matched.join(", ")),
    })
}

fn location_rule(employee: &Employee, ctx: &ScoringContext) -> Option<RuleHit> {
    let wanted = ctx.filters.location.as_deref()?;
    if !employee
        .location
        .to_lowercase()
        .contains(&wanted.to_lowercase())
    {
        return None;
    }
    Some(RuleHit {
        delta: LOCATION_BONUS,
        reason: format!("Located in/near {wanted}"),
    })
}

fn past_projects_rule(employee: &Employee, ctx: &ScoringContext) -> Option<RuleHit> {
    let matched = substring_matches(&ctx.filters.past_projects, &employee.past_projects);
    if matched.is_empty() {
        return None;
    }
    Some(RuleHit {
        delta: PROJECT_BONUS * matched.len() as f64,
        reason: format!("Experience in similar projects: {}", matched.join(", ")),
    })
}

/// Always fires, so every row carries at least one reason.
fn performance_rule(employee: &Employee, _ctx: &ScoringContext) -> Option<RuleHit> {
    Some(RuleHit {
        delta: employee.performance_score * 2.0 + employee.billable_utilization_pct / 10.0,
        reason: format!(
            "High performance score ({}) and utilization {}%",
            employee.performance_score, employee.billable_utilization_pct
        ),
    })
}

/// Skipped silently when either the target or the row date fails to parse;
/// a bad date only costs the bonus, never the row.
fn availability_rule(employee: &Employee, ctx: &ScoringContext) -> Option<RuleHit> {
    let target = ctx.availability_target?;
    let available = employee.availability_date()?;
    if available > target {
        return None;
    }
    Some(RuleHit {
        delta: AVAILABILITY_BONUS,
        reason: format!("Available before required date {target}"),
    })
}

/// Case-insensitive substring match of each keyword against the row's free
/// text. Each matching keyword counts once, even when spans overlap.
fn substring_matches<'a>(keywords: &'a [String], haystack: &str) -> Vec<&'a str> {
    if keywords.is_empty() {
        return Vec::new();
    }
    let haystack = haystack.to_lowercase();
    keywords
        .iter()
        .filter(|k| haystack.contains(&k.to_lowercase()))
        .map(|k| k.as_str())
        .collect()
}
