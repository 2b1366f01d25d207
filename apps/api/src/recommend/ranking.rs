//! Ranker — orders scored rows and truncates to the requested count.

use serde::Serialize;

use super::scoring::ScoredEmployee;

/// Matches the UI slider default in the original client.
pub const DEFAULT_TOP_N: usize = 10;

/// A scored employee with its display position, 1-based. The rank carries no
/// meaning beyond presentation.
#[derive(Debug, Clone, Serialize)]
pub struct RankedEmployee {
    pub rank: usize,
    #[serde(flatten)]
    pub scored: ScoredEmployee,
}

/// The extractor's `top_n` wins when present and positive; otherwise the
/// caller-supplied default applies.
pub fn resolve_top_n(filter_top_n: Option<usize>, default_top_n: usize) -> usize {
    filter_top_n.filter(|&n| n > 0).unwrap_or(default_top_n)
}

/// Stable sort by score descending — tied scores keep roster order — then
/// truncate and re-index from 1.
pub fn rank(mut scored: Vec<ScoredEmployee>, top_n: usize) -> Vec<RankedEmployee> {
    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scored.truncate(top_n);
    scored
        .into_iter()
        .enumerate()
        .map(|(i, scored)| RankedEmployee {
            rank: i + 1,
            scored,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::employee::Employee;

    fn scored(id: &str, score: f64) -> ScoredEmployee {
        ScoredEmployee {
            score,
            reasons: "High performance score (5) and utilization 50%".to_string(),
            employee: Employee {
                employee_id: id.to_string(),
                name: format!("Employee {id}"),
                role: "DevOps Engineer".to_string(),
                skills: String::new(),
                location: String::new(),
                past_projects: String::new(),
                performance_score: 5.0,
                billable_utilization_pct: 50.0,
                annual_cost: 0.0,
                experience_years: 0.0,
                availability_start_date: String::new(),
                stake_tier: String::new(),
            },
        }
    }

    fn ids(ranked: &[RankedEmployee]) -> Vec<&str> {
        ranked
            .iter()
            .map(|r| r.scored.employee.employee_id.as_str())
            .collect()
    }

    #[test]
    fn test_sorts_descending_by_score() {
        let ranked = rank(
            vec![scored("A", 10.0), scored("B", 30.0), scored("C", 20.0)],
            10,
        );
        assert_eq!(ids(&ranked), vec!["B", "C", "A"]);
        assert!(ranked.windows(2).all(|w| w[0].scored.score >= w[1].scored.score));
    }

    #[test]
    fn test_ties_preserve_input_order() {
        let ranked = rank(
            vec![
                scored("A", 20.0),
                scored("B", 30.0),
                scored("C", 20.0),
                scored("D", 20.0),
            ],
            10,
        );
        assert_eq!(ids(&ranked), vec!["B", "A", "C", "D"]);
    }

    #[test]
    fn test_truncates_to_top_n() {
        let ranked = rank(
            vec![scored("A", 3.0), scored("B", 2.0), scored("C", 1.0)],
            2,
        );
        assert_eq!(ranked.len(), 2);
        assert_eq!(ids(&ranked), vec!["A", "B"]);
    }

    #[test]
    fn test_reindexes_from_one() {
        let ranked = rank(vec![scored("A", 1.0), scored("B", 2.0)], 10);
        assert_eq!(
            ranked.iter().map(|r| r.rank).collect::<Vec<_>>(),
            vec![1, 2]
        );
    }

    #[test]
    fn test_top_n_larger_than_roster_keeps_all() {
        let ranked = rank(vec![scored("A", 1.0)], 50);
        assert_eq!(ranked.len(), 1);
    }

    #[test]
    fn test_resolve_top_n_filter_value_wins() {
        assert_eq!(resolve_top_n(Some(5), 10), 5);
    }

    #[test]
    fn test_resolve_top_n_falls_back_to_default() {
        assert_eq!(resolve_top_n(None, 10), 10);
    }

    #[test]
    fn test_resolve_top_n_treats_zero_as_unset() {
        assert_eq!(resolve_top_n(Some(0), 10), 10);
    }
}
