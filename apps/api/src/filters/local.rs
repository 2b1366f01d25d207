//! Local deterministic parser — the always-available tier of the chain.
//!
//! A fixed, ordered table of keyword rules applied against the lower-cased
//! prompt. Each rule independently mutates one filter field, so rules can be
//! added and tested in isolation.

use async_trait::async_trait;

use super::{FilterParser, FilterRecord};

/// Effect a matched keyword applies to the record under construction.
enum RuleEffect {
    AddRole(&'static str),
    AddProjectTag(&'static str),
    /// Single-valued: a later matching rule overwrites an earlier one.
    SetLocation(&'static str),
    /// First matching count phrase wins; later ones are ignored.
    SetTopN(usize),
}

/// Keyword rules in declaration order.
const RULES: &[(&str, RuleEffect)] = &[
    ("devops", RuleEffect::AddRole("DevOps Engineer")),
    ("data scientist", RuleEffect::AddRole("Data Scientist")),
    ("iot", RuleEffect::AddProjectTag("IoT")),
    ("fintech", RuleEffect::AddProjectTag("Fintech")),
    ("calgary", RuleEffect::SetLocation("Calgary")),
    ("toronto", RuleEffect::SetLocation("Toronto")),
    ("top 5", RuleEffect::SetTopN(5)),
    ("top 10", RuleEffect::SetTopN(10)),
    ("top 20", RuleEffect::SetTopN(20)),
];

pub struct LocalKeywordParser;

impl LocalKeywordParser {
    /// Pure rule application; the async trait wrapper below never fails.
    pub fn parse_prompt(prompt: &str) -> FilterRecord {
        let text = prompt.to_lowercase();
        let mut record = FilterRecord::default();

        for (keyword, effect) in RULES {
            if !text.contains(keyword) {
                continue;
            }
            match effect {
                RuleEffect::AddRole(role) => record.role.push((*role).to_string()),
                RuleEffect::AddProjectTag(tag) => {
                    record.past_projects.push((*tag).to_string())
                }
                RuleEffect::SetLocation(place) => {
                    record.location = Some((*place).to_string())
                }
                RuleEffect::SetTopN(n) => {
                    if record.top_n.is_none() {
                        record.top_n = Some(*n);
                    }
                }
            }
        }

        record
    }
}

#[async_trait]
impl FilterParser for LocalKeywordParser {
    fn name(&self) -> &'static str {
        "local-keyword"
    }

    async fn parse(&self, prompt: &str) -> Option<FilterRecord> {
        Some(Self::parse_prompt(prompt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_devops_top_5_prompt() {
        let record =
            LocalKeywordParser::parse_prompt("We need a DevOps team for Q3, top 5 candidates");
        assert_eq!(record.role, vec!["DevOps Engineer".to_string()]);
        assert_eq!(record.top_n, Some(5));
    }

    #[test]
    fn test_empty_prompt_yields_all_defaults() {
        let record = LocalKeywordParser::parse_prompt("");
        assert_eq!(record, FilterRecord::default());
    }

    #[test]
    fn test_domain_keyword_adds_project_tag() {
        let record = LocalKeywordParser::parse_prompt("greenfield IoT rollout");
        assert_eq!(record.past_projects, vec!["IoT".to_string()]);
    }

    #[test]
    fn test_location_last_match_wins() {
        let record = LocalKeywordParser::parse_prompt("based in Calgary or Toronto");
        assert_eq!(record.location, Some("Toronto".to_string()));
    }

    #[test]
    fn test_top_n_first_declared_rule_wins() {
        // Both count phrases present: "top 5" is declared first, so it wins
        // regardless of position in the prompt.
        let record = LocalKeywordParser::parse_prompt("top 10 would be fine, or top 5");
        assert_eq!(record.top_n, Some(5));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let record = LocalKeywordParser::parse_prompt("DEVOPS in CALGARY");
        assert_eq!(record.role, vec!["DevOps Engineer".to_string()]);
        assert_eq!(record.location, Some("Calgary".to_string()));
    }

    #[test]
    fn test_multiple_fields_accumulate_independently() {
        let record =
            LocalKeywordParser::parse_prompt("devops for a fintech and iot push, top 10");
        assert_eq!(record.role, vec!["DevOps Engineer".to_string()]);
        assert_eq!(
            record.past_projects,
            vec!["IoT".to_string(), "Fintech".to_string()]
        );
        assert_eq!(record.top_n, Some(10));
    }
}
