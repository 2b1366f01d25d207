//! Filter extraction — turns a free-text project request into a structured
//! `FilterRecord` via an ordered fallback chain of parser strategies.

pub mod local;
pub mod prompts;
pub mod remote;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::llm_client::LlmClient;

/// Structured representation of a free-text project request, used to drive
/// scoring. Collection fields default to empty and scalars to `None`, so a
/// partial remote parse still yields a fully-populated record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterRecord {
    /// Acceptable role names. Empty means no role constraint.
    #[serde(default)]
    pub role: Vec<String>,
    /// Required skill keywords, matched case-insensitively by substring.
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// Annual-cost ceiling. Reserved: parsed but not consulted by scoring.
    #[serde(default)]
    pub budget: Option<f64>,
    /// Target date; candidates available on/before it earn a bonus.
    #[serde(default)]
    pub availability_before: Option<String>,
    /// Required past-project keywords, matched like skills.
    #[serde(default)]
    pub past_projects: Vec<String>,
    /// Requested result count; overrides the caller-supplied default.
    #[serde(default)]
    pub top_n: Option<usize>,
}

/// One extraction strategy in the fallback chain.
#[async_trait]
pub trait FilterParser: Send + Sync {
    /// Name used in logs.
    fn name(&self) -> &'static str;

    /// Returns `None` when this strategy cannot produce a usable record.
    async fn parse(&self, prompt: &str) -> Option<FilterRecord>;
}

/// Ordered fallback chain of parser strategies. The first strategy returning
/// a record wins; records from different tiers are never merged field-by-field.
pub struct FilterExtractor {
    parsers: Vec<Box<dyn FilterParser>>,
}

impl FilterExtractor {
    pub fn new(parsers: Vec<Box<dyn FilterParser>>) -> Self {
        Self { parsers }
    }

    /// Builds the standard chain: the remote semantic parser (when a client
    /// is configured) followed by the local keyword parser.
    pub fn standard(llm: Option<LlmClient>) -> Self {
        let mut parsers: Vec<Box<dyn FilterParser>> = Vec::new();
        if let Some(client) = llm {
            parsers.push(Box::new(remote::LlmFilterParser::new(client)));
        }
        parsers.push(Box::new(local::LocalKeywordParser));
        Self::new(parsers)
    }

    /// Runs the chain. Infallible: the local parser always produces a record,
    /// so the trailing default only covers an empty chain.
    pub async fn extract(&self, prompt: &str) -> FilterRecord {
        for parser in &self.parsers {
            if let Some(record) = parser.parse(prompt).await {
                debug!(parser = parser.name(), "filter extraction succeeded");
                return record;
            }
        }
        FilterRecord::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Stand-in for a remote tier that is down or misconfigured.
    struct FailingParser;

    #[async_trait]
    impl FilterParser for FailingParser {
        fn name(&self) -> &'static str {
            "failing"
        }

        async fn parse(&self, _prompt: &str) -> Option<FilterRecord> {
            None
        }
    }

    /// Stand-in for a remote tier that answers with a fixed record.
    struct FixedParser(FilterRecord);

    #[async_trait]
    impl FilterParser for FixedParser {
        fn name(&self) -> &'static str {
            "fixed"
        }

        async fn parse(&self, _prompt: &str) -> Option<FilterRecord> {
            Some(self.0.clone())
        }
    }

    #[tokio::test]
    async fn test_failing_remote_falls_through_to_local() {
        let extractor = FilterExtractor::new(vec![
            Box::new(FailingParser),
            Box::new(local::LocalKeywordParser),
        ]);
        let record = extractor.extract("Need a devops crew, top 5 please").await;
        assert_eq!(record.role, vec!["DevOps Engineer".to_string()]);
        assert_eq!(record.top_n, Some(5));
    }

    #[tokio::test]
    async fn test_first_tier_wins_whole_record() {
        let remote_record = FilterRecord {
            role: vec!["Data Scientist".to_string()],
            ..FilterRecord::default()
        };
        let extractor = FilterExtractor::new(vec![
            Box::new(FixedParser(remote_record.clone())),
            Box::new(local::LocalKeywordParser),
        ]);
        // The prompt mentions Calgary, but tier-1 output replaces the whole
        // record: no field-by-field merge with the local parse.
        let record = extractor.extract("devops in calgary").await;
        assert_eq!(record, remote_record);
        assert_eq!(record.location, None);
    }

    #[tokio::test]
    async fn test_empty_chain_yields_defaults() {
        let extractor = FilterExtractor::new(vec![]);
        let record = extractor.extract("anything").await;
        assert_eq!(record, FilterRecord::default());
    }

    #[test]
    fn test_partial_remote_json_fills_defaults() {
        let record: FilterRecord =
            serde_json::from_str(r#"{"role": ["DevOps Engineer"], "top_n": 3}"#).unwrap();
        assert_eq!(record.role, vec!["DevOps Engineer".to_string()]);
        assert_eq!(record.top_n, Some(3));
        assert!(record.skills.is_empty());
        assert!(record.past_projects.is_empty());
        assert_eq!(record.location, None);
        assert_eq!(record.budget, None);
        assert_eq!(record.availability_before, None);
    }

    #[test]
    fn test_default_record_has_empty_collections() {
        let record = FilterRecord::default();
        assert!(record.role.is_empty());
        assert!(record.skills.is_empty());
        assert!(record.past_projects.is_empty());
        assert_eq!(record.location, None);
        assert_eq!(record.top_n, None);
    }
}
