//! Remote semantic tier — a single best-effort LLM parse of the prompt.

use async_trait::async_trait;
use tracing::warn;

use super::prompts::{FILTER_PARSE_PROMPT_TEMPLATE, FILTER_PARSE_SYSTEM};
use super::{FilterParser, FilterRecord};
use crate::llm_client::LlmClient;

/// Wraps the LLM client as a `FilterParser`. One attempt per request; every
/// failure mode (network, timeout, non-JSON output, API error) collapses to
/// `None` so the chain falls through to the local keyword parser.
pub struct LlmFilterParser {
    llm: LlmClient,
}

impl LlmFilterParser {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl FilterParser for LlmFilterParser {
    fn name(&self) -> &'static str {
        "llm"
    }

    async fn parse(&self, prompt: &str) -> Option<FilterRecord> {
        let request = FILTER_PARSE_PROMPT_TEMPLATE.replace("{project_request}", prompt);
        match self
            .llm
            .call_json::<FilterRecord>(&request, FILTER_PARSE_SYSTEM)
            .await
        {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Remote filter parse failed, using local parser: {e}");
                None
            }
        }
    }
}
