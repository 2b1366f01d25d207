// All LLM prompt constants for filter extraction.

/// System prompt for filter extraction — enforces JSON-only output.
pub const FILTER_PARSE_SYSTEM: &str =
    "You are an assistant that extracts structured filters for employee recommendation. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Filter extraction prompt template. Replace `{project_request}` before sending.
pub const FILTER_PARSE_PROMPT_TEMPLATE: &str = r#"Parse the following project request into JSON filters for an employee roster.

Return a JSON object with this EXACT schema (no extra fields):
{
  "role": ["DevOps Engineer"],
  "skills": ["aws", "linux"],
  "location": "Calgary",
  "budget": 120000,
  "availability_before": "2025-10-01",
  "past_projects": ["IoT"],
  "top_n": 5
}

Rules for extraction:
- "role", "skills" and "past_projects" are arrays of keywords; use [] when the request does not constrain them.
- "location" is a single place name, or null.
- "budget" is an annual-cost ceiling in dollars, or null.
- "availability_before" is an ISO 8601 date (YYYY-MM-DD), or null.
- "top_n" is the requested number of recommendations, or null when the request names no count.
- Never invent constraints the request does not state.

Project request:
{project_request}
"#;
