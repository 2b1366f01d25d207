// Recommendation pipeline: extract filters → score roster → rank → export.
// Extraction lives in `crate::filters`; this module owns the scoring rule
// table, the ranker, the CSV export, and the HTTP handlers.

pub mod export;
pub mod handlers;
pub mod ranking;
pub mod scoring;
