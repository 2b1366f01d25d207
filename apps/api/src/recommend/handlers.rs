use axum::extract::{Multipart, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::filters::FilterRecord;
use crate::models::employee::Employee;
use crate::roster::parse_roster;
use crate::state::AppState;

use super::export::to_csv;
use super::ranking::{rank, resolve_top_n, RankedEmployee, DEFAULT_TOP_N};
use super::scoring::score_roster;

/// Fields accepted by both recommendation endpoints: `roster` (CSV file),
/// `prompt` (free text, may be empty), `top_n` (default result count, used
/// only when the extractor yields none).
#[derive(Debug)]
struct RecommendRequest {
    roster: Vec<Employee>,
    prompt: String,
    default_top_n: usize,
}

async fn read_multipart(multipart: &mut Multipart) -> Result<RecommendRequest, AppError> {
    let mut roster: Option<Vec<Employee>> = None;
    let mut prompt = String::new();
    let mut default_top_n = DEFAULT_TOP_N;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart request: {e}")))?
    {
        // Copy the name out before consuming the field body.
        let name = field.name().map(|n| n.to_string());
        match name.as_deref() {
            Some("roster") => {
                let data = field.bytes().await.map_err(|e| {
                    AppError::Validation(format!("Could not read roster upload: {e}"))
                })?;
                roster = Some(parse_roster(&data)?);
            }
            Some("prompt") => {
                prompt = field.text().await.map_err(|e| {
                    AppError::Validation(format!("Could not read prompt field: {e}"))
                })?;
            }
            Some("top_n") => {
                let raw = field.text().await.map_err(|e| {
                    AppError::Validation(format!("Could not read top_n field: {e}"))
                })?;
                default_top_n = raw.trim().parse::<usize>().ok().filter(|&n| n > 0).ok_or_else(
                    || AppError::Validation(format!("top_n must be a positive integer, got '{raw}'")),
                )?;
            }
            _ => {}
        }
    }

    build_request(roster, prompt, default_top_n)
}

/// Assembles the request once all fields are read. A missing roster is a
/// validation error carrying the upload guidance, never an empty table.
fn build_request(
    roster: Option<Vec<Employee>>,
    prompt: String,
    default_top_n: usize,
) -> Result<RecommendRequest, AppError> {
    let roster = roster.ok_or_else(|| {
        AppError::Validation("Please upload an employee roster CSV to begin".to_string())
    })?;

    Ok(RecommendRequest {
        roster,
        prompt,
        default_top_n,
    })
}

#[derive(Serialize)]
pub struct RecommendResponse {
    pub top_n: usize,
    /// The filter record that drove scoring, echoed back for transparency.
    pub filters: FilterRecord,
    pub recommendations: Vec<RankedEmployee>,
}

/// POST /api/v1/recommend
/// Runs extract → score → rank and returns the top-N table as JSON.
pub async fn handle_recommend(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<RecommendResponse>, AppError> {
    let req = read_multipart(&mut multipart).await?;

    let filters = state.extractor.extract(&req.prompt).await;
    let top_n = resolve_top_n(filters.top_n, req.default_top_n);
    let scored = score_roster(&req.roster, &filters);
    let recommendations = rank(scored, top_n);

    info!(
        rows = req.roster.len(),
        top_n,
        returned = recommendations.len(),
        "recommendation pipeline complete"
    );

    Ok(Json(RecommendResponse {
        top_n,
        filters,
        recommendations,
    }))
}

/// POST /api/v1/recommend/export
/// Same inputs, but returns the FULL scored-and-ranked table as a CSV
/// download — no top-N cut, matching the results-download behavior.
pub async fn handle_export(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let req = read_multipart(&mut multipart).await?;

    let filters = state.extractor.extract(&req.prompt).await;
    let row_count = req.roster.len();
    let scored = score_roster(&req.roster, &filters);
    let ranked = rank(scored, row_count);

    let body = to_csv(&ranked)?;

    info!(rows = row_count, "recommendation export complete");

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"recommendations.csv\"",
            ),
        ],
        body,
    ))
}
