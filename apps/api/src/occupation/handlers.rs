//! Axum route handlers for the occupation engine.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::occupation::gap::{analyze, summarize, HolderSkills, SkillGapEntry};
use crate::occupation::matcher::{MatchResult, OccupationMatcher};
use crate::occupation::resolver::{resolve_primary, PrimaryOccupation};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct OccupationSummary {
    pub key: String,
    pub canonical: String,
    pub skill_count: usize,
}

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    #[serde(default)]
    pub text: String,
    pub top_n: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub matches: Vec<MatchResult>,
}

#[derive(Debug, Deserialize)]
pub struct ResolveRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct SkillGapRequest {
    /// Any JSON shape; only arrays (or objects with a `skills` array) count.
    #[serde(default)]
    pub skills: Value,
    pub occupation_key: Option<String>,
    pub text: Option<String>,
    pub top_n: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct SkillGapResponse {
    pub occupation: String,
    pub occupation_key: Option<String>,
    pub gaps: Vec<SkillGapEntry>,
    pub summary: Vec<SkillGapEntry>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/occupations
pub async fn handle_list_occupations(State(state): State<AppState>) -> Json<Vec<OccupationSummary>> {
    let summaries = state
        .catalog
        .iter()
        .map(|(key, record)| OccupationSummary {
            key: key.to_string(),
            canonical: record.display_name(key).to_string(),
            skill_count: record.skills.len(),
        })
        .collect();
    Json(summaries)
}

/// POST /api/v1/occupations/match
///
/// Ranks catalog occupations against the text. Blank text is allowed and
/// yields zero scores in catalog order.
pub async fn handle_match(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Json<MatchResponse> {
    let top_n = request.top_n.unwrap_or(state.config.match_top_n);
    let matches = OccupationMatcher::new(&state.catalog).rank(&request.text, top_n);
    Json(MatchResponse { matches })
}

/// POST /api/v1/occupations/resolve
pub async fn handle_resolve(
    State(state): State<AppState>,
    Json(request): Json<ResolveRequest>,
) -> Json<PrimaryOccupation> {
    Json(resolve_primary(&state.catalog, &request.text))
}

/// POST /api/v1/skill-gaps
///
/// Target occupation is `occupation_key` when given, otherwise resolved from
/// `text`. Malformed `skills` never fails the request; it analyses as empty.
pub async fn handle_skill_gaps(
    State(state): State<AppState>,
    Json(request): Json<SkillGapRequest>,
) -> Result<Json<SkillGapResponse>, AppError> {
    let (occupation, occupation_key, record) = match request.occupation_key {
        Some(key) => {
            let record = state
                .catalog
                .get(&key)
                .cloned()
                .ok_or_else(|| AppError::NotFound(format!("Occupation '{key}' not found")))?;
            (record.display_name(&key).to_string(), Some(key), record)
        }
        None => {
            let primary = resolve_primary(&state.catalog, request.text.as_deref().unwrap_or(""));
            (primary.name, primary.key, primary.record)
        }
    };

    let holder = HolderSkills::from_value(&request.skills);
    let gaps = analyze(&holder, &record);
    let summary = summarize(
        &gaps,
        request.top_n.unwrap_or(state.config.gap_summary_top_n),
    );

    Ok(Json(SkillGapResponse {
        occupation,
        occupation_key,
        gaps,
        summary,
    }))
}
