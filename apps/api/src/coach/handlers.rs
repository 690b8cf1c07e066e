//! Axum route handlers for resume upload and career insights.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::coach::insights::{build_insights, CareerInsights, InsightOptions, InsightProviders};
use crate::coach::profile::{heuristic_parse, ResumeProfile};
use crate::errors::AppError;
use crate::occupation::gap::HolderSkills;
use crate::session::ResumeSession;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UploadResumeRequest {
    pub user_id: Option<Uuid>,
    pub text: String,
    #[serde(default)]
    pub skills: Value,
}

#[derive(Debug, Serialize)]
pub struct UploadResumeResponse {
    pub user_id: Uuid,
    pub parsed_resume: ResumeProfile,
}

/// POST /api/v1/resumes
///
/// Stores extracted resume text and the holder's skill list. A new `user_id`
/// is issued when none is supplied.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    Json(request): Json<UploadResumeRequest>,
) -> Result<Json<UploadResumeResponse>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    let user_id = request.user_id.unwrap_or_else(Uuid::new_v4);
    let skills = HolderSkills::from_value(&request.skills);
    let profile = heuristic_parse(&request.text, &skills);

    state
        .sessions
        .upsert(ResumeSession {
            user_id,
            resume_text: request.text,
            profile: profile.clone(),
            uploaded_at: Utc::now(),
        })
        .await;

    info!(%user_id, skills = profile.skills.len(), "Resume stored");

    Ok(Json(UploadResumeResponse {
        user_id,
        parsed_resume: profile,
    }))
}

/// GET /api/v1/resumes/:user_id/insights
pub async fn handle_insights(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<CareerInsights>, AppError> {
    let session = state
        .sessions
        .get(user_id)
        .await
        .ok_or_else(|| AppError::NotFound("Upload resume first".to_string()))?;

    let options = InsightOptions {
        gap_summary_top_n: state.config.gap_summary_top_n,
        location: state.config.salary_location.clone(),
    };
    let providers = InsightProviders {
        learning: state.learning.as_ref(),
        salary: state.salary.as_ref(),
    };

    let insights = build_insights(
        &state.catalog,
        &session.resume_text,
        &session.profile.holder_skills(),
        providers,
        &options,
    )
    .await;

    Ok(Json(insights))
}
