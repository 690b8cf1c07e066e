pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::coach::handlers as coach;
use crate::occupation::handlers as occupation;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Occupation engine
        .route("/api/v1/occupations", get(occupation::handle_list_occupations))
        .route("/api/v1/occupations/match", post(occupation::handle_match))
        .route("/api/v1/occupations/resolve", post(occupation::handle_resolve))
        .route("/api/v1/skill-gaps", post(occupation::handle_skill_gaps))
        // Resume sessions
        .route("/api/v1/resumes", post(coach::handle_upload_resume))
        .route(
            "/api/v1/resumes/:user_id/insights",
            get(coach::handle_insights),
        )
        .with_state(state)
}
