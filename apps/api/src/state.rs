use std::sync::Arc;

use crate::coach::learning::{CuratedLearningProvider, LearningProvider};
use crate::coach::salary::{FallbackSalaryTable, SalaryProvider};
use crate::config::Config;
use crate::occupation::catalog::OccupationCatalog;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Loaded once at startup, never mutated.
    pub catalog: Arc<OccupationCatalog>,
    pub sessions: SessionStore,
    /// Pluggable enrichment backends. Default: offline curated tables.
    pub learning: Arc<dyn LearningProvider>,
    pub salary: Arc<dyn SalaryProvider>,
}

impl AppState {
    pub fn new(config: Config, catalog: OccupationCatalog) -> Self {
        Self {
            config,
            catalog: Arc::new(catalog),
            sessions: SessionStore::default(),
            learning: Arc::new(CuratedLearningProvider),
            salary: Arc::new(FallbackSalaryTable),
        }
    }
}
