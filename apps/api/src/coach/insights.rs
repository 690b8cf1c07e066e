//! Career insights: the engine context assembled for one holder.
//!
//! Flow: resume text → domain and primary occupation → gap analysis →
//! gap summary → learning plan + salary. Only the last two touch providers.

use serde::Serialize;
use tracing::info;

use crate::coach::domain::detect_domain;
use crate::coach::learning::{build_learning_plan, LearningPlan, LearningProvider};
use crate::coach::salary::{salary_insight, SalaryInsight, SalaryProvider};
use crate::occupation::catalog::{OccupationCatalog, OccupationRecord};
use crate::occupation::gap::{analyze, summarize, HolderSkills, SkillGapEntry};
use crate::occupation::resolver::resolve_primary;

#[derive(Debug, Clone, Serialize)]
pub struct CareerInsights {
    pub domain: String,
    pub primary_occupation: String,
    pub occupation_key: Option<String>,
    pub match_score: u32,
    pub fallback_occupation: bool,
    pub occupation_meta: OccupationRecord,
    /// Top missing skills, most important first.
    pub skill_gaps: Vec<SkillGapEntry>,
    pub learning_plan: LearningPlan,
    pub salary: SalaryInsight,
}

#[derive(Debug, Clone)]
pub struct InsightOptions {
    pub gap_summary_top_n: usize,
    pub location: String,
}

pub struct InsightProviders<'a> {
    pub learning: &'a dyn LearningProvider,
    pub salary: &'a dyn SalaryProvider,
}

pub async fn build_insights(
    catalog: &OccupationCatalog,
    resume_text: &str,
    holder: &HolderSkills,
    providers: InsightProviders<'_>,
    options: &InsightOptions,
) -> CareerInsights {
    let domain = detect_domain(resume_text);
    let primary = resolve_primary(catalog, resume_text);
    let gaps = analyze(holder, &primary.record);
    let skill_gaps = summarize(&gaps, options.gap_summary_top_n);

    let learning_plan = build_learning_plan(&primary.name, &gaps, providers.learning).await;
    let salary = salary_insight(&primary.name, &options.location, providers.salary).await;

    info!(
        %domain,
        occupation = %primary.name,
        score = primary.score,
        missing = skill_gaps.len(),
        "Built career insights"
    );

    CareerInsights {
        domain,
        primary_occupation: primary.name,
        occupation_key: primary.key,
        match_score: primary.score,
        fallback_occupation: primary.fallback,
        occupation_meta: primary.record,
        skill_gaps,
        learning_plan,
        salary,
    }
}
