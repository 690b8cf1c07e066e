//! Learning-plan enrichment: course suggestions for the most important gaps.
//!
//! Resources come from a pluggable `LearningProvider` held in `AppState` as
//! `Arc<dyn LearningProvider>`. The default is an offline curated table; a
//! provider that fails degrades to an empty resource list for that skill.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::occupation::gap::{Impact, SkillGapEntry};

/// How many missing skills get a learning step.
pub const PLAN_SKILL_LIMIT: usize = 3;
pub const RESOURCES_PER_SKILL: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningResource {
    pub title: String,
    pub url: String,
    pub platform: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LearningStep {
    pub skill: String,
    pub impact: Impact,
    pub resources: Vec<LearningResource>,
}

/// Either a short summary (nothing missing) or one step per top gap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LearningPlan {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub steps: Vec<LearningStep>,
}

#[async_trait]
pub trait LearningProvider: Send + Sync {
    async fn resources(&self, query: &str, limit: usize) -> anyhow::Result<Vec<LearningResource>>;
}

/// Offline provider backed by a small curated table.
pub struct CuratedLearningProvider;

const CURATED: &[(&str, &[(&str, &str, &str)])] = &[
    (
        "data engineer",
        &[
            (
                "Data Engineering on Google Cloud",
                "https://www.coursera.org/learn/data-engineering-gcp",
                "Coursera",
            ),
            (
                "Modern Data Engineering with Spark",
                "https://www.edx.org/learn/spark",
                "EdX",
            ),
        ],
    ),
    (
        "python",
        &[(
            "Python for Everybody",
            "https://www.coursera.org/specializations/python",
            "Coursera",
        )],
    ),
];

const DEFAULT_COURSES: &[(&str, &str, &str)] = &[(
    "Career Success Specialization",
    "https://www.coursera.org/specializations/career-success",
    "Coursera",
)];

impl CuratedLearningProvider {
    fn lookup(query: &str) -> &'static [(&'static str, &'static str, &'static str)] {
        let query = query.trim().to_lowercase();
        CURATED
            .iter()
            .find(|(key, _)| query.contains(key))
            .map(|(_, courses)| *courses)
            .unwrap_or(DEFAULT_COURSES)
    }
}

#[async_trait]
impl LearningProvider for CuratedLearningProvider {
    async fn resources(&self, query: &str, limit: usize) -> anyhow::Result<Vec<LearningResource>> {
        Ok(Self::lookup(query)
            .iter()
            .take(limit)
            .map(|(title, url, platform)| LearningResource {
                title: title.to_string(),
                url: url.to_string(),
                platform: platform.to_string(),
            })
            .collect())
    }
}

/// Builds a plan from an impact-sorted gap list.
pub async fn build_learning_plan(
    occupation: &str,
    gaps: &[SkillGapEntry],
    provider: &dyn LearningProvider,
) -> LearningPlan {
    let missing: Vec<&SkillGapEntry> = gaps
        .iter()
        .filter(|g| !g.present)
        .take(PLAN_SKILL_LIMIT)
        .collect();

    if missing.is_empty() {
        return LearningPlan {
            summary: Some(format!(
                "You already meet most core expectations for {occupation}. Focus on advanced projects."
            )),
            steps: vec![],
        };
    }

    let mut steps = Vec::with_capacity(missing.len());
    for gap in missing {
        let resources = match provider.resources(&gap.skill, RESOURCES_PER_SKILL).await {
            Ok(resources) => resources,
            Err(e) => {
                warn!("Learning lookup failed for '{}': {e}", gap.skill);
                vec![]
            }
        };
        steps.push(LearningStep {
            skill: gap.skill.clone(),
            impact: gap.impact,
            resources,
        });
    }

    LearningPlan {
        summary: None,
        steps,
    }
}
