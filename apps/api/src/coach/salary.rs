//! Salary insight for a resolved occupation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

pub const DEFAULT_LOCATION: &str = "US";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryInsight {
    pub role: String,
    pub average_salary: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub growth: Option<String>,
    pub source: String,
}

impl SalaryInsight {
    pub fn not_found(role: &str, location: &str) -> Self {
        Self {
            role: role.to_string(),
            average_salary: "Not Found".to_string(),
            location: location.to_string(),
            growth: None,
            source: "N/A".to_string(),
        }
    }
}

#[async_trait]
pub trait SalaryProvider: Send + Sync {
    async fn lookup(&self, role: &str, location: &str) -> anyhow::Result<SalaryInsight>;
}

/// Static role → salary table. First row whose key occurs in the role wins.
pub struct FallbackSalaryTable;

const FALLBACK_SALARIES: &[(&str, &str)] = &[
    ("data engineer", "$120,000 / year"),
    ("backend", "$110,000 / year"),
    ("frontend", "$105,000 / year"),
    ("analyst", "$95,000 / year"),
    ("generic", "$85,000 / year"),
];

#[async_trait]
impl SalaryProvider for FallbackSalaryTable {
    async fn lookup(&self, role: &str, location: &str) -> anyhow::Result<SalaryInsight> {
        let role = role.trim().to_lowercase();
        let insight = FALLBACK_SALARIES
            .iter()
            .find(|(key, _)| role.contains(key))
            .map(|(_, salary)| SalaryInsight {
                role: role.clone(),
                average_salary: salary.to_string(),
                location: location.to_string(),
                growth: None,
                source: "Fallback".to_string(),
            })
            .unwrap_or_else(|| SalaryInsight::not_found(&role, location));
        Ok(insight)
    }
}

/// Looks up a salary, degrading to "Not Found" if the provider errors.
pub async fn salary_insight(
    occupation: &str,
    location: &str,
    provider: &dyn SalaryProvider,
) -> SalaryInsight {
    match provider.lookup(occupation, location).await {
        Ok(insight) => insight,
        Err(e) => {
            warn!("Salary lookup failed for '{occupation}': {e}");
            SalaryInsight::not_found(&occupation.trim().to_lowercase(), location)
        }
    }
}
