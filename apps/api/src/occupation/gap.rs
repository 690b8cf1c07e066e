//! Skill Gap Analyzer and Gap Summarizer.
//!
//! `analyze` emits one entry per required skill of the target occupation,
//! classified by impact and sorted missing-first, then high → medium → low.
//! `summarize` keeps the leading missing entries of that ordering.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::occupation::catalog::OccupationRecord;
use crate::occupation::normalize::{coerce_text, normalize_token};

/// Substrings that lift a non-core skill to medium impact.
const HIGH_SIGNAL_TERMS: &[&str] = &[
    "sql",
    "python",
    "cloud",
    "etl",
    "docker",
    "kubernetes",
    "spark",
];

/// Variant order is the sort rank: High < Medium < Low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    High,
    Medium,
    Low,
}

impl Impact {
    pub fn as_str(self) -> &'static str {
        match self {
            Impact::High => "high",
            Impact::Medium => "medium",
            Impact::Low => "low",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGapEntry {
    pub skill: String,
    pub skill_normalized: String,
    pub present: bool,
    pub impact: Impact,
}

/// The holder's declared skills as received from the ingestion layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HolderSkills {
    /// A proper skill list.
    Structured(Vec<String>),
    /// Free text supplied where a list was expected. Analyzed as no skills.
    Unstructured(String),
}

impl Default for HolderSkills {
    fn default() -> Self {
        HolderSkills::Structured(Vec::new())
    }
}

impl<S: Into<String>> FromIterator<S> for HolderSkills {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        HolderSkills::Structured(iter.into_iter().map(Into::into).collect())
    }
}

impl HolderSkills {
    /// Interprets an arbitrary JSON payload.
    ///
    /// Arrays, and objects carrying a `skills` array, are structured lists:
    /// falsy items (null, `false`, zero, empty strings and containers) are
    /// dropped and the rest coerced to text. Anything else is unstructured.
    pub fn from_value(value: &Value) -> Self {
        let items = match value {
            Value::Array(items) => items,
            Value::Object(fields) => match fields.get("skills") {
                Some(Value::Array(items)) => items,
                _ => return HolderSkills::Unstructured(value.to_string()),
            },
            other => return HolderSkills::Unstructured(coerce_text(other).into_owned()),
        };

        HolderSkills::Structured(
            items
                .iter()
                .filter(|item| !is_falsy(item))
                .map(coerce_text)
                .filter(|s| !s.trim().is_empty())
                .map(|s| s.into_owned())
                .collect(),
        )
    }

    /// Declared skills as given, or nothing for unstructured input.
    pub fn declared(&self) -> &[String] {
        match self {
            HolderSkills::Structured(skills) => skills,
            HolderSkills::Unstructured(_) => &[],
        }
    }

    /// Normalized skill set used for presence checks.
    pub fn normalized_set(&self) -> HashSet<String> {
        self.declared()
            .iter()
            .map(|s| normalize_token(s))
            .filter(|s| !s.is_empty())
            .collect()
    }
}

pub fn classify_impact(skill_normalized: &str, core_skills: &HashSet<String>) -> Impact {
    if core_skills.contains(skill_normalized) {
        Impact::High
    } else if HIGH_SIGNAL_TERMS
        .iter()
        .any(|term| skill_normalized.contains(term))
    {
        Impact::Medium
    } else {
        Impact::Low
    }
}

/// Diffs the holder's skills against every required skill of `occupation`.
pub fn analyze(holder: &HolderSkills, occupation: &OccupationRecord) -> Vec<SkillGapEntry> {
    let holder_set = holder.normalized_set();
    let core_skills: HashSet<String> = occupation
        .core_skills
        .iter()
        .map(|s| normalize_token(s))
        .collect();

    let mut gaps: Vec<SkillGapEntry> = occupation
        .skills
        .iter()
        .map(|skill| {
            let skill_normalized = normalize_token(skill);
            SkillGapEntry {
                skill: skill.clone(),
                present: holder_set.contains(&skill_normalized),
                impact: classify_impact(&skill_normalized, &core_skills),
                skill_normalized,
            }
        })
        .collect();

    gaps.sort_by_key(|g| (g.present, g.impact));
    gaps
}

/// The first `top_n` missing entries, in input order.
pub fn summarize(gaps: &[SkillGapEntry], top_n: usize) -> Vec<SkillGapEntry> {
    gaps.iter()
        .filter(|g| !g.present)
        .take(top_n)
        .cloned()
        .collect()
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
        Value::Bool(true) => false,
    }
}
