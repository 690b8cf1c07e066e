//! Occupation Matcher: ranks every catalog occupation against a resume body.
//!
//! Scoring is weighted substring containment over the normalized text:
//! +5 per contained alias, +2 per contained skill, +3 if the canonical name is
//! contained. All entries are scored (zero included), sorted by score
//! descending with catalog order as the tie-break, then truncated.

use serde::Serialize;
use tracing::debug;

use crate::occupation::catalog::{OccupationCatalog, OccupationRecord};
use crate::occupation::normalize::normalize_phrase;

pub const ALIAS_WEIGHT: u32 = 5;
pub const SKILL_WEIGHT: u32 = 2;
pub const CANONICAL_WEIGHT: u32 = 3;

/// Which signals fired for one occupation. Makes every score auditable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub matched_aliases: Vec<String>,
    pub matched_skills: Vec<String>,
    pub canonical_hit: bool,
}

impl ScoreBreakdown {
    pub fn score(&self) -> u32 {
        let aliases = self.matched_aliases.len() as u32 * ALIAS_WEIGHT;
        let skills = self.matched_skills.len() as u32 * SKILL_WEIGHT;
        let canonical = if self.canonical_hit { CANONICAL_WEIGHT } else { 0 };
        aliases + skills + canonical
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub key: String,
    pub score: u32,
    pub record: OccupationRecord,
    pub breakdown: ScoreBreakdown,
}

/// Scores text against a borrowed catalog. Holds no state of its own.
#[derive(Debug, Clone, Copy)]
pub struct OccupationMatcher<'a> {
    catalog: &'a OccupationCatalog,
}

impl<'a> OccupationMatcher<'a> {
    pub fn new(catalog: &'a OccupationCatalog) -> Self {
        Self { catalog }
    }

    /// Returns at most `top_n` occupations, best first.
    pub fn rank(&self, text: &str, top_n: usize) -> Vec<MatchResult> {
        let normalized = normalize_phrase(text);

        let mut scored: Vec<(usize, ScoreBreakdown)> = self
            .catalog
            .entries()
            .iter()
            .enumerate()
            .map(|(idx, entry)| (idx, score_record(&normalized, &entry.record)))
            .collect();

        // `sort_by` is stable, so equal scores keep catalog order.
        scored.sort_by(|(_, a), (_, b)| b.score().cmp(&a.score()));
        scored.truncate(top_n);

        let entries = self.catalog.entries();
        let results: Vec<MatchResult> = scored
            .into_iter()
            .map(|(idx, breakdown)| MatchResult {
                key: entries[idx].key.clone(),
                score: breakdown.score(),
                record: entries[idx].record.clone(),
                breakdown,
            })
            .collect();

        debug!(
            top = ?results.iter().map(|r| (r.key.as_str(), r.score)).collect::<Vec<_>>(),
            "Ranked {} occupations",
            self.catalog.len()
        );

        results
    }
}

/// Scores one record against already-normalized text.
pub fn score_record(normalized_text: &str, record: &OccupationRecord) -> ScoreBreakdown {
    let matched_aliases = record
        .aliases
        .iter()
        .filter(|alias| contains_phrase(normalized_text, alias))
        .cloned()
        .collect();

    let matched_skills = record
        .skills
        .iter()
        .filter(|skill| contains_phrase(normalized_text, skill))
        .cloned()
        .collect();

    let canonical_hit = record
        .canonical
        .as_deref()
        .is_some_and(|canonical| contains_phrase(normalized_text, canonical));

    ScoreBreakdown {
        matched_aliases,
        matched_skills,
        canonical_hit,
    }
}

/// Substring containment of the normalized `needle`. An empty needle never matches.
fn contains_phrase(normalized_text: &str, needle: &str) -> bool {
    let needle = normalize_phrase(needle);
    !needle.is_empty() && normalized_text.contains(&needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data_engineer() -> OccupationRecord {
        OccupationRecord::named("Data Engineer")
            .with_aliases(["data engineer"])
            .with_skills(["SQL", "Spark", "Python"])
            .with_core_skills(["SQL"])
    }

    fn sample_catalog() -> OccupationCatalog {
        OccupationCatalog::empty()
            .with_entry("de", data_engineer())
            .with_entry(
                "web",
                OccupationRecord::named("Frontend Developer")
                    .with_aliases(["frontend developer", "web developer"])
                    .with_skills(["JavaScript", "React", "CSS"]),
            )
            .with_entry(
                "ops",
                OccupationRecord::named("DevOps Engineer")
                    .with_aliases(["devops", "site reliability"])
                    .with_skills(["Docker", "Kubernetes", "Python"]),
            )
    }

    #[test]
    fn test_end_to_end_score_alias_plus_skill() {
        let catalog = OccupationCatalog::empty().with_entry("de", data_engineer());
        let results = OccupationMatcher::new(&catalog)
            .rank("Experienced data engineer skilled in Python", 3);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].key, "de");
        assert_eq!(results[0].breakdown.matched_aliases, vec!["data engineer"]);
        assert_eq!(results[0].breakdown.matched_skills, vec!["Python"]);
        // alias (5) + python (2) + canonical "data engineer" (3)
        assert!(results[0].breakdown.canonical_hit);
        assert_eq!(results[0].score, 10);
    }

    #[test]
    fn test_canonical_name_adds_three() {
        let record = OccupationRecord::named("Data Engineer")
            .with_aliases(["data engineer"])
            .with_skills(["Python"]);
        let breakdown = score_record(&normalize_phrase("Data Engineer with Python"), &record);
        assert!(breakdown.canonical_hit);
        assert_eq!(breakdown.score(), 5 + 2 + 3);
    }

    #[test]
    fn test_each_signal_weight() {
        let record = OccupationRecord::named("Zookeeper")
            .with_aliases(["animal keeper"])
            .with_skills(["feeding"]);
        assert_eq!(score_record("animal keeper", &record).score(), 5);
        assert_eq!(score_record("feeding time", &record).score(), 2);
        assert_eq!(score_record("head zookeeper", &record).score(), 3);
        assert_eq!(score_record("nothing relevant", &record).score(), 0);
    }

    #[test]
    fn test_containment_is_substring_not_token() {
        // "sql" is found inside "postgresql"
        let record = OccupationRecord::default().with_skills(["SQL"]);
        assert_eq!(score_record("postgresql", &record).score(), 2);
    }

    #[test]
    fn test_results_sorted_descending() {
        let catalog = sample_catalog();
        let results = OccupationMatcher::new(&catalog).rank(
            "DevOps lead running Docker and Kubernetes clusters, some React and Python",
            3,
        );
        let scores: Vec<u32> = results.iter().map(|r| r.score).collect();
        let mut sorted = scores.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(scores, sorted);
        assert_eq!(results[0].key, "ops");
    }

    #[test]
    fn test_equal_scores_keep_catalog_order() {
        let catalog = OccupationCatalog::empty()
            .with_entry("second", OccupationRecord::default().with_skills(["rust"]))
            .with_entry("first", OccupationRecord::default().with_skills(["go"]))
            .with_entry("none", OccupationRecord::default().with_skills(["cobol"]));
        let results = OccupationMatcher::new(&catalog).rank("rust and go services", 3);
        let keys: Vec<&str> = results.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["second", "first", "none"]);
        assert_eq!(results[0].score, results[1].score);
    }

    #[test]
    fn test_truncation_is_min_of_top_n_and_catalog() {
        let catalog = sample_catalog();
        let matcher = OccupationMatcher::new(&catalog);
        for top_n in 0..6 {
            let results = matcher.rank("data engineer", top_n);
            assert_eq!(results.len(), top_n.min(catalog.len()), "top_n = {top_n}");
        }
    }

    #[test]
    fn test_empty_catalog_returns_empty() {
        let catalog = OccupationCatalog::empty();
        assert!(OccupationMatcher::new(&catalog).rank("data engineer", 5).is_empty());
    }

    #[test]
    fn test_blank_text_scores_zero_but_returns_entries() {
        let catalog = sample_catalog();
        let results = OccupationMatcher::new(&catalog).rank("   ", 2);
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.score == 0));
        assert_eq!(results[0].key, "de");
        assert_eq!(results[1].key, "web");
    }

    #[test]
    fn test_adding_occurrences_never_decreases_score() {
        let catalog = sample_catalog();
        let matcher = OccupationMatcher::new(&catalog);
        let base = "worked on web projects";
        let base_score = matcher
            .rank(base, 3)
            .into_iter()
            .find(|r| r.key == "web")
            .unwrap()
            .score;

        for addition in ["frontend developer", "React", "CSS", "Frontend Developer"] {
            let text = format!("{base} {addition}");
            let score = matcher
                .rank(&text, 3)
                .into_iter()
                .find(|r| r.key == "web")
                .unwrap()
                .score;
            assert!(score >= base_score, "adding {addition:?} lowered the score");
        }
    }

    #[test]
    fn test_punctuation_in_aliases_is_normalized() {
        let record = OccupationRecord::default().with_aliases(["Site-Reliability Engineer!"]);
        let text = normalize_phrase("I am a site-reliability engineer.");
        assert_eq!(score_record(&text, &record).score(), ALIAS_WEIGHT);
    }

    #[test]
    fn test_empty_aliases_never_match() {
        let record = OccupationRecord::default().with_aliases(["", "!!"]);
        assert_eq!(score_record("anything at all", &record).score(), 0);
    }

    #[test]
    fn test_duplicate_aliases_each_count() {
        let record = OccupationRecord::default().with_aliases(["devops", "DevOps"]);
        assert_eq!(score_record("devops", &record).score(), 2 * ALIAS_WEIGHT);
    }
}
