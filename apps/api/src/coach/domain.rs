//! Coarse career-domain detection over resume text.
//!
//! Domains are checked in table order; the first one with any keyword
//! contained in the lowercased text wins.

pub const GENERIC_DOMAIN: &str = "generic";

const DOMAIN_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "data",
        &["data engineer", "data scientist", "data analyst", "etl", "spark", "machine learning", "analytics"],
    ),
    (
        "software",
        &["software engineer", "developer", "backend", "frontend", "full stack", "programming"],
    ),
    (
        "cloud",
        &["devops", "kubernetes", "terraform", "site reliability", "cloud infrastructure"],
    ),
    (
        "security",
        &["security", "soc analyst", "incident response", "penetration testing"],
    ),
    (
        "management",
        &["product manager", "project manager", "program manager", "scrum master", "roadmap"],
    ),
];

/// Returns the first matching domain name, or `"generic"`.
pub fn detect_domain(text: &str) -> String {
    let text = text.trim().to_lowercase();
    if text.is_empty() {
        return GENERIC_DOMAIN.to_string();
    }

    DOMAIN_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| text.contains(kw)))
        .map(|(domain, _)| domain.to_string())
        .unwrap_or_else(|| GENERIC_DOMAIN.to_string())
}
