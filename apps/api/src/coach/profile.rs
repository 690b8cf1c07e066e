//! Heuristic resume profile: name and e-mail pulled from plain text.
//!
//! Document parsing and LLM extraction live outside this service; callers send
//! extracted text plus an optional structured skill list.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::occupation::gap::HolderSkills;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\w.-]+@[\w.-]+\.\w+").expect("email regex is valid"));

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeProfile {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub skills: Vec<String>,
}

impl ResumeProfile {
    pub fn holder_skills(&self) -> HolderSkills {
        HolderSkills::Structured(self.skills.clone())
    }
}

pub fn heuristic_parse(text: &str, skills: &HolderSkills) -> ResumeProfile {
    let full_name = text
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(title_case);

    let email = EMAIL_RE.find(text).map(|m| m.as_str().to_string());

    ResumeProfile {
        full_name,
        email,
        skills: skills.declared().to_vec(),
    }
}

/// Uppercases the first letter of each alphabetic run and lowercases the rest.
fn title_case(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut in_word = false;
    for c in line.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}
