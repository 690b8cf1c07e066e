//! Primary-occupation selection: rank 1 of the matcher, or a generic sentinel.

use serde::Serialize;
use tracing::debug;

use crate::occupation::catalog::{OccupationCatalog, OccupationRecord};
use crate::occupation::matcher::OccupationMatcher;

pub const FALLBACK_OCCUPATION: &str = "General Professional";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrimaryOccupation {
    pub name: String,
    /// `None` when the sentinel was used.
    pub key: Option<String>,
    pub score: u32,
    pub record: OccupationRecord,
    pub fallback: bool,
}

impl PrimaryOccupation {
    /// The sentinel returned when the catalog has nothing to offer.
    pub fn general() -> Self {
        Self {
            name: FALLBACK_OCCUPATION.to_string(),
            key: None,
            score: 0,
            record: OccupationRecord::named(FALLBACK_OCCUPATION),
            fallback: true,
        }
    }
}

/// Picks the best-scoring occupation for `text`.
///
/// A zero score still wins when it is the top entry; the sentinel is only used
/// when the matcher returns nothing, i.e. the catalog is empty.
pub fn resolve_primary(catalog: &OccupationCatalog, text: &str) -> PrimaryOccupation {
    let Some(top) = OccupationMatcher::new(catalog).rank(text, 1).into_iter().next() else {
        debug!("Empty occupation catalog, using {FALLBACK_OCCUPATION}");
        return PrimaryOccupation::general();
    };

    let name = top.record.display_name(&top.key).to_string();
    debug!(key = %top.key, score = top.score, "Resolved primary occupation {name}");

    PrimaryOccupation {
        name,
        key: Some(top.key),
        score: top.score,
        record: top.record,
        fallback: false,
    }
}
