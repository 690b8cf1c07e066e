// Occupation mapping and skill-gap engine.
// Pure, synchronous, and side-effect free: the catalog is built once and only
// ever borrowed. Handlers wrap it for HTTP; nothing below them does I/O
// except the explicit catalog loaders.

pub mod catalog;
pub mod gap;
pub mod handlers;
pub mod matcher;
pub mod normalize;
pub mod resolver;

pub use catalog::{CatalogError, OccupationCatalog, OccupationRecord};
pub use gap::{analyze, summarize, HolderSkills, Impact, SkillGapEntry};
pub use matcher::{MatchResult, OccupationMatcher, ScoreBreakdown};
pub use resolver::{resolve_primary, PrimaryOccupation, FALLBACK_OCCUPATION};
