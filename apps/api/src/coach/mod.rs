// Enrichment around the occupation engine: domain and profile heuristics,
// learning plans, salary lookups, and the combined insights payload.

pub mod domain;
pub mod handlers;
pub mod insights;
pub mod learning;
pub mod profile;
pub mod salary;
