//! Career coach service: occupation mapping, skill-gap scoring, and the
//! enrichment and HTTP layers around them.

pub mod coach;
pub mod config;
pub mod errors;
pub mod occupation;
pub mod routes;
pub mod session;
pub mod state;

pub use config::Config;
pub use errors::AppError;
pub use state::AppState;
