use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed numbers fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub occupations_path: PathBuf,
    pub match_top_n: usize,
    pub gap_summary_top_n: usize,
    pub salary_location: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            occupations_path: PathBuf::from(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/data/occupations.json"
            )),
            match_top_n: 3,
            gap_summary_top_n: 5,
            salary_location: "US".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Self::default();
        Ok(Config {
            port: parse_env("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            occupations_path: std::env::var("OCCUPATIONS_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.occupations_path),
            match_top_n: parse_env("MATCH_TOP_N", defaults.match_top_n)?,
            gap_summary_top_n: parse_env("GAP_SUMMARY_TOP_N", defaults.gap_summary_top_n)?,
            salary_location: std::env::var("SALARY_LOCATION").unwrap_or(defaults.salary_location),
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}
