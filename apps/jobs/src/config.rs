use std::path::PathBuf;

use anyhow::{bail, Context, Result};

/// Driver configuration loaded from environment variables.
/// Every value has a default; only malformed values are rejected.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_path: PathBuf,
    pub page_size: usize,
    pub company_prefix: String,
    pub search_term: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let page_size = lookup("JOBS_PAGE_SIZE")
            .unwrap_or_else(|| "20".to_string())
            .parse::<usize>()
            .context("JOBS_PAGE_SIZE must be a positive integer")?;
        if page_size == 0 {
            bail!("JOBS_PAGE_SIZE must be a positive integer");
        }

        Ok(Config {
            data_path: lookup("JOBS_DATA_PATH")
                .unwrap_or_else(|| "data/jobs.json".to_string())
                .into(),
            page_size,
            company_prefix: lookup("JOBS_COMPANY_PREFIX").unwrap_or_else(|| "N".to_string()),
            search_term: lookup("JOBS_SEARCH_TERM").unwrap_or_else(|| "Developer".to_string()),
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}
