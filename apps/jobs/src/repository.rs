use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::errors::DataUnavailableError;
use crate::models::Job;

/// Source of job records, in load order.
pub trait JobRepository {
    fn load_all(&self) -> Result<Vec<Job>, DataUnavailableError>;
}

/// Reads a JSON array of feed records from disk on every `load_all`.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileRepository { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl JobRepository for JsonFileRepository {
    fn load_all(&self) -> Result<Vec<Job>, DataUnavailableError> {
        debug!("Reading job data from {}", self.path.display());

        let raw = std::fs::read_to_string(&self.path).map_err(|source| {
            DataUnavailableError::Io {
                path: self.path.clone(),
                source,
            }
        })?;

        let jobs: Vec<Job> =
            serde_json::from_str(&raw).map_err(|source| DataUnavailableError::Decode {
                path: self.path.clone(),
                source,
            })?;

        let jobs: Vec<Job> = jobs.into_iter().map(Job::with_derived_caption).collect();
        info!("Loaded {} jobs from {}", jobs.len(), self.path.display());
        Ok(jobs)
    }
}
