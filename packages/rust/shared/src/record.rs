//! Loading job records handed over by the hosting content system.

use std::path::Path;

use tracing::{debug, instrument};

use crate::error::{JobPostingError, Result};
use crate::types::JobPosting;

/// Serialization format of a job record file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    Toml,
    Json,
}

impl RecordFormat {
    /// Pick the format from a file extension (`.toml` or `.json`).
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            _ => Err(JobPostingError::parse(format!(
                "cannot infer record format of {}: expected a .toml or .json file",
                path.display()
            ))),
        }
    }
}

/// Parse a job record from a string in the given format.
pub fn parse_job(content: &str, format: RecordFormat) -> Result<JobPosting> {
    match format {
        RecordFormat::Toml => {
            toml::from_str(content).map_err(|e| JobPostingError::parse(e.to_string()))
        }
        RecordFormat::Json => {
            serde_json::from_str(content).map_err(|e| JobPostingError::parse(e.to_string()))
        }
    }
}

/// Read and parse a job record file.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn load_job_from(path: &Path) -> Result<JobPosting> {
    let format = RecordFormat::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|e| JobPostingError::io(path, e))?;

    let job = parse_job(&content, format).map_err(|e| match e {
        JobPostingError::Parse { message } => {
            JobPostingError::parse(format!("failed to parse {}: {message}", path.display()))
        }
        other => other,
    })?;

    debug!(id = %job.id, ?format, "loaded job record");
    Ok(job)
}
