//! Shared types, error model, and configuration for job posting structured data.
//!
//! This crate is the foundation depended on by the builder and the CLI.
//! It provides:
//! - [`JobPostingError`]: the unified error type
//! - Domain types ([`JobPosting`], [`JobId`], [`EmploymentType`], [`SalaryUnit`])
//! - Configuration ([`AppConfig`], config loading)
//! - Job record loading ([`load_job_from`])

pub mod config;
pub mod error;
pub mod record;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, OutputConfig, OutputFormat, ValidationConfig, config_dir, config_file_path,
    init_config, init_config_in, load_config, load_config_from,
};
pub use error::{JobPostingError, Result};
pub use record::{RecordFormat, load_job_from, parse_job};
pub use types::{
    EmploymentType, FileReference, JobId, JobPosting, SalaryUnit, is_truthy, parse_flexible_date,
};
