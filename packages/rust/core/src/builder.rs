//! Job record → JSON-LD structured data.
//!
//! The builder is a pure mapping: it never repairs a record, never emits a
//! partial document, and produces byte-identical output for identical input.

use tracing::{debug, instrument};

use jobposting_shared::{AppConfig, JobPosting, JobPostingError, OutputFormat, Result};

use crate::document::{
    Country, JobPostingDocument, MonetaryAmount, Organization, Place, PostalAddress,
    PropertyValue, SCHEMA_CONTEXT, TELECOMMUTE,
};
use crate::validate::{require_fields, validate};

/// Opening tag wrapped around the JSON body.
pub const SCRIPT_OPEN: &str = r#"<script type="application/ld+json">"#;
/// Closing tag wrapped around the JSON body.
pub const SCRIPT_CLOSE: &str = "</script>";

/// Date format used for `datePosted` and `validThrough`.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Options controlling how records are checked before building.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildOptions {
    /// Run [`validate`] before building instead of only checking required fields.
    pub strict: bool,
}

impl From<&AppConfig> for BuildOptions {
    fn from(config: &AppConfig) -> Self {
        Self {
            strict: config.validation.strict,
        }
    }
}

/// Maps a [`JobPosting`] to a schema.org `JobPosting` document.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuredDataBuilder {
    options: BuildOptions,
}

impl StructuredDataBuilder {
    pub fn new(options: BuildOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> BuildOptions {
        self.options
    }

    /// Build the typed document, borrowing text from `job`.
    pub fn document<'a>(&self, job: &'a JobPosting) -> Result<JobPostingDocument<'a>> {
        if self.options.strict {
            validate(job)?;
        } else {
            require_fields(job)?;
        }

        let date_posted = job
            .date_posted
            .ok_or_else(|| JobPostingError::missing("datePosted"))?;

        let (job_location_type, applicant_location_requirement) = if job.is_remote() {
            (
                Some(TELECOMMUTE),
                Some(Country::new(&job.applicant_location_requirements)),
            )
        } else {
            (None, None)
        };

        Ok(JobPostingDocument {
            context: SCHEMA_CONTEXT,
            kind: "JobPosting",
            title: &job.title,
            description: &job.description,
            date_posted: date_posted.format(DATE_FORMAT).to_string(),
            valid_through: job
                .valid_through
                .map(|d| d.format(DATE_FORMAT).to_string()),
            employment_type: job.employment_types(),
            identifier: PropertyValue::new(&job.hiring_organization_name, job.id.to_string()),
            hiring_organization: Organization::new(
                &job.hiring_organization_name,
                &job.hiring_organization_website,
            ),
            job_location: Place::new(PostalAddress {
                kind: "PostalAddress",
                street_address: &job.street_address,
                address_locality: &job.city,
                address_region: &job.region,
                postal_code: &job.postal_code,
                address_country: &job.country,
            }),
            base_salary: MonetaryAmount::new(
                &job.base_salary_currency,
                job.base_salary_value,
                &job.base_salary_unit_text,
            ),
            job_location_type,
            applicant_location_requirement,
        })
    }

    /// Serialize the document as compact JSON.
    ///
    /// `serde_json` leaves `/` and non-ASCII characters unescaped, which is
    /// what crawlers consuming the block expect.
    #[instrument(skip_all, fields(id = %job.id, strict = self.options.strict))]
    pub fn build_json(&self, job: &JobPosting) -> Result<String> {
        let document = self.document(job)?;
        let json = serde_json::to_string(&document)?;
        debug!(
            bytes = json.len(),
            remote = document.job_location_type.is_some(),
            "built structured data"
        );
        Ok(json)
    }

    /// Build the `<script type="application/ld+json">` element for embedding.
    pub fn build(&self, job: &JobPosting) -> Result<String> {
        let json = self.build_json(job)?;
        Ok(format!("{SCRIPT_OPEN}{json}{SCRIPT_CLOSE}"))
    }

    /// Build in the requested output format.
    pub fn render(&self, job: &JobPosting, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Script => self.build(job),
            OutputFormat::Json => self.build_json(job),
        }
    }
}

/// Build the script element with default (non-strict) options.
pub fn build(job: &JobPosting) -> Result<String> {
    StructuredDataBuilder::default().build(job)
}
