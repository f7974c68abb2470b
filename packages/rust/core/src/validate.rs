//! Boundary validation for job records.
//!
//! The builder passes enum-like fields through untouched; callers that want
//! stricter guarantees run [`validate`] (or enable strict mode) first.

use jobposting_shared::{EmploymentType, JobPosting, JobPostingError, Result, SalaryUnit};
use url::Url;

/// Required string fields, by their record name.
fn required_text(job: &JobPosting) -> [(&'static str, &str); 9] {
    [
        ("title", job.title.as_str()),
        ("description", job.description.as_str()),
        ("hiringOrganizationName", job.hiring_organization_name.as_str()),
        ("hiringOrganizationWebsite", job.hiring_organization_website.as_str()),
        ("streetAddress", job.street_address.as_str()),
        ("city", job.city.as_str()),
        ("postalCode", job.postal_code.as_str()),
        ("region", job.region.as_str()),
        ("country", job.country.as_str()),
    ]
}

/// Check that every field the document cannot do without is present.
///
/// Returns the first missing field; text fields are checked before dates.
pub fn require_fields(job: &JobPosting) -> Result<()> {
    for (field, value) in required_text(job) {
        if value.trim().is_empty() {
            return Err(JobPostingError::missing(field));
        }
    }
    if job.date_posted.is_none() {
        return Err(JobPostingError::missing("datePosted"));
    }
    Ok(())
}

/// Collect every problem with a record instead of stopping at the first.
pub fn problems(job: &JobPosting) -> Vec<JobPostingError> {
    let mut found = Vec::new();

    for (field, value) in required_text(job) {
        if value.trim().is_empty() {
            found.push(JobPostingError::missing(field));
        }
    }
    if job.date_posted.is_none() {
        found.push(JobPostingError::missing("datePosted"));
    }

    for segment in job.employment_types() {
        if let Err(e) = segment.parse::<EmploymentType>() {
            found.push(e);
        }
    }
    if !job.base_salary_unit_text.is_empty() {
        if let Err(e) = job.base_salary_unit_text.parse::<SalaryUnit>() {
            found.push(e);
        }
    }

    if !job.hiring_organization_website.trim().is_empty() {
        if let Err(e) = check_url("hiringOrganizationWebsite", &job.hiring_organization_website) {
            found.push(e);
        }
    }
    if !job.hiring_organization_logo_url.trim().is_empty() {
        if let Err(e) = check_url("hiringOrganizationLogoUrl", &job.hiring_organization_logo_url) {
            found.push(e);
        }
    }

    let salary = job.base_salary_value;
    if !salary.is_finite() || salary < 0.0 {
        found.push(JobPostingError::validation(format!(
            "baseSalaryValue must be a non-negative number, got {salary}"
        )));
    }

    if let (Some(posted), Some(until)) = (job.date_posted, job.valid_through) {
        if until < posted {
            found.push(JobPostingError::validation(format!(
                "validThrough {until} is before datePosted {posted}"
            )));
        }
    }

    if job.is_remote() && job.applicant_location_requirements.trim().is_empty() {
        found.push(JobPostingError::missing("applicantLocationRequirements"));
    }

    found
}

/// Strict validation: required fields, enum value sets, URLs, salary and dates.
pub fn validate(job: &JobPosting) -> Result<()> {
    match problems(job).into_iter().next() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

fn check_url(field: &str, raw: &str) -> Result<()> {
    let url = Url::parse(raw.trim())
        .map_err(|e| JobPostingError::validation(format!("{field} '{raw}' is not a URL: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(JobPostingError::validation(format!(
            "{field} '{raw}' must use http or https, not {other}"
        ))),
    }
}
