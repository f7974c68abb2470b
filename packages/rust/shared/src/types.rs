//! Core domain types for job postings.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{JobPostingError, Result};

// ---------------------------------------------------------------------------
// JobId
// ---------------------------------------------------------------------------

/// Opaque job identifier as supplied by the hosting content system.
///
/// Records may carry either a numeric row id or a string key; both render
/// identically through [`Display`](std::fmt::Display).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JobId {
    Numeric(u64),
    Text(String),
}

impl Default for JobId {
    fn default() -> Self {
        Self::Numeric(0)
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Numeric(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for JobId {
    fn from(value: u64) -> Self {
        Self::Numeric(value)
    }
}

impl From<&str> for JobId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for JobId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

// ---------------------------------------------------------------------------
// FileReference
// ---------------------------------------------------------------------------

/// Reference to an attached file or image, owned by the record but never
/// dereferenced when building structured data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileReference(pub String);

// ---------------------------------------------------------------------------
// JobPosting
// ---------------------------------------------------------------------------

/// A fully-populated job record, read-only once handed to the builder.
///
/// Enum-like fields (`employment_type`, `base_salary_unit_text`,
/// `job_location_type`) are kept as raw strings; see [`EmploymentType`] and
/// [`SalaryUnit`] for the checked value sets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    /// Unique identifier, emitted as the `identifier` property value.
    pub id: JobId,
    /// URL path segment used for routing. Not part of structured data.
    #[serde(default)]
    pub path_segment: String,

    /// Job title, e.g. "Software Engineer" or "Barista".
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub alternative_title: String,
    /// Full description of the job in HTML.
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub author: String,

    /// Date the employer posted the job.
    #[serde(default, deserialize_with = "deserialize_flexible_date")]
    pub date_posted: Option<NaiveDate>,
    /// Date the posting expires.
    #[serde(default, deserialize_with = "deserialize_flexible_date")]
    pub valid_through: Option<NaiveDate>,

    #[serde(default)]
    pub hiring_organization_name: String,
    #[serde(default)]
    pub hiring_organization_website: String,
    #[serde(default)]
    pub hiring_organization_logo_url: String,

    #[serde(default, alias = "jobLocationStreetAddress")]
    pub street_address: String,
    #[serde(default, alias = "jobLocationCity")]
    pub city: String,
    #[serde(default, alias = "jobLocationPostalCode")]
    pub postal_code: String,
    #[serde(default, alias = "jobLocationRegion")]
    pub region: String,
    #[serde(default, alias = "jobLocationCountry")]
    pub country: String,

    #[serde(default)]
    pub base_salary_currency: String,
    /// One of HOUR, DAY, WEEK, MONTH, YEAR.
    #[serde(default)]
    pub base_salary_unit_text: String,
    /// Accepts a number or numeric text (`"15.5"`).
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub base_salary_value: f64,

    /// Comma-separated list of employment types.
    #[serde(default)]
    pub employment_type: String,

    /// Any truthy value marks the job as fully remote.
    #[serde(default)]
    pub job_location_type: String,
    /// Country remote applicants must reside in.
    #[serde(default)]
    pub applicant_location_requirements: String,

    #[serde(default, alias = "falMedia")]
    pub media: Vec<FileReference>,
    #[serde(default, alias = "falRelatedFiles")]
    pub related_files: Vec<FileReference>,
}

impl JobPosting {
    /// Split the comma-separated employment type into trimmed segments.
    ///
    /// Empty segments survive the split: `""` yields `[""]` and `"A,,B"`
    /// yields `["A", "", "B"]`.
    pub fn employment_types(&self) -> Vec<&str> {
        self.employment_type.split(',').map(str::trim).collect()
    }

    /// Whether the job is fully remote (`jobLocationType` is truthy).
    pub fn is_remote(&self) -> bool {
        is_truthy(&self.job_location_type)
    }
}

/// Loose truthiness used by the content system: non-empty and not `"0"`.
pub fn is_truthy(value: &str) -> bool {
    !value.is_empty() && value != "0"
}

/// Parse a calendar date from `YYYY-MM-DD` or an RFC 3339 timestamp.
///
/// A timestamp contributes its date in its own offset, so
/// `2017-01-24T23:30:00-05:00` is the 24th, not the 25th.
pub fn parse_flexible_date(raw: &str) -> Result<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .map_err(|e| JobPostingError::parse(format!("invalid date '{raw}': {e}")))
}

/// Date as written in a record: text, or a TOML date/datetime literal.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawDate {
    Text(String),
    Toml(toml::value::Datetime),
}

fn deserialize_flexible_date<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawDate>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawDate::Text(raw)) if raw.trim().is_empty() => Ok(None),
        Some(RawDate::Text(raw)) => parse_flexible_date(&raw)
            .map(Some)
            .map_err(serde::de::Error::custom),
        Some(RawDate::Toml(datetime)) => {
            let date = datetime.date.ok_or_else(|| {
                serde::de::Error::custom(format!("'{datetime}' has no date part"))
            })?;
            NaiveDate::from_ymd_opt(date.year.into(), date.month.into(), date.day.into())
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid date '{datetime}'")))
        }
    }
}

/// Amount as written in a record: a number or numeric text.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(f64),
    Text(String),
}

fn deserialize_amount<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawAmount::deserialize(deserializer)? {
        RawAmount::Number(value) => Ok(value),
        RawAmount::Text(raw) if raw.trim().is_empty() => Ok(0.0),
        RawAmount::Text(raw) => raw
            .trim()
            .parse::<f64>()
            .map_err(|e| serde::de::Error::custom(format!("invalid amount '{raw}': {e}"))),
    }
}

// ---------------------------------------------------------------------------
// Value sets
// ---------------------------------------------------------------------------

/// schema.org employment types, case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contractor,
    Temporary,
    Intern,
    Volunteer,
    PerDiem,
    Other,
}

impl EmploymentType {
    pub const ALL: [EmploymentType; 8] = [
        Self::FullTime,
        Self::PartTime,
        Self::Contractor,
        Self::Temporary,
        Self::Intern,
        Self::Volunteer,
        Self::PerDiem,
        Self::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::FullTime => "FULL_TIME",
            Self::PartTime => "PART_TIME",
            Self::Contractor => "CONTRACTOR",
            Self::Temporary => "TEMPORARY",
            Self::Intern => "INTERN",
            Self::Volunteer => "VOLUNTEER",
            Self::PerDiem => "PER_DIEM",
            Self::Other => "OTHER",
        }
    }
}

impl std::fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmploymentType {
    type Err = JobPostingError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                let allowed: Vec<&str> = Self::ALL.iter().map(|t| t.as_str()).collect();
                JobPostingError::invalid_enum("employmentType", s, &allowed)
            })
    }
}

/// Unit of the base salary amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SalaryUnit {
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl SalaryUnit {
    pub const ALL: [SalaryUnit; 5] = [Self::Hour, Self::Day, Self::Week, Self::Month, Self::Year];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hour => "HOUR",
            Self::Day => "DAY",
            Self::Week => "WEEK",
            Self::Month => "MONTH",
            Self::Year => "YEAR",
        }
    }
}

impl std::fmt::Display for SalaryUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SalaryUnit {
    type Err = JobPostingError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|u| u.as_str() == s)
            .ok_or_else(|| {
                let allowed: Vec<&str> = Self::ALL.iter().map(|u| u.as_str()).collect();
                JobPostingError::invalid_enum("baseSalaryUnitText", s, &allowed)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_id_display() {
        assert_eq!(JobId::from(42u64).to_string(), "42");
        assert_eq!(JobId::from("job-7").to_string(), "job-7");
    }

    #[test]
    fn job_id_accepts_number_or_string() {
        let n: JobId = serde_json::from_str("17").expect("numeric id");
        assert_eq!(n, JobId::Numeric(17));
        let s: JobId = serde_json::from_str("\"abc\"").expect("string id");
        assert_eq!(s, JobId::Text("abc".into()));
    }

    #[test]
    fn employment_types_split_and_trim() {
        let job = JobPosting {
            employment_type: "FULL_TIME, INTERN".into(),
            ..Default::default()
        };
        assert_eq!(job.employment_types(), vec!["FULL_TIME", "INTERN"]);
    }

    #[test]
    fn employment_types_keep_empty_segments() {
        let job = JobPosting::default();
        assert_eq!(job.employment_types(), vec![""]);

        let job = JobPosting {
            employment_type: "FULL_TIME,,OTHER".into(),
            ..Default::default()
        };
        assert_eq!(job.employment_types(), vec!["FULL_TIME", "", "OTHER"]);
    }

    #[test]
    fn truthiness() {
        assert!(!is_truthy(""));
        assert!(!is_truthy("0"));
        assert!(is_truthy("1"));
        assert!(is_truthy("TELECOMMUTE"));
        assert!(is_truthy(" "));
    }

    #[test]
    fn flexible_dates() {
        let expected = NaiveDate::from_ymd_opt(2017, 1, 24).expect("valid date");
        assert_eq!(parse_flexible_date("2017-01-24").expect("plain"), expected);
        assert_eq!(
            parse_flexible_date("2017-01-24T19:33:17+00:00").expect("rfc3339"),
            expected
        );
        assert_eq!(
            parse_flexible_date("2017-01-24T23:30:00-05:00").expect("offset"),
            expected
        );
        assert!(parse_flexible_date("24.01.2017").is_err());
    }

    #[test]
    fn record_deserializes_with_long_location_names() {
        let json = r#"{
            "id": 9,
            "title": "Barista",
            "datePosted": "2024-01-01",
            "validThrough": null,
            "jobLocationCity": "Springfield",
            "falMedia": ["fileadmin/jobs/cup.jpg"]
        }"#;
        let job: JobPosting = serde_json::from_str(json).expect("deserialize");
        assert_eq!(job.id, JobId::Numeric(9));
        assert_eq!(job.city, "Springfield");
        assert_eq!(job.date_posted, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(job.valid_through, None);
        assert_eq!(job.media, vec![FileReference("fileadmin/jobs/cup.jpg".into())]);
        assert_eq!(job.base_salary_value, 0.0);
    }

    #[test]
    fn salary_accepts_numeric_text() {
        let job: JobPosting =
            serde_json::from_str(r#"{ "id": 1, "baseSalaryValue": "15.5" }"#).expect("text");
        assert_eq!(job.base_salary_value, 15.5);

        let job: JobPosting =
            serde_json::from_str(r#"{ "id": 1, "baseSalaryValue": "" }"#).expect("empty");
        assert_eq!(job.base_salary_value, 0.0);

        let job: JobPosting =
            serde_json::from_str(r#"{ "id": 1, "baseSalaryValue": 42 }"#).expect("integer");
        assert_eq!(job.base_salary_value, 42.0);

        let err = serde_json::from_str::<JobPosting>(r#"{ "id": 1, "baseSalaryValue": "lots" }"#)
            .unwrap_err();
        assert!(err.to_string().contains("invalid amount"));
    }

    #[test]
    fn record_rejects_bad_date() {
        let json = r#"{ "id": 1, "datePosted": "next tuesday" }"#;
        let err = serde_json::from_str::<JobPosting>(json).unwrap_err();
        assert!(err.to_string().contains("invalid date"));
    }

    #[test]
    fn enum_value_sets_parse() {
        assert_eq!("PER_DIEM".parse::<EmploymentType>().expect("parse"), EmploymentType::PerDiem);
        assert_eq!("MONTH".parse::<SalaryUnit>().expect("parse"), SalaryUnit::Month);
        assert!("full_time".parse::<EmploymentType>().is_err());

        let err = "HOURLY".parse::<SalaryUnit>().unwrap_err();
        assert!(matches!(
            err,
            JobPostingError::InvalidEnumValue { field: "baseSalaryUnitText", .. }
        ));
    }

    #[test]
    fn enum_serde_uses_schema_spelling() {
        let json = serde_json::to_string(&EmploymentType::FullTime).expect("serialize");
        assert_eq!(json, "\"FULL_TIME\"");
        let json = serde_json::to_string(&SalaryUnit::Year).expect("serialize");
        assert_eq!(json, "\"YEAR\"");
    }
}
