//! schema.org `JobPosting` document shapes.
//!
//! Field declaration order is the serialization order, which keeps the
//! emitted JSON byte-stable across runs.

use serde::Serialize;

/// Value of the `@context` key.
pub const SCHEMA_CONTEXT: &str = "https://schema.org/";

/// `jobLocationType` value emitted for fully remote jobs.
pub const TELECOMMUTE: &str = "TELECOMMUTE";

/// Root JSON-LD object for a single job posting.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPostingDocument<'a> {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub title: &'a str,
    pub description: &'a str,
    /// `YYYY-MM-DD`.
    pub date_posted: String,
    /// `YYYY-MM-DD`, omitted when the record has no expiry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_through: Option<String>,
    pub employment_type: Vec<&'a str>,
    pub identifier: PropertyValue<'a>,
    pub hiring_organization: Organization<'a>,
    pub job_location: Place<'a>,
    pub base_salary: MonetaryAmount<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_location_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applicant_location_requirement: Option<Country<'a>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyValue<'a> {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: &'a str,
    pub value: String,
}

impl<'a> PropertyValue<'a> {
    pub fn new(name: &'a str, value: String) -> Self {
        Self {
            kind: "PropertyValue",
            name,
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization<'a> {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: &'a str,
    pub same_as: &'a str,
}

impl<'a> Organization<'a> {
    pub fn new(name: &'a str, same_as: &'a str) -> Self {
        Self {
            kind: "Organization",
            name,
            same_as,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Place<'a> {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub address: PostalAddress<'a>,
}

impl<'a> Place<'a> {
    pub fn new(address: PostalAddress<'a>) -> Self {
        Self {
            kind: "Place",
            address,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress<'a> {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub street_address: &'a str,
    pub address_locality: &'a str,
    pub address_region: &'a str,
    pub postal_code: &'a str,
    pub address_country: &'a str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonetaryAmount<'a> {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub currency: &'a str,
    pub value: QuantitativeValue<'a>,
}

impl<'a> MonetaryAmount<'a> {
    pub fn new(currency: &'a str, value: f64, unit_text: &'a str) -> Self {
        Self {
            kind: "MonetaryAmount",
            currency,
            value: QuantitativeValue {
                kind: "QuantitativeValue",
                value,
                unit_text,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantitativeValue<'a> {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub value: f64,
    pub unit_text: &'a str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Country<'a> {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: &'a str,
}

impl<'a> Country<'a> {
    pub fn new(name: &'a str) -> Self {
        Self {
            kind: "Country",
            name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_types_serialize_in_declared_order() {
        let amount = MonetaryAmount::new("EUR", 42.0, "MONTH");
        let json = serde_json::to_string(&amount).expect("serialize");
        assert_eq!(
            json,
            r#"{"@type":"MonetaryAmount","currency":"EUR","value":{"@type":"QuantitativeValue","value":42.0,"unitText":"MONTH"}}"#
        );
    }

    #[test]
    fn organization_uses_same_as_key() {
        let org = Organization::new("Acme", "https://acme.example");
        let json = serde_json::to_string(&org).expect("serialize");
        assert_eq!(
            json,
            r#"{"@type":"Organization","name":"Acme","sameAs":"https://acme.example"}"#
        );
    }
}
