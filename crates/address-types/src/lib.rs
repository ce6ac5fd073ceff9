//! Shared types for the address parser

use serde::{Deserialize, Serialize};

/// Structured address extracted from a pasted text blob
///
/// Serialized in camelCase so that a record produced by the local parser is
/// byte-for-byte interchangeable with the one returned by the remote
/// `/api/addresses/parse` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedAddress {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub province: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub postal_code: String,
    #[serde(default)]
    pub detail: String,
    #[serde(default)]
    pub raw: String,

    /// Masked phone text (e.g. `138****1234`) when one was detected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub masked_phone: Option<String>,
}

impl ParsedAddress {
    /// All-empty record that only remembers the input
    pub fn empty(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            ..Self::default()
        }
    }

    /// Number of non-empty fields among name, phone, province, city, district and detail
    pub fn recognized_fields(&self) -> usize {
        [
            &self.name,
            &self.phone,
            &self.province,
            &self.city,
            &self.district,
            &self.detail,
        ]
        .iter()
        .filter(|field| !field.is_empty())
        .count()
    }

    /// True when nothing at all was recognized
    pub fn is_blank(&self) -> bool {
        self.recognized_fields() == 0 && self.postal_code.is_empty()
    }
}

/// Result of checking a parsed address
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Build a report; validity is derived from the error list
    pub fn new(errors: Vec<String>, warnings: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }
}

/// Which parser produced a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseSource {
    Local,
    Remote,
}

/// What a caller gets back from the resolver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseOutcome {
    pub address: ParsedAddress,
    pub validation: ValidationReport,
    pub source: ParseSource,
}
