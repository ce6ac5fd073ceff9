//! Order-independent parser for pasted Chinese shipping addresses
//!
//! The input is normalized once, then each stage claims the spans it
//! recognizes: phone, postal code, landline, administrative regions and
//! finally the name. Whatever nobody claimed becomes the detail text.

pub mod claims;
mod detail;
mod landline;
pub mod name;
mod phone;
mod postal;
pub mod preprocess;
mod region;
mod text;

use crate::config::ParserConfig;
use address_types::ParsedAddress;
use claims::{ClaimKind, ClaimedText};

pub use phone::PhoneMatch;
pub use region::RegionMatch;

/// One claimed span, for diagnostics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracedSpan {
    pub kind: ClaimKind,
    pub start: usize,
    pub end: usize,
    pub text: String,
}

/// Parse result together with what each stage claimed
#[derive(Debug, Clone)]
pub struct ParseTrace {
    /// Input after label and whitespace normalization
    pub normalized: String,
    pub spans: Vec<TracedSpan>,
    /// Text the detail was cleaned from
    pub residue: String,
    pub address: ParsedAddress,
}

/// Local address parser
///
/// Holds only configuration, so one instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct AddressParser {
    config: ParserConfig,
}

impl AddressParser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Split free text into name, phone, region, postal code and detail.
    ///
    /// Never fails; unrecognized fields are left empty.
    pub fn parse(&self, text: &str) -> ParsedAddress {
        self.trace(text).address
    }

    /// Like [`parse`](Self::parse), treating a missing input as empty
    pub fn parse_opt(&self, text: Option<&str>) -> ParsedAddress {
        match text {
            Some(text) => self.parse(text),
            None => ParsedAddress::empty(""),
        }
    }

    /// Parse and keep the claimed spans for inspection
    pub fn trace(&self, text: &str) -> ParseTrace {
        let normalized = preprocess::normalize(text);
        if normalized.is_empty() {
            return ParseTrace {
                normalized,
                spans: Vec::new(),
                residue: String::new(),
                address: ParsedAddress::empty(text),
            };
        }

        let mut claimed = ClaimedText::new(normalized.as_str());
        preprocess::claim_labels(&mut claimed);

        let phone = phone::extract(&mut claimed, self.config.masked_phone_policy);
        let postal_code = postal::extract(&mut claimed).unwrap_or_default();
        landline::extract(&mut claimed);
        let region = region::extract(&mut claimed);
        let has_region = !region.province.is_empty() || !region.city.is_empty();
        let name = name::extract(&mut claimed, has_region);

        let residue = claimed.residue();
        let detail = detail::clean(&residue);
        log::debug!("[address] detail: '{}'", detail);

        let spans = claimed
            .claims()
            .iter()
            .map(|claim| TracedSpan {
                kind: claim.kind,
                start: claim.start,
                end: claim.end,
                text: claimed.slice(claim).to_string(),
            })
            .collect();

        let address = ParsedAddress {
            name,
            phone: phone.phone,
            province: region.province,
            city: region.city,
            district: region.district,
            postal_code,
            detail,
            raw: text.to_string(),
            masked_phone: phone.masked,
        };

        ParseTrace {
            normalized,
            spans,
            residue,
            address,
        }
    }
}
