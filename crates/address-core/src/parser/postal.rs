//! Postal code extraction

use super::claims::{ClaimKind, ClaimedText};
use once_cell::sync::Lazy;
use regex::Regex;

// An ASCII word run; a postal code is one that is exactly six digits
static WORD_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9A-Za-z_]+").expect("Failed to compile word regex"));

/// Claim the first standalone six digit run
pub fn extract(claimed: &mut ClaimedText) -> Option<String> {
    let (start, end) = claimed.find_first(|text| {
        WORD_RUN
            .find_iter(text)
            .find(|m| m.len() == 6 && m.as_str().bytes().all(|b| b.is_ascii_digit()))
            .map(|m| (m.start(), m.end()))
    })?;

    let code = claimed.text()[start..end].to_string();
    claimed.claim(start, end, ClaimKind::PostalCode);
    log::debug!("[address] postal code: {}", code);
    Some(code)
}
