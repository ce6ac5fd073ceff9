//! Landline removal
//!
//! Landlines are not part of the output; they are claimed only so the digits
//! never end up in the detail text.

use super::claims::{ClaimKind, ClaimedText};
use super::text::{digit_bounded, find_accepted};
use once_cell::sync::Lazy;
use regex::Regex;

static LANDLINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"0[0-9]{2,3}[ \-]?[0-9]{7,8}").expect("Failed to compile landline regex"));

static WRAPPED_AREA_LANDLINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[(（]0[0-9]{2,3}[)）][0-9]{7,8}").expect("Failed to compile landline regex")
});

/// Claim the first landline number and return it
pub fn extract(claimed: &mut ClaimedText) -> Option<String> {
    let (start, end) = claimed.find_first(|text| {
        let bounded = |start: usize, end: usize| digit_bounded(text, start, end);
        let wrapped = find_accepted(&WRAPPED_AREA_LANDLINE, text, bounded);
        let plain = find_accepted(&LANDLINE, text, bounded);
        match (wrapped, plain) {
            (Some(w), Some(p)) => Some(if w.0 <= p.0 { w } else { p }),
            (w, p) => w.or(p),
        }
    })?;

    let landline = claimed.text()[start..end].to_string();
    claimed.claim(start, end, ClaimKind::Landline);
    log::debug!("[address] landline discarded: {}", landline);
    Some(landline)
}
