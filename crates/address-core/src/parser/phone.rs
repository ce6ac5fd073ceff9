//! Mobile number extraction

use super::claims::{ClaimKind, ClaimedText, LabelKind};
use super::text::{digit_bounded, find_accepted};
use crate::config::MaskedPhonePolicy;
use once_cell::sync::Lazy;
use regex::Regex;

static MOBILE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"1[3-9][0-9][ \-]?[0-9]{4}[ \-]?[0-9]{4}").expect("Failed to compile mobile regex")
});

static WRAPPED_MOBILE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[(（] ?1[3-9][0-9][ \-]?[0-9]{4}[ \-]?[0-9]{4} ?[)）]")
        .expect("Failed to compile wrapped mobile regex")
});

// Inside a phone label anything that looks partly starred counts
static LABELED_MASKED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"1[0-9]{2,3}\*+[0-9]{2,4}").expect("Failed to compile masked regex"));

// Without a label require a plausible prefix and at least two stars
static BARE_MASKED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"1[3-9][0-9]{1,2}\*{2,}[0-9]{2,4}").expect("Failed to compile bare masked regex")
});

/// Outcome of the phone stage
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneMatch {
    /// Value for `ParsedAddress::phone`
    pub phone: String,
    /// Masked text when the number was obscured
    pub masked: Option<String>,
}

/// Claim the first mobile number; masked numbers follow `policy`
pub fn extract(claimed: &mut ClaimedText, policy: MaskedPhonePolicy) -> PhoneMatch {
    if let Some((start, end)) = find_labeled_masked(claimed) {
        return claim_masked(claimed, start, end, policy);
    }

    if let Some((start, end)) = claimed.find_first(find_mobile) {
        let phone: String = claimed.text()[start..end]
            .chars()
            .filter(char::is_ascii_digit)
            .collect();
        claimed.claim(start, end, ClaimKind::Phone);
        log::debug!("[address] phone: {}", phone);
        return PhoneMatch { phone, masked: None };
    }

    if let Some((start, end)) = claimed.find_first(find_bare_masked) {
        return claim_masked(claimed, start, end, policy);
    }

    PhoneMatch::default()
}

fn claim_masked(
    claimed: &mut ClaimedText,
    start: usize,
    end: usize,
    policy: MaskedPhonePolicy,
) -> PhoneMatch {
    let masked = claimed.text()[start..end].to_string();
    claimed.claim(start, end, ClaimKind::Phone);
    log::debug!("[address] masked phone detected: {}", masked);

    let phone = match policy {
        MaskedPhonePolicy::PassThrough => masked.clone(),
        MaskedPhonePolicy::Discard => String::new(),
    };
    PhoneMatch {
        phone,
        masked: Some(masked),
    }
}

/// Masked number on the line that follows a phone label
fn find_labeled_masked(claimed: &ClaimedText) -> Option<(usize, usize)> {
    let label = claimed.first(ClaimKind::Label(LabelKind::Phone))?;
    let rest = &claimed.text()[label.end..];
    let line = rest.split('\n').next().unwrap_or(rest);

    let m = LABELED_MASKED.find(line)?;
    let (start, end) = (label.end + m.start(), label.end + m.end());
    claimed.is_free(start, end).then_some((start, end))
}

/// Earliest clean mobile number in one fragment, parenthesized or not
pub(crate) fn find_mobile(text: &str) -> Option<(usize, usize)> {
    let bounded = |start: usize, end: usize| digit_bounded(text, start, end);
    let wrapped = find_accepted(&WRAPPED_MOBILE, text, bounded);
    let plain = find_accepted(&MOBILE, text, bounded);

    match (wrapped, plain) {
        (Some(w), Some(p)) => Some(if w.0 <= p.0 { w } else { p }),
        (w, p) => w.or(p),
    }
}

fn find_bare_masked(text: &str) -> Option<(usize, usize)> {
    find_accepted(&BARE_MASKED, text, |start, end| {
        let before = text[..start].chars().next_back();
        let after = text[end..].chars().next();
        digit_bounded(text, start, end) && before != Some('*') && after != Some('*')
    })
}
