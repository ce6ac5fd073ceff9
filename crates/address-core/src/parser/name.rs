//! Recipient name extraction
//!
//! Names are the least structured field, so several strategies are tried in
//! order. Each one only proposes a span; the driver claims the first
//! proposal that is still free.

use super::claims::{ClaimKind, ClaimedText, LabelKind};
use super::text::{leading_cjk, trailing_cjk};
use crate::gazetteer;
use once_cell::sync::Lazy;
use regex::Regex;

/// Absolute byte range in the normalized text
pub type Span = (usize, usize);

/// What earlier stages found, as far as name strategies care
#[derive(Debug, Clone, Copy, Default)]
pub struct Partial {
    pub phone: Option<Span>,
    /// A province or city was recognized
    pub has_region: bool,
}

type NameStrategy = fn(&ClaimedText, &Partial) -> Option<(String, Span)>;

const STRATEGIES: [(&str, NameStrategy); 6] = [
    ("label", from_label),
    ("leading", before_first_separator),
    ("before_phone", before_phone),
    ("trailing", after_address),
    ("remaining_start", at_remaining_start),
    ("any_chunk", any_chunk),
];

const MIN_CHARS: usize = 2;
const MAX_CHARS: usize = 4;

// A candidate that some label word contains is a label fragment, not a name
const DENYLIST: [&str; 15] = [
    "收货地址", "详细地址", "联系电话", "手机号", "固定电话", "邮政编码", "所在地区", "收件人",
    "收货人", "联系人", "姓名", "地址", "电话", "邮编", "地区",
];

const ADDRESS_KEYWORDS: &str = "路街巷道弄号楼栋室村镇乡区市省县旗州盟苑园厦场";

// Label words without a colon are not normalized, so look for them directly
static BARE_NAME_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(收件人|收货人|姓名|联系人)[:：\s]*").expect("Failed to compile name label regex"));

static CJK_CHUNK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\u{4e00}-\u{9fa5}]{2,4}").expect("Failed to compile name chunk regex"));

/// Claim the recipient name; empty when no strategy finds one
pub fn extract(claimed: &mut ClaimedText, has_region: bool) -> String {
    let partial = Partial {
        phone: claimed.first(ClaimKind::Phone).map(|c| (c.start, c.end)),
        has_region,
    };

    for (strategy_name, strategy) in STRATEGIES {
        let Some((name, (start, end))) = strategy(claimed, &partial) else {
            continue;
        };
        if claimed.claim(start, end, ClaimKind::Name) {
            log::debug!("[address] name '{}' via {}", name, strategy_name);
            return name;
        }
    }

    log::debug!("[address] no name recognized");
    String::new()
}

/// How strictly a candidate is checked before it may become the name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Filter {
    /// A whitespace-delimited word in a name position: only label words and
    /// province names are refused, so 李园园 or 王道明 survive
    Delimited,
    /// A run cut out of surrounding text: address keywords are refused too
    Embedded,
}

/// Rejects label fragments and words that start with a province name
pub fn is_name_word(candidate: &str) -> bool {
    !DENYLIST.iter().any(|word| word.contains(candidate)) && !gazetteer::starts_with_region(candidate)
}

/// Like [`is_name_word`], and also rejects anything that reads like an address
pub fn is_plausible_name(candidate: &str) -> bool {
    is_name_word(candidate) && !candidate.chars().any(|c| ADDRESS_KEYWORDS.contains(c))
}

fn candidate(claimed: &ClaimedText, start: usize, end: usize, filter: Filter) -> Option<(String, Span)> {
    let name = &claimed.text()[start..end];
    let accepted = match filter {
        Filter::Delimited => is_name_word(name),
        Filter::Embedded => is_plausible_name(name),
    };
    (accepted && claimed.is_free(start, end)).then(|| (name.to_string(), (start, end)))
}

/// Unclaimed text from `pos` up to the next claim
fn unclaimed_from(claimed: &ClaimedText, pos: usize) -> Option<&str> {
    claimed
        .fragments()
        .into_iter()
        .find(|f| f.start <= pos && pos < f.end())
        .map(|f| &f.text[pos - f.start..])
}

/// CJK run at the start of `text` if it is a whole 2 to 4 character word
fn whole_leading_run(text: &str) -> Option<usize> {
    let (len, count) = leading_cjk(text, MAX_CHARS + 1);
    (MIN_CHARS..=MAX_CHARS).contains(&count).then_some(len)
}

fn from_label(claimed: &ClaimedText, _: &Partial) -> Option<(String, Span)> {
    let value_start = match claimed.first(ClaimKind::Label(LabelKind::Name)) {
        Some(label) => label.end,
        None => BARE_NAME_LABEL.find(claimed.text())?.end(),
    };

    let value = unclaimed_from(claimed, value_start)?;
    let (len, count) = leading_cjk(value, MAX_CHARS);
    if count < MIN_CHARS {
        return None;
    }
    let end = value_start + len;
    Some((claimed.text()[value_start..end].to_string(), (value_start, end)))
}

fn before_first_separator(claimed: &ClaimedText, _: &Partial) -> Option<(String, Span)> {
    let text = claimed.text();
    let len = whole_leading_run(text)?;
    // A run glued to digits is usually a street with its house number
    let filter = match text[len..].chars().next() {
        None => Filter::Delimited,
        Some(c) if c.is_whitespace() => Filter::Delimited,
        Some(c) if c.is_ascii_digit() => Filter::Embedded,
        Some(_) => return None,
    };
    candidate(claimed, 0, len, filter)
}

fn before_phone(claimed: &ClaimedText, partial: &Partial) -> Option<(String, Span)> {
    let (phone_start, _) = partial.phone?;
    let before = claimed.text()[..phone_start].trim_end();
    let (len, count) = trailing_cjk(before);
    if count < MIN_CHARS {
        return None;
    }

    let run_start = before.len() - len;
    let delimited = before[..run_start].chars().next_back().map_or(true, char::is_whitespace);
    if count <= MAX_CHARS && delimited {
        return candidate(claimed, run_start, before.len(), Filter::Delimited);
    }

    // Inside a longer run prefer the longest tail that passes the filter
    let run = &before[run_start..];
    let offsets: Vec<usize> = run.char_indices().map(|(i, _)| i).collect();
    (MIN_CHARS..=count.min(MAX_CHARS))
        .rev()
        .find_map(|chars| candidate(claimed, run_start + offsets[count - chars], before.len(), Filter::Embedded))
}

fn after_address(claimed: &ClaimedText, partial: &Partial) -> Option<(String, Span)> {
    if !partial.has_region {
        return None;
    }

    let fragment = claimed.fragments().into_iter().rev().find(|f| f.has_content())?;
    let text = fragment.text.trim_end();
    let (len, count) = trailing_cjk(text);
    if !(MIN_CHARS..=MAX_CHARS).contains(&count) {
        return None;
    }

    let run_start = text.len() - len;
    let standalone = match text[..run_start].chars().next_back() {
        Some(c) => c.is_whitespace(),
        None => fragment.preceded_by.map_or(false, |kind| !kind.is_administrative()),
    };
    if !standalone {
        return None;
    }

    // Directly after the phone is the address, phone, name ordering
    let follows_phone =
        fragment.preceded_by == Some(ClaimKind::Phone) && text[..run_start].trim().is_empty();
    let filter = if follows_phone { Filter::Delimited } else { Filter::Embedded };
    candidate(claimed, fragment.start + run_start, fragment.start + text.len(), filter)
}

fn at_remaining_start(claimed: &ClaimedText, _: &Partial) -> Option<(String, Span)> {
    let fragment = claimed.fragments().into_iter().find(|f| f.has_content())?;
    let text = fragment.text.trim_start();
    let offset = fragment.text.len() - text.len();
    let len = whole_leading_run(text)?;

    // End of the fragment is a claim boundary or the end of input
    let separated = text[len..].chars().next().map_or(true, char::is_whitespace);
    if !separated {
        return None;
    }
    let start = fragment.start + offset;
    candidate(claimed, start, start + len, Filter::Embedded)
}

fn any_chunk(claimed: &ClaimedText, _: &Partial) -> Option<(String, Span)> {
    claimed.fragments().into_iter().find_map(|fragment| {
        CJK_CHUNK
            .find_iter(fragment.text)
            .find_map(|m| {
                candidate(claimed, fragment.start + m.start(), fragment.start + m.end(), Filter::Embedded)
            })
    })
}
