//! Character-level helpers shared by the extractors

use regex::Regex;

/// Characters that turn a preceding 市/区 into part of a road name
const ROAD_CHARS: [char; 4] = ['路', '街', '巷', '道'];

/// CJK unified ideographs as used by the address rules (U+4E00..=U+9FA5)
pub fn is_cjk(c: char) -> bool {
    ('\u{4e00}'..='\u{9fa5}').contains(&c)
}

pub fn is_road_char(c: char) -> bool {
    ROAD_CHARS.contains(&c)
}

/// Byte length and char count of the CJK run at the start of `text`, at most `max` chars
pub fn leading_cjk(text: &str, max: usize) -> (usize, usize) {
    let mut len = 0;
    let mut count = 0;
    for c in text.chars().take_while(|&c| is_cjk(c)).take(max) {
        len += c.len_utf8();
        count += 1;
    }
    (len, count)
}

/// Byte length and char count of the whole CJK run at the end of `text`
pub fn trailing_cjk(text: &str) -> (usize, usize) {
    let mut len = 0;
    let mut count = 0;
    for c in text.chars().rev().take_while(|&c| is_cjk(c)) {
        len += c.len_utf8();
        count += 1;
    }
    (len, count)
}

/// True when `start..end` of `text` is not glued to another digit on either side
pub fn digit_bounded(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.map_or(false, |c| c.is_ascii_digit()) && !after.map_or(false, |c| c.is_ascii_digit())
}

/// Leftmost match of `regex` in `text` accepted by `accept`; a rejected
/// match is retried from the next character so overlapping candidates are
/// not lost
pub fn find_accepted<F>(regex: &Regex, text: &str, mut accept: F) -> Option<(usize, usize)>
where
    F: FnMut(usize, usize) -> bool,
{
    let mut at = 0;
    while at <= text.len() {
        let m = regex.find_at(text, at)?;
        if accept(m.start(), m.end()) {
            return Some((m.start(), m.end()));
        }
        at = m.start() + text[m.start()..].chars().next().map_or(1, char::len_utf8);
    }
    None
}

/// Leftmost-shortest `[CJK]{2,10}<suffix>` in `text`.
///
/// With `guarded`, a match directly followed by 路/街/巷/道 is skipped and the
/// search goes on with a longer prefix, then later start positions.
pub fn find_suffixed(text: &str, suffix: &str, guarded: bool) -> Option<(usize, usize)> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();

    for i in 0..chars.len() {
        let start = chars[i].0;
        let mut prefix_len = 0;

        for &(offset, c) in &chars[i..] {
            if !is_cjk(c) {
                break;
            }
            prefix_len += 1;
            if prefix_len > 10 {
                break;
            }
            if prefix_len < 2 {
                continue;
            }

            let after_prefix = offset + c.len_utf8();
            if !text[after_prefix..].starts_with(suffix) {
                continue;
            }

            let end = after_prefix + suffix.len();
            if guarded && text[end..].chars().next().map_or(false, is_road_char) {
                continue;
            }
            return Some((start, end));
        }
    }

    None
}
