//! Claimed spans over the normalized input
//!
//! Every extractor records the byte range it consumed instead of rewriting
//! the text. The still-unclaimed text is computed on demand as a list of
//! fragments, and patterns are matched per fragment so no match can run
//! across a span that another stage already owns.

use std::fmt;

/// Which explicit label a `Label` claim stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelKind {
    Name,
    Phone,
    Region,
    Address,
    Postal,
}

/// What a claimed span was consumed by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClaimKind {
    Label(LabelKind),
    Phone,
    PostalCode,
    Landline,
    Province,
    City,
    District,
    /// Street / subdistrict marker; protected but kept in the detail
    Street,
    Name,
}

impl ClaimKind {
    /// Retained spans stay visible in the detail text
    pub fn is_retained(self) -> bool {
        matches!(self, ClaimKind::Street)
    }

    /// Province, city or district
    pub fn is_administrative(self) -> bool {
        matches!(self, ClaimKind::Province | ClaimKind::City | ClaimKind::District)
    }
}

impl fmt::Display for ClaimKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClaimKind::Label(label) => write!(f, "label:{:?}", label),
            ClaimKind::Phone => write!(f, "phone"),
            ClaimKind::PostalCode => write!(f, "postal_code"),
            ClaimKind::Landline => write!(f, "landline"),
            ClaimKind::Province => write!(f, "province"),
            ClaimKind::City => write!(f, "city"),
            ClaimKind::District => write!(f, "district"),
            ClaimKind::Street => write!(f, "street"),
            ClaimKind::Name => write!(f, "name"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Claim {
    pub start: usize,
    pub end: usize,
    pub kind: ClaimKind,
}

/// A maximal run of unclaimed text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment<'a> {
    /// Byte offset of `text` in the normalized input
    pub start: usize,
    pub text: &'a str,
    /// Claim directly before this fragment, `None` at the start of the input
    pub preceded_by: Option<ClaimKind>,
}

impl Fragment<'_> {
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    /// True when the fragment holds anything besides whitespace
    pub fn has_content(&self) -> bool {
        !self.text.trim().is_empty()
    }
}

/// Normalized input plus the non-overlapping spans claimed so far
#[derive(Debug, Clone)]
pub struct ClaimedText {
    text: String,
    /// Sorted by `start`, never overlapping
    claims: Vec<Claim>,
}

impl ClaimedText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            claims: Vec::new(),
        }
    }

    /// The full normalized text, claims ignored
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn claims(&self) -> &[Claim] {
        &self.claims
    }

    /// Text covered by a claim
    pub fn slice(&self, claim: &Claim) -> &str {
        &self.text[claim.start..claim.end]
    }

    /// First claim of a kind, in text order
    pub fn first(&self, kind: ClaimKind) -> Option<Claim> {
        self.claims.iter().copied().find(|c| c.kind == kind)
    }

    /// True when `start..end` is a non-empty, in-bounds range that no claim touches
    pub fn is_free(&self, start: usize, end: usize) -> bool {
        start < end
            && end <= self.text.len()
            && self.text.is_char_boundary(start)
            && self.text.is_char_boundary(end)
            && self.claims.iter().all(|c| c.end <= start || c.start >= end)
    }

    /// Claim `start..end`; refused (returns false) when any part is already taken
    pub fn claim(&mut self, start: usize, end: usize, kind: ClaimKind) -> bool {
        if !self.is_free(start, end) {
            log::trace!("Refused overlapping {} claim at {}..{}", kind, start, end);
            return false;
        }

        let index = self.claims.partition_point(|c| c.start < start);
        self.claims.insert(index, Claim { start, end, kind });
        true
    }

    /// Give the first claim of a kind back to the remaining text
    pub fn release(&mut self, kind: ClaimKind) -> Option<Claim> {
        let index = self.claims.iter().position(|c| c.kind == kind)?;
        Some(self.claims.remove(index))
    }

    /// Unclaimed runs in text order; retained claims split fragments too
    pub fn fragments(&self) -> Vec<Fragment<'_>> {
        let mut fragments = Vec::with_capacity(self.claims.len() + 1);
        let mut cursor = 0;
        let mut preceded_by = None;

        for claim in &self.claims {
            if claim.start > cursor {
                fragments.push(Fragment {
                    start: cursor,
                    text: &self.text[cursor..claim.start],
                    preceded_by,
                });
            }
            cursor = claim.end;
            preceded_by = Some(claim.kind);
        }

        if cursor < self.text.len() {
            fragments.push(Fragment {
                start: cursor,
                text: &self.text[cursor..],
                preceded_by,
            });
        }

        fragments
    }

    /// Run `finder` on each fragment in order; the first hit is returned as
    /// an absolute range
    pub fn find_first<F>(&self, mut finder: F) -> Option<(usize, usize)>
    where
        F: FnMut(&str) -> Option<(usize, usize)>,
    {
        self.fragments().into_iter().find_map(|fragment| {
            finder(fragment.text).map(|(start, end)| (fragment.start + start, fragment.start + end))
        })
    }

    /// Unclaimed text joined with retained claims, in text order
    pub fn residue(&self) -> String {
        let mut residue = String::with_capacity(self.text.len());
        let mut cursor = 0;

        for claim in &self.claims {
            residue.push_str(&self.text[cursor..claim.start]);
            if claim.kind.is_retained() {
                residue.push_str(self.slice(claim));
            }
            cursor = claim.end;
        }
        residue.push_str(&self.text[cursor..]);

        residue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_stay_sorted_and_disjoint() {
        let mut claimed = ClaimedText::new("abcdefghij");
        assert!(claimed.claim(6, 8, ClaimKind::Phone));
        assert!(claimed.claim(0, 2, ClaimKind::Name));
        assert!(!claimed.claim(1, 3, ClaimKind::City));
        assert!(!claimed.claim(7, 9, ClaimKind::City));
        assert!(claimed.claim(2, 6, ClaimKind::City));

        let starts: Vec<usize> = claimed.claims().iter().map(|c| c.start).collect();
        assert_eq!(starts, vec![0, 2, 6]);
    }

    #[test]
    fn test_refuses_split_characters() {
        let mut claimed = ClaimedText::new("张三");
        assert!(!claimed.claim(1, 3, ClaimKind::Name));
        assert!(!claimed.claim(3, 3, ClaimKind::Name));
        assert!(claimed.claim(0, 3, ClaimKind::Name));
    }

    #[test]
    fn test_fragments_record_preceding_claim() {
        let mut claimed = ClaimedText::new("aa bb cc");
        claimed.claim(3, 5, ClaimKind::District);

        let fragments = claimed.fragments();
        assert_eq!(fragments.len(), 2);
        assert_eq!(fragments[0].text, "aa ");
        assert_eq!(fragments[0].preceded_by, None);
        assert_eq!(fragments[1].text, " cc");
        assert_eq!(fragments[1].start, 5);
        assert_eq!(fragments[1].preceded_by, Some(ClaimKind::District));
    }

    #[test]
    fn test_residue_keeps_retained_claims() {
        let mut claimed = ClaimedText::new("广州市建国路街道1号");
        let city_end = "广州市".len();
        let street_end = city_end + "建国路街道".len();
        claimed.claim(0, city_end, ClaimKind::City);
        claimed.claim(city_end, street_end, ClaimKind::Street);

        assert_eq!(claimed.residue(), "建国路街道1号");
        // Retained text is still protected from other stages
        assert!(claimed.fragments().iter().all(|f| !f.text.contains("街道")));
    }

    #[test]
    fn test_release_returns_text() {
        let mut claimed = ClaimedText::new("abc");
        claimed.claim(0, 1, ClaimKind::City);
        assert_eq!(claimed.residue(), "bc");

        let released = claimed.release(ClaimKind::City).unwrap();
        assert_eq!(released.start, 0);
        assert_eq!(claimed.residue(), "abc");
        assert!(claimed.release(ClaimKind::City).is_none());
    }

    #[test]
    fn test_find_first_reports_absolute_offsets() {
        let mut claimed = ClaimedText::new("x1 y2");
        claimed.claim(0, 2, ClaimKind::Landline);

        let hit = claimed.find_first(|text| text.find('y').map(|i| (i, i + 1)));
        assert_eq!(hit, Some((3, 4)));
    }
}
