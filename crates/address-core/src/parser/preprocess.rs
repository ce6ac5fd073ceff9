//! Input normalization

use super::claims::{ClaimKind, ClaimedText, LabelKind};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Canonical label text per concept
pub const NAME_LABEL: &str = "收件人：";
pub const PHONE_LABEL: &str = "手机号：";
pub const REGION_LABEL: &str = "地区：";
pub const ADDRESS_LABEL: &str = "地址：";
pub const POSTAL_LABEL: &str = "邮编：";

// Longer synonyms come first so "手机号码" never stops at "手机"
static LABEL_SYNONYMS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(收件人|收货人|姓名|联系人|手机号码|手机号|联系电话|电话|手机|所在地区|地区|详细地址|收货地址|地址|邮政编码|邮编)\s*[:：]\s*",
    )
    .expect("Failed to compile label regex")
});

static CANONICAL_LABELS: Lazy<Regex> = Lazy::new(|| {
    Regex::new("收件人：|手机号：|地区：|地址：|邮编：").expect("Failed to compile canonical label regex")
});

static WHITESPACE_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s{2,}").expect("Failed to compile whitespace regex"));

impl LabelKind {
    pub fn canonical(self) -> &'static str {
        match self {
            LabelKind::Name => NAME_LABEL,
            LabelKind::Phone => PHONE_LABEL,
            LabelKind::Region => REGION_LABEL,
            LabelKind::Address => ADDRESS_LABEL,
            LabelKind::Postal => POSTAL_LABEL,
        }
    }

    fn from_synonym(word: &str) -> Option<Self> {
        match word {
            "收件人" | "收货人" | "姓名" | "联系人" => Some(LabelKind::Name),
            "手机号码" | "手机号" | "联系电话" | "电话" | "手机" => Some(LabelKind::Phone),
            "所在地区" | "地区" => Some(LabelKind::Region),
            "详细地址" | "收货地址" | "地址" => Some(LabelKind::Address),
            "邮政编码" | "邮编" => Some(LabelKind::Postal),
            _ => None,
        }
    }

    fn from_canonical(label: &str) -> Option<Self> {
        [
            LabelKind::Name,
            LabelKind::Phone,
            LabelKind::Region,
            LabelKind::Address,
            LabelKind::Postal,
        ]
        .into_iter()
        .find(|kind| kind.canonical() == label)
    }
}

/// Rewrite label synonyms to their canonical form and tidy whitespace
pub fn normalize(input: &str) -> String {
    let labeled = LABEL_SYNONYMS.replace_all(input, |caps: &Captures| {
        LabelKind::from_synonym(&caps[1])
            .map(|kind| kind.canonical().to_string())
            .unwrap_or_else(|| caps[0].to_string())
    });

    let unified = labeled
        .replace('\0', "")
        .replace("\r\n", "\n")
        .replace('\t', " ");

    WHITESPACE_RUNS.replace_all(&unified, " ").trim().to_string()
}

/// Claim every canonical label so no extractor reads it as content
pub fn claim_labels(claimed: &mut ClaimedText) {
    let labels: Vec<(usize, usize, LabelKind)> = CANONICAL_LABELS
        .find_iter(claimed.text())
        .filter_map(|m| LabelKind::from_canonical(m.as_str()).map(|kind| (m.start(), m.end(), kind)))
        .collect();

    for (start, end, kind) in labels {
        claimed.claim(start, end, ClaimKind::Label(kind));
    }
}
