//! Province-level divisions of China
//!
//! The table is the single source for province matching, municipality
//! correction, name filtering and validation. It is never mutated.

use once_cell::sync::Lazy;
use regex::Regex;

/// Kind of province-level division, in matching priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RegionKind {
    Municipality,
    Province,
    AutonomousRegion,
    SpecialAdministrativeRegion,
}

impl RegionKind {
    /// All kinds in the order their rules are tried
    pub const PRIORITY: [RegionKind; 4] = [
        RegionKind::Municipality,
        RegionKind::Province,
        RegionKind::AutonomousRegion,
        RegionKind::SpecialAdministrativeRegion,
    ];

    /// Optional suffix accepted after the short name
    fn suffix_pattern(self) -> &'static str {
        match self {
            RegionKind::Municipality => "市?",
            RegionKind::Province => "省?",
            RegionKind::AutonomousRegion => "(?:壮族|维吾尔|回族)?(?:自治区)?",
            RegionKind::SpecialAdministrativeRegion => "(?:特别行政区)?",
        }
    }
}

/// One province-level division
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// Name as usually written without suffix, e.g. `广西`
    pub short: &'static str,
    /// Canonical full name, e.g. `广西壮族自治区`
    pub full: &'static str,
    pub kind: RegionKind,
}

impl Region {
    pub fn is_municipality(&self) -> bool {
        self.kind == RegionKind::Municipality
    }
}

const fn region(short: &'static str, full: &'static str, kind: RegionKind) -> Region {
    Region { short, full, kind }
}

pub static REGIONS: &[Region] = &[
    region("北京", "北京市", RegionKind::Municipality),
    region("天津", "天津市", RegionKind::Municipality),
    region("上海", "上海市", RegionKind::Municipality),
    region("重庆", "重庆市", RegionKind::Municipality),
    region("河北", "河北省", RegionKind::Province),
    region("山西", "山西省", RegionKind::Province),
    region("辽宁", "辽宁省", RegionKind::Province),
    region("吉林", "吉林省", RegionKind::Province),
    region("黑龙江", "黑龙江省", RegionKind::Province),
    region("江苏", "江苏省", RegionKind::Province),
    region("浙江", "浙江省", RegionKind::Province),
    region("安徽", "安徽省", RegionKind::Province),
    region("福建", "福建省", RegionKind::Province),
    region("江西", "江西省", RegionKind::Province),
    region("山东", "山东省", RegionKind::Province),
    region("河南", "河南省", RegionKind::Province),
    region("湖北", "湖北省", RegionKind::Province),
    region("湖南", "湖南省", RegionKind::Province),
    region("广东", "广东省", RegionKind::Province),
    region("海南", "海南省", RegionKind::Province),
    region("四川", "四川省", RegionKind::Province),
    region("贵州", "贵州省", RegionKind::Province),
    region("云南", "云南省", RegionKind::Province),
    region("陕西", "陕西省", RegionKind::Province),
    region("甘肃", "甘肃省", RegionKind::Province),
    region("青海", "青海省", RegionKind::Province),
    region("台湾", "台湾省", RegionKind::Province),
    region("内蒙古", "内蒙古自治区", RegionKind::AutonomousRegion),
    region("广西", "广西壮族自治区", RegionKind::AutonomousRegion),
    region("西藏", "西藏自治区", RegionKind::AutonomousRegion),
    region("宁夏", "宁夏回族自治区", RegionKind::AutonomousRegion),
    region("新疆", "新疆维吾尔自治区", RegionKind::AutonomousRegion),
    region("香港", "香港特别行政区", RegionKind::SpecialAdministrativeRegion),
    region("澳门", "澳门特别行政区", RegionKind::SpecialAdministrativeRegion),
];

/// One compiled rule per kind, indexed by `RegionKind as usize`; group 1 is the short name
static KIND_PATTERNS: Lazy<[Regex; 4]> = Lazy::new(|| {
    RegionKind::PRIORITY.map(|kind| {
        let names: Vec<&str> = regions_of(kind).map(|r| r.short).collect();
        let pattern = format!("({}){}", names.join("|"), kind.suffix_pattern());
        Regex::new(&pattern).expect("Failed to compile gazetteer regex")
    })
});

/// Regions of one kind, in table order
pub fn regions_of(kind: RegionKind) -> impl Iterator<Item = &'static Region> {
    REGIONS.iter().filter(move |r| r.kind == kind)
}

/// Compiled matcher for one rule group
pub fn pattern_for(kind: RegionKind) -> &'static Regex {
    &KIND_PATTERNS[kind as usize]
}

/// Look up a region by its short name
pub fn by_short(short: &str) -> Option<&'static Region> {
    REGIONS.iter().find(|r| r.short == short)
}

/// Look up a region by its canonical full name
pub fn by_full(full: &str) -> Option<&'static Region> {
    REGIONS.iter().find(|r| r.full == full)
}

/// True when `text` contains any short name, used to sanity check a province field
pub fn mentions_region(text: &str) -> bool {
    REGIONS.iter().any(|r| text.contains(r.short))
}

/// True when `text` begins with a short name
pub fn starts_with_region(text: &str) -> bool {
    REGIONS.iter().any(|r| text.starts_with(r.short))
}

/// True when the canonical province name belongs to a municipality
pub fn is_municipality(province: &str) -> bool {
    by_full(province).map(Region::is_municipality).unwrap_or(false)
}
