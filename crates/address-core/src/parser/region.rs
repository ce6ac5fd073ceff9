//! Province, city and district extraction

use super::claims::{ClaimKind, ClaimedText};
use super::text::{find_suffixed, is_road_char};
use crate::gazetteer::{self, Region, RegionKind};

/// Suffix rule: `[CJK]{2,10}?<suffix>`, optionally refused before a road word
struct TierRule {
    suffix: &'static str,
    guarded: bool,
}

const fn rule(suffix: &'static str, guarded: bool) -> TierRule {
    TierRule { suffix, guarded }
}

// Ethnic qualifiers (藏族, 蒙古族, ...) sit inside the lazy prefix, so the
// bare suffix is enough to find 自治州 and 自治旗
const CITY_RULES: [TierRule; 4] = [
    rule("市", true),
    rule("地区", false),
    rule("自治州", false),
    rule("盟", false),
];

const DISTRICT_RULES: [TierRule; 3] = [rule("区", true), rule("县", false), rule("旗", false)];

const STREET_SUFFIX: &str = "街道";

/// Administrative tiers found in the text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionMatch {
    pub province: String,
    pub city: String,
    pub district: String,
}

/// Claim province, city and district, then mark a street span if any
pub fn extract(claimed: &mut ClaimedText) -> RegionMatch {
    let region = extract_province(claimed);
    let mut city = extract_tier(claimed, &CITY_RULES, ClaimKind::City).unwrap_or_default();

    if let Some(region) = region.filter(|r| r.is_municipality()) {
        if !city.ends_with('市') {
            // Municipalities have no separate city tier
            if !city.is_empty() {
                claimed.release(ClaimKind::City);
            }
            city = format!("{}市", region.short);
        }
    }

    let district = extract_tier(claimed, &DISTRICT_RULES, ClaimKind::District).unwrap_or_default();
    mark_street(claimed);

    let result = RegionMatch {
        province: region.map(|r| r.full.to_string()).unwrap_or_default(),
        city,
        district,
    };
    log::debug!(
        "[address] region: province='{}' city='{}' district='{}'",
        result.province,
        result.city,
        result.district
    );
    result
}

/// First rule group with a match wins, earliest match inside it
fn extract_province(claimed: &mut ClaimedText) -> Option<&'static Region> {
    for kind in RegionKind::PRIORITY {
        let pattern = gazetteer::pattern_for(kind);
        let hit = claimed.fragments().into_iter().find_map(|fragment| {
            pattern
                .captures_iter(fragment.text)
                .filter_map(|caps| {
                    let whole = caps.get(0)?;
                    let short = caps.get(1)?.as_str();
                    let followed_by_road = fragment.text[whole.end()..]
                        .chars()
                        .next()
                        .map_or(false, is_road_char);
                    if kind == RegionKind::Municipality && followed_by_road {
                        return None;
                    }
                    let region = gazetteer::by_short(short)?;
                    Some((fragment.start + whole.start(), fragment.start + whole.end(), region))
                })
                .next()
        });

        if let Some((start, end, region)) = hit {
            claimed.claim(start, end, ClaimKind::Province);
            return Some(region);
        }
    }
    None
}

fn extract_tier(claimed: &mut ClaimedText, rules: &[TierRule], kind: ClaimKind) -> Option<String> {
    rules.iter().find_map(|rule| {
        let (start, end) = claimed.find_first(|text| find_suffixed(text, rule.suffix, rule.guarded))?;
        let value = claimed.text()[start..end].to_string();
        claimed.claim(start, end, kind);
        Some(value)
    })
}

fn mark_street(claimed: &mut ClaimedText) {
    if let Some((start, end)) = claimed.find_first(|text| find_suffixed(text, STREET_SUFFIX, false)) {
        log::debug!("[address] street kept in detail: {}", &claimed.text()[start..end]);
        claimed.claim(start, end, ClaimKind::Street);
    }
}
