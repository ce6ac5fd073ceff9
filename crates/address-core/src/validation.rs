//! Completeness and plausibility checks on a parsed address

use crate::gazetteer;
use address_types::{ParsedAddress, ValidationReport};
use once_cell::sync::Lazy;
use regex::Regex;

pub const INVALID_PHONE: &str = "手机号格式不正确";
pub const MASKED_PHONE: &str = "手机号包含遮蔽符号，请修改为完整号码";
pub const SUSPICIOUS_PROVINCE: &str = "省份可能不准确";
pub const MISSING_NAME: &str = "未识别到姓名";
pub const MISSING_PHONE: &str = "未识别到手机号";
pub const MISSING_PROVINCE: &str = "未识别到省份";
pub const MISSING_DETAIL: &str = "未识别到详细地址";

static VALID_MOBILE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^1[3-9][0-9]{9}$").expect("Failed to compile mobile regex"));

/// Check a record produced by any parser
///
/// Only a malformed phone is an error; everything else is a hint for the
/// user to complete the form.
pub fn validate(address: &ParsedAddress) -> ValidationReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if !address.phone.is_empty() && !VALID_MOBILE.is_match(&address.phone) {
        errors.push(INVALID_PHONE.to_string());
    }
    if address.masked_phone.is_some() || address.phone.contains('*') {
        warnings.push(MASKED_PHONE.to_string());
    }
    if !address.province.is_empty() && !gazetteer::mentions_region(&address.province) {
        warnings.push(SUSPICIOUS_PROVINCE.to_string());
    }

    for (value, message) in [
        (&address.name, MISSING_NAME),
        (&address.phone, MISSING_PHONE),
        (&address.province, MISSING_PROVINCE),
        (&address.detail, MISSING_DETAIL),
    ] {
        if value.is_empty() {
            warnings.push(message.to_string());
        }
    }

    ValidationReport::new(errors, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> ParsedAddress {
        ParsedAddress {
            name: "张三".to_string(),
            phone: "13812345678".to_string(),
            province: "广东省".to_string(),
            city: "广州市".to_string(),
            district: "天河区".to_string(),
            detail: "黄埔大道1号".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_complete_record_is_clean() {
        let report = validate(&complete());
        assert!(report.is_valid);
        assert!(report.errors.is_empty());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_empty_record_only_warns() {
        let report = validate(&ParsedAddress::empty(""));
        assert!(report.is_valid);
        assert_eq!(
            report.warnings,
            vec![MISSING_NAME, MISSING_PHONE, MISSING_PROVINCE, MISSING_DETAIL]
        );
    }

    #[test]
    fn test_masked_phone_is_an_error_and_a_hint() {
        let mut address = complete();
        address.phone = "138****1234".to_string();
        address.masked_phone = Some(address.phone.clone());

        let report = validate(&address);
        assert!(!report.is_valid);
        assert_eq!(report.errors, vec![INVALID_PHONE]);
        assert_eq!(report.warnings, vec![MASKED_PHONE]);
    }

    #[test]
    fn test_discarded_masked_phone_still_hints() {
        let mut address = complete();
        address.phone.clear();
        address.masked_phone = Some("138****1234".to_string());

        let report = validate(&address);
        assert!(report.is_valid);
        assert_eq!(report.warnings, vec![MASKED_PHONE, MISSING_PHONE]);
    }

    #[test]
    fn test_unknown_province() {
        let mut address = complete();
        address.province = "火星省".to_string();
        assert_eq!(validate(&address).warnings, vec![SUSPICIOUS_PROVINCE]);
    }

    #[test]
    fn test_short_phone_is_invalid() {
        let mut address = complete();
        address.phone = "1381234567".to_string();
        assert_eq!(validate(&address).errors, vec![INVALID_PHONE]);
    }
}
