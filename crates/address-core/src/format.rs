//! Single-line rendering of a parsed address

use crate::constants::RECOGNITION_SUCCESS_THRESHOLD;
use address_types::ParsedAddress;

/// Province, city, district and detail without separators.
///
/// The city is skipped when it repeats the province, as it does for the
/// four municipalities.
pub fn format_address(address: &ParsedAddress) -> String {
    let mut out = String::with_capacity(
        address.province.len() + address.city.len() + address.district.len() + address.detail.len(),
    );
    out.push_str(&address.province);
    if address.city != address.province {
        out.push_str(&address.city);
    }
    out.push_str(&address.district);
    out.push_str(&address.detail);
    out
}

/// Same as [`format_address`]
pub fn full_address(address: &ParsedAddress) -> String {
    format_address(address)
}

/// True when enough fields were found to fill a form without asking
pub fn is_recognized(address: &ParsedAddress) -> bool {
    address.recognized_fields() >= RECOGNITION_SUCCESS_THRESHOLD
}
