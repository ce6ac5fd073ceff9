//! Detail cleanup

use once_cell::sync::Lazy;
use regex::Regex;

static LABEL_WORDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new("收货地址|详细地址|所在地区|地址|收货人|收件人|姓名|联系人|手机号码|手机号|电话|邮编|地区")
        .expect("Failed to compile label word regex")
});

static SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[:：,，.。、;；\s]+").expect("Failed to compile separator regex"));

/// Turn the residue left by the extractors into the detail text
pub fn clean(residue: &str) -> String {
    let without_labels = LABEL_WORDS.replace_all(residue, "");
    SEPARATORS.replace_all(&without_labels, " ").trim().to_string()
}
