use address_core::parser::claims::ClaimKind;
use address_core::validation::{self, MASKED_PHONE};
use address_core::{format_address, validate, AddressParser, MaskedPhonePolicy, ParserConfig};

const SAMPLES: [&str; 8] = [
    "张三 13812345678 广东省广州市天河区黄埔大道1号",
    "广东省广州市天河区黄埔大道1号 13812345678 张三",
    "李四 13912345678 北京朝阳区建国路88号",
    "王五 13712345678 北京市朝阳区建国路街道88号",
    "收件人：王小红，手机号码：139-1234-5678，地址：上海市浦东新区张江路88号 邮编201203",
    "广西南宁市青秀区民族大道100号 陈大文 13800001111",
    "重庆市渝中区解放碑88号 赵六 13612345678",
    "张三 138****1234 广东省广州市天河区xx路1号",
];

fn parser() -> AddressParser {
    AddressParser::default()
}

#[test]
fn test_name_before_phone() {
    let parsed = parser().parse(SAMPLES[0]);
    assert_eq!(parsed.name, "张三");
    assert_eq!(parsed.phone, "13812345678");
    assert_eq!(parsed.province, "广东省");
    assert_eq!(parsed.city, "广州市");
    assert_eq!(parsed.district, "天河区");
    assert_eq!(parsed.detail, "黄埔大道1号");
    assert_eq!(parsed.raw, SAMPLES[0]);
}

#[test]
fn test_name_after_address() {
    let parsed = parser().parse(SAMPLES[1]);
    assert_eq!(parsed.name, "张三");
    assert_eq!(parsed.phone, "13812345678");
    assert_eq!(parsed.province, "广东省");
    assert_eq!(parsed.city, "广州市");
    assert_eq!(parsed.district, "天河区");
    assert_eq!(parsed.detail, "黄埔大道1号");
}

#[test]
fn test_names_with_address_characters() {
    for name in ["李园园", "张文苑", "王道明"] {
        let inputs = [
            format!("{} 13812345678 广东省广州市天河区黄埔大道1号", name),
            format!("广东省广州市天河区黄埔大道1号 13812345678 {}", name),
        ];
        for input in &inputs {
            let parsed = parser().parse(input);
            assert_eq!(parsed.name, name, "input: {}", input);
            assert_eq!(parsed.phone, "13812345678", "input: {}", input);
            assert_eq!(parsed.district, "天河区", "input: {}", input);
            assert_eq!(parsed.detail, "黄埔大道1号", "input: {}", input);
            assert!(!parsed.detail.contains(name), "input: {}", input);
        }
    }
}

#[test]
fn test_municipality_correction() {
    let parsed = parser().parse(SAMPLES[2]);
    assert_eq!(parsed.name, "李四");
    assert_eq!(parsed.province, "北京市");
    assert_eq!(parsed.city, "北京市");
    assert_eq!(parsed.district, "朝阳区");
    assert_eq!(parsed.detail, "建国路88号");

    let parsed = parser().parse(SAMPLES[6]);
    assert_eq!(parsed.name, "赵六");
    assert_eq!(parsed.province, "重庆市");
    assert_eq!(parsed.city, "重庆市");
    assert_eq!(parsed.district, "渝中区");
    assert_eq!(parsed.detail, "解放碑88号");

    let parsed = parser().parse("天津滨海新区");
    assert_eq!(parsed.city, "天津市");
    assert_eq!(parsed.district, "滨海新区");
}

#[test]
fn test_street_is_preserved_in_detail() {
    let parsed = parser().parse(SAMPLES[3]);
    assert_eq!(parsed.district, "朝阳区");
    assert_eq!(parsed.detail, "建国路街道88号");
}

#[test]
fn test_labeled_input_with_separators() {
    let parsed = parser().parse(SAMPLES[4]);
    assert_eq!(parsed.name, "王小红");
    assert_eq!(parsed.phone, "13912345678");
    assert_eq!(parsed.province, "上海市");
    assert_eq!(parsed.city, "上海市");
    assert_eq!(parsed.district, "浦东新区");
    assert_eq!(parsed.postal_code, "201203");
    assert_eq!(parsed.detail, "张江路88号");
}

#[test]
fn test_autonomous_region_and_name_before_phone() {
    let parsed = parser().parse(SAMPLES[5]);
    assert_eq!(parsed.province, "广西壮族自治区");
    assert_eq!(parsed.city, "南宁市");
    assert_eq!(parsed.district, "青秀区");
    assert_eq!(parsed.name, "陈大文");
    assert_eq!(parsed.phone, "13800001111");
    assert_eq!(parsed.detail, "民族大道100号");
}

#[test]
fn test_phone_validity() {
    for (input, expected) in [
        ("电话13512345678广州", "13512345678"),
        ("tel:19912345678;", "19912345678"),
        ("联系方式 (130 1234 5678)", "13012345678"),
        ("订单 12345678901234 无电话", ""),
    ] {
        let parsed = parser().parse(input);
        assert_eq!(parsed.phone, expected, "input: {}", input);
        if !expected.is_empty() {
            assert!(!parsed.detail.contains(expected), "phone leaked into detail: {}", input);
        }
    }
}

#[test]
fn test_masked_phone_pass_through() {
    let parsed = parser().parse(SAMPLES[7]);
    assert_eq!(parsed.phone, "138****1234");
    assert_eq!(parsed.masked_phone.as_deref(), Some("138****1234"));

    let report = validate(&parsed);
    assert!(!report.is_valid);
    assert_eq!(report.errors, vec![validation::INVALID_PHONE]);
    assert!(report.warnings.iter().any(|w| w == MASKED_PHONE));
}

#[test]
fn test_masked_phone_discard() {
    let parser = AddressParser::new(ParserConfig {
        masked_phone_policy: MaskedPhonePolicy::Discard,
    });
    let parsed = parser.parse(SAMPLES[7]);
    assert_eq!(parsed.phone, "");

    let report = validate(&parsed);
    assert!(report.is_valid);
    assert!(report.warnings.iter().any(|w| w == MASKED_PHONE));
    assert!(report.warnings.iter().any(|w| w == validation::MISSING_PHONE));
}

#[test]
fn test_empty_input() {
    for input in ["", "   ", "\r\n\t"] {
        let parsed = parser().parse(input);
        assert!(parsed.is_blank(), "input: {:?}", input);
        assert_eq!(parsed.raw, input);

        let report = validate(&parsed);
        assert!(report.is_valid);
        assert!(report.errors.is_empty());
        assert_eq!(report.warnings.len(), 4);
    }
    assert!(parser().parse_opt(None).is_blank());
}

#[test]
fn test_phone_only() {
    let parsed = parser().parse("13812345678");
    assert_eq!(parsed.phone, "13812345678");
    assert_eq!(parsed.name, "");
    assert_eq!(parsed.detail, "");

    let report = validate(&parsed);
    assert_eq!(
        report.warnings,
        vec![validation::MISSING_NAME, validation::MISSING_PROVINCE, validation::MISSING_DETAIL]
    );
}

#[test]
fn test_claims_never_overlap() {
    for input in SAMPLES {
        let trace = parser().trace(input);
        for pair in trace.spans.windows(2) {
            assert!(pair[0].end <= pair[1].start, "overlap in {}: {:?}", input, pair);
        }
        for span in &trace.spans {
            assert_eq!(&trace.normalized[span.start..span.end], span.text);
        }
        for word in trace.address.detail.split(' ').filter(|w| !w.is_empty()) {
            assert!(trace.residue.contains(word), "detail word {} not in residue of {}", word, input);
        }
    }
}

#[test]
fn test_only_street_spans_are_retained() {
    let trace = parser().trace(SAMPLES[3]);
    for span in &trace.spans {
        let in_detail = trace.address.detail.contains(&span.text);
        assert_eq!(in_detail, span.kind == ClaimKind::Street, "span {:?}", span);
    }
}

#[test]
fn test_reformatted_address_reparses_cleanly() {
    for input in SAMPLES {
        let first = parser().parse(input);
        let formatted = format_address(&first);
        let second = parser().parse(&formatted);

        assert_eq!(second.province, first.province, "formatted: {}", formatted);
        assert_eq!(second.district, first.district, "formatted: {}", formatted);
        for field in [&first.province, &first.city, &first.district] {
            if !field.is_empty() {
                assert!(!second.detail.contains(field.as_str()), "{} leaked into {}", field, second.detail);
            }
        }
    }
}
