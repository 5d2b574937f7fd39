use super::*;

#[test]
fn parses_each_value_kind() {
    assert_eq!(StyleValue::parse("0.8").unwrap(), StyleValue::Number(0.8));
    assert_eq!(
        StyleValue::parse("-30%").unwrap(),
        StyleValue::Length(Length::percent(-30.0))
    );
    assert_eq!(
        StyleValue::parse("#ec4899").unwrap(),
        StyleValue::Color(Rgba8::rgb(0xec, 0x48, 0x99))
    );
    assert!(StyleValue::parse("wide").is_err());
    assert!(StyleValue::parse("#zz").is_err());
}

#[test]
fn deserializes_numbers_and_strings() {
    let vals: Vec<StyleValue> = serde_json::from_str(r##"[1, "0%", "#06b6d4"]"##).unwrap();
    assert_eq!(vals[0].kind(), ValueKind::Number);
    assert_eq!(vals[1].kind(), ValueKind::Length(Unit::Percent));
    assert_eq!(vals[2].kind(), ValueKind::Color);
    assert_eq!(
        serde_json::to_string(&vals).unwrap(),
        r##"[1.0,"0%","#06b6d4"]"##
    );
}

#[test]
fn serde_keeps_precision_that_css_rounds() {
    let v = StyleValue::Length(Length::percent(33.333333));
    assert_eq!(serde_json::to_string(&v).unwrap(), r#""33.333333%""#);
    assert_eq!(v.to_string(), "33.3333%");
    let back: StyleValue = serde_json::from_str(&serde_json::to_string(&v).unwrap()).unwrap();
    assert_eq!(back, v);
}

#[test]
fn mismatched_kinds_switch_immediately() {
    let a = StyleValue::Number(1.0);
    let b = StyleValue::Color(Rgba8::rgb(0, 0, 0));
    assert_eq!(StyleValue::lerp(&a, &b, 0.0), a);
    assert_eq!(StyleValue::lerp(&a, &b, 0.5), b);
}

#[test]
fn property_accepts_matching_kinds_only() {
    assert!(StyleProperty::TranslateY.accepts(ValueKind::Length(Unit::Percent)));
    assert!(!StyleProperty::TranslateY.accepts(ValueKind::Length(Unit::Deg)));
    assert!(StyleProperty::Rotate.accepts(ValueKind::Number));
    assert!(!StyleProperty::Opacity.accepts(ValueKind::Color));
    assert!(StyleProperty::Color.accepts(ValueKind::Color));
}

#[test]
fn css_values_apply_default_units() {
    assert_eq!(
        StyleProperty::Rotate.css_value(&StyleValue::Number(90.0)),
        "90deg"
    );
    assert_eq!(
        StyleProperty::Blur.css_value(&StyleValue::Number(2.5)),
        "2.5px"
    );
    assert_eq!(
        StyleProperty::TranslateY.css_value(&StyleValue::Length(Length::percent(60.0))),
        "60%"
    );
    assert_eq!(
        StyleProperty::Opacity.css_value(&StyleValue::Number(1.2)),
        "1"
    );
}

#[test]
fn property_names_accept_framer_aliases() {
    let p: StyleProperty = serde_json::from_str("\"y\"").unwrap();
    assert_eq!(p, StyleProperty::TranslateY);
    let p: StyleProperty = serde_json::from_str("\"strokeDashoffset\"").unwrap();
    assert_eq!(p, StyleProperty::StrokeDashoffset);
}
