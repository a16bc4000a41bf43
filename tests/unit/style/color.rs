use super::*;
use serde_json::json;

#[test]
fn parses_short_long_and_alpha_hex() {
    assert_eq!(Color::parse("#fe0").unwrap(), Color::rgb(255.0, 238.0, 0.0));
    assert_eq!(Color::parse("#ffee00").unwrap(), Color::rgb(255.0, 238.0, 0.0));
    assert_eq!(
        Color::parse("#ffee9900").unwrap(),
        Color::rgba(255.0, 238.0, 153.0, 0.0)
    );
}

#[test]
fn parses_names_case_insensitively() {
    assert_eq!(Color::parse("white").unwrap(), Color::WHITE);
    assert_eq!(Color::parse("Green").unwrap(), Color::hex(0x83C167));
}

#[test]
fn rejects_malformed_and_gradients() {
    assert!(matches!(Color::parse("#12345"), Err(VectorError::Config(_))));
    assert!(matches!(Color::parse("#zzz"), Err(VectorError::Config(_))));
    assert!(matches!(Color::parse("chartreuse-ish"), Err(VectorError::Config(_))));
    assert!(matches!(
        Color::parse("url(#grad)"),
        Err(VectorError::Unsupported(_))
    ));
    assert!(Color::from_tuple(&[1.0, 2.0]).is_err());
}

#[test]
fn serializes_rounded_functional_form() {
    assert_eq!(Color::rgb(10.4, 20.6, 0.0).to_svg(), "rgb(10,21,0)");
    assert_eq!(Color::rgba(1.0, 2.0, 3.0, 127.6).to_string(), "rgba(1,2,3,128)");
}

#[test]
fn zero_keeps_kind_and_lerp_checks_kind() {
    assert_eq!(Color::WHITE.zero_like(), Color::BLACK);
    assert_eq!(
        Color::rgba(9.0, 9.0, 9.0, 9.0).zero_like(),
        Color::rgba(0.0, 0.0, 0.0, 0.0)
    );
    let mid = Color::lerp(&Color::BLACK, &Color::WHITE, 0.5);
    assert_eq!(mid, Color::rgb(127.5, 127.5, 127.5));
    assert!(Color::check_compatible(&Color::BLACK, &Color::rgba(0.0, 0.0, 0.0, 1.0)).is_err());
}

#[test]
fn deserializes_from_string_or_array() {
    let c: Color = serde_json::from_value(json!("#fff")).unwrap();
    assert_eq!(c, Color::WHITE);
    let c: Color = serde_json::from_value(json!([1.0, 2.0, 3.0, 4.0])).unwrap();
    assert_eq!(c, Color::rgba(1.0, 2.0, 3.0, 4.0));
}
