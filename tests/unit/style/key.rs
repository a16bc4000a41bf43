use super::*;
use serde_json::json;

#[test]
fn every_key_has_exactly_one_group() {
    let presentation = StyleKey::ALL
        .iter()
        .filter(|k| k.group() == StyleGroup::Presentation)
        .count();
    assert_eq!(presentation, 10);
    assert_eq!(StyleKey::ALL.len() - presentation, 10);
}

#[test]
fn names_round_trip_and_accept_hyphens() {
    for key in StyleKey::ALL {
        assert_eq!(key.as_str().parse::<StyleKey>().unwrap(), key);
    }
    assert_eq!("stroke-width".parse::<StyleKey>().unwrap(), StyleKey::StrokeWidth);
    assert_eq!(StyleKey::FillOpacity.svg_name(), "fill-opacity");
}

#[test]
fn unknown_names_are_rejected() {
    let err = "glow".parse::<StyleKey>().unwrap_err();
    assert!(matches!(err, VectorError::Config(_)));
    assert!(StyleMap::new().with("glow", 1.0).is_err());
}

#[test]
fn values_are_type_checked() {
    assert!(StyleMap::new().with("fill", 3.0).is_err());
    assert!(StyleMap::new().with("rotation", [1.0, 2.0]).is_err());
    assert!(StyleMap::new().with("matrix", [1.0, 0.0, 0.0, 1.0, 0.0, 0.0]).is_ok());

    let map = StyleMap::new().with("stroke", "#fff").unwrap();
    assert_eq!(
        map.get(StyleKey::Stroke),
        Some(&StyleValue::Color(Color::WHITE))
    );
}

#[test]
fn merged_prefers_the_overriding_layer() {
    let base = StyleMap::new()
        .with("fill", "#fff")
        .unwrap()
        .with("stroke_width", 3.0)
        .unwrap();
    let over = StyleMap::new().with("stroke_width", 5.0).unwrap();
    let merged = base.merged(&over);
    assert_eq!(merged.get(StyleKey::StrokeWidth), Some(&StyleValue::Real(5.0)));
    assert_eq!(merged.get(StyleKey::Fill), Some(&StyleValue::Color(Color::WHITE)));
}

#[test]
fn loads_overrides_from_json() {
    let map = StyleMap::from_json(&json!({
        "fill": "#e07a5f",
        "fill_opacity": 0.5,
        "rotation": [90, 10, 10]
    }))
    .unwrap();
    assert_eq!(map.get(StyleKey::FillOpacity), Some(&StyleValue::Real(0.5)));
    assert_eq!(
        map.get(StyleKey::Rotation),
        Some(&StyleValue::Tuple(vec![90.0, 10.0, 10.0]))
    );

    assert!(matches!(
        StyleMap::from_json(&json!([1, 2])),
        Err(VectorError::Serde(_))
    ));
    assert!(StyleMap::from_json_str("{\"fill\": true}").is_err());
}

#[test]
fn values_display_as_svg_text() {
    assert_eq!(StyleValue::Real(0.7).to_string(), "0.7");
    assert_eq!(StyleValue::Real(2.0).to_string(), "2");
    assert_eq!(StyleValue::Tuple(vec![1.0, 2.5]).to_string(), "1,2.5");
}
