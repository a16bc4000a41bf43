use super::*;
use crate::foundation::core::Point;
use crate::shapes::ShapeExt;
use crate::shapes::polygon::Polygon;
use crate::shapes::rect::Rectangle;
use crate::style::color::Color;
use crate::style::key::StyleMap;

fn triangle() -> Polygon {
    Polygon::new(
        &[
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(0.0, 10.0),
        ],
        0.0,
        &StyleMap::new().with("fill", "#ff0000").unwrap(),
    )
}

fn square() -> Rectangle {
    Rectangle::new(
        10.0,
        10.0,
        Point::new(100.0, 0.0),
        0.0,
        &StyleMap::new().with("fill", "#0000ff").unwrap(),
    )
}

fn build(change_existence: bool) -> (Polygon, Rectangle, MorphObject) {
    let (t, s) = (triangle(), square());
    let morph = MorphObject::new(
        &[t.clone().into_shared()],
        &[s.clone().into_shared()],
        1.0,
        3.0,
        Ease::Linear,
        change_existence,
        MorphOpts::default(),
    )
    .unwrap();
    (t, s, morph)
}

#[test]
fn one_piece_per_matched_subpath() {
    let (_, _, morph) = build(false);
    assert_eq!(morph.plan().subpaths.len(), 1);
    assert_eq!(morph.pieces().len(), 1);
    assert_eq!(morph.plan().subpaths[0].segment_count(), 4);
}

#[test]
fn pieces_travel_between_endpoints() {
    let (t, s, morph) = build(false);
    let piece = &morph.pieces()[0];
    let start = piece.path(1.0).unwrap().bbox().unwrap();
    let end = piece.path(3.0).unwrap().bbox().unwrap();
    let mid = piece.path(2.0).unwrap().bbox().unwrap();
    let close = |a: Rect, b: Rect| {
        (a.x0 - b.x0).abs() < 1e-9
            && (a.y0 - b.y0).abs() < 1e-9
            && (a.x1 - b.x1).abs() < 1e-9
            && (a.y1 - b.y1).abs() < 1e-9
    };
    assert!(close(start, t.bbox(1.0).unwrap()));
    assert!(close(end, s.bbox(3.0).unwrap()));
    assert!(mid.x0 > start.x0 && mid.x0 < end.x0);
}

#[test]
fn styling_blends_between_sources() {
    let (_, _, morph) = build(false);
    let styling = morph.pieces()[0].styling().unwrap();
    assert_eq!(styling.fill.at(1.0), Color::rgb(255.0, 0.0, 0.0));
    assert_eq!(styling.fill.at(2.0), Color::rgb(127.5, 0.0, 127.5));
    assert_eq!(styling.fill.at(3.0), Color::rgb(0.0, 0.0, 255.0));
}

#[test]
fn group_exists_only_during_the_morph() {
    let (t, s, morph) = build(true);
    assert!(morph.show().at(2.0));
    assert!(!morph.show().at(3.0));
    assert!(t.show.at(0.5));
    assert!(!t.show.at(1.0));
    assert!(!s.show.at(2.0));
    assert!(s.show.at(3.0));
    assert_eq!(morph.to_markup(4.0).matches("<path").count(), 0);
}

#[test]
fn without_change_existence_sources_stay_visible() {
    let (t, s, _) = build(false);
    assert!(t.show.at(2.0));
    assert!(s.show.at(2.0));
}
