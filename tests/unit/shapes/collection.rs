use super::*;
use crate::foundation::core::Point;
use crate::shapes::ShapeExt;
use crate::shapes::rect::Rectangle;
use crate::style::key::StyleMap;

fn square(x: f64, side: f64) -> Rectangle {
    Rectangle::new(side, side, Point::new(x, 0.0), 0.0, &StyleMap::new())
}

#[test]
fn markup_orders_children_by_z_and_skips_hidden() {
    let back = square(0.0, 1.0).with_z(-1.0);
    let hidden = square(10.0, 1.0);
    hidden.show.set_from(0.0, false);
    let front = square(20.0, 1.0);
    let group = Collection::new(
        vec![front.into_shared(), hidden.into_shared(), back.into_shared()],
        0.0,
    );
    let markup = group.to_markup(0.0);
    assert!(markup.starts_with("<g>\n<rect x='0'"));
    assert!(markup.contains("\n<rect x='20'"));
    assert!(!markup.contains("x='10'"));
    assert!(markup.ends_with(" />\n</g>"));
}

#[test]
fn bbox_range_unions_children() {
    let group = Collection::new(
        vec![square(0.0, 10.0).into_shared(), square(50.0, 5.0).into_shared()],
        0.0,
    );
    assert_eq!(group.bbox(0.0).unwrap(), Rect::new(0.0, 0.0, 55.0, 10.0));
    assert_eq!(
        group.bbox_range(0.0, 1..2).unwrap(),
        Rect::new(50.0, 0.0, 55.0, 5.0)
    );
    assert!(matches!(
        group.bbox_range(0.0, 1..3),
        Err(VectorError::Config(_))
    ));
    assert!(matches!(
        Collection::new(Vec::new(), 0.0).bbox(0.0),
        Err(VectorError::Geometry(_))
    ));
}

#[test]
fn path_places_children_with_their_transforms() {
    let child = square(0.0, 10.0);
    child.styling.dx.set_from(0.0, 100.0);
    let group = Collection::new(vec![child.into_shared()], 0.0);
    assert_eq!(group.path(0.0).unwrap().bbox(), Some(Rect::new(100.0, 0.0, 110.0, 10.0)));
}

#[test]
fn shift_moves_every_child() {
    let a = square(0.0, 1.0);
    let b = square(5.0, 1.0);
    let group = Collection::new(vec![a.clone().into_shared(), b.clone().into_shared()], 0.0);
    group.shift(3.0, 0.0, 1.0, None, Ease::Linear).unwrap();
    assert_eq!(a.x.at(1.0), 3.0);
    assert_eq!(b.x.at(1.0), 8.0);
    assert_eq!(group.last_change(), 1.0);
}

#[test]
fn write_staggers_children_over_the_window() {
    let children: Vec<Rectangle> = (0..4).map(|i| square(i as f64, 1.0)).collect();
    let group = Collection::new(
        children.iter().cloned().map(ShapeExt::into_shared).collect(),
        0.0,
    );
    group.write(0.0, 14.0, 2.0, true);

    // four children plus a window of ten gives one second per slot
    assert!(!children[0].show.at(-0.5));
    assert!(children[0].show.at(0.0));
    assert!(!children[3].show.at(2.5));
    assert!(children[3].show.at(3.0));
    assert_eq!(children[0].styling.fill_opacity.at(5.5), 0.35);
    assert_eq!(children[3].styling.fill_opacity.at(8.5), 0.35);
    assert_eq!(children[3].styling.fill_opacity.at(14.0), 0.7);
    assert_eq!(group.last_change(), 14.0);
}
