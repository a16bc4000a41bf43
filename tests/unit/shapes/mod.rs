use super::*;
use crate::shapes::polygon::Polygon;

fn square(corner: Point, side: f64) -> Rectangle {
    Rectangle::new(side, side, corner, 0.0, &StyleMap::new())
}

#[test]
fn bbox_includes_own_translation() {
    let r = square(Point::new(10.0, 20.0), 30.0);
    r.styling.dx.set_from(1.0, 5.0);
    assert_eq!(r.bbox(0.0).unwrap(), Rect::new(10.0, 20.0, 40.0, 50.0));
    assert_eq!(r.bbox(1.0).unwrap(), Rect::new(15.0, 20.0, 45.0, 50.0));
}

#[test]
fn with_z_applies_from_the_beginning() {
    let r = square(Point::ZERO, 1.0).with_z(3.0);
    assert_eq!(r.z.at(-100.0), 3.0);
}

#[test]
fn center_to_moves_bbox_center() {
    let r = square(Point::new(0.0, 0.0), 10.0);
    r.center_to(100.0, 50.0, 1.0, Some(2.0), Ease::Linear)
        .unwrap();
    assert_eq!(r.bbox(0.5).unwrap().center(), Point::new(5.0, 5.0));
    assert_eq!(r.bbox(1.5).unwrap().center(), Point::new(52.5, 27.5));
    assert_eq!(r.bbox(3.0).unwrap().center(), Point::new(100.0, 50.0));
}

#[test]
fn bounding_rect_pads_bbox() {
    let r = square(Point::new(10.0, 10.0), 20.0);
    let b = r.bounding_rect(0.0, 5.0).unwrap();
    assert_eq!(b.bbox(0.0).unwrap(), Rect::new(5.0, 5.0, 35.0, 35.0));
    assert_eq!(b.styling.stroke.at(0.0), Color::hex(0xffff00));
    assert_eq!(b.styling.fill_opacity.at(0.0), 0.0);
}

#[test]
fn tracking_bounding_rect_follows_shape() {
    let r = square(Point::new(0.0, 0.0), 10.0);
    r.shift(100.0, 0.0, 1.0, Some(2.0), Ease::Linear).unwrap();
    let b = r.bounding_rect_attached(0.0, 1.0, true).unwrap();
    assert_eq!(b.x.at(0.0), -1.0);
    assert_eq!(b.x.at(1.5), 49.0);
    assert_eq!(b.x.at(3.0), 99.0);
    assert_eq!(b.width.at(3.0), 12.0);
}

#[test]
fn static_bounding_rect_does_not_follow() {
    let r = square(Point::new(0.0, 0.0), 10.0);
    r.shift(100.0, 0.0, 1.0, None, Ease::Linear).unwrap();
    let b = r.bounding_rect_attached(0.0, 0.0, false).unwrap();
    assert_eq!(b.x.at(5.0), 0.0);
}

#[test]
fn fade_in_ramps_opacity_and_existence() {
    let p = Polygon::new(
        &[Point::ZERO, Point::new(1.0, 0.0), Point::new(0.0, 1.0)],
        0.0,
        &StyleMap::new(),
    );
    p.fade_in(1.0, 3.0, true, Ease::Linear);
    assert!(!p.show.at(0.5));
    assert!(p.show.at(1.0));
    assert_eq!(p.styling.opacity.at(2.0), 0.5);
    assert_eq!(p.styling.opacity.at(3.0), 1.0);
}

#[test]
fn write_pulses_stroke_width_back_to_final_value() {
    let r = square(Point::ZERO, 10.0);
    r.write(0.0, 2.0, 4.0, false);
    assert_eq!(r.styling.stroke_width.at(0.0), 0.0);
    assert_eq!(r.styling.stroke_width.at(2.0), 3.0);
    assert!(r.styling.stroke_width.at(1.0) > 3.0);
    assert_eq!(r.styling.fill_opacity.at(1.0), 0.35);
}

#[test]
fn create_draws_outline_then_fades_shape() {
    let r = square(Point::ZERO, 10.0);
    let outline = r.create(0.0, 3.0, true).unwrap();

    assert!(!r.show.at(1.0));
    assert!(r.show.at(2.0));
    assert_eq!(outline.d.at(0.0), "");
    let drawn = |t: Time| Path::parse(&outline.d.at(t)).unwrap().length();
    assert!((drawn(1.0) - 20.0).abs() < 1e-6);
    assert!((drawn(2.0) - 40.0).abs() < 1e-6);
    assert_eq!(outline.d.at(2.5), outline.d.at(2.0));

    assert!(outline.show.at(1.0));
    assert!(!outline.show.at(3.0));
    assert_eq!(outline.styling.fill_opacity.at(1.0), 0.0);
    assert_eq!(r.styling.fill_opacity.at(1.0), 0.7);
    assert_eq!(r.styling.opacity.at(2.5), 0.5);
    assert_eq!(outline.styling.opacity.at(2.5), 1.0);
}

#[test]
fn visible_by_z_is_stable() {
    let a: ShapeRef = square(Point::ZERO, 1.0).with_z(1.0).into_shared();
    let b: ShapeRef = square(Point::ZERO, 2.0).into_shared();
    let c: ShapeRef = square(Point::ZERO, 3.0).into_shared();
    let hidden = square(Point::ZERO, 4.0);
    hidden.show.set_from(0.0, false);
    let hidden: ShapeRef = hidden.into_shared();

    let shapes = vec![a, b, hidden, c];
    let order: Vec<_> = visible_by_z(&shapes, 0.0)
        .into_iter()
        .map(|s| s.bbox(0.0).unwrap().width())
        .collect();
    assert_eq!(order, vec![2.0, 3.0, 1.0]);
}

#[test]
fn points_markup_joins_pairs() {
    assert_eq!(
        points_markup(&[Point::new(1.0, 2.0), Point::new(3.5, 4.0)]),
        "1,2 3.5,4"
    );
    assert_eq!(latest([]), Time::NEG_INFINITY);
}
