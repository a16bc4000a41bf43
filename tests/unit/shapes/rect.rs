use super::*;
use kurbo::Rect;

#[test]
fn bbox_spans_corner_to_far_corner() {
    let r = Rectangle::new(300.0, 200.0, Point::new(350.0, 400.0), 0.0, &StyleMap::new());
    assert_eq!(r.bbox(0.0).unwrap(), Rect::new(350.0, 400.0, 650.0, 600.0));
}

#[test]
fn markup_carries_geometry_and_style() {
    let styles = StyleMap::new().with("fill", "#ff0000").unwrap();
    let r = Rectangle::new(30.0, 20.0, Point::new(1.0, 2.0), 0.0, &styles);
    assert_eq!(
        r.to_markup(0.0),
        "<rect x='1' y='2' width='30' height='20' rx='0' ry='0' fill='rgb(255,0,0)' \
         fill-opacity='0.7' stroke='rgb(255,255,255)' stroke-width='3' />"
    );
}

#[test]
fn rounded_corners_stay_inside_the_box() {
    let r = Rectangle::new(100.0, 50.0, Point::ZERO, 0.0, &StyleMap::new()).with_corners(10.0, 10.0);
    let path = r.path(0.0).unwrap();
    assert!(path.is_closed());
    assert_eq!(path.segments().len(), 8);
    let bbox = r.bbox(0.0).unwrap();
    assert!((bbox.x1 - 100.0).abs() < 1e-6);
    assert!((bbox.y1 - 50.0).abs() < 1e-6);
    assert!(path.length() < 300.0);
    assert!(r.to_markup(0.0).contains("rx='10' ry='10'"));
}

#[test]
fn animated_shift_eases_corner() {
    let r = Rectangle::new(10.0, 10.0, Point::ZERO, 0.0, &StyleMap::new());
    r.shift(20.0, 40.0, 0.0, Some(2.0), Ease::Linear).unwrap();
    assert_eq!(r.x.at(1.0), 10.0);
    assert_eq!(r.y.at(1.0), 20.0);
    assert_eq!(r.y.at(5.0), 40.0);
    assert_eq!(r.last_change(), 2.0);
}
